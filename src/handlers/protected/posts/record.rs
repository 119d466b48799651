// Record-level post operations: GET/PUT/DELETE /posts/:id
//
// Mutation goes 404-before-403: a missing post answers NotFound even to a
// caller who would not have owned it, matching the read path.

use axum::{extract::Path, Extension, Json};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::models::{NewPost, Post};
use crate::database::{DatabaseManager, PostRepository};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};

/// GET /posts/:id - Fetch a single post. 404 when absent.
pub async fn record_get(
    Extension(_auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<Post> {
    let pool = DatabaseManager::pool().await?;
    let post = PostRepository::new(pool).find_404(id).await?;

    Ok(ApiResponse::success(post))
}

/// PUT /posts/:id - Replace a post's fields. Owner only.
pub async fn record_put(
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<NewPost>,
) -> ApiResult<Post> {
    payload
        .validate()
        .map_err(|field_errors| ApiError::unprocessable_entity("Invalid post fields", field_errors))?;

    let pool = DatabaseManager::pool().await?;
    let repository = PostRepository::new(pool);

    let existing = repository.find_404(id).await?;
    if existing.owner_id != auth.user_id {
        return Err(ApiError::forbidden(
            "Not authorized to perform requested action",
        ));
    }

    let updated = repository.update(id, &payload).await?;
    Ok(ApiResponse::success(updated))
}

/// DELETE /posts/:id - Remove a post. Owner only.
pub async fn record_delete(
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<Value> {
    let pool = DatabaseManager::pool().await?;
    let repository = PostRepository::new(pool);

    let existing = repository.find_404(id).await?;
    if existing.owner_id != auth.user_id {
        return Err(ApiError::forbidden(
            "Not authorized to perform requested action",
        ));
    }

    repository.delete(id).await?;

    tracing::info!(post_id = %id, "deleted post");
    Ok(ApiResponse::success(json!({ "message": "Post deleted" })))
}
