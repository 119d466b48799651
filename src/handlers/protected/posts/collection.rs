// Collection-level post operations: GET /posts and POST /posts

use axum::{Extension, Json};

use crate::database::models::{NewPost, Post};
use crate::database::{DatabaseManager, PostRepository};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};

/// GET /posts - List all posts visible to the caller (no filtering)
pub async fn collection_get(Extension(_auth): Extension<AuthUser>) -> ApiResult<Vec<Post>> {
    let pool = DatabaseManager::pool().await?;
    let posts = PostRepository::new(pool).list().await?;

    Ok(ApiResponse::success(posts))
}

/// POST /posts - Create a post owned by the caller
///
/// Validates the payload (422 with field errors on failure), then inserts with
/// `owner_id` taken from the token, never from the body. Returns 201.
pub async fn collection_post(
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<NewPost>,
) -> ApiResult<Post> {
    payload
        .validate()
        .map_err(|field_errors| ApiError::unprocessable_entity("Invalid post fields", field_errors))?;

    let pool = DatabaseManager::pool().await?;
    let post = PostRepository::new(pool)
        .create(auth.user_id, &payload)
        .await?;

    tracing::info!(post_id = %post.id, owner_id = %post.owner_id, "created post");
    Ok(ApiResponse::created(post))
}
