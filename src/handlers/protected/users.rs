// GET /users/:id - look up a user by id

use axum::{extract::Path, Extension};
use uuid::Uuid;

use crate::database::models::User;
use crate::database::{DatabaseManager, UserRepository};
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};

/// GET /users/:id - Fetch a user record. 404 when no such user exists.
pub async fn user_get(
    Extension(_auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<User> {
    let pool = DatabaseManager::pool().await?;
    let user = UserRepository::new(pool).find_404(id).await?;

    Ok(ApiResponse::success(user))
}
