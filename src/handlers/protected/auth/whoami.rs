// GET /auth/whoami - resolve the caller's token back to their user record

use axum::Extension;

use crate::database::models::User;
use crate::database::{DatabaseManager, UserRepository};
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};

/// GET /auth/whoami - Return the authenticated caller's user record.
///
/// The token already proves identity; this re-reads the row so clients get
/// current fields rather than whatever was true at token issue time.
pub async fn whoami_get(Extension(auth): Extension<AuthUser>) -> ApiResult<User> {
    let pool = DatabaseManager::pool().await?;
    let user = UserRepository::new(pool).find_404(auth.user_id).await?;

    Ok(ApiResponse::success(user))
}
