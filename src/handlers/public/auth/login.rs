// POST /auth/login - authenticate and receive a JWT

use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::auth::{self, password, Claims};
use crate::config;
use crate::database::models::User;
use crate::database::{DatabaseManager, UserRepository};
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: &'static str,
    /// Token lifetime in seconds; there is no refresh endpoint, clients
    /// re-authenticate when this runs out.
    pub expires_in: u64,
    pub user: User,
}

/// POST /auth/login - Authenticate user credentials and return a JWT
///
/// Unknown email and wrong password both answer with the same 401 so the
/// endpoint cannot be used to probe which addresses are registered.
pub async fn login_post(Json(payload): Json<LoginRequest>) -> ApiResult<LoginResponse> {
    let pool = DatabaseManager::pool().await?;

    let user = UserRepository::new(pool)
        .find_by_email(&payload.email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    let password_ok = password::verify_password(&payload.password, &user.password_hash)?;
    if !password_ok {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = auth::generate_jwt(&Claims::new(user.id))?;

    tracing::info!(user_id = %user.id, "user logged in");
    Ok(ApiResponse::success(LoginResponse {
        token,
        token_type: "bearer",
        expires_in: config::config().security.jwt_expiry_hours * 3600,
        user,
    }))
}
