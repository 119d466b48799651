// POST /auth/register - create a new user account

use axum::response::Json;
use serde::Deserialize;
use std::collections::HashMap;

use crate::auth::password;
use crate::database::models::User;
use crate::database::{DatabaseManager, UserRepository};
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};

use super::utils::{validate_email_format, validate_password_strength};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// POST /auth/register - Register a new user account
///
/// Input: `{ "email": "...", "password": "..." }`
///
/// Responses:
/// - 201: created user (password hash omitted)
/// - 422: invalid email format or weak password, with per-field errors
/// - 409: email already registered
pub async fn register_post(Json(payload): Json<RegisterRequest>) -> ApiResult<User> {
    let mut field_errors = HashMap::new();
    if let Err(msg) = validate_email_format(&payload.email) {
        field_errors.insert("email".to_string(), msg);
    }
    if let Err(msg) = validate_password_strength(&payload.password) {
        field_errors.insert("password".to_string(), msg);
    }
    if !field_errors.is_empty() {
        return Err(ApiError::unprocessable_entity(
            "Invalid registration fields",
            field_errors,
        ));
    }

    let password_hash = password::hash_password(&payload.password)?;

    let pool = DatabaseManager::pool().await?;
    let user = UserRepository::new(pool)
        .create(&payload.email, &password_hash)
        .await?;

    tracing::info!(user_id = %user.id, "registered new user");
    Ok(ApiResponse::created(user))
}
