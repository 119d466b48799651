// Protected handlers: every route in this tier sits behind the JWT middleware
// and reads the caller from `Extension<AuthUser>`.
pub mod auth;
pub mod posts;
pub mod users;
