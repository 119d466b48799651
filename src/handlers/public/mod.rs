// Public handlers: no authentication required. These endpoints exist to hand
// out tokens; everything else lives behind the JWT middleware.
pub mod auth;
