// Two-tier handler architecture:
// Public (no auth, token acquisition) → Protected (Bearer token required)
pub mod protected;
pub mod public;
