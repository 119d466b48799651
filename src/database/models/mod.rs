pub mod post;
pub mod user;

pub use post::{NewPost, Post};
pub use user::User;
