// Post CRUD handlers, split collection vs record like the data tier routes.

pub mod collection; // GET/POST /posts
pub mod record;     // GET/PUT/DELETE /posts/:id

pub use collection::{collection_get, collection_post};
pub use record::{record_delete, record_get, record_put};
