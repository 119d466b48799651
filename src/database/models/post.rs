use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub rating: Option<i32>,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

pub const TITLE_MAX_LEN: usize = 200;
pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;

/// Write payload for creating or fully replacing a post. Ownership is never
/// part of the payload; handlers take it from the authenticated caller.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    #[serde(default = "default_published")]
    pub published: bool,
    pub rating: Option<i32>,
}

fn default_published() -> bool {
    true
}

impl NewPost {
    /// Field-level constraints checked before any row is written. Errors are
    /// keyed by field name for 422 responses.
    pub fn validate(&self) -> Result<(), HashMap<String, String>> {
        let mut field_errors = HashMap::new();

        if self.title.trim().is_empty() {
            field_errors.insert("title".to_string(), "Title cannot be empty".to_string());
        } else if self.title.len() > TITLE_MAX_LEN {
            field_errors.insert(
                "title".to_string(),
                format!("Title must be at most {} characters", TITLE_MAX_LEN),
            );
        }

        if self.content.trim().is_empty() {
            field_errors.insert("content".to_string(), "Content cannot be empty".to_string());
        }

        if let Some(rating) = self.rating {
            if !(RATING_MIN..=RATING_MAX).contains(&rating) {
                field_errors.insert(
                    "rating".to_string(),
                    format!("Rating must be between {} and {}", RATING_MIN, RATING_MAX),
                );
            }
        }

        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(field_errors)
        }
    }
}
