use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewPost, Post};

/// Typed queries against the posts table
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Post>, DatabaseError> {
        let posts =
            sqlx::query_as::<_, Post>("SELECT * FROM posts ORDER BY created_at DESC, id DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(posts)
    }

    pub async fn create(&self, owner_id: Uuid, post: &NewPost) -> Result<Post, DatabaseError> {
        let created = sqlx::query_as::<_, Post>(
            "INSERT INTO posts (title, content, published, rating, owner_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.published)
        .bind(post.rating)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DatabaseError> {
        let post = sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(post)
    }

    /// Fetch a post or fail with NotFound, for handlers that 404 on absence
    pub async fn find_404(&self, id: Uuid) -> Result<Post, DatabaseError> {
        self.find_by_id(id).await?.ok_or_else(|| {
            DatabaseError::NotFound(format!("Post with id {} was not found", id))
        })
    }

    /// Full replacement of the mutable fields. Ownership checks belong to the
    /// handler; this only writes.
    pub async fn update(&self, id: Uuid, post: &NewPost) -> Result<Post, DatabaseError> {
        let updated = sqlx::query_as::<_, Post>(
            "UPDATE posts SET title = $1, content = $2, published = $3, rating = $4 \
             WHERE id = $5 RETURNING *",
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.published)
        .bind(post.rating)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
