use anyhow::Result;
use sqlx::sqlite::SqlitePool;

use crate::domain::NewPost;

#[derive(Clone)]
pub struct PostRepository {
    pool: SqlitePool,
}

impl PostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Inserts a scraped post, ignoring posts already ingested from the same
    /// source. Returns whether a new row landed.
    pub async fn insert(&self, post: &NewPost) -> Result<bool> {
        let affected = sqlx::query(
            r#"INSERT OR IGNORE INTO posts
                (source_post_id, post_type, details, author_name, contact_facebook_url, posted_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
        )
        .bind(&post.source_post_id)
        .bind(post.category.as_str())
        .bind(&post.details)
        .bind(&post.author_name)
        .bind(&post.contact_facebook_url)
        .bind(post.posted_at)
        .execute(&self.pool)
        .await?
        .rows_affected();
        Ok(affected > 0)
    }

    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM posts"#)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Row counts per `post_type`, for the startup summary log.
    pub async fn count_by_category(&self) -> Result<Vec<(String, i64)>> {
        let rows: Vec<(String, i64)> =
            sqlx::query_as(r#"SELECT post_type, COUNT(*) FROM posts GROUP BY post_type"#)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db,
        domain::{Category, NewPost},
    };

    fn sample(source_post_id: &str, category: Category) -> NewPost {
        NewPost {
            source_post_id: source_post_id.to_string(),
            category,
            details: Some("Cần tìm xe HN - HL sáng mai".to_string()),
            author_name: Some("Nguyễn Văn A".to_string()),
            contact_facebook_url: Some(
                "https://www.facebook.com/profile.php?id=100012345678901".to_string(),
            ),
            posted_at: None,
        }
    }

    async fn repo() -> PostRepository {
        let pool = db::memory_pool().await.expect("in-memory pool");
        PostRepository::new(pool)
    }

    #[tokio::test]
    async fn insert_ignores_duplicate_source_posts() {
        let repo = repo().await;

        assert!(repo.insert(&sample("p1", Category::Request)).await.unwrap());
        assert!(!repo.insert(&sample("p1", Category::Request)).await.unwrap());

        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn count_reports_total_rows() {
        let repo = repo().await;
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.insert(&sample("p1", Category::Offer)).await.unwrap();
        repo.insert(&sample("p2", Category::Request)).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn count_by_category_groups_rows() {
        let repo = repo().await;
        repo.insert(&sample("p1", Category::Offer)).await.unwrap();
        repo.insert(&sample("p2", Category::Request)).await.unwrap();
        repo.insert(&sample("p3", Category::Request)).await.unwrap();

        let mut rows = repo.count_by_category().await.unwrap();
        rows.sort();
        assert_eq!(
            rows,
            vec![("offer".to_string(), 1), ("request".to_string(), 2)]
        );
    }
}
