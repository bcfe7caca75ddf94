use chrono::{DateTime, Utc};

use crate::domain::types::Category;

/// A scraped post shaped for insertion, after classification and URL cleanup.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub source_post_id: String,
    pub category: Category,
    pub details: Option<String>,
    pub author_name: Option<String>,
    pub contact_facebook_url: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
}
