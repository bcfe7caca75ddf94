use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One page of group posts as returned by the scraper API.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedPage {
    #[serde(default)]
    pub posts: Vec<ScrapedPost>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScrapedPost {
    #[serde(default)]
    pub post_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub author: Option<PostAuthor>,
    /// Unix timestamp (seconds) of the original post, when the API provides one.
    #[serde(default)]
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostAuthor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl ScrapedPost {
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_feed_page_with_extra_fields() {
        let payload = r#"{
            "posts": [
                {
                    "post_id": "1234567890",
                    "message": "Cần tìm xe HN - HL sáng mai",
                    "timestamp": 1739426400,
                    "reactions_count": 3,
                    "author": {
                        "id": "100012345678901",
                        "name": "Nguyễn Văn A",
                        "url": "https://www.facebook.com/groups/142026696530246/user/100012345678901/"
                    }
                },
                {
                    "post_id": "1234567891"
                }
            ],
            "cursor": "abc"
        }"#;

        let page: FeedPage = serde_json::from_str(payload).expect("feed page parses");
        assert_eq!(page.posts.len(), 2);

        let first = &page.posts[0];
        assert_eq!(first.post_id.as_deref(), Some("1234567890"));
        assert_eq!(first.message.as_deref(), Some("Cần tìm xe HN - HL sáng mai"));
        assert!(first.posted_at().is_some());
        let author = first.author.as_ref().expect("author present");
        assert_eq!(author.name.as_deref(), Some("Nguyễn Văn A"));

        let second = &page.posts[1];
        assert!(second.message.is_none());
        assert!(second.author.is_none());
        assert!(second.posted_at().is_none());
    }

    #[test]
    fn empty_object_yields_no_posts() {
        let page: FeedPage = serde_json::from_str("{}").expect("empty page parses");
        assert!(page.posts.is_empty());
    }
}
