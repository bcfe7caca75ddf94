use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use chrono_tz::Tz;

use crate::{
    classifier,
    config::AppConfig,
    db::posts::PostRepository,
    domain::{IngestTrigger, NewPost},
    ingest::urls::normalize_facebook_url,
    scraper::GroupFeedClient,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct IngestSummary {
    pub fetched: usize,
    pub inserted: usize,
    pub duplicates: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// One ingest cycle: fetch the group feed, classify each message, persist.
pub struct IngestRunner {
    scraper: GroupFeedClient,
    posts: Arc<PostRepository>,
    config: Arc<AppConfig>,
}

impl IngestRunner {
    pub fn new(
        scraper: GroupFeedClient,
        posts: Arc<PostRepository>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            scraper,
            posts,
            config,
        }
    }

    /// Runs a full fetch-classify-insert cycle. A failed upstream fetch fails
    /// the whole run; a failed insert only loses that one post.
    pub async fn run(&self, trigger: &IngestTrigger) -> Result<IngestSummary> {
        let page = self.scraper.fetch_posts().await?;

        let mut summary = IngestSummary {
            fetched: page.posts.len(),
            ..Default::default()
        };

        for post in &page.posts {
            let Some(source_post_id) = post.post_id.as_deref() else {
                tracing::warn!(target: "ingest", "scraped post without post_id; skipping");
                summary.skipped += 1;
                continue;
            };

            // Scraped posts carry no explicit category, so the classifier
            // backfills one from the message text.
            let category = classifier::classify(post.message.as_deref().unwrap_or(""));
            let author = post.author.as_ref();
            let record = NewPost {
                source_post_id: source_post_id.to_string(),
                category,
                details: post.message.clone(),
                author_name: author.and_then(|a| a.name.clone()),
                contact_facebook_url: normalize_facebook_url(
                    author.and_then(|a| a.url.as_deref()),
                ),
                posted_at: post.posted_at(),
            };

            match self.posts.insert(&record).await {
                Ok(true) => summary.inserted += 1,
                Ok(false) => summary.duplicates += 1,
                Err(err) => {
                    tracing::error!(
                        target: "ingest",
                        error = %err,
                        source_post_id,
                        "failed to insert post; continuing"
                    );
                    summary.failed += 1;
                }
            }
        }

        let tz: Tz = self
            .config
            .timezone
            .parse()
            .unwrap_or(chrono_tz::Asia::Ho_Chi_Minh);
        tracing::info!(
            target: "ingest",
            trigger = trigger.label(),
            fetched = summary.fetched,
            inserted = summary.inserted,
            duplicates = summary.duplicates,
            skipped = summary.skipped,
            failed = summary.failed,
            finished_at = %Utc::now().with_timezone(&tz).format("%Y-%m-%d %H:%M:%S"),
            "ingest run finished"
        );

        Ok(summary)
    }
}
