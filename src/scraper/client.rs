use anyhow::{Context, Result};
use reqwest::Client;

use crate::config::ScraperConfig;

use super::types::FeedPage;

/// Thin client for the hosted group-feed scraper API.
#[derive(Clone)]
pub struct GroupFeedClient {
    http: Client,
    config: ScraperConfig,
}

impl GroupFeedClient {
    pub fn new(http: Client, config: ScraperConfig) -> Self {
        Self { http, config }
    }

    /// Fetches the latest page of group posts. One page per run; the feed is
    /// polled often enough that pagination is not needed.
    pub async fn fetch_posts(&self) -> Result<FeedPage> {
        let url = format!("https://{}/group/posts", self.config.host);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("group_id", self.config.group_id.as_str()),
                ("sorting_order", self.config.sorting_order.as_str()),
            ])
            .header("x-rapidapi-host", &self.config.host)
            .header("x-rapidapi-key", &self.config.api_key)
            .timeout(self.config.fetch_timeout)
            .send()
            .await
            .with_context(|| format!("failed to reach scraper API at {url}"))?
            .error_for_status()
            .context("scraper API returned an error status")?;

        let page = response
            .json::<FeedPage>()
            .await
            .context("scraper API returned an unexpected payload")?;
        Ok(page)
    }
}
