mod client;
pub mod types;

pub use client::GroupFeedClient;
pub use types::{FeedPage, PostAuthor, ScrapedPost};
