pub mod post;
pub mod tick;
pub mod types;

pub use post::NewPost;
pub use tick::{IngestTick, IngestTrigger};
pub use types::{Category, QueueSnapshot};
