mod runner;
pub mod urls;

pub use runner::{IngestRunner, IngestSummary};
