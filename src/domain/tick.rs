use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub enum IngestTrigger {
    Startup,
    Cron(String),
}

impl IngestTrigger {
    pub fn label(&self) -> &str {
        match self {
            IngestTrigger::Startup => "startup",
            IngestTrigger::Cron(spec) => spec.as_str(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IngestTick {
    pub trigger: IngestTrigger,
    pub requested_at: DateTime<Utc>,
}

impl IngestTick {
    pub fn new(trigger: IngestTrigger) -> Self {
        Self {
            trigger,
            requested_at: Utc::now(),
        }
    }
}
