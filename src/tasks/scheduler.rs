use std::sync::Arc;

use anyhow::Result;
use tokio_cron_scheduler::{Job, JobScheduler};

pub type IngestCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Registers one cron job per spec; each firing hands its spec label to the
/// callback, which enqueues an ingest trigger.
pub async fn configure_ingest_jobs(
    cron_specs: &[String],
    callback: IngestCallback,
) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;
    for spec in cron_specs {
        let label = spec.clone();
        let cb = callback.clone();
        let job = Job::new_async(spec.as_str(), move |_id, _l| {
            let cb = cb.clone();
            let cron_label = label.clone();
            Box::pin(async move {
                tracing::info!(target: "scheduler", cron = %cron_label, "ingest job triggered");
                cb(&cron_label);
            })
        })?;
        scheduler.add(job).await?;
        tracing::info!(target: "scheduler", cron = %spec, "ingest job registered");
    }
    scheduler.start().await?;
    Ok(scheduler)
}
