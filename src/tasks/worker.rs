use std::{sync::Arc, time::Duration};

use anyhow::Result;
use tokio::{task::JoinHandle, time::sleep};

use crate::{
    domain::IngestTick, infrastructure::shutdown::ShutdownListener, ingest::IngestRunner,
    tasks::queue::TriggerQueue,
};

/// Drains ingest triggers off the queue and executes runs one at a time.
pub struct IngestWorker {
    queue: Arc<TriggerQueue<IngestTick>>,
    runner: Arc<IngestRunner>,
}

impl IngestWorker {
    pub fn new(queue: Arc<TriggerQueue<IngestTick>>, runner: Arc<IngestRunner>) -> Self {
        Self { queue, runner }
    }

    pub fn spawn(self: Arc<Self>, mut shutdown: ShutdownListener) -> JoinHandle<()> {
        tokio::spawn(async move {
            if let Err(err) = self.run_loop(&mut shutdown).await {
                tracing::error!(target: "worker", error = %err, "ingest worker crashed");
            }
        })
    }

    async fn run_loop(&self, shutdown: &mut ShutdownListener) -> Result<()> {
        loop {
            if shutdown.is_triggered() {
                break;
            }

            let ticks = self.queue.drain();
            if ticks.is_empty() {
                tokio::select! {
                    _ = sleep(Duration::from_millis(500)) => {}
                    reason = shutdown.notified() => {
                        tracing::debug!(
                            target: "worker",
                            reason = reason.label(),
                            "shutdown while idle"
                        );
                        break;
                    }
                }
                continue;
            }

            // Triggers queued while a run was in flight collapse into one run;
            // the latest tick names the run.
            if ticks.len() > 1 {
                tracing::info!(
                    target: "worker",
                    coalesced = ticks.len(),
                    "multiple ingest triggers pending; running once"
                );
            }
            let Some(tick) = ticks.into_iter().last() else {
                continue;
            };
            tracing::debug!(
                target: "worker",
                trigger = tick.trigger.label(),
                queued_for_ms = (chrono::Utc::now() - tick.requested_at).num_milliseconds(),
                "starting ingest run"
            );

            let run = self.runner.run(&tick.trigger);
            tokio::select! {
                res = run => {
                    if let Err(err) = res {
                        tracing::error!(
                            target: "worker",
                            error = %err,
                            trigger = tick.trigger.label(),
                            "ingest run failed"
                        );
                    }
                }
                reason = shutdown.notified() => {
                    tracing::info!(
                        target: "worker",
                        reason = reason.label(),
                        "shutdown requested during ingest run; aborting"
                    );
                    break;
                }
            }
        }
        tracing::info!(target: "worker", "ingest worker stopped");
        Ok(())
    }
}
