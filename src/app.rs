use std::{sync::Arc, time::Duration};

use anyhow::Result;
use reqwest::Client;
use tokio::{task::JoinHandle, time::timeout};
use tokio_cron_scheduler::JobScheduler;

use crate::{
    config::AppConfig,
    db::{self, posts::PostRepository},
    domain::{IngestTick, IngestTrigger},
    infrastructure::{
        directories::ResolvedPaths,
        shutdown::{Shutdown, ShutdownReason},
    },
    ingest::IngestRunner,
    scraper::GroupFeedClient,
    tasks::{
        queue::TriggerQueue,
        scheduler::{configure_ingest_jobs, IngestCallback},
        worker::IngestWorker,
    },
};

pub struct IngestApp {
    _paths: ResolvedPaths,
    scheduler: JobScheduler,
    worker_handle: JoinHandle<()>,
    queue: Arc<TriggerQueue<IngestTick>>,
    posts: Arc<PostRepository>,
    shutdown: Shutdown,
}

impl IngestApp {
    pub async fn initialize(config: AppConfig, paths: ResolvedPaths) -> Result<Self> {
        let config = Arc::new(config);
        let shutdown = Shutdown::new();
        install_signal_handlers(&shutdown);

        let pool = db::init_pool(&paths.db_path).await?;
        let posts = Arc::new(PostRepository::new(pool));

        let http_client = Client::builder()
            .user_agent(format!("xeghep-ingest/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        let scraper = GroupFeedClient::new(http_client, config.scraper.clone());
        let runner = Arc::new(IngestRunner::new(scraper, posts.clone(), config.clone()));

        let queue = Arc::new(TriggerQueue::<IngestTick>::new());
        let worker = Arc::new(IngestWorker::new(queue.clone(), runner));
        let worker_handle = worker.spawn(shutdown.subscribe());

        // Kick off one run right away so a fresh deployment does not wait for
        // the first cron firing.
        queue.push(IngestTick::new(IngestTrigger::Startup));

        let callback: IngestCallback = {
            let queue = queue.clone();
            Arc::new(move |spec: &str| {
                queue.push(IngestTick::new(IngestTrigger::Cron(spec.to_string())));
            })
        };
        let scheduler = configure_ingest_jobs(&config.scheduler.cron_specs, callback).await?;

        Ok(Self {
            _paths: paths,
            scheduler,
            worker_handle,
            queue,
            posts,
            shutdown,
        })
    }

    pub async fn run(self) -> Result<()> {
        let IngestApp {
            _paths: _,
            mut scheduler,
            mut worker_handle,
            queue,
            posts,
            shutdown,
        } = self;

        tracing::info!("ride-post ingest service started");
        match posts.count().await {
            Ok(total) => {
                tracing::info!(target: "db", total, "posts already in store");
            }
            Err(err) => {
                tracing::warn!(target: "db", error = %err, "failed to read post count");
            }
        }
        if let Ok(rows) = posts.count_by_category().await {
            for (post_type, count) in rows {
                tracing::info!(target: "db", post_type = %post_type, count, "existing posts");
            }
        }

        let mut shutdown_listener = shutdown.subscribe();
        let shutdown_timeout = Duration::from_secs(5);
        let mut worker_completed = false;

        tokio::select! {
            reason = shutdown_listener.notified() => {
                tracing::info!(reason = reason.label(), "shutdown requested");
            }
            res = &mut worker_handle => {
                worker_completed = true;
                if let Err(err) = res {
                    tracing::error!(?err, "ingest worker exited unexpectedly");
                } else {
                    tracing::warn!("ingest worker exited before shutdown was requested");
                }
                shutdown.trigger(ShutdownReason::WorkerExit);
            }
        }

        let pending = queue.snapshot().pending;
        if pending > 0 {
            tracing::info!(pending, "dropping queued ingest triggers on shutdown");
        }

        match timeout(shutdown_timeout, scheduler.shutdown()).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                tracing::error!(?err, "scheduler shutdown failed");
            }
            Err(_) => {
                tracing::warn!(
                    target: "scheduler",
                    "scheduler did not stop within {:?}",
                    shutdown_timeout
                );
            }
        }

        if !worker_completed {
            let worker_sleep = tokio::time::sleep(shutdown_timeout);
            tokio::pin!(worker_sleep);
            tokio::select! {
                res = &mut worker_handle => {
                    if let Err(err) = res {
                        if err.is_panic() {
                            tracing::error!("ingest worker task panicked");
                        }
                    }
                }
                _ = &mut worker_sleep => {
                    tracing::warn!(
                        target: "worker",
                        "ingest worker did not stop within {:?}; aborting task",
                        shutdown_timeout
                    );
                    worker_handle.abort();
                }
            }
        }

        if timeout(shutdown_timeout, posts.close()).await.is_err() {
            tracing::warn!(
                target: "db",
                "database pool did not close within {:?}",
                shutdown_timeout
            );
        }

        tracing::info!("ride-post ingest service stopped");
        Ok(())
    }
}

fn install_signal_handlers(shutdown: &Shutdown) {
    let ctrlc = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrlc.trigger(ShutdownReason::Signal);
        }
    });

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let term = shutdown.clone();
        tokio::spawn(async move {
            if let Ok(mut sig) = signal(SignalKind::terminate()) {
                sig.recv().await;
                term.trigger(ShutdownReason::Signal);
            }
        });
    }
}
