use tokio::sync::watch;

/// Why the daemon is stopping; the worker and run loop log it on their way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// CTRL+C or SIGTERM.
    Signal,
    /// The ingest worker task exited on its own.
    WorkerExit,
}

impl ShutdownReason {
    pub fn label(self) -> &'static str {
        match self {
            ShutdownReason::Signal => "signal",
            ShutdownReason::WorkerExit => "worker-exit",
        }
    }
}

/// Broadcast stop flag. The first trigger wins; its reason is what every
/// listener observes, including listeners subscribed after the fact.
#[derive(Clone)]
pub struct Shutdown {
    sender: watch::Sender<Option<ShutdownReason>>,
}

#[derive(Clone)]
pub struct ShutdownListener {
    receiver: watch::Receiver<Option<ShutdownReason>>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self { sender }
    }

    pub fn subscribe(&self) -> ShutdownListener {
        ShutdownListener {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn trigger(&self, reason: ShutdownReason) {
        self.sender.send_if_modified(|slot| {
            if slot.is_none() {
                *slot = Some(reason);
                true
            } else {
                false
            }
        });
    }
}

impl ShutdownListener {
    /// Waits until shutdown is triggered and returns its reason. Returns
    /// immediately when the trigger already happened.
    pub async fn notified(&mut self) -> ShutdownReason {
        loop {
            if let Some(reason) = *self.receiver.borrow() {
                return reason;
            }
            if self.receiver.changed().await.is_err() {
                // Sender dropped without an explicit trigger; the process is
                // tearing down anyway.
                return ShutdownReason::Signal;
            }
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.receiver.borrow().is_some()
    }
}
