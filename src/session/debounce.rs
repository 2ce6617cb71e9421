use std::future::Future;
use std::time::Duration;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Coalesces bursts of calls into one delayed task.
///
/// Every `schedule` cancels the task still waiting out its delay and starts
/// a new wait. A task whose delay has already elapsed is not interrupted.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<CancellationToken>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule<F>(&self, task: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        if let Some(previous) = self.pending.lock().replace(token.clone()) {
            previous.cancel();
        }

        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    trace!("debounced task superseded");
                }
                _ = tokio::time::sleep(delay) => {
                    task.await;
                }
            }
        })
    }

    /// Drop the waiting task, if any
    pub fn cancel(&self) {
        if let Some(token) = self.pending.lock().take() {
            token.cancel();
        }
    }
}
