use std::future::Future;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Runs only the most recent call, `wait` after it was made.
#[derive(Debug)]
pub struct Debouncer {
    wait: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    pub fn call<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }
        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!("No async runtime, debounced call dropped");
            return;
        };
        let wait = self.wait;
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(wait).await;
            action.await;
        }));
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
