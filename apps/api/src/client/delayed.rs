use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// A future scheduled to run after a delay. Dropping the handle aborts it,
/// so a delayed task never outlives the owner that scheduled it.
#[derive(Debug)]
pub struct DelayedTask {
    handle: JoinHandle<()>,
}

impl DelayedTask {
    pub fn schedule<F>(delay: Duration, task: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });
        Self { handle }
    }

    pub fn cancel(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for DelayedTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn flag_task(flag: &Arc<AtomicBool>) -> impl Future<Output = ()> + Send + 'static {
        let flag = flag.clone();
        async move { flag.store(true, Ordering::SeqCst) }
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_after_delay() {
        let fired = Arc::new(AtomicBool::new(false));
        let task = DelayedTask::schedule(Duration::from_secs(2), flag_task(&fired));

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(!fired.load(Ordering::SeqCst));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(fired.load(Ordering::SeqCst));
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_run() {
        let fired = Arc::new(AtomicBool::new(false));
        let task = DelayedTask::schedule(Duration::from_secs(2), flag_task(&fired));
        task.cancel();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts() {
        let fired = Arc::new(AtomicBool::new(false));
        {
            let _task = DelayedTask::schedule(Duration::from_secs(1), flag_task(&fired));
        }
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }
}
