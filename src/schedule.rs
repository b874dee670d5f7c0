//! Cancellable scheduled tasks and a trailing-edge debouncer
//!
//! `schedule(delay, action)` returns a [`ScheduledTask`]. Cancelling the
//! handle before the delay elapses drops the action without running it. Once
//! the delay elapses the action is spawned as its own task, so cancelling
//! afterwards does not interrupt work that already started.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Handle to an action waiting on a timer
#[derive(Debug)]
pub struct ScheduledTask {
    timer: JoinHandle<()>,
}

impl ScheduledTask {
    /// Stop the action from firing. No effect if it already fired.
    pub fn cancel(&self) {
        self.timer.abort();
    }

    /// True once the timer fired or was cancelled
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}

/// Run `action` on the current runtime after `delay`.
pub fn schedule<F>(delay: Duration, action: F) -> ScheduledTask
where
    F: Future<Output = ()> + Send + 'static,
{
    let timer = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        tokio::spawn(action);
    });
    ScheduledTask { timer }
}

/// Single-timer trailing-edge debouncer.
///
/// Each call to [`Debouncer::call`] cancels the pending action (if any) and
/// starts a fresh delay. There is no leading-edge call and no max-wait cap.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<ScheduledTask>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending action with `action`, due after the full delay.
    pub fn call<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.pending = Some(schedule(self.delay, action));
    }

    /// Drop the pending action without running it.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }

    /// Whether an action is still waiting on its timer
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[tokio::test(start_paused = true)]
    async fn test_schedule_fires_after_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let _task = schedule(Duration::from_millis(300), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_task_never_fires() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let task = schedule(Duration::from_millis(300), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        task.cancel();

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debouncer_keeps_only_last_call() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        for value in ["s", "sh", "sho", "shoe"] {
            let seen = seen.clone();
            debouncer.call(async move {
                seen.lock().unwrap().push(value);
            });
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(250)).await;
        tokio::task::yield_now().await;
        assert_eq!(*seen.lock().unwrap(), vec!["shoe"]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_fire_does_not_abort_action() {
        let done = Arc::new(AtomicUsize::new(0));
        let counter = done.clone();
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        debouncer.call(async move {
            tokio::time::sleep(Duration::from_millis(500)).await;
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(20)).await;
        debouncer.cancel();

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(done.load(Ordering::SeqCst), 1);
    }
}
