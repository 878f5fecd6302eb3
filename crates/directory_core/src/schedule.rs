//! Cancellable delayed actions on the tokio timer.

use std::time::Duration;

use tokio::task::JoinHandle;

pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Drops the action if its delay has not elapsed yet.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

pub fn schedule<F>(delay: Duration, action: F) -> ScheduledTask
where
    F: FnOnce() + Send + 'static,
{
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        action();
    });
    ScheduledTask { handle }
}

/// Trailing-edge debounce: each `schedule` cancels the pending action, so only
/// the last one inside a quiet window runs.
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

    pub fn schedule<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        self.pending = Some(schedule(self.delay, action));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "tests/schedule_tests.rs"]
mod tests;
