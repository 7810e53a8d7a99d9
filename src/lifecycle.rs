//! View lifecycle tracking for async lookups.
//!
//! A view owns a `ViewLifecycle`; the host keeps a `LifecycleHandle` and
//! tears the view down with it. Lookups started by the view race the
//! teardown and their results are dropped once it has happened.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

/// Cancellation state owned by a view.
pub struct ViewLifecycle {
    sender: Arc<watch::Sender<bool>>,
    receiver: watch::Receiver<bool>,
}

/// Host-side handle that ends the view's lifecycle.
#[derive(Clone)]
pub struct LifecycleHandle {
    sender: Arc<watch::Sender<bool>>,
}

impl LifecycleHandle {
    /// Mark the view as torn down. Idempotent.
    pub fn teardown(&self) {
        self.sender.send_replace(true);
    }
}

impl ViewLifecycle {
    pub fn new() -> Self {
        let (sender, receiver) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
            receiver,
        }
    }

    pub fn handle(&self) -> LifecycleHandle {
        LifecycleHandle {
            sender: self.sender.clone(),
        }
    }

    pub fn is_torn_down(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Run `fut` until it completes or the view is torn down.
    ///
    /// Returns `None` if teardown happened first, or had already happened.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        if self.is_torn_down() {
            return None;
        }
        let mut receiver = self.receiver.clone();
        tokio::select! {
            biased;
            _ = receiver.wait_for(|torn_down| *torn_down) => None,
            output = fut => {
                // A result that lands after teardown is stale
                if self.is_torn_down() { None } else { Some(output) }
            }
        }
    }
}

impl Default for ViewLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_completes_while_alive() {
        let lifecycle = ViewLifecycle::new();
        assert_eq!(lifecycle.run(async { 7 }).await, Some(7));
    }

    #[tokio::test]
    async fn test_run_after_teardown_is_none() {
        let lifecycle = ViewLifecycle::new();
        lifecycle.handle().teardown();
        assert!(lifecycle.is_torn_down());
        assert_eq!(lifecycle.run(async { 7 }).await, None);
    }

    #[tokio::test]
    async fn test_teardown_interrupts_pending_lookup() {
        let lifecycle = ViewLifecycle::new();
        let handle = lifecycle.handle();
        let (result, _) = tokio::join!(
            lifecycle.run(std::future::pending::<u32>()),
            async move { handle.teardown() }
        );
        assert_eq!(result, None);
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let lifecycle = ViewLifecycle::new();
        let handle = lifecycle.handle();
        handle.teardown();
        handle.clone().teardown();
        assert!(lifecycle.is_torn_down());
    }
}
