//! Transient toast notifications with auto-dismiss.
//!
//! Contract: display, wait a fixed duration, clear. Each new message
//! supersedes the previous one and cancels its pending dismissal, so a
//! burst of messages yields exactly one timer, anchored to the latest.

use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

const DISMISS_AFTER: Duration = Duration::from_secs(4);

/// Presentation-owned toast state. Observers subscribe to the watch
/// channel; `None` means no toast is visible.
pub struct Toaster {
    sender: watch::Sender<Option<String>>,
    dismiss_task: Mutex<Option<JoinHandle<()>>>,
    dismiss_after: Duration,
}

impl Toaster {
    pub fn new() -> Self {
        Self::with_dismiss_after(DISMISS_AFTER)
    }

    pub fn with_dismiss_after(dismiss_after: Duration) -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender,
            dismiss_task: Mutex::new(None),
            dismiss_after,
        }
    }

    /// Subscribe to toast changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.sender.subscribe()
    }

    /// The currently visible message, if any.
    pub fn current(&self) -> Option<String> {
        self.sender.borrow().clone()
    }

    /// Display a message and schedule its dismissal, cancelling any
    /// dismissal still pending from an earlier message.
    pub fn show(&self, message: impl Into<String>) {
        let mut task = self
            .dismiss_task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(previous) = task.take() {
            previous.abort();
        }

        self.sender.send_replace(Some(message.into()));

        let sender = self.sender.clone();
        let dismiss_after = self.dismiss_after;
        *task = Some(tokio::spawn(async move {
            tokio::time::sleep(dismiss_after).await;
            sender.send_replace(None);
        }));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn toast_clears_after_the_dismiss_duration() {
        let toaster = Toaster::new();
        toaster.show("Saved");
        assert_eq!(toaster.current().as_deref(), Some("Saved"));

        tokio::time::sleep(DISMISS_AFTER + Duration::from_millis(10)).await;
        assert_eq!(toaster.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn new_message_supersedes_the_previous_timer() {
        let toaster = Toaster::new();
        toaster.show("First");

        // Halfway through the first timer, a second message arrives.
        tokio::time::sleep(DISMISS_AFTER / 2).await;
        toaster.show("Second");

        // The first timer would have fired here; the second message must
        // still be visible because its own timer restarted the clock.
        tokio::time::sleep(DISMISS_AFTER / 2 + Duration::from_millis(10)).await;
        assert_eq!(toaster.current().as_deref(), Some("Second"));

        tokio::time::sleep(DISMISS_AFTER).await;
        assert_eq!(toaster.current(), None);
    }
}
