use std::sync::{Mutex, PoisonError};
use tracing::debug;
use crate::core::library::LibraryResult;
use crate::gateway::notification::NotificationSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub borrower: String,
    pub message: String,
}

// MemoryNotifier keeps every message it is asked to deliver, in delivery order.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn sent_to(&self, borrower: &str) -> Vec<Notification> {
        self.sent().into_iter().filter(|n| n.borrower == borrower).collect()
    }
}

impl NotificationSink for MemoryNotifier {
    fn send_notification(&self, borrower: &str, message: &str) -> LibraryResult<()> {
        debug!(borrower, message, "recording notification");
        self.sent.lock().unwrap_or_else(PoisonError::into_inner).push(Notification {
            borrower: borrower.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::gateway::memory::notifier::MemoryNotifier;
    use crate::gateway::notification::NotificationSink;

    #[tokio::test]
    async fn test_should_record_notifications() {
        let notifier = MemoryNotifier::new();
        let _ = notifier.send_notification("user01", "first").expect("should send");
        let _ = notifier.send_notification("user02", "second").expect("should send");
        let _ = notifier.send_notification("user01", "third").expect("should send");
        assert_eq!(3, notifier.sent().len());
        let to_user01: Vec<String> = notifier.sent_to("user01").into_iter().map(|n| n.message).collect();
        assert_eq!(vec!["first".to_string(), "third".to_string()], to_user01);
    }
}
