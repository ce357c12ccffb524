use tracing::info;
use crate::core::library::LibraryResult;
use crate::gateway::notification::NotificationSink;

// LogNotifier stands in for an email gateway by emitting one log event per message.
#[derive(Debug, Default)]
pub struct LogNotifier {
    sender: String,
}

impl LogNotifier {
    pub fn new(sender: &str) -> Self {
        Self {
            sender: sender.to_string(),
        }
    }
}

impl NotificationSink for LogNotifier {
    fn send_notification(&self, borrower: &str, message: &str) -> LibraryResult<()> {
        info!(sender = self.sender.as_str(), borrower, message, "sending email");
        Ok(())
    }
}
