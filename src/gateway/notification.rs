use crate::core::library::LibraryResult;

/// Delivers a text message to a borrower. Delivery guarantees belong to the
/// implementation; the catalog only reports failures, it never retries them.
pub trait NotificationSink: Sync + Send {
    fn send_notification(&self, borrower: &str, message: &str) -> LibraryResult<()>;
}
