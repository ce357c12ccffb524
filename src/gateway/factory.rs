use std::sync::Arc;
use crate::gateway::console::notifier::LogNotifier;
use crate::gateway::notification::NotificationSink;
use crate::gateway::NotifierVia;

pub fn create_notifier(via: NotifierVia, branch_id: &str) -> Arc<dyn NotificationSink> {
    match via {
        NotifierVia::Log => {
            Arc::new(LogNotifier::new(format!("library-{}", branch_id).as_str()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::gateway::{factory, NotifierVia};

    #[tokio::test]
    async fn test_should_create_notifiers() {
        let notifier = factory::create_notifier(NotifierVia::Log, "test");
        let _ = notifier.send_notification("user01", "message").expect("should send");
    }
}
