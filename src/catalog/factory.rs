use std::sync::Arc;
use tracing::info;
use crate::catalog::domain::LibraryService;
use crate::catalog::domain::service::LibraryManager;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_notifier;
use crate::gateway::observer::PatronObserver;

pub fn create_library_service(config: &Configuration) -> Arc<dyn LibraryService> {
    let notifier = create_notifier(config.notifier, config.branch_id.as_str());
    let library = Arc::new(LibraryManager::new(config, notifier));
    for subscriber in &config.subscribers {
        library.add_observer(Arc::new(PatronObserver::new(subscriber)));
    }
    info!(branch = config.branch_id.as_str(), loan_policy = %config.loan_policy,
        duplicate_policy = %config.duplicate_policy, notifier = %config.notifier,
        subscribers = config.subscribers.len(), "library service created");
    library
}
