use std::sync::Arc;
use tracing::{error, info};
use library_manager::core::domain::Configuration;
use library_manager::gateway::factory::create_notifier;
use library_manager::gateway::observer::PatronObserver;
use library_manager::utils::logging::setup_tracing;
use library_manager::{BookBuilder, LibraryManager, LibraryResult, LibraryService};

// Walks one book through the catalog: a patron subscribes, the book is added,
// loaned and returned, and a second return is refused.
fn main() -> LibraryResult<()> {
    setup_tracing();

    let config = Configuration::from_env()?;
    let notifier = create_notifier(config.notifier, config.branch_id.as_str());
    let library = LibraryManager::new(&config, notifier);

    library.add_observer(Arc::new(PatronObserver::new("user01")));

    let builder = BookBuilder::new()
        .with_title("El Gran Gatsby")
        .with_author("F. Scott Fitzgerald")
        .with_identifier("123456789");
    let report = library.add_book(builder.build())?;
    info!(notified = report.notified, failures = report.failures.len(), "book added");

    let loan = library.loan_book("123456789", "user01")?;
    info!(loan_id = loan.loan_id.as_str(), due_at = %loan.due_at, "loan created");

    let _ = library.return_book("123456789", "user01")?;

    if let Err(err) = library.return_book("123456789", "user01") {
        error!(error = %err, "second return refused");
    }
    info!(books = library.list_books().len(), loans = library.active_loans().len(), "done");
    Ok(())
}
