use tracing::info;
use crate::books::domain::model::Book;
use crate::core::library::LibraryResult;

/// Receives a callback for every book added to the catalog.
///
/// Callbacks run synchronously, in registration order, before `add_book`
/// returns. An `Err` is reported in the [`DispatchReport`] of that call and
/// does not stop the remaining observers.
///
/// Concurrent `add_book` calls wait for the running dispatch, so observers see
/// books in catalog order. An observer may read the catalog or register
/// observers but must not call `add_book` itself.
pub trait BookObserver: Sync + Send {
    fn name(&self) -> String;
    fn on_book_added(&self, book: &Book) -> LibraryResult<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObserverFailure {
    pub observer: String,
    pub message: String,
}

// DispatchReport sums up one fan-out of a new book to the registered observers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DispatchReport {
    pub notified: usize,
    pub failures: Vec<ObserverFailure>,
}

impl DispatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

// PatronObserver tells a patron about new arrivals.
#[derive(Debug, Clone)]
pub struct PatronObserver {
    patron_id: String,
}

impl PatronObserver {
    pub fn new(patron_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
        }
    }
}

impl BookObserver for PatronObserver {
    fn name(&self) -> String {
        format!("patron:{}", self.patron_id)
    }

    fn on_book_added(&self, book: &Book) -> LibraryResult<()> {
        info!(patron = self.patron_id.as_str(), title = book.title(),
            identifier = book.identifier(), "patron notified of new book");
        Ok(())
    }
}
