use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use tracing::{debug, info, warn};
use crate::books::domain::model::Book;
use crate::catalog::domain::LibraryService;
use crate::core::domain::{Configuration, DuplicatePolicy, LoanPolicy};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::notification::NotificationSink;
use crate::gateway::observer::{BookObserver, DispatchReport, ObserverFailure};
use crate::loans::domain::model::Loan;

static INSTANCE: OnceLock<Arc<LibraryManager>> = OnceLock::new();

// Catalog, active loans and observer registry share one lock so that a
// check-then-apply step (e.g. find loan, remove loan) is atomic.
#[derive(Default)]
struct LibraryState {
    books: Vec<Book>,
    loans: Vec<Loan>,
    observers: Vec<Arc<dyn BookObserver>>,
}

// Lock order is dispatch then state. Holding dispatch across add_book keeps
// observer callbacks in the same order as the catalog.

pub struct LibraryManager {
    branch_id: String,
    loan_policy: LoanPolicy,
    duplicate_policy: DuplicatePolicy,
    book_loan_days: i64,
    notifier: Arc<dyn NotificationSink>,
    dispatch: Mutex<()>,
    state: Mutex<LibraryState>,
}

impl fmt::Debug for LibraryManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("LibraryManager")
            .field("branch_id", &self.branch_id)
            .field("loan_policy", &self.loan_policy)
            .field("duplicate_policy", &self.duplicate_policy)
            .field("book_loan_days", &self.book_loan_days)
            .field("books", &state.books)
            .field("loans", &state.loans)
            .field("observers_count", &state.observers.len())
            .finish()
    }
}

impl LibraryManager {
    pub fn new(config: &Configuration, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            loan_policy: config.loan_policy,
            duplicate_policy: config.duplicate_policy,
            book_loan_days: config.book_loan_days,
            notifier,
            dispatch: Mutex::new(()),
            state: Mutex::new(LibraryState::default()),
        }
    }

    /// Returns the process-wide manager, creating it with `notifier` on the first call.
    ///
    /// Later calls return the same instance and ignore their argument. Prefer
    /// [`LibraryManager::new`] and passing the manager around explicitly.
    pub fn get_instance(notifier: Arc<dyn NotificationSink>) -> Arc<LibraryManager> {
        INSTANCE.get_or_init(|| {
            info!("creating process-wide library manager");
            Arc::new(LibraryManager::new(&Configuration::new("default"), notifier))
        }).clone()
    }

    fn lock(&self) -> MutexGuard<'_, LibraryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify_observers(&self, observers: &[Arc<dyn BookObserver>], book: &Book) -> DispatchReport {
        let mut report = DispatchReport::default();
        for observer in observers {
            match observer.on_book_added(book) {
                Ok(()) => {
                    report.notified += 1;
                }
                Err(err) => {
                    warn!(observer = observer.name().as_str(), identifier = book.identifier(),
                        error = %err, "observer failed on book added");
                    report.failures.push(ObserverFailure {
                        observer: observer.name(),
                        message: err.to_string(),
                    });
                }
            }
        }
        report
    }

    fn notify_borrower(&self, borrower: &str, message: &str) {
        if let Err(err) = self.notifier.send_notification(borrower, message) {
            warn!(borrower, error = %err, "failed to notify borrower");
        }
    }
}

impl LibraryService for LibraryManager {
    fn add_book(&self, book: Book) -> LibraryResult<DispatchReport> {
        let _dispatch = self.dispatch.lock().unwrap_or_else(PoisonError::into_inner);
        let observers = {
            let mut state = self.lock();
            if self.duplicate_policy == DuplicatePolicy::Reject
                && state.books.iter().any(|b| b.identifier() == book.identifier()) {
                warn!(identifier = book.identifier(), "rejecting duplicate book");
                return Err(LibraryError::duplicate_key(
                    format!("book {} already exists", book.identifier()).as_str()));
            }
            state.books.push(book.clone());
            state.observers.clone()
        };
        info!(branch = self.branch_id.as_str(), identifier = book.identifier(),
            title = book.title(), "book added");
        Ok(self.notify_observers(&observers, &book))
    }

    fn remove_book(&self, identifier: &str) -> Option<Book> {
        let mut state = self.lock();
        let index = state.books.iter().position(|b| b.identifier() == identifier)?;
        let removed = state.books.remove(index);
        info!(branch = self.branch_id.as_str(), identifier, "book removed");
        Some(removed)
    }

    fn search_by_title(&self, title: &str) -> Vec<Book> {
        self.lock().books.iter().filter(|b| b.title().contains(title)).cloned().collect()
    }

    fn search_by_author(&self, author: &str) -> Vec<Book> {
        self.lock().books.iter().filter(|b| b.author().contains(author)).cloned().collect()
    }

    fn search_by_identifier(&self, identifier: &str) -> Option<Book> {
        self.lock().books.iter().find(|b| b.identifier() == identifier).cloned()
    }

    fn list_books(&self) -> Vec<Book> {
        self.lock().books.clone()
    }

    fn loan_book(&self, identifier: &str, borrower: &str) -> LibraryResult<Loan> {
        let (book, loan) = {
            let mut state = self.lock();
            let book = match state.books.iter().find(|b| b.identifier() == identifier) {
                Some(book) => book.clone(),
                None => {
                    warn!(identifier, borrower, "loan requested for unknown book");
                    return Err(LibraryError::not_found(
                        format!("book does not exist {}", identifier).as_str()));
                }
            };
            if self.loan_policy == LoanPolicy::SingleCopy
                && state.loans.iter().any(|l| l.identifier == identifier) {
                warn!(identifier, borrower, "book is already on loan");
                return Err(LibraryError::invalid_operation(
                    format!("book {} is already on loan", identifier).as_str(), Some("409".to_string())));
            }
            let loan = Loan::new(identifier, borrower, self.book_loan_days)?;
            state.loans.push(loan.clone());
            (book, loan)
        };
        info!(branch = self.branch_id.as_str(), identifier, borrower,
            loan_id = loan.loan_id.as_str(), "book loaned");
        self.notify_borrower(borrower, format!("You have borrowed the book {}", book.title()).as_str());
        Ok(loan)
    }

    fn return_book(&self, identifier: &str, borrower: &str) -> LibraryResult<Loan> {
        let (loan, cataloged) = {
            let mut state = self.lock();
            let index = match state.loans.iter().position(|l| l.matches(identifier, borrower)) {
                Some(index) => index,
                None => {
                    warn!(identifier, borrower, "return without matching loan");
                    return Err(LibraryError::invalid_operation(
                        format!("loan does not exist or wrong borrower {} {}", identifier, borrower).as_str(),
                        Some("400".to_string())));
                }
            };
            let loan = state.loans.remove(index);
            let cataloged = state.books.iter().any(|b| b.identifier() == identifier);
            (loan, cataloged)
        };
        info!(branch = self.branch_id.as_str(), identifier, borrower,
            loan_id = loan.loan_id.as_str(), "book returned");
        if cataloged {
            self.notify_borrower(borrower,
                                 format!("You have returned the book with identifier {}. Thank you!", identifier).as_str());
        } else {
            debug!(identifier, "returned book is no longer cataloged, skipping notification");
        }
        Ok(loan)
    }

    fn active_loans(&self) -> Vec<Loan> {
        self.lock().loans.clone()
    }

    fn add_observer(&self, observer: Arc<dyn BookObserver>) {
        debug!(observer = observer.name().as_str(), "observer registered");
        self.lock().observers.push(observer);
    }
}
