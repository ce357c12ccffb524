//! In-memory library catalog: books, active loans, new-book observers and
//! borrower notifications, plus the HTTP commands that drive them.

pub mod books;
pub mod catalog;
pub mod core;
pub mod gateway;
pub mod loans;
pub mod utils;

pub use books::builder::BookBuilder;
pub use books::domain::model::Book;
pub use catalog::domain::LibraryService;
pub use catalog::domain::service::LibraryManager;
pub use core::library::{LibraryError, LibraryResult};
pub use gateway::notification::NotificationSink;
pub use gateway::observer::{BookObserver, DispatchReport};
pub use loans::domain::model::Loan;
