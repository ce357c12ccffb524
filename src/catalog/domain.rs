use std::sync::Arc;
use crate::books::domain::model::Book;
use crate::core::library::LibraryResult;
use crate::gateway::observer::{BookObserver, DispatchReport};
use crate::loans::domain::model::Loan;

pub mod service;

// LibraryService is the method surface of the catalog owner. Searches and listings
// return books in catalog (insertion) order.
pub trait LibraryService: Sync + Send {
    fn add_book(&self, book: Book) -> LibraryResult<DispatchReport>;
    fn remove_book(&self, identifier: &str) -> Option<Book>;
    fn search_by_title(&self, title: &str) -> Vec<Book>;
    fn search_by_author(&self, author: &str) -> Vec<Book>;
    fn search_by_identifier(&self, identifier: &str) -> Option<Book>;
    fn list_books(&self) -> Vec<Book>;
    fn loan_book(&self, identifier: &str, borrower: &str) -> LibraryResult<Loan>;
    fn return_book(&self, identifier: &str, borrower: &str) -> LibraryResult<Loan>;
    fn active_loans(&self) -> Vec<Loan>;
    fn add_observer(&self, observer: Arc<dyn BookObserver>);
}
