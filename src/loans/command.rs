pub mod list_loans_cmd;
pub mod loan_book_cmd;
pub mod return_book_cmd;
