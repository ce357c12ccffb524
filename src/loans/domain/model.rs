use chrono::{Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::date::serializer;

// Loan records an active borrowing of the book with the given identifier.
// It is created by loan_book and dropped again by the matching return_book.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub loan_id: String,
    pub identifier: String,
    pub borrower: String,
    #[serde(with = "serializer")]
    pub loaned_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
}

impl Loan {
    pub fn new(identifier: &str, borrower: &str, loan_days: i64) -> LibraryResult<Self> {
        let now = Utc::now().naive_utc();
        let due_at = Duration::try_days(loan_days)
            .and_then(|period| now.checked_add_signed(period))
            .ok_or_else(|| LibraryError::validation(
                format!("loan period of {} days is out of range", loan_days).as_str(), Some("400".to_string())))?;
        Ok(Self {
            loan_id: Uuid::new_v4().to_string(),
            identifier: identifier.to_string(),
            borrower: borrower.to_string(),
            loaned_at: now,
            due_at,
        })
    }

    pub fn matches(&self, identifier: &str, borrower: &str) -> bool {
        self.identifier == identifier && self.borrower == borrower
    }
}
