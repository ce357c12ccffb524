use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::loans::domain::model::Loan;
use crate::utils::date::serializer;

// LoanDto abstracts the book that is loaned to a borrower.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanDto {
    pub loan_id: String,
    pub identifier: String,
    pub borrower: String,
    #[serde(with = "serializer")]
    pub loaned_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
}

impl From<&Loan> for LoanDto {
    fn from(other: &Loan) -> LoanDto {
        LoanDto {
            loan_id: other.loan_id.to_string(),
            identifier: other.identifier.to_string(),
            borrower: other.borrower.to_string(),
            loaned_at: other.loaned_at,
            due_at: other.due_at,
        }
    }
}
