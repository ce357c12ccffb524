use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::NotifierVia;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
pub const MAX_LOAN_DAYS: i64 = 3650;

// LoanPolicy decides whether a book identifier may be lent to several borrowers at once.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum LoanPolicy {
    // every catalog entry stands for any number of physical copies
    MultipleCopies,
    // a catalog entry is a single copy, at most one active loan per identifier
    SingleCopy,
}

impl TryFrom<&str> for LoanPolicy {
    type Error = LibraryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "multiple-copies" => Ok(LoanPolicy::MultipleCopies),
            "single-copy" => Ok(LoanPolicy::SingleCopy),
            _ => Err(LibraryError::validation(
                format!("unknown loan policy {}", s).as_str(), Some("400".to_string()))),
        }
    }
}

impl Display for LoanPolicy {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LoanPolicy::MultipleCopies => write!(f, "multiple-copies"),
            LoanPolicy::SingleCopy => write!(f, "single-copy"),
        }
    }
}

// DuplicatePolicy decides what add_book does with an identifier already in the catalog.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    Allow,
    Reject,
}

impl TryFrom<&str> for DuplicatePolicy {
    type Error = LibraryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "allow" => Ok(DuplicatePolicy::Allow),
            "reject" => Ok(DuplicatePolicy::Reject),
            _ => Err(LibraryError::validation(
                format!("unknown duplicate policy {}", s).as_str(), Some("400".to_string()))),
        }
    }
}

impl Display for DuplicatePolicy {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DuplicatePolicy::Allow => write!(f, "allow"),
            DuplicatePolicy::Reject => write!(f, "reject"),
        }
    }
}

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub loan_policy: LoanPolicy,
    pub duplicate_policy: DuplicatePolicy,
    pub book_loan_days: i64,
    pub notifier: NotifierVia,
    pub subscribers: Vec<String>,
    pub listen_addr: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            loan_policy: LoanPolicy::MultipleCopies,
            duplicate_policy: DuplicatePolicy::Allow,
            book_loan_days: 15,
            notifier: NotifierVia::Log,
            subscribers: vec![],
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }

    pub fn with_loan_policy(mut self, loan_policy: LoanPolicy) -> Self {
        self.loan_policy = loan_policy;
        self
    }

    pub fn with_duplicate_policy(mut self, duplicate_policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = duplicate_policy;
        self
    }

    /// Reads `LIBRARY_*` environment variables, falling back to defaults for unset ones.
    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let branch = lookup("LIBRARY_BRANCH").unwrap_or_else(|| "dev".to_string());
        let mut config = Configuration::new(branch.as_str());
        if let Some(policy) = lookup("LIBRARY_LOAN_POLICY") {
            config.loan_policy = LoanPolicy::try_from(policy.trim())?;
        }
        if let Some(policy) = lookup("LIBRARY_DUPLICATE_POLICY") {
            config.duplicate_policy = DuplicatePolicy::try_from(policy.trim())?;
        }
        if let Some(days) = lookup("LIBRARY_LOAN_DAYS") {
            config.book_loan_days = days.trim().parse::<i64>().map_err(|err| LibraryError::validation(
                format!("invalid loan days {} {}", days, err).as_str(), Some("400".to_string())))?;
            if !(1..=MAX_LOAN_DAYS).contains(&config.book_loan_days) {
                return Err(LibraryError::validation(
                    format!("loan days must be between 1 and {} {}", MAX_LOAN_DAYS, days).as_str(),
                    Some("400".to_string())));
            }
        }
        if let Some(via) = lookup("LIBRARY_NOTIFIER") {
            config.notifier = NotifierVia::try_from(via.trim())?;
        }
        if let Some(subscribers) = lookup("LIBRARY_SUBSCRIBERS") {
            config.subscribers = subscribers.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(addr) = lookup("LIBRARY_LISTEN_ADDR") {
            config.listen_addr = addr.trim().to_string();
        }
        Ok(config)
    }
}
