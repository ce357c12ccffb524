use serde::{Deserialize, Serialize};

// Book is an immutable catalog entry, keyed by its identifier (usually the ISBN).
// Instances are produced by BookBuilder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    identifier: String,
}

impl Book {
    pub(crate) fn new(title: &str, author: &str, identifier: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            identifier: identifier.to_string(),
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    pub fn identifier(&self) -> &str {
        self.identifier.as_str()
    }
}
