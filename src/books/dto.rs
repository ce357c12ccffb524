use serde::{Deserialize, Serialize};
use crate::books::builder::BookBuilder;
use crate::books::domain::model::Book;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub identifier: String,
}

impl BookDto {
    pub fn new(title: &str, author: &str, identifier: &str) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            identifier: identifier.to_string(),
        }
    }

    pub fn builder(&self) -> BookBuilder {
        BookBuilder::new()
            .with_title(self.title.as_str())
            .with_author(self.author.as_str())
            .with_identifier(self.identifier.as_str())
    }
}

impl From<&Book> for BookDto {
    fn from(other: &Book) -> Self {
        Self {
            title: other.title().to_string(),
            author: other.author().to_string(),
            identifier: other.identifier().to_string(),
        }
    }
}
