use crate::books::domain::model::Book;

/// Stepwise constructor for [`Book`].
///
/// Setters may be called in any order or skipped; omitted fields default to an
/// empty string. `build` does not consume the builder, so every call returns an
/// independent book holding the fields configured at that moment.
#[derive(Debug, Clone, Default)]
pub struct BookBuilder {
    title: String,
    author: String,
    identifier: String,
}

impl BookBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    pub fn with_identifier(mut self, identifier: &str) -> Self {
        self.identifier = identifier.to_string();
        self
    }

    pub fn build(&self) -> Book {
        Book::new(self.title.as_str(), self.author.as_str(), self.identifier.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::builder::BookBuilder;

    #[tokio::test]
    async fn test_should_build_book_from_builder() {
        let book = BookBuilder::new()
            .with_title("El Gran Gatsby")
            .with_author("F. Scott Fitzgerald")
            .with_identifier("123456789")
            .build();
        assert_eq!("El Gran Gatsby", book.title());
        assert_eq!("F. Scott Fitzgerald", book.author());
        assert_eq!("123456789", book.identifier());
    }

    #[tokio::test]
    async fn test_should_default_omitted_fields_to_empty() {
        let book = BookBuilder::new().with_identifier("isbn").build();
        assert_eq!("", book.title());
        assert_eq!("", book.author());
        assert_eq!("isbn", book.identifier());
    }

    #[tokio::test]
    async fn test_should_accept_any_call_order() {
        let first = BookBuilder::new().with_identifier("i").with_author("a").with_title("t").build();
        let second = BookBuilder::new().with_title("t").with_author("a").with_identifier("i").build();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_should_snapshot_fields_on_each_build() {
        let builder = BookBuilder::new().with_title("first").with_identifier("1");
        let first = builder.build();
        let again = builder.build();
        let second = builder.with_title("second").build();
        assert_eq!(first, again);
        assert_eq!("first", first.title());
        assert_eq!("second", second.title());
        assert_eq!("1", second.identifier());
    }
}
