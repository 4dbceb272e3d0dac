//! Book records for the catalog.

use serde::{Deserialize, Serialize};

/// Identifier of a book in the catalog.
///
/// Ids are dense and contiguous: at any point the live ids are exactly
/// `0..book_count`. Removing a book renumbers everything above it.
pub type BookId = usize;

/// A catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Position in the catalog. Changes when an earlier book is removed.
    pub id: BookId,

    pub title: String,

    pub author: String,

    /// Current category tag. Empty string means untagged.
    pub category: String,
}

impl Book {
    /// Creates an untagged book.
    pub fn new(title: impl Into<String>, author: impl Into<String>, id: BookId) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            category: String::new(),
        }
    }

    /// Whether the book carries a category tag.
    pub fn is_tagged(&self) -> bool {
        !self.category.is_empty()
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} \"{}\" by {}", self.id, self.title, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_book_is_untagged() {
        let book = Book::new("Dune", "Frank Herbert", 0);
        assert!(!book.is_tagged());
        assert_eq!(book.id, 0);
    }

    #[test]
    fn test_serializes_with_category_field() {
        let mut book = Book::new("Dune", "Frank Herbert", 3);
        book.category = "fiction".to_string();

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["category"], "fiction");
    }
}
