//! Loan tracking and popularity ranking.
//!
//! Availability is a single flag per book. The popularity metric is the
//! historical one: a book's count is how many *other* currently-borrowed
//! books it is directly connected to, so it measures co-incidence of
//! connectivity and loan status rather than the book's own loan history.
//! That definition is kept as specified.

use crate::book::{Book, BookId};
use crate::error::CatalogError;
use crate::graph::ShelfGraph;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A book with its popularity count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedBook {
    pub book: Book,
    pub count: usize,
}

impl ShelfGraph {
    /// Marks a book as borrowed.
    pub fn borrow(&mut self, id: BookId) -> Result<(), CatalogError> {
        self.check_id(id)?;
        if !self.available[id] {
            return Err(CatalogError::AlreadyBorrowed { id });
        }
        self.available[id] = false;
        debug!(id, "borrowed book");
        Ok(())
    }

    /// Marks a borrowed book as returned.
    pub fn return_book(&mut self, id: BookId) -> Result<(), CatalogError> {
        self.check_id(id)?;
        if self.available[id] {
            return Err(CatalogError::NotBorrowed { id });
        }
        self.available[id] = true;
        debug!(id, "returned book");
        Ok(())
    }

    /// Whether the book is on the shelf.
    pub fn is_available(&self, id: BookId) -> Result<bool, CatalogError> {
        self.check_id(id)?;
        Ok(self.available[id])
    }

    /// Currently borrowed books, in ascending id order.
    pub fn list_borrowed(&self) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| !self.available[book.id])
            .collect()
    }

    /// Ranks every book by its popularity count, descending.
    ///
    /// Ties keep catalog order (stable sort).
    pub fn rank_by_popularity(&self) -> Vec<RankedBook> {
        let mut ranked: Vec<RankedBook> = self
            .books
            .iter()
            .map(|book| {
                let count = self
                    .books
                    .iter()
                    .filter(|other| {
                        other.id != book.id
                            && !self.available[other.id]
                            && self.are_connected(book.id, other.id)
                    })
                    .count();
                RankedBook {
                    book: book.clone(),
                    count,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }
}
