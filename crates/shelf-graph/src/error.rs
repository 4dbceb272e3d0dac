//! Error taxonomy for catalog operations.
//!
//! Every variant is recoverable: operations validate their id arguments
//! before touching any structure, so a returned error means nothing was
//! mutated. An unreachable destination is not an error — see
//! [`PathOutcome::NoPath`](crate::PathOutcome).

use crate::book::BookId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Id outside the live range `0..len`.
    #[error("book id {id} is out of range (catalog holds {len} books)")]
    InvalidId { id: BookId, len: usize },

    /// A book cannot be connected to itself.
    #[error("cannot connect book {id} to itself")]
    SelfLoop { id: BookId },

    /// Borrow attempted while the book is already out.
    #[error("book {id} is already borrowed")]
    AlreadyBorrowed { id: BookId },

    /// Return attempted while the book is on the shelf.
    #[error("book {id} is not currently borrowed")]
    NotBorrowed { id: BookId },

    /// Category name that no book was ever tagged with.
    #[error("category \"{category}\" has never been used")]
    CategoryNotFound { category: String },
}
