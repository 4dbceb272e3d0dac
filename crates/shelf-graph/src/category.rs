//! Category tagging and lookup.
//!
//! A book's `category` field holds its current tag. The index keeps the
//! id in every category it was ever tagged with; re-tagging does not
//! remove the old membership, so a book can be listed under several
//! categories while the field names only the latest.

use crate::book::{Book, BookId};
use crate::error::CatalogError;
use crate::graph::ShelfGraph;
use tracing::debug;

impl ShelfGraph {
    /// Tags a book with a category.
    ///
    /// Overwrites the book's `category` field and appends the id to the
    /// category's member list if not already present.
    pub fn tag(&mut self, id: BookId, category: impl Into<String>) -> Result<(), CatalogError> {
        self.check_id(id)?;
        let category = category.into();

        let members = self.categories.entry(category.clone()).or_default();
        if !members.contains(&id) {
            members.push(id);
        }
        self.books[id].category = category;
        debug!(id, category = %self.books[id].category, "tagged book");
        Ok(())
    }

    /// Books tagged with `category`, in tagging order.
    ///
    /// Fails with `CategoryNotFound` only for a name no book was ever
    /// tagged with; a category emptied by removals lists as empty.
    pub fn list_by_category(&self, category: &str) -> Result<Vec<&Book>, CatalogError> {
        let members =
            self.categories
                .get(category)
                .ok_or_else(|| CatalogError::CategoryNotFound {
                    category: category.to_string(),
                })?;
        Ok(members.iter().map(|&id| &self.books[id]).collect())
    }
}
