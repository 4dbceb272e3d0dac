//! Core catalog graph structure.
//!
//! The ShelfGraph owns the book list, the adjacency rows, the availability
//! flags and the category index, and keeps them in lockstep. Ids are plain
//! positions in the book list, so every structure is indexed by the same
//! dense id space and removal renumbers all of them together.

use crate::book::{Book, BookId};
use crate::edge::Edge;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// The library catalog and its connectivity graph.
///
/// This is the single engine instance everything else talks to. All
/// operations are synchronous and validate their ids up front, so a
/// returned error never leaves partial state behind.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ShelfGraph {
    /// Books in id order. `books[i].id == i` at all times.
    pub(crate) books: Vec<Book>,

    /// Adjacency rows, one per book, edges in insertion order.
    /// Symmetric: an edge `a -> b` always has its mirror `b -> a`.
    pub(crate) adjacency: Vec<Vec<Edge>>,

    /// Loan flags, one per book. `true` means on the shelf.
    pub(crate) available: Vec<bool>,

    /// Maps category name to member ids in tagging order.
    pub(crate) categories: HashMap<String, Vec<BookId>>,
}

impl ShelfGraph {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects ids outside the live range `0..len`.
    pub(crate) fn check_id(&self, id: BookId) -> Result<(), CatalogError> {
        if id < self.books.len() {
            Ok(())
        } else {
            Err(CatalogError::InvalidId {
                id,
                len: self.books.len(),
            })
        }
    }

    /// Appends a new book and returns its id.
    ///
    /// The id is the current catalog size. The book starts available and
    /// untagged. Never fails.
    pub fn add_book(&mut self, title: impl Into<String>, author: impl Into<String>) -> BookId {
        let id = self.books.len();
        self.books.push(Book::new(title, author, id));
        self.adjacency.push(Vec::new());
        self.available.push(true);
        debug!(id, "added book");
        id
    }

    /// Overwrites a book's title, author and category in place.
    pub fn modify_book(
        &mut self,
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<(), CatalogError> {
        self.check_id(id)?;
        let book = &mut self.books[id];
        book.title = title.into();
        book.author = author.into();
        book.category = category.into();
        Ok(())
    }

    /// Removes a book and renumbers the catalog.
    ///
    /// Every surviving book with a higher id shifts down by one, and the
    /// adjacency rows, availability flags and category member lists are
    /// relabeled to match. After this returns, live ids are again exactly
    /// `0..len` and every cross-reference points at the right book.
    pub fn remove_book(&mut self, id: BookId) -> Result<(), CatalogError> {
        self.check_id(id)?;

        // Drop the removed book's row and every edge pointing at it,
        // then shift the endpoints above it.
        self.adjacency.remove(id);
        for row in &mut self.adjacency {
            row.retain(|edge| edge.to != id);
            for edge in row.iter_mut() {
                if edge.to > id {
                    edge.to -= 1;
                }
            }
        }

        self.books.remove(id);
        for (index, book) in self.books.iter_mut().enumerate() {
            book.id = index;
        }

        self.available.remove(id);

        for members in self.categories.values_mut() {
            members.retain(|&member| member != id);
            for member in members.iter_mut() {
                if *member > id {
                    *member -= 1;
                }
            }
        }

        debug!(id, remaining = self.books.len(), "removed book and renumbered");
        Ok(())
    }

    /// Connects two distinct books with an undirected unit-weight edge.
    ///
    /// Parallel edges are not deduplicated; connecting the same pair twice
    /// stores two edges. Self-loops and out-of-range ids are reported.
    pub fn connect(&mut self, id1: BookId, id2: BookId) -> Result<(), CatalogError> {
        self.check_id(id1)?;
        self.check_id(id2)?;
        if id1 == id2 {
            return Err(CatalogError::SelfLoop { id: id1 });
        }

        self.adjacency[id1].push(Edge::unit(id2));
        self.adjacency[id2].push(Edge::unit(id1));
        debug!(id1, id2, "connected books");
        Ok(())
    }

    /// Whether a direct edge exists between the two books.
    ///
    /// Out-of-range ids yield `false`, not an error.
    pub fn are_connected(&self, id1: BookId, id2: BookId) -> bool {
        match self.adjacency.get(id1) {
            Some(row) => row.iter().any(|edge| edge.to == id2),
            None => false,
        }
    }

    /// Books one edge away from `id`, in edge-insertion order.
    pub fn neighbors_of(&self, id: BookId) -> Result<Vec<&Book>, CatalogError> {
        self.check_id(id)?;
        Ok(self.adjacency[id]
            .iter()
            .map(|edge| &self.books[edge.to])
            .collect())
    }

    /// Gets a book by id.
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.get(id)
    }

    /// Iterates over all books in id order.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Returns the number of books.
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Returns the number of undirected connections.
    pub fn edge_count(&self) -> usize {
        // Each connection is stored once per endpoint.
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }
}

/// Catalog statistics for the summary screen and export header.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShelfStats {
    pub book_count: usize,
    pub edge_count: usize,
    pub categories: usize,
    pub borrowed: usize,
}

impl ShelfGraph {
    /// Returns catalog statistics.
    pub fn stats(&self) -> ShelfStats {
        ShelfStats {
            book_count: self.book_count(),
            edge_count: self.edge_count(),
            categories: self.categories.len(),
            borrowed: self.available.iter().filter(|open| !**open).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> ShelfGraph {
        let mut graph = ShelfGraph::new();
        graph.add_book("Dune", "Frank Herbert");
        graph.add_book("Hyperion", "Dan Simmons");
        graph.add_book("Solaris", "Stanislaw Lem");
        graph
    }

    #[test]
    fn test_add_assigns_dense_ids() {
        let mut graph = ShelfGraph::new();
        assert_eq!(graph.add_book("a", "x"), 0);
        assert_eq!(graph.add_book("b", "y"), 1);
        assert_eq!(graph.add_book("c", "z"), 2);

        for (index, book) in graph.books().enumerate() {
            assert_eq!(book.id, index);
        }
    }

    #[test]
    fn test_connect_is_symmetric() {
        let mut graph = sample_catalog();
        graph.connect(0, 2).unwrap();

        assert!(graph.are_connected(0, 2));
        assert!(graph.are_connected(2, 0));
        assert!(!graph.are_connected(0, 1));
    }

    #[test]
    fn test_connect_rejects_self_loop_and_bad_ids() {
        let mut graph = sample_catalog();

        assert_eq!(graph.connect(1, 1), Err(CatalogError::SelfLoop { id: 1 }));
        assert_eq!(
            graph.connect(0, 9),
            Err(CatalogError::InvalidId { id: 9, len: 3 })
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_are_connected_out_of_range_is_false() {
        let graph = sample_catalog();
        assert!(!graph.are_connected(0, 99));
        assert!(!graph.are_connected(99, 0));
    }

    #[test]
    fn test_neighbors_in_insertion_order() {
        let mut graph = sample_catalog();
        graph.connect(0, 2).unwrap();
        graph.connect(0, 1).unwrap();

        let names: Vec<&str> = graph
            .neighbors_of(0)
            .unwrap()
            .iter()
            .map(|book| book.title.as_str())
            .collect();
        assert_eq!(names, vec!["Solaris", "Hyperion"]);
    }

    #[test]
    fn test_modify_overwrites_all_fields() {
        let mut graph = sample_catalog();
        graph.modify_book(1, "Endymion", "Dan Simmons", "sf").unwrap();

        let book = graph.get(1).unwrap();
        assert_eq!(book.title, "Endymion");
        assert_eq!(book.category, "sf");

        assert_eq!(
            graph.modify_book(7, "t", "a", ""),
            Err(CatalogError::InvalidId { id: 7, len: 3 })
        );
    }

    #[test]
    fn test_remove_renumbers_and_relabels_edges() {
        // a(0) b(1) c(2), edge 0-2. Removing 1 must leave c as id 1
        // with the 0-2 edge surviving as 0-1.
        let mut graph = sample_catalog();
        graph.connect(0, 2).unwrap();

        graph.remove_book(1).unwrap();

        assert_eq!(graph.book_count(), 2);
        assert_eq!(graph.get(1).unwrap().title, "Solaris");
        assert!(graph.are_connected(0, 1));
        assert!(graph.are_connected(1, 0));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_remove_drops_incident_edges() {
        let mut graph = sample_catalog();
        graph.connect(0, 1).unwrap();
        graph.connect(1, 2).unwrap();

        graph.remove_book(1).unwrap();

        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.are_connected(0, 1));
    }

    #[test]
    fn test_ids_stay_dense_across_add_remove() {
        let mut graph = ShelfGraph::new();
        for n in 0..5 {
            graph.add_book(format!("book{n}"), "author");
        }
        graph.remove_book(0).unwrap();
        graph.remove_book(2).unwrap();
        graph.add_book("late", "author");

        let ids: Vec<BookId> = graph.books().map(|book| book.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_remove_invalid_id_leaves_catalog_untouched() {
        let mut graph = sample_catalog();
        graph.connect(0, 1).unwrap();

        assert_eq!(
            graph.remove_book(3),
            Err(CatalogError::InvalidId { id: 3, len: 3 })
        );
        assert_eq!(graph.book_count(), 3);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_remove_shifts_availability_flags() {
        let mut graph = sample_catalog();
        graph.borrow(2).unwrap();

        graph.remove_book(0).unwrap();

        // Old id 2 is now 1 and must still be out on loan.
        assert!(!graph.is_available(1).unwrap());
        assert!(graph.is_available(0).unwrap());
        let ids: Vec<BookId> = graph.list_borrowed().iter().map(|book| book.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_stats_counts() {
        let mut graph = sample_catalog();
        graph.connect(0, 1).unwrap();
        graph.borrow(2).unwrap();
        graph.tag(0, "sf").unwrap();

        let stats = graph.stats();
        assert_eq!(stats.book_count, 3);
        assert_eq!(stats.edge_count, 1);
        assert_eq!(stats.categories, 1);
        assert_eq!(stats.borrowed, 1);
    }
}
