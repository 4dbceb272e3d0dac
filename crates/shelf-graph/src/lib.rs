//! Shelf Graph - Library catalog connectivity engine
//!
//! This crate models a small library catalog as an undirected graph of
//! books. Connections carry a fixed unit weight, so the shortest path
//! between two books is the one with the fewest hops. Alongside the graph
//! it tracks loan status and category tags and keeps every id-keyed
//! structure consistent as books come and go.
//!
//! # Architecture
//!
//! A single [`ShelfGraph`] owns four structures indexed by the same dense
//! id space:
//! - the book list (ids are positions, `0..len`)
//! - adjacency rows of unit-weight undirected edges
//! - per-book availability flags
//! - a category index in tagging order
//!
//! Removal renumbers everything above the removed id in one step, which is
//! the crate's central invariant: live ids are always exactly `0..len`.
//!
//! # Example
//!
//! ```
//! use shelf_graph::{PathOutcome, ShelfGraph};
//!
//! let mut shelf = ShelfGraph::new();
//! let dune = shelf.add_book("Dune", "Frank Herbert");
//! let hyperion = shelf.add_book("Hyperion", "Dan Simmons");
//! shelf.connect(dune, hyperion)?;
//!
//! match shelf.shortest_path(dune, hyperion)? {
//!     PathOutcome::Found(route) => assert_eq!(route.len(), 2),
//!     PathOutcome::NoPath => unreachable!(),
//! }
//! # Ok::<(), shelf_graph::CatalogError>(())
//! ```

mod book;
mod category;
mod edge;
mod error;
mod graph;
mod loans;
mod path;

pub use book::{Book, BookId};
pub use edge::{Edge, UNIT_WEIGHT};
pub use error::CatalogError;
pub use graph::{ShelfGraph, ShelfStats};
pub use loans::RankedBook;
pub use path::PathOutcome;
