//! Single-source shortest paths over the connectivity graph.
//!
//! Classic lazy-deletion Dijkstra: a min-heap frontier keyed by distance,
//! duplicate pushes instead of decrease-key, stale pops skipped. With unit
//! weights this degenerates to breadth-first order, but the engine keeps
//! the general form so the weight field stays meaningful.

use crate::book::{Book, BookId};
use crate::error::CatalogError;
use crate::graph::ShelfGraph;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Terminal state of a shortest-path search.
///
/// An unreachable destination is a normal outcome, not an error; both
/// endpoints were validated before the search began.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathOutcome {
    /// Books along a shortest route, origin first, destination last.
    Found(Vec<Book>),

    /// The search ran to completion without reaching the destination.
    NoPath,
}

impl PathOutcome {
    /// Number of hops in the found path, if any.
    pub fn hops(&self) -> Option<usize> {
        match self {
            PathOutcome::Found(books) => Some(books.len() - 1),
            PathOutcome::NoPath => None,
        }
    }
}

impl ShelfGraph {
    /// Finds a shortest route between two books.
    ///
    /// Fails with `InvalidId` before searching if either endpoint is out
    /// of range. `origin == dest` yields the single-element path.
    pub fn shortest_path(
        &self,
        origin: BookId,
        dest: BookId,
    ) -> Result<PathOutcome, CatalogError> {
        self.check_id(origin)?;
        self.check_id(dest)?;

        let len = self.books.len();
        let mut dist = vec![u32::MAX; len];
        let mut pred: Vec<Option<BookId>> = vec![None; len];
        let mut frontier = BinaryHeap::new();

        dist[origin] = 0;
        frontier.push(Reverse((0u32, origin)));

        while let Some(Reverse((d, u))) = frontier.pop() {
            if d > dist[u] {
                // Stale entry from an earlier duplicate push.
                continue;
            }
            for edge in &self.adjacency[u] {
                let next = d + edge.weight;
                if next < dist[edge.to] {
                    dist[edge.to] = next;
                    pred[edge.to] = Some(u);
                    frontier.push(Reverse((next, edge.to)));
                }
            }
        }

        // Walk predecessor links back from the destination. The walk
        // terminates at a node with no predecessor; only if that node is
        // the origin does a route exist.
        let mut walk = vec![dest];
        let mut current = dest;
        while let Some(previous) = pred[current] {
            walk.push(previous);
            current = previous;
        }
        if current != origin {
            return Ok(PathOutcome::NoPath);
        }

        walk.reverse();
        Ok(PathOutcome::Found(
            walk.into_iter().map(|id| self.books[id].clone()).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_of(count: usize) -> ShelfGraph {
        // 0 - 1 - 2 - ... connected in a line.
        let mut graph = ShelfGraph::new();
        for n in 0..count {
            graph.add_book(format!("book{n}"), "author");
        }
        for n in 1..count {
            graph.connect(n - 1, n).unwrap();
        }
        graph
    }

    fn ids(outcome: &PathOutcome) -> Vec<BookId> {
        match outcome {
            PathOutcome::Found(books) => books.iter().map(|book| book.id).collect(),
            PathOutcome::NoPath => panic!("expected a path"),
        }
    }

    #[test]
    fn test_chain_path() {
        let graph = chain_of(3);
        let outcome = graph.shortest_path(0, 2).unwrap();
        assert_eq!(ids(&outcome), vec![0, 1, 2]);
        assert_eq!(outcome.hops(), Some(2));
    }

    #[test]
    fn test_disconnected_is_no_path() {
        let mut graph = chain_of(3);
        graph.add_book("island", "nobody");

        assert_eq!(graph.shortest_path(0, 3).unwrap(), PathOutcome::NoPath);
    }

    #[test]
    fn test_self_path_is_single_element() {
        let graph = chain_of(1);
        let outcome = graph.shortest_path(0, 0).unwrap();
        assert_eq!(ids(&outcome), vec![0]);
        assert_eq!(outcome.hops(), Some(0));
    }

    #[test]
    fn test_prefers_fewer_hops() {
        //   0 - 1 - 2 - 3
        //    \_________/
        let mut graph = chain_of(4);
        graph.connect(0, 3).unwrap();

        let outcome = graph.shortest_path(0, 3).unwrap();
        assert_eq!(ids(&outcome), vec![0, 3]);
    }

    #[test]
    fn test_diamond_path_length() {
        //     0
        //    / \
        //   1   2
        //    \ /
        //     3
        let mut graph = ShelfGraph::new();
        for n in 0..4 {
            graph.add_book(format!("book{n}"), "author");
        }
        graph.connect(0, 1).unwrap();
        graph.connect(0, 2).unwrap();
        graph.connect(1, 3).unwrap();
        graph.connect(2, 3).unwrap();

        let outcome = graph.shortest_path(0, 3).unwrap();
        assert_eq!(outcome.hops(), Some(2));
        let path = ids(&outcome);
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&3));
    }

    #[test]
    fn test_invalid_endpoints_fail_before_search() {
        let graph = chain_of(2);
        assert_eq!(
            graph.shortest_path(0, 5),
            Err(CatalogError::InvalidId { id: 5, len: 2 })
        );
        assert_eq!(
            graph.shortest_path(5, 0),
            Err(CatalogError::InvalidId { id: 5, len: 2 })
        );
    }

    #[test]
    fn test_path_survives_removal_renumbering() {
        // Remove the middle of 0-1, 1-2, 0-3, 3-2; the long way around
        // must still be found under the new ids.
        let mut graph = ShelfGraph::new();
        for n in 0..4 {
            graph.add_book(format!("book{n}"), "author");
        }
        graph.connect(0, 1).unwrap();
        graph.connect(1, 2).unwrap();
        graph.connect(0, 3).unwrap();
        graph.connect(3, 2).unwrap();

        graph.remove_book(1).unwrap();

        // Old 2 and 3 are now 1 and 2; route is 0 -> 2 -> 1.
        let outcome = graph.shortest_path(0, 1).unwrap();
        assert_eq!(ids(&outcome), vec![0, 2, 1]);
    }
}
