//! Edges of the connectivity graph.
//!
//! Connections between books are undirected: every edge is stored twice,
//! once in each endpoint's adjacency row. All edges carry the same unit
//! weight, so shortest paths count hops.

use crate::book::BookId;
use serde::{Deserialize, Serialize};

/// Cost of traversing any connection.
pub const UNIT_WEIGHT: u32 = 1;

/// One half of an undirected connection, stored in the source's row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Id of the book at the other end.
    pub to: BookId,

    /// Traversal cost, always [`UNIT_WEIGHT`].
    pub weight: u32,
}

impl Edge {
    /// Creates a unit-weight edge toward `to`.
    pub fn unit(to: BookId) -> Self {
        Self {
            to,
            weight: UNIT_WEIGHT,
        }
    }
}
