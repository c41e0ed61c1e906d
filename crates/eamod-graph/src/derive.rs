//! Structures derived from a validated [`AdjacencyList`].
//!
//! # Edge numbering
//!
//! Edges are numbered `1..=E` walking nodes in index order and, within a
//! node, its neighbours in list order.  The number of the `k`-th neighbour
//! of node `i` is stored at `edge_number_matrix[i][k]`: the column is the
//! neighbour's **slot** in the row, not its node id.
//!
//! ```text
//! A = [[2, 3], [3], []]        edge_number_matrix
//!                               [ 1  2  - ]
//!                               [ 3  -  - ]
//!                               [ -  -  - ]
//! ```
//!
//! The optimizer's decision variables are laid out against this table, so
//! the slot indexing must not be changed to destination indexing.

use tracing::debug;

use eamod_core::{EdgeId, Matrix, NodeId};

use crate::validate::neighbor_id;
use crate::{AdjacencyList, GraphError, GraphResult};

// ── DerivedGraph ──────────────────────────────────────────────────────────────

/// Reverse adjacency, adjacency matrix, outdegree and edge numbering of a
/// road graph.  Built once by [`derive`]; read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DerivedGraph {
    /// `reverse_adjacency[i]` = 0-based predecessors of node `i`, ascending.
    reverse_adjacency: Vec<Vec<NodeId>>,

    /// `N × N` indicator: `1` at `(i, v-1)` for every neighbour `v` of `i`.
    adjacency_matrix: Matrix<u8>,

    /// Number of neighbours of each node.
    outdegree: Vec<usize>,

    /// `N × N`, [`EdgeId::INVALID`] where unset.  See module docs.
    edge_number_matrix: Matrix<EdgeId>,

    edge_count: usize,
}

impl DerivedGraph {
    pub fn node_count(&self) -> usize {
        self.outdegree.len()
    }

    /// Total number of directed edges (= sum of outdegrees).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn reverse_adjacency(&self) -> &[Vec<NodeId>] {
        &self.reverse_adjacency
    }

    /// 0-based predecessors of `node`, ascending.
    pub fn predecessors(&self, node: NodeId) -> &[NodeId] {
        &self.reverse_adjacency[node.index()]
    }

    pub fn adjacency_matrix(&self) -> &Matrix<u8> {
        &self.adjacency_matrix
    }

    pub fn outdegree(&self) -> &[usize] {
        &self.outdegree
    }

    pub fn edge_number_matrix(&self) -> &Matrix<EdgeId> {
        &self.edge_number_matrix
    }

    /// Edge number of the `slot`-th neighbour of `node`, or `None` if the
    /// node has fewer neighbours.
    pub fn edge_number(&self, node: NodeId, slot: usize) -> Option<EdgeId> {
        self.edge_number_matrix
            .get(node.index(), slot)
            .copied()
            .filter(|e| e.is_valid())
    }

    /// Set cells of the edge-number matrix in row-major order.
    pub fn populated_edge_numbers(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edge_number_matrix
            .as_slice()
            .iter()
            .copied()
            .filter(|e| e.is_valid())
    }
}

// ── derive ────────────────────────────────────────────────────────────────────

/// Compute every derived structure of `adjacency`.
///
/// `node_count` must equal `adjacency.len()`.  Neighbours are range-checked
/// again here, so an unvalidated list fails with
/// [`GraphError::InvalidNeighbor`] instead of indexing out of bounds.
///
/// Time complexity: O(N² + E) — dominated by the two dense `N × N` matrices.
pub fn derive(adjacency: &AdjacencyList, node_count: usize) -> GraphResult<DerivedGraph> {
    if adjacency.len() != node_count {
        return Err(GraphError::SizeMismatch { declared: node_count, actual: adjacency.len() });
    }

    // Reverse adjacency and adjacency matrix in one pass over the edges.
    // Sources are visited in ascending order and rows hold no duplicates, so
    // each predecessor list comes out sorted and unique.
    let mut reverse_adjacency: Vec<Vec<NodeId>> = vec![Vec::new(); node_count];
    let mut adjacency_matrix: Matrix<u8> = Matrix::zeros(node_count, node_count);
    for (i, row) in adjacency.rows().iter().enumerate() {
        let source = NodeId(i as u32);
        for &v in row {
            let target = neighbor_id(i, v, node_count)?;
            reverse_adjacency[target.index()].push(source);
            adjacency_matrix.set(i, target.index(), 1);
        }
    }

    let outdegree: Vec<usize> = adjacency.rows().iter().map(Vec::len).collect();
    let edge_count: usize = outdegree.iter().sum();

    // Running edge number indexed by (source, neighbour slot).
    let mut edge_number_matrix = Matrix::filled(node_count, node_count, EdgeId::INVALID);
    let mut counter: usize = 0;
    for (i, &degree) in outdegree.iter().enumerate() {
        for slot in 0..degree {
            counter += 1;
            edge_number_matrix.set(i, slot, edge_id(counter)?);
        }
    }
    debug_assert_eq!(counter, edge_count);

    debug!(nodes = node_count, edges = edge_count, "derived road graph structures");

    Ok(DerivedGraph {
        reverse_adjacency,
        adjacency_matrix,
        outdegree,
        edge_number_matrix,
        edge_count,
    })
}

/// Edge number `counter` as an `EdgeId`.  `u32::MAX` is the unset sentinel,
/// so the largest usable number is `u32::MAX - 1`.
pub(crate) fn edge_id(counter: usize) -> GraphResult<EdgeId> {
    u32::try_from(counter)
        .ok()
        .filter(|&c| c < u32::MAX)
        .map(EdgeId)
        .ok_or(GraphError::EdgeOverflow(counter))
}
