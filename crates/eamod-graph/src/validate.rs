//! Neighbour range check.

use eamod_core::{Literal, NodeId};

use crate::{AdjacencyList, GraphError, GraphResult};

/// Check that every neighbour in `adjacency` is a road node in `1..=node_count`.
///
/// Stops at the first violation.  Pure: nothing is modified.
pub fn validate(adjacency: &AdjacencyList, node_count: usize) -> GraphResult<()> {
    for (node, row) in adjacency.rows().iter().enumerate() {
        for &value in row {
            neighbor_id(node, value, node_count)?;
        }
    }
    Ok(())
}

/// Resolve the neighbour label `value` of row `node` to a `NodeId`.
pub(crate) fn neighbor_id(node: usize, value: i64, node_count: usize) -> GraphResult<NodeId> {
    NodeId::from_label(value, node_count)
        .ok_or(GraphError::InvalidNeighbor { node, value: Literal::Int(value) })
}
