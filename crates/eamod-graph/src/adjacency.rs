//! Forward adjacency list as read from configuration.
//!
//! Row `i` holds the **1-based** labels of the nodes reachable from node `i`
//! (0-based), sorted ascending with duplicates removed.  Values stay signed
//! until [`validate`](crate::validate) has checked they lie in `1..=N`;
//! after that, [`AdjacencyList::neighbor_ids`] converts them to `NodeId`s.

use eamod_core::{CoreError, Literal, NodeId, parse_literal};

use crate::{GraphError, GraphResult};

/// Sorted, de-duplicated neighbour rows.  Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AdjacencyList {
    rows: Vec<Vec<i64>>,
}

impl AdjacencyList {
    /// Build from raw rows, normalising each one (sort + dedup).
    pub fn new(rows: Vec<Vec<i64>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.sort_unstable();
                row.dedup();
                row
            })
            .collect();
        Self { rows }
    }

    /// Build from `(label, literal text)` pairs in node order.
    ///
    /// Each text must be a list literal such as `"[2, 3]"`.  A non-integer
    /// element is reported as [`GraphError::InvalidNeighbor`] for that row.
    pub fn from_literal_rows<'a, I>(entries: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut rows = Vec::new();
        for (node, (label, text)) in entries.into_iter().enumerate() {
            let parsed = parse_literal(text)
                .map_err(|source| GraphError::Parse { label: label.to_owned(), source })?;
            let items = match parsed {
                Literal::List(items) => items,
                other => {
                    return Err(GraphError::Parse {
                        label:  label.to_owned(),
                        source: CoreError::Unexpected {
                            expected: "list of node labels",
                            found:    other.to_string(),
                        },
                    });
                }
            };
            let row = items
                .into_iter()
                .map(|item| match item {
                    Literal::Int(v) => Ok(v),
                    value => Err(GraphError::InvalidNeighbor { node, value }),
                })
                .collect::<GraphResult<Vec<i64>>>()?;
            rows.push(row);
        }
        Ok(Self::new(rows))
    }

    /// Number of rows (nodes).
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 1-based neighbour labels of node `i`.
    #[inline]
    pub fn neighbors(&self, i: usize) -> &[i64] {
        &self.rows[i]
    }

    /// All rows, in node order.
    #[inline]
    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    /// Total number of (source, neighbour) entries.
    pub fn entry_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Neighbours of `node` as `NodeId`s.  Labels outside `1..=len()` are
    /// skipped, so call this only on a validated list.
    pub fn neighbor_ids(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let n = self.rows.len();
        self.rows[node.index()]
            .iter()
            .filter_map(move |&v| NodeId::from_label(v, n))
    }
}
