//! Per-edge road data and charger data loaded verbatim from configuration.

use eamod_core::{Matrix, parse_int_list, parse_int_matrix, parse_number_list, parse_number_matrix};

use crate::config::{ChargerSection, RoadNetworkSection};
use crate::{SpecError, SpecResult};

// ── Capacity ──────────────────────────────────────────────────────────────────

/// Parse the road capacity matrix.
///
/// The matrix must have one row per road node, and every row must be either
/// `node_count` wide (indexed by destination) or `edge_count` wide (indexed
/// by edge number).  Every entry must be non-negative.
pub fn load_capacity_matrix(
    text:       &str,
    node_count: usize,
    edge_count: usize,
) -> SpecResult<Matrix<u64>> {
    const WHAT: &str = "road_capacity_matrix";

    let rows = parse_int_matrix(text).map_err(|source| SpecError::Parse { field: WHAT, source })?;

    let mut checked: Vec<Vec<u64>> = Vec::with_capacity(rows.len());
    for (r, row) in rows.into_iter().enumerate() {
        let row = row
            .into_iter()
            .enumerate()
            .map(|(c, value)| {
                u64::try_from(value).map_err(|_| SpecError::InvalidCapacity { row: r, col: c, value })
            })
            .collect::<SpecResult<Vec<u64>>>()?;
        checked.push(row);
    }

    let matrix = Matrix::from_rows(checked).map_err(|source| SpecError::Parse { field: WHAT, source })?;
    let (rows, cols) = matrix.shape();
    if rows != node_count || (cols != node_count && cols != edge_count) {
        return Err(SpecError::MatrixShape {
            what:     WHAT,
            rows,
            cols,
            expected: format!("{node_count}x{node_count} or {node_count}x{edge_count}"),
        });
    }
    Ok(matrix)
}

// ── Road network matrices ─────────────────────────────────────────────────────

/// Travel time, travel distance and charge-to-traverse matrices.
///
/// Each is `N × N` when present.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoadMatrices {
    pub travel_time:        Option<Matrix<f64>>,
    pub travel_distance_m:  Option<Matrix<f64>>,
    pub charge_to_traverse: Option<Matrix<f64>>,
}

impl RoadMatrices {
    pub fn load(section: &RoadNetworkSection, node_count: usize) -> SpecResult<Self> {
        Ok(Self {
            travel_time: square_matrix(
                "travel_time_matrix",
                section.travel_time_matrix.as_deref(),
                node_count,
            )?,
            travel_distance_m: square_matrix(
                "travel_distance_matrix_m",
                section.travel_distance_matrix_m.as_deref(),
                node_count,
            )?,
            charge_to_traverse: square_matrix(
                "charge_to_traverse_matrix",
                section.charge_to_traverse_matrix.as_deref(),
                node_count,
            )?,
        })
    }
}

fn square_matrix(
    what:       &'static str,
    text:       Option<&str>,
    node_count: usize,
) -> SpecResult<Option<Matrix<f64>>> {
    let Some(text) = text else { return Ok(None) };
    let rows = parse_number_matrix(text).map_err(|source| SpecError::Parse { field: what, source })?;
    let matrix = Matrix::from_rows(rows).map_err(|source| SpecError::Parse { field: what, source })?;
    if matrix.shape() != (node_count, node_count) {
        return Err(SpecError::MatrixShape {
            what,
            rows:     matrix.rows(),
            cols:     matrix.cols(),
            expected: format!("{node_count}x{node_count}"),
        });
    }
    Ok(Some(matrix))
}

// ── Chargers ──────────────────────────────────────────────────────────────────

/// Charger fields as configured.  Not interpreted further.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChargerData {
    /// 1-based road node label of each charger.
    pub chargers: Vec<i64>,
    pub speed:    Vec<f64>,
    pub time:     Vec<f64>,
    pub capacity: Vec<f64>,
}

impl ChargerData {
    pub fn load(section: &ChargerSection) -> SpecResult<Self> {
        Ok(Self {
            chargers: match section.charger_list.as_deref() {
                Some(text) => parse_int_list(text)
                    .map_err(|source| SpecError::Parse { field: "charger_list", source })?,
                None => Vec::new(),
            },
            speed:    number_list("charger_speed", section.charger_speed.as_deref())?,
            time:     number_list("charger_time", section.charger_time.as_deref())?,
            capacity: number_list("charger_capacity", section.charger_capacity.as_deref())?,
        })
    }

    /// Number of chargers (`len(charger_list)`).
    pub fn count(&self) -> usize {
        self.chargers.len()
    }
}

fn number_list(what: &'static str, text: Option<&str>) -> SpecResult<Vec<f64>> {
    match text {
        Some(text) => parse_number_list(text).map_err(|source| SpecError::Parse { field: what, source }),
        None => Ok(Vec::new()),
    }
}
