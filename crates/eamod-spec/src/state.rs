//! Initial vehicle occupancy state.
//!
//! # Shapes
//!
//! | Tensor  | Shape                                      |
//! |---------|--------------------------------------------|
//! | `empty` | `(n_road_node, n_charge_steps)`            |
//! | `full`  | `(n_passanger_flow, n_road_node, n_charge_steps)` |
//!
//! Both start at zero.  The vehicle count is a one-time snapshot taken from
//! these tensors; it is not kept in sync with anything.

use eamod_core::{Matrix, Tensor3};

use crate::{SpecError, SpecResult};

/// Empty and full vehicle-state tensors.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VehicleStateTensors {
    /// Unoccupied vehicles by node and charge step.
    pub empty: Matrix<f64>,
    /// Passenger-carrying vehicles by flow class, node and charge step.
    pub full:  Tensor3<f64>,
}

/// Allocate zero-filled state tensors.
///
/// Fails with [`SpecError::InvalidDimension`] if any dimension is negative,
/// and with [`SpecError::TooLarge`] if a tensor would not fit in memory.
pub fn initialize(
    node_count:             i64,
    charge_steps:           i64,
    passenger_flow_classes: i64,
) -> SpecResult<VehicleStateTensors> {
    let n = dimension("n_road_node", node_count)?;
    let c = dimension("n_charge_steps", charge_steps)?;
    let p = dimension("n_passanger_flow", passenger_flow_classes)?;
    allocate(n, c, p)
}

/// [`initialize`] for dimensions that are already validated.
pub(crate) fn allocate(n: usize, c: usize, p: usize) -> SpecResult<VehicleStateTensors> {
    check_len("initial_state_empty_vehicles", &[n, c])?;
    check_len("initial_state_full_vehicles", &[p, n, c])?;
    Ok(VehicleStateTensors {
        empty: Matrix::zeros(n, c),
        full:  Tensor3::zeros(p, n, c),
    })
}

/// Total vehicles: the elementwise sum over both tensors.
pub fn count_vehicles(empty: &Matrix<f64>, full: &Tensor3<f64>) -> f64 {
    empty.as_slice().iter().sum::<f64>() + full.as_slice().iter().sum::<f64>()
}

/// The byte size of an `f64` tensor with `shape` must fit in `isize`.
fn check_len(what: &'static str, shape: &[usize]) -> SpecResult<()> {
    if shape.contains(&0) {
        return Ok(());
    }
    let bytes = shape
        .iter()
        .try_fold(std::mem::size_of::<f64>(), |acc, &d| acc.checked_mul(d))
        .filter(|&b| b <= isize::MAX as usize);
    match bytes {
        Some(_) => Ok(()),
        None => Err(SpecError::TooLarge { what, shape: shape.to_vec() }),
    }
}

/// Convert a declared dimension to `usize`, rejecting negatives.
pub(crate) fn dimension(what: &'static str, value: i64) -> SpecResult<usize> {
    usize::try_from(value).map_err(|_| SpecError::InvalidDimension { what, value })
}
