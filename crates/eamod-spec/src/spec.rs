//! The finished, read-only spec handed to the optimizer.

use eamod_core::{EdgeId, Matrix, NodeId, Tensor3};
use eamod_graph::{AdjacencyList, DerivedGraph};

use crate::road::{ChargerData, RoadMatrices};
use crate::state::VehicleStateTensors;

/// Static optimizer inputs.  Only [`SpecBuilder`](crate::SpecBuilder)
/// constructs it, and only when every pipeline step succeeded.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EamodSpec {
    pub(crate) adjacency:        AdjacencyList,
    pub(crate) graph:            DerivedGraph,
    pub(crate) capacity_matrix:  Matrix<u64>,
    pub(crate) initial_state:    VehicleStateTensors,
    pub(crate) n_vehicle:        f64,
    pub(crate) n_charge_steps:   usize,
    pub(crate) n_passanger_flow: usize,
    pub(crate) chargers:         ChargerData,
    pub(crate) road_matrices:    RoadMatrices,
}

impl EamodSpec {
    // ── Road graph ────────────────────────────────────────────────────────

    pub fn n_road_node(&self) -> usize {
        self.graph.node_count()
    }

    pub fn n_road_edge(&self) -> usize {
        self.graph.edge_count()
    }

    /// Forward adjacency with 1-based neighbour labels.
    pub fn road_adjacency_list(&self) -> &AdjacencyList {
        &self.adjacency
    }

    pub fn road_adjacency_matrix(&self) -> &Matrix<u8> {
        self.graph.adjacency_matrix()
    }

    /// 0-based predecessors of every node.
    pub fn road_reverse_adjacency_list(&self) -> &[Vec<NodeId>] {
        self.graph.reverse_adjacency()
    }

    pub fn road_node_outdegree(&self) -> &[usize] {
        self.graph.outdegree()
    }

    /// Indexed by (source node, neighbour slot); see [`eamod_graph::derive`].
    pub fn edge_number_matrix(&self) -> &Matrix<EdgeId> {
        self.graph.edge_number_matrix()
    }

    pub fn road_capacity_matrix(&self) -> &Matrix<u64> {
        &self.capacity_matrix
    }

    /// All derived graph structures at once.
    pub fn graph(&self) -> &DerivedGraph {
        &self.graph
    }

    pub fn road_matrices(&self) -> &RoadMatrices {
        &self.road_matrices
    }

    // ── Vehicles ──────────────────────────────────────────────────────────

    pub fn initial_state_empty_vehicles(&self) -> &Matrix<f64> {
        &self.initial_state.empty
    }

    pub fn initial_state_full_vehicles(&self) -> &Tensor3<f64> {
        &self.initial_state.full
    }

    /// Vehicle total computed once from the initial state tensors.
    pub fn n_vehicle(&self) -> f64 {
        self.n_vehicle
    }

    pub fn n_charge_steps(&self) -> usize {
        self.n_charge_steps
    }

    pub fn n_passanger_flow(&self) -> usize {
        self.n_passanger_flow
    }

    // ── Chargers ──────────────────────────────────────────────────────────

    pub fn chargers(&self) -> &ChargerData {
        &self.chargers
    }

    pub fn n_charger(&self) -> usize {
        self.chargers.count()
    }
}
