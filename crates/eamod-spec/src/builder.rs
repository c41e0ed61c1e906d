//! One-shot builder turning an [`EamodConfig`] into an [`EamodSpec`].

use tracing::{debug, info};

use eamod_graph::{AdjacencyList, GraphError, derive, validate};

use crate::config::EamodConfig;
use crate::road::{ChargerData, RoadMatrices, load_capacity_matrix};
use crate::state::{allocate, count_vehicles, dimension};
use crate::{EamodSpec, SpecResult};

/// Builds an [`EamodSpec`] from a borrowed configuration.
///
/// # Pipeline
///
/// ```text
/// ① adjacency   parse each row, sort + dedup
/// ② validate    every neighbour in 1..=len(list)
/// ③ node count  declared n_road_node must equal len(list)
/// ④ state       zero tensors (N, C) and (P, N, C); vehicle count snapshot
/// ⑤ capacity    N x N or N x E, non-negative
/// ⑥ derive      reverse list, adjacency matrix, outdegree, edge numbers
/// ⑦ extras      charger lists, optional road-network matrices
/// ```
///
/// Any failure aborts the build; no partial spec is ever returned.
///
/// # Example
///
/// ```rust,ignore
/// let config = EamodConfig::from_path(Path::new("config.json"))?;
/// let spec = SpecBuilder::new(&config).build()?;
/// println!("{} nodes, {} edges", spec.n_road_node(), spec.n_road_edge());
/// ```
pub struct SpecBuilder<'a> {
    config: &'a EamodConfig,
}

impl<'a> SpecBuilder<'a> {
    pub fn new(config: &'a EamodConfig) -> Self {
        Self { config }
    }

    /// Run every pipeline step and return the finished spec.
    pub fn build(self) -> SpecResult<EamodSpec> {
        let adjacency = self.adjacency()?;
        let n = self.node_count(&adjacency)?;

        let init = &self.config.initialization;
        let n_charge_steps = dimension("n_charge_steps", init.n_charge_steps)?;
        let n_passanger_flow = dimension("n_passanger_flow", init.n_passanger_flow)?;

        let initial_state = allocate(n, n_charge_steps, n_passanger_flow)?;
        let n_vehicle = count_vehicles(&initial_state.empty, &initial_state.full);
        debug!(n_vehicle, "initialized vehicle state");

        let capacity_matrix = load_capacity_matrix(
            &self.config.road_capacity_matrix.capacity_matrix,
            n,
            adjacency.entry_count(),
        )?;
        debug!(shape = ?capacity_matrix.shape(), "loaded road capacity matrix");

        let graph = derive(&adjacency, n)?;

        let chargers = match &self.config.charger {
            Some(section) => ChargerData::load(section)?,
            None => ChargerData::default(),
        };
        let road_matrices = match &self.config.road_network {
            Some(section) => RoadMatrices::load(section, n)?,
            None => RoadMatrices::default(),
        };

        info!(
            nodes = n,
            edges = graph.edge_count(),
            chargers = chargers.count(),
            "built EAMoD spec"
        );

        Ok(EamodSpec {
            adjacency,
            graph,
            capacity_matrix,
            initial_state,
            n_vehicle,
            n_charge_steps,
            n_passanger_flow,
            chargers,
            road_matrices,
        })
    }

    // ── Pipeline steps ────────────────────────────────────────────────────

    /// ① + ②: parse the adjacency rows and check them against the list's
    /// own length.
    fn adjacency(&self) -> SpecResult<AdjacencyList> {
        let adjacency = AdjacencyList::from_literal_rows(self.config.road_adjacency_list.iter())?;
        validate(&adjacency, adjacency.len())?;
        debug!(rows = adjacency.len(), entries = adjacency.entry_count(), "validated adjacency list");
        Ok(adjacency)
    }

    /// ③: the declared node count must agree with the list.
    fn node_count(&self, adjacency: &AdjacencyList) -> SpecResult<usize> {
        let declared = dimension("n_road_node", self.config.initialization.n_road_node)?;
        if declared != adjacency.len() {
            return Err(GraphError::SizeMismatch { declared, actual: adjacency.len() }.into());
        }
        Ok(declared)
    }
}
