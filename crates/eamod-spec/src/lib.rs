//! `eamod-spec` — static input data for an electric autonomous
//! mobility-on-demand (EAMoD) optimizer.
//!
//! # Pipeline
//!
//! ```text
//! EamodConfig ──► SpecBuilder::build ──► EamodSpec
//!                   ① parse + validate road adjacency list
//!                   ② check declared node count
//!                   ③ zero vehicle-state tensors, vehicle count snapshot
//!                   ④ road capacity matrix
//!                   ⑤ derive reverse list / matrices / outdegree / edge numbers
//!                   ⑥ charger data, optional road-network matrices
//! ```
//!
//! # Cargo features
//!
//! | Feature | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Derives `Serialize` on `EamodSpec` and its parts.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use eamod_spec::{EamodConfig, SpecBuilder};
//!
//! let config = EamodConfig::from_json_str(text)?;
//! let spec = SpecBuilder::new(&config).build()?;
//! assert_eq!(spec.road_node_outdegree().iter().sum::<usize>(), spec.n_road_edge());
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod road;
pub mod spec;
pub mod state;

#[cfg(test)]
mod tests;

pub use builder::SpecBuilder;
pub use config::EamodConfig;
pub use error::{SpecError, SpecResult};
pub use road::{ChargerData, RoadMatrices, load_capacity_matrix};
pub use spec::EamodSpec;
pub use state::{VehicleStateTensors, count_vehicles, initialize};
