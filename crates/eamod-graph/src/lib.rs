//! `eamod-graph` — road graph validation and derivation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`adjacency`] | `AdjacencyList` (sorted, de-duplicated, 1-based labels)   |
//! | [`validate`]  | `validate` — every neighbour is a node in `1..=N`         |
//! | [`derive`]    | `derive` → `DerivedGraph` (reverse list, matrices, degree)|
//! | [`error`]     | `GraphError`, `GraphResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize` on public types.                         |

pub mod adjacency;
pub mod derive;
pub mod error;
pub mod validate;


pub use adjacency::AdjacencyList;
pub use derive::{DerivedGraph, derive};
pub use error::{GraphError, GraphResult};
pub use validate::validate;
