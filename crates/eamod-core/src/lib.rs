//! `eamod-core` — foundational types for the EAMoD spec builder.
//!
//! This crate is a dependency of every other `eamod-*` crate.  It has no
//! `eamod-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `NodeId`, `EdgeId`                                        |
//! | [`matrix`]  | `Matrix<T>` (row-major 2-D), `Tensor3<T>` (row-major 3-D)  |
//! | [`literal`] | `Literal`, restricted list/number literal parser          |
//! | [`error`]   | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod literal;
pub mod matrix;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{EdgeId, NodeId};
pub use literal::{
    Literal, parse_int_list, parse_int_matrix, parse_literal, parse_number_list,
    parse_number_matrix,
};
pub use matrix::{Matrix, Tensor3};
