//! Configuration loader.
//!
//! # JSON layout
//!
//! The configuration mirrors a sectioned key/value file.  List and
//! matrix fields hold the **text** of a literal, parsed later by
//! [`eamod_core::literal`]; integer fields accept either a number or its
//! decimal text.
//!
//! ```json
//! {
//!   "road_adjacency_list":  { "1": "[2, 3]", "2": "[3]", "3": "[]" },
//!   "initialization":       { "n_road_node": 3, "n_charge_steps": 4, "n_passanger_flow": 2 },
//!   "road_capacity_matrix": { "capacity_matrix": "[[0, 5, 5], [0, 0, 5], [0, 0, 0]]" },
//!   "charger": {
//!     "charger_list": "[1]", "charger_speed": "[1]",
//!     "charger_time": "[2]", "charger_capacity": "[4]"
//!   },
//!   "road_network": { "travel_time_matrix": "[[0, 1, 2], [1, 0, 1], [2, 1, 0]]" }
//! }
//! ```
//!
//! `road_adjacency_list` entries are taken **in file order**; the labels are
//! only used in error messages and must be unique.  `charger` and `road_network` are optional.

use std::collections::HashSet;
use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::SpecResult;

// ── EamodConfig ───────────────────────────────────────────────────────────────

/// Immutable input to [`SpecBuilder`](crate::SpecBuilder).
#[derive(Clone, Debug, Deserialize)]
pub struct EamodConfig {
    pub road_adjacency_list:  LabeledRows,
    pub initialization:       Initialization,
    pub road_capacity_matrix: CapacitySection,
    #[serde(default)]
    pub charger:              Option<ChargerSection>,
    #[serde(default)]
    pub road_network:         Option<RoadNetworkSection>,
}

/// Declared dimensions.  Signed so that a negative value reaches the
/// builder and is reported as an invalid dimension.
#[derive(Clone, Debug, Deserialize)]
pub struct Initialization {
    #[serde(deserialize_with = "int_or_text")]
    pub n_road_node:      i64,
    #[serde(deserialize_with = "int_or_text")]
    pub n_charge_steps:   i64,
    #[serde(deserialize_with = "int_or_text")]
    pub n_passanger_flow: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CapacitySection {
    pub capacity_matrix: String,
}

/// Raw charger fields.  Held, not interpreted.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChargerSection {
    pub charger_list:     Option<String>,
    pub charger_speed:    Option<String>,
    pub charger_time:     Option<String>,
    pub charger_capacity: Option<String>,
}

/// Per-edge matrices loaded verbatim when present.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RoadNetworkSection {
    pub travel_time_matrix:        Option<String>,
    pub travel_distance_matrix_m:  Option<String>,
    pub charge_to_traverse_matrix: Option<String>,
}

impl EamodConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(text: &str) -> SpecResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Like [`from_json_str`](Self::from_json_str) but accepts any `Read`
    /// source.
    pub fn from_json_reader<R: Read>(reader: R) -> SpecResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a configuration file.
    pub fn from_path(path: &Path) -> SpecResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }
}

// ── LabeledRows ───────────────────────────────────────────────────────────────

/// An ordered `label → literal text` mapping.
///
/// JSON objects are unordered in principle, so this deserializes through a
/// map visitor that keeps entries exactly as they appear in the input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabeledRows(Vec<(String, String)>);

impl LabeledRows {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(label, text)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(l, t)| (l.as_str(), t.as_str()))
    }
}

impl<'de> Deserialize<'de> for LabeledRows {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RowsVisitor;

        impl<'de> Visitor<'de> for RowsVisitor {
            type Value = LabeledRows;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from node label to list literal text")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<LabeledRows, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                let mut seen = HashSet::new();
                while let Some((label, text)) = map.next_entry::<String, String>()? {
                    if !seen.insert(label.clone()) {
                        return Err(de::Error::custom(format!("duplicate node label {label:?}")));
                    }
                    entries.push((label, text));
                }
                Ok(LabeledRows(entries))
            }
        }

        deserializer.deserialize_map(RowsVisitor)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Accept `3` or `"3"`.
fn int_or_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrText {
        Int(i64),
        Text(String),
    }

    match IntOrText::deserialize(deserializer)? {
        IntOrText::Int(v) => Ok(v),
        IntOrText::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("invalid integer {s:?}"))),
    }
}
