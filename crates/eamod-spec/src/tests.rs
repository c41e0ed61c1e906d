//! Unit tests for eamod-spec.

use eamod_core::{CoreError, EdgeId, NodeId};
use eamod_graph::GraphError;

use crate::config::{ChargerSection, RoadNetworkSection};
use crate::{
    ChargerData, EamodConfig, RoadMatrices, SpecBuilder, SpecError, count_vehicles, initialize,
    load_capacity_matrix,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Three nodes: 1 → {2, 3}, 2 → {3}, 3 → {}.
const TRIANGLE: &str = r#"{
    "road_adjacency_list":  { "1": "[3, 2, 2]", "2": "[3]", "3": "[]" },
    "initialization":       { "n_road_node": "3", "n_charge_steps": 4, "n_passanger_flow": 2 },
    "road_capacity_matrix": { "capacity_matrix": "[[0, 5, 5], [0, 0, 7], [0, 0, 0]]" }
}"#;

fn config_with(adjacency: &str, n_road_node: i64, capacity: &str) -> EamodConfig {
    let text = format!(
        r#"{{
            "road_adjacency_list":  {adjacency},
            "initialization":       {{ "n_road_node": {n_road_node}, "n_charge_steps": 2, "n_passanger_flow": 1 }},
            "road_capacity_matrix": {{ "capacity_matrix": "{capacity}" }}
        }}"#
    );
    EamodConfig::from_json_str(&text).unwrap()
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn adjacency_rows_keep_file_order() {
        let cfg = EamodConfig::from_json_str(
            r#"{
                "road_adjacency_list":  { "b": "[1]", "a": "[2]" },
                "initialization":       { "n_road_node": 2, "n_charge_steps": 1, "n_passanger_flow": 1 },
                "road_capacity_matrix": { "capacity_matrix": "[[0, 1], [1, 0]]" }
            }"#,
        )
        .unwrap();
        let labels: Vec<&str> = cfg.road_adjacency_list.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["b", "a"]);
    }

    #[test]
    fn integers_accept_text() {
        let cfg = EamodConfig::from_json_str(TRIANGLE).unwrap();
        assert_eq!(cfg.initialization.n_road_node, 3);
        assert_eq!(cfg.initialization.n_charge_steps, 4);
        assert!(cfg.charger.is_none());
        assert!(cfg.road_network.is_none());
    }

    #[test]
    fn bad_integer_text_is_a_config_error() {
        let text = TRIANGLE.replace(r#""n_road_node": "3""#, r#""n_road_node": "three""#);
        assert!(matches!(EamodConfig::from_json_str(&text), Err(SpecError::Config(_))));
    }

    #[test]
    fn missing_section_is_a_config_error() {
        let err = EamodConfig::from_json_str(r#"{ "road_adjacency_list": {} }"#).unwrap_err();
        assert!(matches!(err, SpecError::Config(_)));
    }

    #[test]
    fn from_reader() {
        let cfg = EamodConfig::from_json_reader(std::io::Cursor::new(TRIANGLE)).unwrap();
        assert_eq!(cfg.road_adjacency_list.len(), 3);
    }

    #[test]
    fn duplicate_adjacency_label_is_a_config_error() {
        let text = TRIANGLE.replace(r#""2": "[3]""#, r#""1": "[3]""#);
        let err = EamodConfig::from_json_str(&text).unwrap_err();
        assert!(matches!(&err, SpecError::Config(_)));
        assert!(err.to_string().contains("duplicate node label \"1\""));
    }

    #[test]
    fn from_missing_path_is_io_error() {
        let err = EamodConfig::from_path(std::path::Path::new("/nonexistent/eamod.json")).unwrap_err();
        assert!(matches!(err, SpecError::Io(_)));
    }
}

// ── State initialization ──────────────────────────────────────────────────────

#[cfg(test)]
mod state_tests {
    use super::*;

    #[test]
    fn shapes_and_zeros() {
        let state = initialize(3, 4, 2).unwrap();
        assert_eq!(state.empty.shape(), (3, 4));
        assert_eq!(state.full.shape(), (2, 3, 4));
        assert!(state.empty.as_slice().iter().all(|&v| v == 0.0));
        assert!(state.full.as_slice().iter().all(|&v| v == 0.0));
        assert_eq!(count_vehicles(&state.empty, &state.full), 0.0);
    }

    #[test]
    fn zero_dimensions_allowed() {
        let state = initialize(0, 0, 0).unwrap();
        assert_eq!(state.empty.shape(), (0, 0));
        assert_eq!(state.full.shape(), (0, 0, 0));
    }

    #[test]
    fn negative_dimension_rejected() {
        let err = initialize(3, -1, 2).unwrap_err();
        assert!(matches!(
            err,
            SpecError::InvalidDimension { what: "n_charge_steps", value: -1 }
        ));
        assert!(matches!(
            initialize(-3, 1, 1),
            Err(SpecError::InvalidDimension { what: "n_road_node", .. })
        ));
        assert!(matches!(
            initialize(3, 1, -2),
            Err(SpecError::InvalidDimension { what: "n_passanger_flow", .. })
        ));
    }

    #[test]
    fn oversized_dimensions_rejected() {
        assert!(matches!(
            initialize(3, i64::MAX, 2),
            Err(SpecError::TooLarge { what: "initial_state_empty_vehicles", .. })
        ));
        // (N, C) fits, (P, N, C) does not.
        let err = initialize(1, 1 << 40, 1 << 30).unwrap_err();
        assert!(matches!(
            err,
            SpecError::TooLarge { what: "initial_state_full_vehicles", ref shape }
                if shape == &[1 << 30, 1, 1 << 40]
        ));
    }

    #[test]
    fn zero_node_count_with_huge_steps_is_empty() {
        let state = initialize(0, i64::MAX, i64::MAX).unwrap();
        assert_eq!(state.empty.shape(), (0, i64::MAX as usize));
        assert!(state.full.as_slice().is_empty());
    }

    #[test]
    fn count_sums_every_element() {
        let empty = eamod_core::Matrix::from_rows(vec![vec![1.0, 2.0], vec![0.0, 3.0]]).unwrap();
        let full = eamod_core::Tensor3::zeros(1, 2, 2);
        assert_eq!(count_vehicles(&empty, &full), 6.0);
    }
}

// ── Road data ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod road_tests {
    use super::*;

    #[test]
    fn capacity_node_by_node() {
        let m = load_capacity_matrix("[[0, 5], [5, 0]]", 2, 2).unwrap();
        assert_eq!(m.to_rows(), vec![vec![0, 5], vec![5, 0]]);
    }

    #[test]
    fn capacity_node_by_edge() {
        let m = load_capacity_matrix("[[1, 2, 3], [4, 5, 6]]", 2, 3).unwrap();
        assert_eq!(m.shape(), (2, 3));
    }

    #[test]
    fn capacity_empty_graph() {
        assert_eq!(load_capacity_matrix("[]", 0, 0).unwrap().shape(), (0, 0));
        assert_eq!(load_capacity_matrix("[[], []]", 2, 0).unwrap().shape(), (2, 0));
    }

    #[test]
    fn negative_capacity_rejected() {
        let err = load_capacity_matrix("[[0, 1], [-4, 0]]", 2, 2).unwrap_err();
        assert!(matches!(err, SpecError::InvalidCapacity { row: 1, col: 0, value: -4 }));
    }

    #[test]
    fn capacity_wrong_shape() {
        let err = load_capacity_matrix("[[0, 1, 2], [1, 0, 2]]", 2, 2).unwrap_err();
        assert!(matches!(err, SpecError::MatrixShape { rows: 2, cols: 3, .. }));
        let err = load_capacity_matrix("[[0, 1]]", 2, 2).unwrap_err();
        assert!(matches!(err, SpecError::MatrixShape { rows: 1, .. }));
    }

    #[test]
    fn capacity_ragged_or_malformed() {
        assert!(matches!(
            load_capacity_matrix("[[0, 1], [1]]", 2, 2),
            Err(SpecError::Parse { source: CoreError::Ragged { .. }, .. })
        ));
        assert!(matches!(
            load_capacity_matrix("[[0, 1], [1, 0]", 2, 2),
            Err(SpecError::Parse { field: "road_capacity_matrix", source: CoreError::Parse { .. } })
        ));
        assert!(matches!(
            load_capacity_matrix("[[0, 1.5], [1, 0]]", 2, 2),
            Err(SpecError::Parse { source: CoreError::Unexpected { .. }, .. })
        ));
    }

    #[test]
    fn charger_data_loaded_raw() {
        let section = ChargerSection {
            charger_list:     Some("[1, 3]".into()),
            charger_speed:    Some("[1, 2.5]".into()),
            charger_time:     None,
            charger_capacity: Some("[4, 4]".into()),
        };
        let data = ChargerData::load(&section).unwrap();
        assert_eq!(data.chargers, vec![1, 3]);
        assert_eq!(data.speed, vec![1.0, 2.5]);
        assert!(data.time.is_empty());
        assert_eq!(data.count(), 2);
    }

    #[test]
    fn charger_parse_error_names_field() {
        let section = ChargerSection { charger_time: Some("[1,".into()), ..Default::default() };
        assert!(matches!(
            ChargerData::load(&section),
            Err(SpecError::Parse { field: "charger_time", .. })
        ));
    }

    #[test]
    fn road_matrices_must_be_square() {
        let section = RoadNetworkSection {
            travel_time_matrix: Some("[[0, 1], [1, 0]]".into()),
            ..Default::default()
        };
        let m = RoadMatrices::load(&section, 2).unwrap();
        assert_eq!(m.travel_time.unwrap().shape(), (2, 2));
        assert!(m.travel_distance_m.is_none());

        let section = RoadNetworkSection {
            charge_to_traverse_matrix: Some("[[0, 1]]".into()),
            ..Default::default()
        };
        assert!(matches!(
            RoadMatrices::load(&section, 2),
            Err(SpecError::MatrixShape { what: "charge_to_traverse_matrix", .. })
        ));
    }
}

// ── SpecBuilder ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn triangle_spec() {
        let cfg = EamodConfig::from_json_str(TRIANGLE).unwrap();
        let spec = SpecBuilder::new(&cfg).build().unwrap();

        assert_eq!(spec.n_road_node(), 3);
        assert_eq!(spec.n_road_edge(), 3);
        assert_eq!(spec.road_adjacency_list().rows(), &[vec![2, 3], vec![3], vec![]]);
        assert_eq!(
            spec.road_reverse_adjacency_list(),
            &[vec![], vec![NodeId(0)], vec![NodeId(0), NodeId(1)]]
        );
        assert_eq!(spec.road_node_outdegree(), &[2, 1, 0]);
        assert_eq!(
            spec.road_adjacency_matrix().to_rows(),
            vec![vec![0, 1, 1], vec![0, 0, 1], vec![0, 0, 0]]
        );
        assert_eq!(spec.edge_number_matrix().get(1, 0), Some(&EdgeId(3)));
        assert_eq!(spec.road_capacity_matrix().get(1, 2), Some(&7));
    }

    #[test]
    fn triangle_state() {
        let cfg = EamodConfig::from_json_str(TRIANGLE).unwrap();
        let spec = SpecBuilder::new(&cfg).build().unwrap();

        assert_eq!(spec.n_charge_steps(), 4);
        assert_eq!(spec.n_passanger_flow(), 2);
        assert_eq!(spec.initial_state_empty_vehicles().shape(), (3, 4));
        assert_eq!(spec.initial_state_full_vehicles().shape(), (2, 3, 4));
        assert_eq!(spec.n_vehicle(), 0.0);
        assert_eq!(spec.n_charger(), 0);
        assert_eq!(spec.road_matrices(), &RoadMatrices::default());
    }

    #[test]
    fn invalid_neighbor_aborts_build() {
        let cfg = config_with(
            r#"{ "1": "[2]", "2": "[5]", "3": "[]" }"#,
            3,
            "[[0, 1, 0], [0, 0, 0], [0, 0, 0]]",
        );
        let err = SpecBuilder::new(&cfg).build().unwrap_err();
        match err {
            SpecError::Graph(GraphError::InvalidNeighbor { node, value }) => {
                assert_eq!(node, 1);
                assert_eq!(value.to_string(), "5");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn neighbor_checked_against_list_length() {
        // Declared 4, list has 3 rows: label 4 is out of range for the list.
        let cfg = config_with(
            r#"{ "1": "[4]", "2": "[]", "3": "[]" }"#,
            4,
            "[[0, 0, 0], [0, 0, 0], [0, 0, 0]]",
        );
        assert!(matches!(
            SpecBuilder::new(&cfg).build(),
            Err(SpecError::Graph(GraphError::InvalidNeighbor { node: 0, .. }))
        ));
    }

    #[test]
    fn declared_node_count_mismatch() {
        let cfg = config_with(
            r#"{ "1": "[2]", "2": "[1]" }"#,
            3,
            "[[0, 1], [1, 0]]",
        );
        assert!(matches!(
            SpecBuilder::new(&cfg).build(),
            Err(SpecError::Graph(GraphError::SizeMismatch { declared: 3, actual: 2 }))
        ));
    }

    #[test]
    fn negative_node_count() {
        let cfg = config_with(r#"{}"#, -1, "[]");
        assert!(matches!(
            SpecBuilder::new(&cfg).build(),
            Err(SpecError::InvalidDimension { what: "n_road_node", value: -1 })
        ));
    }

    #[test]
    fn malformed_adjacency_text() {
        let cfg = config_with(r#"{ "1": "[1" }"#, 1, "[[0]]");
        assert!(matches!(
            SpecBuilder::new(&cfg).build(),
            Err(SpecError::Graph(GraphError::Parse { .. }))
        ));
    }

    #[test]
    fn negative_capacity_aborts_build() {
        let cfg = config_with(r#"{ "1": "[2]", "2": "[]" }"#, 2, "[[0, -1], [0, 0]]");
        assert!(matches!(
            SpecBuilder::new(&cfg).build(),
            Err(SpecError::InvalidCapacity { row: 0, col: 1, value: -1 })
        ));
    }

    #[test]
    fn empty_network_builds() {
        let cfg = config_with(r#"{}"#, 0, "[]");
        let spec = SpecBuilder::new(&cfg).build().unwrap();
        assert_eq!(spec.n_road_node(), 0);
        assert_eq!(spec.n_road_edge(), 0);
        assert_eq!(spec.initial_state_empty_vehicles().shape(), (0, 2));
    }

    #[test]
    fn optional_sections_loaded() {
        let text = TRIANGLE.trim_end().trim_end_matches('}').to_owned()
            + r#",
            "charger": { "charger_list": "[1, 2]", "charger_speed": "[1, 1]" },
            "road_network": { "travel_time_matrix": "[[0, 1, 2], [1, 0, 1], [2, 1, 0]]" }
        }"#;
        let cfg = EamodConfig::from_json_str(&text).unwrap();
        let spec = SpecBuilder::new(&cfg).build().unwrap();
        assert_eq!(spec.n_charger(), 2);
        assert_eq!(spec.chargers().speed, vec![1.0, 1.0]);
        let tt = spec.road_matrices().travel_time.as_ref().unwrap();
        assert_eq!(tt.get(0, 2), Some(&2.0));
    }

    #[test]
    fn oversized_charge_steps_abort_build() {
        let text = TRIANGLE.replace(r#""n_charge_steps": 4"#, &format!(r#""n_charge_steps": {}"#, i64::MAX));
        let cfg = EamodConfig::from_json_str(&text).unwrap();
        assert!(matches!(
            SpecBuilder::new(&cfg).build(),
            Err(SpecError::TooLarge { what: "initial_state_empty_vehicles", .. })
        ));
    }

    #[test]
    fn bad_road_matrix_aborts_build() {
        let text = TRIANGLE.trim_end().trim_end_matches('}').to_owned()
            + r#",
            "road_network": { "travel_distance_matrix_m": "[[0, 1], [1, 0]]" }
        }"#;
        let cfg = EamodConfig::from_json_str(&text).unwrap();
        assert!(matches!(
            SpecBuilder::new(&cfg).build(),
            Err(SpecError::MatrixShape { what: "travel_distance_matrix_m", .. })
        ));
    }
}
