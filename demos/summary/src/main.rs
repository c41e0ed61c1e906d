//! summary — build an EAMoD spec from a JSON configuration and print it.
//!
//! ```text
//! cargo run -p summary -- [CONFIG_JSON] [LOG_LEVEL]
//! ```
//!
//! Without arguments it loads `demos/summary/data/config.json`, a 5-node
//! network with two chargers.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

use eamod_core::NodeId;
use eamod_spec::{EamodConfig, SpecBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/config.json");

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args.next().map_or_else(|| PathBuf::from(DEFAULT_CONFIG), PathBuf::from);
    let level = args
        .next()
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::DEBUG);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    // 1. Load configuration.
    info!("loading configuration from {}", path.display());
    let config = EamodConfig::from_path(&path)
        .with_context(|| format!("reading {}", path.display()))?;

    // 2. Build spec.
    let spec = SpecBuilder::new(&config).build().context("building EAMoD spec")?;

    // 3. Summary.
    println!("=== EAMoD spec ===");
    println!(
        "Road network: {} nodes, {} edges, {} chargers",
        spec.n_road_node(),
        spec.n_road_edge(),
        spec.n_charger()
    );
    println!(
        "Vehicle state: {} charge steps, {} passenger flows, {} vehicles",
        spec.n_charge_steps(),
        spec.n_passanger_flow(),
        spec.n_vehicle()
    );
    println!();

    println!("{:<6} {:<14} {:<14} {:<8} {:<14}", "Node", "Neighbours", "Predecessors", "Out", "Edge numbers");
    println!("{}", "-".repeat(60));
    for i in 0..spec.n_road_node() {
        let node = NodeId(i as u32);
        let preds: Vec<i64> = spec.road_reverse_adjacency_list()[i].iter().map(|p| p.label()).collect();
        let edges: Vec<u32> = (0..spec.road_node_outdegree()[i])
            .filter_map(|slot| spec.graph().edge_number(node, slot))
            .map(|e| e.0)
            .collect();
        println!(
            "{:<6} {:<14} {:<14} {:<8} {:<14}",
            node.label(),
            format!("{:?}", spec.road_adjacency_list().neighbors(i)),
            format!("{preds:?}"),
            spec.road_node_outdegree()[i],
            format!("{edges:?}"),
        );
    }

    Ok(())
}
