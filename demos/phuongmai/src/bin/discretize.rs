//! discretize — refine a raw street graph into short straight segments.
//!
//! Manual bridges are added first, then curves are flattened and long edges
//! subdivided, drawing synthetic node ids from the pool file.  With
//! `--generate-ids N` a fresh pool (disjoint from the raw graph's ids) is
//! written to `--ids` instead.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};

use phuongmai::parse_node_pair;
use sn_core::NodeId;
use sn_discretize::{generate_id_pool, DiscretizeConfig, Discretizer, IdAllocator, ManualEdge};
use sn_graph::{read_graph, read_id_pool, write_graph, write_id_pool};

#[derive(Parser)]
#[command(name = "discretize", about = "Flatten curves and subdivide long edges of a street graph")]
struct Cli {
    /// Raw graph (JSON)
    #[arg(long)]
    raw: PathBuf,

    /// Id pool file: read for discretization, written with --generate-ids
    #[arg(long)]
    ids: PathBuf,

    /// Refined graph output (JSON)
    #[arg(long, required_unless_present = "generate_ids")]
    out: Option<PathBuf>,

    /// Target segment length S in metres
    #[arg(long, default_value_t = 6.0)]
    min_segment: f64,

    /// Longest accepted manual bridge, in metres
    #[arg(long, default_value_t = 500.0)]
    max_manual_edge: f64,

    /// Manual two-way bridge `A:B` between existing nodes (repeatable)
    #[arg(long = "bridge", value_parser = parse_node_pair)]
    bridges: Vec<(NodeId, NodeId)>,

    /// Generate a pool of N fresh ids instead of discretizing
    #[arg(long)]
    generate_ids: Option<usize>,

    /// Seed for --generate-ids
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut graph = read_graph(&cli.raw).with_context(|| format!("reading {}", cli.raw.display()))?;
    info!("raw graph: {} nodes, {} edges", graph.node_count(), graph.edge_count());

    if let Some(count) = cli.generate_ids {
        let pool = generate_id_pool(count, cli.seed, &graph);
        write_id_pool(&cli.ids, &pool)?;
        info!("wrote {} ids to {}", pool.len(), cli.ids.display());
        return Ok(());
    }
    let Some(out) = cli.out else {
        bail!("--out is required unless --generate-ids is given");
    };

    let pool = read_id_pool(&cli.ids).with_context(|| format!("reading {}", cli.ids.display()))?;
    let config = DiscretizeConfig {
        min_segment_m:     cli.min_segment,
        max_manual_edge_m: cli.max_manual_edge,
    };
    let mut discretizer = Discretizer::new(config, IdAllocator::new(pool))?;

    for (a, b) in cli.bridges {
        match discretizer.add_manual_edge(&mut graph, a, b)? {
            ManualEdge::Added { distance_m } => info!("bridged {a} – {b} ({distance_m:.1} m)"),
            ManualEdge::Rejected { distance_m } => warn!("bridge {a} – {b} rejected ({distance_m:.1} m)"),
        }
    }

    let (refined, report) = discretizer.run(graph)?;
    write_graph(&out, &refined)?;

    println!("{report}");
    println!(
        "refined graph: {} nodes, {} edges -> {}",
        refined.node_count(),
        refined.edge_count(),
        out.display()
    );
    Ok(())
}
