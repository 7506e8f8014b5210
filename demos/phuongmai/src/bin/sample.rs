//! sample — write the Phuong Mai sample network and a matching id pool.
//!
//! ```text
//! sample --out raw.json --ids pool.txt
//! discretize --raw raw.json --ids pool.txt --out refined.json --bridge 303:306
//! navigate --graph refined.json --from 301 --to 306
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use phuongmai::sample_network;
use sn_discretize::generate_id_pool;
use sn_graph::{write_graph, write_id_pool};

#[derive(Parser)]
#[command(name = "sample", about = "Write the sample raw street graph and a synthetic id pool")]
struct Cli {
    /// Raw graph output (JSON)
    #[arg(long)]
    out: PathBuf,

    /// Id pool output (one id per line)
    #[arg(long)]
    ids: PathBuf,

    /// Number of synthetic ids to generate
    #[arg(long, default_value_t = 5_000)]
    pool_size: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let graph = sample_network()?;
    write_graph(&cli.out, &graph)?;

    let pool = generate_id_pool(cli.pool_size, cli.seed, &graph);
    write_id_pool(&cli.ids, &pool)?;

    info!(
        "wrote {} nodes / {} edges to {} and {} ids to {}",
        graph.node_count(),
        graph.edge_count(),
        cli.out.display(),
        pool.len(),
        cli.ids.display()
    );
    Ok(())
}
