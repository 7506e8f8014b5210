//! navigate — shortest route with a traffic-aware travel time.
//!
//! Endpoints are node ids (`--from/--to`) or coordinates snapped to the
//! nearest node (`--from-point/--to-point`).  Traffic edits are read from a
//! `node_a,node_b,level` CSV file.  `--pairs A:B,C:D,...` routes a batch of
//! node pairs across all cores instead of planning a single trip.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::json;

use phuongmai::{parse_node_pair, parse_point};
use sn_core::{GeoPoint, NodeId, TravelMode};
use sn_graph::read_graph;
use sn_session::{route_batch, RoutePlan, Session, SessionBuilder};
use sn_spatial::{AStarRouter, Directedness, RoadNetwork};
use sn_traffic::{estimate_time, legend, read_traffic_file, TrafficCache};

#[derive(Parser)]
#[command(name = "navigate", about = "Route across a refined street graph")]
struct Cli {
    /// Refined graph (JSON)
    #[arg(long)]
    graph: PathBuf,

    /// Batch of `A:B` node pairs, routed in parallel
    #[arg(long, value_parser = parse_node_pair, value_delimiter = ',', num_args = 1..,
          conflicts_with_all = ["from", "from_point"])]
    pairs: Vec<(NodeId, NodeId)>,

    /// Origin node id
    #[arg(long, requires = "to", conflicts_with = "from_point")]
    from: Option<u64>,

    /// Destination node id
    #[arg(long, requires = "from")]
    to: Option<u64>,

    /// Origin as `lat,lon`
    #[arg(long, value_parser = parse_point, requires = "to_point")]
    from_point: Option<GeoPoint>,

    /// Destination as `lat,lon`
    #[arg(long, value_parser = parse_point, requires = "from_point")]
    to_point: Option<GeoPoint>,

    /// walk | moped | car
    #[arg(long, default_value = "walk")]
    mode: TravelMode,

    /// Explicit base speed in m/s, overriding the mode preset
    #[arg(long)]
    speed: Option<f64>,

    /// Traffic edits CSV (`node_a,node_b,level`)
    #[arg(long)]
    traffic: Option<PathBuf>,

    /// Treat every street as two-way (pedestrian network)
    #[arg(long)]
    undirected: bool,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let graph = read_graph(&cli.graph).with_context(|| format!("reading {}", cli.graph.display()))?;
    let directedness = if cli.undirected { Directedness::Undirected } else { Directedness::Directed };
    let network = RoadNetwork::from_street_graph(&graph, directedness)?;

    let traffic = match &cli.traffic {
        Some(path) => read_traffic_file(path).with_context(|| format!("reading {}", path.display()))?,
        None => TrafficCache::new(),
    };

    let mut builder = SessionBuilder::new(&network, AStarRouter).mode(cli.mode).traffic(traffic);
    if let Some(mps) = cli.speed {
        builder = builder.base_speed(mps);
    }
    let session = builder.build()?;

    if !cli.pairs.is_empty() {
        print_batch(&session, &cli.pairs);
        return Ok(());
    }

    let plan = match (cli.from, cli.to, cli.from_point, cli.to_point) {
        (Some(a), Some(b), _, _) => session.plan(NodeId(a), NodeId(b))?,
        (_, _, Some(a), Some(b)) => session.plan_between(a, b)?,
        _ => bail!("give either --from/--to or --from-point/--to-point"),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan_json(&plan, session.mode(), session.base_speed_mps()))?);
    } else {
        print_plan(&plan, session.mode(), session.base_speed_mps());
    }
    Ok(())
}

fn print_batch(session: &Session<'_, AStarRouter>, pairs: &[(NodeId, NodeId)]) {
    let network = session.network();
    for (&(from, to), result) in pairs.iter().zip(route_batch(network, &AStarRouter, pairs)) {
        let line = result.map_err(anyhow::Error::from).and_then(|route| {
            let eta = estimate_time(network, session.traffic(), &route.nodes, session.base_speed_mps())?;
            Ok(format!("{:>9.1} m  {eta}", route.distance_m))
        });
        match line {
            Ok(line) => println!("{:>12} -> {:<12} {line}", from.0, to.0),
            Err(e) => println!("{:>12} -> {:<12} error: {e}", from.0, to.0),
        }
    }
}

fn print_plan(plan: &RoutePlan, mode: TravelMode, speed: f64) {
    let (min, sec) = plan.eta.minutes_seconds();
    println!("mode        {mode} ({speed} m/s)");
    if plan.route.is_trivial() {
        println!("origin and destination are the same node");
        return;
    }
    println!("distance    {:.1} m over {} nodes", plan.route.distance_m, plan.route.nodes.len());
    println!("eta         {} ({min} min {sec:02} s)", plan.eta);
    println!("peak level  {}", plan.eta.peak_level);
    println!("segments:");
    for s in &plan.overlay {
        println!(
            "  {:>12} -> {:<12} level {}  {}  weight {}",
            s.from.0,
            s.to.0,
            s.level.get(),
            s.color,
            s.weight
        );
    }
    let keys: Vec<String> = legend()
        .iter()
        .map(|(level, color)| format!("{color} {}", level.label()))
        .collect();
    println!("legend: {}", keys.join(", "));
}

fn plan_json(plan: &RoutePlan, mode: TravelMode, speed: f64) -> serde_json::Value {
    json!({
        "mode": mode.as_str(),
        "base_speed_mps": speed,
        "distance_m": plan.route.distance_m,
        "nodes": plan.route.nodes.iter().map(|n| n.0).collect::<Vec<_>>(),
        "eta_secs": plan.eta.total_secs,
        "eta": plan.eta.to_string(),
        "peak_level": plan.eta.peak_level.get(),
        "segments": plan.overlay.iter().map(|s| json!({
            "from": s.from.0,
            "to": s.to.0,
            "level": s.level.get(),
            "color": s.color.to_hex(),
            "weight": s.weight,
            "coords": s.coords.iter().map(|p| [p.lat, p.lon]).collect::<Vec<_>>(),
        })).collect::<Vec<_>>(),
    })
}
