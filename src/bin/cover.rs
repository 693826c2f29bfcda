use std::path::{Path, PathBuf};

use clap::Parser;
use rand::Rng;
use terminal_routes::{
    graphs::{adjacency_graph::AdjacencyGraph, load, Orientation},
    Router,
};

/// Computes the minimum connecting weight over a set of terminal
/// vertices, optionally repeating with freshly sampled random weights.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Edge list with `tail,head,weight` lines, or a .bincode snapshot
    #[arg(short, long)]
    graph: PathBuf,

    /// Terminal vertices to connect
    #[arg(short, long, value_delimiter = ',', num_args = 1..)]
    terminals: Vec<u32>,

    #[arg(long, value_enum, default_value = "undirected")]
    orientation: Orientation,

    /// Additional rounds, each on freshly sampled uniform weights
    #[arg(long, default_value_t = 0)]
    resample_rounds: u32,

    #[arg(long, default_value_t = 1)]
    min_weight: u32,

    #[arg(long, default_value_t = 100)]
    max_weight: u32,

    /// Print results as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() {
    flexi_logger::Logger::try_with_env_or_str("info")
        .unwrap()
        .start()
        .unwrap();
    let args = Args::parse();

    let graph = load_graph(&args.graph, args.orientation);
    let router = Router::new(graph);

    print_cover(&router, &args, 0);

    let mut rng = rand::thread_rng();
    for round in 1..=args.resample_rounds {
        router.reweight(|_, _| rng.gen_range(args.min_weight..=args.max_weight));
        print_cover(&router, &args, round);
    }
}

fn print_cover(router: &Router, args: &Args, round: u32) {
    match router.cover(&args.terminals) {
        Ok(cover) => {
            if args.json {
                println!("{}", serde_json::to_string(&cover).unwrap());
            } else {
                println!("round {}: minimum connecting weight {}", round, cover.weight);
            }
        }
        Err(error) => {
            eprintln!("round {}: {}", round, error);
            std::process::exit(1);
        }
    }
}

fn load_graph(path: &Path, orientation: Orientation) -> AdjacencyGraph {
    if path.to_str().unwrap().ends_with(".bincode") {
        return load::read_graph_snapshot(path).unwrap();
    }

    let edges = load::read_edges_from_csv(path).unwrap();
    load::graph_from_edge_list(&edges, orientation).unwrap()
}
