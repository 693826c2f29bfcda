use std::path::{Path, PathBuf};

use clap::Parser;
use terminal_routes::{
    graphs::{adjacency_graph::AdjacencyGraph, load, Orientation},
    Router,
};

/// Visits every terminal from a start vertex using the nearest-neighbor
/// heuristic and prints the visiting order with its cost.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Edge list with `tail,head,weight` lines, or a .bincode snapshot
    #[arg(short, long)]
    graph: PathBuf,

    /// Start vertex of the tour
    #[arg(short, long)]
    source: u32,

    /// Terminal vertices to visit
    #[arg(short, long, value_delimiter = ',', num_args = 1..)]
    terminals: Vec<u32>,

    #[arg(long, value_enum, default_value = "undirected")]
    orientation: Orientation,

    /// Print the result as JSON instead of plain text
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

    match router.route(args.source, &args.terminals) {
        Ok(tour) => {
            if args.json {
                println!("{}", serde_json::to_string(&tour).unwrap());
            } else {
                let order = tour
                    .vertices
                    .iter()
                    .map(|vertex| vertex.to_string())
                    .collect::<Vec<_>>()
                    .join(" -> ");
                println!("visiting order {} with cost {}", order, tour.distance);
            }
        }
        Err(error) => {
            eprintln!("{}", error);
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
