use std::path::PathBuf;

use clap::Parser;
use terminal_routes::graphs::{load, Graph, Orientation};

/// Converts a text edge list into a bincode snapshot, which is much
/// faster to load on repeated runs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Edge list with `tail,head,weight` lines
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the .bincode snapshot
    #[arg(short, long)]
    output: PathBuf,

    #[arg(long, value_enum, default_value = "undirected")]
    orientation: Orientation,
}

fn main() {
    flexi_logger::Logger::try_with_env_or_str("info")
        .unwrap()
        .start()
        .unwrap();
    let args = Args::parse();

    let edges = load::read_edges_from_csv(&args.input).unwrap();
    let graph = load::graph_from_edge_list(&edges, args.orientation).unwrap();
    load::write_graph_snapshot(&args.output, &graph).unwrap();

    println!(
        "wrote snapshot with {} vertices and {} edges to {}",
        graph.number_of_vertices(),
        graph.number_of_edges(),
        args.output.display()
    );
}
