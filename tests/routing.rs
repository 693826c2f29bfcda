use itertools::Itertools;
use terminal_routes::{
    graphs::{adjacency_graph::AdjacencyGraph, Distance, Orientation},
    terminals::{reduced_graph::ReducedGraph, tour::nearest_neighbor_tour},
    Router, RoutingError,
};

fn cover_example() -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new(6, Orientation::Undirected);
    graph.add_edge(0, 1, 4).unwrap();
    graph.add_edge(0, 2, 3).unwrap();
    graph.add_edge(1, 2, 1).unwrap();
    graph.add_edge(1, 3, 2).unwrap();
    graph.add_edge(2, 3, 4).unwrap();
    graph.add_edge(3, 4, 2).unwrap();
    graph.add_edge(4, 5, 6).unwrap();
    graph.add_edge(3, 5, 5).unwrap();
    graph
}

// the same graph with vertex 5 cut off entirely
fn cover_example_with_isolated_terminal() -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new(6, Orientation::Undirected);
    graph.add_edge(0, 1, 4).unwrap();
    graph.add_edge(0, 2, 3).unwrap();
    graph.add_edge(1, 2, 1).unwrap();
    graph.add_edge(1, 3, 2).unwrap();
    graph.add_edge(2, 3, 4).unwrap();
    graph.add_edge(3, 4, 2).unwrap();
    graph
}

#[test]
fn cover_connects_the_terminals_for_thirteen() {
    let router = Router::new(cover_example());
    let cover = router.cover(&[0, 3, 4, 5]).unwrap();

    assert_eq!(cover.weight, 13);
    assert_eq!(cover.edges, vec![(3, 4), (3, 5), (0, 3)]);
}

#[test]
fn route_visits_the_nearest_terminal_first() {
    let router = Router::new(cover_example());
    let tour = router.route(0, &[3, 4, 5]).unwrap();

    // greedy: 0 -> 3 (6), 3 -> 4 (2), 4 -> 5 (6)
    assert_eq!(tour.vertices, vec![0, 3, 4, 5]);
    assert_eq!(tour.distance, 14);
}

#[test]
fn route_cost_is_reproducible() {
    let router = Router::new(cover_example());
    let first = router.route(0, &[3, 4, 5]).unwrap();
    let second = router.route(0, &[3, 4, 5]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn nearest_neighbor_never_beats_the_optimal_tour() {
    let graph = cover_example();
    let reduced = ReducedGraph::build(&graph, &[0, 3, 4, 5]).unwrap();
    let tour = nearest_neighbor_tour(&reduced, 0).unwrap();

    // brute-force the optimal visiting order over the same matrix
    let optimal = (1..reduced.number_of_terminals())
        .permutations(reduced.number_of_terminals() - 1)
        .map(|order| {
            let mut cost: Distance = 0;
            let mut current = 0;
            for position in order {
                cost += reduced.distance(current, position);
                current = position;
            }
            cost
        })
        .min()
        .unwrap();

    assert!(tour.distance >= optimal);
}

#[test]
fn an_isolated_terminal_breaks_the_cover() {
    let router = Router::new(cover_example_with_isolated_terminal());
    let error = router.cover(&[0, 3, 4, 5]).unwrap_err();

    match error {
        RoutingError::DisconnectedTerminalSet { unreachable } => {
            assert_eq!(unreachable, vec![(0, 5), (3, 5), (4, 5)]);
        }
        other => panic!("expected DisconnectedTerminalSet, got {other:?}"),
    }
}

#[test]
fn an_isolated_terminal_breaks_the_tour() {
    let router = Router::new(cover_example_with_isolated_terminal());
    let error = router.route(0, &[3, 4, 5]).unwrap_err();

    match error {
        RoutingError::NoFeasibleTour {
            cost_so_far,
            unreached,
        } => {
            // 0 -> 3 -> 4 succeeded before 5 turned out unreachable
            assert_eq!(cost_so_far, 8);
            assert_eq!(unreached, vec![5]);
        }
        other => panic!("expected NoFeasibleTour, got {other:?}"),
    }
}

#[test]
fn queries_after_reweight_see_only_the_new_weights() {
    let router = Router::new(cover_example());
    assert_eq!(router.shortest_path_distance(0, 3).unwrap(), 6);

    router.reweight(|_, _| 1);

    // every step now costs one, so distance equals hop count
    assert_eq!(router.shortest_path_distance(0, 3).unwrap(), 2);
    assert_eq!(router.cover(&[0, 3, 4, 5]).unwrap().weight, 2 + 1 + 1);
}

#[test]
fn out_of_range_terminals_are_rejected_up_front() {
    let router = Router::new(cover_example());
    assert_eq!(
        router.cover(&[0, 99]).unwrap_err(),
        RoutingError::InvalidVertex {
            vertex: 99,
            number_of_vertices: 6,
        }
    );
    assert_eq!(
        router.route(0, &[99]).unwrap_err(),
        RoutingError::InvalidVertex {
            vertex: 99,
            number_of_vertices: 6,
        }
    );
}

#[test]
fn duplicate_terminals_are_rejected_up_front() {
    let router = Router::new(cover_example());
    assert_eq!(
        router.cover(&[3, 4, 3]).unwrap_err(),
        RoutingError::DuplicateTerminal { vertex: 3 }
    );
}
