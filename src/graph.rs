//! The maze as an undirected graph of passable cells.

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::grid::MazeGrid;
use crate::utils::{self, FnvHashMap};

/// One node per passable cell, added in row major order, and one edge per pair of cardinally
/// adjacent passable cells.
pub fn passage_graph(grid: &MazeGrid) -> UnGraph<Cartesian2DCoordinate, ()> {
    let passable = grid.iter().filter(|coord| grid.is_passable(*coord)).collect::<Vec<_>>();

    let mut graph = UnGraph::with_capacity(passable.len(), 2 * passable.len());
    let mut node_indices: FnvHashMap<Cartesian2DCoordinate, NodeIndex> =
        utils::fnv_hashmap(passable.len());
    for coord in &passable {
        node_indices.insert(*coord, graph.add_node(*coord));
    }

    // Looking only east and south adds each edge exactly once.
    for coord in &passable {
        for dir in &[CompassPrimary::East, CompassPrimary::South] {
            let neighbour_index = grid.neighbour_at_direction(*coord, *dir)
                .and_then(|neighbour| node_indices.get(&neighbour));
            if let (Some(&a), Some(&b)) = (node_indices.get(coord), neighbour_index) {
                graph.add_edge(a, b, ());
            }
        }
    }

    graph
}

/// Number of separate passable regions. Every generated maze has exactly one.
pub fn region_count(grid: &MazeGrid) -> usize {
    connected_components(&passage_graph(grid))
}

/// Edge list serialisation of the passage graph.
///
/// Line 1: `n m`, the number of vertices and edges. Following lines: one edge per line as a
/// pair of 1-based vertex indices, vertices numbered in row major order of the passable cells.
pub fn edge_list_text(grid: &MazeGrid) -> String {
    let graph = passage_graph(grid);
    let mut graph_data = format!("{} {}\n", graph.node_count(), graph.edge_count());

    for edge in graph.raw_edges() {
        let src_as_1_based_index = edge.source().index() + 1;
        let dst_as_1_based_index = edge.target().index() + 1;
        graph_data.push_str(&format!("{} {}\n", src_as_1_based_index, dst_as_1_based_index));
    }

    graph_data
}
