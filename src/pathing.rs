use std::collections::VecDeque;

use bit_set::BitSet;
use log::debug;
use smallvec::SmallVec;

use crate::cells::Cartesian2DCoordinate;
use crate::errors::{MazeError, Result};
use crate::generators::CARVING_ORIGIN;
use crate::grid::MazeGrid;
use crate::utils::{self, FnvHashMap};

/// Shortest path from `start` to `goal`, both inclusive, moving between cardinally adjacent
/// passable cells.
///
/// Breadth first search from `start` expanding neighbours east, west, south, north, stopping as
/// soon as `goal` is dequeued. An empty path means `goal` cannot be reached from `start`, which
/// includes either end being a wall. `start == goal` on a passable cell gives `[start]`.
///
/// Coordinates outside the grid are an error rather than an empty path.
pub fn shortest_path(grid: &MazeGrid,
                     start: Cartesian2DCoordinate,
                     goal: Cartesian2DCoordinate)
                     -> Result<Vec<Cartesian2DCoordinate>> {

    let start_index = grid.grid_coordinate_to_index(start).ok_or(MazeError::OutOfBounds(start))?;
    if !grid.is_valid_coordinate(goal) {
        return Err(MazeError::OutOfBounds(goal));
    }
    if !grid.is_passable(start) || !grid.is_passable(goal) {
        return Ok(Vec::new());
    }

    let mut visited = BitSet::with_capacity(grid.size());
    let mut parents: FnvHashMap<Cartesian2DCoordinate, Cartesian2DCoordinate> =
        utils::fnv_hashmap(grid.size());
    let mut frontier = VecDeque::new();

    visited.insert(start_index);
    frontier.push_back(start);

    let mut reached = false;
    while let Some(current) = frontier.pop_front() {
        if current == goal {
            reached = true;
            break;
        }

        for &next in grid.passable_neighbours(current).iter() {
            let next_index = match grid.grid_coordinate_to_index(next) {
                Some(index) => index,
                None => continue,
            };
            if visited.insert(next_index) {
                parents.insert(next, current);
                frontier.push_back(next);
            }
        }
    }

    if !reached {
        debug!("No path from {} to {}", start, goal);
        return Ok(Vec::new());
    }

    // The start is the only visited cell without a parent.
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&parent) = parents.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();

    debug!("Path from {} to {}: {} steps", start, goal, path.len() - 1);
    Ok(path)
}

/// Step counts from a start cell to every passable cell reachable from it.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: Cartesian2DCoordinate,
    distances: FnvHashMap<Cartesian2DCoordinate, u32>,
    max_distance: u32,
}

impl Distances {
    /// Flood fill the grid from `start`. A wall start reaches nothing, not even itself.
    pub fn for_grid(grid: &MazeGrid, start: Cartesian2DCoordinate) -> Result<Distances> {

        if !grid.is_valid_coordinate(start) {
            return Err(MazeError::OutOfBounds(start));
        }

        let mut max = 0;
        let mut distances = utils::fnv_hashmap(grid.size());

        if grid.is_passable(start) {
            distances.insert(start, 0);

            // Unweighted steps: a cell's distance is final the first time it is reached, so the
            // distances map doubles as the visited set.
            let mut frontier = vec![start];
            let mut distance = 0;
            while !frontier.is_empty() {

                let mut new_frontier = vec![];
                for cell_coord in &frontier {
                    for &link_coordinate in grid.passable_neighbours(*cell_coord).iter() {
                        if !distances.contains_key(&link_coordinate) {
                            distances.insert(link_coordinate, distance + 1);
                            new_frontier.push(link_coordinate);
                        }
                    }
                }
                if !new_frontier.is_empty() {
                    distance += 1;
                    max = distance;
                }
                frontier = new_frontier;
            }
        }

        Ok(Distances {
            start_coordinate: start,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> Cartesian2DCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    /// Number of cells reached, the start included.
    #[inline(always)]
    pub fn reached_count(&self) -> usize {
        self.distances.len()
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: Cartesian2DCoordinate) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    /// The cells at the maximum distance, sorted row major.
    pub fn furthest_points_on_grid(&self) -> SmallVec<[Cartesian2DCoordinate; 8]> {
        let furthest_distance = self.max();
        let mut furthest = self.distances
            .iter()
            .filter(|&(_, distance)| *distance == furthest_distance)
            .map(|(coord, _)| *coord)
            .collect::<SmallVec<[Cartesian2DCoordinate; 8]>>();
        furthest.sort_by_key(|coord| (coord.y, coord.x));
        furthest
    }
}

/// A longest shortest path in the maze.
///
/// Exact for generated mazes, which are trees: the furthest cell from any start is one end of
/// the longest path, and the furthest cell from that end is the other. On grids with loops or
/// several regions it is only a long path within the region of the first passable cell.
pub fn longest_path(grid: &MazeGrid) -> Vec<Cartesian2DCoordinate> {

    let arbitrary_start_point = if grid.is_passable(CARVING_ORIGIN) {
        Some(CARVING_ORIGIN)
    } else {
        grid.iter().find(|coord| grid.is_passable(*coord))
    };

    let first_distances = match arbitrary_start_point.map(|start| Distances::for_grid(grid, start)) {
        Some(Ok(distances)) => distances,
        _ => return Vec::new(),
    };
    let long_path_start = first_distances.furthest_points_on_grid()[0];

    let distances_from_start = match Distances::for_grid(grid, long_path_start) {
        Ok(distances) => distances,
        Err(_) => return Vec::new(),
    };
    let end_point = distances_from_start.furthest_points_on_grid()[0];

    shortest_path(grid, long_path_start, end_point).unwrap_or_else(|_| Vec::new())
}

/// Every marker on the grid with its shortest path from `start`, markers in row major order.
/// Unreachable markers come with an empty path.
pub fn marker_paths(grid: &MazeGrid,
                    start: Cartesian2DCoordinate)
                    -> Result<Vec<(Cartesian2DCoordinate, Vec<Cartesian2DCoordinate>)>> {
    if !grid.is_valid_coordinate(start) {
        return Err(MazeError::OutOfBounds(start));
    }

    grid.marker_positions()
        .into_iter()
        .map(|marker| shortest_path(grid, start, marker).map(|path| (marker, path)))
        .collect()
}
