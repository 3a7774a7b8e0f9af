use docopt::Docopt;
use itertools::Itertools;
use keymaze::{
    cells::Cartesian2DCoordinate,
    generators::{self, CARVING_ORIGIN},
    graph,
    grid::MazeGrid,
    grid_displays::{render_text, render_text_with, PathDisplay, StartEndPointsDisplay},
    pathing::{self, Distances},
    units::{Height, MarkersCount, Width},
};
use log::{info, warn};
use serde_derive::Deserialize;
use std::{
    io,
    io::prelude::*,
    fs::File,
};

const USAGE: &str = "Keymaze

Usage:
    keymaze_driver -h | --help
    keymaze_driver [options]

Options:
    -h --help              Show this screen.
    --size=<n>             The maze is n * n cells, overriding width and height.
    --width=<w>            Maze width, odd and at least 3 [default: 21].
    --height=<h>           Maze height, odd and at least 3 [default: 21].
    --markers=<k>          Number of collectible markers to place on the floor [default: 3].
    --seed=<s>             Random seed. The same seed and dimensions replay the same maze.
    --show-path            Draw the shortest path from the start point to the end point.
                           The end point is the cell furthest from the start if not given.
    --longest-path         Draw the longest path through the maze.
    --show-distances       Draw the step count from the start point to every cell, base 36.
    --start-x=<x>          x coordinate of the start point, the carving origin if not given.
    --start-y=<y>          y coordinate of the start point.
    --end-x=<e1>           x coordinate of the path end point.
    --end-y=<e2>           y coordinate of the path end point.
    --marker-paths         List the shortest path from the start point to every marker.
    --flat                 Output the grid as a single comma separated row major line.
    --text-out=<path>      Write the maze text to a file instead of standard output.
    --save-edges=<path>    Serialize the passages to a text file. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
";
#[derive(Debug, Deserialize)]
struct DriverArgs {
    flag_size: Option<usize>,
    flag_width: usize,
    flag_height: usize,
    flag_markers: usize,
    flag_seed: Option<u64>,
    flag_show_path: bool,
    flag_longest_path: bool,
    flag_show_distances: bool,
    flag_start_x: Option<u32>,
    flag_start_y: Option<u32>,
    flag_end_x: Option<u32>,
    flag_end_y: Option<u32>,
    flag_marker_paths: bool,
    flag_flat: bool,
    flag_text_out: String,
    flag_save_edges: String,
}

mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            Io(::std::io::Error);
            Maze(::keymaze::errors::MazeError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: DriverArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let (width, height) = if let Some(square_size) = args.flag_size {
        (square_size, square_size)
    } else {
        (args.flag_width, args.flag_height)
    };

    // One randomness stream for carving and placement so a seed replays both.
    let mut rng = generators::seeded_rng(args.flag_seed);
    let mut maze_grid = MazeGrid::new(Width(width), Height(height))?;
    generators::recursive_backtracker(&mut maze_grid, &mut rng)?;
    let placed = generators::place_markers(&mut maze_grid,
                                           MarkersCount(args.flag_markers),
                                           &mut rng)?;
    info!("Generated {}x{} maze with {} markers", width, height, placed);

    let start = get_start_point(&args);

    let text = if args.flag_flat {
        format!("{}\n", maze_grid.to_row_major().iter().join(","))
    } else {
        render_maze(&maze_grid, &args, start)?
    };

    if args.flag_text_out.is_empty() {
        print!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    if args.flag_marker_paths {
        print_marker_paths(&maze_grid, start)?;
    }

    if !args.flag_save_edges.is_empty() {
        write_text_to_file(&graph::edge_list_text(&maze_grid), &args.flag_save_edges)
            .chain_err(|| format!("Failed to write maze graph to text file {}", args.flag_save_edges))?;
    }

    Ok(())
}

/// Decide how the cells are drawn:
/// - The path between a start and end point, or just the two points if there is no path
/// - The longest path in the maze
/// - Distances from the start point to all other cells
/// - Otherwise the plain cell state digits
fn render_maze(maze_grid: &MazeGrid,
               args: &DriverArgs,
               start: Cartesian2DCoordinate)
               -> Result<String> {

    if args.flag_show_path {

        let end = match get_end_point(args) {
            Some(end) => end,
            None => {
                let distances = Distances::for_grid(maze_grid, start)?;
                distances.furthest_points_on_grid().first().cloned().unwrap_or(start)
            }
        };

        let path = pathing::shortest_path(maze_grid, start, end)?;
        if path.is_empty() {
            warn!("No route from {} to {}", start, end);
            let display = StartEndPointsDisplay::new(vec![start], vec![end]);
            Ok(render_text_with(maze_grid, &display))
        } else {
            info!("Route from {} to {}: {} steps", start, end, path.len() - 1);
            Ok(render_text_with(maze_grid, &PathDisplay::new(&path)))
        }

    } else if args.flag_longest_path {

        let path = pathing::longest_path(maze_grid);
        info!("Longest path: {} steps", path.len().saturating_sub(1));
        Ok(render_text_with(maze_grid, &PathDisplay::new(&path)))

    } else if args.flag_show_distances {

        let distances = Distances::for_grid(maze_grid, start)?;
        info!("Furthest cell from {} is {} steps away", start, distances.max());
        Ok(render_text_with(maze_grid, &distances))

    } else {
        Ok(render_text(maze_grid))
    }
}

fn print_marker_paths(maze_grid: &MazeGrid, start: Cartesian2DCoordinate) -> Result<()> {

    println!();
    println!("MARKER PATHS:");
    for (marker, path) in pathing::marker_paths(maze_grid, start)? {
        if path.is_empty() {
            println!("Marker at {}: no path found", marker);
        } else {
            println!("Marker at {}: {} steps", marker, path.len() - 1);
            println!("  {}", path.iter().join(" -> "));
        }
    }
    Ok(())
}

fn get_start_point(args: &DriverArgs) -> Cartesian2DCoordinate {
    coordinate_pair("start", args.flag_start_x, args.flag_start_y).unwrap_or(CARVING_ORIGIN)
}

fn get_end_point(args: &DriverArgs) -> Option<Cartesian2DCoordinate> {
    coordinate_pair("end", args.flag_end_x, args.flag_end_y)
}

/// A point given on the command line. Half a pair is ignored with a warning.
fn coordinate_pair(name: &str, x: Option<u32>, y: Option<u32>) -> Option<Cartesian2DCoordinate> {
    match (x, y) {
        (Some(x), Some(y)) => Some(Cartesian2DCoordinate::new(x, y)),
        (None, None) => None,
        (Some(_), None) | (None, Some(_)) => {
            warn!("Ignoring {} point, both --{}-x and --{}-y are needed", name, name, name);
            None
        }
    }
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn full_coordinate_pair() {
        assert_eq!(coordinate_pair("start", Some(3), Some(5)),
                   Some(Cartesian2DCoordinate::new(3, 5)));
        assert_eq!(coordinate_pair("start", None, None), None);
    }

    #[test]
    fn half_a_coordinate_pair_is_ignored() {
        assert_eq!(coordinate_pair("end", Some(3), None), None);
        assert_eq!(coordinate_pair("end", None, Some(5)), None);
    }

    #[test]
    fn usage_defaults() {
        let args: DriverArgs = Docopt::new(USAGE)
            .and_then(|d| d.argv(vec!["keymaze_driver", "--start-x=7"]).deserialize())
            .unwrap();
        assert_eq!((args.flag_width, args.flag_height, args.flag_markers), (21, 21, 3));
        assert_eq!(get_start_point(&args), CARVING_ORIGIN);
        assert_eq!(get_end_point(&args), None);
    }
}
