use std::char;
use std::fmt;

use crate::cells::{Cartesian2DCoordinate, CellState};
use crate::grid::MazeGrid;
use crate::pathing::Distances;
use crate::utils::{self, FnvHashSet};

/// Chooses the character drawn for each cell of a text dump.
pub trait GridDisplay {
    /// Render the contents of a grid cell as a single character.
    /// Defaults to the cell state digit.
    fn render_cell(&self, _: Cartesian2DCoordinate, state: CellState) -> char {
        state.as_char()
    }
}

/// Plain cell state digits: wall `1`, floor `0`, marker `2`.
#[derive(Debug, Copy, Clone)]
pub struct CellStateDisplay;
impl GridDisplay for CellStateDisplay {}

/// Debug dump of the grid, one line per row in increasing `y`, one digit per cell in
/// increasing `x`, each row terminated by a newline.
pub fn render_text(grid: &MazeGrid) -> String {
    render_text_with(grid, &CellStateDisplay)
}

pub fn render_text_with<D: GridDisplay + ?Sized>(grid: &MazeGrid, display: &D) -> String {
    let mut output = String::with_capacity(grid.size() + grid.height().0);

    for (y, row) in grid.iter_row().enumerate() {
        for (x, state) in row.iter().enumerate() {
            let coord = Cartesian2DCoordinate::new(x as u32, y as u32);
            output.push(display.render_cell(coord, *state));
        }
        output.push('\n');
    }
    output
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_text(self))
    }
}

/// Draws `.` on the floor cells of a path, `S` and `E` on its ends.
#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<Cartesian2DCoordinate>,
    start: Option<Cartesian2DCoordinate>,
    end: Option<Cartesian2DCoordinate>,
}
impl PathDisplay {
    pub fn new(path: &[Cartesian2DCoordinate]) -> Self {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay {
            on_path_coordinates,
            start: path.first().cloned(),
            end: path.last().cloned(),
        }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell(&self, coord: Cartesian2DCoordinate, state: CellState) -> char {
        if self.start == Some(coord) {
            'S'
        } else if self.end == Some(coord) {
            'E'
        } else if state == CellState::Floor && self.on_path_coordinates.contains(&coord) {
            '.'
        } else {
            state.as_char()
        }
    }
}

/// Marks start and end points, used when there is no path to draw between them.
#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start_coordinates: Vec<Cartesian2DCoordinate>,
    end_coordinates: Vec<Cartesian2DCoordinate>,
}
impl StartEndPointsDisplay {
    pub fn new(starts: Vec<Cartesian2DCoordinate>,
               ends: Vec<Cartesian2DCoordinate>)
               -> StartEndPointsDisplay {
        StartEndPointsDisplay {
            start_coordinates: starts,
            end_coordinates: ends,
        }
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell(&self, coord: Cartesian2DCoordinate, state: CellState) -> char {
        if self.start_coordinates.contains(&coord) {
            'S'
        } else if self.end_coordinates.contains(&coord) {
            'E'
        } else {
            state.as_char()
        }
    }
}

/// Step count from the flood start as a base 36 digit, wrapping past `z`. Unreached cells keep
/// their state digit, which only ever happens for walls on a generated maze.
impl GridDisplay for Distances {
    fn render_cell(&self, coord: Cartesian2DCoordinate, state: CellState) -> char {
        match self.distance_from_start_to(coord) {
            Some(d) => char::from_digit(d % 36, 36).unwrap_or('?'),
            None => state.as_char(),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::pathing::shortest_path;

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    const CORRIDOR: &str = "11111\n10001\n11101\n12001\n11111\n";

    #[test]
    fn text_dump_matches_digits() {
        let g = MazeGrid::from_text(CORRIDOR).unwrap();
        assert_eq!(render_text(&g), CORRIDOR);
        assert_eq!(format!("{}", g), CORRIDOR);
    }

    #[test]
    fn text_dump_parses_back() {
        let g = MazeGrid::from_text(CORRIDOR).unwrap();
        assert_eq!(MazeGrid::from_text(&render_text(&g)), Ok(g));
    }

    #[test]
    fn text_dump_is_row_major() {
        let g = MazeGrid::from_text("1111111\n1000021\n1111111").unwrap();
        let dump = render_text(&g);
        let lines = dump.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1000021");
    }

    #[test]
    fn path_overlay() {
        let g = MazeGrid::from_text(CORRIDOR).unwrap();
        let path = shortest_path(&g, gc(1, 1), gc(1, 3)).unwrap();
        let dump = render_text_with(&g, &PathDisplay::new(&path));
        assert_eq!(dump, "11111\n1S..1\n111.1\n1E..1\n11111\n");
    }

    #[test]
    fn start_end_overlay() {
        let g = MazeGrid::from_text(CORRIDOR).unwrap();
        let display = StartEndPointsDisplay::new(vec![gc(1, 1)], vec![gc(3, 3)]);
        assert_eq!(render_text_with(&g, &display), "11111\n1S001\n11101\n120E1\n11111\n");
    }

    #[test]
    fn distances_overlay() {
        let g = MazeGrid::from_text(CORRIDOR).unwrap();
        let distances = Distances::for_grid(&g, gc(1, 1)).unwrap();
        assert_eq!(render_text_with(&g, &distances), "11111\n10121\n11131\n16541\n11111\n");
    }
}
