use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::cells::{ALL_DIRECTIONS, Cartesian2DCoordinate, CellState, CompassPrimary};
use crate::errors::{MazeError, Result};
use crate::grid::MazeGrid;
use crate::units::{Height, MarkersCount, Width};

/// Every maze is carved outwards from this cell.
pub const CARVING_ORIGIN: Cartesian2DCoordinate = Cartesian2DCoordinate { x: 1, y: 1 };

/// Marker placement gives up after this many random draws per interior cell.
pub const MAX_PLACEMENT_ATTEMPTS_PER_CELL: usize = 64;

/// The randomness source threaded through generation and placement.
/// A fixed seed replays the same maze, `None` seeds from the operating system.
pub fn seeded_rng(seed: Option<u64>) -> XorShiftRng {
    match seed {
        Some(s) => XorShiftRng::seed_from_u64(s),
        None => XorShiftRng::from_entropy(),
    }
}

/// Generate a fully connected maze of the given odd dimensions.
///
/// The dimensions are checked before any cell is allocated.
pub fn generate_maze(width: Width, height: Height, seed: Option<u64>) -> Result<MazeGrid> {
    let mut grid = MazeGrid::new(width, height)?;
    let mut rng = seeded_rng(seed);
    recursive_backtracker(&mut grid, &mut rng)?;
    Ok(grid)
}

/// One suspended visit of the carving walk: the cell, its shuffled directions and how many of
/// them have been tried.
#[derive(Debug)]
struct CarveFrame {
    coord: Cartesian2DCoordinate,
    directions: [CompassPrimary; 4],
    next: usize,
}

impl CarveFrame {
    fn new<R: Rng + ?Sized>(coord: Cartesian2DCoordinate, rng: &mut R) -> CarveFrame {
        let mut directions = ALL_DIRECTIONS;
        directions.shuffle(rng);
        CarveFrame {
            coord,
            directions,
            next: 0,
        }
    }

    fn next_direction(&mut self) -> Option<CompassPrimary> {
        let dir = self.directions.get(self.next).cloned();
        self.next += 1;
        dir
    }
}

/// Carve a perfect maze into `grid` with the randomised depth first (recursive backtracker)
/// algorithm.
///
/// The grid is reset to walls, then the walk starts at `(1, 1)`. From each cell the four
/// directions are tried in a freshly shuffled order: a still walled cell two steps away that is
/// strictly inside the outer ring gets carved, together with the wall between, and the walk
/// continues from there. When a cell runs out of directions the walk backtracks to the previous
/// one.
///
/// The walk keeps its own stack instead of recursing, as chains in large grids run to many
/// thousands of cells.
///
/// Every odd coordinate lattice cell ends up as floor and reachable from the origin, the outer
/// ring stays wall.
///
/// Grids that are not odd sized and at least 3 by 3, as `from_text` can build, are rejected with
/// `InvalidDimensions` and left untouched.
pub fn recursive_backtracker<R: Rng + ?Sized>(grid: &mut MazeGrid, rng: &mut R) -> Result<()> {
    MazeGrid::validate_dimensions(grid.width(), grid.height())?;
    grid.fill(CellState::Wall);
    carve(grid, CARVING_ORIGIN)?;

    let mut stack = vec![CarveFrame::new(CARVING_ORIGIN, rng)];
    let mut deepest = 1;

    while let Some(frame) = stack.last_mut() {
        let from = frame.coord;
        let dir = match frame.next_direction() {
            Some(dir) => dir,
            None => {
                stack.pop();
                continue;
            }
        };

        let target = from.offset(dir, 2)
            .filter(|target| grid.is_interior(*target) && grid.cell(*target) == Some(CellState::Wall));

        if let Some(target) = target {
            if let Some(between) = from.offset(dir, 1) {
                carve(grid, between)?;
            }
            carve(grid, target)?;
            stack.push(CarveFrame::new(target, rng));
            if stack.len() > deepest {
                deepest = stack.len();
            }
        }
    }

    debug!("Carved {}x{} maze: {} floor cells, deepest carving chain {}",
           grid.width().0,
           grid.height().0,
           grid.floor_count(),
           deepest);
    Ok(())
}

#[inline]
fn carve(grid: &mut MazeGrid, coord: Cartesian2DCoordinate) -> Result<()> {
    grid.set_cell(coord, CellState::Floor)
}

/// Scatter `count` markers over the interior floor cells of `grid`.
///
/// Interior coordinates are sampled uniformly and a sample becomes a marker only if it is still
/// plain floor, so no two markers share a cell. Returns the number of markers placed, which is
/// always `count` on success.
///
/// Fails with `PlacementExhausted` without touching the grid when there are fewer free floor
/// cells than `count`. Sampling is also capped at `MAX_PLACEMENT_ATTEMPTS_PER_CELL` draws per
/// interior cell; hitting the cap rolls back the markers placed by this call.
pub fn place_markers<R: Rng + ?Sized>(grid: &mut MazeGrid,
                                      count: MarkersCount,
                                      rng: &mut R)
                                      -> Result<usize> {
    let MarkersCount(requested) = count;
    let available = grid.interior_floor_count();

    if requested > available {
        warn!("Rejected request for {} markers, only {} floor cells free",
              requested,
              available);
        return Err(MazeError::PlacementExhausted { requested, available });
    }
    if requested == 0 {
        return Ok(0);
    }

    // available > 0 means the interior is not empty, so both ranges below are non empty.
    let (Width(width), Height(height)) = (grid.width(), grid.height());
    let interior_cells = (width - 2) * (height - 2);
    let max_attempts = MAX_PLACEMENT_ATTEMPTS_PER_CELL * interior_cells;

    let mut placed = Vec::with_capacity(requested);
    let mut attempts = 0;

    while placed.len() < requested {
        if attempts == max_attempts {
            warn!("Gave up placing markers after {} attempts, {} of {} placed",
                  attempts,
                  placed.len(),
                  requested);
            for coord in placed {
                grid.set_cell(coord, CellState::Floor)?;
            }
            return Err(MazeError::PlacementExhausted { requested, available });
        }
        attempts += 1;

        let x = rng.gen_range(1..width - 1) as u32;
        let y = rng.gen_range(1..height - 1) as u32;
        let coord = Cartesian2DCoordinate::new(x, y);

        if grid.cell(coord) == Some(CellState::Floor) {
            grid.set_cell(coord, CellState::Marker)?;
            placed.push(coord);
        }
    }

    debug!("Placed {} markers in {} attempts", placed.len(), attempts);
    Ok(placed.len())
}

/// `place_markers` with its own randomness source, see `seeded_rng`.
pub fn place_markers_seeded(grid: &mut MazeGrid,
                            count: MarkersCount,
                            seed: Option<u64>)
                            -> Result<usize> {
    let mut rng = seeded_rng(seed);
    place_markers(grid, count, &mut rng)
}
