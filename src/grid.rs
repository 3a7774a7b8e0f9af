use std::fmt;
use std::slice;

use crate::cells::{ALL_DIRECTIONS, Cartesian2DCoordinate, CellState, CompassPrimary,
                   CoordinateSmallVec};
use crate::errors::{MazeError, Result};
use crate::units::{Height, Width};

/// A rectangular grid of cell states stored row major.
///
/// Owned by the caller. Carving and marker placement mutate it, everything else reads it.
#[derive(Clone, PartialEq, Eq)]
pub struct MazeGrid {
    cells: Vec<CellState>,
    width: usize,
    height: usize,
}

impl fmt::Debug for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "MazeGrid :: width: {:?}, height: {:?}, markers: {:?}",
               self.width,
               self.height,
               self.marker_count())
    }
}

impl MazeGrid {
    /// An all wall grid ready for carving.
    ///
    /// Width and height must be odd and at least 3 so that the carving lattice, which steps two
    /// cells at a time from `(1, 1)`, reaches the last interior row and column.
    pub fn new(width: Width, height: Height) -> Result<MazeGrid> {
        MazeGrid::validate_dimensions(width, height)?;
        Ok(MazeGrid {
            cells: vec![CellState::Wall; width.0 * height.0],
            width: width.0,
            height: height.0,
        })
    }

    pub fn validate_dimensions(width: Width, height: Height) -> Result<()> {
        let (Width(w), Height(h)) = (width, height);
        let valid = |d: usize| d >= 3 && d % 2 == 1 && d <= u32::MAX as usize;
        if valid(w) && valid(h) {
            Ok(())
        } else {
            Err(MazeError::InvalidDimensions { width: w, height: h })
        }
    }

    /// Parse the `render_text` format: one line per row of `0` (floor), `1` (wall) and `2`
    /// (marker) digits. Surrounding whitespace on each line is ignored.
    ///
    /// Any rectangular shape is accepted, so hand made grids (including ones with
    /// unreachable pockets) can be described for path queries.
    pub fn from_text(text: &str) -> Result<MazeGrid> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (index, raw_line) in text.trim().lines().enumerate() {
            let line_number = index + 1;
            let line = raw_line.trim();
            let row = line.chars()
                .map(CellState::from_char)
                .collect::<Option<Vec<CellState>>>()
                .ok_or(MazeError::MalformedText { line: line_number })?;

            match width {
                None if !row.is_empty() => width = Some(row.len()),
                Some(w) if w == row.len() => {}
                _ => return Err(MazeError::MalformedText { line: line_number }),
            }
            cells.extend(row);
            height += 1;
        }

        match width {
            Some(w) if w <= u32::MAX as usize && height <= u32::MAX as usize => {
                Ok(MazeGrid {
                    cells,
                    width: w,
                    height,
                })
            }
            _ => Err(MazeError::MalformedText { line: 1 }),
        }
    }

    #[inline]
    pub fn width(&self) -> Width {
        Width(self.width)
    }

    #[inline]
    pub fn height(&self) -> Height {
        Height(self.height)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Is the grid coordinate within the grid's dimensions.
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.width && (coord.y as usize) < self.height
    }

    /// Strictly inside the outer wall ring.
    #[inline]
    pub fn is_interior(&self, coord: Cartesian2DCoordinate) -> bool {
        let (x, y) = (coord.x as usize, coord.y as usize);
        x >= 1 && y >= 1 && x + 1 < self.width && y + 1 < self.height
    }

    #[inline]
    pub fn is_border(&self, coord: Cartesian2DCoordinate) -> bool {
        self.is_valid_coordinate(coord) && !self.is_interior(coord)
    }

    /// Convert a grid coordinate to a one dimensional row major index in `0..grid.size()`.
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn index_to_grid_coordinate(&self, index: usize) -> Option<Cartesian2DCoordinate> {
        if index < self.cells.len() {
            Some(Cartesian2DCoordinate::new((index % self.width) as u32,
                                            (index / self.width) as u32))
        } else {
            None
        }
    }

    #[inline]
    pub fn cell(&self, coord: Cartesian2DCoordinate) -> Option<CellState> {
        self.grid_coordinate_to_index(coord).map(|index| self.cells[index])
    }

    pub fn set_cell(&mut self, coord: Cartesian2DCoordinate, state: CellState) -> Result<()> {
        let index = self.grid_coordinate_to_index(coord)
            .ok_or(MazeError::OutOfBounds(coord))?;
        self.cells[index] = state;
        Ok(())
    }

    /// Overwrite every cell.
    pub fn fill(&mut self, state: CellState) {
        for cell in &mut self.cells {
            *cell = state;
        }
    }

    /// Not a wall. Out of bounds coordinates are never passable.
    #[inline]
    pub fn is_passable(&self, coord: Cartesian2DCoordinate) -> bool {
        self.cell(coord).map_or(false, CellState::is_passable)
    }

    #[inline]
    pub fn is_marker(&self, coord: Cartesian2DCoordinate) -> bool {
        self.cell(coord) == Some(CellState::Marker)
    }

    /// Turn a marker back into plain floor once a collaborator has collected it.
    /// Returns true if there was a marker at `coord`.
    pub fn collect_marker(&mut self, coord: Cartesian2DCoordinate) -> bool {
        match self.grid_coordinate_to_index(coord) {
            Some(index) if self.cells[index] == CellState::Marker => {
                self.cells[index] = CellState::Floor;
                true
            }
            _ => false,
        }
    }

    pub fn neighbour_at_direction(&self,
                                  coord: Cartesian2DCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<Cartesian2DCoordinate> {
        coord.offset(direction, 1).filter(|neighbour| self.is_valid_coordinate(*neighbour))
    }

    /// In bounds cells east, west, south and north of `coord` (in that order), walls included.
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        ALL_DIRECTIONS.iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    /// Neighbours that can be walked onto, in the fixed expansion order.
    pub fn passable_neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        self.neighbours(coord)
            .into_iter()
            .filter(|neighbour| self.is_passable(*neighbour))
            .collect()
    }

    /// Row major iteration over every coordinate.
    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter {
            width: self.width,
            current_cell_number: 0,
            cells_count: self.cells.len(),
        }
    }

    /// Rows of cell states, increasing `y`.
    #[inline]
    pub fn iter_row(&self) -> slice::Chunks<'_, CellState> {
        self.cells.chunks(self.width)
    }

    pub fn count_cells(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    #[inline]
    pub fn floor_count(&self) -> usize {
        self.count_cells(CellState::Floor)
    }

    #[inline]
    pub fn marker_count(&self) -> usize {
        self.count_cells(CellState::Marker)
    }

    /// Floor cells strictly inside the outer ring.
    pub fn interior_floor_count(&self) -> usize {
        self.iter()
            .filter(|coord| self.is_interior(*coord) && self.cell(*coord) == Some(CellState::Floor))
            .count()
    }

    /// Marker coordinates in row major order.
    pub fn marker_positions(&self) -> Vec<Cartesian2DCoordinate> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == CellState::Marker)
            .filter_map(|(index, _)| self.index_to_grid_coordinate(index))
            .collect()
    }

    /// Flat row major copy of the grid as digits (wall 1, floor 0, marker 2) for renderers
    /// that want a one dimensional array.
    pub fn to_row_major(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.as_digit()).collect()
    }
}

#[derive(Clone)]
pub struct CellIter {
    width: usize,
    current_cell_number: usize,
    cells_count: usize,
}

impl fmt::Debug for CellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = Cartesian2DCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = Cartesian2DCoordinate::new((self.current_cell_number % self.width) as u32,
                                                   (self.current_cell_number / self.width) as u32);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.current_cell_number;
        (remaining, Some(remaining))
    }
}
