use smallvec::SmallVec;
use std::convert::From;
use std::fmt;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    /// The coordinate `steps` cells away in the given direction.
    /// Returns None if the result is not representable (e.g. west of column zero).
    pub fn offset(self, dir: CompassPrimary, steps: u32) -> Option<Cartesian2DCoordinate> {
        let (x, y) = (self.x, self.y);
        match dir {
            CompassPrimary::East => x.checked_add(steps).map(|nx| Cartesian2DCoordinate::new(nx, y)),
            CompassPrimary::West => x.checked_sub(steps).map(|nx| Cartesian2DCoordinate::new(nx, y)),
            CompassPrimary::South => y.checked_add(steps).map(|ny| Cartesian2DCoordinate::new(x, ny)),
            CompassPrimary::North => y.checked_sub(steps).map(|ny| Cartesian2DCoordinate::new(x, ny)),
        }
    }

    /// Manhattan distance between two coordinates.
    pub fn manhattan_distance(self, other: Cartesian2DCoordinate) -> u32 {
        let dx = if self.x > other.x { self.x - other.x } else { other.x - self.x };
        let dy = if self.y > other.y { self.y - other.y } else { other.y - self.y };
        dx + dy
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Display for Cartesian2DCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    East,
    West,
    South,
    North,
}

/// Fixed neighbour expansion order: (+1,0), (-1,0), (0,+1), (0,-1).
/// Breadth first search ties are broken by this order.
pub const ALL_DIRECTIONS: [CompassPrimary; 4] = [CompassPrimary::East,
                                                 CompassPrimary::West,
                                                 CompassPrimary::South,
                                                 CompassPrimary::North];

/// State of one grid cell.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CellState {
    /// Impassable.
    Wall,
    /// Passable, no marker.
    Floor,
    /// Passable, carries one collectible.
    Marker,
}

impl CellState {
    /// Small integer encoding used by the text dump and the flat row-major export.
    #[inline]
    pub fn as_digit(self) -> u8 {
        match self {
            CellState::Floor => 0,
            CellState::Wall => 1,
            CellState::Marker => 2,
        }
    }

    pub fn from_digit(digit: u8) -> Option<CellState> {
        match digit {
            0 => Some(CellState::Floor),
            1 => Some(CellState::Wall),
            2 => Some(CellState::Marker),
            _ => None,
        }
    }

    #[inline]
    pub fn as_char(self) -> char {
        (b'0' + self.as_digit()) as char
    }

    pub fn from_char(c: char) -> Option<CellState> {
        c.to_digit(10).and_then(|d| CellState::from_digit(d as u8))
    }

    #[inline]
    pub fn is_passable(self) -> bool {
        self != CellState::Wall
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn offset_in_each_direction() {
        let c = Cartesian2DCoordinate::new(3, 3);
        assert_eq!(c.offset(CompassPrimary::East, 1), Some(Cartesian2DCoordinate::new(4, 3)));
        assert_eq!(c.offset(CompassPrimary::West, 2), Some(Cartesian2DCoordinate::new(1, 3)));
        assert_eq!(c.offset(CompassPrimary::South, 2), Some(Cartesian2DCoordinate::new(3, 5)));
        assert_eq!(c.offset(CompassPrimary::North, 1), Some(Cartesian2DCoordinate::new(3, 2)));
    }

    #[test]
    fn offset_not_representable() {
        let origin = Cartesian2DCoordinate::new(0, 1);
        assert_eq!(origin.offset(CompassPrimary::West, 1), None);
        assert_eq!(origin.offset(CompassPrimary::North, 2), None);

        let far = Cartesian2DCoordinate::new(u32::MAX, u32::MAX - 1);
        assert_eq!(far.offset(CompassPrimary::East, 1), None);
        assert_eq!(far.offset(CompassPrimary::South, 2), None);
    }

    #[test]
    fn manhattan() {
        let a = Cartesian2DCoordinate::new(1, 5);
        let b = Cartesian2DCoordinate::new(4, 1);
        assert_eq!(a.manhattan_distance(b), 7);
        assert_eq!(b.manhattan_distance(a), 7);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn cell_state_digits() {
        assert_eq!(CellState::Wall.as_digit(), 1);
        assert_eq!(CellState::Floor.as_digit(), 0);
        assert_eq!(CellState::Marker.as_digit(), 2);
        assert_eq!(CellState::Marker.as_char(), '2');

        for state in &[CellState::Wall, CellState::Floor, CellState::Marker] {
            assert_eq!(CellState::from_char(state.as_char()), Some(*state));
        }
        assert_eq!(CellState::from_digit(3), None);
        assert_eq!(CellState::from_char('x'), None);
    }

    #[test]
    fn only_walls_block() {
        assert!(!CellState::Wall.is_passable());
        assert!(CellState::Floor.is_passable());
        assert!(CellState::Marker.is_passable());
    }
}
