use smallvec::SmallVec;

use crate::units::RoomsPerSide;

/// A position in the full interleaved grid array: rooms, connectors and posts alike.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: usize,
    pub column: usize,
}

/// A position in room-index space, `0..size` on each axis.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct RoomCoordinate {
    pub row: usize,
    pub column: usize,
}

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;
pub type RoomSmallVec = SmallVec<[RoomCoordinate; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellKind {
    /// Odd row and odd column.
    Room,
    /// Exactly one of row or column is odd; sits between two rooms.
    Connector,
    /// Even row and even column; a structural corner.
    Post,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellMarker {
    Wall,
    Passage,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    /// Neighbour inspection order used while carving: east, south, west, north.
    pub const CARVING_ORDER: [CompassPrimary; 4] = [CompassPrimary::East,
                                                    CompassPrimary::South,
                                                    CompassPrimary::West,
                                                    CompassPrimary::North];

    /// (row, column) step of one unit in this direction.
    #[inline]
    fn step(self) -> (isize, isize) {
        match self {
            CompassPrimary::North => (-1, 0),
            CompassPrimary::South => (1, 0),
            CompassPrimary::East => (0, 1),
            CompassPrimary::West => (0, -1),
        }
    }
}

/// Move `(row, column)` one step in `dir`, staying within `0..side` on both axes.
fn offset_within(row: usize,
                 column: usize,
                 dir: CompassPrimary,
                 side: usize)
                 -> Option<(usize, usize)> {
    let (dr, dc) = dir.step();
    let r = row as isize + dr;
    let c = column as isize + dc;
    if r < 0 || c < 0 || r as usize >= side || c as usize >= side {
        None
    } else {
        Some((r as usize, c as usize))
    }
}

impl GridCoordinate {
    pub fn new(row: usize, column: usize) -> GridCoordinate {
        GridCoordinate { row, column }
    }

    #[inline]
    pub fn kind(&self) -> CellKind {
        match (self.row % 2 == 1, self.column % 2 == 1) {
            (true, true) => CellKind::Room,
            (false, false) => CellKind::Post,
            _ => CellKind::Connector,
        }
    }

    /// The adjacent grid position in direction `dir`, if it lies within a grid of side `grid_side`.
    pub fn offset(&self, dir: CompassPrimary, grid_side: usize) -> Option<GridCoordinate> {
        offset_within(self.row, self.column, dir, grid_side)
            .map(|(row, column)| GridCoordinate::new(row, column))
    }

    /// Orthogonally adjacent: exactly one unit apart on exactly one axis.
    pub fn is_adjacent_to(&self, other: GridCoordinate) -> bool {
        let dr = (self.row as isize - other.row as isize).abs();
        let dc = (self.column as isize - other.column as isize).abs();
        dr + dc == 1
    }

    /// The room this position represents, if it is a room cell.
    pub fn as_room(&self) -> Option<RoomCoordinate> {
        if self.kind() == CellKind::Room {
            Some(RoomCoordinate::new(self.row / 2, self.column / 2))
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for GridCoordinate {
    fn from(row_column_pair: (usize, usize)) -> GridCoordinate {
        GridCoordinate::new(row_column_pair.0, row_column_pair.1)
    }
}

impl RoomCoordinate {
    pub fn new(row: usize, column: usize) -> RoomCoordinate {
        RoomCoordinate { row, column }
    }

    #[inline]
    pub fn as_grid_coordinate(&self) -> GridCoordinate {
        GridCoordinate::new(2 * self.row + 1, 2 * self.column + 1)
    }

    pub fn offset(&self, dir: CompassPrimary, size: RoomsPerSide) -> Option<RoomCoordinate> {
        offset_within(self.row, self.column, dir, size.0)
            .map(|(row, column)| RoomCoordinate::new(row, column))
    }

    /// The connector cell joining two rooms, or None when the rooms are not
    /// unit-distance apart in room space.
    pub fn connector_to(&self, other: RoomCoordinate) -> Option<GridCoordinate> {
        let dr = (self.row as isize - other.row as isize).abs();
        let dc = (self.column as isize - other.column as isize).abs();
        if dr + dc != 1 {
            return None;
        }
        Some(GridCoordinate::new(self.row + other.row + 1, self.column + other.column + 1))
    }
}

impl From<(usize, usize)> for RoomCoordinate {
    fn from(row_column_pair: (usize, usize)) -> RoomCoordinate {
        RoomCoordinate::new(row_column_pair.0, row_column_pair.1)
    }
}
