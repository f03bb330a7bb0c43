use std::fmt;
use std::slice;

use crate::cells::{CellKind, CellMarker, CompassPrimary, CoordinateSmallVec, GridCoordinate,
                   RoomCoordinate, RoomSmallVec};
use crate::units::RoomsPerSide;


/// A square maze as one dense row-major array of wall/passage markers.
///
/// Rooms live at odd/odd positions, connectors between them where exactly one index is odd
/// and posts at even/even positions. Generators only ever change the grid through `carve`;
/// `force_open` exists for the entrance and exit openings on the outer border.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: RoomsPerSide,
    cells: Vec<CellMarker>,
    start: GridCoordinate,
    end: GridCoordinate,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid :: size: {:?}, side: {}, start: {:?}, end: {:?}, carved connectors: {}",
               self.size, self.side(), self.start, self.end, self.carved_connectors_count())
    }
}

impl Grid {
    /// Allocate a `(2 * size + 1)` square grid of walls with every room opened.
    ///
    /// Panics if `size` is zero; configuration validation rejects that before we get here.
    pub fn new(size: RoomsPerSide) -> Grid {
        assert!(size.0 > 0, "a maze needs at least one room per side");

        let side = size.grid_side();
        let mut grid = Grid {
            size,
            cells: vec![CellMarker::Wall; side * side],
            start: GridCoordinate::new(1, 0),
            end: GridCoordinate::new(2 * size.0 - 1, 2 * size.0),
        };

        for room in RoomIter::new(size) {
            let index = grid.index_of(room.as_grid_coordinate());
            grid.cells[index] = CellMarker::Passage;
        }

        grid
    }

    #[inline]
    pub fn size(&self) -> RoomsPerSide {
        self.size
    }

    /// Side length of the underlying array.
    #[inline]
    pub fn side(&self) -> usize {
        self.size.grid_side()
    }

    /// Entrance position on the west border.
    #[inline]
    pub fn start(&self) -> GridCoordinate {
        self.start
    }

    /// Exit position on the east border.
    #[inline]
    pub fn end(&self) -> GridCoordinate {
        self.end
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.row < self.side() && coord.column < self.side()
    }

    pub fn marker_at(&self, coord: GridCoordinate) -> Option<CellMarker> {
        if self.is_valid_coordinate(coord) {
            Some(self.cells[self.index_of(coord)])
        } else {
            None
        }
    }

    #[inline]
    pub fn is_passage(&self, coord: GridCoordinate) -> bool {
        self.marker_at(coord) == Some(CellMarker::Passage)
    }

    #[inline]
    pub fn is_valid_room(&self, room: RoomCoordinate) -> bool {
        room.row < self.size.0 && room.column < self.size.0
    }

    /// Knock down the wall between two rooms.
    ///
    /// Panics if either room is outside the grid or the rooms are not adjacent: that is a bug
    /// in the calling generator, not bad input.
    pub fn carve(&mut self, a: RoomCoordinate, b: RoomCoordinate) {
        assert!(self.is_valid_room(a) && self.is_valid_room(b),
                "carve between {:?} and {:?} leaves a {:?} grid",
                a, b, self.size);
        let connector = a.connector_to(b)
            .unwrap_or_else(|| panic!("carve between non adjacent rooms {:?} and {:?}", a, b));

        let index = self.index_of(connector);
        self.cells[index] = CellMarker::Passage;
    }

    /// Are two adjacent rooms joined by a carved connector?
    pub fn is_linked(&self, a: RoomCoordinate, b: RoomCoordinate) -> bool {
        a.connector_to(b).map_or(false, |connector| self.is_passage(connector))
    }

    /// Set any in-bounds position to a passage. Returns false for positions outside the grid.
    pub fn force_open(&mut self, position: GridCoordinate) -> bool {
        if !self.is_valid_coordinate(position) {
            return false;
        }
        let index = self.index_of(position);
        self.cells[index] = CellMarker::Passage;
        true
    }

    /// Open the entrance and exit plus the cells directly above and below each of them.
    pub fn open_entrance_and_exit(&mut self) {
        for &opening in &[self.start, self.end] {
            let opened = self.force_open(opening);
            debug_assert!(opened, "entrance or exit {:?} outside the grid", opening);
            for &dir in &[CompassPrimary::South, CompassPrimary::North] {
                if let Some(widened) = opening.offset(dir, self.side()) {
                    let opened = self.force_open(widened);
                    debug_assert!(opened, "widened opening {:?} outside the grid", widened);
                }
            }
        }
    }

    /// All rooms, row by row.
    #[inline]
    pub fn rooms(&self) -> RoomIter {
        RoomIter::new(self.size)
    }

    #[inline]
    pub fn rooms_count(&self) -> usize {
        self.size.0 * self.size.0
    }

    /// Rooms orthogonally adjacent to `room`, in carving order, whether linked or not.
    pub fn room_neighbours(&self, room: RoomCoordinate) -> RoomSmallVec {
        CompassPrimary::CARVING_ORDER
            .iter()
            .filter_map(|dir| room.offset(*dir, self.size))
            .collect()
    }

    /// Passage cells adjacent to `coord`, inspected in the given direction order.
    pub fn passage_neighbours(&self,
                              coord: GridCoordinate,
                              directions: &[CompassPrimary])
                              -> CoordinateSmallVec {
        directions.iter()
            .filter_map(|dir| coord.offset(*dir, self.side()))
            .filter(|adjacent| self.is_passage(*adjacent))
            .collect()
    }

    /// Number of interior connector cells that have been carved.
    ///
    /// Border cells are never counted, so the entrance and exit openings do not contribute.
    pub fn carved_connectors_count(&self) -> usize {
        let last = self.side() - 1;
        self.iter()
            .filter(|&(coord, marker)| {
                marker == CellMarker::Passage && coord.kind() == CellKind::Connector &&
                coord.row > 0 && coord.column > 0 && coord.row < last && coord.column < last
            })
            .count()
    }

    /// Every position with its marker, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoordinate, CellMarker)> + '_ {
        let side = self.side();
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, marker)| (GridCoordinate::new(index / side, index % side), *marker))
    }

    /// Rows of markers, top to bottom.
    #[inline]
    pub fn iter_row(&self) -> slice::Chunks<'_, CellMarker> {
        self.cells.chunks(self.side())
    }

    #[inline]
    fn index_of(&self, coord: GridCoordinate) -> usize {
        coord.row * self.side() + coord.column
    }
}

/// Row-major iterator over the rooms of a grid.
#[derive(Debug, Clone)]
pub struct RoomIter {
    size: usize,
    next_index: usize,
}

impl RoomIter {
    fn new(size: RoomsPerSide) -> RoomIter {
        RoomIter {
            size: size.0,
            next_index: 0,
        }
    }
}

impl Iterator for RoomIter {
    type Item = RoomCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= self.size * self.size {
            return None;
        }
        let room = RoomCoordinate::new(self.next_index / self.size, self.next_index % self.size);
        self.next_index += 1;
        Some(room)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size * self.size - self.next_index;
        (remaining, Some(remaining))
    }
}
impl ExactSizeIterator for RoomIter {} // default impl using size_hint()
