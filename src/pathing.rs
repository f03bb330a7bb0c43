use log::{debug, warn};
use std::collections::VecDeque;
use std::slice;

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::grid::Grid;
use crate::utils;

/// Neighbour order while searching. Any fixed order finds a shortest path; this one decides
/// which of several equally short paths is reported.
const SEARCH_ORDER: [CompassPrimary; 4] = [CompassPrimary::East,
                                           CompassPrimary::West,
                                           CompassPrimary::South,
                                           CompassPrimary::North];

/// Grid positions from entrance to exit inclusive. Empty when the exit cannot be reached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SolutionPath {
    cells: Vec<GridCoordinate>,
}

impl SolutionPath {
    pub fn unreachable() -> SolutionPath {
        SolutionPath { cells: Vec::new() }
    }

    /// No route was found. A degraded but valid result, render the maze without an overlay.
    #[inline]
    pub fn is_unreachable(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cells(&self) -> &[GridCoordinate] {
        &self.cells
    }

    #[inline]
    pub fn first(&self) -> Option<GridCoordinate> {
        self.cells.first().cloned()
    }

    #[inline]
    pub fn last(&self) -> Option<GridCoordinate> {
        self.cells.last().cloned()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, GridCoordinate> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a SolutionPath {
    type Item = &'a GridCoordinate;
    type IntoIter = slice::Iter<'a, GridCoordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Shortest route from the grid's entrance to its exit.
pub fn solve(grid: &Grid) -> SolutionPath {
    shortest_path(grid, grid.start(), grid.end())
}

/// Breadth first search across every passage cell, rooms and connectors alike.
///
/// Walls block. Parent links are followed back from `end` once it is dequeued.
pub fn shortest_path(grid: &Grid, start: GridCoordinate, end: GridCoordinate) -> SolutionPath {

    if !grid.is_passage(start) || !grid.is_passage(end) {
        warn!("no path: entrance {:?} or exit {:?} is walled in", start, end);
        return SolutionPath::unreachable();
    }

    let side = grid.side();
    let index = |coord: GridCoordinate| coord.row * side + coord.column;

    let mut visited = utils::visited_set(side * side);
    let mut parents = utils::fnv_hashmap(side * side);
    let mut queue = VecDeque::new();
    visited.insert(index(start));
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {

        if current == end {
            let mut cells = vec![end];
            let mut step = end;
            while let Some(&parent) = parents.get(&step) {
                cells.push(parent);
                step = parent;
            }
            cells.reverse();
            debug!("solved maze from {:?} to {:?} in {} steps", start, end, cells.len());
            return SolutionPath { cells };
        }

        for next in grid.passage_neighbours(current, &SEARCH_ORDER) {
            if visited.insert(index(next)) {
                parents.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    warn!("no path from {:?} to {:?}", start, end);
    SolutionPath::unreachable()
}
