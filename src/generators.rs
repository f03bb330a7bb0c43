use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde_derive::Deserialize;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::cells::{CompassPrimary, RoomCoordinate, RoomSmallVec};
use crate::errors::*;
use crate::grid::Grid;
use crate::union_find::UnionFind;
use crate::utils;


/// The maze generation strategies, selected by name.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Randomized depth first search, the recursive backtracker.
    Dfs,
    /// Randomized Kruskal over a shuffled list of every interior wall.
    Kruskal,
    /// Randomized Prim growing from a random room.
    Prim,
    /// Randomized breadth first carving.
    Bfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [Algorithm::Dfs,
                                     Algorithm::Kruskal,
                                     Algorithm::Prim,
                                     Algorithm::Bfs];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dfs => "dfs",
            Algorithm::Kruskal => "kruskal",
            Algorithm::Prim => "prim",
            Algorithm::Bfs => "bfs",
        }
    }

    /// Carve a spanning tree of passages into a freshly allocated grid.
    pub fn carve_passages<R>(self, grid: &mut Grid, rng: &mut R)
        where R: Rng + ?Sized
    {
        match self {
            Algorithm::Dfs => recursive_backtracker(grid, rng),
            Algorithm::Kruskal => kruskal(grid, rng),
            Algorithm::Prim => prim(grid, rng),
            Algorithm::Bfs => breadth_first(grid, rng),
        }
        debug!("{} carved {} connectors on a {}x{} maze",
               self, grid.carved_connectors_count(), grid.size().0, grid.size().0);
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Algorithm> {
        Algorithm::ALL
            .iter()
            .cloned()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ErrorKind::UnknownAlgorithm(s.to_string()).into())
    }
}

#[inline]
fn room_index(room: RoomCoordinate, grid: &Grid) -> usize {
    room.row * grid.size().0 + room.column
}

fn unvisited_neighbours(grid: &Grid,
                        room: RoomCoordinate,
                        visited: &bit_set::BitSet)
                        -> RoomSmallVec {
    grid.room_neighbours(room)
        .into_iter()
        .filter(|neighbour| !visited.contains(room_index(*neighbour, grid)))
        .collect()
}

/// Apply the recursive backtracker maze generation algorithm to the grid.
///
/// Starting at the top left room, walk to a random unvisited neighbour, carving as we go.
/// When the walk is boxed in, back up along the stack until a room with unvisited neighbours
/// turns up. The result has long winding corridors and few branches.
pub fn recursive_backtracker<R>(grid: &mut Grid, rng: &mut R)
    where R: Rng + ?Sized
{
    let mut visited = utils::visited_set(grid.rooms_count());
    let origin = RoomCoordinate::new(0, 0);
    visited.insert(room_index(origin, grid));
    let mut stack = vec![origin];

    while let Some(&current) = stack.last() {
        let neighbours = unvisited_neighbours(grid, current, &visited);

        if let Some(&next) = neighbours.choose(rng) {
            grid.carve(current, next);
            visited.insert(room_index(next, grid));
            stack.push(next);
        } else {
            stack.pop();
        }
    }
}

/// Apply randomized Kruskal to the grid.
///
/// Every wall between two rooms is considered once in a random order, and knocked down only
/// if the rooms either side are not yet connected.
pub fn kruskal<R>(grid: &mut Grid, rng: &mut R)
    where R: Rng + ?Sized
{
    let size = grid.size();
    let mut walls = Vec::with_capacity(2 * size.0 * (size.0 - 1));
    for room in grid.rooms() {
        for &dir in &[CompassPrimary::East, CompassPrimary::South] {
            if let Some(neighbour) = room.offset(dir, size) {
                walls.push((room, neighbour));
            }
        }
    }
    walls.shuffle(rng);

    let mut sets = UnionFind::new(grid.rooms());
    for (a, b) in walls {
        if sets.union(a, b) {
            grid.carve(a, b);
        }
    }
}

/// Apply randomized Prim to the grid.
///
/// Grows the maze outwards from a random room, repeatedly taking a random edge off the
/// frontier. Edges leading back into the maze are thrown away.
pub fn prim<R>(grid: &mut Grid, rng: &mut R)
    where R: Rng + ?Sized
{
    let size = grid.size().0;
    let mut visited = utils::visited_set(grid.rooms_count());
    let origin = RoomCoordinate::new(rng.gen_range(0..size), rng.gen_range(0..size));
    visited.insert(room_index(origin, grid));

    let mut frontier: Vec<(RoomCoordinate, RoomCoordinate)> = grid.room_neighbours(origin)
        .into_iter()
        .map(|neighbour| (origin, neighbour))
        .collect();

    while !frontier.is_empty() {
        let pick = rng.gen_range(0..frontier.len());
        let (from, to) = frontier.swap_remove(pick);

        if visited.insert(room_index(to, grid)) {
            grid.carve(from, to);
            for neighbour in unvisited_neighbours(grid, to, &visited) {
                frontier.push((to, neighbour));
            }
        }
    }
}

/// Apply randomized breadth first carving to the grid.
///
/// Rooms are claimed in FIFO order; a room is marked visited before it is queued so exactly
/// one parent carves into it.
pub fn breadth_first<R>(grid: &mut Grid, rng: &mut R)
    where R: Rng + ?Sized
{
    let mut visited = utils::visited_set(grid.rooms_count());
    let origin = RoomCoordinate::new(0, 0);
    visited.insert(room_index(origin, grid));
    let mut queue = VecDeque::with_capacity(grid.rooms_count());
    queue.push_back(origin);

    while let Some(current) = queue.pop_front() {
        let mut neighbours = unvisited_neighbours(grid, current, &visited);
        neighbours.shuffle(rng);

        for next in neighbours {
            if visited.insert(room_index(next, grid)) {
                grid.carve(current, next);
                queue.push_back(next);
            }
        }
    }
}
