use mazes::cells::{CellMarker, GridCoordinate, RoomCoordinate};
use mazes::grid::Grid;
use mazes::{Algorithm, Maze, MazeConfig};

fn seeded(size: usize, algorithm: Algorithm, seed: u64) -> MazeConfig {
    MazeConfig {
        size,
        algorithm,
        seed: Some(seed),
        ..MazeConfig::default()
    }
}

fn gc(row: usize, column: usize) -> GridCoordinate {
    GridCoordinate::new(row, column)
}

// Flood fill over passage cells from the first room, counting the rooms reached.
fn rooms_reached(grid: &Grid) -> usize {
    let side = grid.side();
    let mut seen = vec![false; side * side];
    let first = RoomCoordinate::new(0, 0).as_grid_coordinate();
    seen[first.row * side + first.column] = true;
    let mut pending = vec![first];
    let mut rooms = 0;
    while let Some(coord) = pending.pop() {
        if coord.as_room().is_some() {
            rooms += 1;
        }
        let candidates = [(coord.row + 1, coord.column),
                          (coord.row.wrapping_sub(1), coord.column),
                          (coord.row, coord.column + 1),
                          (coord.row, coord.column.wrapping_sub(1))];
        for &(row, column) in &candidates {
            let next = gc(row, column);
            if grid.is_passage(next) && !seen[row * side + column] {
                seen[row * side + column] = true;
                pending.push(next);
            }
        }
    }
    rooms
}

fn openings(grid: &Grid) -> Vec<GridCoordinate> {
    let last_row = grid.side() - 1;
    let (start, end) = (grid.start(), grid.end());
    vec![start, gc(start.row - 1, start.column), gc(start.row + 1, start.column),
         end, gc(end.row - 1, end.column), gc((end.row + 1).min(last_row), end.column)]
}

#[test]
fn kruskal_three_by_three() {
    let maze = Maze::generate(seeded(3, Algorithm::Kruskal, 8)).unwrap();
    let grid = maze.grid();
    assert_eq!(grid.side(), 7);
    assert_eq!(grid.carved_connectors_count(), 8);
    for opening in openings(grid) {
        assert!(grid.is_passage(opening), "{:?} should be open", opening);
    }
    assert_eq!(rooms_reached(grid), 9);
}

#[test]
fn single_room_maze() {
    let maze = Maze::generate(seeded(1, Algorithm::Dfs, 0)).unwrap();
    let grid = maze.grid();
    assert_eq!(grid.side(), 3);

    let mut passages: Vec<GridCoordinate> = grid.iter()
        .filter(|&(_, marker)| marker == CellMarker::Passage)
        .map(|(coord, _)| coord)
        .collect();
    passages.sort();
    assert_eq!(passages,
               vec![gc(0, 0), gc(0, 2), gc(1, 0), gc(1, 1), gc(1, 2), gc(2, 0), gc(2, 2)]);
    assert_eq!(maze.solution().cells(), &[gc(1, 0), gc(1, 1), gc(1, 2)]);
}

#[test]
fn breadth_first_five_by_five() {
    let maze = Maze::generate(seeded(5, Algorithm::Bfs, 31)).unwrap();
    assert_eq!(rooms_reached(maze.grid()), 25);
    assert_eq!(maze.grid().carved_connectors_count(), 24);
}

#[test]
fn every_algorithm_opens_and_solves() {
    for &algorithm in &Algorithm::ALL {
        for size in 1..=10 {
            let maze = Maze::generate(seeded(size, algorithm, size as u64 * 13)).unwrap();
            let grid = maze.grid();
            assert_eq!(rooms_reached(grid), size * size);
            for opening in openings(grid) {
                assert!(grid.is_passage(opening));
            }
            let path = maze.solution();
            assert_eq!(path.first(), Some(grid.start()));
            assert_eq!(path.last(), Some(grid.end()));
        }
    }
}

#[test]
fn svg_dimensions() {
    let config = seeded(7, Algorithm::Prim, 4).with_cell_size(10).unwrap().with_solution(true);
    let svg = Maze::generate(config).unwrap().to_svg().unwrap();
    assert!(svg.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="110" height="110" viewBox="0 0 110 110">"#));
    assert!(svg.contains("<polyline"));
    assert!(svg.trim_end().ends_with("</svg>"));
}
