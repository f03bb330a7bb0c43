use std::fmt;

use crate::cells::{CellMarker, GridCoordinate};
use crate::grid::Grid;
use crate::pathing::SolutionPath;
use crate::utils;
use crate::utils::FnvHashSet;

const WALL: &str = "██";
const OPEN: &str = "  ";

/// Chooses the text drawn inside each passage cell. Walls always draw as solid blocks.
pub trait GridDisplay {
    fn render_passage(&self, coord: GridCoordinate) -> &str;
}

#[derive(Debug, Copy, Clone)]
pub struct PlainDisplay;
impl GridDisplay for PlainDisplay {
    fn render_passage(&self, _: GridCoordinate) -> &str {
        OPEN
    }
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<GridCoordinate>,
}
impl PathDisplay {
    pub fn new(path: &SolutionPath) -> Self {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay { on_path_coordinates }
    }
}
impl GridDisplay for PathDisplay {
    fn render_passage(&self, coord: GridCoordinate) -> &str {
        if self.on_path_coordinates.contains(&coord) {
            "··"
        } else {
            OPEN
        }
    }
}

/// Marks only the entrance and exit, for mazes with no known solution.
#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start: GridCoordinate,
    end: GridCoordinate,
}
impl StartEndPointsDisplay {
    pub fn new(start: GridCoordinate, end: GridCoordinate) -> StartEndPointsDisplay {
        StartEndPointsDisplay { start, end }
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_passage(&self, coord: GridCoordinate) -> &str {
        if coord == self.start {
            "S "
        } else if coord == self.end {
            "E "
        } else {
            OPEN
        }
    }
}

/// A grid paired with a `GridDisplay`, printable with `{}`.
pub struct TextRender<'a, D: GridDisplay> {
    grid: &'a Grid,
    display: D,
}

impl<'a, D: GridDisplay> TextRender<'a, D> {
    pub fn new(grid: &'a Grid, display: D) -> TextRender<'a, D> {
        TextRender { grid, display }
    }
}

impl<'a, D: GridDisplay> fmt::Display for TextRender<'a, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.grid.iter_row().enumerate() {
            for (column_index, marker) in row.iter().enumerate() {
                let body = match *marker {
                    CellMarker::Wall => WALL,
                    CellMarker::Passage => {
                        self.display.render_passage(GridCoordinate::new(row_index, column_index))
                    }
                };
                f.write_str(body)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TextRender::new(self, PlainDisplay))
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::cells::RoomCoordinate;
    use crate::pathing;
    use crate::units::RoomsPerSide;

    #[test]
    fn plain_single_room() {
        let mut g = Grid::new(RoomsPerSide(1));
        g.open_entrance_and_exit();
        assert_eq!(g.to_string(), "  ██  \n      \n  ██  \n");
    }

    #[test]
    fn path_overlay() {
        let mut g = Grid::new(RoomsPerSide(2));
        g.carve(RoomCoordinate::new(0, 0), RoomCoordinate::new(1, 0));
        g.carve(RoomCoordinate::new(1, 0), RoomCoordinate::new(1, 1));
        g.open_entrance_and_exit();
        let path = pathing::solve(&g);
        let text = TextRender::new(&g, PathDisplay::new(&path)).to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1], "····██  ██");
        assert_eq!(rows[3], "██········");
    }

    #[test]
    fn start_and_end_markers() {
        let mut g = Grid::new(RoomsPerSide(1));
        g.open_entrance_and_exit();
        let text = TextRender::new(&g, StartEndPointsDisplay::new(g.start(), g.end())).to_string();
        assert_eq!(text.lines().nth(1), Some("S   E "));
    }
}
