use error_chain::bail;
use itertools::Itertools;
use log::trace;
use std::convert::TryFrom;
use std::fmt::Write;

use crate::cells::{CellKind, CellMarker, GridCoordinate};
use crate::errors::*;
use crate::grid::Grid;
use crate::pathing::SolutionPath;
use crate::units::{CellPixels, RoomsPerSide};


#[derive(Debug, Clone)]
pub struct RenderOptions<'path> {
    cell_size: CellPixels,
    wall_width: u32,
    wall_colour: String,
    solution_colour: String,
    solution_width: u32,
    solution_opacity: f32,
    path: Option<&'path SolutionPath>,
}

impl<'path> RenderOptions<'path> {
    #[inline]
    pub fn cell_size(&self) -> CellPixels {
        self.cell_size
    }

    #[inline]
    pub fn path(&self) -> Option<&'path SolutionPath> {
        self.path
    }
}

/// Builds `RenderOptions`, starting from 25 pixel cells, 3 pixel black walls and a
/// translucent red solution line.
#[derive(Debug, Clone)]
pub struct RenderOptionsBuilder<'path> {
    options: RenderOptions<'path>,
}

impl<'path> Default for RenderOptionsBuilder<'path> {
    fn default() -> Self {
        RenderOptionsBuilder::new()
    }
}

impl<'path> RenderOptionsBuilder<'path> {
    pub fn new() -> RenderOptionsBuilder<'path> {
        RenderOptionsBuilder {
            options: RenderOptions {
                cell_size: CellPixels(25),
                wall_width: 3,
                wall_colour: String::from("black"),
                solution_colour: String::from("#FF6B6B"),
                solution_width: 4,
                solution_opacity: 0.7,
                path: None,
            },
        }
    }
    pub fn cell_size(mut self, cell_size: CellPixels) -> Self {
        self.options.cell_size = cell_size;
        self
    }
    pub fn wall_width(mut self, pixels: u32) -> Self {
        self.options.wall_width = pixels;
        self
    }
    pub fn wall_colour(mut self, colour: &str) -> Self {
        self.options.wall_colour = colour.to_string();
        self
    }
    pub fn solution_colour(mut self, colour: &str) -> Self {
        self.options.solution_colour = colour.to_string();
        self
    }
    pub fn solution_width(mut self, pixels: u32) -> Self {
        self.options.solution_width = pixels;
        self
    }
    pub fn solution_opacity(mut self, opacity: f32) -> Self {
        self.options.solution_opacity = opacity;
        self
    }
    /// The solution overlay to draw, if any. An unreachable (empty) path draws nothing.
    pub fn path(mut self, path: Option<&'path SolutionPath>) -> Self {
        self.options.path = path;
        self
    }
    pub fn build(self) -> RenderOptions<'path> {
        self.options
    }
}

/// Map a grid index on either axis to a canvas offset, before padding.
///
/// Odd indices (rooms) land in the middle of a cell, even ones (walls) on the cell boundary.
#[inline]
pub fn canvas_position(index: usize, cell_size: CellPixels) -> f64 {
    let cell = f64::from(cell_size.0);
    let cell_start = (index / 2) as f64 * cell;
    if index % 2 == 1 {
        cell_start + 0.5 * cell
    } else {
        cell_start
    }
}

/// Side of the square canvas: the maze plus a two cell margin on every side.
///
/// None when the canvas would not fit in `u32` pixels.
pub fn canvas_side(size: RoomsPerSide, cell_size: CellPixels) -> Option<u32> {
    (size.0 as u64)
        .checked_add(4)
        .and_then(|cells| cells.checked_mul(u64::from(cell_size.0)))
        .and_then(|pixels| u32::try_from(pixels).ok())
}

/// Serialize the grid, and optionally its solution, as an SVG document.
///
/// The maze is centred with a two cell margin on every side. The solution polyline goes
/// first so the walls are drawn over it.
pub fn render_svg(grid: &Grid, options: &RenderOptions<'_>) -> Result<String> {

    let cell = options.cell_size.0;
    let side = match canvas_side(grid.size(), options.cell_size) {
        Some(side) => side,
        None => bail!(ErrorKind::InvalidCellSize(i64::from(cell))),
    };
    // every coordinate below is bounded by the canvas side
    let padding = 2 * cell;
    trace!("rendering {:?} on a {}x{} canvas", grid, side, side);

    let mut svg = String::new();
    write!(svg,
           r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{0}" viewBox="0 0 {0} {0}">"#,
           side)?;

    if let Some(path) = options.path.filter(|path| !path.is_unreachable()) {
        let to_canvas = |index: usize| canvas_position(index, options.cell_size) + f64::from(padding);
        let points = path.iter()
            .map(|coord| format!("{},{}", to_canvas(coord.column), to_canvas(coord.row)))
            .join(" ");
        write!(svg,
               "\n<polyline points=\"{}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"none\" \
                stroke-linecap=\"round\" stroke-linejoin=\"round\" opacity=\"{}\"/>",
               points, options.solution_colour, options.solution_width, options.solution_opacity)?;
    }

    let walls = grid.iter()
        .filter(|&(coord, marker)| marker == CellMarker::Wall && coord.kind() == CellKind::Connector);
    for (coord, _) in walls {
        let (x1, y1, x2, y2) = wall_segment(coord, cell, padding);
        write!(svg,
               "\n<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\" \
                stroke-linecap=\"round\"/>",
               x1, y1, x2, y2, options.wall_colour, options.wall_width)?;
    }

    svg.push_str("\n</svg>");
    Ok(svg)
}

/// End points of the wall drawn for a connector cell.
///
/// Connectors on an even row separate vertically stacked rooms and draw horizontally; those
/// on an even column draw vertically. Either way the segment is one cell long.
fn wall_segment(connector: GridCoordinate, cell: u32, padding: u32) -> (u32, u32, u32, u32) {
    let x1 = (connector.column / 2) as u32 * cell + padding;
    let y1 = (connector.row / 2) as u32 * cell + padding;
    if connector.row % 2 == 0 {
        (x1, y1, x1 + cell, y1)
    } else {
        (x1, y1, x1, y1 + cell)
    }
}


#[cfg(test)]
mod tests {

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::generators::Algorithm;
    use crate::pathing;
    use crate::units::RoomsPerSide;

    fn opened_grid(size: usize) -> Grid {
        let mut g = Grid::new(RoomsPerSide(size));
        g.open_entrance_and_exit();
        g
    }

    fn attribute<'a>(svg: &'a str, name: &str) -> &'a str {
        let marker = format!("{}=\"", name);
        let start = svg.find(&marker).unwrap() + marker.len();
        let end = start + svg[start..].find('"').unwrap();
        &svg[start..end]
    }

    #[test]
    fn canvas_positions() {
        let cell = CellPixels(20);
        assert_eq!(canvas_position(0, cell), 0.0);
        assert_eq!(canvas_position(1, cell), 10.0);
        assert_eq!(canvas_position(2, cell), 20.0);
        assert_eq!(canvas_position(3, cell), 30.0);
        assert_eq!(canvas_position(6, cell), 60.0);
    }

    #[test]
    fn document_dimensions_include_padding() {
        for &(size, cell) in &[(1usize, 25u32), (3, 10), (10, 25), (22, 7)] {
            let options = RenderOptionsBuilder::new().cell_size(CellPixels(cell)).build();
            let svg = render_svg(&opened_grid(size), &options).unwrap();
            let expected = (size as u32 * cell + 4 * cell).to_string();
            assert_eq!(attribute(&svg, "width"), expected);
            assert_eq!(attribute(&svg, "height"), expected);
            assert_eq!(attribute(&svg, "viewBox"), format!("0 0 {} {}", expected, expected));
            assert!(svg.starts_with("<svg "));
            assert!(svg.ends_with("</svg>"));
        }
    }

    #[test]
    fn canvas_side_rejects_overflow() {
        assert_eq!(canvas_side(RoomsPerSide(1), CellPixels(25)), Some(125));
        assert_eq!(canvas_side(RoomsPerSide(1000), CellPixels(4_277_855)), Some(4_294_966_420));
        assert_eq!(canvas_side(RoomsPerSide(1000), CellPixels(4_277_856)), None);
        assert_eq!(canvas_side(RoomsPerSide(1), CellPixels(u32::max_value())), None);
    }

    #[test]
    fn oversized_canvas_is_an_error() {
        let options = RenderOptionsBuilder::new().cell_size(CellPixels(u32::max_value())).build();
        let err = render_svg(&opened_grid(1), &options).unwrap_err();
        match *err.kind() {
            ErrorKind::InvalidCellSize(rejected) => assert_eq!(rejected, i64::from(u32::max_value())),
            ref other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn vertical_wall_geometry() {
        let g = opened_grid(2);
        let cell = 20;
        let svg = render_svg(&g, &RenderOptionsBuilder::new().cell_size(CellPixels(cell)).build()).unwrap();
        // connector (3, 0) is the west wall of room (1, 0), below the widened entrance
        assert!(!g.is_passage(GridCoordinate::new(3, 0)));
        let (x1, y1, x2, y2) = wall_segment(GridCoordinate::new(3, 0), cell, 2 * cell);
        assert_eq!(x1, x2);
        assert_eq!(y2 - y1, cell);
        assert_eq!((x1, y1, x2, y2), (40, 60, 40, 80));
        assert!(svg.contains(r#"<line x1="40" y1="60" x2="40" y2="80" "#));
    }

    #[test]
    fn single_room_walls() {
        let svg = render_svg(&opened_grid(1), &RenderOptionsBuilder::new().build()).unwrap();
        let lines: Vec<&str> = svg.lines().filter(|l| l.starts_with("<line")).collect();
        assert_eq!(lines,
                   vec![r#"<line x1="50" y1="50" x2="75" y2="50" stroke="black" stroke-width="3" stroke-linecap="round"/>"#,
                        r#"<line x1="50" y1="75" x2="75" y2="75" stroke="black" stroke-width="3" stroke-linecap="round"/>"#]);
    }

    #[test]
    fn one_line_per_walled_connector() {
        let mut g = Grid::new(RoomsPerSide(6));
        Algorithm::Kruskal.carve_passages(&mut g, &mut SmallRng::seed_from_u64(11));
        g.open_entrance_and_exit();
        let walled = g.iter()
            .filter(|&(coord, marker)| marker == CellMarker::Wall && coord.kind() == CellKind::Connector)
            .count();
        let svg = render_svg(&g, &RenderOptionsBuilder::new().build()).unwrap();
        assert_eq!(svg.matches("<line ").count(), walled);
        assert!(!svg.contains("<polyline"));
    }

    #[test]
    fn solution_drawn_before_walls() {
        let g = opened_grid(1);
        let path = pathing::solve(&g);
        let options = RenderOptionsBuilder::new().path(Some(&path)).build();
        let svg = render_svg(&g, &options).unwrap();

        let polyline_at = svg.find("<polyline").unwrap();
        assert!(polyline_at < svg.find("<line").unwrap());
        assert_eq!(attribute(&svg, "points"), "50,62.5 62.5,62.5 75,62.5");
        assert_eq!(attribute(&svg[polyline_at..], "stroke-linejoin"), "round");
        assert_eq!(attribute(&svg[polyline_at..], "opacity"), "0.7");
    }

    #[test]
    fn unreachable_solution_is_not_drawn() {
        let g = opened_grid(2);
        let path = pathing::solve(&g);
        assert!(path.is_unreachable());
        let options = RenderOptionsBuilder::new().path(Some(&path)).build();
        assert!(!render_svg(&g, &options).unwrap().contains("<polyline"));
    }
}
