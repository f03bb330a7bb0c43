use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::config::MazeConfig;
use crate::errors::*;
use crate::grid::Grid;
use crate::grid_displays::{PathDisplay, StartEndPointsDisplay, TextRender};
use crate::pathing;
use crate::pathing::SolutionPath;
use crate::renderers;
use crate::renderers::RenderOptionsBuilder;

/// A generated maze with its solution. The grid is frozen once built.
#[derive(Debug, Clone)]
pub struct Maze {
    config: MazeConfig,
    grid: Grid,
    solution: SolutionPath,
}

impl Maze {
    /// Validate the configuration, then generate and solve a maze.
    ///
    /// A configured seed makes the result reproducible, otherwise the rng is seeded from the OS.
    pub fn generate(config: MazeConfig) -> Result<Maze> {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Maze::generate_with_rng(config, &mut rng)
    }

    pub fn generate_with_rng<R>(config: MazeConfig, rng: &mut R) -> Result<Maze>
        where R: Rng + ?Sized
    {
        config.validate()?;
        debug!("generating {:?}", config);

        let mut grid = Grid::new(config.rooms_per_side());
        config.algorithm.carve_passages(&mut grid, rng);
        grid.open_entrance_and_exit();

        let solution = pathing::solve(&grid);
        if solution.is_unreachable() {
            warn!("generated maze has no route from entrance to exit");
        }

        Ok(Maze {
            config,
            grid,
            solution,
        })
    }

    #[inline]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn solution(&self) -> &SolutionPath {
        &self.solution
    }

    /// SVG document for the maze, with the solution overlaid if the config asks for it.
    pub fn to_svg(&self) -> Result<String> {
        let path = if self.config.show_solution {
            Some(&self.solution)
        } else {
            None
        };
        let options = RenderOptionsBuilder::new()
            .cell_size(self.config.cell_pixels())
            .wall_width(self.config.wall_width)
            .path(path)
            .build();
        renderers::render_svg(&self.grid, &options)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.config.show_solution && !self.solution.is_unreachable() {
            write!(f, "{}", TextRender::new(&self.grid, PathDisplay::new(&self.solution)))
        } else {
            let markers = StartEndPointsDisplay::new(self.grid.start(), self.grid.end());
            write!(f, "{}", TextRender::new(&self.grid, markers))
        }
    }
}
