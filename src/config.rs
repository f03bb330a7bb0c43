use error_chain::bail;
use serde_derive::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::errors::*;
use crate::generators::Algorithm;
use crate::renderers;
use crate::units::{CellPixels, RoomsPerSide};

/// Largest accepted rooms per side.
pub const MAX_SIZE: usize = 1000;
pub const DEFAULT_CELL_SIZE: u32 = 25;
pub const DEFAULT_WALL_WIDTH: u32 = 3;

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Default maze size and generator for the difficulty.
    pub fn preset(self) -> (RoomsPerSide, Algorithm) {
        match self {
            Difficulty::Easy => (RoomsPerSide(10), Algorithm::Kruskal),
            Difficulty::Medium => (RoomsPerSide(15), Algorithm::Kruskal),
            Difficulty::Hard => (RoomsPerSide(22), Algorithm::Dfs),
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Difficulty> {
        Difficulty::ALL
            .iter()
            .cloned()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ErrorKind::UnknownDifficulty(s.to_string()).into())
    }
}

fn default_cell_size() -> u32 {
    DEFAULT_CELL_SIZE
}

fn default_wall_width() -> u32 {
    DEFAULT_WALL_WIDTH
}

/// Everything needed to generate and render one maze.
///
/// Built from a difficulty preset with explicit overrides, or deserialized directly; either
/// way `validate` runs before any grid is allocated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MazeConfig {
    pub size: usize,
    pub algorithm: Algorithm,
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
    #[serde(default = "default_wall_width")]
    pub wall_width: u32,
    #[serde(default)]
    pub show_solution: bool,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig::from_difficulty(Difficulty::default())
    }
}

impl MazeConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> MazeConfig {
        let (size, algorithm) = difficulty.preset();
        MazeConfig {
            size: size.0,
            algorithm,
            cell_size: DEFAULT_CELL_SIZE,
            wall_width: DEFAULT_WALL_WIDTH,
            show_solution: false,
            seed: None,
        }
    }

    /// Replace the preset size. Rejects sizes outside `1..=MAX_SIZE`.
    pub fn with_size(mut self, size: Option<i64>) -> Result<MazeConfig> {
        if let Some(requested) = size {
            if requested < 1 || requested as u64 > MAX_SIZE as u64 {
                bail!(ErrorKind::InvalidSize(requested));
            }
            self.size = requested as usize;
        }
        Ok(self)
    }

    /// Replace the preset algorithm by name.
    pub fn with_algorithm(mut self, name: Option<&str>) -> Result<MazeConfig> {
        if let Some(name) = name {
            self.algorithm = name.parse()?;
        }
        Ok(self)
    }

    pub fn with_cell_size(mut self, pixels: i64) -> Result<MazeConfig> {
        if pixels < 1 || pixels > i64::from(u32::max_value()) {
            bail!(ErrorKind::InvalidCellSize(pixels));
        }
        self.cell_size = pixels as u32;
        Ok(self)
    }

    pub fn with_solution(mut self, show_solution: bool) -> MazeConfig {
        self.show_solution = show_solution;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> MazeConfig {
        self.seed = seed;
        self
    }

    /// Size within `1..=MAX_SIZE`, and a positive cell size whose canvas fits in `u32` pixels.
    pub fn validate(&self) -> Result<()> {
        if self.size < 1 || self.size > MAX_SIZE {
            bail!(ErrorKind::InvalidSize(self.size as i64));
        }
        if self.cell_size < 1 || renderers::canvas_side(self.rooms_per_side(), self.cell_pixels()).is_none() {
            bail!(ErrorKind::InvalidCellSize(i64::from(self.cell_size)));
        }
        Ok(())
    }

    #[inline]
    pub fn rooms_per_side(&self) -> RoomsPerSide {
        RoomsPerSide(self.size)
    }

    #[inline]
    pub fn cell_pixels(&self) -> CellPixels {
        CellPixels(self.cell_size)
    }
}
