use docopt::Docopt;
use log::info;
use serde_derive::Deserialize;
use mazes::{Difficulty, Maze, MazeConfig};
use std::fs;

const USAGE: &str = "Mazes

Usage:
    mazes_driver -h | --help
    mazes_driver [--difficulty=<d>] [--algorithm=<a>] [--size=<n>] [--output=<path>] [--cell-size=<n>] [--solution] [--seed=<n>] [--text]

Options:
    -h --help               Show this screen.
    -d --difficulty=<d>     easy (10x10 kruskal), medium (15x15 kruskal) or hard (22x22 dfs) [default: medium].
    -a --algorithm=<a>      Generation algorithm: dfs, kruskal, prim or bfs. Picked by the difficulty if not given.
    -s --size=<n>           Rooms per side of the square maze, overriding the difficulty.
    -o --output=<path>      Output SVG file path [default: maze.svg].
    -c --cell-size=<n>      Pixel length of one cell [default: 25].
    --solution              Draw the shortest path from entrance to exit.
    --seed=<n>              Seed for a reproducible maze.
    --text                  Print the maze as text to stdout instead of writing the SVG file.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_difficulty: String,
    flag_algorithm: Option<String>,
    flag_size: Option<i64>,
    flag_output: String,
    flag_cell_size: i64,
    flag_solution: bool,
    flag_seed: Option<u64>,
    flag_text: bool,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::mazes::errors::Error, ::mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let difficulty: Difficulty = args.flag_difficulty.parse()?;
    let config = maze_config(&args, difficulty)?;
    let maze = Maze::generate(config)?;

    if args.flag_text {
        println!("{}", maze);
    } else {
        let svg = maze.to_svg()?;
        fs::write(&args.flag_output, svg)
            .chain_err(|| format!("Failed to write maze to SVG file {}", args.flag_output))?;
        info!("Generated: {}", args.flag_output);
    }

    let config = maze.config();
    info!("  size: {} x {}", config.size, config.size);
    info!("  difficulty: {}", difficulty);
    info!("  algorithm: {}", config.algorithm);
    if config.show_solution {
        if maze.solution().is_unreachable() {
            info!("  solution: none, the exit is unreachable");
        } else {
            info!("  solution: shown, {} steps", maze.solution().len());
        }
    }

    Ok(())
}

/// Explicit size and algorithm arguments take precedence over the difficulty preset.
fn maze_config(args: &MazeArgs, difficulty: Difficulty) -> Result<MazeConfig> {
    let config = MazeConfig::from_difficulty(difficulty)
        .with_size(args.flag_size)?
        .with_algorithm(args.flag_algorithm.as_ref().map(String::as_str))?
        .with_cell_size(args.flag_cell_size)?
        .with_solution(args.flag_solution)
        .with_seed(args.flag_seed);
    Ok(config)
}
