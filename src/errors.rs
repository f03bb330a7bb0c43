// Other modules `use crate::errors::*;` to get the Error, ErrorKind, ResultExt and Result
// types that `error_chain!` creates.
use error_chain::*;

error_chain! {

    foreign_links {
        Fmt(::std::fmt::Error);
        Io(::std::io::Error);
    }

    errors {
        InvalidSize(size: i64) {
            description("invalid maze size")
            display("invalid maze size {}: expected 1 to {} rooms per side", size, crate::config::MAX_SIZE)
        }
        InvalidCellSize(pixels: i64) {
            description("invalid cell size")
            display("invalid cell size {}: must be a positive number of pixels", pixels)
        }
        UnknownAlgorithm(name: String) {
            description("unknown maze generation algorithm")
            display("unknown algorithm '{}': expected one of dfs, kruskal, prim, bfs", name)
        }
        UnknownDifficulty(name: String) {
            description("unknown difficulty")
            display("unknown difficulty '{}': expected one of easy, medium, hard", name)
        }
    }
}
