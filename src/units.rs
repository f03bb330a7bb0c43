/// Logical maze size: the number of rooms along one side of the square maze.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RoomsPerSide(pub usize);

/// Length of one grid cell's side in the rendered output.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct CellPixels(pub u32);

impl RoomsPerSide {
    /// Side length of the interleaved wall/room array, `2 * size + 1`.
    #[inline(always)]
    pub fn grid_side(self) -> usize {
        2 * self.0 + 1
    }
}
