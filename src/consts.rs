// Fixed dimensions of the 9x9 grid.
pub(crate) const N_CELLS: usize = 81;
pub(crate) const N_HOUSES: usize = 27;

// Houses are numbered rows, then cols, then blocks.
pub(crate) const COL_OFFSET: u8 = 9;
pub(crate) const BLOCK_OFFSET: u8 = 18;
