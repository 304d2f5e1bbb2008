mod grid;
mod rule;

pub use grid::Grid;
pub use rule::next_state;

/// How the cells of one generation are traversed while computing the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Row by row on the calling thread.
    Sequential,
    /// Rows are split between the workers of the global rayon pool.
    Parallel,
}
