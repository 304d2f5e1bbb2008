mod engine;
mod gui;
mod utils;

pub use engine::{next_state, Grid, Traversal};
pub use gui::App;
pub use utils::{Config, FpsLimiter, NiceInt, TickTimer};
