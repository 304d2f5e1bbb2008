mod config;
mod format_int;
mod fps_limit;

pub use config::Config;
pub use format_int::NiceInt;
pub use fps_limit::{FpsLimiter, TickTimer};
