//! Command-line interface for trellis.

pub mod output;
pub mod parse;
pub mod presentation;
pub mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use route::execute;
