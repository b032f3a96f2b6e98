mod args;
mod commands;
pub mod context;
mod handlers;
pub mod types;
pub mod views;

pub use args::{Cli, Commands};
pub use commands::run;
