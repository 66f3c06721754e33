//! Command-line interface module.

mod args;
pub mod build;
pub mod common;
pub mod render;

pub use args::{Cli, Commands};
