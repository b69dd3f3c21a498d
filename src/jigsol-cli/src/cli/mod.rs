//! CLI argument definitions for jigsol

mod core;

pub use core::{Cli, Commands};
