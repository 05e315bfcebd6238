pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod runner;
pub mod scanner;

pub use error::{Pep8GuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS: i32 = 1;
pub const EXIT_TOOL_UNAVAILABLE: i32 = 2;
pub const EXIT_RUNTIME_ERROR: i32 = 3;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
