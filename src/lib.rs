pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod runner;
pub mod scanner;
pub mod syntax;

pub use error::{Result, RollbackGuardError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
