pub mod board_operations;
pub mod commands;
#[cfg(test)]
pub mod fake_api;

pub use board_operations::*;
pub use commands::*;
