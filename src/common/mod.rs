pub mod config;
pub mod error;
pub mod interrupt;
pub mod utils;
