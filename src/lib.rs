pub mod catalog;
pub mod cipher;
pub mod classical;
pub mod cli;
pub mod config;
pub mod data;
pub mod engine;

pub use engine::{Defaults, Dispatcher};
