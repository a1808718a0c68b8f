// src/lib.rs

#[macro_use]
pub mod macros;
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;
pub mod transcript;

pub mod data;
pub mod file;
pub mod progress;
pub mod scrape;

pub use error::{Error, Result};
