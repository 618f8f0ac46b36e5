// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod chart;
pub mod config;
pub mod core;
pub mod error;
pub mod gui;
pub mod runner;
pub mod signal;
pub mod specs;
pub mod values;

pub use error::{Error, Result};
