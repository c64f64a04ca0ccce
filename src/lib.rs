// src/lib.rs

pub mod config;
pub mod error;
pub mod field;
pub mod grid;
pub mod palette;
pub mod params;
pub mod visualisation;
