// src/config.rs

use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::palette::{Palette, PaletteStep};

#[derive(Serialize)]
pub struct RunConfig {
    pub geometry: GeometryConfig,
    pub axes: AxesConfig,
    pub palette: PaletteConfig,
    pub run: RunInfo,
}

#[derive(Serialize)]
pub struct GeometryConfig {
    pub columns: usize,
    pub rows: usize,
}

#[derive(Serialize)]
pub struct AxesConfig {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

#[derive(Serialize)]
pub struct PaletteConfig {
    pub name: String,
    pub mode: String,
    pub min_value: f64,
    pub steps: Vec<PaletteStep>,
}

#[derive(Serialize)]
pub struct RunInfo {
    pub binary: String,
    pub run_id: String,

    // Optional provenance (can be filled later)
    pub timestamp_utc: Option<String>,
}

impl PaletteConfig {
    pub fn from_palette(name: &str, palette: &Palette) -> Self {
        Self {
            name: name.to_string(),
            mode: palette.mode.as_str().to_string(),
            min_value: palette.min_value,
            steps: palette.steps().to_vec(),
        }
    }
}

impl RunConfig {
    pub fn write_to_dir(&self, out_dir: &Path) -> std::io::Result<()> {
        let path = out_dir.join("config.json");
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
