// src/main.rs
//
// CLI driver: generates the demo scalar field, maps it through a
// breakpoint palette and renders a heat-map PNG.
//
// Outputs are written to `runs/` (or the directory specified via `out=`)
// and are not committed to version control.
//
// Examples:
//
//   cargo run --release
//       -> 500x500 field, WPF byte palette, gradient mode.
//
//   cargo run --release -- palette=named mode=discrete
//       -> WinForms named-colour palette with stepped colouring.
//
//   cargo run --release -- cols=200 rows=150 min=-25 out=scratch run=demo
//
// Typical outputs (per run directory):
//   runs/<run_id>/
//     ├── config.json
//     └── heatmap.png

use std::env;
use std::fs::create_dir_all;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;

use heatgrid::config::{AxesConfig, GeometryConfig, PaletteConfig, RunConfig, RunInfo};
use heatgrid::field::ScalarField;
use heatgrid::palette::{Palette, PaletteMode};
use heatgrid::params::{X_RANGE, Y_RANGE};
use heatgrid::visualisation::save_heatmap_plot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaletteChoice {
    /// Exact RGB bytes of the WPF demo.
    Thermal,
    /// Named colours of the WinForms demo (DodgerBlue, LawnGreen, ...).
    ThermalNamed,
}

impl PaletteChoice {
    fn from_str(s: &str) -> Option<Self> {
        match s {
            "thermal" | "wpf" => Some(Self::Thermal),
            "named" | "thermal-named" | "winforms" => Some(Self::ThermalNamed),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Thermal => "thermal",
            Self::ThermalNamed => "thermal-named",
        }
    }

    fn build(&self) -> Palette {
        match self {
            Self::Thermal => Palette::thermal(),
            Self::ThermalNamed => Palette::thermal_named(),
        }
    }
}

fn print_usage() {
    eprintln!(
        r#"Usage:
  cargo run -- [cols=N] [rows=N]
             [palette=thermal|named] [mode=gradient|discrete] [min=VAL]
             [out=DIR] [run=RUN_ID]

Notes:
  - Defaults reproduce the original demo: 500x500 cells, thermal palette,
    gradient mode, MinValue clamp at -50.
  - min= replaces the palette's clamp value; values at or below it take
    the first breakpoint's colour.
"#
    );
}

fn sanitize_run_id(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn default_run_id(palette: PaletteChoice, mode: PaletteMode) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0));
    let ts = format!("{}{:03}", now.as_secs(), now.subsec_millis());
    format!("{}_{}_{}", ts, palette.as_str(), mode.as_str())
}

fn unique_run_dir(out_root: &str, run_id: &str) -> PathBuf {
    let base = PathBuf::from(out_root);
    let dir = base.join(run_id);
    if !dir.exists() {
        return dir;
    }
    // Never fall back to an existing directory; keep counting until a
    // free suffix turns up.
    let mut k: u64 = 1;
    loop {
        let cand = base.join(format!("{}_{}", run_id, k));
        if !cand.exists() {
            return cand;
        }
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::create_dir_all;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn unique_run_dir_never_reuses_an_existing_directory() {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let base = std::env::temp_dir().join(format!("heatgrid_run_dir_test_{ts}"));
        let out_root = base.to_string_lossy().to_string();

        // Fill the plain name and more suffixes than the old cap allowed
        create_dir_all(base.join("demo")).unwrap();
        for k in 1..=1000u64 {
            create_dir_all(base.join(format!("demo_{k}"))).unwrap();
        }

        let picked = unique_run_dir(&out_root, "demo");
        assert_eq!(picked, base.join("demo_1001"));
        assert!(!picked.exists(), "picked dir {:?} already exists", picked);

        std::fs::remove_dir_all(&base).unwrap();
    }
}

fn main() -> anyhow::Result<()> {
    let argv: Vec<String> = env::args().collect();

    let mut columns: usize = 500;
    let mut rows: usize = 500;
    let mut palette_choice = PaletteChoice::Thermal;
    let mut mode_override: Option<PaletteMode> = None;
    let mut min_override: Option<f64> = None;

    // Output controls
    let mut out_root_override: Option<String> = None;
    let mut run_id_override: Option<String> = None;

    for arg in argv.iter().skip(1) {
        if arg == "-h" || arg == "--help" || arg == "help" {
            print_usage();
            return Ok(());
        }

        if let Some(v) = arg.strip_prefix("cols=") {
            match v.parse::<usize>() {
                Ok(n) => columns = n,
                Err(_) => eprintln!("Warning: could not parse cols value '{v}', ignoring"),
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("rows=") {
            match v.parse::<usize>() {
                Ok(n) => rows = n,
                Err(_) => eprintln!("Warning: could not parse rows value '{v}', ignoring"),
            }
            continue;
        }

        if let Some(v) = arg.strip_prefix("palette=") {
            palette_choice = PaletteChoice::from_str(v).unwrap_or_else(|| {
                eprintln!("Warning: unknown palette '{v}', using thermal");
                PaletteChoice::Thermal
            });
            continue;
        }
        if let Some(v) = arg.strip_prefix("mode=") {
            match v {
                "gradient" => mode_override = Some(PaletteMode::Gradient),
                "discrete" => mode_override = Some(PaletteMode::Discrete),
                _ => eprintln!("Warning: unknown mode '{v}', expected gradient/discrete"),
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("min=") {
            match v.parse::<f64>() {
                Ok(x) => min_override = Some(x),
                Err(_) => eprintln!("Warning: could not parse min value '{v}', ignoring"),
            }
            continue;
        }

        if let Some(v) = arg.strip_prefix("out=") {
            out_root_override = Some(v.to_string());
            continue;
        }
        if let Some(v) = arg.strip_prefix("run=") {
            run_id_override = Some(v.to_string());
            continue;
        }

        eprintln!("Warning: ignoring unknown argument '{arg}'");
    }

    // -------- palette setup --------
    let base = palette_choice.build();
    let mode = mode_override.unwrap_or(base.mode);
    let min_value = min_override.unwrap_or(base.min_value);
    let palette = Palette::new(min_value, mode, base.steps().to_vec())?;

    // -------- output directory setup --------
    let out_root = out_root_override.unwrap_or_else(|| "runs".to_string());
    create_dir_all(&out_root)?;

    let mut run_id =
        run_id_override.unwrap_or_else(|| default_run_id(palette_choice, mode));
    run_id = sanitize_run_id(&run_id);

    let run_dir = unique_run_dir(&out_root, &run_id);
    create_dir_all(&run_dir)?;

    // -------------------------------------------------
    // Write config.json
    // -------------------------------------------------
    let run_config = RunConfig {
        geometry: GeometryConfig { columns, rows },
        axes: AxesConfig {
            x_min: X_RANGE.min,
            x_max: X_RANGE.max,
            y_min: Y_RANGE.min,
            y_max: Y_RANGE.max,
        },
        palette: PaletteConfig::from_palette(palette_choice.as_str(), &palette),
        run: RunInfo {
            binary: "heatgrid".to_string(),
            run_id: run_id.clone(),
            timestamp_utc: None,
        },
    };
    run_config.write_to_dir(&run_dir)?;

    // -------- field generation --------
    let field = ScalarField::generate(columns, rows)?;

    println!("--- heatgrid run config ---");
    println!("run_dir: {}", run_dir.to_string_lossy());
    println!("grid:    columns={} rows={}", columns, rows);
    println!(
        "axes:    x=[{}, {}] y=[{}, {}]",
        X_RANGE.min, X_RANGE.max, Y_RANGE.min, Y_RANGE.max
    );
    println!(
        "palette: {} mode={} min_value={} steps={}",
        palette_choice.as_str(),
        mode.as_str(),
        min_value,
        palette.steps().len()
    );
    if let Some((lo, hi)) = field.value_range() {
        println!("field:   min={:.3} max={:.3}", lo, hi);
    }
    println!("---------------------------");

    // -------- render --------
    let png_path = run_dir.join("heatmap.png");
    let png_name = png_path.to_string_lossy().to_string();
    save_heatmap_plot(&field, &palette, X_RANGE, Y_RANGE, &png_name)
        .map_err(|e| anyhow::anyhow!("render heat map: {e}"))
        .context("writing heatmap.png")?;

    println!("Wrote {}", png_name);

    Ok(())
}
