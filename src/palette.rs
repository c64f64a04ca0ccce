// src/palette.rs

use serde::Serialize;

use crate::error::Error;

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One palette breakpoint: from `threshold` upward, colours are taken
/// from (or interpolated toward) `color`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaletteStep {
    pub threshold: f64,
    pub color: Rgb,
}

impl PaletteStep {
    pub const fn new(threshold: f64, color: Rgb) -> Self {
        Self { threshold, color }
    }
}

/// How values between two breakpoints are coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteMode {
    /// Linear per-channel interpolation between the bracketing steps.
    Gradient,
    /// The lower step's colour, unchanged.
    Discrete,
}

impl PaletteMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gradient => "gradient",
            Self::Discrete => "discrete",
        }
    }
}

/// Ordered breakpoint palette with a minimum clamp.
///
/// Values at or below `min_value` (and anything below the first
/// threshold, NaN included) map to the first step's colour; values at or
/// above the last threshold map to the last step's colour.
#[derive(Debug, Clone, Serialize)]
pub struct Palette {
    pub min_value: f64,
    pub mode: PaletteMode,
    steps: Vec<PaletteStep>,
}

impl Palette {
    /// Build a palette from an ordered step sequence.
    ///
    /// Fails with `InvalidConfiguration` if `steps` is empty or the
    /// thresholds are not strictly ascending. Steps are never re-sorted
    /// here; ordering is the caller's contract.
    pub fn new(
        min_value: f64,
        mode: PaletteMode,
        steps: Vec<PaletteStep>,
    ) -> Result<Self, Error> {
        if steps.is_empty() {
            return Err(Error::InvalidConfiguration(
                "palette has no steps".to_string(),
            ));
        }
        for pair in steps.windows(2) {
            // `!(a < b)` also rejects NaN thresholds
            if !(pair[0].threshold < pair[1].threshold) {
                return Err(Error::InvalidConfiguration(format!(
                    "palette thresholds not ascending: {} then {}",
                    pair[0].threshold, pair[1].threshold
                )));
            }
        }
        Ok(Self {
            min_value,
            mode,
            steps,
        })
    }

    /// The demo's WPF palette: exact RGB bytes from blue through green
    /// and yellow to red over thresholds -25..100, clamped at -50.
    pub fn thermal() -> Self {
        Self {
            min_value: -50.0,
            mode: PaletteMode::Gradient,
            steps: vec![
                PaletteStep::new(-25.0, Rgb::new(0, 0, 255)),
                PaletteStep::new(0.0, Rgb::new(20, 150, 255)),
                PaletteStep::new(25.0, Rgb::new(0, 255, 0)),
                PaletteStep::new(50.0, Rgb::new(255, 255, 20)),
                PaletteStep::new(75.0, Rgb::new(255, 150, 20)),
                PaletteStep::new(100.0, Rgb::new(255, 0, 0)),
            ],
        }
    }

    /// The demo's WinForms palette: the same ramp built from named
    /// colours (Blue, DodgerBlue, LawnGreen, Yellow, Orange, Red).
    pub fn thermal_named() -> Self {
        Self {
            min_value: -50.0,
            mode: PaletteMode::Gradient,
            steps: vec![
                PaletteStep::new(-25.0, Rgb::new(0, 0, 255)),
                PaletteStep::new(0.0, Rgb::new(30, 144, 255)),
                PaletteStep::new(25.0, Rgb::new(124, 252, 0)),
                PaletteStep::new(50.0, Rgb::new(255, 255, 0)),
                PaletteStep::new(75.0, Rgb::new(255, 165, 0)),
                PaletteStep::new(100.0, Rgb::new(255, 0, 0)),
            ],
        }
    }

    /// The ordered breakpoints.
    pub fn steps(&self) -> &[PaletteStep] {
        &self.steps
    }

    /// Map a scalar value to a colour.
    ///
    /// Pure function of `v` and the palette; call order across cells is
    /// irrelevant.
    pub fn color_at(&self, v: f64) -> Rgb {
        let first = self.steps[0];

        // Below the clamp, below the first breakpoint, or NaN.
        if !(v > self.min_value) || v <= first.threshold {
            return first.color;
        }

        match self.mode {
            PaletteMode::Gradient => {
                let mut lo = first;
                for hi in &self.steps[1..] {
                    if v <= hi.threshold {
                        let t = (v - lo.threshold) / (hi.threshold - lo.threshold);
                        return Rgb::new(
                            lerp_channel(lo.color.r, hi.color.r, t),
                            lerp_channel(lo.color.g, hi.color.g, t),
                            lerp_channel(lo.color.b, hi.color.b, t),
                        );
                    }
                    lo = *hi;
                }
                // Past the last breakpoint: saturate.
                lo.color
            }
            PaletteMode::Discrete => {
                let mut current = first;
                for step in &self.steps[1..] {
                    if v < step.threshold {
                        break;
                    }
                    current = *step;
                }
                current.color
            }
        }
    }
}

/// Linear interpolation of one 8-bit channel; exact at t = 0 and t = 1.
#[inline]
fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_step_palette(mode: PaletteMode) -> Palette {
        Palette::new(
            -10.0,
            mode,
            vec![
                PaletteStep::new(0.0, Rgb::new(0, 0, 0)),
                PaletteStep::new(100.0, Rgb::new(200, 100, 50)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn empty_step_sequence_is_rejected() {
        let err = Palette::new(0.0, PaletteMode::Gradient, vec![]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn unsorted_steps_are_rejected_not_resorted() {
        let steps = vec![
            PaletteStep::new(25.0, Rgb::new(0, 255, 0)),
            PaletteStep::new(0.0, Rgb::new(20, 150, 255)),
        ];
        let err = Palette::new(-50.0, PaletteMode::Gradient, steps).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn duplicate_thresholds_are_rejected() {
        let steps = vec![
            PaletteStep::new(0.0, Rgb::new(0, 0, 255)),
            PaletteStep::new(0.0, Rgb::new(255, 0, 0)),
        ];
        assert!(Palette::new(-50.0, PaletteMode::Gradient, steps).is_err());
    }

    #[test]
    fn gradient_interpolates_each_channel_linearly() {
        let p = two_step_palette(PaletteMode::Gradient);
        assert_eq!(p.color_at(50.0), Rgb::new(100, 50, 25));
        assert_eq!(p.color_at(25.0), Rgb::new(50, 25, 13)); // 12.5 rounds up
    }

    #[test]
    fn discrete_mode_holds_the_lower_step_colour() {
        let p = two_step_palette(PaletteMode::Discrete);
        assert_eq!(p.color_at(50.0), Rgb::new(0, 0, 0));
        assert_eq!(p.color_at(99.9), Rgb::new(0, 0, 0));
        // Exactly at a breakpoint, that step's colour applies
        assert_eq!(p.color_at(100.0), Rgb::new(200, 100, 50));
    }

    #[test]
    fn nan_maps_to_the_first_colour() {
        let p = two_step_palette(PaletteMode::Gradient);
        assert_eq!(p.color_at(f64::NAN), Rgb::new(0, 0, 0));
    }

    #[test]
    fn named_palette_shares_thresholds_with_the_byte_palette() {
        let a = Palette::thermal();
        let b = Palette::thermal_named();
        assert_eq!(a.steps().len(), b.steps().len());
        for (sa, sb) in a.steps().iter().zip(b.steps()) {
            assert_eq!(sa.threshold, sb.threshold);
        }
        // Endpoints agree exactly (Blue and Red are the same bytes)
        assert_eq!(a.steps()[0].color, b.steps()[0].color);
        assert_eq!(a.steps()[5].color, b.steps()[5].color);
    }
}
