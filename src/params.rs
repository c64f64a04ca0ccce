// src/params.rs

/// Constants of the generated test field.
///
/// The default values reproduce the classic heat-map demo surface:
///
/// ```text
/// v(i, j) = offset + ripple_amp * cos(ripple_phase + ripple_scale * i * j)
///                  + wave_amp   * cos((j - i) * wave_freq)
/// ```
///
/// i.e. a slow diagonal wave with a high-frequency ripple on top.
#[derive(Debug, Clone, Copy)]
pub struct FieldParams {
    pub offset: f64,
    pub ripple_amp: f64,
    pub ripple_phase: f64, // radians
    pub ripple_scale: f64,
    pub wave_amp: f64,
    pub wave_freq: f64, // radians per cell along the diagonal
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            offset: 30.0,
            ripple_amp: 20.0,
            ripple_phase: 20.0,
            ripple_scale: 0.0001,
            wave_amp: 70.0,
            wave_freq: 0.01,
        }
    }
}

impl FieldParams {
    /// Field value at cell (i, j); `i` is the column index, `j` the row index.
    #[inline]
    pub fn value_at(&self, i: usize, j: usize) -> f64 {
        let x = i as f64;
        let y = j as f64;
        self.offset
            + self.ripple_amp * (self.ripple_phase + self.ripple_scale * x * y).cos()
            + self.wave_amp * ((y - x) * self.wave_freq).cos()
    }
}

/// Presentational coordinate range of one chart axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Default X-axis range of the demo chart.
pub const X_RANGE: AxisRange = AxisRange::new(0.0, 640.0);

/// Default Y-axis range of the demo chart.
pub const Y_RANGE: AxisRange = AxisRange::new(0.0, 480.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_match_demo_formula() {
        let p = FieldParams::default();
        let i = 123;
        let j = 77;
        let expected = 30.0
            + 20.0 * (20.0 + 0.0001 * (i as f64) * (j as f64)).cos()
            + 70.0 * (((j as f64) - (i as f64)) * 0.01).cos();
        assert_eq!(p.value_at(i, j), expected);
    }
}
