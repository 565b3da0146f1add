//! Fixed voltage sweep shared by both charts.

/// Number of samples per curve.
pub const SWEEP_POINTS: usize = 301;
/// Upper end of the sweep (V). The sweep starts at 0 V.
pub const SWEEP_MAX: f64 = 3.0;
/// Grid spacing (V).
pub const SWEEP_STEP: f64 = SWEEP_MAX / (SWEEP_POINTS - 1) as f64;

/// Grid value at index `i`.
fn grid_value(i: usize) -> f64 {
    i as f64 * SWEEP_MAX / (SWEEP_POINTS - 1) as f64
}

/// Snap a voltage to the nearest sweep grid value.
///
/// Values outside `[0, SWEEP_MAX]` snap to the nearest end of the grid.
pub fn quantize(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    let i = (v / SWEEP_STEP).round().clamp(0.0, (SWEEP_POINTS - 1) as f64);
    grid_value(i as usize)
}

/// Evenly spaced voltages over `[0, SWEEP_MAX]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    values: Vec<f64>,
}

impl Default for Sweep {
    fn default() -> Self {
        Self::voltage_axis()
    }
}

impl Sweep {
    /// The 301-point axis used for both V_GS and V_DS.
    pub fn voltage_axis() -> Self {
        Self {
            values: (0..SWEEP_POINTS).map(grid_value).collect(),
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}
