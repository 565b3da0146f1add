//! Long-channel (square-law) NMOS model.
//!
//! The model is the textbook first-order description used for teaching:
//!
//! ```text
//! Cutoff      Vgs <= Vth                 Id = 0
//! Linear      Vds <  Vgs - Vth           Id = K * ((Vgs - Vth) * Vds - Vds^2 / 2)
//! Saturation  Vds >= Vgs - Vth           Id = K/2 * (Vgs - Vth)^2 * (1 + lambda * (Vds - Vdsat))
//! ```
//!
//! Every quantity is a direct formula evaluation. The branch selection in
//! [`drain_current`] goes through [`region`], so the reported operating
//! region and the equation used can never disagree.

pub mod derived;
pub mod params;

pub use derived::DerivedElectricalState;
pub use params::{
    AspectRatio, BiasLimits, ChannelLength, ChannelWidth, DeviceParameters, ProcessParams,
};

use serde::Serialize;
use std::fmt;

/// Operating region of the transistor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OperatingRegion {
    /// No inversion layer: Vgs <= Vth.
    Cutoff,
    /// Triode/ohmic region: channel continuous from source to drain.
    Linear,
    /// Channel pinched off at the drain end.
    Saturation,
}

impl OperatingRegion {
    /// Readout label for the region.
    pub fn label(self) -> &'static str {
        match self {
            OperatingRegion::Cutoff => "Cutoff",
            OperatingRegion::Linear => "Linear",
            OperatingRegion::Saturation => "Saturation",
        }
    }
}

impl fmt::Display for OperatingRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify the operating region for a bias point.
pub fn region(vgs: f64, vds: f64, vth: f64) -> OperatingRegion {
    if vgs <= vth {
        OperatingRegion::Cutoff
    } else if vds < vgs - vth {
        OperatingRegion::Linear
    } else {
        OperatingRegion::Saturation
    }
}

/// Drain current (A) for the given bias, threshold, gain factor `k` (A/V²)
/// and channel-length modulation coefficient `lambda` (1/V).
pub fn drain_current(vgs: f64, vds: f64, vth: f64, k: f64, lambda: f64) -> f64 {
    let vov = vgs - vth;
    match region(vgs, vds, vth) {
        OperatingRegion::Cutoff => 0.0,
        OperatingRegion::Linear => k * (vov * vds - 0.5 * vds * vds),
        OperatingRegion::Saturation => {
            let vdsat = vov;
            0.5 * k * vov * vov * (1.0 + lambda * (vds - vdsat))
        }
    }
}

/// Saturation current at the edge of saturation (A): `K/2 * max(Vgs - Vth, 0)^2`.
///
/// This is the Id,sat envelope of the transfer characteristic, without the
/// channel-length modulation term.
pub fn saturation_current(vgs: f64, vth: f64, k: f64) -> f64 {
    let vov = (vgs - vth).max(0.0);
    0.5 * k * vov * vov
}
