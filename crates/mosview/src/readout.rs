//! Human-readable readouts.

use mosview_devices::{DerivedElectricalState, DeviceParameters};
use serde::Serialize;

/// Text shown next to the controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Readouts {
    pub vgs: String,
    pub vds: String,
    pub vth: String,
    pub overdrive: String,
    /// Operating region label.
    pub mode: String,
    /// W/L relative to the minimum device, as a reduced fraction.
    pub aspect_ratio: String,
    pub length: String,
    pub width: String,
}

impl Readouts {
    pub fn new(params: &DeviceParameters, state: &DerivedElectricalState) -> Self {
        Self {
            vgs: volts(params.vgs),
            vds: volts(params.vds),
            vth: volts(params.vth),
            overdrive: volts(state.overdrive),
            mode: state.region.label().to_string(),
            aspect_ratio: params.aspect_ratio().to_string(),
            length: params.length.label().to_string(),
            width: params.width.label().to_string(),
        }
    }
}

fn volts(v: f64) -> String {
    format!("{v:.1} V")
}
