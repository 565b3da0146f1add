//! Electrical state derived from one parameter snapshot.
//!
//! Computed once per input event and shared by the geometry mapper and the
//! plot generator, so both always describe the same bias point.

use serde::Serialize;

use super::params::{DeviceParameters, ProcessParams};
use super::{OperatingRegion, drain_current, region, saturation_current};

/// Pre-calculated quantities for a bias point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedElectricalState {
    /// Overdrive voltage max(0, Vgs - Vth) (V)
    pub overdrive: f64,
    /// Operating region
    pub region: OperatingRegion,
    /// Drain-source saturation voltage (V), equal to the overdrive
    pub vdsat: f64,
    /// Gain factor K (A/V^2)
    pub k: f64,
    /// Channel-length modulation coefficient (1/V)
    pub lambda: f64,
    /// Drain current at the bias point (A)
    pub drain_current: f64,
    /// Saturation current at this Vgs, without CLM (A)
    pub saturation_current: f64,
}

impl DerivedElectricalState {
    /// Evaluate the model for a parameter snapshot.
    pub fn evaluate(params: &DeviceParameters, process: &ProcessParams) -> Self {
        let k = process.gain_factor(params.width, params.length);
        let lambda = process.lambda_for(params.length);
        let overdrive = (params.vgs - params.vth).max(0.0);

        Self {
            overdrive,
            region: region(params.vgs, params.vds, params.vth),
            vdsat: overdrive,
            k,
            lambda,
            drain_current: drain_current(params.vgs, params.vds, params.vth, k, lambda),
            saturation_current: saturation_current(params.vgs, params.vth, k),
        }
    }
}
