//! Curve and marker generation.
//!
//! Base curves depend only on K and Vth and change when the channel
//! geometry does. The output curve depends on Vgs as well. Markers track the
//! operating point.

use mosview_devices::{
    DerivedElectricalState, DeviceParameters, drain_current, saturation_current,
};
use serde::Serialize;

use crate::series::{CurveSeries, MILLIAMPS_PER_AMP, Sample, SeriesId};
use crate::sweep::{Sweep, quantize};

fn sample_sweep(sweep: &Sweep, id: SeriesId, current: impl Fn(f64) -> f64) -> CurveSeries {
    let points = sweep
        .iter()
        .map(|v| Sample::new(v, current(v) * MILLIAMPS_PER_AMP))
        .collect();
    CurveSeries::new(id, points)
}

/// I_D,SAT vs V_GS: `K/2 * max(v - Vth, 0)^2` over the sweep.
pub fn saturation_envelope(sweep: &Sweep, k: f64, vth: f64) -> CurveSeries {
    sample_sweep(sweep, SeriesId::SaturationEnvelope, |v| {
        saturation_current(v, vth, k)
    })
}

/// Saturation boundary on the output chart: `K/2 * v^2` over the sweep.
///
/// With V_DS = V_GS - V_TH substituted into the saturation current, this is
/// where every output curve leaves the linear region.
pub fn saturation_boundary(sweep: &Sweep, k: f64) -> CurveSeries {
    sample_sweep(sweep, SeriesId::SaturationBoundary, |v| 0.5 * k * v * v)
}

/// I_D vs V_DS at a fixed V_GS.
pub fn output_curve(sweep: &Sweep, vgs: f64, vth: f64, k: f64, lambda: f64) -> CurveSeries {
    sample_sweep(sweep, SeriesId::OutputCurve, |vds| {
        drain_current(vgs, vds, vth, k, lambda)
    })
}

/// Transfer-chart marker, snapped to the sweep grid so it sits on the envelope.
pub fn vgs_marker(vgs: f64, vth: f64, k: f64) -> CurveSeries {
    let x = quantize(vgs);
    let y = saturation_current(x, vth, k) * MILLIAMPS_PER_AMP;
    CurveSeries::new(SeriesId::VgsMarker, vec![Sample::new(x, y)])
}

/// Output-chart marker at the exact bias point.
pub fn vds_marker(vgs: f64, vds: f64, vth: f64, k: f64, lambda: f64) -> CurveSeries {
    let y = drain_current(vgs, vds, vth, k, lambda) * MILLIAMPS_PER_AMP;
    CurveSeries::new(SeriesId::VdsMarker, vec![Sample::new(vds, y)])
}

/// All five series for one bias point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotData {
    pub saturation_envelope: CurveSeries,
    pub vgs_marker: CurveSeries,
    pub saturation_boundary: CurveSeries,
    pub output_curve: CurveSeries,
    pub vds_marker: CurveSeries,
}

impl PlotData {
    /// Generate every series from one model evaluation.
    pub fn generate(
        sweep: &Sweep,
        params: &DeviceParameters,
        state: &DerivedElectricalState,
    ) -> Self {
        let (vth, k, lambda) = (params.vth, state.k, state.lambda);
        Self {
            saturation_envelope: saturation_envelope(sweep, k, vth),
            vgs_marker: vgs_marker(params.vgs, vth, k),
            saturation_boundary: saturation_boundary(sweep, k),
            output_curve: output_curve(sweep, params.vgs, vth, k, lambda),
            vds_marker: vds_marker(params.vgs, params.vds, vth, k, lambda),
        }
    }

    pub fn get(&self, id: SeriesId) -> &CurveSeries {
        match id {
            SeriesId::SaturationEnvelope => &self.saturation_envelope,
            SeriesId::VgsMarker => &self.vgs_marker,
            SeriesId::SaturationBoundary => &self.saturation_boundary,
            SeriesId::OutputCurve => &self.output_curve,
            SeriesId::VdsMarker => &self.vds_marker,
        }
    }

    /// All series in [`SeriesId::ALL`] order.
    pub fn into_series(self) -> Vec<CurveSeries> {
        vec![
            self.saturation_envelope,
            self.vgs_marker,
            self.saturation_boundary,
            self.output_curve,
            self.vds_marker,
        ]
    }

    /// Replace the series with the same id.
    pub fn replace(&mut self, series: CurveSeries) {
        let slot = match series.id {
            SeriesId::SaturationEnvelope => &mut self.saturation_envelope,
            SeriesId::VgsMarker => &mut self.vgs_marker,
            SeriesId::SaturationBoundary => &mut self.saturation_boundary,
            SeriesId::OutputCurve => &mut self.output_curve,
            SeriesId::VdsMarker => &mut self.vds_marker,
        };
        *slot = series;
    }
}
