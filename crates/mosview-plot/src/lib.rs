//! Plot data for mosview.
//!
//! Produces the sample arrays behind the two charts:
//! - I_D,SAT vs V_GS (transfer characteristic envelope) with a V_GS marker
//! - I_D vs V_DS (output characteristic) with the saturation boundary and a
//!   V_DS marker
//!
//! Model arithmetic is done in amps; samples are emitted in milliamps.

pub mod chart;
pub mod curves;
pub mod series;
pub mod sweep;

pub use chart::{Axis, CURRENT_AXIS_MAX, ChartId, ChartSpec};
pub use curves::{
    PlotData, output_curve, saturation_boundary, saturation_envelope, vds_marker, vgs_marker,
};
pub use series::{CurveSeries, MILLIAMPS_PER_AMP, Sample, SeriesId};
pub use sweep::{SWEEP_MAX, SWEEP_POINTS, SWEEP_STEP, Sweep, quantize};
