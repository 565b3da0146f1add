//! Named sample series.

use serde::Serialize;

use crate::chart::ChartId;

/// Display scale applied to currents at the output boundary.
pub const MILLIAMPS_PER_AMP: f64 = 1e3;

/// Identifies one series on one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesId {
    /// I_D,SAT vs V_GS.
    SaturationEnvelope,
    /// Operating point on the I_D,SAT vs V_GS chart.
    VgsMarker,
    /// Locus V_DS = V_GS - V_TH on the output chart.
    SaturationBoundary,
    /// I_D vs V_DS at the current V_GS.
    OutputCurve,
    /// Operating point on the output chart.
    VdsMarker,
}

impl SeriesId {
    pub const ALL: [SeriesId; 5] = [
        SeriesId::SaturationEnvelope,
        SeriesId::VgsMarker,
        SeriesId::SaturationBoundary,
        SeriesId::OutputCurve,
        SeriesId::VdsMarker,
    ];

    /// Chart the series belongs to.
    pub fn chart(self) -> ChartId {
        match self {
            SeriesId::SaturationEnvelope | SeriesId::VgsMarker => ChartId::IdVgs,
            SeriesId::SaturationBoundary | SeriesId::OutputCurve | SeriesId::VdsMarker => {
                ChartId::IdVds
            }
        }
    }

    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            SeriesId::SaturationEnvelope => "I_D,SAT vs V_GS",
            SeriesId::VgsMarker => "Selected V_GS",
            SeriesId::SaturationBoundary => "Saturation Boundary (V_DS = V_GS − V_TH)",
            SeriesId::OutputCurve => "I_D vs V_DS",
            SeriesId::VdsMarker => "Selected V_DS",
        }
    }

    /// Single-point series drawn as a dot above the lines.
    pub fn is_marker(self) -> bool {
        matches!(self, SeriesId::VgsMarker | SeriesId::VdsMarker)
    }
}

/// One (x, y) sample: volts and milliamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An ordered sample array for one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveSeries {
    pub id: SeriesId,
    pub label: &'static str,
    pub chart: ChartId,
    pub marker: bool,
    pub points: Vec<Sample>,
}

impl CurveSeries {
    pub fn new(id: SeriesId, points: Vec<Sample>) -> Self {
        Self {
            id,
            label: id.label(),
            chart: id.chart(),
            marker: id.is_marker(),
            points,
        }
    }

    /// Largest y value, or 0 for an empty series.
    pub fn max_y(&self) -> f64 {
        self.points.iter().map(|p| p.y).fold(0.0, f64::max)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The single point of a marker series.
    pub fn point(&self) -> Option<Sample> {
        self.points.first().copied()
    }
}
