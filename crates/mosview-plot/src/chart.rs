//! Static chart descriptors.

use serde::Serialize;

use crate::series::SeriesId;
use crate::sweep::SWEEP_MAX;

/// Fixed upper end of both current axes (mA).
///
/// The axes are not rescaled when the channel geometry changes.
pub const CURRENT_AXIS_MAX: f64 = 0.6;

/// The two charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartId {
    /// Transfer characteristic: I_D,SAT vs V_GS.
    IdVgs,
    /// Output characteristic: I_D vs V_DS.
    IdVds,
}

/// One chart axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: &'static str,
    pub min: f64,
    pub max: f64,
}

/// Layout-independent description of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: ChartId,
    pub x: Axis,
    pub y: Axis,
    /// Series drawn on the chart, back to front.
    pub series: Vec<SeriesId>,
}

impl ChartId {
    pub fn spec(self) -> ChartSpec {
        let (x_title, y_title) = match self {
            ChartId::IdVgs => ("V_GS [V]", "I_D,SAT [mA]"),
            ChartId::IdVds => ("V_DS [V]", "I_D [mA]"),
        };
        ChartSpec {
            id: self,
            x: Axis {
                title: x_title,
                min: 0.0,
                max: SWEEP_MAX,
            },
            y: Axis {
                title: y_title,
                min: 0.0,
                max: CURRENT_AXIS_MAX,
            },
            series: SeriesId::ALL
                .into_iter()
                .filter(|s| s.chart() == self)
                .collect(),
        }
    }
}
