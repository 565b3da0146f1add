//! Resting bounding boxes of the cross-section regions.
//!
//! The mapper deforms each region relative to the box it occupies in the
//! undeformed drawing. A box left as `None` marks a region the diagram does
//! not contain; the mapper skips it.

use serde::{Deserialize, Serialize};

use crate::region::RegionId;

/// Axis-aligned box in diagram coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Bounding boxes of the deformable regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossSectionLayout {
    pub channel: Option<Rect>,
    pub drain: Option<Rect>,
    pub drain_depletion: Option<Rect>,
    pub channel_depletion: Option<Rect>,
    pub oxide: Option<Rect>,
    pub poly: Option<Rect>,
}

impl Default for CrossSectionLayout {
    /// The stock diagram: source on the left, drain on the right, a
    /// 400-unit channel under a thin oxide and poly gate.
    fn default() -> Self {
        Self {
            channel: Some(Rect::new(400.0, 300.0, 400.0, 200.0)),
            drain: Some(Rect::new(800.0, 280.0, 250.0, 150.0)),
            drain_depletion: Some(Rect::new(790.0, 280.0, 270.0, 160.0)),
            channel_depletion: Some(Rect::new(400.0, 300.0, 400.0, 10.0)),
            oxide: Some(Rect::new(400.0, 270.0, 400.0, 30.0)),
            poly: Some(Rect::new(400.0, 170.0, 400.0, 100.0)),
        }
    }
}

impl CrossSectionLayout {
    /// A layout with no regions at all.
    pub fn empty() -> Self {
        Self {
            channel: None,
            drain: None,
            drain_depletion: None,
            channel_depletion: None,
            oxide: None,
            poly: None,
        }
    }

    /// Box of a region, if the diagram has it.
    pub fn get(&self, id: RegionId) -> Option<Rect> {
        match id {
            RegionId::Channel => self.channel,
            RegionId::Drain => self.drain,
            RegionId::DrainDepletion => self.drain_depletion,
            RegionId::ChannelDepletion => self.channel_depletion,
            RegionId::Oxide => self.oxide,
            RegionId::Poly => self.poly,
        }
    }

    /// Regions without a box.
    pub fn missing_regions(&self) -> Vec<RegionId> {
        RegionId::ALL
            .into_iter()
            .filter(|&id| self.get(id).is_none())
            .collect()
    }
}
