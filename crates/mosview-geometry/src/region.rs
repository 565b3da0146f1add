//! Region identifiers and the mapper's output description.

use std::fmt;

use serde::Serialize;

use crate::shape::{Polygon, Transform};

/// Stable identifiers of the deformable cross-section regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionId {
    /// Inversion layer under the gate.
    Channel,
    /// n+ drain diffusion.
    Drain,
    /// Depletion halo around the drain junction.
    DrainDepletion,
    /// Depletion region under the channel.
    ChannelDepletion,
    /// Gate oxide.
    Oxide,
    /// Polysilicon gate.
    Poly,
}

impl RegionId {
    pub const ALL: [RegionId; 6] = [
        RegionId::Channel,
        RegionId::Drain,
        RegionId::DrainDepletion,
        RegionId::ChannelDepletion,
        RegionId::Oxide,
        RegionId::Poly,
    ];

    /// Element id of the region in the cross-section SVG.
    pub fn svg_id(self) -> &'static str {
        match self {
            RegionId::Channel => "MOSFET_Channel",
            RegionId::Drain => "MOSFET_Drain",
            RegionId::DrainDepletion => "MOSFET_Drain_Depletion_Region",
            RegionId::ChannelDepletion => "MOSFET_Channel_Depletion_Region",
            RegionId::Oxide => "MOSFET_Channel_Oxide",
            RegionId::Poly => "MOSFET_Channel_Poly",
        }
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.svg_id())
    }
}

/// How a region is to be redrawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegionShape {
    /// Replace the region's outline.
    Outline { polygon: Polygon, path: String },
    /// Keep the outline and apply a transform.
    Transform { transform: Transform, svg: String },
}

impl RegionShape {
    pub fn outline(polygon: Polygon) -> Self {
        let path = polygon.to_path_data();
        RegionShape::Outline { polygon, path }
    }

    pub fn transform(transform: Transform) -> Self {
        let svg = transform.to_svg();
        RegionShape::Transform { transform, svg }
    }
}

/// One region of the output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub id: RegionId,
    pub svg_id: &'static str,
    #[serde(flatten)]
    pub shape: RegionShape,
}

impl Region {
    pub fn new(id: RegionId, shape: RegionShape) -> Self {
        Self {
            id,
            svg_id: id.svg_id(),
            shape,
        }
    }
}

/// Complete cross-section description for one bias point.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GeometrySpec {
    /// Fraction by which the gate stack is shortened, in `[0, 0.6]`.
    pub shorten: f64,
    /// Regions present in the layout, in [`RegionId::ALL`] order.
    pub regions: Vec<Region>,
}

impl GeometrySpec {
    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Outline of a region, if it is redrawn as a polygon.
    pub fn outline(&self, id: RegionId) -> Option<&Polygon> {
        match self.get(id).map(|r| &r.shape) {
            Some(RegionShape::Outline { polygon, .. }) => Some(polygon),
            _ => None,
        }
    }

    /// Transform of a region, if it is redrawn by transformation.
    pub fn transform(&self, id: RegionId) -> Option<&Transform> {
        match self.get(id).map(|r| &r.shape) {
            Some(RegionShape::Transform { transform, .. }) => Some(transform),
            _ => None,
        }
    }

    /// Whether every coordinate in the description is finite.
    pub fn is_finite(&self) -> bool {
        self.shorten.is_finite()
            && self.regions.iter().all(|r| match &r.shape {
                RegionShape::Outline { polygon, .. } => polygon.is_finite(),
                RegionShape::Transform { transform, .. } => transform.is_finite(),
            })
    }
}
