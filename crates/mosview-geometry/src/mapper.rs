//! Bias point to cross-section geometry.
//!
//! All deformations are relative to the resting boxes in
//! [`CrossSectionLayout`]:
//!
//! - The gate stack (oxide, poly) shrinks toward the source as the channel
//!   length control decreases, and the drain with its depletion halo moves
//!   left to follow.
//! - The channel depletion deepens with `sqrt(Vgs / Vgs_max)`, the drain
//!   depletion grows with `sqrt(Vds / Vds_max)`.
//! - The inversion layer thickens with overdrive, tapers toward the drain in
//!   the linear region and pinches off (receding from the drain) in
//!   saturation.
//!
//! Every fraction goes through [`clamp01`], so out-of-range inputs deform
//! the drawing to its limits instead of producing NaN or runaway transforms.

use mosview_devices::BiasLimits;

use crate::layout::{CrossSectionLayout, Rect};
use crate::region::{GeometrySpec, Region, RegionId, RegionShape};
use crate::shape::{Point, Polygon, Transform};

/// Largest fractional shortening of the gate stack.
pub const SHORTEN_MAX: f64 = 0.6;

/// Full inversion-layer thickness at Vgs = Vgs_max.
const CHANNEL_MAX_HEIGHT: f64 = 200.0;
/// Thinner channels than this are not drawn.
const CHANNEL_MIN_HEIGHT: f64 = 0.1;
/// Largest pinch-off recession, as a fraction of the channel width.
const PINCHOFF_SHIFT_MAX: f64 = 0.5;
/// Overlap of the linear-region channel into the drain contact.
const DRAIN_CONTACT_OVERLAP: f64 = 5.0;
/// Extra pinch-off sensitivity of the shortest channel.
const CLM_BOOST_SHORT: f64 = 1.8;
/// Channel depletion depth at Vgs = Vgs_max.
const CHANNEL_DEPLETION_DEPTH: f64 = 150.0 * 2.2;
/// Drain depletion growth (down and to each side) at Vds = Vds_max.
const DRAIN_DEPLETION_GROWTH: f64 = 300.0;
/// Floor for the saturation-overshoot denominator.
const MIN_SPAN: f64 = 1e-6;

/// Inputs of the mapper for one bias point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryInput {
    /// Gate-source voltage (V).
    pub vgs: f64,
    /// Drain-source voltage (V).
    pub vds: f64,
    /// Threshold voltage (V).
    pub vth: f64,
    /// Continuous channel-length control: 0 shortest, 1 longest.
    pub length_factor: f64,
}

/// Clamp to `[0, 1]`; NaN maps to 0.
pub fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Fractional shortening of the gate stack for a length control value.
pub fn shorten(length_factor: f64) -> f64 {
    (1.0 - clamp01(length_factor)) * SHORTEN_MAX
}

/// Map a bias point onto the cross-section.
///
/// Regions whose box is missing from `layout` are left out of the result.
pub fn map_cross_section(
    input: &GeometryInput,
    layout: &CrossSectionLayout,
    limits: &BiasLimits,
) -> GeometrySpec {
    let length_factor = clamp01(input.length_factor);
    let shorten = shorten(length_factor);
    let delta_x = layout.channel.map_or(0.0, |ch| ch.width * shorten);

    let vgs_sqrt = clamp01(input.vgs / limits.vgs_max).sqrt();
    let vds_sqrt = clamp01(input.vds / limits.vds_max).sqrt();

    let mut regions = Vec::with_capacity(RegionId::ALL.len());

    if let Some(ch) = layout.channel {
        let outline = channel_outline(input, &ch, limits, shorten, length_factor);
        regions.push(Region::new(RegionId::Channel, RegionShape::outline(outline)));
    }

    if layout.drain.is_some() {
        regions.push(Region::new(
            RegionId::Drain,
            RegionShape::transform(Transform::translate(-delta_x, 0.0)),
        ));
    }

    if let Some(b) = layout.drain_depletion {
        let grow = DRAIN_DEPLETION_GROWTH * vds_sqrt;
        let outline = Polygon::rect(
            b.x - grow - delta_x,
            b.y,
            b.width + 2.0 * grow,
            b.height + grow,
        );
        regions.push(Region::new(RegionId::DrainDepletion, RegionShape::outline(outline)));
    }

    if let Some(b) = layout.channel_depletion {
        let depth = CHANNEL_DEPLETION_DEPTH * vgs_sqrt;
        let outline = Polygon::rect(b.x, b.y, b.width * (1.0 - shorten), depth);
        regions.push(Region::new(RegionId::ChannelDepletion, RegionShape::outline(outline)));
    }

    for (id, b) in [(RegionId::Oxide, layout.oxide), (RegionId::Poly, layout.poly)] {
        if let Some(b) = b {
            let t = Transform::scale_x_about(b.x, 1.0 - shorten);
            regions.push(Region::new(id, RegionShape::transform(t)));
        }
    }

    GeometrySpec { shorten, regions }
}

/// Inversion-layer quadrilateral, or the empty polygon below threshold.
fn channel_outline(
    input: &GeometryInput,
    ch: &Rect,
    limits: &BiasLimits,
    shorten: f64,
    length_factor: f64,
) -> Polygon {
    let inversion = clamp01((input.vgs - input.vth) / (limits.vgs_max - input.vth));
    let base_h = CHANNEL_MAX_HEIGHT * inversion;
    if base_h <= CHANNEL_MIN_HEIGHT {
        return Polygon::empty();
    }

    let left = ch.x;
    let top = ch.y;
    let width_eff = ch.width * (1.0 - shorten);
    let vdsat = (input.vgs - input.vth).max(0.0);

    let (rise, shift, extra) = if input.vds <= vdsat {
        let frac = if vdsat > 0.0 { clamp01(input.vds / vdsat) } else { 0.0 };
        (base_h * frac, 0.0, DRAIN_CONTACT_OVERLAP)
    } else {
        let overshoot = (input.vds - vdsat) / (limits.vds_max - vdsat).max(MIN_SPAN);
        let clm_boost = 1.0 + (1.0 - length_factor) * CLM_BOOST_SHORT;
        let shift = clamp01(overshoot * clm_boost) * PINCHOFF_SHIFT_MAX * ch.width;
        // Strong inversion hides the recession.
        (base_h, shift * (1.0 - inversion), 0.0)
    };

    Polygon::new(vec![
        Point::new(left, top),
        Point::new(left + width_eff + extra, top),
        Point::new(left + width_eff - shift + extra, top + base_h - rise),
        Point::new(left, top + base_h),
    ])
}
