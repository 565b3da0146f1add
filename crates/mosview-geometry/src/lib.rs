//! Cross-section geometry for mosview.
//!
//! Maps a bias point and the channel-length control onto a renderer-neutral
//! description of the MOSFET cross-section: one outline or affine transform
//! per region, addressed by [`RegionId`]. Nothing here talks to a drawing
//! API; an adapter turns [`GeometrySpec`] into draw calls or SVG attributes.

pub mod layout;
pub mod mapper;
pub mod region;
pub mod shape;

pub use layout::{CrossSectionLayout, Rect};
pub use mapper::{GeometryInput, SHORTEN_MAX, clamp01, map_cross_section, shorten};
pub use region::{GeometrySpec, Region, RegionId, RegionShape};
pub use shape::{Point, Polygon, Transform};
