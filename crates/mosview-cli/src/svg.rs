//! Standalone SVG rendering of a [`GeometrySpec`].
//!
//! Regions redrawn by transformation are emitted as their resting box with
//! a `transform` attribute; regions redrawn by outline use the mapper's path
//! data directly.

use std::fmt::Write as _;

use mosview::Readouts;
use mosview::geometry::{CrossSectionLayout, GeometrySpec, RegionId, RegionShape};

const WIDTH: f64 = 1400.0;
const HEIGHT: f64 = 900.0;

/// Back-to-front drawing order.
const DRAW_ORDER: [RegionId; 6] = [
    RegionId::DrainDepletion,
    RegionId::ChannelDepletion,
    RegionId::Drain,
    RegionId::Oxide,
    RegionId::Poly,
    RegionId::Channel,
];

fn fill(id: RegionId) -> &'static str {
    match id {
        RegionId::Channel => "#2c6db4",
        RegionId::Drain => "#c0392b",
        RegionId::DrainDepletion => "#f5d5a0",
        RegionId::ChannelDepletion => "#f9e6c4",
        RegionId::Oxide => "#d0d0d0",
        RegionId::Poly => "#7f8c8d",
    }
}

/// Render the cross-section with a readout caption.
pub fn render(geometry: &GeometrySpec, layout: &CrossSectionLayout, readouts: &Readouts) -> String {
    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" "#
    );
    let _ = writeln!(svg, r#"width="{WIDTH}" height="{HEIGHT}">"#);
    let _ = writeln!(
        svg,
        r##"  <rect x="0" y="300" width="{WIDTH}" height="{}" fill="#eef3e8"/>"##,
        HEIGHT - 300.0
    );

    for id in DRAW_ORDER {
        let Some(region) = geometry.get(id) else {
            continue;
        };
        match &region.shape {
            RegionShape::Outline { path, .. } => {
                let _ = writeln!(
                    svg,
                    r#"  <path id="{}" d="{}" fill="{}"/>"#,
                    region.svg_id,
                    path,
                    fill(id)
                );
            }
            RegionShape::Transform { svg: transform, .. } => {
                let Some(b) = layout.get(id) else {
                    continue;
                };
                let _ = write!(
                    svg,
                    r#"  <rect id="{}" x="{}" y="{}" width="{}" height="{}""#,
                    region.svg_id, b.x, b.y, b.width, b.height
                );
                let _ = writeln!(svg, r#" fill="{}" transform="{}"/>"#, fill(id), transform);
            }
        }
    }

    let caption = format!(
        "V_GS = {}   V_DS = {}   V_OV = {}   {}   L: {}   W: {}   W/L: {}",
        readouts.vgs,
        readouts.vds,
        readouts.overdrive,
        readouts.mode,
        readouts.length,
        readouts.width,
        readouts.aspect_ratio
    );
    let _ = writeln!(
        svg,
        r#"  <text x="20" y="{}" font-family="sans-serif" font-size="22">{}</text>"#,
        HEIGHT - 20.0,
        escape(&caption)
    );
    svg.push_str("</svg>\n");
    svg
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosview::{Event, Session, SessionConfig};

    #[test]
    fn test_render_contains_every_region() {
        let session = Session::new(SessionConfig::default()).unwrap();
        let doc = render(session.geometry(), &session.config().layout, &session.readouts());
        assert!(doc.starts_with("<svg"));
        assert!(doc.trim_end().ends_with("</svg>"));
        for id in RegionId::ALL {
            assert!(doc.contains(id.svg_id()), "missing {id}");
        }
        assert!(doc.contains("Saturation"));
    }

    #[test]
    fn test_render_cutoff_channel_is_empty_path() {
        let mut session = Session::new(SessionConfig::default()).unwrap();
        session.handle(Event::Vgs(0.0));
        let doc = render(session.geometry(), &session.config().layout, &session.readouts());
        assert!(doc.contains(r#"<path id="MOSFET_Channel" d="""#));
    }

    #[test]
    fn test_render_skips_missing_region() {
        let config = SessionConfig {
            layout: CrossSectionLayout {
                poly: None,
                ..Default::default()
            },
            ..Default::default()
        };
        let session = Session::new(config).unwrap();
        let doc = render(session.geometry(), &session.config().layout, &session.readouts());
        assert!(!doc.contains("MOSFET_Channel_Poly"));
        assert!(doc.contains("MOSFET_Channel_Oxide"));
    }
}
