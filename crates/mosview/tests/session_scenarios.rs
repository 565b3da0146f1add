//! End-to-end scenarios for the session controller.

use mosview::devices::{
    BiasLimits, ChannelLength, ChannelWidth, OperatingRegion, ProcessParams,
};
use mosview::geometry::{RegionId, SHORTEN_MAX};
use mosview::plot::{ChartId, SWEEP_STEP, SeriesId};
use mosview::{Event, InitialBias, Session, SessionConfig, UpdateKind};

fn session_at(vgs: f64, vds: f64, length: ChannelLength) -> Session {
    let config = SessionConfig {
        initial: InitialBias {
            vgs,
            vds,
            length,
            width: ChannelWidth::Narrow,
        },
        ..Default::default()
    };
    Session::new(config).expect("default config is valid")
}

fn long_narrow_k() -> f64 {
    // W/L = 10 * (1 / 2) = 5
    0.5 * 50e-4 * 8e-3 * 5.0
}

#[test]
fn test_scenario_cutoff_at_threshold() {
    let mut s = session_at(1.0, 1.0, ChannelLength::Long);
    let update = s.handle(Event::Vgs(0.5));

    assert_eq!(update.readouts.mode, "Cutoff");
    assert_eq!(update.state.region, OperatingRegion::Cutoff);
    assert_eq!(update.state.drain_current, 0.0);
    let marker = update.series(SeriesId::VdsMarker).unwrap().point().unwrap();
    assert_eq!(marker.y, 0.0);

    let channel = update.geometry.outline(RegionId::Channel).unwrap();
    assert!(channel.is_empty());
    assert_eq!(channel.height(), 0.0);
}

#[test]
fn test_scenario_linear() {
    let mut s = session_at(1.5, 1.0, ChannelLength::Long);
    let update = s.handle(Event::Vds(0.3));

    let k = long_narrow_k();
    assert!((update.state.k - k).abs() < 1e-18);
    assert!((update.state.vdsat - 1.0).abs() < 1e-12);
    assert_eq!(update.readouts.mode, "Linear");
    let expected = k * (1.0 * 0.3 - 0.5 * 0.09);
    assert!((update.state.drain_current - expected).abs() < 1e-15);
}

#[test]
fn test_scenario_saturation() {
    let mut s = session_at(1.5, 1.0, ChannelLength::Long);
    let update = s.handle(Event::Vds(2.0));

    let k = long_narrow_k();
    assert_eq!(update.readouts.mode, "Saturation");
    assert_eq!(update.state.lambda, 0.01);
    let expected = 0.5 * k * 1.0 * (1.0 + 0.01 * 1.0);
    assert!((update.state.drain_current - expected).abs() < 1e-15);

    let marker = update.series(SeriesId::VdsMarker).unwrap().point().unwrap();
    assert_eq!(marker.x, 2.0);
    assert_eq!(marker.y, update.state.drain_current * 1e3);
}

#[test]
fn test_scenario_length_toggle_rebuilds_base_curves() {
    let mut s = session_at(1.5, 2.0, ChannelLength::Long);
    let before = s.plots().clone();
    let k_before = s.state().k;

    let update = s.handle(Event::Length(ChannelLength::Short));

    assert_eq!(update.kind, UpdateKind::Rebuild);
    assert!((update.state.k / k_before - 2.0).abs() < 1e-12);
    assert_eq!(update.state.lambda, 0.1);
    assert_eq!(update.readouts.aspect_ratio, "1");
    assert_eq!(update.readouts.length, "Short (L_min)");

    let envelope = update.series(SeriesId::SaturationEnvelope).unwrap();
    let boundary = update.series(SeriesId::SaturationBoundary).unwrap();
    assert_ne!(*envelope, before.saturation_envelope);
    assert_ne!(*boundary, before.saturation_boundary);
    assert_eq!(s.plots().saturation_envelope, *envelope);
    assert_eq!(s.plots().saturation_boundary, *boundary);

    // the gate stack shrinks with the short channel
    assert!(update.geometry.shorten > 0.4 && update.geometry.shorten <= SHORTEN_MAX);
}

#[test]
fn test_scenario_width_toggle_rebuilds() {
    let mut s = session_at(2.0, 1.0, ChannelLength::Long);
    let k_before = s.state().k;
    let update = s.handle(Event::Width(ChannelWidth::Wide));

    assert_eq!(update.kind, UpdateKind::Rebuild);
    assert!((update.state.k / k_before - 2.0).abs() < 1e-12);
    assert_eq!(update.readouts.width, "Wide (2×W_min)");
    assert_eq!(update.readouts.aspect_ratio, "1");
    assert_eq!(update.series.len(), 5);
}

#[test]
fn test_scenario_vds_sweep_leaves_curve_alone() {
    let mut s = session_at(1.8, 0.0, ChannelLength::Short);
    let curve = s.plots().output_curve.clone();

    for i in 0..=30 {
        let vds = i as f64 / 10.0;
        let update = s.handle(Event::Vds(vds));
        assert_eq!(update.kind, UpdateKind::BiasMarker);
        assert!(update.series(SeriesId::OutputCurve).is_none());
        assert_eq!(s.plots().output_curve, curve);

        let marker = s.plots().vds_marker.point().unwrap();
        assert_eq!(marker.x, vds);
        assert_eq!(marker.y, s.state().drain_current * 1e3);
    }
}

#[test]
fn test_vgs_change_redraws_curve() {
    let mut s = session_at(1.0, 1.0, ChannelLength::Long);
    let before = s.plots().output_curve.clone();
    let update = s.handle(Event::Vgs(2.0));

    let curve = update.series(SeriesId::OutputCurve).unwrap();
    assert_ne!(*curve, before);
    assert_eq!(curve.len(), 301);

    let marker = update.series(SeriesId::VgsMarker).unwrap().point().unwrap();
    assert!((marker.x - 2.0).abs() <= SWEEP_STEP / 2.0);
}

#[test]
fn test_markers_follow_model_for_any_event_order() {
    let process = ProcessParams::default();
    let mut s = session_at(1.5, 1.0, ChannelLength::Long);
    let events = [
        Event::Vgs(0.7),
        Event::Vds(2.4),
        Event::Length(ChannelLength::Short),
        Event::Vgs(2.93),
        Event::Width(ChannelWidth::Wide),
        Event::Vds(0.05),
        Event::Length(ChannelLength::Long),
    ];

    for event in events {
        s.handle(event);
        let p = *s.params();
        let k = process.gain_factor(p.width, p.length);
        let lambda = process.lambda_for(p.length);
        let id = mosview::devices::drain_current(p.vgs, p.vds, p.vth, k, lambda);

        let marker = s.plots().vds_marker.point().unwrap();
        assert_eq!(marker.x, p.vds, "after {event}");
        assert_eq!(marker.y, id * 1e3, "after {event}");
        assert_eq!(s.state().region, mosview::devices::region(p.vgs, p.vds, p.vth));
    }
}

#[test]
fn test_geometry_regenerated_on_every_event() {
    let mut s = session_at(2.0, 0.5, ChannelLength::Long);
    let linear = s.geometry().clone();
    let update = s.handle(Event::Vds(2.5));
    assert_ne!(update.geometry, linear);
    assert_eq!(*s.geometry(), update.geometry);
    assert_eq!(update.geometry.regions.len(), 6);
}

#[test]
fn test_markers_stay_on_chart_with_narrower_limits() {
    let config = SessionConfig {
        limits: BiasLimits {
            vgs_max: 2.5,
            vds_max: 2.0,
        },
        ..Default::default()
    };
    let mut s = Session::new(config).unwrap();
    let x_max = ChartId::IdVds.spec().x.max;

    let update = s.handle(Event::Vgs(2.9));
    assert_eq!(update.params.vgs, 2.5);
    assert_eq!(update.readouts.vgs, "2.5 V");
    let marker = update.series(SeriesId::VgsMarker).unwrap().point().unwrap();
    assert_eq!(marker.x, 2.5);
    assert_eq!(marker.y, update.state.saturation_current * 1e3);

    let update = s.handle(Event::Vds(4.5));
    let marker = update.series(SeriesId::VdsMarker).unwrap().point().unwrap();
    assert_eq!(marker.x, 2.0);
    assert!(marker.x <= x_max);
}

#[test]
fn test_limits_beyond_plot_range_rejected() {
    let config = SessionConfig {
        limits: BiasLimits {
            vgs_max: 5.0,
            vds_max: 5.0,
        },
        ..Default::default()
    };
    assert!(Session::new(config).is_err());
}
