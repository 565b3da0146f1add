//! Synchronization controller.
//!
//! A [`Session`] is the single writer of the committed model state. Each
//! event is handled to completion: the new snapshot is evaluated once, every
//! dependent output is computed from that evaluation, and only then is the
//! result swapped in. Which outputs are recomputed depends on the event:
//!
//! | event          | geometry | base curves | output curve | V_GS marker | V_DS marker |
//! |----------------|----------|-------------|--------------|-------------|-------------|
//! | V_DS change    | yes      |             |              |             | yes         |
//! | V_GS change    | yes      |             | yes          | yes         | yes         |
//! | length / width | yes      | yes         | yes          | yes         | yes         |
//!
//! A V_DS change never alters the shape of the output curve, only where the
//! marker sits on it.

use mosview_devices::{DerivedElectricalState, DeviceParameters};
use mosview_geometry::{GeometryInput, GeometrySpec, map_cross_section};
use mosview_plot::{
    ChartId, ChartSpec, CurveSeries, PlotData, Sweep, output_curve, vds_marker, vgs_marker,
};
use serde::Serialize;

use crate::config::SessionConfig;
use crate::error::Result;
use crate::event::Event;
use crate::readout::Readouts;

/// Which recomputation path an event took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateKind {
    /// V_DS changed: geometry and the V_DS marker.
    BiasMarker,
    /// V_GS changed: geometry, output curve and both markers.
    BiasFull,
    /// Length or width changed: everything.
    Rebuild,
}

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Update {
    pub event: Event,
    pub kind: UpdateKind,
    pub params: DeviceParameters,
    pub state: DerivedElectricalState,
    /// Full cross-section for the new bias point.
    pub geometry: GeometrySpec,
    pub readouts: Readouts,
    /// Series that were replaced; the others are unchanged.
    pub series: Vec<CurveSeries>,
}

impl Update {
    /// The replaced series with the given id, if any.
    pub fn series(&self, id: mosview_plot::SeriesId) -> Option<&CurveSeries> {
        self.series.iter().find(|s| s.id == id)
    }
}

/// Snapshot of everything currently committed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub params: DeviceParameters,
    pub state: DerivedElectricalState,
    pub geometry: GeometrySpec,
    pub readouts: Readouts,
    pub charts: [ChartSpec; 2],
    pub plots: PlotData,
}

/// Interactive model session.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    sweep: Sweep,
    params: DeviceParameters,
    state: DerivedElectricalState,
    geometry: GeometrySpec,
    plots: PlotData,
}

impl Session {
    /// Validate the configuration and build the initial state.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;

        for id in config.layout.missing_regions() {
            log::warn!("Cross-section layout has no box for {id}; region will not be drawn");
        }

        let initial = config.initial;
        let params = DeviceParameters::new(
            config.limits.clamp_vgs(initial.vgs),
            config.limits.clamp_vds(initial.vds),
            config.process.vth,
            initial.length,
            initial.width,
        );
        let state = DerivedElectricalState::evaluate(&params, &config.process);
        let sweep = Sweep::voltage_axis();
        let plots = PlotData::generate(&sweep, &params, &state);

        let mut session = Self {
            config,
            sweep,
            params,
            state,
            geometry: GeometrySpec::default(),
            plots,
        };
        session.geometry = session.map_geometry(&params);
        Ok(session)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn params(&self) -> &DeviceParameters {
        &self.params
    }

    pub fn state(&self) -> &DerivedElectricalState {
        &self.state
    }

    pub fn geometry(&self) -> &GeometrySpec {
        &self.geometry
    }

    pub fn plots(&self) -> &PlotData {
        &self.plots
    }

    pub fn readouts(&self) -> Readouts {
        Readouts::new(&self.params, &self.state)
    }

    /// Everything currently committed, for a full redraw.
    pub fn frame(&self) -> Frame {
        Frame {
            params: self.params,
            state: self.state,
            geometry: self.geometry.clone(),
            readouts: self.readouts(),
            charts: [ChartId::IdVgs.spec(), ChartId::IdVds.spec()],
            plots: self.plots.clone(),
        }
    }

    /// Apply one input event and return what changed.
    pub fn handle(&mut self, event: Event) -> Update {
        let params = self.next_params(event);
        let state = DerivedElectricalState::evaluate(&params, &self.config.process);
        let geometry = self.map_geometry(&params);
        let (vgs, vds, vth) = (params.vgs, params.vds, params.vth);

        let (kind, series) = match event {
            Event::Vds(_) => {
                log::trace!("vds -> {vds}: moving V_DS marker");
                let marker = vds_marker(vgs, vds, vth, state.k, state.lambda);
                (UpdateKind::BiasMarker, vec![marker])
            }
            Event::Vgs(_) => {
                log::trace!("vgs -> {vgs}: regenerating output curve");
                let series = vec![
                    vgs_marker(vgs, vth, state.k),
                    output_curve(&self.sweep, vgs, vth, state.k, state.lambda),
                    vds_marker(vgs, vds, vth, state.k, state.lambda),
                ];
                (UpdateKind::BiasFull, series)
            }
            Event::Length(_) | Event::Width(_) => {
                log::info!(
                    "Channel geometry now {} / {}: K = {:.3e} A/V^2, lambda = {} 1/V",
                    params.length, params.width, state.k, state.lambda
                );
                let plots = PlotData::generate(&self.sweep, &params, &state);
                (UpdateKind::Rebuild, plots.into_series())
            }
        };

        self.params = params;
        self.state = state;
        self.geometry = geometry.clone();
        for s in &series {
            self.plots.replace(s.clone());
        }

        Update {
            event,
            kind,
            params,
            state,
            geometry,
            readouts: self.readouts(),
            series,
        }
    }

    fn next_params(&self, event: Event) -> DeviceParameters {
        let limits = &self.config.limits;
        match event {
            Event::Vgs(v) => {
                let clamped = limits.clamp_vgs(v);
                if clamped != v {
                    log::debug!("vgs {v} V clamped to {clamped} V");
                }
                self.params.with_vgs(clamped)
            }
            Event::Vds(v) => {
                let clamped = limits.clamp_vds(v);
                if clamped != v {
                    log::debug!("vds {v} V clamped to {clamped} V");
                }
                self.params.with_vds(clamped)
            }
            Event::Length(l) => self.params.with_length(l),
            Event::Width(w) => self.params.with_width(w),
        }
    }

    fn map_geometry(&self, params: &DeviceParameters) -> GeometrySpec {
        let input = GeometryInput {
            vgs: params.vgs,
            vds: params.vds,
            vth: params.vth,
            length_factor: self.config.length_factor(params.length),
        };
        map_cross_section(&input, &self.config.layout, &self.config.limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosview_devices::{ChannelLength, OperatingRegion};
    use mosview_plot::SeriesId;

    fn session() -> Session {
        Session::new(SessionConfig::default()).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let s = session();
        assert_eq!(s.params().vgs, 1.5);
        assert_eq!(s.params().vds, 1.0);
        assert_eq!(s.state().region, OperatingRegion::Saturation);
        assert_eq!(s.geometry().regions.len(), 6);
        assert_eq!(s.plots().output_curve.len(), 301);
    }

    #[test]
    fn test_vds_event_replaces_only_marker() {
        let mut s = session();
        let update = s.handle(Event::Vds(0.4));
        assert_eq!(update.kind, UpdateKind::BiasMarker);
        assert_eq!(update.series.len(), 1);
        assert_eq!(update.series[0].id, SeriesId::VdsMarker);
    }

    #[test]
    fn test_vgs_event_replaces_curve_and_markers() {
        let mut s = session();
        let update = s.handle(Event::Vgs(2.0));
        assert_eq!(update.kind, UpdateKind::BiasFull);
        let ids: Vec<_> = update.series.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![SeriesId::VgsMarker, SeriesId::OutputCurve, SeriesId::VdsMarker]
        );
    }

    #[test]
    fn test_selector_event_rebuilds() {
        let mut s = session();
        let update = s.handle(Event::Length(ChannelLength::Short));
        assert_eq!(update.kind, UpdateKind::Rebuild);
        assert_eq!(update.series.len(), 5);
        assert_eq!(s.state().lambda, 0.1);
    }

    #[test]
    fn test_voltage_is_clamped() {
        let mut s = session();
        s.handle(Event::Vgs(5.0));
        s.handle(Event::Vds(-1.0));
        assert_eq!(s.params().vgs, 3.0);
        assert_eq!(s.params().vds, 0.0);
    }

    #[test]
    fn test_frame_matches_committed_state() {
        let mut s = session();
        let update = s.handle(Event::Vgs(2.5));
        let frame = s.frame();
        assert_eq!(frame.geometry, update.geometry);
        assert_eq!(frame.readouts, update.readouts);
        assert_eq!(frame.plots.output_curve, *update.series(SeriesId::OutputCurve).unwrap());
        assert_eq!(frame.charts[0].id, ChartId::IdVgs);
    }
}
