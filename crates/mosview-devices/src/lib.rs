//! Device model for mosview.
//!
//! This crate provides the analytic long-channel MOSFET model behind the
//! cross-section and I-V plots:
//! - Operating region classification (cutoff, linear, saturation)
//! - Square-law drain current with channel-length modulation
//! - Process constants and the discrete length/width selectors
//! - Pre-calculated electrical state for one bias point

pub mod error;
pub mod mosfet;

pub use error::{Error, Result};
pub use mosfet::{
    AspectRatio, BiasLimits, ChannelLength, ChannelWidth, DerivedElectricalState,
    DeviceParameters, OperatingRegion, ProcessParams, drain_current, region, saturation_current,
};
