//! Session configuration.
//!
//! Every field has a default, so a JSON file only needs the values it
//! changes:
//!
//! ```json
//! {
//!   "process": { "vth": 0.7 },
//!   "initial": { "vgs": 2.0, "length": "short" }
//! }
//! ```

use std::path::Path;

use mosview_devices::{BiasLimits, ChannelLength, ChannelWidth, ProcessParams};
use mosview_geometry::CrossSectionLayout;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Bias point and selectors a session starts from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialBias {
    pub vgs: f64,
    pub vds: f64,
    pub length: ChannelLength,
    pub width: ChannelWidth,
}

impl Default for InitialBias {
    fn default() -> Self {
        Self {
            vgs: 1.5,
            vds: 1.0,
            length: ChannelLength::Long,
            width: ChannelWidth::Narrow,
        }
    }
}

/// Everything a [`Session`](crate::Session) needs besides input events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Process constants of the modelled device.
    pub process: ProcessParams,
    /// Bias control ranges.
    pub limits: BiasLimits,
    /// Channel-length control position for the short selector.
    pub short_length_factor: f64,
    /// Channel-length control position for the long selector.
    pub long_length_factor: f64,
    /// Resting boxes of the cross-section regions.
    pub layout: CrossSectionLayout,
    /// Starting bias point.
    pub initial: InitialBias,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            process: ProcessParams::default(),
            limits: BiasLimits::default(),
            short_length_factor: ChannelLength::Short.geometry_factor(),
            long_length_factor: ChannelLength::Long.geometry_factor(),
            layout: CrossSectionLayout::default(),
            initial: InitialBias::default(),
        }
    }
}

impl SessionConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Channel-length control position for a selector.
    pub fn length_factor(&self, length: ChannelLength) -> f64 {
        match length {
            ChannelLength::Short => self.short_length_factor,
            ChannelLength::Long => self.long_length_factor,
        }
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<()> {
        self.limits.validate()?;
        self.process.validate(&self.limits)?;

        for (name, value) in [
            ("short_length_factor", self.short_length_factor),
            ("long_length_factor", self.long_length_factor),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfig(format!(
                    "{name} = {value} is outside [0, 1]"
                )));
            }
        }
        if self.short_length_factor >= self.long_length_factor {
            return Err(Error::InvalidConfig(format!(
                "short_length_factor ({}) must be below long_length_factor ({})",
                self.short_length_factor, self.long_length_factor
            )));
        }

        let InitialBias { vgs, vds, .. } = self.initial;
        if !vgs.is_finite() || !vds.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "initial bias must be finite (vgs = {vgs}, vds = {vds})"
            )));
        }
        Ok(())
    }
}
