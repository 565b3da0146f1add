//! Process constants, layout selectors and per-evaluation device parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default threshold voltage (V).
pub const VTH_DEFAULT: f64 = 0.5;
/// Upper end of the gate-source bias range (V).
pub const VGS_MAX: f64 = 3.0;
/// Upper end of the drain-source bias range (V).
pub const VDS_MAX: f64 = 3.0;

/// Drawn channel length selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelLength {
    /// Minimum length (L_min).
    Short,
    /// Twice the minimum length.
    #[default]
    Long,
}

impl ChannelLength {
    /// Length in units of L_min.
    pub fn relative_size(self) -> u32 {
        match self {
            ChannelLength::Short => 1,
            ChannelLength::Long => 2,
        }
    }

    /// Position of the continuous channel-length control for this selector.
    ///
    /// 0 is the shortest drawable channel, 1 the longest.
    pub fn geometry_factor(self) -> f64 {
        match self {
            ChannelLength::Short => 0.2,
            ChannelLength::Long => 0.9,
        }
    }

    /// The other setting.
    pub fn toggled(self) -> Self {
        match self {
            ChannelLength::Short => ChannelLength::Long,
            ChannelLength::Long => ChannelLength::Short,
        }
    }

    /// Readout label.
    pub fn label(self) -> &'static str {
        match self {
            ChannelLength::Short => "Short (L_min)",
            ChannelLength::Long => "Long (2×L_min)",
        }
    }
}

impl fmt::Display for ChannelLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelLength::Short => f.write_str("short"),
            ChannelLength::Long => f.write_str("long"),
        }
    }
}

impl FromStr for ChannelLength {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(ChannelLength::Short),
            "long" => Ok(ChannelLength::Long),
            _ => Err(Error::InvalidSelector {
                kind: "length",
                value: s.to_string(),
                expected: "short or long",
            }),
        }
    }
}

/// Drawn channel width selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelWidth {
    /// Minimum width (W_min).
    #[default]
    Narrow,
    /// Twice the minimum width.
    Wide,
}

impl ChannelWidth {
    /// Width in units of W_min.
    pub fn relative_size(self) -> u32 {
        match self {
            ChannelWidth::Narrow => 1,
            ChannelWidth::Wide => 2,
        }
    }

    /// The other setting.
    pub fn toggled(self) -> Self {
        match self {
            ChannelWidth::Narrow => ChannelWidth::Wide,
            ChannelWidth::Wide => ChannelWidth::Narrow,
        }
    }

    /// Readout label.
    pub fn label(self) -> &'static str {
        match self {
            ChannelWidth::Narrow => "Narrow (W_min)",
            ChannelWidth::Wide => "Wide (2×W_min)",
        }
    }
}

impl fmt::Display for ChannelWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelWidth::Narrow => f.write_str("narrow"),
            ChannelWidth::Wide => f.write_str("wide"),
        }
    }
}

impl FromStr for ChannelWidth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "narrow" => Ok(ChannelWidth::Narrow),
            "wide" => Ok(ChannelWidth::Wide),
            _ => Err(Error::InvalidSelector {
                kind: "width",
                value: s.to_string(),
                expected: "narrow or wide",
            }),
        }
    }
}

/// W/L of the selected geometry relative to the minimum device, as a reduced fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AspectRatio {
    pub num: u32,
    pub den: u32,
}

impl AspectRatio {
    /// Reduced W/L for a width/length selector pair.
    pub fn from_selectors(width: ChannelWidth, length: ChannelLength) -> Self {
        Self::reduced(width.relative_size(), length.relative_size())
    }

    /// Build `num/den` reduced to lowest terms. `den` must be non-zero.
    pub fn reduced(num: u32, den: u32) -> Self {
        let g = gcd(num, den).max(1);
        Self {
            num: num / g,
            den: den / g,
        }
    }

    /// Value as a float.
    pub fn value(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.num, self.den) {
            (n, 1) => write!(f, "{n}"),
            (1, 2) => f.write_str("½"),
            (1, 4) => f.write_str("¼"),
            (n, d) => write!(f, "{n}/{d}"),
        }
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Fixed process parameters of the modelled technology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessParams {
    /// Threshold voltage (V).
    pub vth: f64,
    /// Electron mobility (m²/V·s).
    pub mobility: f64,
    /// Gate oxide capacitance per unit area (F/m²).
    pub oxide_capacitance: f64,
    /// W/L of the minimum (narrow, short) device.
    pub min_aspect_ratio: f64,
    /// Channel-length modulation for the long channel (1/V).
    pub lambda_long: f64,
    /// Channel-length modulation for the short channel (1/V).
    pub lambda_short: f64,
}

impl Default for ProcessParams {
    fn default() -> Self {
        Self {
            vth: VTH_DEFAULT,
            mobility: 50e-4,
            oxide_capacitance: 8e-3,
            min_aspect_ratio: 10.0,
            lambda_long: 0.01,
            lambda_short: 0.1,
        }
    }
}

impl ProcessParams {
    /// Absolute W/L for a selector pair.
    pub fn aspect_ratio(&self, width: ChannelWidth, length: ChannelLength) -> f64 {
        self.min_aspect_ratio * AspectRatio::from_selectors(width, length).value()
    }

    /// Gain factor K = 0.5 * mu * Cox * (W/L), in A/V².
    pub fn gain_factor(&self, width: ChannelWidth, length: ChannelLength) -> f64 {
        0.5 * self.mobility * self.oxide_capacitance * self.aspect_ratio(width, length)
    }

    /// Channel-length modulation coefficient for a length selector.
    ///
    /// Two-point table rather than a function of L.
    pub fn lambda_for(&self, length: ChannelLength) -> f64 {
        match length {
            ChannelLength::Long => self.lambda_long,
            ChannelLength::Short => self.lambda_short,
        }
    }

    /// Check that the constants describe a usable device within `limits`.
    pub fn validate(&self, limits: &BiasLimits) -> Result<()> {
        positive("mobility", self.mobility)?;
        positive("oxide_capacitance", self.oxide_capacitance)?;
        positive("min_aspect_ratio", self.min_aspect_ratio)?;
        non_negative("lambda_long", self.lambda_long)?;
        non_negative("lambda_short", self.lambda_short)?;
        if !self.vth.is_finite() || self.vth <= 0.0 || self.vth >= limits.vgs_max {
            return Err(Error::InvalidParameter {
                name: "vth",
                value: self.vth,
                reason: "must lie strictly inside the gate bias range",
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            value,
            reason: "must be finite and positive",
        })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            value,
            reason: "must be finite and non-negative",
        })
    }
}

/// Upper ends of the two bias controls. Both ranges start at 0 V.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiasLimits {
    pub vgs_max: f64,
    pub vds_max: f64,
}

impl Default for BiasLimits {
    fn default() -> Self {
        Self {
            vgs_max: VGS_MAX,
            vds_max: VDS_MAX,
        }
    }
}

impl BiasLimits {
    /// Clamp a gate-source voltage into `[0, vgs_max]`. NaN maps to 0.
    pub fn clamp_vgs(&self, vgs: f64) -> f64 {
        clamp_range(vgs, self.vgs_max)
    }

    /// Clamp a drain-source voltage into `[0, vds_max]`. NaN maps to 0.
    pub fn clamp_vds(&self, vds: f64) -> f64 {
        clamp_range(vds, self.vds_max)
    }

    /// Both limits must be positive and no larger than the plotted voltage range.
    pub fn validate(&self) -> Result<()> {
        positive("vgs_max", self.vgs_max)?;
        positive("vds_max", self.vds_max)?;
        within_range("vgs_max", self.vgs_max, VGS_MAX)?;
        within_range("vds_max", self.vds_max, VDS_MAX)
    }
}

fn within_range(name: &'static str, value: f64, max: f64) -> Result<()> {
    if value <= max {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            value,
            reason: "must not exceed the 3 V plot range",
        })
    }
}

fn clamp_range(v: f64, max: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, max) }
}

/// Snapshot of the inputs for one model evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeviceParameters {
    /// Gate-source voltage (V).
    pub vgs: f64,
    /// Drain-source voltage (V).
    pub vds: f64,
    /// Threshold voltage (V).
    pub vth: f64,
    pub length: ChannelLength,
    pub width: ChannelWidth,
}

impl DeviceParameters {
    pub fn new(vgs: f64, vds: f64, vth: f64, length: ChannelLength, width: ChannelWidth) -> Self {
        Self {
            vgs,
            vds,
            vth,
            length,
            width,
        }
    }

    /// Copy with a different gate-source voltage.
    pub fn with_vgs(self, vgs: f64) -> Self {
        Self { vgs, ..self }
    }

    /// Copy with a different drain-source voltage.
    pub fn with_vds(self, vds: f64) -> Self {
        Self { vds, ..self }
    }

    /// Copy with a different length selector.
    pub fn with_length(self, length: ChannelLength) -> Self {
        Self { length, ..self }
    }

    /// Copy with a different width selector.
    pub fn with_width(self, width: ChannelWidth) -> Self {
        Self { width, ..self }
    }

    /// Reduced W/L of the selectors.
    pub fn aspect_ratio(&self) -> AspectRatio {
        AspectRatio::from_selectors(self.width, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gain_factor_long_narrow() {
        let p = ProcessParams::default();
        // W/L = 10 * 1/2 = 5
        assert!((p.aspect_ratio(ChannelWidth::Narrow, ChannelLength::Long) - 5.0).abs() < 1e-12);
        let k = p.gain_factor(ChannelWidth::Narrow, ChannelLength::Long);
        assert!((k - 0.5 * 50e-4 * 8e-3 * 5.0).abs() < 1e-18);
        assert!(k > 0.0);
    }

    #[test]
    fn test_gain_factor_scales_with_ratio() {
        let p = ProcessParams::default();
        let base = p.gain_factor(ChannelWidth::Narrow, ChannelLength::Short);
        let wide = p.gain_factor(ChannelWidth::Wide, ChannelLength::Short);
        let long = p.gain_factor(ChannelWidth::Narrow, ChannelLength::Long);
        assert!((wide / base - 2.0).abs() < 1e-12);
        assert!((long / base - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_lambda_table() {
        let p = ProcessParams::default();
        assert_eq!(p.lambda_for(ChannelLength::Long), 0.01);
        assert_eq!(p.lambda_for(ChannelLength::Short), 0.1);
    }

    #[test]
    fn test_aspect_ratio_display() {
        let cases = [
            (ChannelWidth::Narrow, ChannelLength::Short, "1"),
            (ChannelWidth::Narrow, ChannelLength::Long, "½"),
            (ChannelWidth::Wide, ChannelLength::Short, "2"),
            (ChannelWidth::Wide, ChannelLength::Long, "1"),
        ];
        for (w, l, text) in cases {
            assert_eq!(AspectRatio::from_selectors(w, l).to_string(), text);
        }
        assert_eq!(AspectRatio::reduced(2, 8).to_string(), "¼");
        assert_eq!(AspectRatio::reduced(6, 9).to_string(), "2/3");
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!("Short".parse::<ChannelLength>(), Ok(ChannelLength::Short));
        assert_eq!(" long ".parse::<ChannelLength>(), Ok(ChannelLength::Long));
        assert_eq!("WIDE".parse::<ChannelWidth>(), Ok(ChannelWidth::Wide));
        assert!(matches!(
            "medium".parse::<ChannelWidth>(),
            Err(Error::InvalidSelector { kind: "width", .. })
        ));
    }

    #[test]
    fn test_selector_toggle() {
        assert_eq!(ChannelLength::Long.toggled(), ChannelLength::Short);
        assert_eq!(ChannelWidth::Wide.toggled().toggled(), ChannelWidth::Wide);
    }

    #[test]
    fn test_geometry_factor_in_unit_range() {
        for l in [ChannelLength::Short, ChannelLength::Long] {
            let f = l.geometry_factor();
            assert!((0.0..=1.0).contains(&f));
        }
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let limits = BiasLimits::default();
        assert!(ProcessParams::default().validate(&limits).is_ok());

        let p = ProcessParams {
            vth: 3.5,
            ..Default::default()
        };
        assert!(matches!(
            p.validate(&limits),
            Err(Error::InvalidParameter { name: "vth", .. })
        ));

        let p = ProcessParams {
            lambda_short: -0.1,
            ..Default::default()
        };
        assert!(p.validate(&limits).is_err());
    }

    #[test]
    fn test_bias_limits_capped_at_plot_range() {
        assert!(BiasLimits::default().validate().is_ok());

        let limits = BiasLimits {
            vgs_max: 2.0,
            vds_max: 1.5,
        };
        assert!(limits.validate().is_ok());

        let limits = BiasLimits {
            vgs_max: 5.0,
            ..Default::default()
        };
        assert!(matches!(
            limits.validate(),
            Err(Error::InvalidParameter { name: "vgs_max", .. })
        ));

        let limits = BiasLimits {
            vds_max: 3.5,
            ..Default::default()
        };
        assert!(matches!(
            limits.validate(),
            Err(Error::InvalidParameter { name: "vds_max", .. })
        ));
    }

    #[test]
    fn test_bias_clamp() {
        let limits = BiasLimits::default();
        assert_eq!(limits.clamp_vgs(-1.0), 0.0);
        assert_eq!(limits.clamp_vgs(4.0), 3.0);
        assert_eq!(limits.clamp_vds(f64::NAN), 0.0);
        assert_eq!(limits.clamp_vds(1.2), 1.2);
    }
}
