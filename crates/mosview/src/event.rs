//! Input events.

use std::fmt;
use std::str::FromStr;

use mosview_devices::{ChannelLength, ChannelWidth};
use serde::Serialize;

use crate::error::Error;

/// One change of a control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "control", content = "value", rename_all = "snake_case")]
pub enum Event {
    /// Gate-source slider moved (V).
    Vgs(f64),
    /// Drain-source slider moved (V).
    Vds(f64),
    /// Length switch toggled.
    Length(ChannelLength),
    /// Width switch toggled.
    Width(ChannelWidth),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Vgs(v) => write!(f, "vgs {v}"),
            Event::Vds(v) => write!(f, "vds {v}"),
            Event::Length(l) => write!(f, "length {l}"),
            Event::Width(w) => write!(f, "width {w}"),
        }
    }
}

impl FromStr for Event {
    type Err = Error;

    /// Parse `vgs <volts>`, `vds <volts>`, `length short|long` or `width narrow|wide`.
    fn from_str(line: &str) -> Result<Self, Error> {
        let invalid = |reason: String| Error::InvalidEvent {
            line: line.to_string(),
            reason,
        };

        let mut parts = line.split_whitespace();
        let (Some(control), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid("expected '<control> <value>'".to_string()));
        };

        let volts = |value: &str| -> Result<f64, Error> {
            let v: f64 = value
                .parse()
                .map_err(|e| invalid(format!("bad voltage '{value}': {e}")))?;
            if v.is_finite() {
                Ok(v)
            } else {
                Err(invalid(format!("voltage must be finite, got {value}")))
            }
        };

        match control.to_ascii_lowercase().as_str() {
            "vgs" => Ok(Event::Vgs(volts(value)?)),
            "vds" => Ok(Event::Vds(volts(value)?)),
            "length" => value
                .parse()
                .map(Event::Length)
                .map_err(|e: mosview_devices::Error| invalid(e.to_string())),
            "width" => value
                .parse()
                .map(Event::Width)
                .map_err(|e: mosview_devices::Error| invalid(e.to_string())),
            other => Err(invalid(format!("unknown control '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_events() {
        assert_eq!("vgs 1.2".parse::<Event>().unwrap(), Event::Vgs(1.2));
        assert_eq!("VDS  0".parse::<Event>().unwrap(), Event::Vds(0.0));
        assert_eq!(
            "length short".parse::<Event>().unwrap(),
            Event::Length(ChannelLength::Short)
        );
        assert_eq!(
            "width Wide".parse::<Event>().unwrap(),
            Event::Width(ChannelWidth::Wide)
        );
    }

    #[test]
    fn test_parse_errors() {
        for line in ["", "vgs", "vgs 1 2", "vgs abc", "vds inf", "gate 1.0", "length medium"] {
            let err = line.parse::<Event>().unwrap_err();
            assert!(matches!(err, Error::InvalidEvent { .. }), "{line}: {err}");
        }
    }

    #[test]
    fn test_display_round_trip() {
        let event = Event::Width(ChannelWidth::Narrow);
        assert_eq!(event.to_string(), "width narrow");
        assert_eq!(event.to_string().parse::<Event>().unwrap(), event);
    }
}
