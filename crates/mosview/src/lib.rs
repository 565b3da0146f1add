//! mosview: an interactive MOSFET cross-section with live I-V curves.
//!
//! [`Session`] owns the bias point and the channel selectors. Every input
//! [`Event`] is evaluated once by the device model and the result is pushed
//! to the geometry mapper and the plot generator, so the cross-section, both
//! charts and the readouts always describe the same operating point.
//!
//! ```
//! use mosview::{Event, Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::default()).unwrap();
//! let update = session.handle(Event::Vds(0.3));
//! assert_eq!(update.readouts.vds, "0.3 V");
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod readout;
pub mod session;

pub use config::{InitialBias, SessionConfig};
pub use error::{Error, Result};
pub use event::Event;
pub use readout::Readouts;
pub use session::{Frame, Session, Update, UpdateKind};

pub use mosview_devices as devices;
pub use mosview_geometry as geometry;
pub use mosview_plot as plot;
