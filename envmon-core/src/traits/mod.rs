//! Collaborator traits
//!
//! These traits define the interface between the monitor logic and the
//! board's sensor, LEDs, speaker, clock and measurement log. The screen
//! driver trait lives in `envmon-display` and storage in `envmon-hal`;
//! both are re-exported here.

pub mod clock;
pub mod indicator;
pub mod recorder;
pub mod sensor;

pub use clock::{Clock, DateTime, Weekday};
pub use envmon_display::{RenderError, Renderer};
pub use envmon_hal::{Storage, StorageError, StorageKey};
pub use indicator::{Indicator, IndicatorError};
pub use recorder::{MeasurementRecorder, RecordError};
pub use sensor::{EnvSensor, SensorError, SensorSample};
