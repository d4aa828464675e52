//! Board-agnostic core logic for the envmon environment monitor
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (sensor, clock, indicator, measurement log)
//! - User settings and their persistence
//! - eCO2 history and bar graph mapping
//! - Comfort classification from temperature and humidity
//! - One-shot eCO2 alert state machine
//! - Per-tick screen composition
//! - The [`Monitor`] tying it all together

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// Must come first so the logging macros are visible to the other modules
mod fmt;

pub mod alert;
pub mod comfort;
pub mod config;
pub mod display;
pub mod header;
pub mod history;
pub mod monitor;
pub mod record;
pub mod thresholds;
pub mod traits;

pub use alert::{AlertAction, AlertEngine, AlertLevel, AlertTone, IndicatorSetting};
pub use comfort::{ComfortBand, ComfortClassifier};
pub use config::{ConfigError, ConfigStore, Settings};
pub use display::DisplayCompositor;
pub use history::Eco2History;
pub use monitor::{Monitor, OutputFaults, TickError, TickReport, UserInput};
pub use record::MeasurementRecord;
pub use thresholds::Eco2Thresholds;
