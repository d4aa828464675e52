//! eCO2 alerting
//!
//! The alert engine is a small explicit state machine. Its input is an
//! already classified [`AlertLevel`]; see
//! [`Eco2Thresholds`](crate::thresholds::Eco2Thresholds) for the mapping
//! from raw readings.

pub mod engine;
pub mod level;

pub use engine::{AlertAction, AlertEngine, IndicatorSetting};
pub use level::{AlertLevel, AlertTone};
