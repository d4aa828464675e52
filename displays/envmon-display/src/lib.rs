//! Display abstraction for envmon
//!
//! This crate provides:
//! - `Renderer` trait implemented by the board's screen driver
//! - `RenderDescriptor`, the per-tick description of the main screen
//!   (background color, eCO2 bar graph, brightness)
//! - `Header`, the date/time and numeric readout block
//! - `Rgb` color type with RGB565 conversion
//!
//! # Architecture
//!
//! The monitor core decides *what* is on screen; it never touches pixels.
//! A renderer receives a descriptor once per sampling tick and owns all
//! layout, fonts and blitting.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod color;
pub mod descriptor;

// Re-export key types
pub use backend::{RenderError, Renderer};
pub use color::Rgb;
pub use descriptor::{
    Bar, BarBand, Header, Readouts, RenderDescriptor, DATE_LEN, GRAPH_BARS, MAX_BAR_HEIGHT,
    MIN_BAR_HEIGHT, TIME_LEN, WEEKDAY_LEN,
};
