//! Screen state composition
//!
//! Decides what the main screen shows each tick. Drawing is left to the
//! [`Renderer`](envmon_display::Renderer) implementation.

pub mod compositor;

pub use compositor::DisplayCompositor;
