//! Renderer trait
//!
//! Defines the interface between the monitor core and the screen driver.

use crate::descriptor::{Header, RenderDescriptor};

/// Renderer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// Communication error with display
    Communication,
    /// Display not initialized
    NotReady,
}

/// Renderer trait
///
/// Provides a hardware-agnostic interface for drawing the monitor screen.
/// Implementations handle the specifics of the panel, frame buffer and
/// backlight.
pub trait Renderer {
    /// Draw one frame
    ///
    /// When `descriptor.clear_background` is set the whole surface must be
    /// filled with `descriptor.background` before the bars are drawn.
    fn render(&mut self, header: &Header, descriptor: &RenderDescriptor)
        -> Result<(), RenderError>;

    /// Set the backlight brightness (0-255)
    fn set_brightness(&mut self, brightness: u8) -> Result<(), RenderError>;
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn render(
        &mut self,
        header: &Header,
        descriptor: &RenderDescriptor,
    ) -> Result<(), RenderError> {
        (**self).render(header, descriptor)
    }

    fn set_brightness(&mut self, brightness: u8) -> Result<(), RenderError> {
        (**self).set_brightness(brightness)
    }
}
