//! Render descriptor compositor

use envmon_display::{Bar, RenderDescriptor};

use crate::comfort::{ComfortBand, ComfortClassifier};
use crate::config::Settings;
use crate::history::Eco2History;
use crate::thresholds::bar_height;
use crate::traits::SensorSample;

/// Builds one [`RenderDescriptor`] per tick
///
/// Owns the comfort classifier and the eCO2 history so the screen state is
/// derived from a single place.
#[derive(Debug, Clone, Default)]
pub struct DisplayCompositor {
    classifier: ComfortClassifier,
    history: Eco2History,
    /// Quiet mode of the previous frame, `None` before the first frame
    last_quiet: Option<bool>,
}

impl DisplayCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose the screen for a new sample
    ///
    /// Pushes the eCO2 reading into the history. In quiet mode the
    /// classifier is not consulted and the neutral color is used.
    ///
    /// The background is cleared on the first frame, on a quiet mode
    /// switch, on a comfort band change and whenever the history rises.
    pub fn compose(&mut self, sample: &SensorSample, settings: Settings) -> RenderDescriptor {
        let quiet = settings.quiet_mode();
        let mode_switched = self.last_quiet != Some(quiet);
        self.last_quiet = Some(quiet);

        let (background, band_changed) = if quiet {
            (ComfortBand::Comfort.color(), false)
        } else {
            let update = self
                .classifier
                .classify(sample.temperature_c, sample.humidity_pct);
            (update.band.color(), update.changed)
        };

        self.history.push(sample.eco2_ppm);
        let rising = self.history.is_rising();
        if rising {
            debug!("eCO2 history rising, repainting background");
        }

        let snapshot = self.history.snapshot();
        RenderDescriptor {
            background,
            clear_background: rising || mode_switched || band_changed,
            bars: core::array::from_fn(|i| Bar::new(bar_height(snapshot[i]))),
            live_bar: Bar::new(bar_height(sample.eco2_ppm)),
            brightness: settings.brightness(),
        }
    }

    pub fn classifier(&self) -> &ComfortClassifier {
        &self.classifier
    }

    pub fn history(&self) -> &Eco2History {
        &self.history
    }
}
