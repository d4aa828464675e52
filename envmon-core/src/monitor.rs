//! Tick orchestration
//!
//! [`Monitor`] owns every stateful component and drives the board's
//! collaborators once per sampling tick:
//!
//! ```text
//! sensor ──► thresholds ──► AlertEngine ──► Indicator
//!    │
//!    ├─────► DisplayCompositor ─┐
//!    ├─────► header::compose ───┴─► Renderer
//!    └─────► MeasurementRecord ────► MeasurementRecorder
//! ```
//!
//! A failed sensor read skips the tick. Output failures are logged and
//! reported, and never stop the remaining outputs.

use crate::alert::{AlertEngine, AlertLevel, AlertTone};
use crate::comfort::ComfortBand;
use crate::config::{ConfigError, ConfigStore, Settings};
use crate::display::DisplayCompositor;
use crate::header;
use crate::record::MeasurementRecord;
use crate::thresholds::Eco2Thresholds;
use crate::traits::{
    Clock, EnvSensor, Indicator, IndicatorError, MeasurementRecorder, RecordError, RenderError,
    Renderer, SensorError, Storage,
};

/// Button actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UserInput {
    /// Raise the backlight one level
    BrightnessUp,
    /// Lower the backlight one level
    BrightnessDown,
    /// Switch quiet mode on or off
    ToggleQuietMode,
}

/// Tick failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickError {
    /// No sample this tick; nothing was updated
    SensorUnavailable(SensorError),
}

impl From<SensorError> for TickError {
    fn from(e: SensorError) -> Self {
        TickError::SensorUnavailable(e)
    }
}

/// First error from each output during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputFaults {
    pub render: Option<RenderError>,
    pub indicator: Option<IndicatorError>,
    pub record: Option<RecordError>,
}

impl OutputFaults {
    /// True if every output succeeded
    pub fn is_empty(&self) -> bool {
        self.render.is_none() && self.indicator.is_none() && self.record.is_none()
    }
}

/// Summary of one completed tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// eCO2 alert level for this sample
    pub level: AlertLevel,
    /// Alert tone played this tick
    pub fired: Option<AlertTone>,
    /// Comfort band shown, `None` while quiet mode hides it
    pub band: Option<ComfortBand>,
    /// Whether the frame asked for a full background clear
    pub clear_background: bool,
    pub faults: OutputFaults,
}

/// The environment monitor
pub struct Monitor<S: Storage> {
    config: ConfigStore<S>,
    compositor: DisplayCompositor,
    alerts: AlertEngine,
    thresholds: Eco2Thresholds,
}

impl<S: Storage> Monitor<S> {
    /// Create the monitor and load persisted settings
    pub fn new(storage: S, thresholds: Eco2Thresholds) -> Self {
        let mut config = ConfigStore::new(storage);
        config.load();

        Self {
            config,
            compositor: DisplayCompositor::new(),
            alerts: AlertEngine::new(),
            thresholds,
        }
    }

    /// Apply a button action and persist the result
    ///
    /// The new setting takes effect on the next tick even if persisting it
    /// fails.
    pub fn handle_input(&mut self, input: UserInput) -> Result<(), ConfigError> {
        debug!("Input: {:?}", input);
        match input {
            UserInput::BrightnessUp => self.config.adjust_backlight(1),
            UserInput::BrightnessDown => self.config.adjust_backlight(-1),
            UserInput::ToggleQuietMode => self.config.toggle_quiet_mode(),
        }
    }

    /// Run one sampling tick
    pub fn tick<E, C, R, I, M>(
        &mut self,
        mut sensor: E,
        mut clock: C,
        mut renderer: R,
        mut indicator: I,
        mut recorder: M,
    ) -> Result<TickReport, TickError>
    where
        E: EnvSensor,
        C: Clock,
        R: Renderer,
        I: Indicator,
        M: MeasurementRecorder,
    {
        let sample = sensor.read().map_err(|e| {
            warn!("Sensor read failed: {:?}, skipping tick", e);
            TickError::from(e)
        })?;
        let now = clock.now();
        let settings = self.config.settings();
        let mut faults = OutputFaults::default();

        // Alerts
        let level = self.thresholds.level_for(sample.eco2_ppm);
        let action = self.alerts.update(level);
        let mut indicator_result = indicator.set(action.indicator.color, action.indicator.brightness);
        if let Some(tone) = action.fire {
            indicator_result = indicator_result.and(indicator.play(tone));
        }
        if let Err(e) = indicator_result {
            warn!("Indicator update failed: {:?}", e);
            faults.indicator = Some(e);
        }

        // Screen
        let descriptor = self.compositor.compose(&sample, settings);
        let header = header::compose(now, &sample);
        let render_result = renderer
            .set_brightness(descriptor.brightness)
            .and_then(|()| renderer.render(&header, &descriptor));
        if let Err(e) = render_result {
            warn!("Render failed: {:?}", e);
            faults.render = Some(e);
        }

        // Measurement log
        match MeasurementRecord::new(now, sample).line() {
            Some(line) => {
                if let Err(e) = recorder.append(&line) {
                    warn!("Measurement log append failed: {:?}", e);
                    faults.record = Some(e);
                }
            }
            None => warn!("Measurement record too long, not logged"),
        }

        Ok(TickReport {
            level,
            fired: action.fire,
            band: (!settings.quiet_mode()).then(|| self.compositor.classifier().current()),
            clear_background: descriptor.clear_background,
            faults,
        })
    }

    /// Current settings
    pub fn settings(&self) -> Settings {
        self.config.settings()
    }

    pub fn config(&self) -> &ConfigStore<S> {
        &self.config
    }

    pub fn compositor(&self) -> &DisplayCompositor {
        &self.compositor
    }

    pub fn alerts(&self) -> &AlertEngine {
        &self.alerts
    }

    pub fn thresholds(&self) -> Eco2Thresholds {
        self.thresholds
    }

    /// Consume the monitor and return the storage
    pub fn into_storage(self) -> S {
        self.config.into_storage()
    }
}
