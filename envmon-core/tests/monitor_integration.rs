//! End-to-end ticks against recording fakes

use envmon_core::traits::{
    Clock, DateTime, EnvSensor, Indicator, IndicatorError, MeasurementRecorder, RecordError,
    RenderError, Renderer, SensorError, SensorSample, Weekday,
};
use envmon_core::{AlertTone, ComfortBand, Eco2Thresholds, Monitor, TickError, UserInput};
use envmon_display::{Header, RenderDescriptor, Rgb};
use envmon_hal::{RamStorage, Storage, StorageKey};

struct ScriptedSensor {
    samples: Vec<Result<SensorSample, SensorError>>,
}

impl EnvSensor for ScriptedSensor {
    fn read(&mut self) -> Result<SensorSample, SensorError> {
        self.samples.remove(0)
    }
}

struct FixedClock(Option<DateTime>);

impl Clock for FixedClock {
    fn now(&mut self) -> Option<DateTime> {
        self.0
    }
}

#[derive(Default)]
struct Screen {
    frames: Vec<(Header, RenderDescriptor)>,
    brightness: Vec<u8>,
}

impl Renderer for Screen {
    fn render(&mut self, header: &Header, descriptor: &RenderDescriptor) -> Result<(), RenderError> {
        self.frames.push((header.clone(), descriptor.clone()));
        Ok(())
    }

    fn set_brightness(&mut self, brightness: u8) -> Result<(), RenderError> {
        self.brightness.push(brightness);
        Ok(())
    }
}

#[derive(Default)]
struct Leds {
    settings: Vec<(Rgb, u8)>,
    tones: Vec<AlertTone>,
}

impl Indicator for Leds {
    fn set(&mut self, color: Rgb, brightness: u8) -> Result<(), IndicatorError> {
        self.settings.push((color, brightness));
        Ok(())
    }

    fn play(&mut self, tone: AlertTone) -> Result<(), IndicatorError> {
        self.tones.push(tone);
        Ok(())
    }
}

#[derive(Default)]
struct Log {
    lines: Vec<String>,
    full: bool,
}

impl MeasurementRecorder for Log {
    fn append(&mut self, line: &str) -> Result<(), RecordError> {
        if self.full {
            return Err(RecordError::Full);
        }
        self.lines.push(line.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct Board {
    screen: Screen,
    leds: Leds,
    log: Log,
}

fn sample(temperature_c: f32, humidity_pct: f32, eco2_ppm: u16) -> SensorSample {
    SensorSample {
        temperature_c,
        humidity_pct,
        pressure_hpa: 1008.5,
        eco2_ppm,
        tvoc_ppb: 42,
    }
}

fn evening() -> DateTime {
    DateTime {
        year: 2024,
        month: 11,
        day: 3,
        hour: 21,
        minute: 4,
        second: 12,
        weekday: Weekday::Sunday,
    }
}

fn tick(
    monitor: &mut Monitor<RamStorage>,
    board: &mut Board,
    reading: Result<SensorSample, SensorError>,
) -> Result<envmon_core::TickReport, TickError> {
    monitor.tick(
        ScriptedSensor {
            samples: vec![reading],
        },
        FixedClock(Some(evening())),
        &mut board.screen,
        &mut board.leds,
        &mut board.log,
    )
}

#[test]
fn settings_survive_reboot() {
    let mut monitor = Monitor::new(RamStorage::new(), Eco2Thresholds::default());
    monitor.handle_input(UserInput::BrightnessUp).unwrap();
    monitor.handle_input(UserInput::BrightnessUp).unwrap();
    monitor.handle_input(UserInput::ToggleQuietMode).unwrap();

    let mut storage = monitor.into_storage();
    assert!(storage.exists(StorageKey::BacklightLevel));
    assert!(storage.exists(StorageKey::QuietMode));

    let mut monitor = Monitor::new(storage, Eco2Thresholds::default());
    assert_eq!(monitor.settings().backlight_level(), 4);
    assert!(monitor.settings().quiet_mode());

    let mut board = Board::default();
    let report = tick(&mut monitor, &mut board, Ok(sample(22.0, 50.0, 500))).unwrap();
    assert_eq!(report.band, None);
    assert_eq!(board.screen.brightness, vec![5]);

    monitor.handle_input(UserInput::ToggleQuietMode).unwrap();
    tick(&mut monitor, &mut board, Ok(sample(22.0, 50.0, 500))).unwrap();
    assert_eq!(board.screen.brightness, vec![5, 205]);
}

#[test]
fn corrupt_storage_boots_with_defaults() {
    let mut storage = RamStorage::new();
    storage.write(StorageKey::BacklightLevel, &[0xff, 0xff, 0xff]).unwrap();
    storage.write(StorageKey::QuietMode, &[1, 1]).unwrap();

    let monitor = Monitor::new(storage, Eco2Thresholds::default());
    assert_eq!(monitor.settings().backlight_level(), 2);
    assert!(monitor.settings().quiet_mode());
}

#[test]
fn alert_trace_fires_each_entry_once() {
    let mut monitor = Monitor::new(RamStorage::new(), Eco2Thresholds::default());
    let mut board = Board::default();

    let fired: Vec<_> = [400, 1100, 1600, 1100, 1100, 300, 1200]
        .into_iter()
        .map(|ppm| {
            tick(&mut monitor, &mut board, Ok(sample(22.0, 50.0, ppm)))
                .unwrap()
                .fired
        })
        .collect();

    assert_eq!(
        fired,
        vec![
            None,
            Some(AlertTone::Attention),
            Some(AlertTone::Caution),
            None,
            None,
            None,
            Some(AlertTone::Attention),
        ]
    );
    assert_eq!(
        board.leds.tones,
        vec![AlertTone::Attention, AlertTone::Caution, AlertTone::Attention]
    );
    // Indicator is driven every tick
    assert_eq!(board.leds.settings.len(), 7);
    assert_eq!(board.leds.settings[5], (Rgb::BLACK, 0));
}

#[test]
fn failed_sensor_read_skips_tick() {
    let mut monitor = Monitor::new(RamStorage::new(), Eco2Thresholds::default());
    let mut board = Board::default();

    tick(&mut monitor, &mut board, Ok(sample(33.0, 80.0, 1050))).unwrap();
    let result = tick(&mut monitor, &mut board, Err(SensorError::NotReady));
    assert_eq!(result, Err(TickError::SensorUnavailable(SensorError::NotReady)));

    assert_eq!(board.screen.frames.len(), 1);
    assert_eq!(board.log.lines.len(), 1);
    assert_eq!(board.leds.settings.len(), 1);

    // Still in Attention: no second tone
    let report = tick(&mut monitor, &mut board, Ok(sample(33.0, 80.0, 1050))).unwrap();
    assert_eq!(report.fired, None);
    assert_eq!(report.band, Some(ComfortBand::Boiling));
}

#[test]
fn frame_and_log_contents() {
    let mut monitor = Monitor::new(RamStorage::new(), Eco2Thresholds::default());
    let mut board = Board::default();
    tick(&mut monitor, &mut board, Ok(sample(5.0, 40.0, 1400))).unwrap();

    let (header, frame) = &board.screen.frames[0];
    assert_eq!(header.weekday.as_str(), "Sun");
    assert_eq!(header.date.as_str(), "2024/11/03");
    assert_eq!(header.time.as_str(), "21:04");
    assert_eq!(header.readouts.tvoc_ppb, 42);

    assert_eq!(frame.background, ComfortBand::Cold.color());
    assert!(frame.clear_background);
    assert_eq!(frame.live_bar.height, 93);
    assert_eq!(frame.bars[23], frame.live_bar);
    assert_eq!(frame.bars[0].height, 27);

    assert_eq!(board.log.lines, vec!["11/3,21:04,1400,42,5.00,40.00,1008.50"]);
}

#[test]
fn full_log_is_reported_not_fatal() {
    let mut monitor = Monitor::new(RamStorage::new(), Eco2Thresholds::default());
    let mut board = Board::default();
    board.log.full = true;

    let report = tick(&mut monitor, &mut board, Ok(sample(22.0, 50.0, 600))).unwrap();
    assert_eq!(report.faults.record, Some(RecordError::Full));
    assert!(report.faults.render.is_none());
    assert_eq!(board.screen.frames.len(), 1);
}
