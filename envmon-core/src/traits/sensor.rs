//! Environment sensor trait

/// Errors that can occur reading the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor still warming up or measurement not finished
    NotReady,
    /// Bus communication failed
    Bus,
    /// Reading failed its plausibility or CRC check
    InvalidData,
}

/// One set of readings taken in a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorSample {
    /// Temperature (°C)
    pub temperature_c: f32,
    /// Relative humidity (%)
    pub humidity_pct: f32,
    /// Barometric pressure (hPa)
    pub pressure_hpa: f32,
    /// Equivalent CO2 (ppm)
    pub eco2_ppm: u16,
    /// Total volatile organic compounds (ppb)
    pub tvoc_ppb: u16,
}

/// Trait for the combined environment sensor
///
/// Implementations read temperature/humidity, pressure and gas sensors
/// and return them as one sample.
pub trait EnvSensor {
    /// Take one sample
    ///
    /// Takes `&mut self` because bus transactions require mutable access.
    fn read(&mut self) -> Result<SensorSample, SensorError>;
}

impl<T: EnvSensor + ?Sized> EnvSensor for &mut T {
    fn read(&mut self) -> Result<SensorSample, SensorError> {
        (**self).read()
    }
}
