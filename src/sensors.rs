//! Optional on-board sensors.
//!
//! The badge exposes a BMI270 orientation sensor and a BME690
//! environmental sensor. Either may be missing (and both always are on a
//! desktop build); a missing sensor is a normal state that the sensor
//! screen reports as "not available".

use alloc::boxed::Box;
use log::{info, warn};

/// Orientation sensor (BMI270).
pub trait OrientationSensor {
    /// Orientation as the device reports it (quadrant index).
    fn orientation(&self) -> i32;
    /// Orientation in degrees.
    fn orientation_degrees(&self) -> i32;
}

/// Environmental / gas sensor (BME690).
pub trait GasSensor {
    /// Degrees Celsius.
    fn temperature(&self) -> i32;
    /// Relative humidity, percent.
    fn humidity(&self) -> i32;
    /// Pascal.
    fn pressure(&self) -> i32;
    /// Ohm.
    fn gas_resistance(&self) -> i32;
}

/// Snapshot of one orientation reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OrientationReading {
    pub orientation: i32,
    pub degrees: i32,
}

/// Snapshot of one environmental reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GasReading {
    pub temperature: i32,
    pub humidity: i32,
    pub pressure: i32,
    pub gas_resistance: i32,
}

/// The set of sensor handles found at startup.
#[derive(Default)]
pub struct Sensors {
    orientation: Option<Box<dyn OrientationSensor>>,
    gas: Option<Box<dyn GasSensor>>,
}

impl Sensors {
    /// No sensors at all.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(
        orientation: Option<Box<dyn OrientationSensor>>,
        gas: Option<Box<dyn GasSensor>>,
    ) -> Self {
        Self { orientation, gas }
    }

    /// True when at least one sensor is present.
    pub fn any(&self) -> bool {
        self.orientation.is_some() || self.gas.is_some()
    }

    pub fn read_orientation(&self) -> Option<OrientationReading> {
        self.orientation.as_ref().map(|s| OrientationReading {
            orientation: s.orientation(),
            degrees: s.orientation_degrees(),
        })
    }

    pub fn read_gas(&self) -> Option<GasReading> {
        self.gas.as_ref().map(|s| GasReading {
            temperature: s.temperature(),
            humidity: s.humidity(),
            pressure: s.pressure(),
            gas_resistance: s.gas_resistance(),
        })
    }

    /// Log which sensors are present, with a first reading of each.
    pub fn log_probe(&self) {
        match self.read_orientation() {
            Some(r) => info!(
                "BMI270: orientation={} degrees={}",
                r.orientation, r.degrees
            ),
            None => warn!("BMI270: no orientation device found"),
        }
        match self.read_gas() {
            Some(r) => info!(
                "BME690: temperature={}C humidity={}% pressure={}Pa gas_resistance={}Ohm",
                r.temperature, r.humidity, r.pressure, r.gas_resistance
            ),
            None => warn!("BME690: no gas device found"),
        }
    }
}
