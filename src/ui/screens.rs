//! Per-screen state for everything but the menu.
//!
//! Each context only decides *whether* its screen needs a repaint; the
//! pixels themselves come from [`super::display`].

use crate::config::{BLINK_INTERVAL_MS, SENSOR_REFRESH_MS};
use crate::sensors::Sensors;
use crate::ui::Scancode;

/// Welcome screen: the "press any key" prompt blinks.
#[derive(Debug, Default)]
pub struct WelcomeContext {
    pub show_prompt: bool,
    /// Time of the last blink toggle; `None` until the first frame.
    pub last_change: Option<u64>,
}

impl WelcomeContext {
    /// Start the blink cycle over; the next frame repaints.
    pub fn reset(&mut self) {
        self.last_change = None;
    }

    /// Advance the blink timer. Returns `true` when the screen must be
    /// repainted.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut changed = false;

        let last = match self.last_change {
            Some(last) => last,
            None => {
                self.show_prompt = true;
                self.last_change = Some(now_ms);
                changed = true;
                now_ms
            }
        };

        if now_ms.saturating_sub(last) >= BLINK_INTERVAL_MS {
            self.show_prompt = !self.show_prompt;
            self.last_change = Some(now_ms);
            changed = true;
        }

        changed
    }
}

/// Keyboard test: shows the last scancode seen.
#[derive(Debug, Default)]
pub struct KeyboardContext {
    pub last_scancode: Option<Scancode>,
    pub dirty: bool,
}

impl KeyboardContext {
    pub fn record(&mut self, key: Scancode) {
        self.last_scancode = Some(key);
        self.dirty = true;
    }
}

/// A screen that only repaints on entry (files, about).
#[derive(Debug, Default)]
pub struct StaticContext {
    pub dirty: bool,
}

/// Sensor readout; refreshed periodically while any sensor exists.
#[derive(Default)]
pub struct SensorsContext {
    pub sensors: Sensors,
    pub last_refresh: Option<u64>,
    pub dirty: bool,
}

impl SensorsContext {
    pub fn new(sensors: Sensors) -> Self {
        Self {
            sensors,
            last_refresh: None,
            dirty: false,
        }
    }

    /// Whether the readout must be repainted at `now_ms`.
    pub fn needs_refresh(&self, now_ms: u64) -> bool {
        if self.dirty {
            return true;
        }
        if !self.sensors.any() {
            return false;
        }
        match self.last_refresh {
            Some(last) => now_ms.saturating_sub(last) >= SENSOR_REFRESH_MS,
            None => true,
        }
    }

    pub fn mark_refreshed(&mut self, now_ms: u64) {
        self.last_refresh = Some(now_ms);
        self.dirty = false;
    }
}
