//! Application shell: owns the frame buffer and the screen state, and
//! implements the init / iterate / event / quit lifecycle.
//!
//! The shell never touches a window system directly. The host hands it a
//! [`FrameSink`] to show finished frames and a [`Joysticks`] handle to
//! open and close game controllers, so the whole lifecycle runs on the
//! host test runner as well.

use log::{debug, error, info, warn};

use crate::config::{OPEN_JOYSTICKS, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::Error;
use crate::gfx::FrameBuffer;
use crate::sensors::Sensors;
use crate::ui::{self, Hat, KeyOutcome, Scancode, Screen, TickResult, UiContexts};

/// Where finished frames go (a streaming texture on the desktop).
pub trait FrameSink {
    /// Upload the whole buffer and show it.
    fn present(&mut self, fb: &FrameBuffer) -> Result<(), Error>;
}

/// Host access to game controllers.
pub trait Joysticks {
    /// Open the device announced as `device` and return the id its
    /// removal will be reported with.
    fn open(&mut self, device: u32) -> Result<u32, Error>;
    fn close(&mut self, id: u32);
}

/// Input delivered by the host event pump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    KeyDown(Scancode),
    HatMotion(Hat),
    /// A controller appeared; carries the host's device index.
    JoystickAdded(u32),
    /// A controller went away; carries the id returned by [`Joysticks::open`].
    JoystickRemoved(u32),
    /// Window closed or the host asked the app to stop.
    Quit,
}

/// What the host loop should do after a callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppResult {
    Continue,
    /// Stop, everything went fine.
    Success,
    /// Stop, something broke.
    Failure,
}

impl AppResult {
    pub fn is_terminal(self) -> bool {
        self != AppResult::Continue
    }
}

pub struct App {
    fb: FrameBuffer,
    active: Screen,
    ui: UiContexts,
    joystick: Option<u32>,
}

impl App {
    /// Allocate the frame buffer and start on the welcome screen.
    pub fn new(sensors: Sensors) -> Result<Self, Error> {
        let fb = FrameBuffer::new(WINDOW_WIDTH, WINDOW_HEIGHT)?;
        sensors.log_probe();

        info!("app ready ({}x{})", WINDOW_WIDTH, WINDOW_HEIGHT);
        Ok(Self {
            fb,
            active: Screen::Welcome,
            ui: UiContexts::new(sensors),
            joystick: None,
        })
    }

    /// One pass of the host loop: let the active screen repaint and, if it
    /// did, push the frame out.
    pub fn iterate<S: FrameSink>(&mut self, now_ms: u64, sink: &mut S) -> AppResult {
        match ui::render(self.active, &mut self.ui, &mut self.fb, now_ms) {
            TickResult::NoRender => AppResult::Continue,
            TickResult::RenderRequested => match sink.present(&self.fb) {
                Ok(()) => AppResult::Continue,
                Err(e) => {
                    error!("frame output failed: {}", e);
                    AppResult::Failure
                }
            },
        }
    }

    /// Handle one input event.
    pub fn event<J: Joysticks>(&mut self, event: InputEvent, joysticks: &mut J) -> AppResult {
        match event {
            InputEvent::Quit => {
                info!("quit event");
                AppResult::Success
            }
            InputEvent::KeyDown(key) => self.key(key),
            InputEvent::HatMotion(hat) => match hat.as_scancode() {
                Some(key) => {
                    debug!("hat {:?} -> {}", hat, key);
                    self.key(key)
                }
                None => AppResult::Continue,
            },
            InputEvent::JoystickAdded(id) => {
                self.attach(id, joysticks);
                AppResult::Continue
            }
            InputEvent::JoystickRemoved(id) => {
                self.detach(id, joysticks);
                AppResult::Continue
            }
        }
    }

    /// Release what the app holds. Called once after the loop ends.
    pub fn quit<J: Joysticks>(&mut self, result: AppResult, joysticks: &mut J) {
        if let Some(id) = self.joystick.take() {
            joysticks.close(id);
        }
        info!("app finished: {:?}", result);
    }

    pub fn active(&self) -> Screen {
        self.active
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn ui(&self) -> &UiContexts {
        &self.ui
    }

    /// Id of the attached joystick, if any.
    pub fn joystick(&self) -> Option<u32> {
        self.joystick
    }

    fn key(&mut self, key: Scancode) -> AppResult {
        match ui::route_key(&mut self.active, &mut self.ui, key) {
            KeyOutcome::Handled => AppResult::Continue,
            KeyOutcome::Quit => AppResult::Success,
        }
    }

    fn attach<J: Joysticks>(&mut self, device: u32, joysticks: &mut J) {
        if self.joystick.is_some() {
            debug!("joystick device {} ignored, one already attached", device);
            return;
        }
        if !OPEN_JOYSTICKS {
            return;
        }
        match joysticks.open(device) {
            Ok(id) => {
                info!("joystick {} attached", id);
                self.joystick = Some(id);
            }
            Err(e) => warn!("joystick device {}: {}", device, e),
        }
    }

    fn detach<J: Joysticks>(&mut self, id: u32, joysticks: &mut J) {
        if self.joystick == Some(id) {
            joysticks.close(id);
            self.joystick = None;
            info!("joystick {} removed", id);
        }
    }
}
