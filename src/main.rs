//! SDL host for Random App.
//!
//! Creates the window, renderer and an RGB565 streaming texture, then
//! drives [`App`] until it asks to stop. All drawing happens in the
//! library; this file only moves pixels and events across the boundary.

use std::fmt::Display;

use anyhow::Result;
use log::{error, info, warn};
use sdl2::event::Event;
use sdl2::joystick::{HatState, Joystick};
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Texture, WindowCanvas};
use sdl2::JoystickSubsystem;

use random_app::config::{
    APP_ID, APP_NAME, APP_VERSION, EVENT_WAIT_MS, WINDOW_FULLSCREEN, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use random_app::{App, AppResult, Error, FrameBuffer, FrameSink, Hat, InputEvent, Joysticks};
use random_app::{Scancode, Sensors};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("{} {} ({})", APP_NAME, APP_VERSION, APP_ID);

    let sdl = sdl2::init().map_err(fail(Error::VideoInit))?;
    let video = sdl.video().map_err(fail(Error::VideoInit))?;
    match video.current_display_mode(0) {
        Ok(mode) => info!(
            "display mode: {}x{} @ {}Hz, {:?}",
            mode.w, mode.h, mode.refresh_rate, mode.format
        ),
        Err(e) => warn!("display mode unavailable: {}", e),
    }

    let mut builder = video.window(APP_NAME, WINDOW_WIDTH, WINDOW_HEIGHT);
    builder.position_centered();
    if WINDOW_FULLSCREEN {
        builder.fullscreen();
    }
    let window = builder.build().map_err(fail(Error::Window))?;

    let canvas = window
        .into_canvas()
        .accelerated()
        .build()
        .map_err(fail(Error::Renderer))?;
    let renderer = canvas.info();
    info!("renderer: {}", renderer.name);
    for format in &renderer.texture_formats {
        info!("  texture format: {:?}", format);
    }

    let texture_creator = canvas.texture_creator();
    let texture = texture_creator
        .create_texture_streaming(PixelFormatEnum::RGB565, WINDOW_WIDTH, WINDOW_HEIGHT)
        .map_err(fail(Error::Texture))?;

    let timer = sdl.timer().map_err(fail(Error::Timer))?;
    let mut joysticks = SdlJoysticks::new(
        sdl.joystick()
            .map_err(|e| warn!("joystick support unavailable: {}", e))
            .ok(),
    );
    let mut event_pump = sdl.event_pump().map_err(fail(Error::EventPump))?;

    // The desktop has no sensor devices.
    let mut app = App::new(Sensors::none())?;
    let mut sink = SdlSink {
        canvas,
        texture,
        scratch: Vec::new(),
    };

    let mut result = AppResult::Continue;
    'run: while !result.is_terminal() {
        result = app.iterate(timer.ticks64(), &mut sink);
        if result.is_terminal() {
            break;
        }

        let first = event_pump.wait_event_timeout(EVENT_WAIT_MS);
        for event in first.into_iter().chain(event_pump.poll_iter()) {
            if let Some(input) = translate(&event) {
                result = app.event(input, &mut joysticks);
                if result.is_terminal() {
                    break 'run;
                }
            }
        }
    }

    app.quit(result, &mut joysticks);
    if result == AppResult::Failure {
        anyhow::bail!("{} stopped on an error", APP_NAME);
    }
    Ok(())
}

/// Log an SDL failure and turn it into `kind`.
fn fail<E: Display>(kind: Error) -> impl FnOnce(E) -> Error {
    move |e| {
        error!("{}: {}", kind, e);
        kind
    }
}

fn translate(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown {
            scancode: Some(sc), ..
        } => Some(InputEvent::KeyDown(Scancode(*sc as i32 as u16))),
        Event::JoyHatMotion { state, .. } => Some(InputEvent::HatMotion(hat(*state))),
        Event::JoyDeviceAdded { which, .. } => Some(InputEvent::JoystickAdded(*which)),
        Event::JoyDeviceRemoved { which, .. } => Some(InputEvent::JoystickRemoved(*which)),
        _ => None,
    }
}

fn hat(state: HatState) -> Hat {
    match state {
        HatState::Centered => Hat::Centered,
        HatState::Up => Hat::Up,
        HatState::Right => Hat::Right,
        HatState::Down => Hat::Down,
        HatState::Left => Hat::Left,
        HatState::RightUp | HatState::RightDown | HatState::LeftUp | HatState::LeftDown => {
            Hat::Diagonal
        }
    }
}

/// Uploads frames to the streaming texture and presents them.
struct SdlSink<'a> {
    canvas: WindowCanvas,
    texture: Texture<'a>,
    scratch: Vec<u8>,
}

impl FrameSink for SdlSink<'_> {
    fn present(&mut self, fb: &FrameBuffer) -> Result<(), Error> {
        let pitch = fb.pitch();
        self.scratch.resize(pitch * fb.height(), 0);
        fb.copy_to_bytes(&mut self.scratch);

        self.texture
            .update(None, &self.scratch, pitch)
            .map_err(fail(Error::Upload))?;
        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, None)
            .map_err(fail(Error::Present))?;
        self.canvas.present();
        Ok(())
    }
}

/// Holds the one opened controller; dropping it closes the device.
///
/// Without a joystick subsystem every open fails and the app runs on
/// keys alone.
struct SdlJoysticks {
    subsystem: Option<JoystickSubsystem>,
    open: Option<Joystick>,
}

impl SdlJoysticks {
    fn new(subsystem: Option<JoystickSubsystem>) -> Self {
        Self {
            subsystem,
            open: None,
        }
    }
}

impl Joysticks for SdlJoysticks {
    fn open(&mut self, device: u32) -> Result<u32, Error> {
        let subsystem = self.subsystem.as_ref().ok_or(Error::Joystick)?;
        let joystick = subsystem.open(device).map_err(fail(Error::Joystick))?;
        let id = joystick.instance_id();
        info!("opened joystick {:?}", joystick.name());
        self.open = Some(joystick);
        Ok(id)
    }

    fn close(&mut self, id: u32) {
        if self
            .open
            .as_ref()
            .is_some_and(|joystick| joystick.instance_id() == id)
        {
            self.open = None;
        }
    }
}
