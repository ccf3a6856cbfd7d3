//! Integration tests for the Random App lifecycle, driven through the
//! public API with a recording frame sink and fake sensors.

use random_app::config::{BLINK_INTERVAL_MS, SENSOR_REFRESH_MS, TEXT_COLOR};
use random_app::gfx::pack;
use random_app::sensors::{GasSensor, OrientationSensor};
use random_app::{App, AppResult, Error, FrameBuffer, FrameSink, InputEvent, Joysticks};
use random_app::{Scancode, Screen, Sensors};

use std::cell::Cell;
use std::rc::Rc;

// ═══════════════════════════════════════════════════════════════════════════
// Fakes
// ═══════════════════════════════════════════════════════════════════════════

/// Keeps a copy of every presented frame.
#[derive(Default)]
struct Recorder {
    frames: Vec<Vec<u16>>,
}

impl FrameSink for Recorder {
    fn present(&mut self, fb: &FrameBuffer) -> Result<(), Error> {
        self.frames.push(fb.pixels().to_vec());
        Ok(())
    }
}

struct NoJoysticks;

impl Joysticks for NoJoysticks {
    fn open(&mut self, _device: u32) -> Result<u32, Error> {
        Err(Error::Joystick)
    }

    fn close(&mut self, _id: u32) {}
}

/// Orientation that advances by 90° on every read.
struct Spinner {
    reads: Rc<Cell<i32>>,
}

impl OrientationSensor for Spinner {
    fn orientation(&self) -> i32 {
        self.reads.get() % 4
    }

    fn orientation_degrees(&self) -> i32 {
        let n = self.reads.get();
        self.reads.set(n + 1);
        (n % 4) * 90
    }
}

struct Weather;

impl GasSensor for Weather {
    fn temperature(&self) -> i32 {
        23
    }
    fn humidity(&self) -> i32 {
        51
    }
    fn pressure(&self) -> i32 {
        100_900
    }
    fn gas_resistance(&self) -> i32 {
        48_000
    }
}

fn press(app: &mut App, key: Scancode) -> AppResult {
    app.event(InputEvent::KeyDown(key), &mut NoJoysticks)
}

fn open_menu_entry(app: &mut App, index: usize) {
    press(app, Scancode(0x04));
    assert_eq!(app.active(), Screen::Menu);
    for _ in 0..index {
        press(app, Scancode::DOWN);
    }
    press(app, Scancode::RETURN);
}

// ═══════════════════════════════════════════════════════════════════════════
// Scenarios
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn welcome_blinks_until_a_key_opens_the_menu() {
    let mut app = App::new(Sensors::none()).unwrap();
    let mut out = Recorder::default();

    app.iterate(0, &mut out);
    app.iterate(BLINK_INTERVAL_MS / 2, &mut out);
    app.iterate(BLINK_INTERVAL_MS, &mut out);
    assert_eq!(out.frames.len(), 2);
    assert_ne!(out.frames[0], out.frames[1]);

    press(&mut app, Scancode::SPACE);
    app.iterate(BLINK_INTERVAL_MS + 1, &mut out);
    assert_eq!(app.active(), Screen::Menu);
    assert_eq!(out.frames.len(), 3);
}

#[test]
fn menu_frame_changes_with_selection() {
    let mut app = App::new(Sensors::none()).unwrap();
    let mut out = Recorder::default();

    press(&mut app, Scancode(0x04));
    app.iterate(0, &mut out);
    press(&mut app, Scancode::DOWN);
    app.iterate(1, &mut out);
    app.iterate(2, &mut out);

    assert_eq!(out.frames.len(), 2);
    assert_ne!(out.frames[0], out.frames[1]);
}

#[test]
fn keyboard_test_swallows_q_and_escape_goes_back() {
    let mut app = App::new(Sensors::none()).unwrap();
    let mut out = Recorder::default();
    open_menu_entry(&mut app, 0);
    assert_eq!(app.active(), Screen::Keyboard);

    app.iterate(0, &mut out);
    assert_eq!(press(&mut app, Scancode::Q), AppResult::Continue);
    app.iterate(1, &mut out);
    assert_eq!(out.frames.len(), 2);
    assert_ne!(out.frames[0], out.frames[1]);

    assert_eq!(press(&mut app, Scancode::ESCAPE), AppResult::Continue);
    assert_eq!(app.active(), Screen::Menu);
    app.iterate(2, &mut out);
    assert_eq!(out.frames.len(), 3);

    assert_eq!(press(&mut app, Scancode::ESCAPE), AppResult::Success);
}

#[test]
fn about_is_drawn_once_and_any_key_returns() {
    let mut app = App::new(Sensors::none()).unwrap();
    let mut out = Recorder::default();
    open_menu_entry(&mut app, 3);
    assert_eq!(app.active(), Screen::About);

    app.iterate(0, &mut out);
    app.iterate(10_000, &mut out);
    assert_eq!(out.frames.len(), 1);
    assert!(out.frames[0].contains(&pack(TEXT_COLOR)));

    press(&mut app, Scancode::RIGHT);
    assert_eq!(app.active(), Screen::Menu);
}

#[test]
fn sensor_screen_refreshes_while_sensors_exist() {
    let reads = Rc::new(Cell::new(0));
    let sensors = Sensors::new(
        Some(Box::new(Spinner {
            reads: reads.clone(),
        })),
        Some(Box::new(Weather)),
    );
    let mut app = App::new(sensors).unwrap();
    let mut out = Recorder::default();
    let probe_reads = reads.get();

    open_menu_entry(&mut app, 2);
    assert_eq!(app.active(), Screen::Sensors);

    app.iterate(0, &mut out);
    app.iterate(SENSOR_REFRESH_MS - 1, &mut out);
    app.iterate(SENSOR_REFRESH_MS, &mut out);

    assert_eq!(out.frames.len(), 2);
    assert_eq!(reads.get(), probe_reads + 2);
    assert_ne!(out.frames[0], out.frames[1]);
}

#[test]
fn sensor_screen_without_sensors_is_static() {
    let mut app = App::new(Sensors::none()).unwrap();
    let mut out = Recorder::default();
    open_menu_entry(&mut app, 2);

    app.iterate(0, &mut out);
    app.iterate(SENSOR_REFRESH_MS * 5, &mut out);
    assert_eq!(out.frames.len(), 1);
}

#[test]
fn files_stub_opens_and_returns() {
    let mut app = App::new(Sensors::none()).unwrap();
    let mut out = Recorder::default();
    open_menu_entry(&mut app, 1);
    assert_eq!(app.active(), Screen::Files);

    app.iterate(0, &mut out);
    assert_eq!(out.frames.len(), 1);

    assert_eq!(press(&mut app, Scancode::Q), AppResult::Success);
    assert_eq!(app.active(), Screen::Files);
}

#[test]
fn quit_event_ends_from_anywhere() {
    let mut app = App::new(Sensors::none()).unwrap();
    open_menu_entry(&mut app, 0);
    assert_eq!(
        app.event(InputEvent::Quit, &mut NoJoysticks),
        AppResult::Success
    );
}
