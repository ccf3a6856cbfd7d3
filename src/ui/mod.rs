//! User interface - screen state machine and input routing.
//!
//! Exactly one [`Screen`] is active. Key presses are routed to it and may
//! switch to another screen; every iteration the active screen decides
//! whether it needs a repaint and, if so, redraws the whole frame.
//!
//! ## Screens
//!
//! ```text
//! Welcome ──any key──▶ Menu ──Enter/Space──▶ Keyboard | Files | Sensors | About
//!                       ▲                                 │
//!                       └──────── ESC / any key ──────────┘
//! ```
//!
//! Escape or Q quits from every screen except the keyboard test, where
//! Escape returns to the menu instead.

pub mod display;
pub mod input_logic;
pub mod keys;
pub mod menu;
pub mod screens;


pub use keys::{Hat, Scancode};

use log::{debug, info};

use crate::gfx::FrameBuffer;
use crate::sensors::Sensors;
use menu::MenuContext;
use screens::{KeyboardContext, SensorsContext, StaticContext, WelcomeContext};

/// Screens (views) the UI can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Splash with a blinking "press any key" prompt.
    Welcome,
    /// Scrolling list of the sub-screens.
    Menu,
    /// Shows the scancode of every key pressed.
    Keyboard,
    /// File explorer placeholder.
    Files,
    /// Live sensor values.
    Sensors,
    /// Static app information.
    About,
}

impl Screen {
    pub const COUNT: usize = 6;

    pub const ALL: [Screen; Screen::COUNT] = [
        Screen::Welcome,
        Screen::Menu,
        Screen::Keyboard,
        Screen::Files,
        Screen::Sensors,
        Screen::About,
    ];

    fn handlers(self) -> &'static ScreenHandlers {
        &HANDLERS[self as usize]
    }
}

/// Whether a screen repainted the frame buffer this iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// State of every screen, allocated once at startup.
#[derive(Default)]
pub struct UiContexts {
    pub welcome: WelcomeContext,
    pub menu: MenuContext,
    pub keyboard: KeyboardContext,
    pub files: StaticContext,
    pub sensors: SensorsContext,
    pub about: StaticContext,
}

impl UiContexts {
    pub fn new(sensors: Sensors) -> Self {
        Self {
            sensors: SensorsContext::new(sensors),
            ..Self::default()
        }
    }
}

type RenderFn = fn(&mut UiContexts, &mut FrameBuffer, u64) -> TickResult;
type KeyFn = fn(&mut UiContexts, Scancode) -> Option<Screen>;
type EnterFn = fn(&mut UiContexts);

/// Behaviour of one screen.
struct ScreenHandlers {
    /// Repaint if needed.
    render: RenderFn,
    /// React to a key; `Some` switches screens.
    handle_key: KeyFn,
    /// Called when the screen becomes active.
    enter: EnterFn,
}

/// Indexed by `Screen as usize`; order must follow [`Screen::ALL`].
static HANDLERS: [ScreenHandlers; Screen::COUNT] = [
    ScreenHandlers {
        render: render_welcome,
        handle_key: handle_welcome_key,
        enter: enter_welcome,
    },
    ScreenHandlers {
        render: render_menu,
        handle_key: handle_menu_key,
        enter: enter_menu,
    },
    ScreenHandlers {
        render: render_keyboard,
        handle_key: handle_keyboard_key,
        enter: enter_keyboard,
    },
    ScreenHandlers {
        render: render_files,
        handle_key: back_to_menu,
        enter: enter_files,
    },
    ScreenHandlers {
        render: render_sensors,
        handle_key: back_to_menu,
        enter: enter_sensors,
    },
    ScreenHandlers {
        render: render_about,
        handle_key: back_to_menu,
        enter: enter_about,
    },
];

/// Outcome of routing one key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyOutcome {
    /// Keep running (the active screen may have changed).
    Handled,
    /// The user asked to leave the app.
    Quit,
}

/// Route one key press to the active screen.
pub fn route_key(active: &mut Screen, ctx: &mut UiContexts, key: Scancode) -> KeyOutcome {
    if *active != Screen::Keyboard && key.is_quit() {
        info!("quit requested from {:?} ({})", active, key);
        return KeyOutcome::Quit;
    }

    if let Some(next) = (active.handlers().handle_key)(ctx, key) {
        switch_to(active, ctx, next);
    }
    KeyOutcome::Handled
}

/// Make `next` the active screen and schedule its first repaint.
pub fn switch_to(active: &mut Screen, ctx: &mut UiContexts, next: Screen) {
    info!("screen: {:?} -> {:?}", active, next);
    (next.handlers().enter)(ctx);
    *active = next;
}

/// Let the active screen repaint `fb` if it needs to.
pub fn render(active: Screen, ctx: &mut UiContexts, fb: &mut FrameBuffer, now_ms: u64) -> TickResult {
    (active.handlers().render)(ctx, fb, now_ms)
}

fn enter_welcome(ctx: &mut UiContexts) {
    ctx.welcome.reset();
}

fn enter_menu(ctx: &mut UiContexts) {
    ctx.menu.populate();
    ctx.menu.dirty = true;
}

fn enter_keyboard(ctx: &mut UiContexts) {
    ctx.keyboard.dirty = true;
}

fn enter_files(ctx: &mut UiContexts) {
    ctx.files.dirty = true;
}

fn enter_sensors(ctx: &mut UiContexts) {
    ctx.sensors.dirty = true;
}

fn enter_about(ctx: &mut UiContexts) {
    ctx.about.dirty = true;
}

fn handle_welcome_key(_ctx: &mut UiContexts, _key: Scancode) -> Option<Screen> {
    Some(Screen::Menu)
}

fn handle_menu_key(ctx: &mut UiContexts, key: Scancode) -> Option<Screen> {
    ctx.menu.handle_key(key)
}

fn handle_keyboard_key(ctx: &mut UiContexts, key: Scancode) -> Option<Screen> {
    ctx.keyboard.record(key);
    if key == Scancode::ESCAPE {
        return Some(Screen::Menu);
    }
    None
}

// Any key leaves files/sensors/about. This also restarts the welcome
// blink cycle.
fn back_to_menu(ctx: &mut UiContexts, _key: Scancode) -> Option<Screen> {
    ctx.welcome.reset();
    Some(Screen::Menu)
}

fn render_welcome(ctx: &mut UiContexts, fb: &mut FrameBuffer, now_ms: u64) -> TickResult {
    if !ctx.welcome.tick(now_ms) {
        return TickResult::NoRender;
    }
    display::draw_welcome(fb, ctx.welcome.show_prompt);
    TickResult::RenderRequested
}

fn render_menu(ctx: &mut UiContexts, fb: &mut FrameBuffer, _now_ms: u64) -> TickResult {
    ctx.menu.populate();
    if !ctx.menu.dirty {
        return TickResult::NoRender;
    }
    ctx.menu.draw(fb);
    ctx.menu.dirty = false;
    debug!("menu rendered");
    TickResult::RenderRequested
}

fn render_keyboard(ctx: &mut UiContexts, fb: &mut FrameBuffer, _now_ms: u64) -> TickResult {
    if !ctx.keyboard.dirty {
        return TickResult::NoRender;
    }
    display::draw_keyboard(fb, ctx.keyboard.last_scancode);
    ctx.keyboard.dirty = false;
    debug!("keyboard screen rendered");
    TickResult::RenderRequested
}

fn render_files(ctx: &mut UiContexts, fb: &mut FrameBuffer, _now_ms: u64) -> TickResult {
    if !ctx.files.dirty {
        return TickResult::NoRender;
    }
    display::draw_files(fb);
    ctx.files.dirty = false;
    TickResult::RenderRequested
}

fn render_sensors(ctx: &mut UiContexts, fb: &mut FrameBuffer, now_ms: u64) -> TickResult {
    if !ctx.sensors.needs_refresh(now_ms) {
        return TickResult::NoRender;
    }
    let orientation = ctx.sensors.sensors.read_orientation();
    let gas = ctx.sensors.sensors.read_gas();
    display::draw_sensors(fb, orientation, gas);
    ctx.sensors.mark_refreshed(now_ms);
    TickResult::RenderRequested
}

fn render_about(ctx: &mut UiContexts, fb: &mut FrameBuffer, _now_ms: u64) -> TickResult {
    if !ctx.about.dirty {
        return TickResult::NoRender;
    }
    display::draw_about(fb);
    ctx.about.dirty = false;
    TickResult::RenderRequested
}
