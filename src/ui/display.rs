//! Screen rendering into the frame buffer.
//!
//! Every screen is a full repaint: background, raised application panel,
//! title bar, then the screen's own content.

use core::fmt::Write;

use heapless::String;

use crate::config::{
    APP_CREATOR, APP_NAME, APP_URL, APP_VERSION, BEVEL, BG_COLOR, CONTENT_TOP, LINE_GAP,
    PANEL_COLOR, SELECTED_TEXT, TEXT_COLOR, TITLE_BG, TITLE_HEIGHT, WINDOW_HEIGHT, WINDOW_MARGIN,
    WINDOW_WIDTH,
};
use crate::gfx::font::FONT_HEIGHT;
use crate::gfx::{Bevel, FrameBuffer};
use crate::sensors::{GasReading, OrientationReading};
use crate::ui::Scancode;

/// Application panel bounds.
pub const PANEL_X: i32 = WINDOW_MARGIN;
pub const PANEL_Y: i32 = WINDOW_MARGIN;
pub const PANEL_W: i32 = WINDOW_WIDTH as i32 - 2 * WINDOW_MARGIN;
pub const PANEL_H: i32 = WINDOW_HEIGHT as i32 - 2 * WINDOW_MARGIN;

/// Left edge of text inside the panel.
pub const TEXT_X: i32 = PANEL_X + 15;

/// One formatted line of text.
pub type Line = String<64>;

/// Clear the buffer and draw the panel with "Random App - `title`".
pub fn draw_window(fb: &mut FrameBuffer, title: &str) {
    fb.fill_rect(0, 0, fb.width() as i32, fb.height() as i32, BG_COLOR);

    fb.fill_rect(PANEL_X, PANEL_Y, PANEL_W, PANEL_H, PANEL_COLOR);
    fb.draw_3d_border(PANEL_X, PANEL_Y, PANEL_W, PANEL_H, Bevel::Raised);

    fb.fill_rect(
        PANEL_X + BEVEL,
        PANEL_Y + BEVEL,
        PANEL_W - 2 * BEVEL,
        TITLE_HEIGHT,
        TITLE_BG,
    );

    let mut heading: Line = String::new();
    let _ = write!(heading, "{} - {}", APP_NAME, title);
    fb.draw_text_bold(TEXT_X, PANEL_Y + 11, &heading, SELECTED_TEXT);
}

/// Lines centred in the panel, stacked from [`CONTENT_TOP`] down.
pub struct CenteredLines {
    y: i32,
}

impl CenteredLines {
    pub fn new() -> Self {
        Self { y: CONTENT_TOP }
    }

    /// Draw one line and move down.
    pub fn line(&mut self, fb: &mut FrameBuffer, text: &str) {
        fb.draw_text_centered(PANEL_X, self.y, PANEL_W, text, TEXT_COLOR);
        self.blank();
    }

    pub fn blank(&mut self) {
        self.y += FONT_HEIGHT + LINE_GAP;
    }

    pub fn lines(&mut self, fb: &mut FrameBuffer, lines: &[&str]) {
        for text in lines {
            self.line(fb, text);
        }
    }

    /// Baseline of the next line.
    pub fn y(&self) -> i32 {
        self.y
    }
}

impl Default for CenteredLines {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the Welcome screen. The prompt is the blinking part.
pub fn draw_welcome(fb: &mut FrameBuffer, show_prompt: bool) {
    draw_window(fb, "Welcome");

    if show_prompt {
        fb.draw_text_centered(
            PANEL_X,
            PANEL_Y + PANEL_H / 2,
            PANEL_W,
            "Press any key to continue...",
            TEXT_COLOR,
        );
    }
}

/// Render the keyboard test with the most recent scancode (`0x00` before
/// the first key).
pub fn draw_keyboard(fb: &mut FrameBuffer, last_scancode: Option<Scancode>) {
    draw_window(fb, "Keyboard");

    let mut code: Line = String::new();
    let _ = write!(code, "{}", last_scancode.unwrap_or(Scancode(0)));

    CenteredLines::new().lines(
        fb,
        &[
            "Keyboard test",
            "Press any key, to see its scancode.",
            "",
            "Scan code of latest key pressed will be shown below:",
            &code,
            "",
            "Press ESC key to return to menu.",
            "(Press ESC to exit the app)",
        ],
    );
}

/// Render the (not yet implemented) file explorer.
pub fn draw_files(fb: &mut FrameBuffer) {
    draw_window(fb, "Files");

    CenteredLines::new().lines(
        fb,
        &[
            "File explorer",
            "Not available yet",
            "",
            "Press any key to return.",
        ],
    );
}

/// Render current sensor values, or a fallback per missing sensor.
pub fn draw_sensors(
    fb: &mut FrameBuffer,
    orientation: Option<OrientationReading>,
    gas: Option<GasReading>,
) {
    draw_window(fb, "Sensors");

    let mut lines = CenteredLines::new();
    lines.line(fb, "Sensors screen");
    lines.blank();

    lines.line(fb, "BMI270 - Orientation sensor");
    match orientation {
        Some(r) => {
            let mut line: Line = String::new();
            let _ = write!(line, "orientation: {}", r.orientation);
            lines.line(fb, &line);

            line.clear();
            let _ = write!(line, "orientation degrees: {}", r.degrees);
            lines.line(fb, &line);
        }
        None => lines.line(fb, "Orientation sensor not available"),
    }
    lines.blank();

    lines.line(fb, "BME690 - Gas sensor");
    match gas {
        Some(r) => {
            let mut line: Line = String::new();
            let _ = write!(line, "Temperature in Celsius: {}", r.temperature);
            lines.line(fb, &line);

            line.clear();
            let _ = write!(line, "Humidity in Rel. Percentage: {}", r.humidity);
            lines.line(fb, &line);

            line.clear();
            let _ = write!(line, "Pressure in Pascal: {}", r.pressure);
            lines.line(fb, &line);

            line.clear();
            let _ = write!(line, "Gas Resistance in Ohm: {}", r.gas_resistance);
            lines.line(fb, &line);
        }
        None => lines.line(fb, "Gas sensor not available"),
    }
    lines.blank();

    lines.line(fb, "Press any key to return.");
}

/// Render the About screen.
pub fn draw_about(fb: &mut FrameBuffer) {
    draw_window(fb, "About");

    let mut created: Line = String::new();
    let _ = write!(created, "Created by {}, 2025.", APP_CREATOR);
    let mut visit: Line = String::new();
    let _ = write!(visit, "Visit {} for more info.", APP_URL);

    CenteredLines::new().lines(
        fb,
        &[
            "RandomApp is a simple demo application",
            "showcasing SDL features on the WHY Badge.",
            "",
            &created,
            "Version:",
            APP_VERSION,
            "",
            &visit,
            "",
            "Press any key to return.",
        ],
    );
}
