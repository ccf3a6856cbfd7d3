//! Menu screen: a scrolling list of sub-screens.

use core::fmt::Write;

use heapless::{String, Vec};
use log::debug;

use super::display::{draw_window, Line, PANEL_H, PANEL_W, PANEL_X, PANEL_Y, TEXT_X};
use super::input_logic::{
    scroll_into_view, scrollbar_thumb, select_next, select_prev, truncate_with_ellipsis, Thumb,
};
use super::{Scancode, Screen};
use crate::config::{
    BEVEL, BORDER_DARK, BUTTON_COLOR, LIST_BG, MAX_DESCRIPTION_CHARS, MENU_ITEM_HEIGHT,
    PANEL_COLOR, SCROLLBAR_MIN_THUMB, SCROLLBAR_WIDTH, SELECTED_BG, SELECTED_TEXT, TEXT_COLOR,
    TITLE_HEIGHT,
};
use crate::gfx::font::FONT_WIDTH;
use crate::gfx::{Bevel, FrameBuffer};

/// Number of fixed menu entries.
pub const MENU_COUNT: usize = 4;

/// One menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuOption {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    /// Screen opened when the entry is activated.
    pub target: Screen,
}

/// The fixed entries, in display order.
pub const MENU_OPTIONS: [MenuOption; MENU_COUNT] = [
    MenuOption {
        name: "Keyboard test",
        version: "1.0",
        description: "Check keyboard scancodes",
        target: Screen::Keyboard,
    },
    MenuOption {
        name: "File explorer",
        version: "0.1",
        description: "Read files and directories",
        target: Screen::Files,
    },
    MenuOption {
        name: "Sensors",
        version: "1.0",
        description: "Read sensor data",
        target: Screen::Sensors,
    },
    MenuOption {
        name: "About",
        version: "1.0",
        description: "About this app",
        target: Screen::About,
    },
];

/// Geometry of the list box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuLayout {
    pub list_x: i32,
    pub list_y: i32,
    pub list_w: i32,
    pub list_h: i32,
    pub item_height: i32,
}

impl MenuLayout {
    /// The list box below the item counter, above the footer hint.
    pub const fn standard() -> Self {
        Self {
            list_x: PANEL_X + 15,
            list_y: PANEL_Y + TITLE_HEIGHT + 55,
            list_w: PANEL_W - 30,
            list_h: PANEL_H - TITLE_HEIGHT - 110,
            item_height: MENU_ITEM_HEIGHT,
        }
    }

    /// Whole rows that fit inside the bevel.
    pub fn items_per_page(&self) -> usize {
        let inner = self.list_h - 2 * BEVEL;
        if inner <= 0 || self.item_height <= 0 {
            return 0;
        }
        (inner / self.item_height) as usize
    }

    /// Inner left edge of a row.
    pub fn item_x(&self) -> i32 {
        self.list_x + BEVEL
    }

    /// Inner width of a row.
    pub fn item_w(&self) -> i32 {
        self.list_w - 2 * BEVEL
    }

    /// Top of the `row`-th visible row.
    pub fn item_y(&self, row: usize) -> i32 {
        self.list_y + BEVEL + row as i32 * self.item_height
    }

    /// Scrollbar track `(x, y, height)`, flush with the list's right edge.
    pub fn scrollbar_track(&self) -> (i32, i32, i32) {
        (
            self.list_x + self.list_w - SCROLLBAR_WIDTH,
            self.list_y + BEVEL,
            self.list_h - 2 * BEVEL,
        )
    }

    /// Description characters that fit a row, capped at
    /// [`MAX_DESCRIPTION_CHARS`].
    pub fn max_description_chars(&self) -> usize {
        let fit = ((self.item_w() - 16) / FONT_WIDTH).max(0) as usize;
        fit.min(MAX_DESCRIPTION_CHARS)
    }
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self::standard()
    }
}

/// Mutable state of the menu screen.
pub struct MenuContext {
    pub scroll_offset: usize,
    pub selected_item: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub options: Vec<MenuOption, MENU_COUNT>,
    pub layout: MenuLayout,
    pub dirty: bool,
}

impl MenuContext {
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            selected_item: 0,
            total_items: 0,
            items_per_page: 0,
            options: Vec::new(),
            layout: MenuLayout::standard(),
            dirty: false,
        }
    }

    /// Fill the option list on first use. Later calls do nothing.
    pub fn populate(&mut self) {
        if self.total_items != 0 {
            return;
        }
        for option in MENU_OPTIONS {
            let _ = self.options.push(option);
        }
        self.total_items = self.options.len();
        self.items_per_page = self.layout.items_per_page();
        self.dirty = true;
    }

    /// The entry under the cursor.
    pub fn selected(&self) -> Option<&MenuOption> {
        self.options.get(self.selected_item)
    }

    /// Move the cursor one row up.
    pub fn select_up(&mut self) {
        self.selected_item = select_prev(self.selected_item);
        self.scroll_offset =
            scroll_into_view(self.selected_item, self.scroll_offset, self.items_per_page);
        debug!("menu: (up) selected_item: {}", self.selected_item);
    }

    /// Move the cursor one row down.
    pub fn select_down(&mut self) {
        self.selected_item = select_next(self.selected_item, self.total_items);
        self.scroll_offset =
            scroll_into_view(self.selected_item, self.scroll_offset, self.items_per_page);
        debug!("menu: (down) selected_item: {}", self.selected_item);
    }

    /// Apply a key press. Returns the screen to open, if any.
    pub fn handle_key(&mut self, key: Scancode) -> Option<Screen> {
        self.populate();
        self.dirty = true;

        match key {
            Scancode::UP => self.select_up(),
            Scancode::DOWN => self.select_down(),
            k if k.is_activate() => {
                debug!("menu: (activate) selected_item: {}", self.selected_item);
                return self.selected().map(|option| option.target);
            }
            _ => {}
        }
        None
    }

    /// Thumb of the scrollbar, if the list overflows.
    pub fn thumb(&self) -> Option<Thumb> {
        let (_, _, track_h) = self.layout.scrollbar_track();
        scrollbar_thumb(
            self.total_items,
            self.items_per_page,
            self.scroll_offset,
            track_h,
            SCROLLBAR_MIN_THUMB,
        )
    }

    /// Repaint the whole screen.
    pub fn draw(&mut self, fb: &mut FrameBuffer) {
        let layout = self.layout;
        self.items_per_page = layout.items_per_page();

        draw_window(fb, "Menu");

        let mut count: Line = String::new();
        let _ = write!(count, "Menu Options Available: {}", self.total_items);
        fb.draw_text(TEXT_X, PANEL_Y + TITLE_HEIGHT + 20, &count, TEXT_COLOR);

        fb.fill_rect(layout.list_x, layout.list_y, layout.list_w, layout.list_h, LIST_BG);
        fb.draw_3d_border(
            layout.list_x,
            layout.list_y,
            layout.list_w,
            layout.list_h,
            Bevel::Sunken,
        );

        let visible_start = self.scroll_offset;
        let visible_end = (visible_start + self.items_per_page).min(self.total_items);
        let item_x = layout.item_x();
        let item_w = layout.item_w();
        let max_chars = layout.max_description_chars();

        for i in visible_start..visible_end {
            let Some(option) = self.options.get(i) else {
                break;
            };
            let item_y = layout.item_y(i - visible_start);
            let selected = i == self.selected_item;

            if selected {
                fb.fill_rect(item_x, item_y, item_w, layout.item_height - 2, SELECTED_BG);
            }
            let text_color = if selected { SELECTED_TEXT } else { TEXT_COLOR };

            fb.draw_text_bold(item_x + 8, item_y + 6, option.name, text_color);

            let mut version: Line = String::new();
            let _ = write!(version, "Version: {}", option.version);
            fb.draw_text(item_x + 8, item_y + 30, &version, text_color);

            let desc: String<{ MAX_DESCRIPTION_CHARS + 1 }> =
                truncate_with_ellipsis(option.description, max_chars);
            fb.draw_text(item_x + 8, item_y + 54, &desc, text_color);

            if i + 1 < visible_end {
                fb.fill_rect(item_x, item_y + layout.item_height - 2, item_w, 1, BORDER_DARK);
            }
        }

        if let Some(thumb) = self.thumb() {
            let (bar_x, bar_y, bar_h) = layout.scrollbar_track();
            fb.fill_rect(bar_x, bar_y, SCROLLBAR_WIDTH, bar_h, BUTTON_COLOR);
            fb.draw_3d_border(bar_x, bar_y, SCROLLBAR_WIDTH, bar_h, Bevel::Sunken);

            let thumb_x = bar_x + BEVEL;
            let thumb_w = SCROLLBAR_WIDTH - 2 * BEVEL;
            fb.fill_rect(thumb_x, bar_y + thumb.offset, thumb_w, thumb.height, PANEL_COLOR);
            fb.draw_3d_border(thumb_x, bar_y + thumb.offset, thumb_w, thumb.height, Bevel::Raised);
        }

        fb.draw_text(
            TEXT_X,
            PANEL_Y + PANEL_H - 35,
            "UP/DOWN to navigate, SPACE to open, ESC to exit",
            TEXT_COLOR,
        );
    }
}

impl Default for MenuContext {
    fn default() -> Self {
        Self::new()
    }
}
