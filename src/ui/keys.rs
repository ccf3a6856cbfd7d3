//! Key and joystick-hat input.
//!
//! Keys arrive as raw scancodes: USB HID keyboard usage ids, which is also
//! what SDL reports. The joystick hat is folded into the same stream so
//! every screen only ever sees key presses.

use core::fmt;

/// Layout-independent key identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scancode(pub u16);

impl Scancode {
    pub const Q: Scancode = Scancode(0x14);
    pub const RETURN: Scancode = Scancode(0x28);
    pub const ESCAPE: Scancode = Scancode(0x29);
    pub const BACKSPACE: Scancode = Scancode(0x2A);
    pub const SPACE: Scancode = Scancode(0x2C);
    pub const RIGHT: Scancode = Scancode(0x4F);
    pub const LEFT: Scancode = Scancode(0x50);
    pub const DOWN: Scancode = Scancode(0x51);
    pub const UP: Scancode = Scancode(0x52);

    /// Escape or Q: leaves the app from every screen but the keyboard test.
    pub fn is_quit(self) -> bool {
        self == Self::ESCAPE || self == Self::Q
    }

    /// Return or Space.
    pub fn is_activate(self) -> bool {
        self == Self::RETURN || self == Self::SPACE
    }
}

impl fmt::Display for Scancode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

/// Joystick hat position after a motion event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Hat {
    Centered,
    Up,
    Right,
    Down,
    Left,
    /// Any diagonal.
    Diagonal,
}

impl Hat {
    /// Key equivalent of a hat push, or `None` for release and diagonals.
    ///
    /// Right opens (Return); Left maps to Backspace so it leaves the
    /// sub-screens without triggering the quit keys.
    pub fn as_scancode(self) -> Option<Scancode> {
        match self {
            Hat::Up => Some(Scancode::UP),
            Hat::Down => Some(Scancode::DOWN),
            Hat::Right => Some(Scancode::RETURN),
            Hat::Left => Some(Scancode::BACKSPACE),
            Hat::Centered | Hat::Diagonal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String;
    use core::fmt::Write;

    #[test]
    fn quit_and_activate_keys() {
        assert!(Scancode::ESCAPE.is_quit());
        assert!(Scancode::Q.is_quit());
        assert!(!Scancode::SPACE.is_quit());

        assert!(Scancode::RETURN.is_activate());
        assert!(Scancode::SPACE.is_activate());
        assert!(!Scancode::UP.is_activate());
    }

    #[test]
    fn scancode_formats_as_two_digit_hex() {
        let mut s: String<8> = String::new();
        write!(s, "{}", Scancode(0x04)).unwrap();
        assert_eq!(s.as_str(), "0x04");

        s.clear();
        write!(s, "{}", Scancode::UP).unwrap();
        assert_eq!(s.as_str(), "0x52");

        s.clear();
        write!(s, "{}", Scancode(0x1E1)).unwrap();
        assert_eq!(s.as_str(), "0x1E1");
    }

    #[test]
    fn hat_maps_to_navigation_keys() {
        assert_eq!(Hat::Up.as_scancode(), Some(Scancode::UP));
        assert_eq!(Hat::Down.as_scancode(), Some(Scancode::DOWN));
        assert_eq!(Hat::Right.as_scancode(), Some(Scancode::RETURN));
        assert_eq!(Hat::Left.as_scancode(), Some(Scancode::BACKSPACE));
        assert_eq!(Hat::Centered.as_scancode(), None);
        assert_eq!(Hat::Diagonal.as_scancode(), None);
    }

    #[test]
    fn hat_never_produces_a_quit_key() {
        for hat in [Hat::Up, Hat::Down, Hat::Left, Hat::Right] {
            assert!(!hat.as_scancode().unwrap().is_quit());
        }
    }
}
