//! Random App: a small badge demo with a welcome splash, a scrolling menu,
//! a keyboard test, a file explorer placeholder, a sensor readout and an
//! about page.
//!
//! Everything here draws into an in-memory RGB565 [`FrameBuffer`] and is
//! independent of the display backend, so the whole UI is testable on the
//! host:
//!
//! ```text
//! cargo test                      # lib + integration tests
//! cargo run --features desktop    # SDL window
//! ```
//!
//! The SDL binding lives in `main.rs` and is only built with the `desktop`
//! feature.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// ═══════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════

pub mod app;
pub mod config;
pub mod error;
pub mod gfx;
pub mod sensors;
pub mod ui;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use app::{App, AppResult, FrameSink, InputEvent, Joysticks};
pub use error::Error;
pub use gfx::FrameBuffer;
pub use sensors::Sensors;
pub use ui::{Hat, Scancode, Screen};
