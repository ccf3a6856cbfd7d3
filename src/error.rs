//! Unified error type for random-app.
//!
//! All variants carry only fixed-size data so the type is usable from the
//! `no_std` core. The host binding logs the underlying SDL message before
//! mapping it to one of these.

use core::fmt;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Startup
    /// The video subsystem could not be initialised.
    VideoInit,

    /// Window creation failed.
    Window,

    /// Renderer creation failed.
    Renderer,

    /// The RGB565 streaming texture could not be created.
    Texture,

    /// The pixel buffer could not be allocated.
    FrameBufferAlloc,

    /// The event pump could not be obtained.
    EventPump,

    /// The tick timer could not be initialised.
    Timer,

    // Per-frame
    /// Copying the pixel buffer into the texture failed.
    Upload,

    /// Copying the texture to the screen failed.
    Present,

    // Input
    /// An attached joystick could not be opened.
    Joystick,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::VideoInit => "couldn't initialize video",
            Error::Window => "failed to create window",
            Error::Renderer => "failed to create renderer",
            Error::Texture => "framebuffer texture could not be created",
            Error::FrameBufferAlloc => "could not allocate pixel buffer",
            Error::EventPump => "failed to obtain event pump",
            Error::Timer => "couldn't initialize timer",
            Error::Upload => "failed to upload frame",
            Error::Present => "failed to present frame",
            Error::Joystick => "failed to open joystick",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_failure_is_not_reported_as_video() {
        assert_ne!(Error::Timer.to_string(), Error::VideoInit.to_string());
        assert!(Error::Timer.to_string().contains("timer"));
    }
}
