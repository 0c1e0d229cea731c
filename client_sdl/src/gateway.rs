//! The rendering/windowing contract the frame loop runs against.
//!
//! The loop never talks to SDL directly; it sees a `Platform` that can poll
//! one event at a time, draw frames, and sleep. Tests drive the loop with a
//! scripted implementation, the binary with [`SdlPlatform`].
//!
//! [`SdlPlatform`]: crate::sdl_platform::SdlPlatform

use std::time::Duration;

use game_core::{GameState, Key};

/// Input event as the frame loop sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Window close / OS quit request
    Quit,
    /// A key was pressed (releases are not reported)
    KeyDown(Key),
}

/// Render Gateway contract.
pub trait Platform {
    /// Next pending input event, or `None` once the queue is drained.
    fn poll_event(&mut self) -> Option<Event>;

    /// Draw the one-time title screen and present it.
    fn show_title(&mut self) -> Result<(), String>;

    /// Draw one full frame (background, paddles, ball) and present it.
    fn draw_frame(&mut self, state: &GameState) -> Result<(), String>;

    /// Block the (single) thread for the given duration.
    fn delay(&mut self, duration: Duration);
}
