//! The frame loop: poll input, step the simulation, draw, repeat.

use std::time::Duration;

use game_core::{Events, GameState, InputQueue};

use crate::gateway::{Event, Platform};

/// How long the title screen stays up before play starts.
pub const TITLE_PAUSE: Duration = Duration::from_secs(3);
/// Pause after the ball leaves the field, before play resumes.
pub const RESET_PAUSE: Duration = Duration::from_secs(1);

/// Runs until a quit event is observed. Single-threaded and synchronous:
/// the pauses block everything, including input polling.
pub fn run<P: Platform>(platform: &mut P, state: &mut GameState) {
    let mut inputs = InputQueue::new();
    let mut events = Events::new();

    if let Err(err) = platform.show_title() {
        log::warn!("could not draw title screen: {}", err);
    }
    platform.delay(TITLE_PAUSE);

    let mut running = true;
    while running {
        // Drain pending events. Quit aborts the drain; once it is seen, no
        // further tick runs.
        while let Some(event) = platform.poll_event() {
            match event {
                Event::Quit => {
                    log::info!("quit requested");
                    running = false;
                    break;
                }
                Event::KeyDown(key) => inputs.push(key),
            }
        }
        if !running {
            break;
        }

        game_core::step(state, &mut inputs, &mut events);

        if events.ball_reset {
            log::debug!("ball left the field, pausing before serve");
            platform.delay(RESET_PAUSE);
        }

        if let Err(err) = platform.draw_frame(state) {
            log::warn!("draw failed: {}", err);
        }
    }
}
