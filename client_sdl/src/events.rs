//! Converts SDL events to the frame loop's `Event` type.
//!
//! Only quit and key-down events are surfaced; everything else (mouse,
//! window, key-up) maps to `None` and is dropped by the event drain.
//! Unbound keys become `Key::Other` so both paddle handlers can ignore
//! them uniformly.

use sdl2::event::Event as SdlEvent;
use sdl2::keyboard::Scancode;

use game_core::Key;

use crate::gateway::Event;

pub fn map_event(event: SdlEvent) -> Option<Event> {
    match event {
        SdlEvent::Quit { .. } => Some(Event::Quit),
        SdlEvent::KeyDown {
            scancode: Some(code),
            ..
        } => Some(Event::KeyDown(map_scancode(code))),
        _ => None,
    }
}

fn map_scancode(code: Scancode) -> Key {
    match code {
        Scancode::Up => Key::Up,
        Scancode::Down => Key::Down,
        Scancode::W => Key::W,
        Scancode::S => Key::S,
        _ => Key::Other,
    }
}
