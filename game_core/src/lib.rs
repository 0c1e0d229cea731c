pub mod components;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use params::*;
pub use resources::*;
pub use state::*;

use systems::*;

/// Run one tick of the deterministic Pong simulation
///
/// Order matters: every rule after integration acts on the already-advanced
/// ball position, and the paddle-collision check runs last, after a
/// possible reset (a centered ball can never sit on a collision column, so
/// a reset tick never also bounces).
pub fn step(state: &mut GameState, inputs: &mut InputQueue, events: &mut Events) {
    // Clear events at start of tick
    events.clear();

    // 1. Apply queued key presses to the paddles
    apply_inputs(state, inputs);

    // 2. Integrate ball position
    move_ball(state);

    // 3. Bounce off top/bottom walls
    bounce_walls(state, events);

    // 4. Reset if the ball left the field
    reset_out_of_bounds(state, events);

    // 5. Bounce off paddles
    check_paddle_hits(state, events);
}
