use crate::state::GameState;

/// Advance the ball by its velocity. Runs before any bounce or reset rule,
/// which all act on the already-advanced position.
pub fn move_ball(state: &mut GameState) {
    state.ball.pos += state.ball.vel;
}
