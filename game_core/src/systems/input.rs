use crate::components::Paddle;
use crate::params::Params;
use crate::resources::{InputQueue, Key};
use crate::state::GameState;

/// Drain queued key presses and apply them to the paddles.
///
/// Every key is offered to both handlers; each handler ignores keys not
/// bound to it, so order of players does not matter.
pub fn apply_inputs(state: &mut GameState, inputs: &mut InputQueue) {
    for key in inputs.keys.drain(..) {
        move_player_one(&mut state.paddle_right, key);
        move_player_two(&mut state.paddle_left, key);
    }
}

/// Player 1: Up/Down arrows drive the right paddle.
fn move_player_one(paddle: &mut Paddle, key: Key) {
    match key {
        Key::Up => nudge_up(paddle),
        Key::Down => nudge_down(paddle),
        _ => {}
    }
}

/// Player 2: W/S drive the left paddle.
fn move_player_two(paddle: &mut Paddle, key: Key) {
    match key {
        Key::W => nudge_up(paddle),
        Key::S => nudge_down(paddle),
        _ => {}
    }
}

// The guards check the pre-move position only, and the up step (12) is
// larger than the down step (10), so a paddle at y = 5 legally lands on
// y = -7. Matches the original behavior exactly.

fn nudge_up(paddle: &mut Paddle) {
    if paddle.y >= Params::PADDLE_GUARD_MARGIN {
        paddle.y -= Params::PADDLE_STEP_UP;
    }
}

fn nudge_down(paddle: &mut Paddle) {
    if paddle.y <= Params::paddle_down_limit() {
        paddle.y += Params::PADDLE_STEP_DOWN;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Side;

    fn paddle_at(y: i32) -> Paddle {
        Paddle::new(Side::Right, y)
    }

    #[test]
    fn test_up_guard_blocks_below_margin() {
        let mut paddle = paddle_at(4);
        move_player_one(&mut paddle, Key::Up);
        assert_eq!(paddle.y, 4, "guard y >= 5 fails at y = 4");
    }

    #[test]
    fn test_up_guard_checks_pre_move_position() {
        let mut paddle = paddle_at(5);
        move_player_one(&mut paddle, Key::Up);
        assert_eq!(paddle.y, -7, "guard passes at y = 5, no post-move clamp");
    }

    #[test]
    fn test_down_guard_at_limit() {
        let mut paddle = paddle_at(475);
        move_player_one(&mut paddle, Key::Down);
        assert_eq!(paddle.y, 485, "guard passes at the 475 limit");

        let mut paddle = paddle_at(476);
        move_player_one(&mut paddle, Key::Down);
        assert_eq!(paddle.y, 476, "guard blocks just past the limit");
    }

    #[test]
    fn test_players_ignore_each_others_keys() {
        let mut state = GameState::new();
        let mut inputs = InputQueue::new();
        inputs.push(Key::Up);

        apply_inputs(&mut state, &mut inputs);

        assert_eq!(state.paddle_right.y, 240 - 12);
        assert_eq!(state.paddle_left.y, 240, "W/S paddle ignores arrows");
    }

    #[test]
    fn test_other_key_is_noop() {
        let mut state = GameState::new();
        let mut inputs = InputQueue::new();
        inputs.push(Key::Other);

        apply_inputs(&mut state, &mut inputs);

        assert_eq!(state.paddle_right.y, 240);
        assert_eq!(state.paddle_left.y, 240);
    }

    #[test]
    fn test_queue_drained_after_apply() {
        let mut state = GameState::new();
        let mut inputs = InputQueue::new();
        inputs.push(Key::S);
        inputs.push(Key::S);

        apply_inputs(&mut state, &mut inputs);

        assert!(inputs.is_empty());
        assert_eq!(state.paddle_left.y, 240 + 20, "both presses applied");
    }
}
