use crate::components::{Ball, Paddle, Side};
use crate::params::Params;

/// The complete simulated game state: two paddles and the ball.
///
/// Created once at startup and mutated in place by the systems; nothing here
/// is ever destroyed or re-created during play.
#[derive(Debug, Clone, Copy)]
pub struct GameState {
    /// Player 1's paddle (right side, Up/Down arrows).
    pub paddle_right: Paddle,
    /// Player 2's paddle (left side, W/S).
    pub paddle_left: Paddle,
    pub ball: Ball,
}

impl GameState {
    /// Initial layout: both paddles at the starting height, ball at the
    /// field center moving down-right.
    pub fn new() -> Self {
        Self {
            paddle_right: Paddle::new(Side::Right, Params::PADDLE_START_Y),
            paddle_left: Paddle::new(Side::Left, Params::PADDLE_START_Y),
            ball: Ball::new(Params::ball_spawn(), Params::BALL_START_VEL),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new();
        assert_eq!(state.paddle_right.y, 240);
        assert_eq!(state.paddle_left.y, 240);
        assert_eq!(state.paddle_right.x(), 768);
        assert_eq!(state.paddle_left.x(), 0);
        assert_eq!(state.ball.pos, IVec2::new(392, 292));
        assert_eq!(state.ball.vel, IVec2::new(1, 1));
    }
}
