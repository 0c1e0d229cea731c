use crate::params::Params;
use crate::resources::Events;
use crate::state::GameState;

/// Snap the ball back to the field center once it has left the field on the
/// left or right. Velocity is untouched, so play resumes in the direction
/// the ball exited. The frame loop watches `events.ball_reset` to run the
/// fixed pause before the next tick.
pub fn reset_out_of_bounds(state: &mut GameState, events: &mut Events) {
    let ball = &mut state.ball;
    if ball.pos.x < 0 || ball.pos.x > Params::FIELD_WIDTH {
        ball.reset_to_center();
        events.ball_reset = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_reset_when_ball_exits_left() {
        let mut state = GameState::new();
        let mut events = Events::new();
        state.ball.pos = IVec2::new(-1, 100);
        state.ball.vel = IVec2::new(-1, 1);

        reset_out_of_bounds(&mut state, &mut events);

        assert_eq!(state.ball.pos, IVec2::new(392, 292));
        assert_eq!(state.ball.vel, IVec2::new(-1, 1), "velocity preserved");
        assert!(events.ball_reset);
    }

    #[test]
    fn test_reset_when_ball_exits_right() {
        let mut state = GameState::new();
        let mut events = Events::new();
        state.ball.pos = IVec2::new(801, 500);
        state.ball.vel = IVec2::new(1, -1);

        reset_out_of_bounds(&mut state, &mut events);

        assert_eq!(state.ball.pos, IVec2::new(392, 292));
        assert_eq!(state.ball.vel, IVec2::new(1, -1));
        assert!(events.ball_reset);
    }

    #[test]
    fn test_no_reset_on_the_edge() {
        // x == 0 and x == 800 are still in bounds.
        let mut state = GameState::new();
        let mut events = Events::new();

        state.ball.pos = IVec2::new(0, 100);
        reset_out_of_bounds(&mut state, &mut events);
        assert_eq!(state.ball.pos, IVec2::new(0, 100));
        assert!(!events.ball_reset);

        state.ball.pos = IVec2::new(800, 100);
        reset_out_of_bounds(&mut state, &mut events);
        assert_eq!(state.ball.pos, IVec2::new(800, 100));
        assert!(!events.ball_reset);
    }
}
