use crate::components::Paddle;
use crate::params::Params;
use crate::resources::Events;
use crate::state::GameState;

/// Bounce the ball off the top and bottom walls.
///
/// The bottom threshold is `FIELD_HEIGHT - BALL_HEIGHT / 2`, not the full
/// ball height. Kept verbatim from the original.
pub fn bounce_walls(state: &mut GameState, events: &mut Events) {
    let ball = &mut state.ball;
    if ball.pos.y < 0 || ball.pos.y > Params::FIELD_HEIGHT - Params::BALL_HEIGHT / 2 {
        ball.vel.y = -ball.vel.y;
        events.wall_bounce = true;
    }
}

/// Flip the ball's horizontal direction when it lands exactly on a paddle's
/// collision column and overlaps the paddle vertically.
///
/// The horizontal test is exact equality against the border-adjusted edge,
/// so it only fires on the single tick where the ball's edge lands on that
/// column; with |vel.x| > 1 the ball can step over it and pass through.
/// Kept verbatim from the original.
pub fn check_paddle_hits(state: &mut GameState, events: &mut Events) {
    let ball = &state.ball;

    let hit_right = ball.pos.x + Params::BALL_WIDTH
        == state.paddle_right.x() + Params::PADDLE_BORDER
        && overlaps_vertically(ball.pos.y, &state.paddle_right);
    let hit_left = ball.pos.x
        == state.paddle_left.x() + Params::PADDLE_WIDTH - Params::PADDLE_BORDER
        && overlaps_vertically(ball.pos.y, &state.paddle_left);

    if hit_right || hit_left {
        state.ball.vel.x = -state.ball.vel.x;
        events.paddle_bounce = true;
    }
}

/// `ball.bottom >= paddle.top && ball.top < paddle.bottom`.
fn overlaps_vertically(ball_y: i32, paddle: &Paddle) -> bool {
    ball_y + Params::BALL_HEIGHT >= paddle.y && ball_y < paddle.y + Params::PADDLE_HEIGHT
}
