use glam::IVec2;

use crate::components::Side;

/// Fixed tuning parameters for Pong
///
/// Everything here is in field pixels. There is no runtime configuration;
/// the game is defined entirely by these values.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 600;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 32;
    pub const PADDLE_HEIGHT: i32 = 120;
    /// Inward margin on the paddle edge where ball contact counts as a hit.
    pub const PADDLE_BORDER: i32 = 10;
    pub const PADDLE_START_Y: i32 = 240;

    // Paddle movement. Up moves faster than down, and both guards check the
    // pre-move position, so a paddle can overshoot the field edge slightly.
    pub const PADDLE_STEP_UP: i32 = 12;
    pub const PADDLE_STEP_DOWN: i32 = 10;
    pub const PADDLE_GUARD_MARGIN: i32 = 5;

    // Ball
    pub const BALL_WIDTH: i32 = 16;
    pub const BALL_HEIGHT: i32 = 16;
    pub const BALL_START_VEL: IVec2 = IVec2::new(1, 1);

    /// X position of a paddle's left edge for the given side.
    pub fn paddle_x(side: Side) -> i32 {
        match side {
            Side::Left => 0,
            Side::Right => Self::FIELD_WIDTH - Self::PADDLE_WIDTH,
        }
    }

    /// Ball spawn point: top-left corner of the ball centered on the field.
    pub fn ball_spawn() -> IVec2 {
        IVec2::new(
            Self::FIELD_WIDTH / 2 - Self::BALL_WIDTH / 2,
            Self::FIELD_HEIGHT / 2 - Self::BALL_HEIGHT / 2,
        )
    }

    /// Highest `y` at which the down-guard still allows movement.
    pub fn paddle_down_limit() -> i32 {
        Self::FIELD_HEIGHT - Self::PADDLE_HEIGHT - Self::PADDLE_GUARD_MARGIN
    }
}
