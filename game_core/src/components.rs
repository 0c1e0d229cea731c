use glam::IVec2;

use crate::params::Params;

/// Which side of the field a paddle defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - a player's paddle
///
/// Horizontal position and size are fixed per side; only `y` ever changes,
/// and only in response to input.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: i32,
}

impl Paddle {
    pub fn new(side: Side, y: i32) -> Self {
        Self { side, y }
    }

    /// X position of the paddle's left edge.
    pub fn x(&self) -> i32 {
        Params::paddle_x(self.side)
    }
}

/// Ball component - the pong ball
///
/// `pos` is the top-left corner of the ball's 16x16 rectangle. Velocity is
/// integer pixels per tick; bounces only ever flip a component's sign.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: IVec2,
}

impl Ball {
    pub fn new(pos: IVec2, vel: IVec2) -> Self {
        Self { pos, vel }
    }

    /// Snap the ball back to the field center. Velocity is deliberately left
    /// untouched: the ball resumes in the direction it exited.
    pub fn reset_to_center(&mut self) {
        self.pos = Params::ball_spawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_x_follows_side() {
        let left = Paddle::new(Side::Left, 240);
        let right = Paddle::new(Side::Right, 240);
        assert_eq!(left.x(), 0);
        assert_eq!(right.x(), 768);
    }

    #[test]
    fn test_ball_reset_keeps_velocity() {
        let mut ball = Ball::new(IVec2::new(810, 100), IVec2::new(1, -1));
        ball.reset_to_center();
        assert_eq!(ball.pos, IVec2::new(392, 292));
        assert_eq!(ball.vel, IVec2::new(1, -1));
    }
}
