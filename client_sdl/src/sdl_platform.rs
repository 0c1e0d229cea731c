//! SDL2-backed implementation of the `Platform` contract.
//!
//! All textures are loaded once at setup and cached for the lifetime of the
//! window; a frame is then a pure function of the game state (see
//! [`frame_draw_list`]), which keeps repeated draws of an unchanged state
//! byte-for-byte identical.

use std::thread;
use std::time::Duration;

use sdl2::image::LoadTexture;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

use game_core::{Ball, GameState, Paddle, Params};

use crate::error::SetupError;
use crate::events::map_event;
use crate::gateway::{Event, Platform};

const BACKGROUND_PATH: &str = "resources/images/background.png";
const PLAYER1_PATH: &str = "resources/images/player.png";
const PLAYER2_PATH: &str = "resources/images/player2.png";
const BALL_PATH: &str = "resources/images/ball.png";

/// One textured-rectangle draw, in paint order. `None` destination means
/// fullscreen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    Background,
    PaddleRight(Rect),
    PaddleLeft(Rect),
    Ball(Rect),
}

/// The draw list for one frame. Pure: reads the state, never mutates it,
/// so rendering the same state twice yields the same ops.
pub fn frame_draw_list(state: &GameState) -> [DrawOp; 4] {
    [
        DrawOp::Background,
        DrawOp::PaddleRight(paddle_rect(&state.paddle_right)),
        DrawOp::PaddleLeft(paddle_rect(&state.paddle_left)),
        DrawOp::Ball(ball_rect(&state.ball)),
    ]
}

fn paddle_rect(paddle: &Paddle) -> Rect {
    Rect::new(
        paddle.x(),
        paddle.y,
        Params::PADDLE_WIDTH as u32,
        Params::PADDLE_HEIGHT as u32,
    )
}

fn ball_rect(ball: &Ball) -> Rect {
    Rect::new(
        ball.pos.x,
        ball.pos.y,
        Params::BALL_WIDTH as u32,
        Params::BALL_HEIGHT as u32,
    )
}

pub struct SdlPlatform<'a> {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    title: Texture<'a>,
    background: Texture<'a>,
    player_right: Texture<'a>,
    player_left: Texture<'a>,
    ball: Texture<'a>,
}

impl<'a> SdlPlatform<'a> {
    /// Builds the platform from an already-created canvas and event pump,
    /// turning the rendered title surface into a texture and loading every
    /// image up front. Any failure here is fatal to startup.
    pub fn new(
        canvas: Canvas<Window>,
        event_pump: EventPump,
        texture_creator: &'a TextureCreator<WindowContext>,
        title_surface: &Surface,
    ) -> Result<Self, SetupError> {
        let title = texture_creator
            .create_texture_from_surface(title_surface)
            .map_err(|err| SetupError::Texture(format!("title: {}", err)))?;

        Ok(Self {
            canvas,
            event_pump,
            title,
            background: load_texture(texture_creator, BACKGROUND_PATH)?,
            player_right: load_texture(texture_creator, PLAYER1_PATH)?,
            player_left: load_texture(texture_creator, PLAYER2_PATH)?,
            ball: load_texture(texture_creator, BALL_PATH)?,
        })
    }

}

fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Result<Texture<'a>, SetupError> {
    log::debug!("loading texture {}", path);
    texture_creator
        .load_texture(path)
        .map_err(|err| SetupError::Texture(format!("{}: {}", path, err)))
}

impl Platform for SdlPlatform<'_> {
    fn poll_event(&mut self) -> Option<Event> {
        // Skip raw events the game does not care about.
        while let Some(raw) = self.event_pump.poll_event() {
            if let Some(event) = map_event(raw) {
                return Some(event);
            }
        }
        None
    }

    fn show_title(&mut self) -> Result<(), String> {
        self.canvas.clear();
        self.canvas.copy(&self.title, None, None)?;
        self.canvas.present();
        Ok(())
    }

    fn draw_frame(&mut self, state: &GameState) -> Result<(), String> {
        self.canvas.clear();
        for op in frame_draw_list(state) {
            match op {
                DrawOp::Background => self.canvas.copy(&self.background, None, None)?,
                DrawOp::PaddleRight(rect) => self.canvas.copy(&self.player_right, None, rect)?,
                DrawOp::PaddleLeft(rect) => self.canvas.copy(&self.player_left, None, rect)?,
                DrawOp::Ball(rect) => self.canvas.copy(&self.ball, None, rect)?,
            }
        }
        self.canvas.present();
        Ok(())
    }

    fn delay(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
