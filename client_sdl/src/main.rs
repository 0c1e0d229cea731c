//! Desktop Pong client: SDL2 window, textures, and the frame loop.
//!
//! Setup is fail-fast: any init, window, font, or texture failure aborts
//! startup with a message and a non-zero exit status.

mod app;
mod error;
mod events;
mod gateway;
mod sdl_platform;

use sdl2::image::InitFlag;
use sdl2::pixels::Color;

use game_core::{GameState, Params};

use error::SetupError;
use sdl_platform::SdlPlatform;

const WINDOW_TITLE: &str = "Pong";
const FONT_PATH: &str = "resources/fonts/Arial.ttf";
const FONT_POINT_SIZE: u16 = 20;
const TITLE_COLOR: Color = Color::RGBA(255, 255, 255, 255);

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), SetupError> {
    let sdl = sdl2::init().map_err(SetupError::Init)?;
    let video = sdl.video().map_err(SetupError::Init)?;
    let _image = sdl2::image::init(InitFlag::PNG).map_err(SetupError::Init)?;
    let ttf = sdl2::ttf::init().map_err(|err| SetupError::Init(err.to_string()))?;

    let window = video
        .window(
            WINDOW_TITLE,
            Params::FIELD_WIDTH as u32,
            Params::FIELD_HEIGHT as u32,
        )
        .position_centered()
        .build()
        .map_err(|err| SetupError::Window(err.to_string()))?;
    let canvas = window
        .into_canvas()
        .build()
        .map_err(|err| SetupError::Window(err.to_string()))?;
    let event_pump = sdl.event_pump().map_err(SetupError::Init)?;

    // The creator owns the texture storage; it must outlive the platform.
    let texture_creator = canvas.texture_creator();

    let font = ttf
        .load_font(FONT_PATH, FONT_POINT_SIZE)
        .map_err(SetupError::Font)?;
    let title_surface = font
        .render(WINDOW_TITLE)
        .solid(TITLE_COLOR)
        .map_err(|err| SetupError::Font(err.to_string()))?;

    let mut platform = SdlPlatform::new(canvas, event_pump, &texture_creator, &title_surface)?;
    let mut state = GameState::new();

    log::info!("starting game loop");
    app::run(&mut platform, &mut state);
    Ok(())
}
