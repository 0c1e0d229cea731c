use std::fmt;

/// Error type for the startup path. Any of these aborts the process with a
/// non-zero exit status; a missing texture or font would otherwise leave
/// the renderer drawing garbage for the rest of the session.
#[derive(Debug)]
pub enum SetupError {
    /// SDL or one of its subsystems failed to initialize
    Init(String),
    /// Window or canvas creation failed
    Window(String),
    /// Font could not be opened or the title text could not be rendered
    Font(String),
    /// A texture could not be loaded or created
    Texture(String),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Init(msg) => write!(f, "could not init SDL: {}", msg),
            SetupError::Window(msg) => write!(f, "could not create window: {}", msg),
            SetupError::Font(msg) => write!(f, "could not create font: {}", msg),
            SetupError::Texture(msg) => write!(f, "could not load texture: {}", msg),
        }
    }
}

impl std::error::Error for SetupError {}
