use thiserror::Error;

/// Failures reported by a [`crate::Backend`] implementation.
#[derive(Debug, Error)]
pub enum BackendError {
    /// SDL itself or one of its subsystems failed to initialize.
    #[error("SDL initialization failure: {0}")]
    Init(String),

    #[error("error while building OpenGL window: {0}")]
    Window(String),

    #[error("OpenGL context creation failure: {0}")]
    GlContext(String),

    /// `glGetError` returned something other than `GL_NO_ERROR`.
    #[error("OpenGL error 0x{0:04x}")]
    Gl(u32),

    /// The operation does not fit the current context lifecycle, e.g. a
    /// second create without a destroy in between.
    #[error("context state: {0}")]
    ContextState(&'static str),
}
