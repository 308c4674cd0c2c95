pub mod error;
pub mod events;
#[cfg(feature = "native")]
pub mod glutils;
pub mod platform;
#[cfg(any(test, feature = "testing"))]
pub mod recording;
#[cfg(feature = "native")]
pub mod system;

pub use error::BackendError;
pub use events::{IoEvent, KeyCode, MouseButtonId};
pub use platform::{Backend, ContextSettings, MusicHandle, LOOP_FOREVER};
