use super::error::BackendError;
use super::events::IoEvent;
use std::path::{Path, PathBuf};

/// `loops` value for [`Backend::play_music`] that repeats the track forever.
pub const LOOP_FOREVER: i32 = -1;

const DEFAULT_CAPTION: &str = "Little Polygon Context";
const DEFAULT_SIZE: (u32, u32) = (1136, 640);

/// Everything the native side needs to open the window and rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextSettings {
    pub caption: String,
    pub width: u32,
    pub height: u32,
    /// Asset bundle to open with the context, empty for none.
    pub asset_path: PathBuf,
    /// Applied once at creation, otherwise GL's default (black) is kept.
    pub clear_color: Option<[f32; 4]>,
}

impl ContextSettings {
    pub fn new(caption: &str, width: u32, height: u32) -> ContextSettings {
        ContextSettings {
            caption: caption.to_string(),
            width,
            height,
            asset_path: PathBuf::new(),
            clear_color: None,
        }
    }

    pub fn with_asset_path(mut self, path: impl Into<PathBuf>) -> ContextSettings {
        self.asset_path = path.into();
        self
    }

    pub fn with_clear_color(mut self, r: f32, g: f32, b: f32, a: f32) -> ContextSettings {
        self.clear_color = Some([r, g, b, a]);
        self
    }

    /// Window size to request. A zero width selects the default surface.
    pub fn resolved_size(&self) -> (u32, u32) {
        if self.width == 0 {
            DEFAULT_SIZE
        } else {
            (self.width, self.height)
        }
    }

    pub fn resolved_caption(&self) -> &str {
        if self.caption.is_empty() {
            DEFAULT_CAPTION
        } else {
            &self.caption
        }
    }

    pub fn has_asset_bundle(&self) -> bool {
        !self.asset_path.as_os_str().is_empty()
    }
}

/// Opaque reference to a music track loaded by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MusicHandle(usize);

impl MusicHandle {
    pub fn new(id: usize) -> MusicHandle {
        MusicHandle(id)
    }

    pub fn id(&self) -> usize {
        self.0
    }
}

/// The native services the demo loop drives: context lifecycle, frame
/// output, music and the event queue.
pub trait Backend {
    fn create_context(&mut self, settings: &ContextSettings) -> Result<(), BackendError>;

    fn destroy_context(&mut self) -> Result<(), BackendError>;

    fn clear_screen(&mut self);

    /// Swaps the back buffer to the display.
    fn present_frame(&mut self);

    /// Next pending event, never blocks. `None` once the queue is empty.
    fn poll_event(&mut self) -> Option<IoEvent>;

    /// `None` when the track cannot be loaded; callers skip playback then.
    fn load_music(&mut self, path: &Path) -> Option<MusicHandle>;

    fn play_music(&mut self, music: MusicHandle, loops: i32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_selects_default_surface() {
        let settings = ContextSettings::new("x", 0, 10);
        assert_eq!(settings.resolved_size(), (1136, 640));
        assert_eq!(ContextSettings::new("x", 960, 345).resolved_size(), (960, 345));
    }

    #[test]
    fn empty_caption_falls_back() {
        assert_eq!(
            ContextSettings::new("", 1, 1).resolved_caption(),
            "Little Polygon Context"
        );
        assert_eq!(ContextSettings::new("demo", 1, 1).resolved_caption(), "demo");
    }

    #[test]
    fn asset_bundle_is_optional() {
        let settings = ContextSettings::new("demo", 1, 1);
        assert!(!settings.has_asset_bundle());
        assert!(settings.with_asset_path("demo.bin").has_asset_bundle());
    }
}
