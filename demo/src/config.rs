use backend::{ContextSettings, LOOP_FOREVER};
use std::path::PathBuf;

const CAPTION: &str = "Little Polygon Demo";
// 3x scaled 320x115 playfield
const WIDTH: u32 = 3 * 320;
const HEIGHT: u32 = 3 * 115;
const MUSIC: &str = "song.mid";
const ASSET_BUNDLE: &str = "demo.bin";

/// Startup parameters of a demo program.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub caption: String,
    pub width: u32,
    pub height: u32,
    pub asset_path: PathBuf,
    pub music_path: PathBuf,
    pub music_loops: i32,
    pub clear_color: Option<[f32; 4]>,
}

impl DemoConfig {
    /// The demo that opens its asset bundle and keeps GL's default clear color.
    pub fn demo() -> DemoConfig {
        DemoConfig {
            caption: CAPTION.to_string(),
            width: WIDTH,
            height: HEIGHT,
            asset_path: PathBuf::from(ASSET_BUNDLE),
            music_path: PathBuf::from(MUSIC),
            music_loops: LOOP_FOREVER,
            clear_color: None,
        }
    }

    /// Same window without an asset bundle, cleared to a light blue.
    pub fn mono() -> DemoConfig {
        DemoConfig {
            asset_path: PathBuf::new(),
            clear_color: Some([0.5, 0.6, 0.8, 0.0]),
            ..DemoConfig::demo()
        }
    }

    pub fn context_settings(&self) -> ContextSettings {
        let settings = ContextSettings::new(&self.caption, self.width, self.height)
            .with_asset_path(&self.asset_path);
        match self.clear_color {
            Some([r, g, b, a]) => settings.with_clear_color(r, g, b, a),
            None => settings,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_share_window_and_music() {
        let demo = DemoConfig::demo();
        let mono = DemoConfig::mono();
        assert_eq!((demo.width, demo.height), (960, 345));
        assert_eq!((mono.width, mono.height), (960, 345));
        assert_eq!(demo.caption, mono.caption);
        assert_eq!(demo.music_path, PathBuf::from("song.mid"));
        assert_eq!(mono.music_loops, -1);
    }

    #[test]
    fn mono_has_no_bundle_but_a_clear_color() {
        let settings = DemoConfig::mono().context_settings();
        assert!(!settings.has_asset_bundle());
        assert_eq!(settings.clear_color, Some([0.5, 0.6, 0.8, 0.0]));
    }

    #[test]
    fn demo_opens_its_bundle() {
        let settings = DemoConfig::demo().context_settings();
        assert_eq!(settings.asset_path, PathBuf::from("demo.bin"));
        assert_eq!(settings.clear_color, None);
        assert_eq!(settings.caption, "Little Polygon Demo");
    }
}
