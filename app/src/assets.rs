//! Asset loading.
//!
//! Frames are resolved from an explicit ordered manifest, never by scanning
//! the asset directory: the frame order is part of the animation, not of the
//! filesystem. Any missing or undecodable file is a fatal startup error.

use std::path::Path;

use anyhow::{Context as _, Result};
use image::RgbaImage;
use perrito_core::{SpriteState, TrackSet};

const IDLE_FRAMES: &[&str] = &[
    "idle/idle_0.png",
    "idle/idle_1.png",
    "idle/idle_2.png",
    "idle/idle_3.png",
];

const WALK_FRAMES: &[&str] = &[
    "walk/walk_0.png",
    "walk/walk_1.png",
    "walk/walk_2.png",
    "walk/walk_3.png",
    "walk/walk_4.png",
    "walk/walk_5.png",
];

const DEAD_FRAMES: &[&str] = &[
    "dead/dead_0.png",
    "dead/dead_1.png",
    "dead/dead_2.png",
    "dead/dead_3.png",
    "dead/dead_4.png",
    "dead/dead_5.png",
    "dead/dead_6.png",
    "dead/dead_7.png",
];

const MINE_GLYPH: &str = "bomb.png";
const UI_FONT: &str = "font.ttf";

/// Everything the renderer needs from disk, loaded once at startup.
pub struct Assets {
    idle: Vec<RgbaImage>,
    walking: Vec<RgbaImage>,
    dead: Vec<RgbaImage>,
    mine: RgbaImage,
    pub font_data: Vec<u8>,
}

impl Assets {
    pub fn load(dir: &Path) -> Result<Self> {
        let load_track = |paths: &[&str]| -> Result<Vec<RgbaImage>> {
            paths.iter().map(|rel| load_image(&dir.join(rel))).collect()
        };

        let assets = Self {
            idle: load_track(IDLE_FRAMES)?,
            walking: load_track(WALK_FRAMES)?,
            dead: load_track(DEAD_FRAMES)?,
            mine: load_image(&dir.join(MINE_GLYPH))?,
            font_data: std::fs::read(dir.join(UI_FONT))
                .with_context(|| format!("reading {}", dir.join(UI_FONT).display()))?,
        };

        log::info!(
            "loaded {} animation frames and the mine glyph from {}",
            assets.idle.len() + assets.walking.len() + assets.dead.len(),
            dir.display()
        );
        Ok(assets)
    }

    /// The ordered frames of one animation track.
    pub fn frames(&self, state: SpriteState) -> &[RgbaImage] {
        use SpriteState::*;
        match state {
            Idle => &self.idle,
            Walking => &self.walking,
            Dead => &self.dead,
        }
    }

    pub fn mine(&self) -> &RgbaImage {
        &self.mine
    }

    /// Track lengths for the sprite state machine; the manifest is the single
    /// source of truth for frame counts.
    pub fn tracks(&self) -> TrackSet {
        TrackSet {
            idle: self.idle.len(),
            walking: self.walking.len(),
            dead: self.dead.len(),
        }
    }
}

fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).with_context(|| format!("loading {}", path.display()))?;
    Ok(img.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_tracks_are_nonempty() {
        assert!(!IDLE_FRAMES.is_empty());
        assert!(!WALK_FRAMES.is_empty());
        assert!(!DEAD_FRAMES.is_empty());
    }

    #[test]
    fn manifest_entries_are_distinct() {
        let mut all: Vec<&str> = [IDLE_FRAMES, WALK_FRAMES, DEAD_FRAMES].concat();
        all.push(MINE_GLYPH);
        all.push(UI_FONT);
        let total = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), total);
    }

    #[test]
    fn missing_asset_dir_is_an_error() {
        assert!(Assets::load(Path::new("/nonexistent/assets")).is_err());
    }
}
