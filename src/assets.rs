//! Sprite sheet loading
//!
//! Every texture is optional. A missing or unreadable file is reported
//! once on stderr and the renderer falls back to flat-color rectangles,
//! so the game always starts.

use macroquad::prelude::{load_texture, FilterMode, Texture2D};

use crate::anim::SpriteSheet;

/// Sheet geometry. Frame sizes are fixed by the art, not the level data:
/// every character sheet is a 64x64 strip, the portal is a 96x96 3x2 grid.
pub struct SheetSet {
    pub character: SpriteSheet,
    pub portal: SpriteSheet,
}

impl SheetSet {
    pub fn new() -> Self {
        Self {
            character: SpriteSheet::strip(64.0, 64.0),
            portal: SpriteSheet::grid(3, 2, 96.0, 96.0),
        }
    }
}

impl Default for SheetSet {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Assets {
    pub sheets: SheetSet,
    pub idle: Option<Texture2D>,
    pub side_idle: Option<Texture2D>,
    pub walk: Option<Texture2D>,
    pub walk_front: Option<Texture2D>,
    pub jump_side: Option<Texture2D>,
    pub jump_front: Option<Texture2D>,
    pub seed: Option<Texture2D>,
    pub enemy: Option<Texture2D>,
    pub portal: Option<Texture2D>,
    pub cloud: Option<Texture2D>,
    pub ground: Option<Texture2D>,
    pub platform: Option<Texture2D>,
    pub background: Option<Texture2D>,
}

async fn try_load(path: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Nearest);
            Some(texture)
        }
        Err(e) => {
            eprintln!("Failed to load texture {}: {}", path, e);
            None
        }
    }
}

impl Assets {
    /// Load every sheet from `dir`. Missing files degrade to flat colors
    /// rather than failing the boot.
    pub async fn load(dir: &str) -> Self {
        Self {
            sheets: SheetSet::new(),
            idle: try_load(&format!("{}/idle.png", dir)).await,
            side_idle: try_load(&format!("{}/side_idle.png", dir)).await,
            walk: try_load(&format!("{}/walk.png", dir)).await,
            walk_front: try_load(&format!("{}/walk_front.png", dir)).await,
            jump_side: try_load(&format!("{}/jump_side.png", dir)).await,
            jump_front: try_load(&format!("{}/jump_front.png", dir)).await,
            seed: try_load(&format!("{}/seed.png", dir)).await,
            enemy: try_load(&format!("{}/skull.png", dir)).await,
            portal: try_load(&format!("{}/portal.png", dir)).await,
            cloud: try_load(&format!("{}/cloud.png", dir)).await,
            ground: try_load(&format!("{}/ground.png", dir)).await,
            platform: try_load(&format!("{}/platform.png", dir)).await,
            background: try_load(&format!("{}/background.png", dir)).await,
        }
    }

    /// No textures at all; everything draws as flat rectangles.
    pub fn empty() -> Self {
        Self {
            sheets: SheetSet::new(),
            idle: None,
            side_idle: None,
            walk: None,
            walk_front: None,
            jump_side: None,
            jump_front: None,
            seed: None,
            enemy: None,
            portal: None,
            cloud: None,
            ground: None,
            platform: None,
            background: None,
        }
    }
}
