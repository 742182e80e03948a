//! Level loading and saving
//!
//! Levels are plain RON (Rusty Object Notation) files. Loading validates
//! the layout before handing it to the sim so a malformed file fails at
//! the door instead of mid-game.

use super::{Level, Size};
use crate::math::Vec2;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Validation limits to prevent resource exhaustion from malicious files
pub mod limits {
    /// Maximum number of ground tiles
    pub const MAX_TILES: usize = 1024;
    /// Maximum entities of any one kind
    pub const MAX_ENTITIES: usize = 256;
    /// Maximum string length for ids and names
    pub const MAX_STRING_LEN: usize = 256;
    /// Maximum coordinate value (prevents overflow issues)
    pub const MAX_COORD: f32 = 1_000_000.0;
}

/// Error type for level loading
#[derive(Debug)]
pub enum LevelError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for LevelError {
    fn from(e: ron::error::SpannedError) -> Self {
        LevelError::ParseError(e)
    }
}

impl From<ron::Error> for LevelError {
    fn from(e: ron::Error) -> Self {
        LevelError::SerializeError(e)
    }
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::IoError(e) => write!(f, "IO error: {}", e),
            LevelError::ParseError(e) => write!(f, "Parse error: {}", e),
            LevelError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            LevelError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for LevelError {}

/// Check if a float is valid (not NaN or Inf)
fn is_valid_float(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

fn validate_pos(pos: Vec2, context: &str) -> Result<(), String> {
    if !is_valid_float(pos.x) || !is_valid_float(pos.y) {
        return Err(format!("{}: invalid position ({}, {})", context, pos.x, pos.y));
    }
    Ok(())
}

fn validate_size(size: Size, context: &str) -> Result<(), String> {
    if !is_valid_float(size.w) || !is_valid_float(size.h) || size.w <= 0.0 || size.h <= 0.0 {
        return Err(format!("{}: invalid size ({} x {})", context, size.w, size.h));
    }
    Ok(())
}

fn validate_id<'a>(seen: &mut HashSet<&'a str>, id: &'a str, context: &str) -> Result<(), String> {
    if id.is_empty() || id.len() > limits::MAX_STRING_LEN {
        return Err(format!("{}: bad id length {}", context, id.len()));
    }
    if !seen.insert(id) {
        return Err(format!("{}: duplicate id '{}'", context, id));
    }
    Ok(())
}

/// Validate a whole level layout
pub fn validate_level(level: &Level) -> Result<(), LevelError> {
    let result = (|| -> Result<(), String> {
        if level.name.len() > limits::MAX_STRING_LEN {
            return Err(format!("level name too long ({})", level.name.len()));
        }
        if !is_valid_float(level.canvas.width)
            || !is_valid_float(level.canvas.height)
            || level.canvas.width <= 0.0
            || level.canvas.height <= 0.0
        {
            return Err("invalid canvas dimensions".into());
        }

        let tiles = level.ground.tiles.len();
        if tiles == 0 || tiles > limits::MAX_TILES {
            return Err(format!("tile count {} out of range (1..={})", tiles, limits::MAX_TILES));
        }
        if level.ground.tile_width <= 0.0 || level.ground.height <= 0.0 {
            return Err("invalid ground dimensions".into());
        }

        for (what, count) in [
            ("platforms", level.platforms.len()),
            ("clouds", level.clouds.len()),
            ("seeds", level.seeds.len()),
        ] {
            if count > limits::MAX_ENTITIES {
                return Err(format!("too many {} ({} > {})", what, count, limits::MAX_ENTITIES));
            }
        }

        let mut seen = HashSet::new();
        for p in &level.platforms {
            validate_id(&mut seen, &p.id, "platform")?;
            validate_pos(p.pos, &p.id)?;
            validate_size(p.size, &p.id)?;
        }
        for c in &level.clouds {
            validate_id(&mut seen, &c.id, "cloud")?;
            validate_pos(c.pos, &c.id)?;
        }
        for s in &level.seeds {
            validate_id(&mut seen, &s.id, "seed")?;
            validate_pos(s.pos, &s.id)?;
        }
        if let Some(e) = &level.enemy {
            validate_id(&mut seen, &e.id, "enemy")?;
            validate_pos(e.pos, &e.id)?;
            validate_size(e.size, &e.id)?;
            if !is_valid_float(e.speed) {
                return Err(format!("{}: invalid speed", e.id));
            }
        }
        if let Some(p) = &level.portal {
            validate_id(&mut seen, &p.id, "portal")?;
            validate_pos(p.pos, &p.id)?;
            validate_size(p.size, &p.id)?;
        }

        validate_pos(level.player.spawn, "player spawn")?;
        validate_size(level.player.size, "player")?;
        for (name, v) in [
            ("gravity", level.physics.gravity),
            ("move_speed", level.physics.move_speed),
            ("jump_speed", level.physics.jump_speed),
            ("scroll_speed", level.physics.scroll_speed),
            ("stomp_bounce", level.physics.stomp_bounce),
        ] {
            if !is_valid_float(v) {
                return Err(format!("physics.{} is invalid", name));
            }
        }
        Ok(())
    })();

    result.map_err(LevelError::ValidationError)
}

/// Load and validate a level from a RON file
pub fn load_level(path: impl AsRef<Path>) -> Result<Level, LevelError> {
    let text = fs::read_to_string(path)?;
    let level: Level = ron::from_str(&text)?;
    validate_level(&level)?;
    Ok(level)
}

/// Save a level to a RON file (pretty-printed)
pub fn save_level(level: &Level, path: impl AsRef<Path>) -> Result<(), LevelError> {
    validate_level(level)?;
    let config = ron::ser::PrettyConfig::new().depth_limit(4);
    let text = ron::ser::to_string_pretty(level, config)?;
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn test_demo_level_validates() {
        assert!(validate_level(&Level::demo()).is_ok());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.ron");

        let level = Level::demo();
        save_level(&level, &path).unwrap();
        let loaded = load_level(&path).unwrap();

        assert_eq!(loaded.name, level.name);
        assert_eq!(loaded.ground.tiles, level.ground.tiles);
        assert_eq!(loaded.seeds.len(), level.seeds.len());
        assert_eq!(loaded.seeds[0].pos, level.seeds[0].pos);
        assert_eq!(loaded.platforms[3].id, "platform-3");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut level = Level::demo();
        level.seeds[1].id = level.seeds[0].id.clone();
        match validate_level(&level) {
            Err(LevelError::ValidationError(msg)) => assert!(msg.contains("duplicate")),
            other => panic!("expected validation error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_nan_position_rejected() {
        let mut level = Level::demo();
        level.seeds[0].pos.x = f32::NAN;
        assert!(matches!(
            validate_level(&level),
            Err(LevelError::ValidationError(_))
        ));
    }

    #[test]
    fn test_empty_ground_rejected() {
        let mut level = Level::demo();
        level.ground.tiles.clear();
        assert!(validate_level(&level).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_level("/nonexistent/level.ron").unwrap_err();
        assert!(matches!(err, LevelError::IoError(_)));
    }
}
