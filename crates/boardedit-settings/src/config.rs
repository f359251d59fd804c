//! Point editor configuration
//!
//! Preferences that outlive a single edit (the arc edit mode, snapping
//! behavior) and the geometric limits the engine enforces. Stored as JSON or
//! TOML, by default under the platform config directory.

pub use boardedit_core::{ArcEditMode, ConstraintMode, COORDS_PADDING};

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Point editor settings. All lengths are board internal units (nm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Which invariant arc drags preserve
    pub arc_edit_mode: ArcEditMode,
    /// Snapping applied while the alternate-constraint modifier is held
    pub alt_constraint: ConstraintMode,
    /// Smallest width/height a rectangle can be pinned to
    pub min_rect_size: i32,
    /// Clearance kept between a pad's hole and its outline
    pub hole_clearance: i32,
    /// Pick radius for handles
    pub hover_tolerance: i32,
    /// Arcs below this radius are treated as degenerate
    pub min_arc_radius: i32,
    /// Distance kept from the `i32` coordinate limits
    pub coords_padding: i32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            arc_edit_mode: ArcEditMode::default(),
            alt_constraint: ConstraintMode::default(),
            min_rect_size: 100_000,
            hole_clearance: 100_000,
            hover_tolerance: 250_000,
            min_arc_radius: 1_000,
            coords_padding: COORDS_PADDING,
        }
    }
}

/// Complete configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub editor: EditorSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file location (`<config dir>/boardedit/config.toml`)
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join("boardedit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` when it exists, otherwise return defaults
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
            }
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let editor = &self.editor;

        if editor.min_rect_size <= 0 {
            return Err(invalid("min_rect_size", "must be > 0"));
        }

        if editor.hole_clearance < 0 {
            return Err(invalid("hole_clearance", "must be >= 0"));
        }

        if editor.hover_tolerance <= 0 {
            return Err(invalid("hover_tolerance", "must be > 0"));
        }

        if editor.min_arc_radius <= 0 {
            return Err(invalid("min_arc_radius", "must be > 0"));
        }

        // Leave at least half of the i32 range usable.
        if editor.coords_padding < 0 || editor.coords_padding > i32::MAX / 2 {
            return Err(invalid("coords_padding", "must be within 0..=i32::MAX/2"));
        }

        Ok(())
    }
}

fn invalid(key: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidSetting {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
        }
    }
}
