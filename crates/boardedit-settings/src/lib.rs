//! boardedit settings crate
//!
//! Handles the point editor's user preferences and their persistence.

pub mod config;
pub mod error;

pub use config::{ArcEditMode, Config, ConstraintMode, EditorSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
