//! # boardedit
//!
//! Constrained point editing for printed-circuit-board shapes: line
//! segments, arcs, rectangular pads with holes and polygon outlines.
//!
//! ## Architecture
//!
//! The workspace is split into three crates:
//!
//! 1. **boardedit-core** - Points, the safe coordinate domain, edit modes, errors
//! 2. **boardedit-settings** - Editor preferences, JSON/TOML config files
//! 3. **boardedit-editor** - Point sets, arc reconstruction, corner pinning,
//!    outline validation and the drag state machine
//!
//! This root crate wires up logging and a replay tool that runs a scripted
//! sequence of drags against the editor, which is handy for reproducing
//! geometry bugs outside the host application.

pub mod replay;

pub use boardedit_core::{ArcEditMode, ConstraintMode, Error, GeometryError, OutlineError, Point, Result};
pub use boardedit_editor::{
    Arc, DragOutcome, EditState, Hole, PointEditor, PointSet, PolygonOutline, RectPad, Segment, Shape,
};
pub use boardedit_settings::{Config, EditorSettings, SettingsError};
pub use replay::{load_script, run_script, DragScript, ReplayReport, ScriptAction, StepResult};

/// Initialize logging
///
/// Logs go to stderr so that command output on stdout stays machine
/// readable. The level defaults to INFO and can be overridden with
/// `RUST_LOG`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
