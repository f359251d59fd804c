//! Drag-script replay
//!
//! A script names one shape and a list of pointer actions. Running it drives
//! a [`PointEditor`] exactly the way a host tool would and records what the
//! host would have seen: undo transactions, spawned items and warnings.

use anyhow::Context;
use boardedit_core::{ArcEditMode, Point};
use boardedit_editor::{DragOutcome, PointEditor, RecordingCommit, RecordingWarnings, Shape, Unlocked};
use boardedit_settings::EditorSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// A scripted editing session.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DragScript {
    pub shape: Shape,
    /// Overrides the configured arc edit mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arc_edit_mode: Option<ArcEditMode>,
    #[serde(default)]
    pub actions: Vec<ScriptAction>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptAction {
    /// Press at `from`, move through `path`, then release (or cancel).
    Drag {
        from: Point,
        path: Vec<Point>,
        #[serde(default)]
        alt_constraint: bool,
        #[serde(default)]
        cancel: bool,
    },
    AddCorner {
        at: Point,
    },
    RemoveCorner {
        at: Point,
    },
    ToggleArcMode,
}

/// What happened to one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepResult {
    Committed,
    Rejected { reason: String },
    Cancelled,
    Unchanged,
    /// Nothing under the cursor, or the edit was refused
    Ignored,
    ArcMode { mode: ArcEditMode },
}

/// Everything the host would have observed while the script ran.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub shape: Option<Shape>,
    pub steps: Vec<StepResult>,
    /// Undo transaction messages, in order
    pub transactions: Vec<String>,
    pub spawned: Vec<Shape>,
    pub reverts: usize,
    pub warnings: Vec<String>,
}

/// Read a JSON drag script.
pub fn load_script(path: &Path) -> anyhow::Result<DragScript> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading drag script {}", path.display()))?;
    let script = serde_json::from_str(&content)
        .with_context(|| format!("parsing drag script {}", path.display()))?;
    Ok(script)
}

/// Run `script` against a fresh editor.
pub fn run_script(script: &DragScript, mut settings: EditorSettings) -> ReplayReport {
    if let Some(mode) = script.arc_edit_mode {
        settings.arc_edit_mode = mode;
    }

    let mut editor = PointEditor::new(settings);
    let mut commit = RecordingCommit::default();
    let mut warnings = RecordingWarnings::default();
    editor.select(Some(script.shape.clone()));

    let mut steps = Vec::with_capacity(script.actions.len());
    for action in &script.actions {
        let step = match action {
            ScriptAction::Drag {
                from,
                path,
                alt_constraint,
                cancel,
            } => {
                editor.pointer_moved(*from);
                if !editor.begin_drag(*from) {
                    debug!("No handle at {}", from);
                    StepResult::Ignored
                } else {
                    for cursor in path {
                        editor.drag_to(*cursor, *alt_constraint, &mut commit);
                    }
                    if *cancel {
                        editor.cancel_drag(&mut commit);
                        StepResult::Cancelled
                    } else {
                        match editor.end_drag(&mut commit, &mut warnings) {
                            DragOutcome::Committed => StepResult::Committed,
                            DragOutcome::Rejected(err) => StepResult::Rejected {
                                reason: err.to_string(),
                            },
                            DragOutcome::Unchanged => StepResult::Unchanged,
                            DragOutcome::NotDragging => StepResult::Ignored,
                        }
                    }
                }
            }
            ScriptAction::AddCorner { at } => {
                if editor.add_corner(*at, &Unlocked, &mut commit, &mut warnings) {
                    StepResult::Committed
                } else {
                    StepResult::Ignored
                }
            }
            ScriptAction::RemoveCorner { at } => {
                editor.pointer_moved(*at);
                if editor.remove_corner(&Unlocked, &mut commit, &mut warnings) {
                    StepResult::Committed
                } else {
                    StepResult::Ignored
                }
            }
            ScriptAction::ToggleArcMode => StepResult::ArcMode {
                mode: editor.toggle_arc_edit_mode(),
            },
        };
        steps.push(step);
    }

    info!(
        "Replayed {} actions, {} transactions, {} warnings",
        steps.len(),
        commit.pushed.len(),
        warnings.messages.len()
    );

    ReplayReport {
        shape: editor.shape().cloned(),
        steps,
        transactions: commit.pushed.into_iter().map(|(message, _)| message).collect(),
        spawned: commit.added,
        reverts: commit.reverts,
        warnings: warnings.messages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardedit_editor::{Arc, PolygonOutline, Segment};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn settings() -> EditorSettings {
        EditorSettings {
            hover_tolerance: 3,
            min_arc_radius: 1,
            min_rect_size: 10,
            hole_clearance: 4,
            ..EditorSettings::default()
        }
    }

    fn square() -> Shape {
        PolygonOutline::new(vec![
            Point::new(0, 0),
            Point::new(100, 0),
            Point::new(100, 100),
            Point::new(0, 100),
        ])
        .into()
    }

    #[test]
    fn test_script_parses_tagged_actions() {
        let json = r#"{
            "shape": { "kind": "segment", "start": { "x": 0, "y": 0 }, "end": { "x": 100, "y": 0 } },
            "actions": [
                { "action": "drag", "from": { "x": 100, "y": 0 }, "path": [{ "x": 80, "y": 76 }], "alt_constraint": true },
                { "action": "toggle_arc_mode" }
            ]
        }"#;
        let script: DragScript = serde_json::from_str(json).unwrap();

        assert_eq!(script.shape, Shape::Segment(Segment::new(Point::new(0, 0), Point::new(100, 0))));
        assert_eq!(script.arc_edit_mode, None);
        assert_eq!(script.actions.len(), 2);
        assert!(matches!(
            script.actions[0],
            ScriptAction::Drag { alt_constraint: true, cancel: false, .. }
        ));
    }

    #[test]
    fn test_replay_commits_and_rejects() {
        let script = DragScript {
            shape: square(),
            arc_edit_mode: None,
            actions: vec![
                ScriptAction::Drag {
                    from: Point::new(100, 100),
                    path: vec![Point::new(120, 110)],
                    alt_constraint: false,
                    cancel: false,
                },
                ScriptAction::Drag {
                    from: Point::new(120, 110),
                    path: vec![Point::new(-10, 50)],
                    alt_constraint: false,
                    cancel: false,
                },
                ScriptAction::Drag {
                    from: Point::new(500, 500),
                    path: vec![],
                    alt_constraint: false,
                    cancel: false,
                },
            ],
        };

        let report = run_script(&script, settings());
        assert_eq!(report.steps[0], StepResult::Committed);
        assert_eq!(
            report.steps[1],
            StepResult::Rejected {
                reason: "Contour 0 intersects itself".to_string()
            }
        );
        assert_eq!(report.steps[2], StepResult::Ignored);
        assert_eq!(report.transactions, vec!["Drag point".to_string()]);
        assert_eq!(report.reverts, 1);
        assert_eq!(report.warnings.len(), 1);

        let Some(Shape::Outline(outline)) = report.shape else {
            panic!("expected outline");
        };
        assert_eq!(outline.vertex(0, 2), Some(Point::new(120, 110)));
    }

    #[test]
    fn test_replay_cancel_and_corners() {
        let script = DragScript {
            shape: square(),
            arc_edit_mode: Some(ArcEditMode::KeepCenter),
            actions: vec![
                ScriptAction::Drag {
                    from: Point::new(0, 0),
                    path: vec![Point::new(-30, -30)],
                    alt_constraint: false,
                    cancel: true,
                },
                ScriptAction::AddCorner { at: Point::new(50, 2) },
                ScriptAction::RemoveCorner { at: Point::new(100, 100) },
                ScriptAction::ToggleArcMode,
            ],
        };

        let report = run_script(&script, settings());
        assert_eq!(
            report.steps,
            vec![
                StepResult::Cancelled,
                StepResult::Committed,
                StepResult::Committed,
                StepResult::ArcMode {
                    mode: ArcEditMode::KeepEndpointsOrTangent
                },
            ]
        );
        assert_eq!(
            report.transactions,
            vec!["Add corner".to_string(), "Remove corner".to_string()]
        );
        assert_eq!(report.reverts, 1);

        let Some(Shape::Outline(outline)) = report.shape else {
            panic!("expected outline");
        };
        assert_eq!(outline.vertex_count(), 4);
        assert_eq!(outline.vertex(0, 0), Some(Point::new(0, 0)));
        assert_eq!(outline.vertex(0, 1), Some(Point::new(50, 0)));
    }

    fn write_script(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_arc_script_keeps_center() {
        let file = write_script(
            r#"{
                "shape": {
                    "kind": "arc",
                    "start": { "x": 10, "y": 0 },
                    "mid": { "x": 7, "y": 7 },
                    "end": { "x": 0, "y": 10 },
                    "center": { "x": 0, "y": 0 }
                },
                "arc_edit_mode": "keep_center",
                "actions": [
                    { "action": "drag", "from": { "x": 10, "y": 0 }, "path": [{ "x": 0, "y": -10 }] }
                ]
            }"#,
        );

        let script = load_script(file.path()).unwrap();
        let report = run_script(&script, settings());

        assert_eq!(report.steps, vec![StepResult::Committed]);
        assert_eq!(report.transactions, vec!["Drag point".to_string()]);
        assert_eq!(
            report.shape,
            Some(Shape::Arc(Arc::new(
                Point::new(0, -10),
                Point::new(10, 0),
                Point::new(0, 10),
                Point::new(0, 0),
            )))
        );
    }

    #[test]
    fn test_pad_script_is_pinned() {
        let file = write_script(
            r#"{
                "shape": {
                    "kind": "rect_pad",
                    "top_left": { "x": 0, "y": 0 },
                    "bottom_right": { "x": 100, "y": 50 },
                    "hole": { "min": { "x": 40, "y": 15 }, "max": { "x": 60, "y": 35 } }
                },
                "actions": [
                    { "action": "drag", "from": { "x": 100, "y": 50 }, "path": [{ "x": 45, "y": 20 }] }
                ]
            }"#,
        );

        let report = run_script(&load_script(file.path()).unwrap(), settings());
        let Some(Shape::RectPad(pad)) = report.shape else {
            panic!("expected pad, got {:?}", report.shape);
        };
        assert_eq!(pad.top_left, Point::new(0, 0));
        assert_eq!(pad.bottom_right, Point::new(64, 39));
    }

    #[test]
    fn test_segment_split_reports_spawned_half() {
        let file = write_script(
            r#"{
                "shape": { "kind": "segment", "start": { "x": 0, "y": 0 }, "end": { "x": 100, "y": 0 } },
                "actions": [
                    { "action": "add_corner", "at": { "x": 30, "y": 5 } }
                ]
            }"#,
        );

        let report = run_script(&load_script(file.path()).unwrap(), settings());
        assert_eq!(report.transactions, vec!["Split segment".to_string()]);
        assert_eq!(report.spawned.len(), 1);
    }

    #[test]
    fn test_malformed_script_is_an_error() {
        let file = write_script(r#"{ "shape": { "kind": "circle" } }"#);
        let err = load_script(file.path()).unwrap_err();
        assert!(err.to_string().contains("parsing drag script"));
    }

    #[test]
    fn test_report_serializes() {
        let file = write_script(
            r#"{
                "shape": { "kind": "segment", "start": { "x": 0, "y": 0 }, "end": { "x": 100, "y": 0 } },
                "actions": [ { "action": "toggle_arc_mode" } ]
            }"#,
        );
        let report = run_script(&load_script(file.path()).unwrap(), settings());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["steps"][0]["arc_mode"]["mode"], "keep_center");
    }
}
