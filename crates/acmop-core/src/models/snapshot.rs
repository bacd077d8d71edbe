//! Diagnostic registry snapshots attached to resolution errors.

use serde::{Deserialize, Serialize};

use super::ParameterKind;

/// One row of a registry dump: name, kind, and value (if set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub name: String,
    pub kind: ParameterKind,
    pub value: Option<f64>,
}

/// Render a snapshot one parameter per line, tab-indented.
pub fn render_snapshot(entries: &[SnapshotEntry]) -> String {
    entries
        .iter()
        .map(|e| match e.value {
            Some(v) => format!("\t{} [{}] = {}", e.name, e.kind, v),
            None => format!("\t{} [{}] = <unset>", e.name, e.kind),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
