//! Diagram geometry and colors.

use serde::{Deserialize, Serialize};

/// Geometry and palette used by [`render`](crate::render).
///
/// Every field has a default, so a partial YAML or JSON object deserializes
/// into a complete style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramStyle {
    /// Horizontal distance between time columns.
    pub column_spacing: f64,
    /// Vertical distance between qubit wires.
    pub row_spacing: f64,
    /// Space left of the first column; wires start here.
    pub left_margin: f64,
    /// Space above the first wire.
    pub top_margin: f64,
    /// Space right of the wires.
    pub right_margin: f64,
    /// Space below the last wire.
    pub bottom_margin: f64,
    /// Left edge of the `q[i]` wire labels.
    pub label_x: f64,
    /// The diagram is never narrower than this.
    pub min_width: f64,
    /// Largest number of columns that will be drawn.
    pub max_columns: usize,
    /// Side of a gate box.
    pub box_size: f64,
    /// Radius of a control dot.
    pub control_radius: f64,
    /// Radius of the `cx` target ring.
    pub target_radius: f64,
    /// Stroke width for wires and connectors.
    pub stroke_width: f64,
    /// Label font size.
    pub font_size: f64,
    pub background: String,
    pub wire_color: String,
    pub wire_label_color: String,
    pub control_color: String,
    pub gate_fill: String,
    pub gate_stroke: String,
    pub gate_label_color: String,
    pub measure_fill: String,
    pub measure_stroke: String,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        Self {
            column_spacing: 80.0,
            row_spacing: 60.0,
            left_margin: 60.0,
            top_margin: 40.0,
            right_margin: 40.0,
            bottom_margin: 40.0,
            label_x: 20.0,
            min_width: 800.0,
            max_columns: 1000,
            box_size: 40.0,
            control_radius: 6.0,
            target_radius: 15.0,
            stroke_width: 2.0,
            font_size: 14.0,
            background: "white".into(),
            wire_color: "#666".into(),
            wire_label_color: "#333".into(),
            control_color: "#2563eb".into(),
            gate_fill: "#10b981".into(),
            gate_stroke: "#059669".into(),
            gate_label_color: "white".into(),
            measure_fill: "#f59e0b".into(),
            measure_stroke: "#d97706".into(),
        }
    }
}

impl DiagramStyle {
    /// Default style with a different column limit.
    pub fn with_max_columns(max_columns: usize) -> Self {
        Self {
            max_columns,
            ..Self::default()
        }
    }

    /// Horizontal center of a time column.
    #[allow(clippy::cast_precision_loss)]
    pub fn column_x(&self, column: usize) -> f64 {
        self.left_margin + (column as f64 + 1.0) * self.column_spacing
    }

    /// Right end of the qubit wires: half a column past the last column's
    /// center, never beyond the diagram edge.
    pub fn wire_end(&self, width: f64) -> f64 {
        (width - self.right_margin + self.column_spacing / 2.0).min(width)
    }

    /// Vertical position of a qubit wire.
    pub fn wire_y(&self, qubit: u32) -> f64 {
        self.top_margin + f64::from(qubit) * self.row_spacing
    }
}
