//! Drawing primitives and SVG serialization.

use serde::Serialize;

use crate::error::{RenderError, RenderResult};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const FONT_FAMILY: &str = "Arial";

/// Horizontal anchoring of a text primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
}

impl TextAnchor {
    fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
        }
    }
}

/// One drawing element, in pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Primitive {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: String,
        stroke_width: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<String>,
        stroke_width: f64,
        rx: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<String>,
        stroke_width: f64,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        fill: String,
        font_size: f64,
        bold: bool,
        anchor: TextAnchor,
    },
}

impl Primitive {
    /// Whether this is a horizontal line.
    pub fn is_horizontal_line(&self) -> bool {
        matches!(self, Primitive::Line { y1, y2, .. } if y1 == y2)
    }

    fn to_element(&self) -> minidom::Element {
        match self {
            Primitive::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
                stroke_width,
            } => minidom::Element::builder("line", SVG_NS)
                .attr("x1", x1.to_string())
                .attr("y1", y1.to_string())
                .attr("x2", x2.to_string())
                .attr("y2", y2.to_string())
                .attr("stroke", stroke.as_str())
                .attr("stroke-width", stroke_width.to_string())
                .build(),
            Primitive::Rect {
                x,
                y,
                width,
                height,
                fill,
                stroke,
                stroke_width,
                rx,
            } => {
                let mut builder = minidom::Element::builder("rect", SVG_NS)
                    .attr("x", x.to_string())
                    .attr("y", y.to_string())
                    .attr("width", width.to_string())
                    .attr("height", height.to_string())
                    .attr("fill", fill.as_str());
                if let Some(stroke) = stroke {
                    builder = builder
                        .attr("stroke", stroke.as_str())
                        .attr("stroke-width", stroke_width.to_string());
                }
                if *rx > 0.0 {
                    builder = builder.attr("rx", rx.to_string());
                }
                builder.build()
            }
            Primitive::Circle {
                cx,
                cy,
                r,
                fill,
                stroke,
                stroke_width,
            } => {
                let mut builder = minidom::Element::builder("circle", SVG_NS)
                    .attr("cx", cx.to_string())
                    .attr("cy", cy.to_string())
                    .attr("r", r.to_string())
                    .attr("fill", fill.as_str());
                if let Some(stroke) = stroke {
                    builder = builder
                        .attr("stroke", stroke.as_str())
                        .attr("stroke-width", stroke_width.to_string());
                }
                builder.build()
            }
            Primitive::Text {
                x,
                y,
                content,
                fill,
                font_size,
                bold,
                anchor,
            } => {
                let mut builder = minidom::Element::builder("text", SVG_NS)
                    .attr("x", x.to_string())
                    .attr("y", y.to_string())
                    .attr("font-family", FONT_FAMILY)
                    .attr("font-size", font_size.to_string())
                    .attr("fill", fill.as_str())
                    .attr("text-anchor", anchor.as_str());
                if *bold {
                    builder = builder.attr("font-weight", "bold");
                }
                builder.append(content.as_str()).build()
            }
        }
    }
}

/// A laid-out circuit schematic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagram {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Number of qubit wires drawn.
    pub qubit_line_count: u32,
    /// Elements in paint order.
    pub elements: Vec<Primitive>,
}

impl Diagram {
    /// Serialize as a standalone SVG document.
    pub fn to_svg(&self) -> RenderResult<String> {
        let mut document = minidom::Element::builder("svg", SVG_NS)
            .attr("width", self.width.to_string())
            .attr("height", self.height.to_string())
            .attr("viewBox", format!("0 0 {} {}", self.width, self.height))
            .build();

        for element in &self.elements {
            document.append_child(element.to_element());
        }

        let mut output = Vec::new();
        document
            .write_to(&mut output)
            .map_err(|e| RenderError::Svg(e.to_string()))?;
        String::from_utf8(output).map_err(|e| RenderError::Svg(e.to_string()))
    }

    /// Number of horizontal lines, i.e. qubit wires and nothing else for a
    /// gate-free circuit.
    pub fn horizontal_line_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| e.is_horizontal_line())
            .count()
    }
}
