//! Circuit to diagram layout.

use planck_ir::{Circuit, Gate, GateKind, QubitId};

use crate::diagram::{Diagram, Primitive, TextAnchor};
use crate::error::{RenderError, RenderResult};
use crate::style::DiagramStyle;

/// Lay out a circuit as a diagram.
///
/// Gates are placed in the columns computed by the layout engine; the
/// measurement block, if any, takes one extra column after the last gate.
/// Fails before drawing anything if a qubit is out of range or the column
/// count exceeds [`DiagramStyle::max_columns`].
pub fn render(circuit: &Circuit, style: &DiagramStyle) -> RenderResult<Diagram> {
    circuit.validate()?;

    let layout = circuit.layout();
    let measure_column = layout.depth();
    let columns = measure_column + usize::from(!circuit.measurements().is_empty());
    if columns > style.max_columns {
        return Err(RenderError::TooManyColumns {
            columns,
            max_columns: style.max_columns,
        });
    }

    #[allow(clippy::cast_precision_loss)]
    let width = style
        .min_width
        .max(columns as f64 * style.column_spacing + style.left_margin + style.right_margin);
    let height = f64::from(circuit.num_qubits()) * style.row_spacing
        + style.top_margin
        + style.bottom_margin;

    let mut painter = Painter::new(style);
    painter.background(width, height);
    let wire_end = style.wire_end(width);
    for i in 0..circuit.num_qubits() {
        painter.wire(QubitId(i), wire_end);
    }

    for (gate, &column) in circuit.gates().iter().zip(layout.times()) {
        painter.gate(gate, style.column_x(column));
    }

    let measure_x = style.column_x(measure_column);
    for m in circuit.measurements() {
        painter.labelled_box(measure_x, m.qubit, "M", &style.measure_fill, &style.measure_stroke);
    }

    tracing::debug!(
        qubits = circuit.num_qubits(),
        gates = circuit.gates().len(),
        columns,
        elements = painter.elements.len(),
        "rendered circuit diagram"
    );

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (width, height) = (width.ceil() as u32, height.ceil() as u32);
    Ok(Diagram {
        width,
        height,
        qubit_line_count: circuit.num_qubits(),
        elements: painter.elements,
    })
}

/// Accumulates primitives in paint order.
struct Painter<'a> {
    style: &'a DiagramStyle,
    elements: Vec<Primitive>,
}

impl<'a> Painter<'a> {
    fn new(style: &'a DiagramStyle) -> Self {
        Self {
            style,
            elements: Vec::new(),
        }
    }

    fn background(&mut self, width: f64, height: f64) {
        self.elements.push(Primitive::Rect {
            x: 0.0,
            y: 0.0,
            width,
            height,
            fill: self.style.background.clone(),
            stroke: None,
            stroke_width: 0.0,
            rx: 0.0,
        });
    }

    fn wire(&mut self, qubit: QubitId, end: f64) {
        let y = self.style.wire_y(qubit.0);
        self.line(
            (self.style.left_margin, y),
            (end, y),
            self.style.wire_color.clone(),
        );
        self.elements.push(Primitive::Text {
            x: self.style.label_x,
            y: y + 5.0,
            content: qubit.to_string(),
            fill: self.style.wire_label_color.clone(),
            font_size: self.style.font_size,
            bold: false,
            anchor: TextAnchor::Start,
        });
    }

    fn gate(&mut self, gate: &Gate, x: f64) {
        match (&gate.kind, gate.control) {
            (_, Some(control)) => self.controlled(gate, control, x),
            (GateKind::Swap, None) => self.swap(gate, x),
            (kind, None) => {
                let style = self.style;
                let label = kind.label();
                for &target in &gate.targets {
                    self.labelled_box(x, target, &label, &style.gate_fill, &style.gate_stroke);
                }
            }
        }
    }

    fn controlled(&mut self, gate: &Gate, control: QubitId, x: f64) {
        let color = self.style.control_color.clone();
        let control_y = self.style.wire_y(control.0);

        // Connector spans every qubit the gate touches
        let (top, bottom) = gate
            .qubits()
            .map(|q| self.style.wire_y(q.0))
            .fold((control_y, control_y), |(lo, hi), y| (lo.min(y), hi.max(y)));
        self.line((x, top), (x, bottom), color.clone());

        self.dot(x, control_y, color.clone());

        for &target in &gate.targets {
            let y = self.style.wire_y(target.0);
            match gate.kind {
                GateKind::CX => self.ring_cross(x, y, color.clone()),
                GateKind::CZ => self.dot(x, y, color.clone()),
                ref kind => {
                    let style = self.style;
                    self.labelled_box(x, target, &kind.label(), &style.gate_fill, &style.gate_stroke);
                }
            }
        }
    }

    fn swap(&mut self, gate: &Gate, x: f64) {
        let color = self.style.control_color.clone();
        let ys: Vec<f64> = gate.targets.iter().map(|q| self.style.wire_y(q.0)).collect();
        let top = ys.iter().copied().fold(f64::INFINITY, f64::min);
        let bottom = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        self.line((x, top), (x, bottom), color.clone());

        let arm = self.style.control_radius + 2.0;
        for y in ys {
            self.line((x - arm, y - arm), (x + arm, y + arm), color.clone());
            self.line((x - arm, y + arm), (x + arm, y - arm), color.clone());
        }
    }

    fn ring_cross(&mut self, x: f64, y: f64, color: String) {
        let r = self.style.target_radius;
        self.elements.push(Primitive::Circle {
            cx: x,
            cy: y,
            r,
            fill: "none".into(),
            stroke: Some(color.clone()),
            stroke_width: self.style.stroke_width,
        });
        self.line((x, y - r), (x, y + r), color.clone());
        self.line((x - r, y), (x + r, y), color);
    }

    fn dot(&mut self, x: f64, y: f64, color: String) {
        self.elements.push(Primitive::Circle {
            cx: x,
            cy: y,
            r: self.style.control_radius,
            fill: color,
            stroke: None,
            stroke_width: 0.0,
        });
    }

    fn labelled_box(&mut self, x: f64, qubit: QubitId, label: &str, fill: &str, stroke: &str) {
        let y = self.style.wire_y(qubit.0);
        let half = self.style.box_size / 2.0;
        self.elements.push(Primitive::Rect {
            x: x - half,
            y: y - half,
            width: self.style.box_size,
            height: self.style.box_size,
            fill: fill.to_string(),
            stroke: Some(stroke.to_string()),
            stroke_width: self.style.stroke_width,
            rx: 4.0,
        });
        self.elements.push(Primitive::Text {
            x,
            y: y + 5.0,
            content: label.to_string(),
            fill: self.style.gate_label_color.clone(),
            font_size: self.style.font_size,
            bold: true,
            anchor: TextAnchor::Middle,
        });
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), stroke: String) {
        self.elements.push(Primitive::Line {
            x1: from.0,
            y1: from.1,
            x2: to.0,
            y2: to.1,
            stroke,
            stroke_width: self.style.stroke_width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planck_ir::{IrError, Measurement};

    fn count<F: Fn(&Primitive) -> bool>(diagram: &Diagram, f: F) -> usize {
        diagram.elements.iter().filter(|&e| f(e)).count()
    }

    #[test]
    fn test_empty_circuit_draws_only_wires() {
        let circuit = Circuit::new("empty", 3);
        let diagram = render(&circuit, &DiagramStyle::default()).unwrap();

        assert_eq!(diagram.qubit_line_count, 3);
        assert_eq!(diagram.horizontal_line_count(), 3);
        assert_eq!(diagram.width, 800);
        assert_eq!(diagram.height, 3 * 60 + 40 + 40);
        assert_eq!(circuit.depth(), 0);
    }

    #[test]
    fn test_out_of_range_qubit_fails_before_drawing() {
        let gates = vec![Gate::single(GateKind::H, QubitId(5))];
        let circuit = Circuit::from_parts("bad", 2, 2, gates, vec![]);
        let err = render(&circuit, &DiagramStyle::default()).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Ir(IrError::QubitIndexOutOfRange { qubit: QubitId(5), .. })
        ));
    }

    #[test]
    fn test_columns_are_evenly_spaced() {
        let mut circuit = Circuit::new("chain", 1);
        circuit.h(QubitId(0)).unwrap().x(QubitId(0)).unwrap().z(QubitId(0)).unwrap();

        let diagram = render(&circuit, &DiagramStyle::default()).unwrap();
        let xs: Vec<f64> = diagram
            .elements
            .iter()
            .filter_map(|e| match e {
                Primitive::Rect { x, rx, .. } if *rx > 0.0 => Some(*x + 20.0),
                _ => None,
            })
            .collect();
        assert_eq!(xs, vec![140.0, 220.0, 300.0]);
    }

    #[test]
    fn test_parallel_gates_share_a_column() {
        let mut circuit = Circuit::new("parallel", 2);
        circuit.h(QubitId(0)).unwrap().h(QubitId(1)).unwrap();

        let diagram = render(&circuit, &DiagramStyle::default()).unwrap();
        let xs: Vec<f64> = diagram
            .elements
            .iter()
            .filter_map(|e| match e {
                Primitive::Text { x, bold: true, .. } => Some(*x),
                _ => None,
            })
            .collect();
        assert_eq!(xs, vec![140.0, 140.0]);
    }

    #[test]
    fn test_cx_glyph() {
        let mut circuit = Circuit::new("cx", 2);
        circuit.cx(QubitId(0), QubitId(1)).unwrap();
        let diagram = render(&circuit, &DiagramStyle::default()).unwrap();

        // control dot and target ring
        assert_eq!(count(&diagram, |e| matches!(e, Primitive::Circle { .. })), 2);
        // two wires plus the ring's horizontal bar
        assert_eq!(diagram.horizontal_line_count(), 3);
    }

    #[test]
    fn test_cz_and_cp_glyphs() {
        let mut circuit = Circuit::new("cz", 2);
        circuit
            .cz(QubitId(0), QubitId(1))
            .unwrap()
            .cp(1.0, QubitId(1), QubitId(0))
            .unwrap();
        let diagram = render(&circuit, &DiagramStyle::default()).unwrap();

        // cz draws two dots, cp one dot plus a labelled box
        let dots = count(&diagram, |e| matches!(e, Primitive::Circle { stroke: None, .. }));
        assert_eq!(dots, 3);
        let labels = count(&diagram, |e| {
            matches!(e, Primitive::Text { content, .. } if content == "CP")
        });
        assert_eq!(labels, 1);
    }

    #[test]
    fn test_measurements_follow_last_column() {
        let mut circuit = Circuit::new("bell", 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .measure_all()
            .unwrap();
        let diagram = render(&circuit, &DiagramStyle::default()).unwrap();

        let measure_xs: Vec<f64> = diagram
            .elements
            .iter()
            .filter_map(|e| match e {
                Primitive::Text { x, content, .. } if content == "M" => Some(*x),
                _ => None,
            })
            .collect();
        assert_eq!(measure_xs, vec![300.0, 300.0]);
    }

    #[test]
    fn test_too_many_columns() {
        let mut circuit = Circuit::new("long", 1);
        for _ in 0..5 {
            circuit.x(QubitId(0)).unwrap();
        }
        let err = render(&circuit, &DiagramStyle::with_max_columns(4)).unwrap_err();
        assert!(matches!(
            err,
            RenderError::TooManyColumns {
                columns: 5,
                max_columns: 4
            }
        ));
    }

    #[test]
    fn test_width_grows_with_columns() {
        let mut circuit = Circuit::new("wide", 1);
        for _ in 0..20 {
            circuit.h(QubitId(0)).unwrap();
        }
        let diagram = render(&circuit, &DiagramStyle::default()).unwrap();
        assert_eq!(diagram.width, 20 * 80 + 60 + 40);
    }

    #[test]
    fn test_wires_cover_the_last_box() {
        let mut circuit = Circuit::new("wide", 2);
        for _ in 0..20 {
            circuit.h(QubitId(0)).unwrap();
        }
        let style = DiagramStyle::default();
        let diagram = render(&circuit, &style).unwrap();

        let last_box_edge = style.column_x(19) + style.box_size / 2.0;
        let wire_ends: Vec<f64> = diagram
            .elements
            .iter()
            .filter_map(|e| match e {
                Primitive::Line { x1, x2, y1, y2, .. } if y1 == y2 && *x1 == style.left_margin => {
                    Some(*x2)
                }
                _ => None,
            })
            .collect();
        assert_eq!(wire_ends.len(), 2);
        for end in wire_ends {
            assert!(end >= last_box_edge, "wire ends at {end}, box reaches {last_box_edge}");
            assert!(end <= f64::from(diagram.width));
        }
    }

    #[test]
    fn test_wire_labels_follow_style() {
        let style = DiagramStyle {
            label_x: 8.0,
            ..DiagramStyle::default()
        };
        let diagram = render(&Circuit::new("labels", 2), &style).unwrap();
        let label_xs: Vec<f64> = diagram
            .elements
            .iter()
            .filter_map(|e| match e {
                Primitive::Text { x, bold: false, .. } => Some(*x),
                _ => None,
            })
            .collect();
        assert_eq!(label_xs, vec![8.0, 8.0]);
    }

    #[test]
    fn test_measurement_out_of_range_is_rejected() {
        let measurements = vec![Measurement {
            qubit: QubitId(3),
            clbit: 0,
        }];
        let circuit = Circuit::from_parts("bad", 2, 2, vec![], measurements);
        assert!(render(&circuit, &DiagramStyle::default()).is_err());
    }
}
