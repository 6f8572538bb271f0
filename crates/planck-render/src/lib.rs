//! Circuit diagram rendering for Planck.
//!
//! [`render`] turns a validated [`planck_ir::Circuit`] into a [`Diagram`]:
//! one horizontal wire per qubit, and gate glyphs placed in the time columns
//! computed by the layout engine. [`Diagram::to_svg`] writes it out as a
//! standalone SVG document.
//!
//! ```rust
//! use planck_ir::{Circuit, QubitId};
//! use planck_render::{DiagramStyle, render};
//!
//! let mut circuit = Circuit::new("bell", 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! let diagram = render(&circuit, &DiagramStyle::default()).unwrap();
//! let svg = diagram.to_svg().unwrap();
//! assert!(svg.contains("<svg"));
//! ```

mod diagram;
mod error;
mod render;
mod style;

pub use diagram::{Diagram, Primitive, TextAnchor};
pub use error::{RenderError, RenderResult};
pub use render::render;
pub use style::DiagramStyle;
