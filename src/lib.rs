//! # candru - coordinate algebra for composed figures
//!
//! Figures are composed out of independently positioned elements whose
//! coordinates live in different frames: physical inches, fractions of
//! the figure, data coordinates of some axis, the 0..1 box of some axis,
//! or user-defined units of measure. This crate is the algebra that lets
//! those values mix freely and the resolver that turns them into numbers.
//!
//! - [`Point`] and [`Vector`] carry a symbolic [`Coord`] tag naming their
//!   frame. Same-frame arithmetic evaluates immediately; cross-frame
//!   arithmetic builds a deferred [`Binop`] tree instead of failing.
//! - [`Canvas`] owns the frame definitions: the figure size, named units
//!   of measure, and live axis frames. Its resolver collapses any
//!   expression - concrete or deferred - into absolute inches.
//! - [`Canvas::add_grid`] derives evenly tiled sub-rectangles (and their
//!   axes) from a bounding box and a partial sizing specification.
//!
//! Axis frames are capabilities, not snapshots: the canvas re-queries
//! them on every resolution, so changing an axis's data limits changes
//! what the same symbolic expression resolves to. A misspelled frame
//! name is likewise only detected when something resolves it.
//!
//! Drawing, fonts, and file export are deliberately out of scope; this
//! crate computes coordinates and nothing else.
//!
//! ## Example
//!
//! ```
//! use candru::{Canvas, Point, SizeUnit, width};
//!
//! let mut canvas = Canvas::new(4.0, 4.0, SizeUnit::Inches);
//! canvas.add_axis(
//!     "main",
//!     Point::new(0.1, 0.1, "figure"),
//!     Point::new(0.9, 0.9, "figure"),
//! )?;
//!
//! // Half an inch right of the axis box's top-left corner, even though
//! // the two terms live in different frames.
//! let label = Point::new(0.0, 1.0, "axis_main") + width(0.5, "in");
//! let resolved = canvas.resolve_point(&label)?;
//! let (x, y) = resolved.xy().unwrap();
//! assert!((x - 0.9).abs() < 1e-12);
//! assert!((y - 3.6).abs() < 1e-12);
//! # Ok::<(), candru::CoordError>(())
//! ```

pub mod canvas;
pub mod errors;
pub mod metrics;

mod log;

pub use canvas::{Axis, AxisFrame, Canvas, GridSpec, SizeUnit};
pub use errors::{CoordError, GridError};
pub use metrics::{Binop, Coord, Op, Operand, Point, Vector, height, width};

// The math types that appear in the public API.
pub use glam::{DAffine2, DVec2};
