//! The canvas coordinate context: figure size, unit registry, and axes.
//!
//! This module is organized into submodules:
//! - `axis`: the `AxisFrame` capability and the built-in `Axis`
//! - `resolve`: the recursive reduction to absolute inches
//! - `grid`: evenly tiled sub-rectangles from partial specifications

pub mod axis;
pub mod grid;
mod resolve;

pub use axis::{Axis, AxisFrame};
pub use grid::GridSpec;

use std::collections::HashMap;
use std::rc::Rc;

use glam::{DVec2, dvec2};

use crate::errors::CoordError;
use crate::log::debug;
use crate::metrics::{Coord, Point, Vector};

/// Default pixel density of the pixel unit, in dots per inch.
pub const DEFAULT_DPI: f64 = 100.0;

const RESERVED: [&str; 5] = ["default", "figure", "absolute", "-absolute", "various"];

/// Physical unit used to state the canvas size at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeUnit {
    Inches,
    Centimeters,
    Millimeters,
}

impl SizeUnit {
    fn to_inches(self, value: f64) -> f64 {
        match self {
            SizeUnit::Inches => value,
            SizeUnit::Centimeters => value / 2.54,
            SizeUnit::Millimeters => value / 25.4,
        }
    }
}

/// An affine frame captured at registration time: resolved values are
/// `value * scale + origin`, all in absolute inches.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Unit {
    pub(crate) scale: DVec2,
    pub(crate) origin: DVec2,
}

pub(crate) enum AxisEntry {
    /// Axis created and owned by this canvas.
    Owned(Rc<Axis>),
    /// Frame owned by an external plotting subsystem.
    External(Rc<dyn AxisFrame>),
}

impl AxisEntry {
    pub(crate) fn frame(&self) -> &dyn AxisFrame {
        match self {
            AxisEntry::Owned(axis) => axis.as_ref(),
            AxisEntry::External(frame) => frame.as_ref(),
        }
    }
}

/// Resolution context for the coordinate algebra.
///
/// A canvas knows the physical figure size, the current default frame,
/// every registered unit of measure, and every live axis. It is the only
/// thing that can turn a symbolic [`Point`] or [`Vector`] into numbers.
pub struct Canvas {
    size: DVec2,
    dpi: f64,
    default_unit: Coord,
    units: HashMap<String, Unit>,
    pub(crate) axes: HashMap<String, AxisEntry>,
}

impl Canvas {
    /// Create a canvas with the given physical size.
    ///
    /// The default frame starts as `figure`, and the usual physical units
    /// (`in`, `cm`, `mm`, `pt`, `px` plus their long forms) come
    /// pre-registered.
    pub fn new(size_x: f64, size_y: f64, unit: SizeUnit) -> Canvas {
        Canvas::with_dpi(size_x, size_y, unit, DEFAULT_DPI)
    }

    /// Like [`Canvas::new`], but with an explicit pixel density for the
    /// `px` unit.
    pub fn with_dpi(size_x: f64, size_y: f64, unit: SizeUnit, dpi: f64) -> Canvas {
        let size = dvec2(unit.to_inches(size_x), unit.to_inches(size_y));
        Canvas {
            size,
            dpi,
            default_unit: Coord::Figure,
            units: builtin_units(dpi),
            axes: HashMap::new(),
        }
    }

    /// Physical size of the figure in inches.
    pub fn size(&self) -> DVec2 {
        self.size
    }

    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    /// The frame substituted for the `default` tag.
    pub fn default_unit(&self) -> &Coord {
        &self.default_unit
    }

    /// Change the frame substituted for the `default` tag.
    ///
    /// The name must be a known tag. `default` itself and `various` are
    /// rejected: the former would make the substitution circular, the
    /// latter never names a resolvable frame.
    pub fn set_default_unit(&mut self, name: &str) -> Result<(), CoordError> {
        if matches!(name, "default" | "various") {
            return Err(CoordError::InvalidIdentifier {
                name: name.to_owned(),
            });
        }
        if !self.is_unit(name) {
            return Err(CoordError::UnknownCoordinate {
                name: name.to_owned(),
            });
        }
        debug!("default unit set to {name}");
        self.default_unit = Coord::from(name);
        Ok(())
    }

    /// Whether `name` is in use as a coordinate tag: a reserved word, an
    /// axis, the `axis_` form of an axis, or a unit of measure.
    pub fn is_unit(&self, name: &str) -> bool {
        if RESERVED.contains(&name) {
            return true;
        }
        if self.axes.contains_key(name) {
            return true;
        }
        if let Some(base) = name.strip_prefix("axis_") {
            if self.is_unit(base) {
                return true;
            }
        }
        self.units.contains_key(name)
    }

    /// Whether `name` may be registered as a new unit or axis.
    ///
    /// The `axis_` prefix is a namespace reserved for relative-box
    /// frames, so no user-chosen name may start with it.
    pub fn is_valid_identifier(&self, name: &str) -> bool {
        !name.is_empty() && !name.starts_with("axis_") && !self.is_unit(name)
    }

    fn check_identifier(&self, name: &str) -> Result<(), CoordError> {
        if self.is_valid_identifier(name) {
            Ok(())
        } else {
            Err(CoordError::InvalidIdentifier {
                name: name.to_owned(),
            })
        }
    }

    /// Register a new unit of measure.
    ///
    /// The unit is the affine frame `value * scale + origin`. Both parts
    /// are resolved through the canvas *before* the name is inserted, so
    /// a unit may be defined in terms of any existing unit or axis but
    /// never in terms of itself or of anything not yet registered.
    pub fn add_unit(&mut self, name: &str, scale: Vector, origin: Point) -> Result<(), CoordError> {
        self.check_identifier(name)?;
        let scale = self.reduce_vector(&scale)?;
        let origin = self.reduce_point(&origin)?;
        debug!("unit {name}: scale {scale}, origin {origin}");
        self.units.insert(name.to_owned(), Unit { scale, origin });
        Ok(())
    }

    pub(crate) fn unit(&self, name: &str) -> Option<&Unit> {
        self.units.get(name)
    }

    /// Create an axis owned by this canvas.
    ///
    /// The bounding box corners are resolved now; the data limits stay
    /// adjustable through the returned handle. Registers two coordinate
    /// frames: `name` (data coordinates) and `axis_name` (the 0..1 box).
    pub fn add_axis(
        &mut self,
        name: &str,
        pos_ll: Point,
        pos_ur: Point,
    ) -> Result<Rc<Axis>, CoordError> {
        self.check_identifier(name)?;
        let ll = self.reduce_point(&pos_ll)?;
        let ur = self.reduce_point(&pos_ur)?;
        debug!("axis {name}: ll {ll}, ur {ur}");
        let axis = Rc::new(Axis::new(ll, ur));
        self.axes
            .insert(name.to_owned(), AxisEntry::Owned(Rc::clone(&axis)));
        Ok(axis)
    }

    /// Hook an externally-owned axis frame into the canvas.
    ///
    /// The canvas keeps the capability, not a snapshot: the frame's
    /// transforms are queried again on every resolution, so later changes
    /// to the external axis are observed.
    pub fn register_axis(&mut self, name: &str, frame: Rc<dyn AxisFrame>) -> Result<(), CoordError> {
        self.check_identifier(name)?;
        debug!("external axis {name} registered");
        self.axes.insert(name.to_owned(), AxisEntry::External(frame));
        Ok(())
    }

    /// The canvas-owned axis of that name, if there is one.
    pub fn ax(&self, name: &str) -> Option<Rc<Axis>> {
        match self.axes.get(name) {
            Some(AxisEntry::Owned(axis)) => Some(Rc::clone(axis)),
            _ => None,
        }
    }
}

fn builtin_units(dpi: f64) -> HashMap<String, Unit> {
    let mut units = HashMap::new();
    let mut insert = |names: &[&str], per_inch: f64| {
        for name in names {
            units.insert(
                (*name).to_owned(),
                Unit {
                    scale: DVec2::splat(1.0 / per_inch),
                    origin: DVec2::ZERO,
                },
            );
        }
    };
    insert(&["in", "inch", "inches"], 1.0);
    insert(
        &["cm", "centimeter", "centimeters", "centimetre", "centimetres"],
        2.54,
    );
    insert(
        &["mm", "millimeter", "millimeters", "millimetre", "millimetres"],
        25.4,
    );
    insert(&["pt", "point", "points"], 72.0);
    insert(&["px", "pixel", "pixels"], dpi);
    units
}
