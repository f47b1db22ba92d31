//! Reduction of symbolic points and vectors to absolute inches.
//!
//! Absolute inches are the universal frame: every resolution entry point
//! returns a concrete value tagged `absolute` (or its figure-fraction
//! wrapper). Reduction is recursive and uncached - the default-frame
//! indirection and the live axis transforms are re-read on every call,
//! which is what makes axis-relative expressions late-bound.

use glam::{DVec2, dvec2};

use super::Canvas;
use crate::errors::CoordError;
use crate::metrics::{Binop, Coord, Op, Operand, Point, Vector};

/// A fully reduced operand: components in absolute inches, or a bare
/// scalar passed through.
#[derive(Clone, Copy, Debug)]
enum Reduced {
    Point(DVec2),
    Vector(DVec2),
    Scalar(f64),
}

impl Reduced {
    fn kind(&self) -> &'static str {
        match self {
            Reduced::Point(_) => "point",
            Reduced::Vector(_) => "vector",
            Reduced::Scalar(_) => "scalar",
        }
    }
}

impl Canvas {
    /// Resolve a point to the universal frame.
    ///
    /// The result is always concrete and tagged `absolute`; deferred
    /// composites are collapsed on the way. Fails only on a tag that is
    /// neither reserved, nor a live axis, nor a registered unit.
    pub fn resolve_point(&self, point: &Point) -> Result<Point, CoordError> {
        Ok(Point::from_vec2(self.reduce_point(point)?, Coord::Absolute))
    }

    /// Resolve a vector to the universal frame. See [`Canvas::resolve_point`].
    pub fn resolve_vector(&self, vector: &Vector) -> Result<Vector, CoordError> {
        Ok(Vector::from_vec2(
            self.reduce_vector(vector)?,
            Coord::Absolute,
        ))
    }

    /// Resolve a point to figure fractions instead of absolute inches.
    pub fn resolve_point_figure(&self, point: &Point) -> Result<Point, CoordError> {
        Ok(Point::from_vec2(
            self.reduce_point(point)? / self.size(),
            Coord::Figure,
        ))
    }

    /// Resolve a vector to figure fractions instead of absolute inches.
    pub fn resolve_vector_figure(&self, vector: &Vector) -> Result<Vector, CoordError> {
        Ok(Vector::from_vec2(
            self.reduce_vector(vector)? / self.size(),
            Coord::Figure,
        ))
    }

    pub(crate) fn reduce_point(&self, point: &Point) -> Result<DVec2, CoordError> {
        match point {
            Point::Fixed { x, y, coord } => self.reduce_components(dvec2(*x, *y), coord),
            Point::Binop(b) => match self.reduce_binop(b)? {
                Reduced::Point(v) => Ok(v),
                other => Err(mismatch(b.op, other.kind(), "point")),
            },
        }
    }

    pub(crate) fn reduce_vector(&self, vector: &Vector) -> Result<DVec2, CoordError> {
        match vector {
            // A displacement in a translated frame is the difference of
            // two locations, so reduce tip and origin and subtract; only
            // the absolute frame short-circuits.
            Vector::Fixed { x, y, coord } => match coord {
                Coord::Absolute => Ok(dvec2(*x, *y)),
                _ => {
                    let origin = self.reduce_components(DVec2::ZERO, coord)?;
                    let tip = self.reduce_components(dvec2(*x, *y), coord)?;
                    Ok(tip - origin)
                }
            },
            Vector::Binop(b) => match self.reduce_binop(b)? {
                Reduced::Vector(v) => Ok(v),
                other => Err(mismatch(b.op, other.kind(), "vector")),
            },
        }
    }

    /// Point-location semantics of a single frame tag.
    fn reduce_components(&self, value: DVec2, coord: &Coord) -> Result<DVec2, CoordError> {
        match coord {
            Coord::Default => self.reduce_components(value, self.default_unit()),
            Coord::Absolute => Ok(value),
            Coord::Figure => Ok(value * self.size()),
            Coord::NegAbsolute => Ok(self.size() - value),
            Coord::Various => Err(CoordError::UnknownCoordinate {
                name: "various".to_owned(),
            }),
            Coord::Named(name) => {
                if let Some(entry) = self.axes.get(name) {
                    return Ok(entry.frame().data_transform().transform_point2(value));
                }
                if let Some(base) = name.strip_prefix("axis_") {
                    if let Some(entry) = self.axes.get(base) {
                        return Ok(entry.frame().box_transform().transform_point2(value));
                    }
                }
                if let Some(unit) = self.unit(name) {
                    return Ok(value * unit.scale + unit.origin);
                }
                Err(CoordError::UnknownCoordinate { name: name.clone() })
            }
        }
    }

    fn reduce_operand(&self, operand: &Operand) -> Result<Reduced, CoordError> {
        match operand {
            Operand::Point(p) => Ok(Reduced::Point(self.reduce_point(p)?)),
            Operand::Vector(v) => Ok(Reduced::Vector(self.reduce_vector(v)?)),
            Operand::Scalar(k) => Ok(Reduced::Scalar(*k)),
        }
    }

    // Left side first, then right, both fully reduced before the operator
    // applies; after that both sides share the absolute frame and plain
    // arithmetic cannot defer again.
    fn reduce_binop(&self, binop: &Binop) -> Result<Reduced, CoordError> {
        let lhs = self.reduce_operand(&binop.lhs)?;
        let rhs = self.reduce_operand(&binop.rhs)?;
        apply(binop.op, lhs, rhs)
    }
}

fn apply(op: Op, lhs: Reduced, rhs: Reduced) -> Result<Reduced, CoordError> {
    use Reduced as R;
    match (lhs, op, rhs) {
        (R::Point(p), Op::Add, R::Vector(v)) | (R::Vector(v), Op::Add, R::Point(p)) => {
            Ok(R::Point(p + v))
        }
        (R::Vector(a), Op::Add, R::Vector(b)) => Ok(R::Vector(a + b)),
        (R::Point(p), Op::Sub, R::Vector(v)) => Ok(R::Point(p - v)),
        (R::Point(a), Op::Sub, R::Point(b)) => Ok(R::Vector(a - b)),
        (R::Vector(a), Op::Sub, R::Vector(b)) => Ok(R::Vector(a - b)),
        (R::Vector(v), Op::Mul, R::Scalar(k)) | (R::Scalar(k), Op::Mul, R::Vector(v)) => {
            Ok(R::Vector(v * k))
        }
        (R::Vector(v), Op::Div, R::Scalar(k)) => Ok(R::Vector(v / k)),
        (R::Point(a), Op::Meet, R::Point(b)) => Ok(R::Point(dvec2(a.x, b.y))),
        (R::Vector(a), Op::Meet, R::Vector(b)) => Ok(R::Vector(dvec2(a.x, b.y))),
        (R::Point(a), Op::Mean, R::Point(b)) => Ok(R::Point((a + b) / 2.0)),
        (R::Vector(v), Op::Rotate, R::Scalar(degrees)) => {
            let (sin, cos) = degrees.to_radians().sin_cos();
            Ok(R::Vector(dvec2(v.x * cos - v.y * sin, v.x * sin + v.y * cos)))
        }
        (lhs, op, rhs) => Err(mismatch(op, lhs.kind(), rhs.kind())),
    }
}

fn mismatch(op: Op, lhs: &'static str, rhs: &'static str) -> CoordError {
    CoordError::TypeMismatch { op, lhs, rhs }
}
