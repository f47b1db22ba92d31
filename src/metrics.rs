//! Tagged geometric primitives: points and vectors in named coordinate frames.
//!
//! A [`Point`] is a location, a [`Vector`] a displacement. Both carry a
//! symbolic [`Coord`] tag naming the frame their components are expressed
//! in. Arithmetic between values in the same frame happens immediately;
//! arithmetic across frames cannot be computed without a canvas, so it is
//! captured as a deferred [`Binop`] tree and collapsed later by
//! [`Canvas::resolve_point`](crate::Canvas::resolve_point) or
//! [`Canvas::resolve_vector`](crate::Canvas::resolve_vector).
//!
//! Invalid pairings (point plus point, vector minus point, point times
//! scalar) do not compile; only *frame* mismatches defer.

use std::fmt;
use std::ops::{Add, BitOr, Div, Mul, Neg, Shl, Shr, Sub};

use glam::DVec2;

/// Symbolic name of a coordinate frame.
///
/// The reserved frames are variants of their own; anything else is a
/// [`Coord::Named`] tag whose meaning is decided by the canvas that
/// resolves it: a unit of measure, an axis data frame, or an
/// `axis_`-prefixed relative-box frame.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Coord {
    /// Stand-in for the canvas's current default frame, substituted at
    /// resolution time.
    Default,
    /// Fractions of the figure size, (0,0) bottom-left to (1,1) top-right.
    Figure,
    /// Physical inches from the bottom-left corner of the figure.
    Absolute,
    /// Physical inches from the top-right corner; both components mirrored.
    NegAbsolute,
    /// Marker frame reported by deferred composites.
    Various,
    /// A user unit, an axis data frame, or an `axis_`-prefixed frame.
    Named(String),
}

impl Coord {
    /// The tag name as it appears in the string form.
    pub fn as_str(&self) -> &str {
        match self {
            Coord::Default => "default",
            Coord::Figure => "figure",
            Coord::Absolute => "absolute",
            Coord::NegAbsolute => "-absolute",
            Coord::Various => "various",
            Coord::Named(name) => name,
        }
    }
}

impl From<&str> for Coord {
    fn from(name: &str) -> Coord {
        match name {
            "default" => Coord::Default,
            "figure" => Coord::Figure,
            "absolute" => Coord::Absolute,
            "-absolute" => Coord::NegAbsolute,
            "various" => Coord::Various,
            other => Coord::Named(other.to_owned()),
        }
    }
}

impl From<String> for Coord {
    fn from(name: String) -> Coord {
        match name.as_str() {
            "default" | "figure" | "absolute" | "-absolute" | "various" => {
                Coord::from(name.as_str())
            }
            _ => Coord::Named(name),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A binary operator whose evaluation had to be deferred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    /// x from the left operand, y from the right (`>>`).
    Meet,
    /// Componentwise midpoint of two points (`|`).
    Mean,
    /// Rotation of a vector by a scalar angle in degrees.
    Rotate,
}

impl Op {
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Meet => ">>",
            Op::Mean => "|",
            Op::Rotate => "@",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One side of a deferred binary operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Point(Point),
    Vector(Vector),
    Scalar(f64),
}

impl Operand {
    /// Operand kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Point(_) => "point",
            Operand::Vector(_) => "vector",
            Operand::Scalar(_) => "scalar",
        }
    }
}

impl From<Point> for Operand {
    fn from(p: Point) -> Operand {
        Operand::Point(p)
    }
}

impl From<Vector> for Operand {
    fn from(v: Vector) -> Operand {
        Operand::Vector(v)
    }
}

impl From<f64> for Operand {
    fn from(k: f64) -> Operand {
        Operand::Scalar(k)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Point(p) => p.fmt(f),
            Operand::Vector(v) => v.fmt(f),
            Operand::Scalar(k) => k.fmt(f),
        }
    }
}

/// An unevaluated `lhs op rhs` between metrics whose frames differ.
///
/// The tree is an immutable value: every composition builds a new node,
/// nothing is rewritten in place. Structural equality compares the
/// `(lhs, op, rhs)` triple recursively.
#[derive(Clone, Debug, PartialEq)]
pub struct Binop {
    pub lhs: Operand,
    pub op: Op,
    pub rhs: Operand,
}

impl Binop {
    pub fn new(lhs: impl Into<Operand>, op: Op, rhs: impl Into<Operand>) -> Binop {
        Binop {
            lhs: lhs.into(),
            op,
            rhs: rhs.into(),
        }
    }
}

/// Frames unify when they are equal and concrete.
fn same_frame(a: &Coord, b: &Coord) -> bool {
    a == b && *a != Coord::Various
}

/// A location on the canvas in some coordinate frame.
///
/// Points and vectors add and subtract to produce points; two points
/// subtract to the vector connecting them. Points have no scalar
/// arithmetic. The meet operators `>>`/`<<` recombine the x component of
/// one point with the y component of another, and `|` takes the midpoint.
#[derive(Clone, Debug, PartialEq)]
pub enum Point {
    /// Concrete coordinates in a single frame.
    Fixed { x: f64, y: f64, coord: Coord },
    /// Deferred composite; reports its frame as [`Coord::Various`].
    Binop(Box<Binop>),
}

impl Point {
    pub fn new(x: f64, y: f64, coordinate: impl Into<Coord>) -> Point {
        Point::Fixed {
            x,
            y,
            coord: coordinate.into(),
        }
    }

    /// A point whose x and y live in different frames.
    ///
    /// `Point::per_axis(x, y, (cx, cy))` is sugar for
    /// `Point::new(x, 0, cx) >> Point::new(0, y, cy)`.
    pub fn per_axis(x: f64, y: f64, coords: (impl Into<Coord>, impl Into<Coord>)) -> Point {
        Point::new(x, 0.0, coords.0).meet(Point::new(0.0, y, coords.1))
    }

    pub fn from_vec2(v: DVec2, coordinate: impl Into<Coord>) -> Point {
        Point::new(v.x, v.y, coordinate)
    }

    fn binop(lhs: impl Into<Operand>, op: Op, rhs: impl Into<Operand>) -> Point {
        Point::Binop(Box::new(Binop::new(lhs, op, rhs)))
    }

    /// The x component, if this point is not a deferred composite.
    pub fn x(&self) -> Option<f64> {
        match self {
            Point::Fixed { x, .. } => Some(*x),
            Point::Binop(_) => None,
        }
    }

    /// The y component, if this point is not a deferred composite.
    pub fn y(&self) -> Option<f64> {
        match self {
            Point::Fixed { y, .. } => Some(*y),
            Point::Binop(_) => None,
        }
    }

    /// Both components, x first.
    pub fn xy(&self) -> Option<(f64, f64)> {
        match self {
            Point::Fixed { x, y, .. } => Some((*x, *y)),
            Point::Binop(_) => None,
        }
    }

    /// The frame this point is expressed in ([`Coord::Various`] for
    /// composites).
    pub fn coordinate(&self) -> &Coord {
        match self {
            Point::Fixed { coord, .. } => coord,
            Point::Binop(_) => &Coord::Various,
        }
    }

    /// x from `self`, y from `other` (the `>>` operator).
    pub fn meet(self, other: Point) -> Point {
        match (&self, &other) {
            (
                Point::Fixed { x, coord, .. },
                Point::Fixed {
                    y, coord: other_coord, ..
                },
            ) if same_frame(coord, other_coord) => Point::Fixed {
                x: *x,
                y: *y,
                coord: coord.clone(),
            },
            _ => Point::binop(self, Op::Meet, other),
        }
    }

    /// The midpoint of two points (the `|` operator).
    pub fn mean(self, other: Point) -> Point {
        match (&self, &other) {
            (
                Point::Fixed { x, y, coord },
                Point::Fixed {
                    x: ox,
                    y: oy,
                    coord: other_coord,
                },
            ) if same_frame(coord, other_coord) => Point::Fixed {
                x: (x + ox) / 2.0,
                y: (y + oy) / 2.0,
                coord: coord.clone(),
            },
            _ => Point::binop(self, Op::Mean, other),
        }
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, rhs: Vector) -> Point {
        match (&self, &rhs) {
            (
                Point::Fixed { x, y, coord },
                Vector::Fixed {
                    x: dx,
                    y: dy,
                    coord: vec_coord,
                },
            ) if same_frame(coord, vec_coord) => Point::Fixed {
                x: x + dx,
                y: y + dy,
                coord: coord.clone(),
            },
            _ => Point::binop(self, Op::Add, rhs),
        }
    }
}

impl Sub<Vector> for Point {
    type Output = Point;
    fn sub(self, rhs: Vector) -> Point {
        match (&self, &rhs) {
            (
                Point::Fixed { x, y, coord },
                Vector::Fixed {
                    x: dx,
                    y: dy,
                    coord: vec_coord,
                },
            ) if same_frame(coord, vec_coord) => Point::Fixed {
                x: x - dx,
                y: y - dy,
                coord: coord.clone(),
            },
            _ => Point::binop(self, Op::Sub, rhs),
        }
    }
}

/// The vector connecting two points.
impl Sub<Point> for Point {
    type Output = Vector;
    fn sub(self, rhs: Point) -> Vector {
        match (&self, &rhs) {
            (
                Point::Fixed { x, y, coord },
                Point::Fixed {
                    x: ox,
                    y: oy,
                    coord: other_coord,
                },
            ) if same_frame(coord, other_coord) => Vector::Fixed {
                x: x - ox,
                y: y - oy,
                coord: coord.clone(),
            },
            _ => Vector::binop(self, Op::Sub, rhs),
        }
    }
}

impl Shr for Point {
    type Output = Point;
    fn shr(self, rhs: Point) -> Point {
        self.meet(rhs)
    }
}

impl Shl for Point {
    type Output = Point;
    fn shl(self, rhs: Point) -> Point {
        rhs.meet(self)
    }
}

impl BitOr for Point {
    type Output = Point;
    fn bitor(self, rhs: Point) -> Point {
        self.mean(rhs)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Fixed { x, y, coord } => write!(f, "Point({x}, {y}, \"{coord}\")"),
            Point::Binop(b) => fmt_binop(f, b, "Point"),
        }
    }
}

/// A displacement on the canvas in some coordinate frame.
///
/// Vectors add and subtract with vectors and points, scale by scalars,
/// negate, and rotate. A vector with one zero component plays the role of
/// a pure width or height; [`width`] and [`height`] build those directly.
#[derive(Clone, Debug, PartialEq)]
pub enum Vector {
    /// Concrete components in a single frame.
    Fixed { x: f64, y: f64, coord: Coord },
    /// Deferred composite; reports its frame as [`Coord::Various`].
    Binop(Box<Binop>),
}

impl Vector {
    pub fn new(x: f64, y: f64, coordinate: impl Into<Coord>) -> Vector {
        Vector::Fixed {
            x,
            y,
            coord: coordinate.into(),
        }
    }

    /// A vector whose x and y live in different frames.
    pub fn per_axis(x: f64, y: f64, coords: (impl Into<Coord>, impl Into<Coord>)) -> Vector {
        Vector::new(x, 0.0, coords.0).meet(Vector::new(0.0, y, coords.1))
    }

    pub fn from_vec2(v: DVec2, coordinate: impl Into<Coord>) -> Vector {
        Vector::new(v.x, v.y, coordinate)
    }

    fn binop(lhs: impl Into<Operand>, op: Op, rhs: impl Into<Operand>) -> Vector {
        Vector::Binop(Box::new(Binop::new(lhs, op, rhs)))
    }

    pub fn x(&self) -> Option<f64> {
        match self {
            Vector::Fixed { x, .. } => Some(*x),
            Vector::Binop(_) => None,
        }
    }

    pub fn y(&self) -> Option<f64> {
        match self {
            Vector::Fixed { y, .. } => Some(*y),
            Vector::Binop(_) => None,
        }
    }

    /// Both components, x first.
    pub fn xy(&self) -> Option<(f64, f64)> {
        match self {
            Vector::Fixed { x, y, .. } => Some((*x, *y)),
            Vector::Binop(_) => None,
        }
    }

    pub fn coordinate(&self) -> &Coord {
        match self {
            Vector::Fixed { coord, .. } => coord,
            Vector::Binop(_) => &Coord::Various,
        }
    }

    /// The x component as a vector in the same frame, y zeroed.
    pub fn width(&self) -> Vector {
        match self {
            Vector::Fixed { x, coord, .. } => Vector::new(*x, 0.0, coord.clone()),
            // Project through the absolute origin: keep x of (O + v), then
            // subtract O back out. Stays deferred until resolution.
            Vector::Binop(_) => {
                let origin = || Point::new(0.0, 0.0, Coord::Absolute);
                (origin() + self.clone()).meet(origin()) - origin()
            }
        }
    }

    /// The y component as a vector in the same frame, x zeroed.
    pub fn height(&self) -> Vector {
        match self {
            Vector::Fixed { y, coord, .. } => Vector::new(0.0, *y, coord.clone()),
            Vector::Binop(_) => {
                let origin = || Point::new(0.0, 0.0, Coord::Absolute);
                origin().meet(origin() + self.clone()) - origin()
            }
        }
    }

    /// Reflect across the y axis.
    pub fn flipx(&self) -> Vector {
        match self {
            Vector::Fixed { x, y, coord } => Vector::new(-x, *y, coord.clone()),
            Vector::Binop(_) => (-self.clone()).meet(self.clone()),
        }
    }

    /// Reflect across the x axis.
    pub fn flipy(&self) -> Vector {
        match self {
            Vector::Fixed { x, y, coord } => Vector::new(*x, -y, coord.clone()),
            Vector::Binop(_) => self.clone().meet(-self.clone()),
        }
    }

    /// Rotate by an angle in degrees.
    ///
    /// Only the absolute frame has physical angles, so rotation is
    /// immediate there and deferred everywhere else.
    pub fn rotate(&self, degrees: f64) -> Vector {
        match self {
            Vector::Fixed { x, y, coord } if *coord == Coord::Absolute => {
                let (sin, cos) = degrees.to_radians().sin_cos();
                Vector::new(x * cos - y * sin, x * sin + y * cos, Coord::Absolute)
            }
            _ => Vector::binop(self.clone(), Op::Rotate, degrees),
        }
    }

    /// x from `self`, y from `other` (the `>>` operator).
    pub fn meet(self, other: Vector) -> Vector {
        match (&self, &other) {
            (
                Vector::Fixed { x, coord, .. },
                Vector::Fixed {
                    y, coord: other_coord, ..
                },
            ) if same_frame(coord, other_coord) => Vector::Fixed {
                x: *x,
                y: *y,
                coord: coord.clone(),
            },
            _ => Vector::binop(self, Op::Meet, other),
        }
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        match (&self, &rhs) {
            (
                Vector::Fixed { x, y, coord },
                Vector::Fixed {
                    x: ox,
                    y: oy,
                    coord: other_coord,
                },
            ) if same_frame(coord, other_coord) => Vector::Fixed {
                x: x + ox,
                y: y + oy,
                coord: coord.clone(),
            },
            _ => Vector::binop(self, Op::Add, rhs),
        }
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        match (&self, &rhs) {
            (
                Vector::Fixed { x, y, coord },
                Vector::Fixed {
                    x: ox,
                    y: oy,
                    coord: other_coord,
                },
            ) if same_frame(coord, other_coord) => Vector::Fixed {
                x: x - ox,
                y: y - oy,
                coord: coord.clone(),
            },
            _ => Vector::binop(self, Op::Sub, rhs),
        }
    }
}

/// Vector plus point is the translated point.
impl Add<Point> for Vector {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        rhs + self
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        match self {
            Vector::Fixed { x, y, coord } => Vector::Fixed {
                x: x * rhs,
                y: y * rhs,
                coord,
            },
            Vector::Binop(_) => Vector::binop(self, Op::Mul, rhs),
        }
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    fn div(self, rhs: f64) -> Vector {
        match self {
            Vector::Fixed { x, y, coord } => Vector::Fixed {
                x: x / rhs,
                y: y / rhs,
                coord,
            },
            Vector::Binop(_) => Vector::binop(self, Op::Div, rhs),
        }
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        self * -1.0
    }
}

impl Shr for Vector {
    type Output = Vector;
    fn shr(self, rhs: Vector) -> Vector {
        self.meet(rhs)
    }
}

impl Shl for Vector {
    type Output = Vector;
    fn shl(self, rhs: Vector) -> Vector {
        rhs.meet(self)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vector::Fixed { x, y, coord } => write!(f, "Vector({x}, {y}, \"{coord}\")"),
            Vector::Binop(b) => fmt_binop(f, b, "Vector"),
        }
    }
}

/// A vector with only an x component.
pub fn width(x: f64, coordinate: impl Into<Coord>) -> Vector {
    Vector::new(x, 0.0, coordinate)
}

/// A vector with only a y component.
pub fn height(y: f64, coordinate: impl Into<Coord>) -> Vector {
    Vector::new(0.0, y, coordinate)
}

/// Render a deferred node. The meet of two plain same-kind values prints
/// as the tuple-coordinate constructor it desugared from; everything else
/// prints infix with parentheses around nested non-meet composites.
fn fmt_binop(f: &mut fmt::Formatter<'_>, b: &Binop, kind: &str) -> fmt::Result {
    if b.op == Op::Meet {
        match (&b.lhs, &b.rhs) {
            (
                Operand::Point(Point::Fixed { x, coord: lc, .. }),
                Operand::Point(Point::Fixed { y, coord: rc, .. }),
            ) => return write!(f, "{kind}({x}, {y}, (\"{lc}\", \"{rc}\"))"),
            (
                Operand::Vector(Vector::Fixed { x, coord: lc, .. }),
                Operand::Vector(Vector::Fixed { y, coord: rc, .. }),
            ) => return write!(f, "{kind}({x}, {y}, (\"{lc}\", \"{rc}\"))"),
            _ => {}
        }
    }
    fmt_operand(f, &b.lhs)?;
    write!(f, " {} ", b.op)?;
    fmt_operand(f, &b.rhs)
}

fn fmt_operand(f: &mut fmt::Formatter<'_>, operand: &Operand) -> fmt::Result {
    let parenthesize = match operand {
        Operand::Point(Point::Binop(b)) | Operand::Vector(Vector::Binop(b)) => b.op != Op::Meet,
        _ => false,
    };
    if parenthesize {
        write!(f, "({operand})")
    } else {
        write!(f, "{operand}")
    }
}
