//! Grid derivation: evenly spaced, evenly sized tiles over a box.
//!
//! Axis positions in a rectangular grid follow from the bounding box and
//! one of two partial specifications per dimension: the cell size (the
//! spacing follows) or the spacing (the cell size follows).

use std::rc::Rc;

use glam::DVec2;

use super::axis::Axis;
use super::Canvas;
use crate::errors::GridError;
use crate::metrics::{Coord, Point, Vector};

/// Cell sizing for [`Canvas::add_grid`].
///
/// Exactly one of `spacing`/`spacing_x`/`size`/`size_x` must be supplied,
/// and likewise for the y set. The shared `spacing`/`size` vectors count
/// for both dimensions; the `_x`/`_y` forms let the two dimensions mix
/// styles.
#[derive(Clone, Debug, Default)]
pub struct GridSpec {
    spacing: Option<Vector>,
    spacing_x: Option<Vector>,
    spacing_y: Option<Vector>,
    size: Option<Vector>,
    size_x: Option<Vector>,
    size_y: Option<Vector>,
}

impl GridSpec {
    pub fn new() -> GridSpec {
        GridSpec::default()
    }

    /// Inter-cell spacing for both dimensions.
    pub fn spacing(mut self, v: Vector) -> GridSpec {
        self.spacing = Some(v);
        self
    }

    /// Inter-cell spacing in x (the vector's x component is used).
    pub fn spacing_x(mut self, v: Vector) -> GridSpec {
        self.spacing_x = Some(v);
        self
    }

    /// Inter-cell spacing in y (the vector's y component is used).
    pub fn spacing_y(mut self, v: Vector) -> GridSpec {
        self.spacing_y = Some(v);
        self
    }

    /// Cell size for both dimensions.
    pub fn size(mut self, v: Vector) -> GridSpec {
        self.size = Some(v);
        self
    }

    /// Cell width (the vector's x component is used).
    pub fn size_x(mut self, v: Vector) -> GridSpec {
        self.size_x = Some(v);
        self
    }

    /// Cell height (the vector's y component is used).
    pub fn size_y(mut self, v: Vector) -> GridSpec {
        self.size_y = Some(v);
        self
    }
}

enum Choice<'a> {
    Spacing(&'a Vector),
    Size(&'a Vector),
}

fn choose<'a>(
    axis: char,
    spacing: &'a Option<Vector>,
    spacing_c: &'a Option<Vector>,
    size: &'a Option<Vector>,
    size_c: &'a Option<Vector>,
) -> Result<Choice<'a>, GridError> {
    let given = [spacing, spacing_c, size, size_c]
        .iter()
        .filter(|o| o.is_some())
        .count();
    if given != 1 {
        return Err(GridError::Sizing { axis });
    }
    if let Some(v) = spacing.as_ref().or(spacing_c.as_ref()) {
        Ok(Choice::Spacing(v))
    } else if let Some(v) = size.as_ref().or(size_c.as_ref()) {
        Ok(Choice::Size(v))
    } else {
        Err(GridError::Sizing { axis })
    }
}

/// Tile `[from, to]` with `count` cells separated by `spacing`.
///
/// Cell size is `((to - from) - (count - 1) * spacing) / count`; the i-th
/// cell starts at `from + i * (cell + spacing)`.
fn tile_span(from: f64, to: f64, spacing: f64, count: usize) -> Vec<(f64, f64)> {
    let cell = ((to - from) - (count as f64 - 1.0) * spacing) / count as f64;
    (0..count)
        .map(|i| {
            let base = from + i as f64 * (cell + spacing);
            (base, base + cell)
        })
        .collect()
}

impl Canvas {
    /// Create a grid of axes tiling the box from `pos_ll` to `pos_ur`.
    ///
    /// `names` fills the grid row-major with the first row at the top; a
    /// `None` leaves that cell empty. `nrows` fixes the row count and the
    /// column count follows from the number of names. When a dimension is
    /// given an explicit cell size and has a single cell, that cell is
    /// centered in the box instead of anchored at a corner.
    ///
    /// `unitname` optionally registers a unit spanning the whole grid
    /// box: origin at the box's lower-left corner, (1,1) at its upper
    /// right.
    ///
    /// Returns the created axes in name order.
    pub fn add_grid(
        &mut self,
        names: &[Option<&str>],
        nrows: usize,
        pos_ll: Point,
        pos_ur: Point,
        spec: GridSpec,
        unitname: Option<&str>,
    ) -> Result<Vec<Rc<Axis>>, GridError> {
        if nrows == 0 || names.is_empty() {
            return Err(GridError::Empty);
        }
        let x_choice = choose('x', &spec.spacing, &spec.spacing_x, &spec.size, &spec.size_x)?;
        let y_choice = choose('y', &spec.spacing, &spec.spacing_y, &spec.size, &spec.size_y)?;

        let ncols = names.len().div_ceil(nrows);
        let ll = self.reduce_point(&pos_ll)?;
        let ur = self.reduce_point(&pos_ur)?;
        let cols = self.plan_dimension(ll.x, ur.x, ncols, x_choice, |v| v.x)?;
        let mut rows = self.plan_dimension(ll.y, ur.y, nrows, y_choice, |v| v.y)?;
        // Names run top to bottom, the tiling bottom to top.
        rows.reverse();

        let mut axes = Vec::new();
        for (i, name) in names.iter().enumerate() {
            if let Some(name) = name {
                let (x0, x1) = cols[i % ncols];
                let (y0, y1) = rows[i / ncols];
                axes.push(self.add_axis(
                    name,
                    Point::new(x0, y0, Coord::Absolute),
                    Point::new(x1, y1, Coord::Absolute),
                )?);
            }
        }
        if let Some(unitname) = unitname {
            self.add_unit(
                unitname,
                Vector::from_vec2(ur - ll, Coord::Absolute),
                Point::from_vec2(ll, Coord::Absolute),
            )?;
        }
        Ok(axes)
    }

    fn plan_dimension(
        &self,
        from: f64,
        to: f64,
        count: usize,
        choice: Choice<'_>,
        component: fn(DVec2) -> f64,
    ) -> Result<Vec<(f64, f64)>, GridError> {
        let (from, to, spacing) = match choice {
            Choice::Spacing(v) => (from, to, component(self.reduce_vector(v)?)),
            Choice::Size(v) => {
                let cell = component(self.reduce_vector(v)?);
                if count > 1 {
                    let spacing = ((to - from) - cell * count as f64) / (count as f64 - 1.0);
                    (from, to, spacing)
                } else {
                    // One cell: center it in the span.
                    let slack = ((to - from) - cell) / 2.0;
                    (from + slack, to - slack, 0.0)
                }
            }
        };
        Ok(tile_span(from, to, spacing, count))
    }
}
