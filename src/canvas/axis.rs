//! Live axis frames referenced by the resolver.

use std::cell::Cell;
use std::fmt;

use glam::{DAffine2, DVec2, dvec2};

/// Current transforms of a plotting axis, both into absolute inches.
///
/// The canvas stores whatever implements this and queries it again on
/// every resolution, so limit changes made after registration are
/// observed. A plotting subsystem hooks its own axes into the canvas by
/// implementing this trait and handing an `Rc` to
/// [`Canvas::register_axis`](crate::Canvas::register_axis).
pub trait AxisFrame {
    /// Transform from the axis data frame to absolute inches.
    fn data_transform(&self) -> DAffine2;

    /// Transform from the axis 0..1 relative box to absolute inches.
    fn box_transform(&self) -> DAffine2;
}

/// A minimal plotting axis owned by the canvas.
///
/// The bounding box is fixed when the axis is created; the data limits
/// start at 0..1 and stay adjustable through a shared handle, which is
/// what makes axis-data coordinates late-bound: the same symbolic point
/// resolves differently after [`Axis::set_xlim`].
pub struct Axis {
    ll: DVec2,
    ur: DVec2,
    xlim: Cell<(f64, f64)>,
    ylim: Cell<(f64, f64)>,
}

impl Axis {
    pub(crate) fn new(ll: DVec2, ur: DVec2) -> Axis {
        Axis {
            ll,
            ur,
            xlim: Cell::new((0.0, 1.0)),
            ylim: Cell::new((0.0, 1.0)),
        }
    }

    /// Corners of the bounding box in absolute inches, lower-left first.
    pub fn bounds(&self) -> (DVec2, DVec2) {
        (self.ll, self.ur)
    }

    pub fn xlim(&self) -> (f64, f64) {
        self.xlim.get()
    }

    pub fn ylim(&self) -> (f64, f64) {
        self.ylim.get()
    }

    pub fn set_xlim(&self, lo: f64, hi: f64) {
        self.xlim.set((lo, hi));
    }

    pub fn set_ylim(&self, lo: f64, hi: f64) {
        self.ylim.set((lo, hi));
    }
}

impl AxisFrame for Axis {
    fn data_transform(&self) -> DAffine2 {
        let (x0, x1) = self.xlim.get();
        let (y0, y1) = self.ylim.get();
        let scale = (self.ur - self.ll) / dvec2(x1 - x0, y1 - y0);
        let origin = self.ll - dvec2(x0, y0) * scale;
        DAffine2::from_translation(origin) * DAffine2::from_scale(scale)
    }

    fn box_transform(&self) -> DAffine2 {
        DAffine2::from_translation(self.ll) * DAffine2::from_scale(self.ur - self.ll)
    }
}

impl fmt::Debug for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Axis")
            .field("ll", &self.ll)
            .field("ur", &self.ur)
            .field("xlim", &self.xlim.get())
            .field("ylim", &self.ylim.get())
            .finish()
    }
}
