// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical bands and the containment predicates used by the partition.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

/// Smallest band height that can still be split.
///
/// The lower half of a split starts one pixel below the midpoint, so anything
/// shorter than two pixels would produce an inverted lower band.
pub const MIN_SPLIT_HEIGHT: f64 = 2.0;

/// A vertical pixel interval `[top, bottom]` in page coordinates.
///
/// Bands are never inverted: [`Band::new`] orders its arguments.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Band {
    /// Top edge (smaller `y`).
    pub top: f64,
    /// Bottom edge (larger `y`).
    pub bottom: f64,
}

impl Band {
    /// Create a band spanning `a` to `b`, in either order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { top: a, bottom: b }
        } else {
            Self { top: b, bottom: a }
        }
    }

    /// The vertical extent of `rect`.
    pub fn of_rect(rect: Rect) -> Self {
        Self::new(rect.min_y(), rect.max_y())
    }

    /// `bottom - top`.
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// Halfway between `top` and `bottom`, rounded down to a whole pixel.
    ///
    /// With a whole-pixel midpoint every `y` accepted by a band is accepted by
    /// at least one of its halves, see [`Band::contains_y`].
    pub fn midpoint(self) -> f64 {
        ((self.top + self.bottom) * 0.5).floor()
    }

    /// Whether `y` falls inside the band, with one pixel of slack on each side.
    ///
    /// The comparison rounds `y` towards the band (`ceil` against the top,
    /// `floor` against the bottom) so that points in the one-pixel gap between
    /// the two halves of a split still reach at least one of them.
    pub fn contains_y(self, y: f64) -> bool {
        !(y.ceil() < self.top || y.floor() > self.bottom)
    }

    /// Vertical overlap between `rect` and the band, clamped to the band.
    ///
    /// Negative when `rect` lies entirely above or below the band.
    pub fn overlap(self, rect: Rect) -> f64 {
        self.bottom.min(rect.max_y()) - self.top.max(rect.min_y())
    }

    /// Fraction of the band height covered by `rect`.
    ///
    /// A degenerate (zero-height) band reports `1.0` for every rectangle, so
    /// that nothing is ever pushed below it.
    pub fn overlap_ratio(self, rect: Rect) -> f64 {
        let height = self.height();
        if height <= 0.0 {
            return 1.0;
        }
        self.overlap(rect) / height
    }

    /// Split at the midpoint into `[top, mid]` and `[mid + 1, bottom]`.
    ///
    /// Returns `None` for bands shorter than [`MIN_SPLIT_HEIGHT`].
    pub fn split(self) -> Option<(Self, Self)> {
        if self.height() < MIN_SPLIT_HEIGHT {
            return None;
        }
        let mid = self.midpoint();
        Some((
            Self {
                top: self.top,
                bottom: mid,
            },
            Self {
                top: mid + 1.0,
                bottom: self.bottom,
            },
        ))
    }
}

/// Whether `pt` lies strictly inside `rect`.
///
/// Points exactly on an edge are outside.
pub fn strictly_contains(rect: Rect, pt: Point) -> bool {
    pt.y > rect.min_y() && pt.y < rect.max_y() && pt.x > rect.min_x() && pt.x < rect.max_x()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_orders_edges() {
        let band = Band::new(40.0, 10.0);
        assert_eq!(band.top, 10.0);
        assert_eq!(band.bottom, 40.0);
        assert_eq!(band.height(), 30.0);
    }

    #[test]
    fn contains_y_has_pixel_slack() {
        let band = Band::new(100.0, 200.0);
        assert!(band.contains_y(150.0));
        assert!(band.contains_y(99.5), "ceil(99.5) reaches the top edge");
        assert!(band.contains_y(200.9), "floor(200.9) reaches the bottom edge");
        assert!(!band.contains_y(98.9));
        assert!(!band.contains_y(201.0));
    }

    #[test]
    fn overlap_ratio_clamps_to_band() {
        let band = Band::new(0.0, 100.0);
        let inside = Rect::new(0.0, 10.0, 50.0, 30.0);
        let spilling = Rect::new(0.0, 50.0, 50.0, 400.0);
        let above = Rect::new(0.0, -80.0, 50.0, -20.0);

        assert_eq!(band.overlap_ratio(inside), 0.2);
        assert_eq!(band.overlap_ratio(spilling), 0.5);
        assert!(band.overlap_ratio(above) < 0.0);
    }

    #[test]
    fn degenerate_band_counts_everything_as_covering() {
        let band = Band::new(5.0, 5.0);
        assert_eq!(band.overlap_ratio(Rect::new(0.0, 0.0, 1.0, 1.0)), 1.0);
    }

    #[test]
    fn split_never_inverts() {
        let (upper, lower) = Band::new(0.0, 1000.0).split().unwrap();
        assert_eq!(upper, Band::new(0.0, 500.0));
        assert_eq!(lower, Band::new(501.0, 1000.0));

        let (upper, lower) = Band::new(0.0, 15.0).split().unwrap();
        assert_eq!(upper.bottom, 7.0);
        assert_eq!(lower.top, 8.0);

        assert!(Band::new(0.0, 1.5).split().is_none());
        let (upper, lower) = Band::new(0.5, 2.5).split().unwrap();
        assert!(upper.top <= upper.bottom, "upper band must not be inverted");
        assert!(lower.top <= lower.bottom, "lower band must not be inverted");
    }

    #[test]
    fn split_halves_leave_no_gap() {
        let band = Band::new(0.0, 15.0);
        let (upper, lower) = band.split().unwrap();
        for step in 0..=60 {
            let y = f64::from(step) * 0.25;
            assert!(
                upper.contains_y(y) || lower.contains_y(y),
                "y = {y} is reachable from neither half"
            );
        }
    }

    #[test]
    fn containment_is_edge_exclusive() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(strictly_contains(rect, Point::new(15.0, 15.0)));
        assert!(!strictly_contains(rect, Point::new(10.0, 15.0)));
        assert!(!strictly_contains(rect, Point::new(20.0, 15.0)));
        assert!(!strictly_contains(rect, Point::new(15.0, 10.0)));
        assert!(!strictly_contains(rect, Point::new(15.0, 20.0)));
    }
}
