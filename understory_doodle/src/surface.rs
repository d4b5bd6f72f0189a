// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry of the drawing surface laid over an annotated element.

use kurbo::{Point, Rect, Size};

use crate::stroke::Stroke;

/// Tallest surface that will be allocated.
///
/// Canvas backends become sluggish above roughly ten thousand pixels and stop
/// working entirely past 32k, so the surface is clamped and anything below the
/// cut-off cannot be drawn on.
pub const MAX_SURFACE_HEIGHT: f64 = 10_000.0;

/// A drawing surface positioned over an element of the page.
///
/// Pointer input arrives in surface-relative offsets (the top-left corner of
/// the surface is `(0, 0)`); the resolver works in page coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DoodleSurface {
    origin: Point,
    size: Size,
}

impl DoodleSurface {
    /// A surface covering `attached`, which is given in page coordinates.
    ///
    /// The height is clamped to [`MAX_SURFACE_HEIGHT`].
    pub fn over(attached: Rect) -> Self {
        let attached = attached.abs();
        Self {
            origin: attached.origin(),
            size: Size::new(
                attached.width(),
                attached.height().min(MAX_SURFACE_HEIGHT),
            ),
        }
    }

    /// Top-left corner in page coordinates.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Surface dimensions.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The area covered by the surface, in page coordinates.
    pub fn page_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Whether a surface-relative point lies on the surface.
    ///
    /// The left and top edges are inclusive, the right and bottom edges
    /// exclusive, matching pixel addressing.
    pub fn contains_offset(&self, pt: Point) -> bool {
        pt.x >= 0.0 && pt.x < self.size.width && pt.y >= 0.0 && pt.y < self.size.height
    }

    /// Convert a surface-relative point to page coordinates.
    pub fn to_page(&self, pt: Point) -> Point {
        pt + self.origin.to_vec2()
    }

    /// Convert a page point to surface-relative coordinates.
    pub fn to_surface(&self, pt: Point) -> Point {
        pt - self.origin.to_vec2()
    }

    /// A copy of `stroke` with its points moved into page coordinates.
    pub fn stroke_to_page(&self, stroke: &Stroke) -> Stroke {
        stroke.translated(self.origin.to_vec2())
    }
}
