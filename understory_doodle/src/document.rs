// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host document seam.

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::Rect;

/// Read-only view of a rendered page, as seen by the resolver.
///
/// Hosts implement this over whatever element tree they render: a DOM mirror,
/// a box tree, or the in-memory [`Page`](crate::Page). All rectangles are in
/// page coordinates, with any scroll offset already applied.
///
/// Geometry is read live: [`Document::bounds`] is called while building a
/// resolver and again on every query.
pub trait Document {
    /// Opaque element handle. Only used for identity and to re-query bounds.
    type Element: Copy + Eq + Hash + Debug;

    /// The top-level container used when no explicit root is given.
    fn body(&self) -> Option<Self::Element>;

    /// Current bounding box of `element`.
    ///
    /// Hosts that cannot report a box for an element should return a
    /// zero-area rectangle; such elements are never hit.
    fn bounds(&self, element: Self::Element) -> Rect;

    /// Call `f` for every descendant of `root`, excluding `root` itself.
    fn visit_descendants<F: FnMut(Self::Element)>(&self, root: Self::Element, f: F);
}
