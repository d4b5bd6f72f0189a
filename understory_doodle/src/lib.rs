// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_doodle --heading-base-level=0

//! Understory Doodle: anchor freehand annotations to page elements.
//!
//! A user doodles over a rendered document, circling a paragraph or
//! underlining a figure caption. To store that doodle as an annotation the
//! viewer needs to know *which element* it was drawn over. This crate answers
//! that question for whole strokes and for single clicks.
//!
//! - [`Document`]: the seam to the host's element tree. Hosts report a body
//!   element, per-element page-space bounds, and descendant traversal.
//! - [`ElementResolver`]: built once per root element. Indexes the root's
//!   visible descendants in an [`understory_band_index::BandPartition`] and
//!   answers [`resolve_point`](ElementResolver::resolve_point) and
//!   [`resolve_line`](ElementResolver::resolve_line) queries.
//! - [`Stroke`] and [`Tool`]: the captured gesture and its drawing metadata.
//! - [`DoodleSurface`]: the drawing canvas laid over the annotated element;
//!   converts surface-relative pointer offsets into page coordinates.
//! - [`Page`]: a small in-memory [`Document`] for hosts that mirror their
//!   layout, and for tests.
//!
//! ## Resolving a stroke
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_doodle::{ElementResolver, Page, Stroke};
//!
//! let mut page = Page::new();
//! let body = page.insert(None, Rect::new(0.0, 0.0, 800.0, 2000.0));
//! let article = page.insert(Some(body), Rect::new(100.0, 0.0, 700.0, 2000.0));
//! let caption = page.insert(Some(article), Rect::new(120.0, 400.0, 500.0, 440.0));
//!
//! let resolver = ElementResolver::new(&page, None).unwrap();
//!
//! // An underline drawn across the caption: every point is inside both the
//! // article and the caption, and the smaller caption wins.
//! let stroke = Stroke::default().with_points([(150.0, 430.0), (250.0, 432.0), (350.0, 431.0)]);
//! assert_eq!(resolver.resolve_line(&stroke), Ok(caption));
//!
//! // A click in the article margin only hits the article.
//! assert_eq!(resolver.resolve_point(650.0, 1000.0), [article]);
//! ```
//!
//! ## Decision rule
//!
//! [`ElementResolver::resolve_line`] credits each element once for every
//! stroke point it contains. Elements credited for at least
//! [`APPEARANCE_THRESHOLD`] of the points are candidates and the smallest one
//! wins, since a nested element is more specific than its container. When no
//! element reaches the threshold the most frequently hit element is used.
//! A stroke that hits nothing yields [`ResolveError::Unresolvable`].
//!
//! ## Staleness
//!
//! Element boxes are read from the [`Document`] at query time, but the set of
//! candidates is fixed when the resolver is built. Rebuild the resolver after
//! the layout changes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod document;
mod error;
mod page;
mod resolver;
mod stroke;
mod surface;

pub use document::Document;
pub use error::ResolveError;
pub use page::{ElementId, Page};
pub use resolver::{ElementResolver, ResolverParams};
pub use stroke::{ERASER_LINE_WIDTH, PEN_LINE_WIDTH, Stroke, Tool};
pub use surface::{DoodleSurface, MAX_SURFACE_HEIGHT};

pub use understory_band_index::{IGNORE_PERCENT_THRESHOLD, SPLIT_SIZE};

/// Default fraction of a stroke's points an element must contain to be
/// considered the stroke's target.
pub const APPEARANCE_THRESHOLD: f64 = 0.75;
