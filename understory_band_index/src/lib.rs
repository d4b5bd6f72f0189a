// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_band_index --heading-base-level=0

//! Understory Band Index: point containment over skewed sets of page rectangles.
//!
//! Rendered documents have very uneven element density: a handful of large
//! containers span most of the page while thousands of small inline boxes are
//! packed into a few lines. A uniform grid wastes memory on the empty parts and
//! a balanced tree wastes build time on the sparse ones.
//!
//! [`BandPartition`] divides a vertical [`Band`] only where it is crowded:
//!
//! - Each node keeps the elements that cover at least
//!   [`PartitionParams::ignore_percent_threshold`] of its band height (the
//!   *major* elements) and tests them directly.
//! - When the remaining *minor* elements reach [`PartitionParams::split_size`],
//!   the band is split at its midpoint and the minors are pushed down to the
//!   two halves. Otherwise they are kept at the node, which becomes a leaf.
//! - Queries skip every subtree whose band does not contain the query `y`, and
//!   containment is strict: a point on an element edge is not inside it.
//!
//! The partition only stores element handles. Geometry is read from a
//! caller-supplied `bounds` callback while building and again at query time, so
//! containment is always tested against the element's current box. If the
//! layout changes enough to move elements between bands, rebuild the partition.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_band_index::{Band, BandPartition};
//!
//! let boxes = [
//!     Rect::new(0.0, 0.0, 800.0, 1000.0),
//!     Rect::new(40.0, 100.0, 400.0, 120.0),
//! ];
//! let part = BandPartition::build(0..boxes.len(), Band::new(0.0, 1000.0), |i| boxes[i]);
//!
//! let mut hits = part.query_point(50.0, 110.0, |i| boxes[i]);
//! hits.sort_unstable();
//! assert_eq!(hits, [0, 1]);
//!
//! // Outside the partition band nothing is reported.
//! assert!(part.query_point(50.0, 1200.0, |i| boxes[i]).is_empty());
//! ```
//!
//! Float inputs are assumed to be finite (no NaNs).
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod band;
mod partition;

pub use band::{Band, MIN_SPLIT_HEIGHT, strictly_contains};
pub use partition::{BandPartition, NodeId, PartitionParams};

/// Default minimum band overlap ratio for an element to stay at a node.
pub const IGNORE_PERCENT_THRESHOLD: f64 = 0.5;

/// Default number of minor elements that triggers a band split.
pub const SPLIT_SIZE: usize = 10;
