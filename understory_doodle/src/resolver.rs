// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point and stroke resolution against a document subtree.

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use kurbo::Point;
use understory_band_index::{Band, BandPartition, PartitionParams};

use crate::APPEARANCE_THRESHOLD;
use crate::document::Document;
use crate::error::ResolveError;
use crate::stroke::Stroke;
use crate::surface::DoodleSurface;

/// Tuning knobs for [`ElementResolver`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolverParams {
    /// Fraction of a stroke's points an element must contain to count as a
    /// candidate target.
    pub appearance_threshold: f64,
    /// Parameters for the underlying [`BandPartition`].
    pub partition: PartitionParams,
}

impl Default for ResolverParams {
    fn default() -> Self {
        Self {
            appearance_threshold: APPEARANCE_THRESHOLD,
            partition: PartitionParams::default(),
        }
    }
}

/// Resolves page points and strokes to the elements under them.
///
/// A resolver snapshots the set of visible descendants of a root element and
/// indexes them in a [`BandPartition`] banded to the root's vertical extent.
/// Element boxes are re-read from the [`Document`] on every query, but the set
/// of candidates and their band assignment are fixed at construction: build a
/// new resolver after the layout changes.
///
/// The resolver borrows the document for its whole lifetime and never mutates
/// it.
pub struct ElementResolver<'a, D: Document> {
    document: &'a D,
    root: D::Element,
    partition: BandPartition<D::Element>,
    params: ResolverParams,
}

impl<D: Document> fmt::Debug for ElementResolver<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementResolver")
            .field("root", &self.root)
            .field("partition", &self.partition)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl<'a, D: Document> ElementResolver<'a, D> {
    /// Build a resolver over `root`, or over the document body when `root` is `None`.
    ///
    /// Returns [`ResolveError::NotFound`] when there is neither.
    pub fn new(document: &'a D, root: Option<D::Element>) -> Result<Self, ResolveError> {
        Self::with_params(document, root, ResolverParams::default())
    }

    /// Like [`ElementResolver::new`], with explicit parameters.
    pub fn with_params(
        document: &'a D,
        root: Option<D::Element>,
        params: ResolverParams,
    ) -> Result<Self, ResolveError> {
        let root = root
            .or_else(|| document.body())
            .ok_or(ResolveError::NotFound)?;

        // Zero-area elements can never contain a point.
        let mut candidates = Vec::new();
        document.visit_descendants(root, |element| {
            let rect = document.bounds(element);
            if rect.width() > 0.0 && rect.height() > 0.0 {
                candidates.push(element);
            }
        });

        let band = Band::of_rect(document.bounds(root));
        let partition = BandPartition::build_with_params(
            candidates,
            band,
            |element| document.bounds(element),
            params.partition,
        );
        log::debug!(
            "built element resolver for {:?}: {} candidates, {} nodes, depth {}",
            root,
            partition.len(),
            partition.node_count(),
            partition.depth()
        );

        Ok(Self {
            document,
            root,
            partition,
            params,
        })
    }

    /// The root element this resolver was built for.
    pub fn root(&self) -> D::Element {
        self.root
    }

    /// The parameters this resolver was built with.
    pub fn params(&self) -> ResolverParams {
        self.params
    }

    /// The underlying partition.
    pub fn partition(&self) -> &BandPartition<D::Element> {
        &self.partition
    }

    /// Number of candidate elements (descendants with a non-empty box).
    pub fn element_count(&self) -> usize {
        self.partition.len()
    }

    /// Every element whose box strictly contains the page point `(x, y)`.
    ///
    /// Each element appears at most once; the order is unspecified.
    pub fn resolve_point(&self, x: f64, y: f64) -> Vec<D::Element> {
        let mut out = Vec::new();
        self.visit_unique(x, y, &mut out);
        out
    }

    /// Whether a click at the page point `(x, y)` lands on `element`.
    pub fn is_hit(&self, element: D::Element, x: f64, y: f64) -> bool {
        let mut hit = false;
        self.partition
            .visit_point(x, y, |e| self.document.bounds(e), |e| hit |= e == element);
        hit
    }

    /// The single element a stroke was drawn over.
    ///
    /// Every point of the stroke is resolved and each element is credited once
    /// per point it contains. Elements credited for at least
    /// [`ResolverParams::appearance_threshold`] of the points are candidates,
    /// and the one with the smallest area wins: when a stroke covers both a
    /// container and an element nested in it, the nested one is the more
    /// specific target. Equal areas go to the more frequently hit element.
    ///
    /// If no element reaches the threshold, the most frequently hit element is
    /// returned regardless of its area.
    ///
    /// Returns [`ResolveError::Unresolvable`] for an empty stroke or when no
    /// point is over any element.
    pub fn resolve_line(&self, stroke: &Stroke) -> Result<D::Element, ResolveError> {
        let points = stroke.points();
        if points.is_empty() {
            return Err(ResolveError::Unresolvable);
        }

        let tally = self.tally(points);
        let Some(&(most_hit, _)) = tally.first() else {
            log::trace!("stroke of {} points missed every element", points.len());
            return Err(ResolveError::Unresolvable);
        };

        let threshold = self.params.appearance_threshold * points.len() as f64;

        let mut best: Option<(D::Element, f64)> = None;
        for &(element, _) in tally.iter().take_while(|(_, hits)| *hits as f64 >= threshold) {
            let area = self.document.bounds(element).area();
            if best.is_none_or(|(_, smallest)| area < smallest) {
                best = Some((element, area));
            }
        }

        match best {
            Some((element, _)) => {
                log::trace!("stroke resolved to {element:?}");
                Ok(element)
            }
            None => {
                log::trace!("no element reached the appearance threshold, using {most_hit:?}");
                Ok(most_hit)
            }
        }
    }

    /// Resolve a stroke captured in `surface` coordinates.
    pub fn resolve_surface_line(
        &self,
        surface: &DoodleSurface,
        stroke: &Stroke,
    ) -> Result<D::Element, ResolveError> {
        self.resolve_line(&surface.stroke_to_page(stroke))
    }

    /// Resolve a click captured in `surface` coordinates.
    ///
    /// Clicks outside the surface resolve to nothing.
    pub fn resolve_surface_click(&self, surface: &DoodleSurface, pt: Point) -> Vec<D::Element> {
        if !surface.contains_offset(pt) {
            return Vec::new();
        }
        let page = surface.to_page(pt);
        self.resolve_point(page.x, page.y)
    }

    /// Per-element hit counts, most hit first. Ties keep first-hit order.
    fn tally(&self, points: &[Point]) -> Vec<(D::Element, usize)> {
        let mut slots: HashMap<D::Element, usize> = HashMap::new();
        let mut tally: Vec<(D::Element, usize)> = Vec::new();
        let mut hits = Vec::new();
        for pt in points {
            hits.clear();
            self.visit_unique(pt.x, pt.y, &mut hits);
            for &element in &hits {
                match slots.entry(element) {
                    Entry::Occupied(slot) => tally[*slot.get()].1 += 1,
                    Entry::Vacant(slot) => {
                        slot.insert(tally.len());
                        tally.push((element, 1));
                    }
                }
            }
        }
        tally.sort_by(|a, b| b.1.cmp(&a.1));
        tally
    }

    fn visit_unique(&self, x: f64, y: f64, out: &mut Vec<D::Element>) {
        self.partition.visit_point(
            x,
            y,
            |e| self.document.bounds(e),
            |e| {
                if !out.contains(&e) {
                    out.push(e);
                }
            },
        );
    }
}
