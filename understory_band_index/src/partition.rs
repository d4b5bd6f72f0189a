// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recursive band partition.

use alloc::vec::Vec;
use core::fmt::{self, Debug};

use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::band::{Band, strictly_contains};
use crate::{IGNORE_PERCENT_THRESHOLD, SPLIT_SIZE};

/// Tuning knobs for [`BandPartition`] construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PartitionParams {
    /// Minimum band overlap ratio for an element to be tested at a node
    /// instead of being pushed down to its children.
    pub ignore_percent_threshold: f64,
    /// Number of minor elements at which a band is split in two.
    ///
    /// A value of `0` behaves like `1`.
    pub split_size: usize,
}

impl Default for PartitionParams {
    fn default() -> Self {
        Self {
            ignore_percent_threshold: IGNORE_PERCENT_THRESHOLD,
            split_size: SPLIT_SIZE,
        }
    }
}

/// Handle of a node inside a [`BandPartition`].
///
/// Only meaningful for the partition that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    const ROOT: Self = Self(0);

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

struct Node<E> {
    band: Band,
    elements: Vec<E>,
    children: Option<[NodeId; 2]>,
}

impl<E> Node<E> {
    fn leaf(band: Band) -> Self {
        Self {
            band,
            elements: Vec::new(),
            children: None,
        }
    }
}

/// A band partition over a set of element handles.
///
/// The partition stores handles only. Geometry is supplied by a `bounds`
/// callback, read once per element while building (to classify elements
/// against bands) and again on every query (to test containment against the
/// element's current box).
///
/// Nodes live in a flat arena; the root is always present, even for an empty
/// input set.
pub struct BandPartition<E> {
    nodes: Vec<Node<E>>,
    params: PartitionParams,
    len: usize,
}

impl<E: Copy> BandPartition<E> {
    /// Build a partition over `elements` covering `band`, with default parameters.
    pub fn build<I, F>(elements: I, band: Band, bounds: F) -> Self
    where
        I: IntoIterator<Item = E>,
        F: Fn(E) -> Rect,
    {
        Self::build_with_params(elements, band, bounds, PartitionParams::default())
    }

    /// Build a partition over `elements` covering `band`.
    ///
    /// Each node classifies its input by band overlap ratio. Elements at or
    /// above [`PartitionParams::ignore_percent_threshold`] are *major* and kept
    /// at the node. When the remaining *minor* elements number fewer than
    /// [`PartitionParams::split_size`] they are kept too and the node is a leaf.
    /// Otherwise the band is split at its midpoint and the minors are handed to
    /// the upper half (elements starting above the midpoint) and the lower half
    /// (elements ending at or below it). Elements straddling the midpoint go to
    /// both halves.
    pub fn build_with_params<I, F>(
        elements: I,
        band: Band,
        bounds: F,
        params: PartitionParams,
    ) -> Self
    where
        I: IntoIterator<Item = E>,
        F: Fn(E) -> Rect,
    {
        let input: Vec<(E, Rect)> = elements.into_iter().map(|e| (e, bounds(e))).collect();
        let len = input.len();
        let split_size = params.split_size.max(1);

        let mut nodes = Vec::new();
        nodes.push(Node::leaf(band));
        let mut pending: Vec<(NodeId, Vec<(E, Rect)>)> = Vec::new();
        pending.push((NodeId::ROOT, input));

        while let Some((id, input)) = pending.pop() {
            let band = nodes[id.idx()].band;
            let (mut major, minor): (Vec<_>, Vec<_>) = input
                .into_iter()
                .partition(|(_, rect)| band.overlap_ratio(*rect) >= params.ignore_percent_threshold);

            let halves = if minor.len() < split_size {
                None
            } else {
                band.split()
            };
            let Some((upper, lower)) = halves else {
                major.extend(minor);
                nodes[id.idx()].elements = major.into_iter().map(|(e, _)| e).collect();
                continue;
            };

            let mid = band.midpoint();
            let upper_input: Vec<_> = minor
                .iter()
                .copied()
                .filter(|(_, r)| r.min_y() < mid)
                .collect();
            let lower_input: Vec<_> = minor
                .into_iter()
                .filter(|(_, r)| r.max_y() >= mid)
                .collect();

            let upper_id = push_node(&mut nodes, upper);
            let lower_id = push_node(&mut nodes, lower);
            let node = &mut nodes[id.idx()];
            node.elements = major.into_iter().map(|(e, _)| e).collect();
            node.children = Some([upper_id, lower_id]);

            pending.push((lower_id, lower_input));
            pending.push((upper_id, upper_input));
        }

        Self { nodes, params, len }
    }

    /// Visit every element whose current box strictly contains `(x, y)`.
    ///
    /// Subtrees whose band does not contain `y` are skipped. An element that
    /// was handed to both halves of a split may be visited twice when `y`
    /// falls within a pixel of the split.
    pub fn visit_point<F, V>(&self, x: f64, y: f64, bounds: F, mut f: V)
    where
        F: Fn(E) -> Rect,
        V: FnMut(E),
    {
        let pt = Point::new(x, y);
        let mut stack: SmallVec<[NodeId; 32]> = SmallVec::new();
        stack.push(NodeId::ROOT);
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.idx()];
            if !node.band.contains_y(y) {
                continue;
            }
            if let Some([upper, lower]) = node.children {
                stack.push(lower);
                stack.push(upper);
            }
            for &e in &node.elements {
                if strictly_contains(bounds(e), pt) {
                    f(e);
                }
            }
        }
    }

    /// Collect every element whose current box strictly contains `(x, y)`.
    ///
    /// See [`BandPartition::visit_point`] for duplicate semantics.
    pub fn query_point<F>(&self, x: f64, y: f64, bounds: F) -> Vec<E>
    where
        F: Fn(E) -> Rect,
    {
        let mut out = Vec::new();
        self.visit_point(x, y, bounds, |e| out.push(e));
        out
    }
}

impl<E> BandPartition<E> {
    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// The band covered by the whole partition.
    pub fn root_band(&self) -> Band {
        self.nodes[NodeId::ROOT.idx()].band
    }

    /// The parameters this partition was built with.
    pub fn params(&self) -> PartitionParams {
        self.params
    }

    /// Band covered by `node`.
    pub fn band(&self, node: NodeId) -> Option<Band> {
        self.nodes.get(node.idx()).map(|n| n.band)
    }

    /// Elements tested directly at `node`.
    pub fn elements(&self, node: NodeId) -> Option<&[E]> {
        self.nodes.get(node.idx()).map(|n| n.elements.as_slice())
    }

    /// The upper and lower halves of `node`, or `None` for a leaf.
    pub fn children(&self, node: NodeId) -> Option<[NodeId; 2]> {
        self.nodes.get(node.idx()).and_then(|n| n.children)
    }

    /// Total number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of elements the partition was built from.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the partition was built from no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels, counting the root as `1`.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: SmallVec<[(NodeId, usize); 32]> = SmallVec::new();
        stack.push((NodeId::ROOT, 1));
        while let Some((id, level)) = stack.pop() {
            deepest = deepest.max(level);
            if let Some([upper, lower]) = self.nodes[id.idx()].children {
                stack.push((upper, level + 1));
                stack.push((lower, level + 1));
            }
        }
        deepest
    }
}

impl<E> Debug for BandPartition<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stored: usize = self.nodes.iter().map(|n| n.elements.len()).sum();
        f.debug_struct("BandPartition")
            .field("band", &self.root_band())
            .field("elements", &self.len)
            .field("stored", &stored)
            .field("nodes", &self.nodes.len())
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

fn push_node<E>(nodes: &mut Vec<Node<E>>, band: Band) -> NodeId {
    let idx = u32::try_from(nodes.len()).unwrap_or(u32::MAX);
    nodes.push(Node::leaf(band));
    NodeId(idx)
}
