// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal in-memory element tree.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::document::Document;

/// Identifier of an element in a [`Page`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Element {
    bounds: Rect,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

/// An element tree with page-space bounding boxes.
///
/// Useful for hosts that mirror their layout into Rust once per frame, and for
/// tests. Elements cannot be removed; build a new page when the layout is
/// rebuilt.
///
/// The first element inserted without a parent becomes the page body, unless
/// another one is chosen with [`Page::set_body`].
#[derive(Clone, Debug, Default)]
pub struct Page {
    elements: Vec<Element>,
    body: Option<ElementId>,
}

impl Page {
    /// An empty page with no body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element under `parent` (or as a new root) and return its id.
    ///
    /// An unknown `parent` inserts the element as a root.
    pub fn insert(&mut self, parent: Option<ElementId>, bounds: Rect) -> ElementId {
        let id = ElementId(u32::try_from(self.elements.len()).unwrap_or(u32::MAX));
        let parent = parent.filter(|p| p.idx() < self.elements.len());
        if let Some(p) = parent {
            self.elements[p.idx()].children.push(id);
        } else if self.body.is_none() {
            self.body = Some(id);
        }
        self.elements.push(Element {
            bounds,
            parent,
            children: Vec::new(),
        });
        id
    }

    /// Choose the element used as the default resolution root.
    pub fn set_body(&mut self, id: ElementId) {
        if id.idx() < self.elements.len() {
            self.body = Some(id);
        }
    }

    /// Update an element's bounding box after a layout change.
    pub fn set_bounds(&mut self, id: ElementId, bounds: Rect) {
        if let Some(el) = self.elements.get_mut(id.idx()) {
            el.bounds = bounds;
        }
    }

    /// Bounding box of `id`, if it exists.
    pub fn element_bounds(&self, id: ElementId) -> Option<Rect> {
        self.elements.get(id.idx()).map(|el| el.bounds)
    }

    /// Parent of `id`, or `None` for roots and unknown ids.
    pub fn parent_of(&self, id: ElementId) -> Option<ElementId> {
        self.elements.get(id.idx()).and_then(|el| el.parent)
    }

    /// Children of `id` in insertion order.
    pub fn children_of(&self, id: ElementId) -> &[ElementId] {
        self.elements
            .get(id.idx())
            .map(|el| el.children.as_slice())
            .unwrap_or(&[])
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the page has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Document for Page {
    type Element = ElementId;

    fn body(&self) -> Option<ElementId> {
        self.body
    }

    fn bounds(&self, element: ElementId) -> Rect {
        self.element_bounds(element).unwrap_or(Rect::ZERO)
    }

    fn visit_descendants<F: FnMut(ElementId)>(&self, root: ElementId, mut f: F) {
        // Pre-order, children pushed in reverse so siblings come out in
        // insertion order.
        let mut stack: Vec<ElementId> = self.children_of(root).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            f(id);
            stack.extend(self.children_of(id).iter().rev().copied());
        }
    }
}
