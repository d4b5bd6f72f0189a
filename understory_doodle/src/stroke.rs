// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Freehand strokes and their drawing metadata.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};
use peniko::Color;

/// Canvas line width for [`Tool::Pen`] strokes.
pub const PEN_LINE_WIDTH: f64 = 5.0;

/// Canvas line width for [`Tool::Eraser`] strokes.
pub const ERASER_LINE_WIDTH: f64 = 25.0;

/// The drawing tool a stroke was made with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Paints over the page.
    #[default]
    Pen,
    /// Clears previously drawn ink.
    Eraser,
}

impl Tool {
    /// Line width the canvas renderer uses for this tool.
    pub const fn line_width(self) -> f64 {
        match self {
            Self::Pen => PEN_LINE_WIDTH,
            Self::Eraser => ERASER_LINE_WIDTH,
        }
    }
}

/// One continuous freehand gesture.
///
/// Points are kept in the order they were captured. The tool, size and color
/// travel with the stroke but play no part in element resolution.
#[derive(Clone, Debug)]
pub struct Stroke {
    /// Tool used to draw the stroke.
    pub tool: Tool,
    /// Brush size selected in the toolbar.
    pub size: f64,
    /// Ink color.
    pub color: Color,
    points: Vec<Point>,
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(Tool::Pen, PEN_LINE_WIDTH, Color::BLACK)
    }
}

impl Stroke {
    /// An empty stroke with the given metadata.
    pub fn new(tool: Tool, size: f64, color: Color) -> Self {
        Self {
            tool,
            size,
            color,
            points: Vec::new(),
        }
    }

    /// Replace the points of this stroke.
    pub fn with_points<I, P>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        self.points = points.into_iter().map(Into::into).collect();
        self
    }

    /// Append a captured point.
    pub fn push(&mut self, point: impl Into<Point>) {
        self.points.push(point.into());
    }

    /// Points in capture order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no point has been captured yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest rectangle containing every point, or `None` for an empty stroke.
    pub fn bounds(&self) -> Option<Rect> {
        let (first, rest) = self.points.split_first()?;
        Some(
            rest.iter()
                .fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p)),
        )
    }

    /// A copy of this stroke with every point moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            tool: self.tool,
            size: self.size,
            color: self.color,
            points: self.points.iter().map(|p| *p + offset).collect(),
        }
    }
}
