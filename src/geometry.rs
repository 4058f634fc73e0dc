//! Geometric primitives for OCR layout analysis.
//!
//! This module provides basic geometric types and operations used throughout
//! the paragraph detection pipeline. Coordinates follow the scanner raster
//! convention: the origin is the top-left corner of the page and y grows
//! downward, so a line physically below another has a larger `y`.

use serde::{Deserialize, Serialize};

/// A 2D point in page space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_reflow::geometry::Point;
    ///
    /// let point = Point::new(10.0, 20.0);
    /// assert_eq!(point.x, 10.0);
    /// assert_eq!(point.y, 20.0);
    /// ```
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in page space (top-left origin, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of top-left corner
    pub x: f32,
    /// Y coordinate of top-left corner
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_reflow::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the top edge y-coordinate.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Get the center point of the rectangle.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_reflow::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// let center = rect.center();
    /// assert_eq!(center.x, 50.0);
    /// assert_eq!(center.y, 25.0);
    /// ```
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Vertical whitespace between this rectangle and one below it.
    ///
    /// Returns the gap between this rectangle's bottom edge and `below`'s
    /// top edge, clamped at zero. Overlapping or out-of-order boxes (OCR
    /// occasionally emits them for skewed scans) therefore report a gap of
    /// zero rather than a negative distance.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_reflow::geometry::Rect;
    ///
    /// let upper = Rect::new(0.0, 0.0, 100.0, 12.0);
    /// let lower = Rect::new(0.0, 30.0, 100.0, 12.0);
    /// assert_eq!(upper.gap_below(&lower), 18.0);
    ///
    /// let overlapping = Rect::new(0.0, 6.0, 100.0, 12.0);
    /// assert_eq!(upper.gap_below(&overlapping), 0.0);
    /// ```
    pub fn gap_below(&self, below: &Rect) -> f32 {
        let gap = below.top() - self.bottom();
        if gap.is_finite() { gap.max(0.0) } else { 0.0 }
    }

    /// Check whether this rectangle carries unusable metrics.
    ///
    /// OCR engines sometimes emit records with missing geometry, which
    /// arrives here as zero or non-finite dimensions. Classification falls
    /// back to text heuristics for such lines instead of failing the
    /// document.
    pub fn is_degenerate(&self) -> bool {
        !(self.x.is_finite() && self.y.is_finite())
            || !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}
