use super::geometry::Rect;
use super::placement::PlacedLabel;
use crate::ir::Category;

/// Fully resolved chart geometry, ready for a renderer.
#[derive(Debug, Clone)]
pub struct ChartLayout {
    pub width: f32,
    pub height: f32,
    pub plot: Rect,
    pub title: Option<String>,
    /// One entry per surviving input record, in input order.
    pub bubbles: Vec<BubbleLayout>,
    /// Parallel to `bubbles`.
    pub labels: Vec<PlacedLabel>,
    /// Tick label and pixel x, along the bottom axis.
    pub x_ticks: Vec<(String, f32)>,
    /// Tick label and pixel y, along the left axis.
    pub y_ticks: Vec<(String, f32)>,
}

#[derive(Debug, Clone)]
pub struct BubbleLayout {
    pub label: String,
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    /// Draw order rank: higher draws later, on top.
    pub priority: f32,
    pub magnitude: f32,
    pub category: Category,
    pub color: String,
}
