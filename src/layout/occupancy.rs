use super::geometry::{Circle, Rect};

/// Registry of everything already claimed on the canvas: reserved rects (axis
/// strips, accepted label boxes) and prioritized circles (bubbles plus
/// leader-line terminus markers). Append-only during a placement run.
#[derive(Debug, Default)]
pub struct OccupancyMap {
    rects: Vec<Rect>,
    circles: Vec<Circle>,
}

impl OccupancyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_rect(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    pub fn push_circle(&mut self, circle: Circle) {
        self.circles.push(circle);
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// A candidate rect is free when it keeps `margin` clearance from every
    /// registered rect and touches no registered circle. Circles get zero
    /// clearance: a label may sit flush against a bubble rim, only crossing
    /// it is an overlap.
    pub fn is_free(&self, rect: &Rect, margin: f32) -> bool {
        if self
            .rects
            .iter()
            .any(|occupied| rect.overlaps_with_clearance(occupied, margin))
        {
            return false;
        }
        !self.circles.iter().any(|circle| rect.overlaps_circle(circle))
    }

    /// True when any circle with a strictly higher priority covers `point`.
    /// Used by the leader-line walk: samples hidden under a later-drawn bubble
    /// (or a claimed terminus marker) are not valid attachment spots.
    pub fn occluded_above(&self, point: (f32, f32), priority: f32) -> bool {
        self.circles
            .iter()
            .any(|circle| circle.priority > priority && circle.contains_point(point))
    }
}
