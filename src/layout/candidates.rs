use super::geometry::{Rect, rotate_point};
use crate::config::PlacementConfig;

/// Candidate label positions for one bubble: an angular sweep around the
/// bubble with stepwise radial escalation.
///
/// The base candidate sits to the right of the bubble, its left edge at
/// `cx + radius + 2 * margin` and vertically centered on the bubble. Each
/// sweep rotates the rect's anchor corner rigidly around the bubble center
/// (the rect itself stays axis-aligned); once a full circle of angles is
/// exhausted the radial offset grows by `radial_step` and the sweep restarts.
/// The generator is bounded by `max_radial_steps` rings.
#[derive(Debug, Clone)]
pub struct CandidateSweep {
    center: (f32, f32),
    base_offset: f32,
    label_width: f32,
    label_height: f32,
    radial_step: f32,
    angle_count: usize,
    max_radial_steps: usize,
}

impl CandidateSweep {
    pub fn new(
        center: (f32, f32),
        radius: f32,
        label_width: f32,
        label_height: f32,
        placement: &PlacementConfig,
    ) -> Self {
        Self {
            center,
            base_offset: radius + 2.0 * placement.margin,
            label_width,
            label_height,
            radial_step: placement.radial_step,
            // Inclusive sweep: both 0 and a full turn are emitted, the way the
            // anchor walk visits 17 stops for sixteenths of a circle.
            angle_count: placement.rotation_steps + 1,
            max_radial_steps: placement.max_radial_steps,
        }
    }

    pub fn angle_count(&self) -> usize {
        self.angle_count
    }

    pub fn max_radial_steps(&self) -> usize {
        self.max_radial_steps
    }

    /// Candidate rect for a given radial ring and angle index.
    pub fn rect_at(&self, ring: usize, angle_index: usize) -> Rect {
        let offset = self.base_offset + ring as f32 * self.radial_step;
        let anchor = (
            self.center.0 + offset,
            self.center.1 - self.label_height / 2.0,
        );
        let angle =
            angle_index as f32 * std::f32::consts::TAU / (self.angle_count - 1).max(1) as f32;
        let (x, y) = rotate_point(anchor, self.center, angle);
        Rect::new(x, y, self.label_width, self.label_height)
    }

    /// All candidates of one ring, in sweep order.
    pub fn ring(&self, ring: usize) -> impl Iterator<Item = Rect> + '_ {
        (0..self.angle_count).map(move |angle_index| self.rect_at(ring, angle_index))
    }

    /// Every candidate the sweep will ever produce, ring by ring. Finite by
    /// construction.
    pub fn iter(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.max_radial_steps).flat_map(move |ring| self.ring(ring))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweep() -> CandidateSweep {
        CandidateSweep::new((100.0, 100.0), 30.0, 40.0, 12.0, &PlacementConfig::default())
    }

    #[test]
    fn base_candidate_sits_right_of_bubble() {
        let rect = sweep().rect_at(0, 0);
        // radius 30 + 2 * margin 5 = offset 40.
        assert!((rect.x - 140.0).abs() < 1e-4);
        assert!((rect.y - 94.0).abs() < 1e-4);
        assert_eq!(rect.width, 40.0);
        assert_eq!(rect.height, 12.0);
    }

    #[test]
    fn sweep_has_inclusive_angle_list() {
        let sweep = sweep();
        assert_eq!(sweep.angle_count(), 17);
        let first = sweep.rect_at(0, 0);
        let last = sweep.rect_at(0, 16);
        // A full turn lands back on the base candidate.
        assert!((first.x - last.x).abs() < 1e-3);
        assert!((first.y - last.y).abs() < 1e-3);
    }

    #[test]
    fn quarter_turn_rotates_anchor() {
        let rect = sweep().rect_at(0, 4);
        // Anchor (140, 94) rotated a quarter turn around (100, 100) lands at
        // (106, 140).
        assert!((rect.x - 106.0).abs() < 1e-3);
        assert!((rect.y - 140.0).abs() < 1e-3);
    }

    #[test]
    fn radial_escalation_grows_offset() {
        let sweep = sweep();
        let ring0 = sweep.rect_at(0, 0);
        let ring3 = sweep.rect_at(3, 0);
        assert!((ring3.x - ring0.x - 15.0).abs() < 1e-4);
    }

    #[test]
    fn iterator_is_bounded() {
        let sweep = sweep();
        let total = sweep.iter().count();
        assert_eq!(total, sweep.max_radial_steps() * sweep.angle_count());
    }
}
