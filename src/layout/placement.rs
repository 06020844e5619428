use super::candidates::CandidateSweep;
use super::error::LayoutError;
use super::geometry::{Circle, Rect};
use super::occupancy::OccupancyMap;
use super::visibility::attachment_point;
use crate::config::PlacementConfig;

/// One bubble waiting for a label, in processing order. The circle already
/// carries its draw priority.
#[derive(Debug, Clone)]
pub struct LabelRequest {
    pub circle: Circle,
    pub width: f32,
    pub height: f32,
}

/// Placement result for one label.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub rect: Rect,
    /// Leader-line terminus on the bubble, `None` for a free-floating label.
    pub attachment: Option<(f32, f32)>,
    /// Set when the radial search ran out of rings and the rect is the last
    /// candidate rather than a collision-free spot.
    pub bound_exceeded: bool,
}

enum AttachedSeek {
    Placed { rect: Rect, point: (f32, f32) },
    /// A free rect existed on this ring, but every approach to the bubble was
    /// occluded. The caller drops the leader-line requirement and retries
    /// from the same ring.
    Occluded { ring: usize },
    Exhausted,
}

/// Place a label for every request, in order. All bubble circles claim their
/// space up front, so early labels already avoid late bubbles. Each accepted
/// label appends its rect (and, when attached, an infinite-priority terminus
/// marker) to `occupancy` before the next bubble is processed.
///
/// This never fails to label a bubble: when the bounded search is exhausted
/// the last candidate is emitted with `bound_exceeded` set. The only hard
/// errors are non-positive radii or label sizes.
pub fn place_labels(
    requests: &[LabelRequest],
    placement: &PlacementConfig,
    occupancy: &mut OccupancyMap,
) -> Result<Vec<PlacedLabel>, LayoutError> {
    for (index, request) in requests.iter().enumerate() {
        if !request.circle.radius.is_finite() || request.circle.radius <= 0.0 {
            return Err(LayoutError::InvalidRadius {
                index,
                radius: request.circle.radius,
            });
        }
        if !request.width.is_finite()
            || !request.height.is_finite()
            || request.width <= 0.0
            || request.height <= 0.0
        {
            return Err(LayoutError::InvalidLabelSize {
                index,
                width: request.width,
                height: request.height,
            });
        }
    }

    for request in requests {
        occupancy.push_circle(request.circle);
    }

    let mut placed = Vec::with_capacity(requests.len());
    for request in requests {
        let sweep = CandidateSweep::new(
            request.circle.center(),
            request.circle.radius,
            request.width,
            request.height,
            placement,
        );
        let label = place_one(&sweep, &request.circle, placement, occupancy);
        occupancy.push_rect(label.rect);
        if let Some((x, y)) = label.attachment {
            occupancy.push_circle(Circle::new(x, y, placement.margin, f32::INFINITY));
        }
        placed.push(label);
    }
    Ok(placed)
}

fn place_one(
    sweep: &CandidateSweep,
    circle: &Circle,
    placement: &PlacementConfig,
    occupancy: &OccupancyMap,
) -> PlacedLabel {
    let mut start_ring = 0;
    if placement.leader_lines {
        match seek_attached(sweep, circle, placement.margin, occupancy) {
            AttachedSeek::Placed { rect, point } => {
                return PlacedLabel {
                    rect,
                    attachment: Some(point),
                    bound_exceeded: false,
                };
            }
            AttachedSeek::Occluded { ring } => start_ring = ring,
            AttachedSeek::Exhausted => start_ring = 0,
        }
    }

    match seek_free(sweep, placement.margin, occupancy, start_ring) {
        Ok(rect) => PlacedLabel {
            rect,
            attachment: None,
            bound_exceeded: false,
        },
        Err(last) => PlacedLabel {
            rect: last,
            attachment: None,
            bound_exceeded: true,
        },
    }
}

fn seek_attached(
    sweep: &CandidateSweep,
    circle: &Circle,
    margin: f32,
    occupancy: &OccupancyMap,
) -> AttachedSeek {
    for ring in 0..sweep.max_radial_steps() {
        let mut free_but_occluded = false;
        for rect in sweep.ring(ring) {
            if !occupancy.is_free(&rect, margin) {
                continue;
            }
            match attachment_point(circle, &rect, occupancy) {
                Some(point) => return AttachedSeek::Placed { rect, point },
                None => free_but_occluded = true,
            }
        }
        if free_but_occluded {
            return AttachedSeek::Occluded { ring };
        }
    }
    AttachedSeek::Exhausted
}

fn seek_free(
    sweep: &CandidateSweep,
    margin: f32,
    occupancy: &OccupancyMap,
    start_ring: usize,
) -> Result<Rect, Rect> {
    let mut last = sweep.rect_at(start_ring, 0);
    for ring in start_ring..sweep.max_radial_steps() {
        for rect in sweep.ring(ring) {
            last = rect;
            if occupancy.is_free(&rect, margin) {
                return Ok(rect);
            }
        }
    }
    Err(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::geometry::distance;

    fn config() -> PlacementConfig {
        PlacementConfig::default()
    }

    fn request(cx: f32, cy: f32, radius: f32, priority: f32) -> LabelRequest {
        LabelRequest {
            circle: Circle::new(cx, cy, radius, priority),
            width: 60.0,
            height: 14.0,
        }
    }

    #[test]
    fn single_bubble_takes_base_candidate_with_attachment() {
        let mut occupancy = OccupancyMap::new();
        let placed = place_labels(&[request(300.0, 300.0, 50.0, 0.0)], &config(), &mut occupancy)
            .unwrap();
        assert_eq!(placed.len(), 1);
        let label = &placed[0];
        assert!(!label.bound_exceeded);
        // Base candidate: left edge at cx + radius + 2 * margin, vertically
        // centered.
        assert!((label.rect.x - 360.0).abs() < 1e-3);
        assert!((label.rect.y - 293.0).abs() < 1e-3);
        // Attachment in the middle of the visible chord on the facing side.
        let point = label.attachment.unwrap();
        assert!(point.0 > 300.0);
        assert!((point.1 - 300.0).abs() < 1e-3);
        assert!((point.0 - 325.0).abs() < 1.0);
    }

    #[test]
    fn invalid_radius_fails_fast() {
        let mut occupancy = OccupancyMap::new();
        let err = place_labels(&[request(0.0, 0.0, 0.0, 0.0)], &config(), &mut occupancy)
            .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidRadius { index: 0, .. }));
        // Nothing was registered.
        assert!(occupancy.circles().is_empty());
        assert!(occupancy.rects().is_empty());
    }

    #[test]
    fn invalid_label_size_fails_fast() {
        let mut occupancy = OccupancyMap::new();
        let mut bad = request(0.0, 0.0, 10.0, 0.0);
        bad.height = -1.0;
        let err = place_labels(&[bad], &config(), &mut occupancy).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidLabelSize { index: 0, .. }));
    }

    #[test]
    fn occluded_side_forces_alternate_angle() {
        // Two equal bubbles 40 apart: the second one covers the first one's
        // whole right flank, so the first leader line must land elsewhere.
        let mut occupancy = OccupancyMap::new();
        let requests = [
            request(200.0, 200.0, 50.0, 0.0),
            request(240.0, 200.0, 50.0, 1.0),
        ];
        let placed = place_labels(&requests, &config(), &mut occupancy).unwrap();
        for (label, req) in placed.iter().zip(&requests) {
            assert!(!label.bound_exceeded);
            let point = label.attachment.expect("both bubbles stay attachable");
            assert!(req.circle.contains_point(point));
        }
        // The first terminus is visible: outside the higher-priority bubble.
        let first = placed[0].attachment.unwrap();
        assert!(distance(first, (240.0, 200.0)) > 50.0);
        // And the labels themselves cross neither bubble outline.
        for label in &placed {
            for req in &requests {
                assert!(!label.rect.overlaps_circle(&req.circle));
            }
        }
    }

    #[test]
    fn fully_occluded_bubble_degrades_to_floating_label() {
        let mut occupancy = OccupancyMap::new();
        // A bigger, later-drawn disc swallows the bubble completely.
        occupancy.push_circle(Circle::new(300.0, 300.0, 30.0, 5.0));
        let placed = place_labels(&[request(300.0, 300.0, 20.0, 0.0)], &config(), &mut occupancy)
            .unwrap();
        let label = &placed[0];
        assert!(label.attachment.is_none());
        assert!(!label.bound_exceeded);
        // The floating label still respects the covering disc.
        assert!(!label.rect.overlaps_circle(&Circle::new(300.0, 300.0, 30.0, 5.0)));
    }

    #[test]
    fn exhausted_search_emits_last_candidate_with_flag() {
        let mut occupancy = OccupancyMap::new();
        // No free spot anywhere near the bubble.
        occupancy.push_rect(Rect::new(-1000.0, -1000.0, 4000.0, 4000.0));
        let mut placement = config();
        placement.max_radial_steps = 3;
        let placed =
            place_labels(&[request(300.0, 300.0, 20.0, 0.0)], &placement, &mut occupancy).unwrap();
        let label = &placed[0];
        assert!(label.bound_exceeded);
        assert!(label.attachment.is_none());
        // Registry still grew: the run never drops a label.
        assert_eq!(occupancy.rects().len(), 2);
    }

    #[test]
    fn leader_lines_disabled_places_no_attachments() {
        let mut occupancy = OccupancyMap::new();
        let mut placement = config();
        placement.leader_lines = false;
        let placed = place_labels(
            &[
                request(200.0, 200.0, 50.0, 0.0),
                request(500.0, 200.0, 30.0, 1.0),
            ],
            &placement,
            &mut occupancy,
        )
        .unwrap();
        assert!(placed.iter().all(|label| label.attachment.is_none()));
        assert!(placed.iter().all(|label| !label.bound_exceeded));
        // No terminus markers: only the two bubble circles.
        assert_eq!(occupancy.circles().len(), 2);
    }
}
