use super::geometry::{Circle, Rect, distance};
use super::occupancy::OccupancyMap;

const WALK_STEP: f32 = 1.0;

/// Find a visible leader-line attachment point on `circle` for a label at
/// `rect`, or `None` when the whole approach is occluded.
///
/// The walk samples unit steps from the bubble center towards the midpoint of
/// the rect edge facing the bubble. A sample is valid when it lies inside the
/// bubble itself and under no circle with a strictly higher priority. The
/// returned point is the midpoint of the first consecutive run of valid
/// samples, so the line terminus lands in the middle of a fully visible
/// chord; samples past the first interruption are never mixed in, or the
/// averaged point could land under the interrupting bubble.
pub fn attachment_point(
    circle: &Circle,
    rect: &Rect,
    occupancy: &OccupancyMap,
) -> Option<(f32, f32)> {
    let start = circle.center();
    let target = rect.near_edge_midpoint(start);
    let total = distance(start, target);
    if total <= f32::EPSILON {
        return None;
    }
    let dir = ((target.0 - start.0) / total, (target.1 - start.1) / total);
    let reach = circle.radius.min(total);

    let mut first: Option<(f32, f32)> = None;
    let mut last: Option<(f32, f32)> = None;
    let mut t = 0.0;
    while t <= reach {
        let sample = (start.0 + dir.0 * t, start.1 + dir.1 * t);
        if occupancy.occluded_above(sample, circle.priority) {
            if first.is_some() {
                break;
            }
        } else {
            if first.is_none() {
                first = Some(sample);
            }
            last = Some(sample);
        }
        t += WALK_STEP;
    }

    match (first, last) {
        (Some(a), Some(b)) => Some(((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)),
        _ => None,
    }
}
