// Geometry primitives shared by the placement engine. Everything works in
// pixel space with f32 and axis-aligned rectangles.

/// Axis-aligned rectangle, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains_point(&self, point: (f32, f32)) -> bool {
        point.0 >= self.x && point.0 <= self.max_x() && point.1 >= self.y && point.1 <= self.max_y()
    }

    pub fn inflate(&self, pad: f32) -> Rect {
        if pad <= 0.0 {
            return *self;
        }
        Rect::new(
            self.x - pad,
            self.y - pad,
            self.width + pad * 2.0,
            self.height + pad * 2.0,
        )
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }

    /// True when the two rects come closer than `clearance` on both axes.
    pub fn overlaps_with_clearance(&self, other: &Rect, clearance: f32) -> bool {
        self.inflate(clearance).intersects(other)
    }

    /// Overlap test against a circle: either the circle center sits inside the
    /// rect, or the point of the rect nearest to the center falls within the
    /// radius. Exact tangency counts as overlap, like [`Circle::contains_point`].
    pub fn overlaps_circle(&self, circle: &Circle) -> bool {
        if self.contains_point((circle.cx, circle.cy)) {
            return true;
        }
        let nearest_x = circle.cx.clamp(self.x, self.max_x());
        let nearest_y = circle.cy.clamp(self.y, self.max_y());
        distance((nearest_x, nearest_y), (circle.cx, circle.cy)) <= circle.radius
    }

    /// Midpoint of the rect edge closest to `point`.
    pub fn near_edge_midpoint(&self, point: (f32, f32)) -> (f32, f32) {
        let (cx, cy) = self.center();
        let midpoints = [
            (cx, self.y),
            (cx, self.max_y()),
            (self.x, cy),
            (self.max_x(), cy),
        ];
        let mut best = midpoints[0];
        let mut best_dist = distance(best, point);
        for candidate in &midpoints[1..] {
            let dist = distance(*candidate, point);
            if dist < best_dist {
                best_dist = dist;
                best = *candidate;
            }
        }
        best
    }
}

/// Circle with a z-priority. Higher priority means drawn later, on top of
/// lower ones; `f32::INFINITY` marks a claimed leader-line terminus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    pub priority: f32,
}

impl Circle {
    pub fn new(cx: f32, cy: f32, radius: f32, priority: f32) -> Self {
        Self {
            cx,
            cy,
            radius,
            priority,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.cx, self.cy)
    }

    pub fn contains_point(&self, point: (f32, f32)) -> bool {
        distance(point, (self.cx, self.cy)) <= self.radius
    }
}

pub fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

/// Rotate `point` around `origin` by `angle` radians (screen coordinates,
/// positive angle goes clockwise).
pub fn rotate_point(point: (f32, f32), origin: (f32, f32), angle: f32) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    let dx = point.0 - origin.0;
    let dy = point.1 - origin.1;
    (
        origin.0 + dx * cos - dy * sin,
        origin.1 + dx * sin + dy * cos,
    )
}
