use crate::coords::Vec2;
use crate::error::Degeneracy;

/// Where the CSS gradient line starts (0%) and ends (100%), in normalized
/// space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EdgePoints {
    pub start: Vec2,
    pub end: Vec2,
}

impl EdgePoints {
    #[inline]
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Returns a copy with both Y coordinates multiplied by `k`.
    #[inline]
    fn scale_y(self, k: f64) -> Self {
        Self::new(self.start.scale_y(k), self.end.scale_y(k))
    }
}

/// Which 90° sector the CSS angle falls in.
///
/// Each sector fixes the pair of opposite box corners the gradient line runs
/// between. Boundaries belong to the lower sector (`angle <= 90` is `First`).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Quadrant {
    /// (0, 90]: bottom-left → top-right.
    First,
    /// (90, 180]: top-left → bottom-right.
    Second,
    /// (180, 270]: top-right → bottom-left.
    Third,
    /// (270, 360): bottom-right → top-left.
    Fourth,
}

impl Quadrant {
    pub fn of(angle: f64) -> Self {
        if angle <= 90.0 {
            Quadrant::First
        } else if angle <= 180.0 {
            Quadrant::Second
        } else if angle <= 270.0 {
            Quadrant::Third
        } else {
            Quadrant::Fourth
        }
    }

    /// Start and end corners of the unit box with top edge at y = 0 and
    /// bottom edge at y = -aspect.
    pub fn corners(self, aspect: f64) -> (Vec2, Vec2) {
        let top_left = Vec2::new(0.0, 0.0);
        let top_right = Vec2::new(1.0, 0.0);
        let bottom_right = Vec2::new(1.0, -aspect);
        let bottom_left = Vec2::new(0.0, -aspect);

        match self {
            Quadrant::First => (bottom_left, top_right),
            Quadrant::Second => (top_left, bottom_right),
            Quadrant::Third => (top_right, bottom_left),
            Quadrant::Fourth => (bottom_right, top_left),
        }
    }
}

/// Projects the box corners onto the gradient direction.
///
/// `p1`, `p2` are the normalized endpoints, `angle` their CSS angle and
/// `aspect` the box's `height / width`. Axis-aligned vectors use the box
/// midlines. Otherwise the line through each selected corner, perpendicular
/// to `p1 → p2`, is intersected with the (infinite) line `p1 → p2`.
pub fn edge_points(p1: Vec2, p2: Vec2, angle: f64, aspect: f64) -> Result<EdgePoints, Degeneracy> {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;

    if dx == 0.0 && dy == 0.0 {
        return Err(Degeneracy::ZeroLengthVector);
    }

    if dy == 0.0 {
        let left = Vec2::new(0.0, 0.5);
        let right = Vec2::new(1.0, 0.5);
        let midline = if dx > 0.0 { EdgePoints::new(left, right) } else { EdgePoints::new(right, left) };
        log::trace!("horizontal gradient, midline {midline:?}");
        return Ok(midline.scale_y(aspect));
    }
    if dx == 0.0 {
        let bottom = Vec2::new(0.5, -1.0);
        let top = Vec2::new(0.5, 0.0);
        let midline = if dy > 0.0 { EdgePoints::new(bottom, top) } else { EdgePoints::new(top, bottom) };
        log::trace!("vertical gradient, midline {midline:?}");
        return Ok(midline.scale_y(aspect));
    }

    let quadrant = Quadrant::of(angle);
    let (from, to) = quadrant.corners(aspect);
    let slope = -dx / dy;
    let perpendicular = |corner: Vec2| Vec2::new(corner.x + 1.0, corner.y + slope);

    let start = line_intersection(p1, p2, from, perpendicular(from))?;
    let end = line_intersection(p1, p2, to, perpendicular(to))?;
    log::trace!("{quadrant:?}: corners {from:?} -> {to:?}, edge points {start:?} -> {end:?}");
    Ok(EdgePoints::new(start, end))
}

/// Intersection of the infinite lines `a → b` and `c → d`.
pub fn line_intersection(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Result<Vec2, Degeneracy> {
    let denominator = (b.y - a.y) * (d.x - c.x) - (a.x - b.x) * (c.y - d.y);
    if denominator == 0.0 {
        return Err(Degeneracy::ParallelLines);
    }

    let x = ((b.x - a.x) * (d.x - c.x) * (c.y - a.y) + (b.y - a.y) * (d.x - c.x) * a.x
        - (d.y - c.y) * (b.x - a.x) * c.x)
        / denominator;
    let y = -((b.y - a.y) * (d.y - c.y) * (c.x - a.x) + (b.x - a.x) * (d.y - c.y) * a.y
        - (d.x - c.x) * (b.y - a.y) * c.y)
        / denominator;

    let p = Vec2::new(x, y);
    if p.is_finite() { Ok(p) } else { Err(Degeneracy::NonFinite) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::angle::gradient_angle;

    fn v(x: f64, y: f64) -> Vec2 { Vec2::new(x, y) }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    fn edges(p1: Vec2, p2: Vec2, aspect: f64) -> EdgePoints {
        edge_points(p1, p2, gradient_angle(p1, p2), aspect).unwrap()
    }

    // ── quadrant ──────────────────────────────────────────────────────────

    #[test]
    fn quadrant_boundaries_belong_to_lower_sector() {
        assert_eq!(Quadrant::of(0.0), Quadrant::First);
        assert_eq!(Quadrant::of(90.0), Quadrant::First);
        assert_eq!(Quadrant::of(90.5), Quadrant::Second);
        assert_eq!(Quadrant::of(180.0), Quadrant::Second);
        assert_eq!(Quadrant::of(270.0), Quadrant::Third);
        assert_eq!(Quadrant::of(270.1), Quadrant::Fourth);
    }

    #[test]
    fn corners_are_opposite() {
        for q in [Quadrant::First, Quadrant::Second, Quadrant::Third, Quadrant::Fourth] {
            let (a, b) = q.corners(2.0);
            assert_eq!(a.x + b.x, 1.0);
            assert_eq!(a.y + b.y, -2.0);
        }
    }

    // ── axis aligned ──────────────────────────────────────────────────────

    #[test]
    fn horizontal_uses_horizontal_midline() {
        let e = edges(v(0.0, 0.0), v(1.0, 0.0), 1.0);
        assert_eq!(e, EdgePoints::new(v(0.0, 0.5), v(1.0, 0.5)));

        let e = edges(v(1.0, 0.0), v(0.0, 0.0), 1.0);
        assert_eq!(e, EdgePoints::new(v(1.0, 0.5), v(0.0, 0.5)));
    }

    #[test]
    fn vertical_uses_vertical_midline() {
        let e = edges(v(0.0, 0.0), v(0.0, 1.0), 1.0);
        assert_eq!(e, EdgePoints::new(v(0.5, -1.0), v(0.5, 0.0)));

        let e = edges(v(0.0, 0.0), v(0.0, -1.0), 1.0);
        assert_eq!(e, EdgePoints::new(v(0.5, 0.0), v(0.5, -1.0)));
    }

    #[test]
    fn midlines_scale_with_aspect() {
        let e = edges(v(0.0, 0.0), v(0.0, -2.0), 2.0);
        assert_eq!(e, EdgePoints::new(v(0.5, 0.0), v(0.5, -2.0)));
    }

    #[test]
    fn zero_length_is_degenerate() {
        let err = edge_points(v(0.4, 0.4), v(0.4, 0.4), 0.0, 1.0);
        assert_eq!(err, Err(Degeneracy::ZeroLengthVector));
    }

    // ── general case ──────────────────────────────────────────────────────

    #[test]
    fn corner_to_corner_diagonal_hits_corners() {
        // 135°: top-left to bottom-right.
        let e = edges(v(0.0, 0.0), v(1.0, -1.0), 1.0);
        assert!(close(e.start, v(0.0, 0.0)), "{e:?}");
        assert!(close(e.end, v(1.0, -1.0)), "{e:?}");

        // 45°: bottom-left to top-right.
        let e = edges(v(0.0, -1.0), v(1.0, 0.0), 1.0);
        assert!(close(e.start, v(0.0, -1.0)), "{e:?}");
        assert!(close(e.end, v(1.0, 0.0)), "{e:?}");
    }

    #[test]
    fn short_diagonal_still_spans_the_box() {
        let e = edges(v(0.25, -0.25), v(0.75, -0.75), 1.0);
        assert!(close(e.start, v(0.0, 0.0)), "{e:?}");
        assert!(close(e.end, v(1.0, -1.0)), "{e:?}");
    }

    #[test]
    fn reversed_diagonal_swaps_corners() {
        // 315°: bottom-right to top-left.
        let e = edges(v(1.0, -1.0), v(0.0, 0.0), 1.0);
        assert!(close(e.start, v(1.0, -1.0)), "{e:?}");
        assert!(close(e.end, v(0.0, 0.0)), "{e:?}");
    }

    #[test]
    fn edge_points_lie_on_gradient_line() {
        let (p1, p2) = (v(0.1, -0.2), v(0.6, -0.9));
        let e = edges(p1, p2, 1.0);
        let d = p2 - p1;
        for p in [e.start, e.end] {
            let w = p - p1;
            assert!((d.x * w.y - d.y * w.x).abs() < 1e-9, "{p:?} off line");
        }
    }

    // ── line intersection ─────────────────────────────────────────────────

    #[test]
    fn crossing_lines_meet() {
        let p = line_intersection(v(0.0, 0.0), v(1.0, 1.0), v(0.0, 2.0), v(1.0, 1.0)).unwrap();
        assert!(close(p, v(1.0, 1.0)), "{p:?}");
    }

    #[test]
    fn parallel_lines_are_degenerate() {
        let err = line_intersection(v(0.0, 0.0), v(1.0, 1.0), v(0.0, 1.0), v(1.0, 2.0));
        assert_eq!(err, Err(Degeneracy::ParallelLines));
    }

    #[test]
    fn overflowing_intersection_is_degenerate() {
        let err = line_intersection(v(0.0, 0.0), v(1.0, 1.0), v(0.0, 1.0), v(f64::MAX, f64::MAX));
        assert!(err.is_err());
    }
}
