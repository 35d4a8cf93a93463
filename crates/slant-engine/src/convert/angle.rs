use crate::coords::Vec2;

/// CSS gradient angle of `p1 → p2` in normalized (y-up) space.
///
/// Degrees clockwise from "up", in [0, 360). Axis-aligned vectors are
/// answered directly. Otherwise the angle between "up" and the direction of
/// `p2` is recovered with the law of cosines on the triangle `o`, `u`,
/// `o + (0, 1)`, where `o` is the origin and `u` the unit direction of
/// `p1 → p2`, and mirrored when `p2` lies left of `p1`. Working on the unit
/// direction keeps every side near length 1, so the result does not depend
/// on the vector's magnitude.
///
/// Returns NaN only when `p2 - p1` itself overflows.
pub fn gradient_angle(p1: Vec2, p2: Vec2) -> f64 {
    if p1.x == p2.x {
        return if p2.y > p1.y { 0.0 } else { 180.0 };
    }
    if p1.y == p2.y {
        return wrap(if p2.x > p1.x { 90.0 } else { -90.0 });
    }

    let d = p2 - p1;
    let u = d * (1.0 / d.length());
    let origin = Vec2::zero();
    let up = Vec2::new(0.0, 1.0);
    let ab = origin.distance(up);
    let bc = origin.distance(u);
    let ac = u.distance(up);

    let cos = ((bc * bc + ab * ab - ac * ac) / (2.0 * bc * ab)).clamp(-1.0, 1.0);
    let mut angle = cos.acos().to_degrees();
    if p2.x < p1.x {
        angle = -angle;
    }
    wrap(angle)
}

/// Wraps into [0, 360).
#[inline]
fn wrap(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid of a tiny negative rounds up to exactly 360.
    if a >= 360.0 { 0.0 } else { a }
}
