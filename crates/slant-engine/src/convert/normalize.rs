use crate::coords::{Size, Vec2};
use crate::error::Degeneracy;

/// Maps both endpoints from object space into normalized space.
///
/// Y is multiplied by `height / width`, so one unit spans the same distance
/// on both axes, then negated so +Y points up.
pub fn normalize(p1: Vec2, p2: Vec2, size: Size) -> Result<(Vec2, Vec2), Degeneracy> {
    if !size.is_valid() {
        return Err(Degeneracy::ZeroWidth);
    }
    let k = -size.aspect();
    Ok((p1.scale_y(k), p2.scale_y(k)))
}
