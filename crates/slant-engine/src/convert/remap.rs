use crate::coords::Vec2;
use crate::error::Degeneracy;

use super::edges::EdgePoints;

/// Re-expresses `offset` (a fraction of `p1 → p2`) as a fraction of the CSS
/// gradient line `edges.start → edges.end`.
///
/// The position is measured on X unless the CSS line is vertical, in which
/// case Y is used. Results outside [0, 1] are returned as is.
pub fn remap_offset(offset: f64, p1: Vec2, p2: Vec2, edges: EdgePoints) -> Result<f64, Degeneracy> {
    let EdgePoints { start, end } = edges;
    let p0 = p1.lerp(p2, offset);

    let t = if end.x != start.x {
        (p0.x - start.x) / (end.x - start.x)
    } else if end.y != start.y {
        (p0.y - start.y) / (end.y - start.y)
    } else {
        return Err(Degeneracy::ZeroLengthVector);
    };

    if t.is_finite() { Ok(t) } else { Err(Degeneracy::NonFinite) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vec2 { Vec2::new(x, y) }

    #[test]
    fn identical_lines_keep_offsets() {
        let edges = EdgePoints::new(v(0.0, 0.0), v(1.0, -1.0));
        for t in [0.0, 0.3, 1.0] {
            let r = remap_offset(t, v(0.0, 0.0), v(1.0, -1.0), edges).unwrap();
            assert!((r - t).abs() < 1e-12);
        }
    }

    #[test]
    fn inner_gradient_maps_into_sub_range() {
        let edges = EdgePoints::new(v(0.0, 0.0), v(1.0, -1.0));
        let (p1, p2) = (v(0.25, -0.25), v(0.75, -0.75));
        assert_eq!(remap_offset(0.0, p1, p2, edges).unwrap(), 0.25);
        assert_eq!(remap_offset(0.5, p1, p2, edges).unwrap(), 0.5);
        assert_eq!(remap_offset(1.0, p1, p2, edges).unwrap(), 0.75);
    }

    #[test]
    fn vertical_line_measures_on_y() {
        let edges = EdgePoints::new(v(0.5, 0.0), v(0.5, -2.0));
        let (p1, p2) = (v(0.0, -0.5), v(0.0, -1.5));
        assert_eq!(remap_offset(0.0, p1, p2, edges).unwrap(), 0.25);
        assert_eq!(remap_offset(1.0, p1, p2, edges).unwrap(), 0.75);
    }

    #[test]
    fn overshooting_gradient_is_not_clamped() {
        let edges = EdgePoints::new(v(0.0, 0.5), v(1.0, 0.5));
        let (p1, p2) = (v(-0.5, 0.0), v(1.5, 0.0));
        assert_eq!(remap_offset(0.0, p1, p2, edges).unwrap(), -0.5);
        assert_eq!(remap_offset(1.0, p1, p2, edges).unwrap(), 1.5);
    }

    #[test]
    fn collapsed_edges_are_degenerate() {
        let edges = EdgePoints::new(v(0.5, 0.5), v(0.5, 0.5));
        let err = remap_offset(0.5, v(0.0, 0.0), v(1.0, 0.0), edges);
        assert_eq!(err, Err(Degeneracy::ZeroLengthVector));
    }
}
