//! Point distance queries

use crate::math::Vec3;

/// Offset (meters) toward the surface applied before the inside test
pub const DEFAULT_SURFACE_INSET: f32 = 0.03;

/// Distance from `point` to the segment `a`-`b`
///
/// A degenerate segment measures to `a`.
pub fn point_to_segment_distance(point: Vec3, a: Vec3, b: Vec3) -> f32 {
    let line = b - a;
    let len_sq = line.dot(line);

    if len_sq == 0.0 {
        return (point - a).length();
    }

    let t = (point - a).dot(line) / len_sq;
    if t < 0.0 {
        (point - a).length()
    } else if t > 1.0 {
        (point - b).length()
    } else {
        (point - (a + line * t)).length()
    }
}

/// Component of `v` lying in the plane with unit normal `normal`
pub fn project_onto_plane(v: Vec3, normal: Vec3) -> Vec3 {
    v - normal * v.dot(normal)
}

/// Distance from `point` to the filled rectangle `v1..v4`
///
/// Corners are ordered so that `v2 - v1` and `v4 - v1` are the two spanning
/// edges. When the point projects inside the rectangle the result is the
/// perpendicular distance to its plane; otherwise it is the distance to the
/// nearest edge.
///
/// The inside test is made on the point pulled `inset` meters along the
/// normal, while the returned perpendicular distance is measured without it.
pub fn point_to_rectangle_distance(
    point: Vec3,
    v1: Vec3,
    v2: Vec3,
    v3: Vec3,
    v4: Vec3,
    inset: f32,
) -> f32 {
    let edge1 = v2 - v1;
    let edge2 = v4 - v1;
    let normal = edge1.cross(edge2).normalize();

    if normal != Vec3::ZERO {
        let projection = (point - v1).dot(normal);
        let projected = point - normal * (projection - inset);

        let to_projected = projected - v1;
        let dot1 = to_projected.dot(edge1);
        let dot2 = to_projected.dot(edge2);

        let inside = (0.0..=edge1.dot(edge1)).contains(&dot1)
            && (0.0..=edge2.dot(edge2)).contains(&dot2);
        if inside {
            return projection.abs();
        }
    }

    [(v1, v2), (v2, v3), (v3, v4), (v4, v1)]
        .into_iter()
        .map(|(a, b)| point_to_segment_distance(point, a, b))
        .fold(f32::INFINITY, f32::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    /// Unit board in the XY plane centered at the origin, corners in board order
    fn unit_board() -> [Vec3; 4] {
        [
            Vec3::new(0.5, 0.5, 0.0),
            Vec3::new(-0.5, 0.5, 0.0),
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
        ]
    }

    fn board_distance(point: Vec3) -> f32 {
        let [v1, v2, v3, v4] = unit_board();
        point_to_rectangle_distance(point, v1, v2, v3, v4, DEFAULT_SURFACE_INSET)
    }

    #[test]
    fn test_segment_interior_and_endpoints() {
        let a = Vec3::ZERO;
        let b = Vec3::new(1.0, 0.0, 0.0);

        assert!((point_to_segment_distance(Vec3::new(0.5, 0.2, 0.0), a, b) - 0.2).abs() < EPS);
        assert!((point_to_segment_distance(Vec3::new(-0.3, 0.4, 0.0), a, b) - 0.5).abs() < EPS);
        assert!((point_to_segment_distance(Vec3::new(1.3, 0.0, 0.4), a, b) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_segment_degenerate() {
        let a = Vec3::new(1.0, 1.0, 1.0);
        let p = Vec3::new(1.0, 1.0, 3.0);
        assert!((point_to_segment_distance(p, a, a) - 2.0).abs() < EPS);
    }

    #[test]
    fn test_segment_symmetric_under_endpoint_swap() {
        let a = Vec3::new(0.1, -0.4, 0.3);
        let b = Vec3::new(-0.7, 0.2, 0.9);
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, -1.0, 0.5),
            Vec3::new(-0.3, -0.1, 0.6),
            Vec3::new(-3.0, 4.0, -2.0),
        ];

        for p in points {
            let ab = point_to_segment_distance(p, a, b);
            let ba = point_to_segment_distance(p, b, a);
            assert!((ab - ba).abs() < EPS, "{p:?}: {ab} vs {ba}");
        }
    }

    #[test]
    fn test_inside_is_perpendicular_distance() {
        // independent of in-plane position
        for (x, y) in [(0.0, 0.0), (0.3, -0.2), (-0.45, 0.45), (0.1, 0.49)] {
            let above = board_distance(Vec3::new(x, y, 0.05));
            let below = board_distance(Vec3::new(x, y, -0.12));
            assert!((above - 0.05).abs() < EPS, "({x}, {y}) above: {above}");
            assert!((below - 0.12).abs() < EPS, "({x}, {y}) below: {below}");
        }
    }

    #[test]
    fn test_outside_matches_nearest_edge() {
        let [v1, v2, v3, v4] = unit_board();
        let points = [
            Vec3::new(0.53, 0.0, 0.03),
            Vec3::new(0.0, -0.9, 0.0),
            Vec3::new(0.8, 0.9, -0.2),
            Vec3::new(-0.6, 0.1, 0.4),
        ];

        for p in points {
            let expected = [
                point_to_segment_distance(p, v1, v2),
                point_to_segment_distance(p, v2, v3),
                point_to_segment_distance(p, v3, v4),
                point_to_segment_distance(p, v4, v1),
            ]
            .into_iter()
            .fold(f32::INFINITY, f32::min);

            // closest point on the boundary of an axis-aligned square
            let cx = p.x.clamp(-0.5, 0.5);
            let cy = p.y.clamp(-0.5, 0.5);
            let euclidean = (p - Vec3::new(cx, cy, 0.0)).length();

            let got = board_distance(p);
            assert!((got - expected).abs() < EPS, "{p:?}: {got} vs {expected}");
            assert!((got - euclidean).abs() < EPS, "{p:?}: {got} vs {euclidean}");
        }
    }

    #[test]
    fn test_corner_diagonal_case() {
        // 3 cm past the right edge, 3 cm above the plane
        let d = board_distance(Vec3::new(0.53, 0.0, 0.03));
        assert!((d - (0.03f32 * 0.03 + 0.03 * 0.03).sqrt()).abs() < EPS);
        assert!(d < 0.08);
    }

    #[test]
    fn test_inset_is_along_normal_only() {
        // a point on the edge line stays inside regardless of inset
        let [v1, v2, v3, v4] = unit_board();
        let p = Vec3::new(0.5, 0.0, 0.02);
        for inset in [0.0, 0.03, 0.5] {
            let d = point_to_rectangle_distance(p, v1, v2, v3, v4, inset);
            assert!((d - 0.02).abs() < EPS);
        }
    }

    #[test]
    fn test_degenerate_rectangle_uses_edges() {
        // collapsed to a line along X
        let v1 = Vec3::new(0.5, 0.0, 0.0);
        let v2 = Vec3::new(-0.5, 0.0, 0.0);
        let d = point_to_rectangle_distance(Vec3::new(0.0, 0.0, 0.2), v1, v2, v2, v1, DEFAULT_SURFACE_INSET);
        assert!((d - 0.2).abs() < EPS);
    }

    #[test]
    fn test_project_onto_plane() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let flat = project_onto_plane(v, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(flat, Vec3::new(1.0, 2.0, 0.0));
        assert!(project_onto_plane(v, Vec3::UP).dot(Vec3::UP).abs() < EPS);
    }
}
