use glam::Vec3;

use super::planes::Plane;

/// Index of the first plane whose surface the sphere penetrates, in the fixed
/// face order of [`bounding_cube`](super::planes::bounding_cube).
///
/// Simultaneous penetration of several planes (a corner hit) reports only the
/// first face in enumeration order; this is a single-contact simplification,
/// not true multi-plane resolution.
pub fn check_collision(position: Vec3, radius: f32, planes: &[Plane]) -> Option<usize> {
    planes
        .iter()
        .position(|plane| plane.signed_distance(position, radius) < 0.0)
}

/// Minimum signed distance from the sphere surface to any bounding plane.
/// Negative once any plane is penetrated.
pub fn min_signed_distance(position: Vec3, radius: f32, planes: &[Plane]) -> f32 {
    planes
        .iter()
        .map(|plane| plane.signed_distance(position, radius))
        .fold(f32::MAX, f32::min)
}

/// Reflected, damped velocity after hitting a plane with the given normal.
///
/// The incoming velocity splits into a normal component `vn` and a tangential
/// component `vt`; the outgoing velocity is `-restitution * vn + (1 - friction) * vt`.
pub fn respond(velocity: Vec3, normal: Vec3, restitution: f32, friction: f32) -> Vec3 {
    let normal_velocity = velocity.dot(normal) * normal;
    let tangent_velocity = velocity - normal_velocity;
    -restitution * normal_velocity + (1.0 - friction) * tangent_velocity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::planes::bounding_cube;

    const RADIUS: f32 = 1.25;

    #[test]
    fn no_collision_strictly_inside() {
        let planes = bounding_cube(15.0);
        assert_eq!(check_collision(Vec3::ZERO, RADIUS, &planes), None);
        assert_eq!(
            check_collision(Vec3::new(10.0, -5.0, 3.0), RADIUS, &planes),
            None
        );
    }

    #[test]
    fn collision_just_past_the_wall() {
        let planes = bounding_cube(15.0);
        // Sphere surface epsilon past the +X face
        let pos = Vec3::new(15.0 - RADIUS + 1e-3, 0.0, 0.0);
        assert_eq!(check_collision(pos, RADIUS, &planes), Some(0));
        // And the -Y face
        let pos = Vec3::new(0.0, -(15.0 - RADIUS + 1e-3), 0.0);
        assert_eq!(check_collision(pos, RADIUS, &planes), Some(3));
    }

    #[test]
    fn corner_hit_reports_first_face_in_order() {
        let planes = bounding_cube(15.0);
        // Penetrates +X, +Y, and +Z simultaneously; +X comes first
        let pos = Vec3::splat(14.5);
        assert_eq!(check_collision(pos, RADIUS, &planes), Some(0));
    }

    #[test]
    fn min_distance_at_center() {
        let planes = bounding_cube(15.0);
        let d = min_signed_distance(Vec3::ZERO, RADIUS, &planes);
        assert!((d - 13.75).abs() < 1e-5, "got {d}");
    }

    #[test]
    fn min_distance_negative_when_penetrating() {
        let planes = bounding_cube(15.0);
        let d = min_signed_distance(Vec3::new(14.5, 0.0, 0.0), RADIUS, &planes);
        assert!(d < 0.0, "got {d}");
    }

    #[test]
    fn perfect_bounce_negates_normal_velocity() {
        let normal = Vec3::NEG_X; // inward normal of the +X face
        let incoming = Vec3::new(7.0, 0.0, 0.0);
        let out = respond(incoming, normal, 1.0, 0.0);
        assert!((out - Vec3::new(-7.0, 0.0, 0.0)).length() < 1e-6, "got {out}");
    }

    #[test]
    fn full_friction_zeroes_tangential_component() {
        let normal = Vec3::NEG_Y; // inward normal of the +Y face
        let incoming = Vec3::new(3.0, 5.0, -2.0);
        let out = respond(incoming, normal, 1.0, 1.0);
        // Tangential (x, z) gone, normal (y) inverted
        assert!(out.x.abs() < 1e-6 && out.z.abs() < 1e-6, "got {out}");
        assert!((out.y + 5.0).abs() < 1e-6, "got {out}");
    }

    #[test]
    fn restitution_scales_normal_component() {
        let normal = Vec3::NEG_X;
        let incoming = Vec3::new(10.0, 4.0, 0.0);
        let out = respond(incoming, normal, 0.5, 0.0);
        assert!((out.x + 5.0).abs() < 1e-6, "got {out}");
        assert!((out.y - 4.0).abs() < 1e-6, "got {out}");
    }
}
