use glam::Vec3;

/// One face of the bounding cube: an anchor point on the plane and a unit
/// normal pointing toward the cube interior (away from the face).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub anchor: Vec3,
    pub normal: Vec3,
}

impl Plane {
    /// Signed distance from the surface of a sphere at `position` to this
    /// plane. Negative means the sphere penetrates the plane.
    pub fn signed_distance(&self, position: Vec3, radius: f32) -> f32 {
        (position - self.anchor).dot(self.normal) - radius
    }
}

/// The six bounding planes of an axis-aligned cube centered at the origin.
///
/// Face order is fixed and load-bearing for collision reporting:
/// [0] -> +X (right), [1] -> -X (left),
/// [2] -> +Y (top),   [3] -> -Y (bottom),
/// [4] -> +Z (front), [5] -> -Z (back)
pub fn bounding_cube(half_extent: f32) -> [Plane; 6] {
    let axes = [
        Vec3::X,
        Vec3::NEG_X,
        Vec3::Y,
        Vec3::NEG_Y,
        Vec3::Z,
        Vec3::NEG_Z,
    ];
    axes.map(|axis| {
        let anchor = axis * half_extent;
        Plane {
            anchor,
            // Inward-pointing: the negated, normalized anchor position.
            normal: (-anchor).normalize(),
        }
    })
}
