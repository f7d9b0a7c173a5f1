use glam::Vec3;
use hecs::Entity;

/// World-space position.
pub struct Position(pub Vec3);

/// Linear velocity in world space.
pub struct Velocity(pub Vec3);

/// Bounding-sphere shape; entities carrying this bounce off the cube walls.
pub struct Sphere {
    pub radius: f32,
}

/// Remaining lifetime in seconds. Entities at or below zero are dead and
/// skipped by the physics tick.
pub struct Lifetime(pub f32);

/// Wall contact produced by a physics tick.
pub struct BounceEvent {
    pub entity: Entity,
    /// Index into the bounding-plane array, in its fixed face order.
    pub plane: usize,
    /// Linear estimate of how far into the timestep contact occurred.
    pub contact_fraction: Option<f32>,
}
