mod physics;

pub use physics::physics_step;
