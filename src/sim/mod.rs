mod collision;
mod emitter;
mod planes;
mod step;

pub use collision::{check_collision, min_signed_distance, respond};
pub use emitter::{Particle, ParticleEmitter};
pub use planes::{bounding_cube, Plane};
pub use step::{step, Ball, SimParams, StepOutcome, BALL_MASS, BALL_RADIUS, GRAVITY, TIMESTEP};
