use hecs::World;

use crate::components::{BounceEvent, Lifetime, Position, Sphere, Velocity};
use crate::sim::{self, Ball, Plane, SimParams};

/// Advance every simulated entity by one fixed physics tick.
///
/// Bounded spheres go through the full collision-aware Euler step; lifetimed
/// particles take a plain Euler update under gravity and burn off timestep
/// seconds of life. Returns the wall contacts produced this tick.
pub fn physics_step(world: &mut World, params: &SimParams, planes: &[Plane]) -> Vec<BounceEvent> {
    let mut events = Vec::new();

    for (entity, (pos, vel, sphere)) in
        world.query_mut::<(&mut Position, &mut Velocity, &Sphere)>()
    {
        let ball = Ball {
            position: pos.0,
            velocity: vel.0,
            radius: sphere.radius,
            mass: sim::BALL_MASS,
        };
        let outcome = sim::step(&ball, params, planes);
        pos.0 = outcome.ball.position;
        vel.0 = outcome.ball.velocity;
        if let Some(plane) = outcome.hit_plane {
            events.push(BounceEvent {
                entity,
                plane,
                contact_fraction: outcome.contact_fraction,
            });
        }
    }

    // Particle entities: unbounded, plain Euler, finite life
    let h = params.timestep;
    for (_entity, (pos, vel, life)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Lifetime)>()
    {
        if life.0 <= 0.0 {
            continue;
        }
        vel.0 += params.gravity * h;
        pos.0 += vel.0 * h;
        life.0 -= h;
    }

    events
}
