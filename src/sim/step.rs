use glam::Vec3;

use super::collision::{check_collision, min_signed_distance, respond};
use super::planes::Plane;

/// Fixed integration timestep in seconds.
pub const TIMESTEP: f32 = 0.01;
/// Constant gravitational acceleration.
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.8, 0.0);
/// Canonical ball radius.
pub const BALL_RADIUS: f32 = 1.25;
/// Canonical ball mass in kilograms.
pub const BALL_MASS: f32 = 1.0;

/// The simulated ball. Created once at simulation start and advanced in place
/// by [`step`]; radius and mass are fixed for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub position: Vec3,
    pub velocity: Vec3,
    pub radius: f32,
    pub mass: f32,
}

impl Ball {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position,
            velocity,
            radius: BALL_RADIUS,
            mass: BALL_MASS,
        }
    }
}

/// Per-simulation constants fed to every [`step`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    pub gravity: Vec3,
    pub timestep: f32,
    /// Fraction of normal-velocity magnitude retained (sign-inverted) on a
    /// bounce. 1.0 = perfectly elastic.
    pub restitution: f32,
    /// Fraction of tangential velocity removed at the moment of a bounce.
    pub friction: f32,
    /// Air-resistance coefficient for the `(c / m)(wind - v)` drag term.
    /// Zero disables drag entirely.
    pub air_resistance: f32,
    pub wind: Vec3,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            timestep: TIMESTEP,
            restitution: 1.0,
            friction: 0.1,
            air_resistance: 0.0,
            wind: Vec3::ZERO,
        }
    }
}

/// Result of one integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub ball: Ball,
    /// Index of the plane hit this step, if any.
    pub hit_plane: Option<usize>,
    /// Linear estimate of the fraction of the timestep elapsed before
    /// contact, from the signed distances before and after the candidate
    /// move. Reported for callers that want to sub-step; [`step`] itself does
    /// not use it and holds the position instead.
    pub contact_fraction: Option<f32>,
}

/// Advance the ball by one fixed timestep of trapezoidal semi-implicit Euler.
///
/// ```text
/// a      = gravity + (c / m)(wind - v)
/// v(n+1) = v(n) + a*h
/// x(n+1) = x(n) + h*(v(n) + v(n+1))/2
/// ```
///
/// The candidate position is tested against the bounding planes. On a hit the
/// returned ball keeps its pre-step position and takes the reflected, damped
/// response velocity; the ball pauses positionally for that one step rather
/// than being advanced to (or past) the wall.
pub fn step(ball: &Ball, params: &SimParams, planes: &[Plane]) -> StepOutcome {
    let h = params.timestep;
    let acceleration = params.gravity
        + (params.air_resistance / ball.mass) * (params.wind - ball.velocity);

    let next_velocity = ball.velocity + acceleration * h;
    let next_position = ball.position + h * (ball.velocity + next_velocity) / 2.0;

    match check_collision(next_position, ball.radius, planes) {
        Some(index) => {
            let d_pre = min_signed_distance(ball.position, ball.radius, planes);
            let d_post = min_signed_distance(next_position, ball.radius, planes);
            let contact_fraction = if d_pre > d_post {
                Some((d_pre / (d_pre - d_post)).clamp(0.0, 1.0))
            } else {
                None
            };
            let response = respond(
                next_velocity,
                planes[index].normal,
                params.restitution,
                params.friction,
            );
            StepOutcome {
                ball: Ball {
                    position: ball.position,
                    velocity: response,
                    ..*ball
                },
                hit_plane: Some(index),
                contact_fraction,
            }
        }
        None => StepOutcome {
            ball: Ball {
                position: next_position,
                velocity: next_velocity,
                ..*ball
            },
            hit_plane: None,
            contact_fraction: None,
        },
    }
}
