use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::step::GRAVITY;

/// A single emitted particle. Dead particles stay in the emitter's pool but
/// are skipped by updates and excluded from [`ParticleEmitter::alive_count`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub mass: f32,
    pub lifetime: f32,
}

impl Particle {
    pub fn is_alive(&self) -> bool {
        self.lifetime > 0.0
    }
}

/// Spawns a batch of particles with jittered velocity and lifetime and
/// advances them under gravity with plain Euler steps.
pub struct ParticleEmitter {
    position: Vec3,
    base_velocity: Vec3,
    velocity_variance: f32,
    base_lifetime: f32,
    lifetime_variance: f32,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleEmitter {
    pub fn new(
        capacity: usize,
        position: Vec3,
        velocity: Vec3,
        velocity_variance: f32,
        lifetime: f32,
        lifetime_variance: f32,
        seed: u64,
    ) -> Self {
        let mut emitter = Self {
            position,
            base_velocity: velocity,
            velocity_variance,
            base_lifetime: lifetime,
            lifetime_variance,
            particles: Vec::with_capacity(capacity),
            rng: StdRng::seed_from_u64(seed),
        };
        for _ in 0..capacity {
            let particle = emitter.spawn_one();
            emitter.particles.push(particle);
        }
        emitter
    }

    fn spawn_one(&mut self) -> Particle {
        Particle {
            position: self.position,
            velocity: self.base_velocity + self.jitter(self.velocity_variance),
            mass: 1.0,
            lifetime: self.base_lifetime + self.uniform_offset(self.lifetime_variance),
        }
    }

    fn jitter(&mut self, variance: f32) -> Vec3 {
        Vec3::new(
            self.uniform_offset(variance),
            self.uniform_offset(variance),
            self.uniform_offset(variance),
        )
    }

    fn uniform_offset(&mut self, variance: f32) -> f32 {
        if variance == 0.0 {
            0.0
        } else {
            self.rng.gen_range(-variance..variance)
        }
    }

    /// Advance every live particle by one Euler step of `h` seconds under
    /// gravity and burn `h` off its lifetime.
    pub fn update(&mut self, h: f32) {
        for particle in &mut self.particles {
            if !particle.is_alive() {
                continue;
            }
            particle.velocity += GRAVITY * h;
            particle.position += particle.velocity * h;
            particle.lifetime -= h;
        }
    }

    pub fn alive_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_alive()).count()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
