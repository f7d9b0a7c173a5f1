use bouncer::sim::{ParticleEmitter, TIMESTEP};
use clap::Parser;
use glam::Vec3;

#[derive(Parser)]
#[command(name = "particles", about = "Headless particle emitter demo")]
struct Args {
    /// Number of particles to emit
    #[arg(long, default_value_t = 50_000)]
    count: usize,

    /// Number of fixed timesteps to simulate
    #[arg(long, default_value_t = 1200)]
    steps: u32,

    /// RNG seed for reproducible velocity/lifetime jitter
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Base emission velocity
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true, default_values_t = [5.0, 0.0, 0.0])]
    velocity: Vec<f32>,

    /// Per-component velocity jitter half-range
    #[arg(long, default_value_t = 0.0)]
    velocity_variance: f32,

    /// Base particle lifetime in seconds
    #[arg(long, default_value_t = 10.0)]
    life: f32,

    /// Lifetime jitter half-range in seconds
    #[arg(long, default_value_t = 0.0)]
    life_variance: f32,
}

fn main() {
    let args = Args::parse();
    let velocity = Vec3::new(args.velocity[0], args.velocity[1], args.velocity[2]);

    let mut emitter = ParticleEmitter::new(
        args.count,
        Vec3::ZERO,
        velocity,
        args.velocity_variance,
        args.life,
        args.life_variance,
        args.seed,
    );
    println!("emitting {} particles", args.count);

    for step in 0..args.steps {
        emitter.update(TIMESTEP);
        if step % 100 == 0 {
            println!(
                "t = {:6.2}s: {} alive",
                (step + 1) as f32 * TIMESTEP,
                emitter.alive_count()
            );
        }
    }

    let centroid = emitter
        .particles()
        .iter()
        .filter(|p| p.is_alive())
        .fold(Vec3::ZERO, |acc, p| acc + p.position)
        / emitter.alive_count().max(1) as f32;
    println!("-----------------------------------------------");
    println!(
        "{} steps, {} alive, centroid ({:.3}, {:.3}, {:.3})",
        args.steps,
        emitter.alive_count(),
        centroid.x,
        centroid.y,
        centroid.z
    );
}
