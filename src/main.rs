use bouncer::components::{Position, Sphere, Velocity};
use bouncer::config::load_tuning_or_default;
use bouncer::sim::bounding_cube;
use bouncer::systems::physics_step;
use clap::Parser;
use glam::Vec3;
use hecs::World;

#[derive(Parser)]
#[command(name = "bouncer", about = "Headless bouncing-ball simulation")]
struct Args {
    /// Number of fixed timesteps to simulate
    #[arg(long, default_value_t = 1000)]
    steps: u32,

    /// Path to a JSON tuning file (missing fields take canonical defaults)
    #[arg(long)]
    config: Option<String>,

    /// Initial ball position
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true, default_values_t = [0.0, 0.0, 0.0])]
    start: Vec<f32>,

    /// Emit one CSV row per step instead of the bounce log
    #[arg(long)]
    csv: bool,
}

const FACE_NAMES: [&str; 6] = ["+X", "-X", "+Y", "-Y", "+Z", "-Z"];

fn main() {
    let args = Args::parse();
    let tuning = load_tuning_or_default(args.config.as_deref());
    let params = tuning.params();
    let planes = bounding_cube(tuning.half_extent);

    let mut world = World::new();
    let ball = world.spawn((
        Position(Vec3::new(args.start[0], args.start[1], args.start[2])),
        Velocity(tuning.initial_velocity()),
        Sphere {
            radius: tuning.ball_radius,
        },
    ));

    if args.csv {
        println!("step,px,py,pz,vx,vy,vz");
    } else {
        println!("simulation started");
    }

    let mut bounce_count = 0u32;
    for step in 0..args.steps {
        let events = physics_step(&mut world, &params, &planes);
        for event in &events {
            bounce_count += 1;
            if !args.csv {
                let fraction = event
                    .contact_fraction
                    .map(|f| format!(" (contact at {:.0}% of step)", f * 100.0))
                    .unwrap_or_default();
                println!(
                    "step {:5}: bounce off {} wall{}",
                    step, FACE_NAMES[event.plane], fraction
                );
            }
        }
        if args.csv {
            let pos = world.get::<&Position>(ball).expect("ball despawned").0;
            let vel = world.get::<&Velocity>(ball).expect("ball despawned").0;
            println!(
                "{},{},{},{},{},{},{}",
                step, pos.x, pos.y, pos.z, vel.x, vel.y, vel.z
            );
        }
    }

    if !args.csv {
        let pos = world.get::<&Position>(ball).expect("ball despawned").0;
        let vel = world.get::<&Velocity>(ball).expect("ball despawned").0;
        println!("-----------------------------------------------");
        println!(
            "{} steps, {} bounces, final position ({:.3}, {:.3}, {:.3}), velocity ({:.3}, {:.3}, {:.3})",
            args.steps, bounce_count, pos.x, pos.y, pos.z, vel.x, vel.y, vel.z
        );
    }
}
