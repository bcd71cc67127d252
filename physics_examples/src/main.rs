use ccd_physics::*;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let example = args.get(1).map(String::as_str).unwrap_or("continuous");

    println!("Running example: {}", example);

    let result = match example {
        "continuous" => run_wall_example(SimMode::Continuous),
        "discrete" => run_wall_example(SimMode::Discrete),
        "corridor" => run_corridor_example(),
        _ => {
            println!("Unknown example: {}. Available examples: continuous, discrete, corridor", example);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error running example: {}", e);
    }
}

/// The continuous-collision toy: volleys fired at a row of progressively thinner walls.
fn run_wall_example(mode: SimMode) -> SimResult<()> {
    let world = create_wall_range(800.0, 600.0)?;
    let thin_walls = world.obstacles().iter().filter(|o| o.is_thin()).count();
    println!(
        "Walls: {} ({} thin), mode: {:?}",
        world.obstacles().len(),
        thin_walls,
        mode
    );

    let config = SimConfig {
        mode,
        restitution: 0.9,
        ..Default::default()
    };
    let mut sim = Simulation::new(world, config, 42)?;

    sim.push_command(Command::SetSpeed(1.5))?;
    sim.push_command(Command::Fire(FireParams {
        count: 12,
        origin: Vec2::new(40.0, 300.0),
        angle: 0.0,
        spread: 0.6,
        speed: 40.0,
        radius: 4.0,
    }))?;

    for frame in 0..120 {
        let stats = sim.tick(1.0);
        if frame % 20 == 0 {
            let lead = sim.world().bodies().iter().map(|b| b.position.x).fold(f64::MIN, f64::max);
            println!(
                "Frame {}: collisions {} tunnels {} (lead body x = {:.1})",
                frame, stats.collisions_this_tick, stats.tunnels_this_tick, lead
            );
        }
    }

    println!(
        "Totals: {} collisions, {} tunnels",
        sim.world().collision_count(),
        sim.world().tunnel_count()
    );
    Ok(())
}

/// A very fast body trapped between close walls, showing the sub-step budget cap.
fn run_corridor_example() -> SimResult<()> {
    let mut world = World::from_extents(Vec2::ZERO, Vec2::new(200.0, 100.0))?;
    world.add_obstacle(Vec2::new(80.0, 20.0), Vec2::new(81.0, 80.0))?;
    world.add_obstacle(Vec2::new(100.0, 20.0), Vec2::new(101.0, 80.0))?;
    let idx = world.add_body(Vec2::new(90.0, 50.0), Vec2::new(2000.0, 3.0), 2.0)?;

    let config = SimConfig::default().with_restitution(1.0);
    for frame in 0..10 {
        let stats = world.step(1.0, &config);
        let body = &world.bodies()[idx];
        println!(
            "Frame {}: bounces {} budget exhausted {} position ({:.2}, {:.2})",
            frame, stats.collisions_this_tick, stats.budget_exhausted, body.position.x, body.position.y
        );
    }
    println!("Corridor simulation finished.");
    Ok(())
}

fn create_wall_range(width: f64, height: f64) -> SimResult<World> {
    let mut world = World::from_extents(Vec2::ZERO, Vec2::new(width, height))?;

    // Each wall is thinner than the last; the final ones are far thinner than a tick of travel.
    let thicknesses = [40.0, 20.0, 8.0, 2.0, 0.5];
    for (i, thickness) in thicknesses.iter().enumerate() {
        let x = 200.0 + i as f64 * 110.0;
        world.add_obstacle(Vec2::new(x, 100.0), Vec2::new(x + thickness, height - 100.0))?;
    }

    Ok(world)
}
