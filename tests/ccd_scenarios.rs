use approx::assert_relative_eq;
use ccd_physics::integration::BodyCollision;
use ccd_physics::{step, step_with_sink, SimConfig, SimMode, Vec2, World, AABB};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn open_world() -> World {
    World::new(AABB::new(Vec2::new(-1000.0, -1000.0), Vec2::new(1000.0, 1000.0))).unwrap()
}

fn config(mode: SimMode, restitution: f64) -> SimConfig {
    SimConfig {
        mode,
        restitution,
        ..Default::default()
    }
}

#[test]
fn free_flight_is_exact() {
    let mut world = open_world();
    world.add_body(Vec2::new(3.0, 4.0), Vec2::new(-7.25, 2.5), 2.0).unwrap();
    world.add_obstacle(Vec2::new(100.0, 100.0), Vec2::new(120.0, 140.0)).unwrap();

    let stats = step(&mut world, 1.0, &config(SimMode::Continuous, 0.9));

    assert_eq!(stats.collisions_this_tick, 0);
    assert_eq!(world.bodies()[0].position, Vec2::new(3.0, 4.0) + Vec2::new(-7.25, 2.5) * 1.0);
}

#[test]
fn time_of_impact_scenario() {
    let mut world = open_world();
    world.add_obstacle(Vec2::new(4.0, -2.0), Vec2::new(5.0, 2.0)).unwrap();
    world.add_body(Vec2::ZERO, Vec2::new(10.0, 0.0), 1.0).unwrap();

    let r = 0.5;
    let mut events: Vec<BodyCollision> = Vec::new();
    let stats = step_with_sink(&mut world, 1.0, &config(SimMode::Continuous, r), &mut events);

    assert_eq!(stats.collisions_this_tick, 1);
    assert_relative_eq!(events[0].event.time, 0.3, epsilon = 1e-12);
    assert_eq!(events[0].event.normal, Vec2::new(-1.0, 0.0));

    let body = &world.bodies()[0];
    assert_relative_eq!(body.velocity.x, -10.0 * r, epsilon = 1e-12);
    assert_relative_eq!(body.position.x, 3.0 - 10.0 * r * 0.7, epsilon = 1e-9);
    assert_relative_eq!(body.position.y, 0.0);
}

#[test]
fn reflection_law_off_floor() {
    // Floor spanning the whole width; the body comes down onto it from above.
    for r in [1.0, 0.6] {
        let mut world = open_world();
        world.add_obstacle(Vec2::new(-500.0, -10.0), Vec2::new(500.0, 0.0)).unwrap();
        world.add_body(Vec2::new(0.0, 3.0), Vec2::new(3.0, -4.0), 1.0).unwrap();

        step(&mut world, 1.0, &config(SimMode::Continuous, r));

        let body = &world.bodies()[0];
        assert_eq!(body.bounce_count, 1);
        assert_relative_eq!(body.velocity.x, 3.0 * r, epsilon = 1e-12);
        assert_relative_eq!(body.velocity.y, 4.0 * r, epsilon = 1e-12);
    }
}

#[test]
fn continuous_never_tunnels_through_thin_walls() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let thickness = rng.gen_range(0.001..0.5);
        let speed = rng.gen_range(20.0..500.0);
        let offset_y = rng.gen_range(-1.5..1.5);

        let mut world = open_world();
        world.add_obstacle(Vec2::new(10.0, -2.0), Vec2::new(10.0 + thickness, 2.0)).unwrap();
        world.add_body(Vec2::new(0.0, offset_y), Vec2::new(speed, 0.0), 0.25).unwrap();

        let stats = step(&mut world, 1.0, &config(SimMode::Continuous, 1.0));

        assert!(stats.collisions_this_tick >= 1, "missed wall of thickness {thickness} at speed {speed}");
        assert!(world.bodies()[0].position.x < 10.0);
        assert_eq!(world.tunnel_count(), 0);
    }
}

#[test]
fn discrete_mode_tunnels_where_continuous_does_not() {
    let mut tunnelled = 0;
    for thickness in [2.0, 1.0, 0.5, 0.1, 0.01] {
        let build = || {
            let mut world = open_world();
            world.add_obstacle(Vec2::new(10.0, -2.0), Vec2::new(10.0 + thickness, 2.0)).unwrap();
            world.add_body(Vec2::ZERO, Vec2::new(30.0, 0.0), 0.5).unwrap();
            world
        };

        let mut discrete = build();
        let stats = step(&mut discrete, 1.0, &config(SimMode::Discrete, 1.0));
        if stats.tunnels_this_tick > 0 {
            tunnelled += 1;
            assert!(discrete.bodies()[0].position.x > 10.0 + thickness);
            assert_eq!(discrete.tunnel_count(), u64::from(stats.tunnels_this_tick));
        }

        let mut continuous = build();
        let stats = step(&mut continuous, 1.0, &config(SimMode::Continuous, 1.0));
        assert_eq!(stats.collisions_this_tick, 1);
        assert!(continuous.bodies()[0].position.x < 10.0);
    }
    assert!(tunnelled >= 1);
}

#[test]
fn sub_step_budget_terminates_in_corridor() {
    let mut world = open_world();
    // A tight corridor of thin walls the body would bounce between hundreds of times.
    for i in 0..8 {
        let x = i as f64 * 3.0;
        world.add_obstacle(Vec2::new(x, -5.0), Vec2::new(x + 0.05, 5.0)).unwrap();
    }
    world.add_body(Vec2::new(4.5, 0.0), Vec2::new(5000.0, 1.0), 0.5).unwrap();

    let config = config(SimMode::Continuous, 1.0);
    let stats = step(&mut world, 1.0, &config);

    assert_eq!(stats.collisions_this_tick, config.max_sub_steps);
    assert_eq!(stats.budget_exhausted, 1);
    let body = &world.bodies()[0];
    assert!(body.position.is_finite());
    assert!(body.position.x > 3.05 && body.position.x < 6.0);
}

#[test]
fn zero_dt_is_a_no_op() {
    let mut world = open_world();
    world.add_obstacle(Vec2::new(4.0, -2.0), Vec2::new(5.0, 2.0)).unwrap();
    world.add_body(Vec2::new(3.0, 0.0), Vec2::new(10.0, 0.0), 1.0).unwrap();
    let before = world.bodies().to_vec();

    for mode in [SimMode::Continuous, SimMode::Discrete] {
        let stats = step(&mut world, 0.0, &config(mode, 0.9));
        assert!(stats.is_empty());
    }

    assert_eq!(world.bodies(), &before[..]);
    assert_eq!(world.collision_count(), 0);
    assert_eq!(world.tunnel_count(), 0);
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut world = World::new(AABB::new(Vec2::ZERO, Vec2::new(800.0, 600.0))).unwrap();
        world.add_obstacle(Vec2::new(300.0, 100.0), Vec2::new(302.0, 500.0)).unwrap();
        world.add_obstacle(Vec2::new(500.0, 0.0), Vec2::new(540.0, 250.0)).unwrap();
        for _ in 0..25 {
            let velocity = Vec2::new(rng.gen_range(-60.0..60.0), rng.gen_range(-60.0..60.0));
            world.add_body(Vec2::new(100.0, 300.0), velocity, 4.0).unwrap();
        }
        let config = SimConfig::default();
        for _ in 0..120 {
            step(&mut world, 1.0, &config);
        }
        (world.collision_count(), world.bodies().to_vec())
    };

    let (count_a, bodies_a) = run(99);
    let (count_b, bodies_b) = run(99);
    assert_eq!(count_a, count_b);
    assert_eq!(bodies_a, bodies_b);
    assert!(count_a > 0);
    for body in &bodies_a {
        assert!(body.position.is_finite());
    }
}
