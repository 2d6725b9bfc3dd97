use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::simulation::states::{Boundaries, NVec2};
use crate::simulation::world::World;

/// Helper to build an initialized world of `n` nodes with a fixed seed
fn make_world(n: usize) -> World {
    let mut world = World::new(Boundaries::default(), 0.002)
        .with_gravity(0.2, std::f64::consts::FRAC_PI_2)
        .with_node_count(n);
    world.initialize(&mut StdRng::seed_from_u64(42));
    world
}

/// Time one `World::update` tick for a range of population sizes
pub fn bench_update() {
    let ns = [1_000, 2_000, 4_000, 8_000, 16_000, 32_000, 64_000];
    let steps = 60; // one simulated second at the default rate

    for n in ns {
        let mut world = make_world(n);

        // Warm up
        world.update(0.0);

        let t0 = Instant::now();
        for i in 0..steps {
            world.update(i as f64 / 60.0);
        }
        let per_tick = t0.elapsed().as_secs_f64() / steps as f64;

        // Budget at 60 Hz is ~16.7 ms per tick
        println!("N = {n:6}, update = {:9.6} s/tick, {:6.2}% of a 60 Hz frame", per_tick, per_tick * 6000.0);
    }
}

/// Time a blast plus the ticks it takes the wave to fade out
/// Paste output directly into a spreadsheet to graph
pub fn bench_blast_curve() {
    println!("N,blast_ms,fade_ticks,fade_ms");

    for n in (2_000..=32_000).step_by(2_000) {
        let mut world = make_world(n);
        let center = NVec2::new(world.boundaries.width / 2.0, world.boundaries.height / 2.0);

        let t0 = Instant::now();
        world.blast(800.0, center);
        let ms_blast = t0.elapsed().as_secs_f64() * 1000.0;

        let t1 = Instant::now();
        let mut ticks = 0;
        while !world.shockwaves.is_empty() {
            world.update(ticks as f64 / 60.0);
            ticks += 1;
        }
        let ms_fade = t1.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.6},{},{:.6}", n, ms_blast, ticks, ms_fade);
    }
}
