// Criterion benchmarks for the safe-volume search and the region locator.
//
// Three worlds cover the cost range: flat ground (the first column wins
// immediately but every column is still scanned), a solid mass with one
// sealed shaft at the spiral's edge (every column scanned top to bottom),
// and a layered cavern world (many pockets per column).

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nether_refuge_sim::config::SafeVolumeParams;
use nether_refuge_sim::{
    Biome, SafePositionFinder, VoxelCoord, VoxelType, VoxelWorld, find_safe_placement,
};

fn flat_world() -> VoxelWorld {
    let mut world = VoxelWorld::centered(64, 128, 64);
    world.fill_layers(64, VoxelType::Netherrack);
    world
}

fn shaft_world() -> VoxelWorld {
    let mut world = VoxelWorld::centered(64, 128, 64);
    world.fill_layers(127, VoxelType::Basalt);
    world.fill_box(
        VoxelCoord::new(15, 30, 16),
        VoxelCoord::new(16, 36, 16),
        VoxelType::Air,
    );
    world
}

/// Alternating five-cell rock and four-cell air layers, with pillars.
fn cavern_world() -> VoxelWorld {
    let mut world = VoxelWorld::centered(64, 128, 64);
    world.fill_layers(127, VoxelType::Netherrack);
    for base in (10..110).step_by(9) {
        world.fill_box(
            VoxelCoord::new(-32, base, -32),
            VoxelCoord::new(31, base + 3, 31),
            VoxelType::Air,
        );
    }
    for i in (-30..30).step_by(6) {
        world.fill_box(
            VoxelCoord::new(i, 0, -i),
            VoxelCoord::new(i + 1, 127, -i + 1),
            VoxelType::Blackstone,
        );
    }
    world
}

fn bench_find_safe_placement(c: &mut Criterion) {
    let params = SafeVolumeParams::default();
    let near = VoxelCoord::new(0, 64, 0);

    let flat = flat_world();
    c.bench_function("safe_volume_flat", |b| {
        b.iter(|| black_box(find_safe_placement(&flat, black_box(near), &params)));
    });

    let shaft = shaft_world();
    c.bench_function("safe_volume_solid_shaft", |b| {
        b.iter(|| black_box(find_safe_placement(&shaft, black_box(near), &params)));
    });

    let cavern = cavern_world();
    c.bench_function("safe_volume_caverns", |b| {
        b.iter(|| black_box(find_safe_placement(&cavern, black_box(near), &params)));
    });
}

fn bench_locate_nearest_region(c: &mut Criterion) {
    let mut world = cavern_world();
    world.fill_biome(20, 20, 31, 31, Biome::CrimsonForest);
    world.fill_biome(-31, -31, -24, -20, Biome::WarpedForest);
    let regions = [Biome::CrimsonForest, Biome::WarpedForest, Biome::GlowstoneCanyon];
    let finder = SafePositionFinder::default();
    let origin = VoxelCoord::new(0, 64, 0);

    c.bench_function("locate_two_regions_caverns", |b| {
        b.iter(|| black_box(finder.locate_nearest_region(&world, &regions, black_box(origin), 9999)));
    });
}

criterion_group!(benches, bench_find_safe_placement, bench_locate_nearest_region);
criterion_main!(benches);
