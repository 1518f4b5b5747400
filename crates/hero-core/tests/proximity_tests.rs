// Host-side tests for the per-frame proximity graph and its line buffer.

use glam::Vec3;
use hero_core::constants::*;
use hero_core::{LineBuffer, ParticleField, ProximityGraph, ProximityStrategy};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn flat(points: &[[f32; 3]]) -> Vec<f32> {
    points.iter().flatten().copied().collect()
}

fn segments(lines: &LineBuffer) -> Vec<[u32; 6]> {
    lines
        .valid()
        .chunks_exact(FLOATS_PER_SEGMENT)
        .map(|s| {
            let mut out = [0u32; 6];
            for (o, v) in out.iter_mut().zip(s) {
                *o = v.to_bits();
            }
            out
        })
        .collect()
}

#[test]
fn four_points_three_pairs_exact_output() {
    // 0,1,2 are mutually within 3.2; 3 is far from everything
    let pts = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [2.0, 0.0, 0.0],
        [20.0, 0.0, 0.0],
    ];
    let mut g = ProximityGraph::new(3.2, 32, ProximityStrategy::Exhaustive);
    let n = g.rebuild(&flat(&pts));

    assert_eq!(n, 3);
    assert_eq!(g.lines().len(), 3);
    assert_eq!(g.lines().draw_range(), 6);
    assert_eq!(g.lines().valid().len(), 18);
    assert_eq!(
        g.lines().valid(),
        &[
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 2.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, 2.0, 0.0, 0.0,
        ]
    );
}

#[test]
fn threshold_is_strict() {
    let pts = [[0.0, 0.0, 0.0], [3.2, 0.0, 0.0], [0.0, 3.1, 0.0]];
    let mut g = ProximityGraph::new(3.2, 8, ProximityStrategy::Exhaustive);
    assert_eq!(g.rebuild(&flat(&pts)), 1);
}

#[test]
fn capacity_is_never_exceeded() {
    // Ten coincident points: 45 qualifying pairs
    let pts = vec![[0.5, 0.5, 0.5]; 10];
    for strategy in [ProximityStrategy::Exhaustive, ProximityStrategy::Grid] {
        let mut g = ProximityGraph::new(3.2, 8, strategy);
        let n = g.rebuild(&flat(&pts));
        assert_eq!(n, 8);
        assert!(g.lines().is_full());
        assert_eq!(g.lines().draw_range(), 16);
        assert_eq!(g.lines().as_slice().len(), 8 * FLOATS_PER_SEGMENT);
    }
}

#[test]
fn draw_range_shrinks_and_next_slot_is_zeroed() {
    let mut g = ProximityGraph::new(3.2, 64, ProximityStrategy::Exhaustive);
    let dense = vec![[1.0, 1.0, 1.0]; 8];
    assert_eq!(g.rebuild(&flat(&dense)), 28);

    let sparse = [[1.0, 1.0, 1.0], [2.0, 1.0, 1.0], [30.0, 0.0, 0.0]];
    assert_eq!(g.rebuild(&flat(&sparse)), 1);
    assert_eq!(g.lines().draw_range(), 2);
    let tail = &g.lines().as_slice()[FLOATS_PER_SEGMENT..2 * FLOATS_PER_SEGMENT];
    assert!(tail.iter().all(|&v| v == 0.0));
}

#[test]
fn empty_and_single_point_produce_nothing() {
    let mut g = ProximityGraph::new(3.2, 8, ProximityStrategy::Grid);
    assert_eq!(g.rebuild(&[]), 0);
    assert!(g.lines().is_empty());
    assert_eq!(g.rebuild(&[1.0, 2.0, 3.0]), 0);
    assert_eq!(g.lines().draw_range(), 0);
}

#[test]
fn grid_matches_exhaustive_edge_set() {
    for seed in 0..8u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = ParticleField::new(120, &mut rng, ANCHOR_RADIUS_MIN, ANCHOR_RADIUS_MAX);
        field.update(seed as f32 * 3.7, glam::Vec2::new(0.3, -0.2));

        // Large enough that neither strategy truncates
        let cap = 120 * 119 / 2;
        let mut brute =
            ProximityGraph::new(CONNECTION_DISTANCE, cap, ProximityStrategy::Exhaustive);
        let mut grid = ProximityGraph::new(CONNECTION_DISTANCE, cap, ProximityStrategy::Grid);
        brute.rebuild(field.positions());
        grid.rebuild(field.positions());

        let mut a = segments(brute.lines());
        let mut b = segments(grid.lines());
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b, "seed {seed}");
        assert!(!a.is_empty());
    }
}

#[test]
fn grid_handles_negative_coordinates() {
    let pts = [[-0.1, -0.1, -0.1], [0.1, 0.1, 0.1], [-6.5, 0.0, 0.0]];
    let mut g = ProximityGraph::new(3.2, 8, ProximityStrategy::Grid);
    assert_eq!(g.rebuild(&flat(&pts)), 1);
}

#[test]
fn line_buffer_push_stops_at_capacity() {
    let mut buf = LineBuffer::with_capacity(2);
    assert!(buf.push(Vec3::ZERO, Vec3::X));
    assert!(buf.push(Vec3::Y, Vec3::Z));
    assert!(!buf.push(Vec3::ONE, Vec3::ONE));
    assert_eq!(buf.len(), 2);
    assert_eq!(buf.capacity(), 2);
    buf.clear();
    assert!(buf.is_empty());
    assert_eq!(buf.as_slice().len(), 12);
}

#[test]
fn grid_forgets_cells_left_behind() {
    let mut g = ProximityGraph::new(1.0, 8, ProximityStrategy::Grid);
    // Two points walking steadily away from the origin, one cell per frame
    for frame in 0..2000 {
        let x = frame as f32 * 1.5;
        let pts = [[x, 0.0, 0.0], [x + 0.5, 0.0, 0.0]];
        assert_eq!(g.rebuild(&flat(&pts)), 1);
        assert!(g.grid_cells() <= 4, "{} cells at frame {frame}", g.grid_cells());
    }
}
