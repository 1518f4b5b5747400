// Host-side tests for the bounded particle field and pointer repulsion.

use glam::{Vec2, Vec3};
use hero_core::constants::*;
use hero_core::particles::{repulsion, Anchor, ParticleField};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn field(count: usize, seed: u64) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleField::new(count, &mut rng, ANCHOR_RADIUS_MIN, ANCHOR_RADIUS_MAX)
}

#[test]
fn live_positions_stay_within_excursion_bound() {
    let mut f = field(500, 7);
    let bound = excursion_bound();
    let pointers = [
        Vec2::ZERO,
        Vec2::new(0.5, -0.3),
        Vec2::new(-1.0, 1.0),
    ];
    // Sweep a long idle session, including very late times
    let mut t = 0.0f32;
    while t < 100_000.0 {
        for &p in &pointers {
            f.update(t, p);
            for (i, anchor) in f.anchors().iter().enumerate() {
                let d = f.position(i).distance(anchor.position);
                assert!(d <= bound + 1e-4, "particle {i} at t={t} is {d} from anchor");
            }
        }
        t = t * 1.37 + 0.5;
    }
}

#[test]
fn anchors_sampled_inside_configured_band() {
    let f = field(1000, 3);
    for a in f.anchors() {
        let xy = Vec2::new(a.position.x, a.position.y).length();
        assert!(xy <= ANCHOR_RADIUS_MAX + 1e-4);
        assert!(a.position.z.abs() <= ANCHOR_DEPTH_SPAN * 0.5 + 1e-6);
        assert!(a.speed_xy >= SPEED_XY_MIN && a.speed_xy <= SPEED_XY_MIN + SPEED_XY_SPAN);
        assert!(a.speed_z >= SPEED_Z_MIN && a.speed_z <= SPEED_Z_MIN + SPEED_Z_SPAN);
    }
}

#[test]
fn same_seed_same_field() {
    let mut a = field(55, 42);
    let mut b = field(55, 42);
    assert_eq!(a.anchors(), b.anchors());
    a.update(12.5, Vec2::new(0.1, 0.2));
    b.update(12.5, Vec2::new(0.1, 0.2));
    assert_eq!(a.positions(), b.positions());
}

#[test]
fn consecutive_frames_move_a_bounded_amount() {
    let mut f = field(200, 11);
    let dt = 1.0 / 60.0;
    // Upper bound on oscillation speed given the sampled speed ranges
    let max_speed = 0.25;
    let pointer = Vec2::new(0.2, 0.1);

    f.update(0.0, pointer);
    let mut prev = f.positions().to_vec();
    for frame in 1..3000 {
        let t = frame as f32 * dt;
        f.update(t, pointer);
        for (i, (a, b)) in prev
            .chunks_exact(3)
            .zip(f.positions().chunks_exact(3))
            .enumerate()
        {
            let delta = Vec3::from_slice(a).distance(Vec3::from_slice(b));
            assert!(
                delta <= max_speed * dt + max_repulsion() + 1e-4,
                "particle {i} jumped {delta} at frame {frame}"
            );
        }
        prev.copy_from_slice(f.positions());
    }
}

#[test]
fn repulsion_is_zero_at_pointer() {
    let c = Vec2::new(1.2, -0.7);
    let r = repulsion(c, c);
    assert_eq!(r, Vec2::ZERO);
    assert!(r.is_finite());
}

#[test]
fn particle_exactly_under_pointer_is_left_alone() {
    let anchor = Anchor {
        position: Vec3::new(2.0, 1.0, 0.5),
        phase0: 0.3,
        phase1: 1.1,
        speed_xy: 0.1,
        speed_z: 0.07,
    };
    let t = 4.0;
    let expected = anchor.position + anchor.oscillation(t);
    let ndc = Vec2::new(
        expected.x / REPULSION_POINTER_SCALE[0],
        expected.y / REPULSION_POINTER_SCALE[1],
    );

    let mut f = ParticleField::from_anchors(vec![anchor]);
    f.update(t, ndc);
    let p = f.position(0);
    assert!(p.is_finite());
    assert_eq!(p, expected);
}

#[test]
fn repulsion_pushes_away_inside_radius_only() {
    let center = Vec2::ZERO;
    // Offsets avoid landing exactly on the radius
    for k in 0..60 {
        let d = k as f32 * 0.1 + 0.05;
        let pos = Vec2::new(d * 0.6, d * 0.8);
        let r = repulsion(pos, center);
        if d < REPULSION_RADIUS {
            let expected = (REPULSION_RADIUS - d) * REPULSION_STRENGTH;
            assert!((r.length() - expected).abs() < 1e-5);
            assert!(r.dot(pos) > 0.0, "push must point away from the pointer");
        } else {
            assert_eq!(r, Vec2::ZERO);
        }
        assert!(r.length() <= max_repulsion());
    }
}

#[test]
fn repulsion_does_not_accumulate() {
    let mut f = field(55, 5);
    let t = 9.0;
    f.update(t, Vec2::ZERO);
    let first = f.positions().to_vec();
    // Same time and pointer again: identical result, nothing carried over
    for _ in 0..10 {
        f.update(t, Vec2::ZERO);
    }
    assert_eq!(first.as_slice(), f.positions());
}
