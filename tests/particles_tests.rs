// Host-side tests for the particle field simulation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use constants::*;
use particles::*;

const W: f32 = 800.0;
const H: f32 = 260.0;

fn make_field(seed: u64) -> ParticleField {
    ParticleField::new(W, H, FieldParams::default(), seed)
}

#[test]
fn spawn_respects_count_and_ranges() {
    let field = make_field(7);
    assert_eq!(field.particles().len(), PARTICLE_COUNT);
    let max_v = VELOCITY_SPREAD / 2.0;
    for p in field.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x < W, "x out of range: {}", p.pos.x);
        assert!(p.pos.y >= 0.0 && p.pos.y < H, "y out of range: {}", p.pos.y);
        assert!(p.vel.x.abs() <= max_v && p.vel.y.abs() <= max_v);
        assert!(p.radius >= RADIUS_MIN && p.radius <= RADIUS_MIN + RADIUS_SPAN);
    }
}

#[test]
fn same_seed_spawns_same_batch() {
    let a = make_field(42);
    let b = make_field(42);
    assert_eq!(a.particles(), b.particles());
    let c = make_field(43);
    assert_ne!(a.particles(), c.particles());
}

#[test]
fn step_is_unit_euler_inside_bounds() {
    let mut field = make_field(3);
    let before: Vec<Particle> = field.particles().to_vec();
    field.step();
    for (old, new) in before.iter().zip(field.particles()) {
        let moved = old.pos + old.vel;
        assert!((new.pos - moved).length() < 1e-5);
        let inside = moved.x >= 0.0 && moved.x <= W && moved.y >= 0.0 && moved.y <= H;
        if inside {
            assert_eq!(new.vel, old.vel);
        }
        assert_eq!(new.radius, old.radius);
    }
}

#[test]
fn overshoot_never_exceeds_one_step() {
    let mut field = make_field(11);
    let tol = VELOCITY_SPREAD / 2.0 + 1e-3;
    for _ in 0..20_000 {
        field.step();
        for p in field.particles() {
            assert!(p.pos.x >= -tol && p.pos.x <= W + tol, "x escaped: {}", p.pos.x);
            assert!(p.pos.y >= -tol && p.pos.y <= H + tol, "y escaped: {}", p.pos.y);
        }
    }
}

#[test]
fn out_of_bounds_particle_returns_next_frame() {
    let mut field = make_field(5);
    let eps = 1e-3;
    for _ in 0..5_000 {
        let outside: Vec<usize> = field
            .particles()
            .iter()
            .enumerate()
            .filter(|(_, p)| p.pos.x < 0.0 || p.pos.x > W || p.pos.y < 0.0 || p.pos.y > H)
            .map(|(i, _)| i)
            .collect();
        field.step();
        for i in outside {
            let p = field.particles()[i];
            assert!(p.pos.x >= -eps && p.pos.x <= W + eps);
            assert!(p.pos.y >= -eps && p.pos.y <= H + eps);
        }
    }
}

#[test]
fn crossing_an_edge_flips_velocity_without_clamping() {
    // A tiny box forces frequent contacts.
    let mut field = ParticleField::new(1.0, 1.0, FieldParams::default(), 9);
    let mut saw_overshoot = false;
    for _ in 0..200 {
        let before: Vec<Particle> = field.particles().to_vec();
        field.step();
        for (old, new) in before.iter().zip(field.particles()) {
            if new.pos.x < 0.0 || new.pos.x > 1.0 {
                saw_overshoot = true;
                assert_eq!(new.vel.x, -old.vel.x);
            }
            if new.pos.y < 0.0 || new.pos.y > 1.0 {
                assert_eq!(new.vel.y, -old.vel.y);
            }
        }
    }
    assert!(saw_overshoot, "expected at least one unclamped overshoot");
}

#[test]
fn resize_replaces_batch_within_new_bounds() {
    let mut field = make_field(21);
    let before: Vec<Particle> = field.particles().to_vec();
    field.resize(320.0, H);
    assert_eq!(field.width(), 320.0);
    assert_eq!(field.particles().len(), PARTICLE_COUNT);
    assert_ne!(field.particles(), &before[..]);
    for p in field.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x < 320.0);
    }
}

#[test]
fn link_alpha_endpoints_and_midpoint() {
    assert_eq!(link_alpha(0.0, LINK_DISTANCE), 1.0);
    assert_eq!(link_alpha(LINK_DISTANCE, LINK_DISTANCE), 0.0);
    assert_eq!(link_alpha(LINK_DISTANCE * 2.0, LINK_DISTANCE), 0.0);
    assert!((link_alpha(55.0, LINK_DISTANCE) - 0.5).abs() < 1e-6);
}

#[test]
fn link_alpha_is_monotonically_decreasing() {
    let mut prev = link_alpha(0.0, LINK_DISTANCE);
    for i in 1..=1_100 {
        let a = link_alpha(i as f32 * 0.1, LINK_DISTANCE);
        assert!(a <= prev, "alpha rose at distance {}", i as f32 * 0.1);
        prev = a;
    }
    assert_eq!(prev, 0.0);
}

#[test]
fn links_cover_exactly_the_close_pairs() {
    let field = make_field(13);
    let ps = field.particles();
    let mut expected = 0;
    for i in 0..ps.len() {
        for j in (i + 1)..ps.len() {
            if ps[i].pos.distance(ps[j].pos) < LINK_DISTANCE {
                expected += 1;
            }
        }
    }
    let links: Vec<Link> = field.links().collect();
    assert_eq!(links.len(), expected);
    for l in &links {
        assert!(l.a < l.b);
        let d = ps[l.a].pos.distance(ps[l.b].pos);
        assert!(d < LINK_DISTANCE);
        assert!((l.alpha - (1.0 - d / LINK_DISTANCE)).abs() < 1e-5);
        assert!(l.alpha > 0.0 && l.alpha <= 1.0);
    }
}
