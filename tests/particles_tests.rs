// Host-side tests for the particle field and its motion.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod motion {
    include!("../src/core/motion.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use constants::*;
use glam::{Vec2, Vec3, Vec4};
use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn generated_points_are_finite_for_many_seeds() {
    for seed in 0..64u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = ParticleField::generate(PARTICLE_COUNT, PARTICLE_RADIUS, &mut rng);
        assert_eq!(field.len(), PARTICLE_COUNT);
        for p in field.positions() {
            assert!(p.is_finite(), "seed {} produced {:?}", seed, p);
        }
    }
}

#[test]
fn points_stay_inside_the_ball() {
    let mut rng = StdRng::seed_from_u64(7);
    let field = ParticleField::generate(2000, PARTICLE_RADIUS, &mut rng);
    let max = field.positions().map(Vec3::length).fold(0.0f32, f32::max);
    assert!(max <= PARTICLE_RADIUS + 1e-4);
    // uniform in volume: about half the points beyond r * cbrt(0.5)
    let knee = PARTICLE_RADIUS * 0.5f32.cbrt();
    let outer = field.positions().filter(|p| p.length() > knee).count();
    assert!((800..1200).contains(&outer), "outer = {}", outer);
}

#[test]
fn degenerate_radius_collapses_to_origin() {
    let mut rng = StdRng::seed_from_u64(1);
    let field = ParticleField::generate(100, f32::NAN, &mut rng);
    assert!(field.positions().all(|p| p == Vec3::ZERO));
    assert!(ParticleField::generate(0, 1.0, &mut rng).is_empty());
}

#[test]
fn vertex_bytes_are_tightly_packed() {
    let mut rng = StdRng::seed_from_u64(3);
    let field = ParticleField::generate(10, 1.0, &mut rng);
    assert_eq!(field.as_bytes().len(), 10 * 3 * std::mem::size_of::<f32>());
}

#[test]
fn sanitize_replaces_non_finite() {
    assert_eq!(sanitize(f32::NAN), 0.0);
    assert_eq!(sanitize(f32::NEG_INFINITY), 0.0);
    assert_eq!(sanitize(1.5), 1.5);
}

#[test]
fn field_spins_with_time_when_pointer_is_centred() {
    let mut m = FieldMotion::default();
    let r = m.step(10.0, Vec2::ZERO);
    assert!((r.x - 10.0 * FIELD_SPIN_X_PER_SEC).abs() < 1e-6);
    assert!((r.y - 10.0 * FIELD_SPIN_Y_PER_SEC).abs() < 1e-6);
    assert_eq!(m.tilt(), Vec2::ZERO);
}

#[test]
fn pointer_tilt_eases_toward_bias() {
    let mut m = FieldMotion::default();
    let pointer = Vec2::new(1.0, -1.0);
    let first = m.step(0.0, pointer);
    assert!((first.x - (-FIELD_POINTER_TILT * FIELD_POINTER_ALPHA)).abs() < 1e-6);
    assert!((first.y - FIELD_POINTER_TILT * FIELD_POINTER_ALPHA).abs() < 1e-6);
    let mut last = m.tilt();
    for _ in 0..500 {
        m.step(0.0, pointer);
        let tilt = m.tilt();
        assert!(tilt.y >= last.y && tilt.y <= FIELD_POINTER_TILT + 1e-6);
        last = tilt;
    }
    assert!((last.x + FIELD_POINTER_TILT).abs() < 1e-3);
    assert!((last.y - FIELD_POINTER_TILT).abs() < 1e-3);
}

#[test]
fn non_finite_time_does_not_poison_rotation() {
    let mut m = FieldMotion::default();
    let r = m.step(f32::NAN, Vec2::ZERO);
    assert_eq!(r, Vec2::ZERO);
    assert!(m.model_matrix().is_finite());
}

#[test]
fn camera_projects_origin_to_centre() {
    let cam = Camera::looking_at_origin(FIELD_CAMERA_Z, 16.0 / 9.0);
    let clip = cam.view_proj() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
    assert_eq!(Camera::looking_at_origin(2.0, 0.0).aspect, 1.0);
}
