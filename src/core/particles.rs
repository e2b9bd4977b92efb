// Ambient particle field: point generation and per-frame rotation.

use super::constants::{
    FIELD_POINTER_ALPHA, FIELD_POINTER_TILT, FIELD_SPIN_X_PER_SEC, FIELD_SPIN_Y_PER_SEC,
};
use super::motion::Smoother;
use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

/// Replace a non-finite coordinate with 0 so the GPU never sees NaN/inf.
#[inline]
pub fn sanitize(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// Fixed set of points generated once at mount.
#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<[f32; 3]>,
}

impl ParticleField {
    /// Uniformly fill a ball of `radius` with `count` points.
    pub fn generate<R: Rng>(count: usize, radius: f32, rng: &mut R) -> Self {
        let radius = sanitize(radius).abs();
        let mut positions = Vec::with_capacity(count);
        for _ in 0..count {
            // cos(theta) uniform in [-1, 1] and r ~ cbrt(u) give uniform density
            let cos_theta: f32 = rng.gen_range(-1.0..=1.0);
            let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
            let phi: f32 = rng.gen_range(0.0..TAU);
            let r = radius * rng.gen::<f32>().cbrt();
            positions.push([
                sanitize(r * sin_theta * phi.cos()),
                sanitize(r * sin_theta * phi.sin()),
                sanitize(r * cos_theta),
            ]);
        }
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.positions.iter().map(|p| Vec3::from_array(*p))
    }

    /// Tightly packed `[x, y, z]` floats for a vertex buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }
}

/// Rotation of the whole field: a slow time-driven spin plus a tilt that
/// eases toward the pointer.
#[derive(Clone, Copy, Debug)]
pub struct FieldMotion {
    tilt: Smoother,
    rotation: Vec2,
}

impl Default for FieldMotion {
    fn default() -> Self {
        Self {
            tilt: Smoother::new(FIELD_POINTER_ALPHA, Vec2::ZERO),
            rotation: Vec2::ZERO,
        }
    }
}

impl FieldMotion {
    /// `elapsed_sec` since mount, `pointer_ndc` in `[-1, 1]` (y up).
    /// Returns the (x, y) rotation angles in radians.
    pub fn step(&mut self, elapsed_sec: f32, pointer_ndc: Vec2) -> Vec2 {
        let t = sanitize(elapsed_sec).max(0.0);
        let spin = Vec2::new(t * FIELD_SPIN_X_PER_SEC, t * FIELD_SPIN_Y_PER_SEC);
        // Pointer y tilts around the x axis and vice versa.
        self.tilt.set_target(Vec2::new(
            pointer_ndc.y * FIELD_POINTER_TILT,
            pointer_ndc.x * FIELD_POINTER_TILT,
        ));
        self.rotation = spin + self.tilt.step();
        self.rotation
    }

    #[inline]
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    #[inline]
    pub fn tilt(&self) -> Vec2 {
        self.tilt.position()
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }
}

/// Fixed perspective camera looking down -Z at the origin.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn looking_at_origin(z: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: if aspect.is_finite() && aspect > 0.0 {
                aspect
            } else {
                1.0
            },
            fovy_radians: 75f32.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
