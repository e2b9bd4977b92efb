// Pointer smoothing shared by the custom cursor and the ambient background.
//
// Both consumers run a fixed-factor exponential filter once per animation
// frame: `current += (target - current) * alpha`. Nothing here touches the
// DOM so the filter can be stepped by hand in host tests.

use super::constants::CURSOR_MIN_VIEWPORT_PX;
use glam::Vec2;

/// Move `current` a fraction `alpha` of the way toward `target`.
#[inline]
pub fn approach(current: Vec2, target: Vec2, alpha: f32) -> Vec2 {
    current + (target - current) * alpha
}

/// Per-frame convergence filter toward the latest pointer sample.
#[derive(Clone, Copy, Debug)]
pub struct Smoother {
    alpha: f32,
    current: Vec2,
    target: Vec2,
}

impl Smoother {
    /// `start` is used both as the initial position and the initial target,
    /// so the filter sits still until the first sample arrives.
    pub fn new(alpha: f32, start: Vec2) -> Self {
        let alpha = if alpha.is_finite() {
            alpha.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            alpha,
            current: start,
            target: start,
        }
    }

    pub fn set_target(&mut self, sample: Vec2) {
        if sample.is_finite() {
            self.target = sample;
        }
    }

    /// Advance one frame and return the new smoothed position.
    pub fn step(&mut self) -> Vec2 {
        self.current = approach(self.current, self.target, self.alpha);
        self.current
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}

/// Map viewport pixel coordinates to normalized device coordinates
/// (x right, y up, both in `[-1, 1]`). A zero-sized viewport maps to the
/// centre.
#[inline]
pub fn client_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width > 0.0 && height > 0.0 {
        let nx = (x / width) * 2.0 - 1.0;
        let ny = 1.0 - (y / height) * 2.0;
        Vec2::new(nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0))
    } else {
        Vec2::ZERO
    }
}

/// CSS transform that places the cursor at `pos`.
pub fn cursor_transform(pos: Vec2) -> String {
    format!("translate3d({:.2}px, {:.2}px, 0)", pos.x, pos.y)
}

/// Media query the custom cursor requires: a wide viewport and a mouse-like
/// pointer. Touch screens keep the native behaviour.
pub fn cursor_media_query() -> String {
    format!(
        "(min-width: {}px) and (pointer: fine)",
        CURSOR_MIN_VIEWPORT_PX
    )
}
