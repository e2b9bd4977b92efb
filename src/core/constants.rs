// Shared interaction/animation tuning constants used by the web frontend.

// Cursor
pub const CURSOR_LERP_ALPHA: f32 = 0.1; // fraction of remaining distance closed per frame
pub const CURSOR_OFFSCREEN: [f32; 2] = [-100.0, -100.0]; // start position before first move
pub const CURSOR_SIZE_PX: f32 = 15.0;
pub const CURSOR_HOVER_SIZE_PX: f32 = 30.0;
pub const INTERACTIVE_SELECTOR: &str = "a, button, [role=\"button\"]";
pub const CURSOR_MIN_VIEWPORT_PX: u32 = 768; // md breakpoint; narrower screens keep the native cursor

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.2; // visible fraction that triggers the reveal
pub const REVEAL_RATIO_EPSILON: f64 = 1e-3; // browsers report crossings a hair under the threshold
pub const REVEAL_DURATION_SEC: f64 = 0.5;
pub const REVEAL_OFFSET_PX: f64 = 50.0; // initial downward slide

// Ambient background
pub const PARTICLE_COUNT: usize = 5000;
pub const PARTICLE_RADIUS: f32 = 3.0;
pub const FIELD_SPIN_X_PER_SEC: f32 = 0.02; // radians per second
pub const FIELD_SPIN_Y_PER_SEC: f32 = 0.05;
pub const FIELD_POINTER_TILT: f32 = 0.1; // max bias (radians) at the viewport edge
pub const FIELD_POINTER_ALPHA: f32 = 0.02;
pub const FIELD_CAMERA_Z: f32 = 2.5;
pub const FIELD_POINT_COLOR: [f32; 4] = [0.341, 0.439, 0.961, 1.0]; // #5770F5

// Contact form
pub const STATUS_REVERT_MS: u32 = 8_000;

// Shell
pub const PRELOADER_MS: u32 = 1_500;
pub const LOCALE_STORAGE_KEY: &str = "language";
pub const THEME_STORAGE_KEY: &str = "theme";
