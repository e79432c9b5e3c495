use glam::Vec3;

// Shared scene tuning constants used by both web and native frontends.

// Camera base pose
pub const DEFAULT_CAMERA_POSITION: Vec3 = Vec3::new(-1.5, 1.0, 5.5);
pub const DEFAULT_LOOK_AT: Vec3 = Vec3::ZERO;
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 20.0;

// Idle parallax: target = (IDLE_BASE_X + x * viewport_width / IDLE_WIDTH_DIVISOR, (1 + y) / 2, IDLE_Z)
pub const IDLE_BASE_X: f32 = -1.0;
pub const IDLE_WIDTH_DIVISOR: f32 = 3.0;
pub const IDLE_Z: f32 = 5.5;

// Camera damping
pub const CAMERA_SMOOTH_TIME_SEC: f32 = 0.5;
// Look-at height used when a focus target is unusable
pub const FALLBACK_LOOK_AT: Vec3 = Vec3::new(0.0, 0.25, 0.0);

// Focus points
pub const CHARACTER_FOCUS_POINT: Vec3 = Vec3::new(-0.14, -0.47, 2.15);
pub const DEFAULT_SHOWREEL_TARGET: Vec3 = Vec3::new(1.26, -0.13, -7.42);
pub const DEFAULT_PROJECTS_TARGET: Vec3 = Vec3::new(0.96, 4.28, -4.2);
pub const SPOTLIGHT_AIM: Vec3 = Vec3::new(0.0, -1.0, 2.0);

// Screen-focus rigs (radius, speed); height follows the target, no spin
pub const SHOWREEL_RIG_RADIUS: f32 = 0.9;
pub const PROJECTS_RIG_RADIUS: f32 = 1.0;
pub const SCREEN_RIG_SPEED: f32 = 0.9;

// Character placement
pub const CHARACTER_POSITION: Vec3 = Vec3::new(0.0, -1.0, 2.0);
pub const CHARACTER_YAW: f32 = std::f32::consts::PI;
pub const CHARACTER_HIT_RADIUS: f32 = 0.55; // ray-sphere radius for hover/click
pub const CHARACTER_HIT_OFFSET: Vec3 = Vec3::new(-0.09, 0.55, -0.4);

// Head gaze
pub const HEAD_YAW_MAX: f32 = 0.6;
pub const HEAD_PITCH_MAX: f32 = 0.35;
pub const HEAD_BLEND_PER_FRAME: f32 = 0.12;
pub const HEAD_BONE_KEYWORDS: &[&str] = &["head", "tete", "neck"];

// Pointer / gyro
pub const MOBILE_WIDTH_THRESHOLD: f32 = 768.0;
pub const GYRO_GAMMA_RANGE_DEG: f32 = 55.0;
pub const GYRO_BETA_REST_DEG: f32 = 90.0;
pub const GYRO_BETA_RANGE_DEG: f32 = 50.0;

// Dust
pub const DUST_FRAME_RATE_BASELINE: f32 = 60.0;
pub const MAX_DUST_COUNT: usize = 100_000;
pub const DUST_JITTER: f32 = 0.002; // full width of the per-step jitter window

// Hover glow (#35c19f)
pub const HOVER_EMISSIVE_RGB: [f32; 3] = [0.208, 0.757, 0.624];
pub const HOVER_MIN_INTENSITY: f32 = 0.8;
