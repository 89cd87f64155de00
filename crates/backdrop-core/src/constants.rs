// Simulation tuning shared by every effect.

// Device classes
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0; // css widths below this are "mobile"
pub const MAX_PARTICLES: usize = 200; // hard cap so the pairwise line pass stays bounded

// Particle field, desktop
pub const DESKTOP_PARTICLE_COUNT: usize = 80;
pub const DESKTOP_REPULSION_RADIUS: f32 = 150.0;
pub const DESKTOP_LINE_DISTANCE: f32 = 120.0;

// Particle field, mobile
pub const MOBILE_PARTICLE_COUNT: usize = 35;
pub const MOBILE_REPULSION_RADIUS: f32 = 100.0;
pub const MOBILE_LINE_DISTANCE: f32 = 80.0;

// Particle forces (per frame, css px)
pub const REPULSION_STRENGTH: f32 = 0.6;
pub const HOME_SPRING: f32 = 0.01;
pub const VELOCITY_DAMPING: f32 = 0.95;
pub const WRAP_MARGIN: f32 = 10.0;
pub const INITIAL_SPEED_RANGE: f32 = 0.25; // each axis in [-range, range)
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_MAX: f32 = 3.0;
pub const PARTICLE_OPACITY_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_MAX: f32 = 0.7;
pub const LINE_ALPHA_MAX: f32 = 0.15;
pub const LINE_WIDTH: f32 = 0.6;

// Where the pointer "is" when there is no active pointer
pub const POINTER_OFFSCREEN: f32 = -9999.0;

// Aurora
pub const AURORA_PHASE_STEP: f32 = 0.001;
pub const AURORA_AMBIENT_LAYERS: usize = 3;

// Liquid distortion
pub const LIQUID_PHASE_STEP: f32 = 0.003;
pub const LIQUID_BASE_FREQ_X: f32 = 0.01;
pub const LIQUID_BASE_FREQ_Y: f32 = 0.02;
pub const LIQUID_FREQ_SWING: f32 = 0.005;

// Cursor proxy
pub const RIPPLE_INTERVAL_MS: f64 = 80.0;
pub const RIPPLE_LIFETIME_MS: f64 = 600.0;
pub const RIPPLE_CAP: usize = 6;
pub const RIPPLE_START_DIAMETER: f32 = 4.0;
pub const RIPPLE_END_DIAMETER: f32 = 30.0;
pub const RIPPLE_START_ALPHA: f32 = 0.4;
pub const PRESSED_SCALE: f32 = 0.8;
pub const TRAIL_RING_PADDING: f32 = 16.0;

// Spring followers (stiffness, damping, mass)
pub const MAIN_SPRING: [f32; 3] = [300.0, 20.0, 0.5];
pub const TRAIL_SPRING: [f32; 3] = [150.0, 30.0, 1.0];
pub const SPRING_MAX_DT_SEC: f32 = 0.064; // tab switches etc. must not explode the integrator
pub const SPRING_SUBSTEP_SEC: f32 = 1.0 / 240.0;

// Surface
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
