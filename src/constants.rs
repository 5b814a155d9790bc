/// Panel dimensions, colors, camera and picking tuning.
///
/// The sizes reproduce the machine's physical proportions; everything
/// is in world units with the housing centered on the origin.

// Housing shell
pub const HOUSING_WIDTH: f32 = 28.0;
pub const HOUSING_HEIGHT: f32 = 15.0;
pub const HOUSING_DEPTH: f32 = 1.0;
pub const HOUSING_RADIUS: f32 = 0.5;
pub const HOUSING_BEVEL: f32 = 0.5;

// Inset recesses (left: power controls, right: pad grid)
pub const LEFT_RECESS_WIDTH: f32 = 3.0;
pub const LEFT_RECESS_HEIGHT: f32 = 5.5;
pub const RIGHT_RECESS_WIDTH: f32 = 22.0;
pub const RIGHT_RECESS_HEIGHT: f32 = 13.0;
pub const RECESS_RADIUS: f32 = 0.5;
pub const RECESS_BEVEL: f32 = 1.0;

// Pads
pub const PAD_WIDTH: f32 = 4.0;
pub const PAD_HEIGHT: f32 = 3.0;
pub const PAD_DEPTH: f32 = 1.0;
pub const PAD_RADIUS: f32 = 0.1;
pub const PAD_BEVEL: f32 = 0.3;

// Power button and monitor lamp
pub const POWER_BUTTON_WIDTH: f32 = 2.0;
pub const POWER_BUTTON_HEIGHT: f32 = 1.0;
pub const POWER_BUTTON_DEPTH: f32 = 1.0;
pub const POWER_BUTTON_RADIUS: f32 = 0.1;
pub const POWER_BUTTON_BEVEL: f32 = 0.2;
pub const MONITOR_RADIUS: f32 = 1.0;

// Child offsets on the (unrotated) panel, from the machine origin
pub const LEFT_RECESS_OFFSET: [f32; 3] = [-11.5, -3.75, -0.5];
pub const RIGHT_RECESS_OFFSET: [f32; 3] = [2.0, 0.0, -0.5];
pub const MONITOR_OFFSET: [f32; 3] = [-11.5, -4.75, -1.0];
pub const POWER_BUTTON_OFFSET: [f32; 3] = [-11.5, -2.25, -1.5];
pub const PAD_OFFSET_Z: f32 = -1.5;

// Tessellation
pub const CORNER_SEGMENTS: usize = 8;
pub const SPHERE_SEGMENTS: usize = 32;
pub const SPHERE_RINGS: usize = 32;

// Camera: raised above the panel, orbit clamped near the pole so the
// machine is always seen from above
pub const CAMERA_EYE: [f32; 3] = [0.0, 22.0, 5.0];
pub const CAMERA_FOVY_RADIANS: f32 = 75.0 * std::f32::consts::PI / 180.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const MAX_POLAR_ANGLE: f32 = std::f32::consts::PI / 6.0;
pub const ORBIT_RADIANS_PER_PX: f32 = 0.005;

// Canvas backing store
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Picking sphere radii around control centers
pub const PAD_PICK_RADIUS: f32 = 2.0;
pub const POWER_PICK_RADIUS: f32 = 1.2;

// Palette
pub const COLOR_BACKGROUND: [f32; 3] = [0.075, 0.085, 0.11];
pub const COLOR_HOUSING: [f32; 3] = [0.80, 0.78, 0.74];
pub const COLOR_RECESS: [f32; 3] = [0.16, 0.17, 0.20];
pub const COLOR_PAD_OFF: [f32; 3] = [0.78, 0.78, 0.82];
pub const COLOR_PAD_ON: [f32; 3] = [1.0, 0.42, 0.12];
pub const COLOR_POWER_BUTTON: [f32; 3] = [0.74, 0.12, 0.10];
pub const COLOR_MONITOR_OFF: [f32; 3] = [0.10, 0.22, 0.10];
pub const COLOR_MONITOR_ON: [f32; 3] = [0.30, 0.95, 0.35];

// Lighting: one directional key light plus a hemisphere ambient term
pub const LIGHT_DIRECTION: [f32; 3] = [1.0, 3.0, 1.0];
pub const HEMI_SKY: [f32; 3] = [0.55, 0.56, 0.60];
pub const HEMI_GROUND: [f32; 3] = [0.22, 0.20, 0.18];
