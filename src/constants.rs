/// Particle cursor tuning constants.
///
/// These constants express intended behavior (ease factors, size ranges,
/// clamp limits) and keep magic numbers out of the simulation code.
// Host element
pub const CANVAS_ELEMENT_ID: &str = "cursor-canvas";

// Particle counts
pub const DEFAULT_QUANTITY: usize = 28;
pub const DEFAULT_INNER_COUNT: usize = 12;
pub const MIN_OUTER_COUNT: usize = 3; // a ring needs at least a triangle

// Orbit geometry (logical pixels)
pub const BASE_RADIUS: f32 = 20.0;
pub const RADIUS_SCALE_MIN: f32 = 1.0; // released
pub const RADIUS_SCALE_MAX: f32 = 1.5; // pressed
pub const RADIUS_EASE: f32 = 0.02;
pub const ROTATION_SPEED: f32 = 0.02; // radians per frame

// Pointer follow (first-order low-pass on the orbit center)
pub const FOLLOW_EASE: f32 = 0.18;

// Phase advance per frame for wobble
pub const SPEED_MIN: f32 = 0.01;
pub const SPEED_MAX: f32 = 0.05;

// Inner cluster shape
pub const INNER_ORBIT_FACTOR_MIN: f32 = 0.2;
pub const INNER_ORBIT_FACTOR_MAX: f32 = 0.75;
pub const INNER_WOBBLE_MIN: f32 = 0.35;
pub const INNER_WOBBLE_MAX: f32 = 1.0;
pub const WOBBLE_FREQUENCY: f32 = 2.0;
pub const WOBBLE_AMPLITUDE: f32 = 0.25; // radians

// Particle size cycling
pub const OUTER_SIZE_MIN: f32 = 2.0;
pub const OUTER_SIZE_MAX: f32 = 6.0;
pub const INNER_SIZE_MIN: f32 = 2.0;
pub const INNER_SIZE_MAX: f32 = 4.0;
pub const SIZE_EASE: f32 = 0.06;
pub const SIZE_REROLL_EPSILON: f32 = 0.05;

// Opacity
pub const OUTER_ALPHA: f32 = 1.0;
pub const INNER_ALPHA: f32 = 0.75;

// Connecting lines
pub const LINE_WIDTH: f64 = 0.5;
pub const LINE_ALPHA: f64 = 0.3;
pub const LINE_COLOR: &str = "white";

// Theme color slots, read in order from the document root
pub const THEME_COLOR_SLOTS: [&str; 6] = [
    "--dataviz-accent",
    "--dashboards-accent",
    "--hci-accent",
    "--management-accent",
    "--gis-accent",
    "--sustainability-accent",
];

// Used when the theme defines none of the slots
pub const FALLBACK_PALETTE: [&str; 6] = [
    "#F2C94C", "#3554bb", "#7fe7ff", "#9b89ff", "#7dffb2", "#ffffff",
];

// `document.readyState` while the parser is still running
pub const LOADING_READY_STATE: &str = "loading";

// Media queries
pub const FINE_POINTER_QUERY: &str = "(pointer: fine)";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
