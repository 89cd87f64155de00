// Element ids and media queries the front end looks up once at mount.

// Canvases (full-viewport, fixed, pointer-events: none)
pub const AURORA_CANVAS_ID: &str = "backdrop-aurora";
pub const PARTICLE_CANVAS_ID: &str = "backdrop-particles";
pub const CURSOR_CANVAS_ID: &str = "backdrop-cursor";

// <feTurbulence> inside the liquid SVG filter
pub const LIQUID_TURBULENCE_ID: &str = "liquid-turbulence";
pub const LIQUID_ATTRIBUTE: &str = "baseFrequency";

// Media queries
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const FINE_POINTER_DESKTOP_QUERY: &str = "(pointer: fine) and (min-width: 768px)";

// Touch events after which the particle pointer is parked off-screen
pub const TOUCH_RELEASE_EVENTS: [&str; 2] = ["touchend", "touchcancel"];

// Class on <html> that marks the dark theme
pub const DARK_THEME_CLASS: &str = "dark";

// Root style property owned by the cursor proxy while mounted
pub const ROOT_CURSOR_PROPERTY: &str = "cursor";
