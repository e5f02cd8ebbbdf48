// Shared tuning constants for the particle field and the page effects.

// Particle field sizing
pub const MAX_PARTICLES: usize = 80;
pub const PARTICLE_SPACING_PX: f64 = 15.0; // one particle per this many px of surface width

// Particle attribute ranges (half-open: [min, max))
pub const PARTICLE_SIZE_MIN: f64 = 0.5;
pub const PARTICLE_SIZE_MAX: f64 = 2.5;
pub const PARTICLE_SPEED_MAX: f64 = 0.25; // per axis, px per frame
pub const PARTICLE_OPACITY_MIN: f64 = 0.1;
pub const PARTICLE_OPACITY_MAX: f64 = 0.5;

// Proximity connections
pub const LINK_DISTANCE: f64 = 120.0;
pub const LINK_MAX_ALPHA: f64 = 0.06;
pub const LINK_LINE_WIDTH: f64 = 0.5;

// Indigo used for particles and links
pub const PARTICLE_RGB: [u8; 3] = [99, 102, 241];

// Viewport / scroll thresholds (CSS px)
pub const DESKTOP_MIN_WIDTH: f64 = 768.0; // cursor glow and parallax only above this
pub const NAV_SCROLLED_OFFSET: f64 = 50.0;
pub const BACK_TO_TOP_OFFSET: f64 = 500.0;

// Typing effect timing (ms)
pub const TYPE_STEP_MS: u32 = 60;
pub const DELETE_STEP_MS: u32 = 30;
pub const PHRASE_HOLD_MS: u32 = 2500;
pub const PHRASE_GAP_MS: u32 = 500;

pub const DEFAULT_PHRASES: [&str; 6] = [
    "Senior Flutter Developer",
    "Mobile App Architect",
    "Clean Architecture Expert",
    "BLoC/Cubit Specialist",
    "UI/UX Implementer",
    "Cross-Platform Developer",
];

// Entrance / reveal timing (ms)
pub const HERO_ANIMATION_OFFSET_MS: u32 = 200;
pub const REVEAL_STAGGER_MS: u32 = 80;
pub const STAGGERED_GRID_CLASSES: [&str; 3] = ["skills-grid", "projects-grid", "contact-grid"];

// Counter animation
pub const COUNTER_DURATION_MS: f64 = 1500.0;

// Parallax
pub const PARALLAX_SHIFT_PX: f64 = 15.0;
pub const PARALLAX_RESET_MS: u32 = 500;

// IntersectionObserver options
pub const NAV_OBSERVER_THRESHOLD: f64 = 0.3;
pub const NAV_OBSERVER_ROOT_MARGIN: &str = "-80px 0px 0px 0px";
pub const REVEAL_OBSERVER_THRESHOLD: f64 = 0.1;
pub const REVEAL_OBSERVER_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const COUNTER_OBSERVER_THRESHOLD: f64 = 0.5;
