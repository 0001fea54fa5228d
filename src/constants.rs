// Shared tuning constants and DOM hooks used by the site behavior layer.

// Particle field
pub const PARTICLE_COUNT: usize = 60;
pub const CANVAS_HEIGHT: u32 = 260; // fixed backing height; width follows layout
pub const LINK_DISTANCE: f32 = 110.0; // pairs closer than this get a connecting line
pub const VELOCITY_SPREAD: f32 = 0.4; // (u - 0.5) * spread => [-0.2, 0.2]
pub const RADIUS_MIN: f32 = 0.6;
pub const RADIUS_SPAN: f32 = 1.6; // max radius = RADIUS_MIN + RADIUS_SPAN

// Particle palette
pub const PARTICLE_FILL: &str = "rgba(122,241,255,.8)";
pub const PARTICLE_GLOW: &str = "rgba(91,140,255,.65)";
pub const PARTICLE_GLOW_BLUR: f64 = 8.0;
pub const LINK_RGB: &str = "91,140,255";
pub const LINK_WIDTH: f64 = 0.6;

// Tilt cards
pub const TILT_DEG_PER_UNIT: f32 = 8.0; // degrees per unit of normalized cursor offset
pub const TILT_PERSPECTIVE_PX: f32 = 900.0;
pub const TILT_LIFT_PX: f32 = 2.0;

// Lazy videos
pub const VIDEO_ROOT_MARGIN: &str = "50px";

// Contact form
pub const SUBMIT_DELAY_MS: u32 = 1_000;
pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields.";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const MSG_SENDING: &str = "Sending message...";
pub const MSG_SENT: &str = "Message sent successfully! We'll be in touch soon.";
pub const MSG_FAILED: &str = "Error sending message. Please try again.";
pub const COLOR_ERROR: &str = "#ff6b6b";
pub const COLOR_OK: &str = "var(--accent-2)";

// DOM hooks
pub const PARTICLES_CANVAS_ID: &str = "particles";
pub const YEAR_ID: &str = "year";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_MSG_ID: &str = "contact-msg";
pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_MESSAGE: &str = "message";
pub const MENU_TOGGLE_SELECTOR: &str = ".menu-toggle";
pub const MENU_SELECTOR: &str = ".menu";
pub const MENU_OPEN_CLASS: &str = "open";
pub const TILT_SELECTOR: &str = "[data-tilt]";
pub const LAZY_VIDEO_SELECTOR: &str = "video[loading=\"lazy\"]";
pub const VIDEO_SELECTOR: &str = "video";
