/// DOM contract with the page markup and stylesheet.
///
/// Selectors and class names must match the HTML/CSS exactly or the widget
/// that needs them stays inert.
// Card
pub const CARD_SCENE_ID: &str = "business-card";
pub const CARD_OBJECT_SELECTOR: &str = ".card-object";
pub const SHINE_SELECTOR: &str = ".shine";
pub const SHADOW_SELECTOR: &str = ".card-shadow";
pub const LINK_SELECTOR: &str = "a";
pub const FLIPPED_CLASS: &str = "is-flipped";
pub const INTERACTING_CLASS: &str = "is-interacting";

// Map
pub const MAP_POINT_SELECTOR: &str = ".map-point";
pub const MAP_SECTION_ID: &str = "international";
pub const ACTIVE_CLASS: &str = "is-active";

// Scroll
pub const HEADER_ID: &str = "header";
pub const REVEAL_UP_SELECTOR: &str = ".reveal-up";
pub const MASK_IMAGE_SELECTOR: &str = ".mask-reveal-image";

// Capability probes
pub const HOVER_MEDIA_QUERY: &str = "(hover: hover)";
pub const TOUCH_START_PROP: &str = "ontouchstart";

// Frames longer than this (a throttled or backgrounded tab) advance
// animations by a single nominal frame instead.
pub const LAG_THRESHOLD_SEC: f32 = 0.5;
pub const LAG_STEP_SEC: f32 = 1.0 / 30.0;
