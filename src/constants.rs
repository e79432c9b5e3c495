/// DOM element ids and window event names the page is expected to provide.
///
/// The overlays themselves are plain HTML; the front-end only toggles their
/// visibility and fills in the loading percentage.
pub const CANVAS_ID: &str = "app-canvas";

pub const ABOUT_OVERLAY_ID: &str = "about-overlay";
pub const PROJECTS_OVERLAY_ID: &str = "projects-overlay";
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
pub const LOADING_PERCENT_ID: &str = "loading-percent";
pub const VIDEO_MODAL_ID: &str = "video-modal";

pub const ABOUT_BACK_BUTTON_ID: &str = "about-back";
pub const PROJECTS_CLOSE_BUTTON_ID: &str = "projects-close";
pub const VIDEO_CLOSE_BUTTON_ID: &str = "video-close";

// Window-level events bridged onto the signal bus
pub const EVENT_FOCUS_CHARACTER: &str = "focusCharacter";
pub const EVENT_FOCUS_SHOWREEL: &str = "focusShowreel";
pub const EVENT_FOCUS_PROJECTS: &str = "focusProjects";
pub const EVENT_RESTORE_CAMERA: &str = "restoreCamera";

// Class toggled on overlays; elements without the stylesheet fall back to inline display
pub const HIDDEN_CLASS: &str = "hidden";

// Canvas backing store is capped at this device pixel ratio
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 1.5;

pub const CLEAR_COLOR: [f64; 3] = [0.02, 0.02, 0.035];
