//! Shared constants: thresholds, timings, storage keys and DOM hooks.

// ── Scroll ──────────────────────────────────────────────────────

/// Scroll offset (px) past which the navbar switches to its scrolled style.
pub const NAVBAR_SCROLLED_PX: f64 = 50.0;

/// Scroll offset (px) past which the back-to-top button is shown.
pub const BACK_TO_TOP_PX: f64 = 300.0;

/// Parallax speed of the first matching element.
pub const PARALLAX_BASE_SPEED: f64 = 0.5;

/// Speed added per subsequent parallax element.
pub const PARALLAX_SPEED_STEP: f64 = 0.1;

// ── Animation timing ────────────────────────────────────────────

/// Counter duration when `data-duration` is absent or invalid.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Progress bar transition duration when `data-duration` is absent or invalid.
pub const PROGRESS_DURATION_MS: f64 = 1500.0;

/// Delay between the `width: 0%` write and the target write, so the CSS
/// transition engine registers the starting state.
pub const PROGRESS_START_DELAY_MS: u32 = 100;

/// Overlay fade-out duration before it is hidden with `display: none`.
pub const OVERLAY_FADE_MS: u32 = 500;

/// Delay before the post-load `.tech-grid` fade-in.
pub const MAIN_SEQUENCE_DELAY_MS: u32 = 200;

/// Ripple lifetime.
pub const RIPPLE_MS: u32 = 600;

/// Resize debounce for the `--vh` custom property.
pub const RESIZE_DEBOUNCE_MS: u32 = 100;

// ── Notifications ───────────────────────────────────────────────

pub const NOTIFICATION_ENTER_DELAY_MS: u32 = 100;
pub const NOTIFICATION_VISIBLE_MS: u32 = 3000;
pub const NOTIFICATION_ERROR_VISIBLE_MS: u32 = 4000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;

// ── Persistence ─────────────────────────────────────────────────

pub const THEME_KEY: &str = "theme";
pub const LANGUAGE_KEY: &str = "language";

/// Language used when neither a saved value nor the browser provides one.
pub const FALLBACK_LANGUAGE: &str = "zh";

// ── DOM hooks ───────────────────────────────────────────────────

pub const LOADING_OVERLAY_ID: &str = "loadingOverlay";
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const NAV_MENU_ID: &str = "navMenu";
pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const CONFIG_SCRIPT_ID: &str = "folio-config";

pub const NAVBAR_SELECTOR: &str = ".modern-navbar";
pub const FOOTER_SELECTOR: &str = ".footer";
pub const PROJECTS_CONTAINER_SELECTOR: &str = "#projects-container";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const PARALLAX_SELECTOR: &str = ".parallax, [data-parallax]";
pub const THEME_TOGGLE_SELECTOR: &str = "#themeToggleBtn, .theme-toggle-btn";

/// Event dispatched on `document` once startup completes.
pub const INITIALIZED_EVENT: &str = "app:initialized";
