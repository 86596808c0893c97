// Build-time contact settings; override with WAVILOG_CONTACT_NUMBER / WAVILOG_CONTACT_MESSAGE.
const DEFAULT_CONTACT_NUMBER: &str = "447577254566";
const DEFAULT_CONTACT_MESSAGE: &str = "Hey%20Wavilog%20I%20need%20Help!";

pub const PARTICLE_COUNT: usize = 120;
pub const PARTICLE_SPEED: f64 = 4.5;
pub const POINTER_DRIFT: f64 = 0.05;
/// Particles at or below this depth are recycled.
pub const NEAR_PLANE: f64 = 1.0;

pub const PARALLAX_DAMPING: f64 = 0.3;
pub const HERO_EXIT_THRESHOLD_PX: f64 = 50.0;

pub const SCROLL_DURATION_MS: f64 = 1400.0;
pub const WHEEL_MULTIPLIER: f64 = 1.1;

pub const CONSENT_PROMPT_DELAY_MS: u32 = 4_000;

/// Timers that drive the loader overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroTimings {
    /// Minimum time the loader stays up, even on instant loads.
    pub dwell_ms: u32,
    /// Stand-in for a load event that never arrives.
    pub safety_timeout_ms: u32,
    /// Length of the curtain exit animation.
    pub exit_ms: u32,
}

impl Default for IntroTimings {
    fn default() -> Self {
        Self {
            dwell_ms: 2_500,
            safety_timeout_ms: 5_000,
            exit_ms: 1_200,
        }
    }
}

pub fn contact_number() -> &'static str {
    option_env!("WAVILOG_CONTACT_NUMBER").unwrap_or(DEFAULT_CONTACT_NUMBER)
}

/// WhatsApp deep link with the pre-filled greeting.
pub fn contact_link() -> String {
    let message = option_env!("WAVILOG_CONTACT_MESSAGE").unwrap_or(DEFAULT_CONTACT_MESSAGE);
    format!("https://wa.me/{}?text={}", contact_number(), message)
}

/// Plain chat link without a pre-filled message.
pub fn support_link() -> String {
    format!("https://wa.me/{}", contact_number())
}
