//! Tunables for every widget, with overrides read from `data-*` attributes.
//!
//! Defaults match the shipped page. The web frontend feeds attribute
//! name/value pairs through [`SiteConfig::apply_attribute`]; a rejected value
//! leaves the default in place.

use std::str::FromStr;
use thiserror::Error;

// Tilt
pub const MAX_TILT_DEG: f32 = 15.0;
pub const PERSPECTIVE_PX: f32 = 1000.0;
pub const LIFT_SCALE: f32 = 1.05;
pub const GLARE_CAP: f32 = 0.5;
pub const GLARE_ALPHA: f32 = 0.15;
pub const SHADOW_OFFSET_PX: f32 = 20.0;
pub const SHADOW_OPACITY: f32 = 0.6;

// Map points
pub const CYCLE_INTERVAL_MS: u32 = 2000;
pub const CYCLE_MAX_RETRIES: u32 = 10;
pub const CYCLE_INTERVAL_MIN_MS: u32 = 16;

// Navbar
pub const NAVBAR_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),
    #[error("`{attr}`: cannot parse `{value}`")]
    Unparsable { attr: &'static str, value: String },
    #[error("`{attr}`: {value} is outside {range}")]
    OutOfRange {
        attr: &'static str,
        value: f64,
        range: &'static str,
    },
}

/// How the tilt controller decides that the device has a hovering pointer.
///
/// The page variants disagree: some ask the `(hover: hover)` media query,
/// others treat "no touch support" as "has a mouse".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverPolicy {
    #[default]
    MediaQuery,
    TouchDetection,
    Always,
    Never,
}

impl HoverPolicy {
    /// Resolve the policy against the two capability probes.
    pub fn allows_tilt(self, hover_media_matches: bool, touch_capable: bool) -> bool {
        match self {
            HoverPolicy::MediaQuery => hover_media_matches,
            HoverPolicy::TouchDetection => !touch_capable,
            HoverPolicy::Always => true,
            HoverPolicy::Never => false,
        }
    }
}

impl FromStr for HoverPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hover" | "media" => Ok(HoverPolicy::MediaQuery),
            "touch" => Ok(HoverPolicy::TouchDetection),
            "always" => Ok(HoverPolicy::Always),
            "never" | "off" => Ok(HoverPolicy::Never),
            _ => Err(ConfigError::Unparsable {
                attr: "data-tilt-detect",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TiltConfig {
    pub max_tilt_deg: f32,
    pub perspective_px: f32,
    pub lift_scale: f32,
    pub glare_cap: f32,
    pub glare_alpha: f32,
    pub shadow_offset_px: f32,
    pub shadow_opacity: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_tilt_deg: MAX_TILT_DEG,
            perspective_px: PERSPECTIVE_PX,
            lift_scale: LIFT_SCALE,
            glare_cap: GLARE_CAP,
            glare_alpha: GLARE_ALPHA,
            shadow_offset_px: SHADOW_OFFSET_PX,
            shadow_opacity: SHADOW_OPACITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CyclerConfig {
    pub interval_ms: u32,
    pub max_retries: u32,
}

impl Default for CyclerConfig {
    fn default() -> Self {
        Self {
            interval_ms: CYCLE_INTERVAL_MS,
            max_retries: CYCLE_MAX_RETRIES,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavbarConfig {
    pub threshold_px: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            threshold_px: NAVBAR_THRESHOLD_PX,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub hover_policy: HoverPolicy,
    pub tilt: TiltConfig,
    pub force_reflow_on_flip: bool,
    pub cycler: CyclerConfig,
    pub navbar: NavbarConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hover_policy: HoverPolicy::default(),
            tilt: TiltConfig::default(),
            force_reflow_on_flip: true,
            cycler: CyclerConfig::default(),
            navbar: NavbarConfig::default(),
        }
    }
}

/// Attribute names understood by [`SiteConfig::apply_attribute`].
pub const CONFIG_ATTRIBUTES: [&str; 6] = [
    "data-tilt-detect",
    "data-tilt-max",
    "data-glare-cap",
    "data-flip-reflow",
    "data-cycle-ms",
    "data-navbar-threshold",
];

impl SiteConfig {
    /// Apply one `data-*` override. On error `self` is unchanged.
    pub fn apply_attribute(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        match name {
            "data-tilt-detect" => self.hover_policy = value.parse()?,
            "data-tilt-max" => {
                let v = parse_f64("data-tilt-max", value)?;
                check_range("data-tilt-max", v, v > 0.0 && v <= 90.0, "(0, 90]")?;
                self.tilt.max_tilt_deg = v as f32;
            }
            "data-glare-cap" => {
                let v = parse_f64("data-glare-cap", value)?;
                check_range("data-glare-cap", v, (0.0..=1.0).contains(&v), "[0, 1]")?;
                self.tilt.glare_cap = v as f32;
            }
            "data-flip-reflow" => {
                self.force_reflow_on_flip = match value.trim() {
                    "true" | "1" | "" => true,
                    "false" | "0" => false,
                    other => {
                        return Err(ConfigError::Unparsable {
                            attr: "data-flip-reflow",
                            value: other.to_string(),
                        })
                    }
                };
            }
            "data-cycle-ms" => {
                let v: u32 = value.trim().parse().map_err(|_| ConfigError::Unparsable {
                    attr: "data-cycle-ms",
                    value: value.to_string(),
                })?;
                check_range(
                    "data-cycle-ms",
                    v as f64,
                    v >= CYCLE_INTERVAL_MIN_MS,
                    ">= 16",
                )?;
                self.cycler.interval_ms = v;
            }
            "data-navbar-threshold" => {
                let v = parse_f64("data-navbar-threshold", value)?;
                check_range("data-navbar-threshold", v, v >= 0.0, ">= 0")?;
                self.navbar.threshold_px = v;
            }
            other => return Err(ConfigError::UnknownAttribute(other.to_string())),
        }
        Ok(())
    }

    /// Apply every pair, logging and skipping the ones that fail.
    pub fn apply_attributes<'a>(&mut self, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) {
        for (name, value) in pairs {
            match self.apply_attribute(name, value) {
                Ok(()) => log::debug!("[config] {}={}", name, value),
                Err(e) => log::warn!("[config] ignoring override: {}", e),
            }
        }
    }
}

fn parse_f64(attr: &'static str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::Unparsable {
            attr,
            value: value.to_string(),
        })
}

fn check_range(
    attr: &'static str,
    value: f64,
    ok: bool,
    range: &'static str,
) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { attr, value, range })
    }
}
