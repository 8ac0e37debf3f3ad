//! Header treatment that switches between two class presets on scroll.

use crate::config::NavbarConfig;

pub const SCROLLED_CLASSES: &[&str] =
    &["bg-brand-dark/95", "backdrop-blur-lg", "shadow-xl", "py-3"];
pub const TOP_CLASSES: &[&str] = &["py-6"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarPreset {
    Top,
    Scrolled,
}

impl NavbarPreset {
    pub fn for_scroll(scroll_y: f64, threshold_px: f64) -> Self {
        if scroll_y > threshold_px {
            NavbarPreset::Scrolled
        } else {
            NavbarPreset::Top
        }
    }

    pub fn classes_to_add(self) -> &'static [&'static str] {
        match self {
            NavbarPreset::Top => TOP_CLASSES,
            NavbarPreset::Scrolled => SCROLLED_CLASSES,
        }
    }

    pub fn classes_to_remove(self) -> &'static [&'static str] {
        match self {
            NavbarPreset::Top => SCROLLED_CLASSES,
            NavbarPreset::Scrolled => TOP_CLASSES,
        }
    }
}

#[derive(Clone, Debug)]
pub struct NavbarStore {
    threshold_px: f64,
    preset: Option<NavbarPreset>,
}

impl NavbarStore {
    pub fn new(cfg: &NavbarConfig) -> Self {
        Self {
            threshold_px: cfg.threshold_px,
            preset: None,
        }
    }

    pub fn preset(&self) -> Option<NavbarPreset> {
        self.preset
    }

    /// Feed a scroll position; returns the preset to render only when it changed.
    pub fn update(&mut self, scroll_y: f64) -> Option<NavbarPreset> {
        let next = NavbarPreset::for_scroll(scroll_y, self.threshold_px);
        if self.preset == Some(next) {
            return None;
        }
        log::debug!("[navbar] {:?} -> {:?} at y={}", self.preset, next, scroll_y);
        self.preset = Some(next);
        Some(next)
    }
}
