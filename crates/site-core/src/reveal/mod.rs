//! Scroll-triggered entrance animations.
//!
//! A [`Reveal`] pairs a [`ScrollTrigger`] with a [`Timeline`]. The web layer
//! measures the trigger element's layout box with [`Reveal::refresh`] (at
//! mount and on resize), calls [`Reveal::on_scroll`] with the scroll
//! position, advances playing timelines once per animation frame, and writes
//! the sampled styles onto the target elements.

pub mod ease;
pub mod timeline;
pub mod trigger;
pub mod tween;

pub use ease::Ease;
pub use timeline::{Direction, Timeline, Track};
pub use trigger::{Anchor, Offset, ScrollRange, ScrollTrigger, ToggleAction, ToggleActions, Zone};
pub use tween::{ClipPolygon, StyleState, Tween};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("unknown ease `{0}`")]
    Ease(String),
    #[error("bad trigger position `{0}`")]
    Anchor(String),
    #[error("bad toggle action `{0}`")]
    ToggleAction(String),
    #[error("bad clip-path `{0}`")]
    ClipPath(String),
}

// Authored presets
pub const FADE_UP_OFFSET_PX: f32 = 50.0;
pub const FADE_UP_DURATION: f32 = 1.0;
pub const FADE_UP_EASE: &str = "power3.out";
pub const FADE_UP_START: &str = "top 85%";

pub const MAP_POINTS_DURATION: f32 = 0.6;
pub const MAP_POINTS_STAGGER: f32 = 0.05;
pub const MAP_POINTS_EASE: &str = "back.out(1.7)";
pub const MAP_POINTS_START: &str = "top 90%";

pub const MASK_FROM_CLIP: &str = "polygon(0 100%, 100% 100%, 100% 100%, 0 100%)";
pub const MASK_TO_CLIP: &str = "polygon(0% 0%, 100% 0%, 100% 100%, 0% 100%)";
pub const MASK_FROM_SCALE: f32 = 1.15;
pub const MASK_DURATION: f32 = 0.9;
pub const MASK_EASE: &str = "power2.inOut";
pub const MASK_START: &str = "top 85%";
pub const MASK_END: &str = "bottom 80%";
pub const MASK_ACTIONS: &str = "play none none reverse";

#[derive(Clone, Debug, PartialEq)]
pub struct Reveal {
    pub name: &'static str,
    pub trigger: ScrollTrigger,
    pub timeline: Timeline,
}

impl Reveal {
    /// Generic `.reveal-up` entrance: slide up 50px while fading in, once.
    pub fn fade_up() -> Result<Self, ParseError> {
        let tween = Tween {
            from: StyleState {
                opacity: Some(0.0),
                y: Some(FADE_UP_OFFSET_PX),
                ..StyleState::default()
            },
            to: StyleState {
                opacity: Some(1.0),
                y: Some(0.0),
                ..StyleState::default()
            },
            duration: FADE_UP_DURATION,
            ease: FADE_UP_EASE.parse()?,
        };
        Ok(Self {
            name: "reveal-up",
            trigger: ScrollTrigger::parse(FADE_UP_START, None, None)?,
            timeline: Timeline::single(0, tween),
        })
    }

    /// Map markers pop in one after another.
    pub fn map_points(count: usize) -> Result<Self, ParseError> {
        let tween = Tween {
            from: StyleState {
                opacity: Some(0.0),
                scale: Some(0.0),
                ..StyleState::default()
            },
            to: StyleState {
                opacity: Some(1.0),
                scale: Some(1.0),
                ..StyleState::default()
            },
            duration: MAP_POINTS_DURATION,
            ease: MAP_POINTS_EASE.parse()?,
        };
        Ok(Self {
            name: "map-points",
            trigger: ScrollTrigger::parse(MAP_POINTS_START, None, None)?,
            timeline: Timeline::staggered(count, tween, MAP_POINTS_STAGGER),
        })
    }

    /// Large image wiped in from the bottom; reverses when scrolled back above.
    pub fn mask_image() -> Result<Self, ParseError> {
        let tween = Tween {
            from: StyleState {
                clip: Some(MASK_FROM_CLIP.parse()?),
                scale: Some(MASK_FROM_SCALE),
                ..StyleState::default()
            },
            to: StyleState {
                clip: Some(MASK_TO_CLIP.parse()?),
                scale: Some(1.0),
                ..StyleState::default()
            },
            duration: MASK_DURATION,
            ease: MASK_EASE.parse()?,
        };
        Ok(Self {
            name: "mask-reveal",
            trigger: ScrollTrigger::parse(MASK_START, Some(MASK_END), Some(MASK_ACTIONS))?,
            timeline: Timeline::single(0, tween),
        })
    }

    /// Re-measure the trigger from its untransformed layout box.
    pub fn refresh(&mut self, layout_top: f32, height: f32, viewport_height: f32) {
        let range = self.trigger.refresh(layout_top, height, viewport_height);
        log::debug!("[reveal] {} range {:?}", self.name, range);
    }

    /// Feed the scroll position; returns true if the timeline is now moving.
    pub fn on_scroll(&mut self, scroll_y: f32) -> bool {
        for action in self.trigger.update(scroll_y) {
            log::debug!("[reveal] {} {:?}", self.name, action);
            self.timeline.apply(action);
        }
        self.timeline.is_active()
    }

    pub fn advance(&mut self, dt: f32) -> bool {
        self.timeline.advance(dt);
        self.timeline.is_active()
    }
}
