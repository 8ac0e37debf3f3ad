//! Business-card widget: pointer tilt, glare, shadow and the flip toggle.
//!
//! [`CardStore`] is the only place the flip/tilt state lives. The web layer
//! feeds it [`CardEvent`]s and writes whatever [`render`] returns, so the DOM
//! never carries state of its own.

use crate::config::TiltConfig;
use glam::Vec2;

/// Normalized pointer offset from the scene center, each axis in `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    /// Positive when the pointer is above center (card top leans back).
    pub rotate_x: f32,
    /// Positive when the pointer is right of center.
    pub rotate_y: f32,
    /// Pointer position as a percentage of the scene size.
    pub glare_pct: Vec2,
}

impl Tilt {
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.rotate_x.abs() + self.rotate_y.abs()
    }
}

/// Map a pointer position (relative to the scene's top-left) to a tilt.
pub fn tilt_from_pointer(pos: Vec2, size: Vec2) -> Tilt {
    if !(size.x > 0.0 && size.y > 0.0) || !pos.is_finite() {
        return Tilt {
            glare_pct: Vec2::splat(50.0),
            ..Tilt::default()
        };
    }
    let center = size * 0.5;
    let rotate_x = ((center.y - pos.y) / center.y).clamp(-1.0, 1.0);
    let rotate_y = ((pos.x - center.x) / center.x).clamp(-1.0, 1.0);
    let glare_pct = (pos / size * 100.0).clamp(Vec2::ZERO, Vec2::splat(100.0));
    Tilt {
        rotate_x,
        rotate_y,
        glare_pct,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardPose {
    /// No inline transform; the `is-flipped` class rule owns orientation.
    Cleared,
    /// Explicit flat transform after the pointer left the scene.
    Resting,
    Tilted(Tilt),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardEvent {
    PointerMove { pos: Vec2, size: Vec2 },
    PointerLeave,
    Flip,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardStore {
    flipped: bool,
    interacting: bool,
    pose: CardPose,
}

impl Default for CardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CardStore {
    pub fn new() -> Self {
        Self {
            flipped: false,
            interacting: false,
            pose: CardPose::Cleared,
        }
    }

    pub fn flipped(&self) -> bool {
        self.flipped
    }

    pub fn interacting(&self) -> bool {
        self.interacting
    }

    pub fn pose(&self) -> CardPose {
        self.pose
    }

    pub fn apply(&mut self, event: CardEvent) {
        match event {
            CardEvent::PointerMove { pos, size } => {
                let tilt = tilt_from_pointer(pos, size);
                self.interacting = true;
                self.pose = CardPose::Tilted(tilt);
            }
            CardEvent::PointerLeave => {
                self.interacting = false;
                self.pose = CardPose::Resting;
            }
            CardEvent::Flip => {
                self.interacting = false;
                self.flipped = !self.flipped;
                self.pose = CardPose::Cleared;
                log::debug!("[card] flipped={}", self.flipped);
            }
        }
    }

    /// Base Y rotation implied by the flip state.
    #[inline]
    pub fn base_rotation_deg(&self) -> f32 {
        if self.flipped {
            180.0
        } else {
            0.0
        }
    }
}

/// Every style and class write for one frame of the card widget.
///
/// Empty strings mean "clear the inline property".
#[derive(Clone, Debug, PartialEq)]
pub struct CardStyles {
    pub flipped: bool,
    pub interacting: bool,
    pub card_transform: String,
    /// Only a tilt moves the glare; `None` leaves the property alone.
    pub shine_background: Option<String>,
    pub shine_opacity: f32,
    pub shadow_opacity: f32,
    pub shadow_transform: String,
}

/// Rotation angles (degrees) the card is drawn at for a given state.
pub fn card_angles(store: &CardStore, cfg: &TiltConfig) -> (f32, f32) {
    let base = store.base_rotation_deg();
    match store.pose {
        CardPose::Tilted(t) => {
            // The back face would read mirrored without flipping the Y sign.
            let tilt_y = if store.flipped { -t.rotate_y } else { t.rotate_y };
            (t.rotate_x * cfg.max_tilt_deg, base + tilt_y * cfg.max_tilt_deg)
        }
        CardPose::Cleared | CardPose::Resting => (0.0, base),
    }
}

pub fn render(store: &CardStore, cfg: &TiltConfig) -> CardStyles {
    let (ax, ay) = card_angles(store, cfg);
    match store.pose {
        CardPose::Tilted(t) => CardStyles {
            flipped: store.flipped,
            interacting: store.interacting,
            card_transform: card_transform(cfg.perspective_px, ax, ay, cfg.lift_scale),
            shine_background: Some(format!(
                "radial-gradient(circle at {:.2}% {:.2}%, rgba(255,255,255,{}), transparent 50%)",
                t.glare_pct.x, t.glare_pct.y, cfg.glare_alpha
            )),
            shine_opacity: t.magnitude().min(cfg.glare_cap),
            shadow_opacity: cfg.shadow_opacity,
            shadow_transform: format!(
                "translate({:.2}px, {:.2}px) scale({})",
                t.rotate_y * -cfg.shadow_offset_px,
                t.rotate_x * cfg.shadow_offset_px,
                cfg.lift_scale
            ),
        },
        CardPose::Resting => CardStyles {
            flipped: store.flipped,
            interacting: store.interacting,
            card_transform: card_transform(cfg.perspective_px, ax, ay, 1.0),
            shine_background: None,
            shine_opacity: 0.0,
            shadow_opacity: 0.0,
            shadow_transform: "translate(0px, 0px) scale(1)".to_string(),
        },
        CardPose::Cleared => CardStyles {
            flipped: store.flipped,
            interacting: store.interacting,
            card_transform: String::new(),
            shine_background: None,
            shine_opacity: 0.0,
            shadow_opacity: 0.0,
            shadow_transform: String::new(),
        },
    }
}

fn card_transform(perspective: f32, rotate_x: f32, rotate_y: f32, scale: f32) -> String {
    format!(
        "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d({s}, {s}, {s})",
        perspective,
        rotate_x,
        rotate_y,
        s = scale
    )
}
