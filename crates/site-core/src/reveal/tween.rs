use super::ease::Ease;
use super::ParseError;
use glam::Vec2;
use smallvec::SmallVec;
use std::str::FromStr;

/// Four-corner `clip-path: polygon(...)`, coordinates in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipPolygon(pub [Vec2; 4]);

impl ClipPolygon {
    /// Whole element visible.
    pub const FULL: ClipPolygon = ClipPolygon([
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 0.0),
        Vec2::new(100.0, 100.0),
        Vec2::new(0.0, 100.0),
    ]);

    /// Zero-height strip along the bottom edge.
    pub const COLLAPSED_BOTTOM: ClipPolygon = ClipPolygon([
        Vec2::new(0.0, 100.0),
        Vec2::new(100.0, 100.0),
        Vec2::new(100.0, 100.0),
        Vec2::new(0.0, 100.0),
    ]);

    pub fn lerp(&self, other: &ClipPolygon, k: f32) -> ClipPolygon {
        let mut out = self.0;
        for (p, q) in out.iter_mut().zip(other.0.iter()) {
            *p = p.lerp(*q, k);
        }
        ClipPolygon(out)
    }

    pub fn to_css(&self) -> String {
        let pts: Vec<String> = self
            .0
            .iter()
            .map(|p| format!("{:.2}% {:.2}%", p.x, p.y))
            .collect();
        format!("polygon({})", pts.join(", "))
    }
}

impl FromStr for ClipPolygon {
    type Err = ParseError;

    /// Accepts `polygon(x y, x y, x y, x y)` with unitless zero or `%` values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseError::ClipPath(s.to_string());
        let inner = s
            .trim()
            .strip_prefix("polygon(")
            .and_then(|r| r.strip_suffix(')'))
            .ok_or_else(bad)?;
        let mut pts = [Vec2::ZERO; 4];
        let mut count = 0;
        for pair in inner.split(',') {
            if count == 4 {
                return Err(bad());
            }
            let mut coords = pair.split_whitespace().map(percent);
            match (coords.next(), coords.next(), coords.next()) {
                (Some(Some(x)), Some(Some(y)), None) => pts[count] = Vec2::new(x, y),
                _ => return Err(bad()),
            }
            count += 1;
        }
        if count != 4 {
            return Err(bad());
        }
        Ok(ClipPolygon(pts))
    }
}

fn percent(token: &str) -> Option<f32> {
    let v: f32 = token.strip_suffix('%').unwrap_or(token).parse().ok()?;
    // Unitless values are only meaningful as zero.
    if !token.ends_with('%') && v != 0.0 {
        return None;
    }
    Some(v)
}

/// The animatable subset of an element's style. `None` fields are left alone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StyleState {
    pub opacity: Option<f32>,
    pub y: Option<f32>,
    pub scale: Option<f32>,
    pub clip: Option<ClipPolygon>,
}

impl StyleState {
    pub fn lerp(&self, to: &StyleState, k: f32) -> StyleState {
        fn mix(a: Option<f32>, b: Option<f32>, k: f32) -> Option<f32> {
            match (a, b) {
                (Some(a), Some(b)) => Some(a + (b - a) * k),
                (a, b) => b.or(a),
            }
        }
        StyleState {
            opacity: mix(self.opacity, to.opacity, k),
            y: mix(self.y, to.y, k),
            scale: mix(self.scale, to.scale, k),
            clip: match (&self.clip, &to.clip) {
                (Some(a), Some(b)) => Some(a.lerp(b, k)),
                (a, b) => (*b).or(*a),
            },
        }
    }

    /// CSS property writes for this state.
    pub fn css(&self) -> SmallVec<[(&'static str, String); 3]> {
        let mut out = SmallVec::new();
        if let Some(o) = self.opacity {
            out.push(("opacity", format!("{:.3}", o)));
        }
        if self.y.is_some() || self.scale.is_some() {
            out.push((
                "transform",
                format!(
                    "translate3d(0px, {:.2}px, 0px) scale({:.4})",
                    self.y.unwrap_or(0.0),
                    self.scale.unwrap_or(1.0)
                ),
            ));
        }
        if let Some(c) = &self.clip {
            out.push(("clip-path", c.to_css()));
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub from: StyleState,
    pub to: StyleState,
    pub duration: f32,
    pub ease: Ease,
}

impl Tween {
    /// Style at `t` seconds after the tween starts; clamps outside the range.
    pub fn sample(&self, t: f32) -> StyleState {
        let k = if self.duration <= 0.0 {
            if t >= 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            (t / self.duration).clamp(0.0, 1.0)
        };
        self.from.lerp(&self.to, self.ease.apply(k))
    }
}
