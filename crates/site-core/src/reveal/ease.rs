use super::ParseError;
use std::str::FromStr;

pub const BACK_OVERSHOOT: f32 = 1.70158;

/// Easing curves, named the way the page's animation presets name them
/// (`power3.out`, `back.out(1.7)`, ...).
///
/// `powerN` is a polynomial of degree `N + 1`; `power0` is linear.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    PowerIn(u8),
    PowerOut(u8),
    PowerInOut(u8),
    BackOut(f32),
}

impl Ease {
    /// Map linear progress in `[0, 1]` to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Ease::Linear => t,
            Ease::PowerIn(n) => t.powi(n as i32 + 1),
            Ease::PowerOut(n) => 1.0 - (1.0 - t).powi(n as i32 + 1),
            Ease::PowerInOut(n) => {
                let p = n as i32 + 1;
                if t < 0.5 {
                    (2.0 * t).powi(p) / 2.0
                } else {
                    1.0 - (2.0 * (1.0 - t)).powi(p) / 2.0
                }
            }
            Ease::BackOut(s) => {
                let u = t - 1.0;
                u * u * ((s + 1.0) * u + s) + 1.0
            }
        }
    }
}

impl FromStr for Ease {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let bad = || ParseError::Ease(name.to_string());
        if name == "none" || name == "linear" {
            return Ok(Ease::Linear);
        }
        if let Some(rest) = name.strip_prefix("back.out") {
            if rest.is_empty() {
                return Ok(Ease::BackOut(BACK_OVERSHOOT));
            }
            let arg = rest
                .strip_prefix('(')
                .and_then(|r| r.strip_suffix(')'))
                .ok_or_else(bad)?;
            let s: f32 = arg.trim().parse().map_err(|_| bad())?;
            return Ok(Ease::BackOut(s));
        }
        if let Some(rest) = name.strip_prefix("power") {
            let (degree, kind) = rest.split_once('.').unwrap_or((rest, "out"));
            let n: u8 = degree.parse().map_err(|_| bad())?;
            if n > 4 {
                return Err(bad());
            }
            if n == 0 {
                return Ok(Ease::Linear);
            }
            return match kind {
                "in" => Ok(Ease::PowerIn(n)),
                "out" => Ok(Ease::PowerOut(n)),
                "inOut" => Ok(Ease::PowerInOut(n)),
                _ => Err(bad()),
            };
        }
        Err(bad())
    }
}
