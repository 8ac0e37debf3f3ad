//! Viewport-intersection triggers.
//!
//! A trigger compares a point on the element with a line across the viewport,
//! both written as `"<element> <viewport>"` (for example `top 85%`: the
//! element's top edge reaches 85% of the viewport height).
//!
//! Both anchors are turned into document scroll offsets by
//! [`ScrollTrigger::refresh`], from the element's untransformed layout box.
//! Updates only compare the scroll position with those cached offsets, so the
//! transforms a reveal writes onto its own trigger element never move the
//! trigger. Refresh again after anything that changes layout (resize).

use super::ParseError;
use smallvec::SmallVec;
use std::str::FromStr;

/// A position along an axis of length `size`: `fraction * size + px`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offset {
    pub fraction: f32,
    pub px: f32,
}

impl Offset {
    pub const fn fraction(f: f32) -> Self {
        Self { fraction: f, px: 0.0 }
    }

    #[inline]
    pub fn resolve(&self, size: f32) -> f32 {
        self.fraction * size + self.px
    }
}

impl FromStr for Offset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseError::Anchor(s.to_string());
        match s {
            "top" => Ok(Offset::fraction(0.0)),
            "center" => Ok(Offset::fraction(0.5)),
            "bottom" => Ok(Offset::fraction(1.0)),
            _ => {
                if let Some(pct) = s.strip_suffix('%') {
                    let v: f32 = pct.parse().map_err(|_| bad())?;
                    Ok(Offset::fraction(v / 100.0))
                } else if let Some(px) = s.strip_suffix("px") {
                    let v: f32 = px.parse().map_err(|_| bad())?;
                    Ok(Offset { fraction: 0.0, px: v })
                } else {
                    Err(bad())
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub element: Offset,
    pub viewport: Offset,
}

impl Anchor {
    /// Scroll offset at which the element point meets the viewport line.
    /// `layout_top` is the element's top in document coordinates.
    pub fn scroll_offset(&self, layout_top: f32, height: f32, viewport_height: f32) -> f32 {
        layout_top + self.element.resolve(height) - self.viewport.resolve(viewport_height)
    }
}

impl FromStr for Anchor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(el), Some(vp), None) => Ok(Anchor {
                element: el.parse()?,
                viewport: vp.parse()?,
            }),
            _ => Err(ParseError::Anchor(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl FromStr for ToggleAction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => ToggleAction::Play,
            "pause" => ToggleAction::Pause,
            "resume" => ToggleAction::Resume,
            "reverse" => ToggleAction::Reverse,
            "restart" => ToggleAction::Restart,
            "reset" => ToggleAction::Reset,
            "complete" => ToggleAction::Complete,
            "none" => ToggleAction::None,
            _ => return Err(ParseError::ToggleAction(s.to_string())),
        })
    }
}

/// Actions for onEnter, onLeave, onEnterBack and onLeaveBack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions {
    pub enter: ToggleAction,
    pub leave: ToggleAction,
    pub enter_back: ToggleAction,
    pub leave_back: ToggleAction,
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self {
            enter: ToggleAction::Play,
            leave: ToggleAction::None,
            enter_back: ToggleAction::None,
            leave_back: ToggleAction::None,
        }
    }
}

impl FromStr for ToggleActions {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: SmallVec<[&str; 4]> = s.split_whitespace().collect();
        if words.len() != 4 {
            return Err(ParseError::ToggleAction(s.to_string()));
        }
        Ok(ToggleActions {
            enter: words[0].parse()?,
            leave: words[1].parse()?,
            enter_back: words[2].parse()?,
            leave_back: words[3].parse()?,
        })
    }
}

/// Where the scroll position sits relative to the start/end anchors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Zone {
    Before,
    Active,
    After,
}

/// Scroll offsets where a trigger becomes active and where it is passed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    pub start: f32,
    pub end: f32,
}

impl ScrollRange {
    pub fn zone(&self, scroll_y: f32) -> Zone {
        if scroll_y < self.start {
            Zone::Before
        } else if scroll_y >= self.end {
            Zone::After
        } else {
            Zone::Active
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTrigger {
    pub start: Anchor,
    pub end: Anchor,
    pub actions: ToggleActions,
    range: Option<ScrollRange>,
    zone: Option<Zone>,
}

impl ScrollTrigger {
    /// Default end: the element's bottom leaves through the top of the viewport.
    pub const DEFAULT_END: Anchor = Anchor {
        element: Offset::fraction(1.0),
        viewport: Offset::fraction(0.0),
    };

    pub fn new(start: Anchor, end: Option<Anchor>, actions: ToggleActions) -> Self {
        Self {
            start,
            end: end.unwrap_or(Self::DEFAULT_END),
            actions,
            range: None,
            zone: None,
        }
    }

    /// Build from the string forms, e.g.
    /// `("top 85%", Some("bottom 80%"), Some("play none none reverse"))`.
    pub fn parse(
        start: &str,
        end: Option<&str>,
        actions: Option<&str>,
    ) -> Result<Self, ParseError> {
        let end: Option<Anchor> = end.map(str::parse).transpose()?;
        let actions: ToggleActions = actions.map(str::parse).transpose()?.unwrap_or_default();
        Ok(Self::new(start.parse()?, end, actions))
    }

    pub fn zone(&self) -> Option<Zone> {
        self.zone
    }

    /// Offsets from the last [`refresh`](Self::refresh), if any.
    pub fn range(&self) -> Option<ScrollRange> {
        self.range
    }

    /// Measure the start and end offsets from the element's layout box.
    /// Fires nothing; the next [`update`](Self::update) reports any crossing.
    pub fn refresh(&mut self, layout_top: f32, height: f32, viewport_height: f32) -> ScrollRange {
        let start = self.start.scroll_offset(layout_top, height, viewport_height);
        let end = self
            .end
            .scroll_offset(layout_top, height, viewport_height)
            .max(start);
        let range = ScrollRange { start, end };
        self.range = Some(range);
        range
    }

    /// Compare `scroll_y` with the cached offsets and return the actions to
    /// run, in order. Does nothing before the first refresh. The first update
    /// treats the previous zone as `Before`, so content already scrolled past
    /// at load still gets its enter action.
    pub fn update(&mut self, scroll_y: f32) -> SmallVec<[ToggleAction; 2]> {
        let Some(range) = self.range else {
            return SmallVec::new();
        };
        let next = range.zone(scroll_y);
        let prev = self.zone.replace(next).unwrap_or(Zone::Before);
        let a = &self.actions;
        let fired: SmallVec<[ToggleAction; 2]> = match (prev, next) {
            (Zone::Before, Zone::Active) => smallvec::smallvec![a.enter],
            (Zone::Before, Zone::After) => smallvec::smallvec![a.enter, a.leave],
            (Zone::Active, Zone::After) => smallvec::smallvec![a.leave],
            (Zone::After, Zone::Active) => smallvec::smallvec![a.enter_back],
            (Zone::After, Zone::Before) => smallvec::smallvec![a.enter_back, a.leave_back],
            (Zone::Active, Zone::Before) => smallvec::smallvec![a.leave_back],
            _ => SmallVec::new(),
        };
        fired
            .into_iter()
            .filter(|act| *act != ToggleAction::None)
            .collect()
    }
}
