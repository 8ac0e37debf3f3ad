use super::trigger::ToggleAction;
use super::tween::{StyleState, Tween};

#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    /// Index into the caller's element list.
    pub target: usize,
    pub delay: f32,
    pub tween: Tween,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Tracks sharing one playhead, measured in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    tracks: Vec<Track>,
    duration: f32,
    time: f32,
    direction: Direction,
    playing: bool,
    dirty: bool,
}

impl Timeline {
    pub fn new(tracks: Vec<Track>) -> Self {
        let duration = tracks
            .iter()
            .map(|t| t.delay + t.tween.duration.max(0.0))
            .fold(0.0_f32, f32::max);
        Self {
            tracks,
            duration,
            time: 0.0,
            direction: Direction::Forward,
            playing: false,
            // From-states render as soon as the timeline exists.
            dirty: true,
        }
    }

    pub fn single(target: usize, tween: Tween) -> Self {
        Self::new(vec![Track {
            target,
            delay: 0.0,
            tween,
        }])
    }

    /// One copy of `tween` per target, each starting `stagger` seconds after the previous.
    pub fn staggered(targets: usize, tween: Tween, stagger: f32) -> Self {
        let tracks = (0..targets)
            .map(|i| Track {
                target: i,
                delay: stagger.max(0.0) * i as f32,
                tween: tween.clone(),
            })
            .collect();
        Self::new(tracks)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            if self.time > 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            self.time / self.duration
        }
    }

    /// Still moving towards the end it is heading for.
    pub fn is_active(&self) -> bool {
        self.playing
    }

    pub fn apply(&mut self, action: ToggleAction) {
        match action {
            ToggleAction::Play => self.start(Direction::Forward),
            ToggleAction::Reverse => self.start(Direction::Reverse),
            ToggleAction::Resume => self.start(self.direction),
            ToggleAction::Pause => self.playing = false,
            ToggleAction::Restart => {
                self.seek(0.0);
                self.start(Direction::Forward);
            }
            ToggleAction::Reset => {
                self.seek(0.0);
                self.direction = Direction::Forward;
                self.playing = false;
            }
            ToggleAction::Complete => {
                self.seek(self.duration);
                self.playing = false;
            }
            ToggleAction::None => {}
        }
    }

    fn start(&mut self, direction: Direction) {
        self.direction = direction;
        let at_end = match direction {
            Direction::Forward => self.time >= self.duration,
            Direction::Reverse => self.time <= 0.0,
        };
        self.playing = !at_end;
    }

    pub fn seek(&mut self, time: f32) {
        self.time = time.clamp(0.0, self.duration);
        self.dirty = true;
    }

    /// Move the playhead by `dt` seconds in the current direction.
    pub fn advance(&mut self, dt: f32) {
        if !self.playing || dt <= 0.0 {
            return;
        }
        let step = match self.direction {
            Direction::Forward => dt,
            Direction::Reverse => -dt,
        };
        self.seek(self.time + step);
        let parked = match self.direction {
            Direction::Forward => self.time >= self.duration,
            Direction::Reverse => self.time <= 0.0,
        };
        if parked {
            self.playing = false;
        }
    }

    /// Whether styles changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Current style of every track.
    pub fn sample(&self) -> impl Iterator<Item = (usize, StyleState)> + '_ {
        self.tracks
            .iter()
            .map(|t| (t.target, t.tween.sample(self.time - t.delay)))
    }
}
