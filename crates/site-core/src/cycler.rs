use rand::Rng;

/// Class changes for one tick, applied in field order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleStep {
    pub deactivate: Option<usize>,
    pub activate: Option<usize>,
}

/// Picks a random map point to highlight on every tick, avoiding an
/// immediate repeat when there is more than one point.
#[derive(Clone, Debug)]
pub struct MapCycler<R> {
    len: usize,
    active: Option<usize>,
    max_retries: u32,
    rng: R,
}

impl<R: Rng> MapCycler<R> {
    pub fn new(len: usize, max_retries: u32, rng: R) -> Self {
        Self {
            len,
            active: None,
            max_retries: max_retries.max(1),
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn tick(&mut self) -> CycleStep {
        let deactivate = self.active.take();
        if self.len == 0 {
            return CycleStep {
                deactivate,
                activate: None,
            };
        }
        let next = if self.len == 1 {
            0
        } else {
            let mut pick = self.rng.gen_range(0..self.len);
            let mut tries = 1;
            while Some(pick) == deactivate && tries < self.max_retries {
                pick = self.rng.gen_range(0..self.len);
                tries += 1;
            }
            pick
        };
        self.active = Some(next);
        CycleStep {
            deactivate,
            activate: Some(next),
        }
    }

    /// Forget the active point without touching the rng.
    pub fn clear(&mut self) -> CycleStep {
        CycleStep {
            deactivate: self.active.take(),
            activate: None,
        }
    }
}
