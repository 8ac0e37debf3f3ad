//! Mount slot for the whole site.
//!
//! `init` finishes asynchronously, so `teardown` can arrive first. A slot that
//! has been torn down refuses later mounts and hands the value back to be
//! dropped.

#[derive(Debug, Default)]
pub enum Lifecycle<T> {
    #[default]
    Pending,
    Mounted(T),
    TornDown,
}

impl<T> Lifecycle<T> {
    /// Store a freshly mounted value, replacing any earlier one.
    /// Returns the value back if the slot was already torn down.
    pub fn mount(&mut self, value: T) -> Result<(), T> {
        match self {
            Lifecycle::TornDown => Err(value),
            _ => {
                *self = Lifecycle::Mounted(value);
                Ok(())
            }
        }
    }

    /// Mark the slot torn down and hand back whatever was mounted.
    pub fn teardown(&mut self) -> Option<T> {
        match std::mem::replace(self, Lifecycle::TornDown) {
            Lifecycle::Mounted(value) => Some(value),
            Lifecycle::Pending | Lifecycle::TornDown => None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self, Lifecycle::Mounted(_))
    }

    pub fn is_torn_down(&self) -> bool {
        matches!(self, Lifecycle::TornDown)
    }
}
