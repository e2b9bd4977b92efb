// Mount generations. Each mount opens a new generation and unmount closes
// it, so async setup that finishes late can tell whether the mount it
// belongs to is still the live one.

use std::cell::Cell;

#[derive(Debug, Default)]
pub struct Generations {
    current: Cell<u64>,
    live: Cell<bool>,
}

impl Generations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new generation, or `None` if one is already live.
    pub fn begin(&self) -> Option<u64> {
        if self.live.get() {
            return None;
        }
        let next = self.current.get() + 1;
        self.current.set(next);
        self.live.set(true);
        Some(next)
    }

    /// Close the live generation. Returns false if nothing was mounted.
    pub fn end(&self) -> bool {
        self.live.replace(false)
    }

    #[inline]
    pub fn is_live(&self, generation: u64) -> bool {
        self.live.get() && self.current.get() == generation
    }
}
