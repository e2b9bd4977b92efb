// Hover classification for the custom cursor.
//
// The tracker is generic over the identity of the interactive element so
// the web side can feed it `web_sys::Element`s resolved with `closest()` and
// tests can feed it plain integers.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverChange {
    Entered,
    Left,
}

#[derive(Clone, Debug)]
pub struct HoverTracker<K> {
    current: Option<K>,
}

impl<K> Default for HoverTracker<K> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<K: PartialEq> HoverTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        self.current.is_some()
    }

    /// `interactive` is the closest interactive ancestor of the event target.
    pub fn pointer_over(&mut self, interactive: Option<K>) -> Option<HoverChange> {
        let el = interactive?;
        if self.current.is_none() {
            self.current = Some(el);
            Some(HoverChange::Entered)
        } else {
            self.current = Some(el);
            None
        }
    }

    /// `from` is the closest interactive ancestor of the element being left,
    /// `to` the one of the element the pointer moves into (if any).
    pub fn pointer_out(&mut self, from: Option<K>, to: Option<K>) -> Option<HoverChange> {
        if from.is_none() || self.current.is_none() {
            return None;
        }
        match to {
            // Still over an interactive element (nested child, or an adjacent
            // control); keep the hover state and just follow it.
            Some(next) => {
                self.current = Some(next);
                None
            }
            None => {
                self.current = None;
                Some(HoverChange::Left)
            }
        }
    }
}
