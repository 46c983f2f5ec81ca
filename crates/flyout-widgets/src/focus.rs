//! Keyboard focus across a row of components.

/// Tracks which of `len` slots holds keyboard focus, if any.
///
/// Unlike a fixed-size group, the ring is sized at runtime (one slot per
/// configured menu) and may hold no focus at all, which is the state before
/// the user first presses Tab. An empty ring never holds focus.
#[derive(Debug, Clone, Default)]
pub struct FocusRing {
    len: usize,
    focused: Option<usize>,
}

impl FocusRing {
    /// A ring of `len` slots with nothing focused.
    pub fn new(len: usize) -> Self {
        Self { len, focused: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Focus `index`, clamped to the last slot.
    pub fn focus(&mut self, index: usize) {
        if self.len > 0 {
            self.focused = Some(index.min(self.len - 1));
        }
    }

    /// Advance, wrapping after the last slot. Starts at the first slot when
    /// nothing is focused.
    pub fn focus_next(&mut self) -> Option<usize> {
        if self.len > 0 {
            self.focused = Some(self.focused.map_or(0, |i| (i + 1) % self.len));
        }
        self.focused
    }

    /// Step back, wrapping before the first slot. Starts at the last slot
    /// when nothing is focused.
    pub fn focus_prev(&mut self) -> Option<usize> {
        if self.len > 0 {
            self.focused = Some(
                self.focused
                    .map_or(self.len - 1, |i| (i + self.len - 1) % self.len),
            );
        }
        self.focused
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focused == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unfocused() {
        let ring = FocusRing::new(3);
        assert_eq!(ring.focused(), None);
        assert!(!ring.is_focused(0));
    }

    #[test]
    fn next_starts_at_first_and_wraps() {
        let mut ring = FocusRing::new(3);
        assert_eq!(ring.focus_next(), Some(0));
        assert_eq!(ring.focus_next(), Some(1));
        assert_eq!(ring.focus_next(), Some(2));
        assert_eq!(ring.focus_next(), Some(0));
    }

    #[test]
    fn prev_starts_at_last_and_wraps() {
        let mut ring = FocusRing::new(3);
        assert_eq!(ring.focus_prev(), Some(2));
        ring.focus(0);
        assert_eq!(ring.focus_prev(), Some(2));
    }

    #[test]
    fn focus_clamps_and_blur_clears() {
        let mut ring = FocusRing::new(3);
        ring.focus(10);
        assert_eq!(ring.focused(), Some(2));
        ring.blur();
        assert_eq!(ring.focused(), None);
    }

    #[test]
    fn empty_ring_never_focuses() {
        let mut ring = FocusRing::new(0);
        assert!(ring.is_empty());
        assert_eq!(ring.focus_next(), None);
        assert_eq!(ring.focus_prev(), None);
        ring.focus(0);
        assert_eq!(ring.focused(), None);
    }
}
