// SPDX-License-Identifier: MPL-2.0
//! Circular slide deck backing the lightbox carousel.

/// Position inside a fixed-length, wrap-around sequence of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideDeck {
    len: usize,
    current: usize,
}

impl SlideDeck {
    /// Creates a deck of `len` slides showing `initial` first.
    ///
    /// An out-of-range `initial` falls back to the first slide.
    #[must_use]
    pub fn starting_at(initial: usize, len: usize) -> Self {
        let current = if initial < len { initial } else { 0 };
        Self { len, current }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Advances one slide, wrapping from the last slide to the first.
    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    /// Goes back one slide, wrapping from the first slide to the last.
    pub fn previous(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
        self.current
    }

    /// Jumps to `index`. Returns `false` and stays put when out of range.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.current = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_requested_slide() {
        assert_eq!(SlideDeck::starting_at(2, 5).current(), 2);
    }

    #[test]
    fn out_of_range_start_falls_back_to_first() {
        assert_eq!(SlideDeck::starting_at(7, 3).current(), 0);
    }

    #[test]
    fn next_wraps_to_first() {
        let mut deck = SlideDeck::starting_at(2, 3);
        assert_eq!(deck.next(), 0);
        assert_eq!(deck.next(), 1);
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut deck = SlideDeck::starting_at(0, 3);
        assert_eq!(deck.previous(), 2);
        assert_eq!(deck.previous(), 1);
    }

    #[test]
    fn single_slide_deck_stays_put() {
        let mut deck = SlideDeck::starting_at(0, 1);
        assert_eq!(deck.next(), 0);
        assert_eq!(deck.previous(), 0);
    }

    #[test]
    fn empty_deck_never_moves() {
        let mut deck = SlideDeck::default();
        assert!(deck.is_empty());
        assert_eq!(deck.next(), 0);
        assert_eq!(deck.previous(), 0);
        assert!(!deck.go_to(0));
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut deck = SlideDeck::starting_at(1, 3);
        assert!(deck.go_to(2));
        assert_eq!(deck.current(), 2);
        assert!(!deck.go_to(3));
        assert_eq!(deck.current(), 2);
    }
}
