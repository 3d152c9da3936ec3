//! Discard cursor for the human seat.

use crate::types::Tile;

/// Position of the discard cursor within the human seat's hand.
///
/// The cursor is clamped against the hand length on every read, so a hand
/// that shrinks between frames never leaves it dangling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscardPicker {
    index: usize,
}

impl DiscardPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor position for a hand of `len` tiles, `None` for an empty hand.
    pub fn index(&self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.index.min(len - 1))
    }

    pub fn move_left(&mut self, len: usize) {
        if let Some(i) = self.index(len) {
            self.index = i.saturating_sub(1);
        }
    }

    pub fn move_right(&mut self, len: usize) {
        if let Some(i) = self.index(len) {
            self.index = (i + 1).min(len - 1);
        }
    }

    /// Put the cursor on the last tile, where a fresh draw sits.
    pub fn jump_to_drawn(&mut self, len: usize) {
        self.index = len.saturating_sub(1);
    }

    /// Tile under the cursor.
    pub fn selected<'a>(&self, hand: &'a [Tile]) -> Option<&'a Tile> {
        self.index(hand.len()).and_then(|i| hand.get(i))
    }
}
