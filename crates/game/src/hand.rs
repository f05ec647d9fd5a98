use bevy::prelude::*;
use rand::Rng;

use crate::piece::Piece;

/// Fixed-capacity set of pieces the player may place. Slots empty out as
/// pieces are played and are restocked all at once by [`Hand::refill`].
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Hand {
    slots: Vec<Option<Piece>>,
}

impl Hand {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots currently holding a piece.
    pub fn available_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.available_count() == self.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.available_count() == 0
    }

    pub fn slots(&self) -> &[Option<Piece>] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Option<Piece>] {
        &mut self.slots
    }

    pub fn piece(&self, slot: usize) -> Option<&Piece> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Remove and return the piece in `slot`.
    pub fn take(&mut self, slot: usize) -> Option<Piece> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    /// Deal a fresh piece into every slot.
    pub fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for slot in &mut self.slots {
            *slot = Some(Piece::random(rng));
        }
    }
}
