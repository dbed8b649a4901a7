//! Deck module - shuffled symbol-pair deck for board construction
//!
//! Builds the multiset of symbols laid onto a fresh board: one pair per
//! distinct symbol, shuffled once, then drawn down to empty while tiles are
//! assigned in row-major order. Unlike a bag randomizer there is no refill;
//! the deck is sized exactly for one board.
//!
//! Also provides a simple LCG for deterministic games.

use crate::types::Symbol;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Finite deck of paired symbols.
#[derive(Debug, Clone)]
pub struct SymbolDeck {
    /// All cards, in draw order.
    cards: Vec<Symbol>,
    /// Index of the next card to draw
    index: usize,
}

impl SymbolDeck {
    /// Build a deck of `pairs` distinct symbols, two cards each, shuffled
    /// with the given seed.
    pub fn shuffled(pairs: u8, seed: u32) -> Self {
        let mut cards = Vec::with_capacity(pairs as usize * 2);
        for id in 0..pairs {
            cards.push(Symbol::new(id));
            cards.push(Symbol::new(id));
        }

        let mut rng = SimpleRng::new(seed);
        rng.shuffle(&mut cards);

        Self { cards, index: 0 }
    }

    /// Build a deck that deals the given cards in order, no shuffling.
    ///
    /// Used to script exact board layouts in tests.
    pub fn from_layout(cards: &[Symbol]) -> Self {
        Self {
            cards: cards.to_vec(),
            index: 0,
        }
    }

    /// Draw the next card. Returns `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Symbol> {
        let card = self.cards.get(self.index).copied();
        if card.is_some() {
            self.index += 1;
        }
        card
    }

    /// Number of cards not yet drawn.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        // Different seeds should eventually diverge
        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_rng_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_shuffled_deck_has_two_of_each() {
        let mut deck = SymbolDeck::shuffled(8, 42);
        let mut counts = [0u8; 8];

        while let Some(card) = deck.draw() {
            counts[card.id() as usize] += 1;
        }

        for (id, count) in counts.iter().enumerate() {
            assert_eq!(*count, 2, "symbol {} should appear exactly twice", id);
        }
    }

    #[test]
    fn test_shuffled_deck_is_deterministic() {
        let mut deck1 = SymbolDeck::shuffled(8, 7);
        let mut deck2 = SymbolDeck::shuffled(8, 7);

        for _ in 0..16 {
            assert_eq!(deck1.draw(), deck2.draw());
        }
    }

    #[test]
    fn test_deck_exhausts_to_none() {
        let mut deck = SymbolDeck::shuffled(2, 1);
        assert_eq!(deck.remaining(), 4);

        for _ in 0..4 {
            assert!(deck.draw().is_some());
        }
        assert_eq!(deck.remaining(), 0);
        assert_eq!(deck.draw(), None);
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn test_from_layout_preserves_order() {
        let layout = [Symbol::new(3), Symbol::new(1), Symbol::new(3), Symbol::new(1)];
        let mut deck = SymbolDeck::from_layout(&layout);

        assert_eq!(deck.draw(), Some(Symbol::new(3)));
        assert_eq!(deck.draw(), Some(Symbol::new(1)));
        assert_eq!(deck.draw(), Some(Symbol::new(3)));
        assert_eq!(deck.draw(), Some(Symbol::new(1)));
        assert_eq!(deck.draw(), None);
    }
}
