//! The dealing source: a shuffled shoe with a cursor.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DealError;

/// An ordered sequence of cards dealt front to back.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shoe {
    cards: Vec<Card>,
    cursor: usize,
}

impl Shoe {
    /// Creates and shuffles a shoe with the specified number of decks.
    #[must_use]
    pub fn shuffled(decks: u8, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(&mut rng);
        Self { cards, cursor: 0 }
    }

    /// Creates a shoe that deals `cards` in the given order.
    #[must_use]
    pub const fn stacked(cards: Vec<Card>) -> Self {
        Self { cards, cursor: 0 }
    }

    /// Deals the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DeckExhausted`] when no cards remain.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        let card = *self
            .cards
            .get(self.cursor)
            .ok_or(DealError::DeckExhausted)?;
        self.cursor += 1;
        Ok(card)
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.cursor)
    }

    /// Fails unless at least `needed` cards remain.
    pub(crate) const fn ensure(&self, needed: usize) -> Result<(), DealError> {
        if self.remaining() < needed {
            return Err(DealError::DeckExhausted);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffled_shoe_holds_every_card_of_every_deck() {
        let mut shoe = Shoe::shuffled(2, 9);
        assert_eq!(shoe.remaining(), 2 * DECK_SIZE);

        let mut dealt = Vec::new();
        while let Ok(card) = shoe.deal() {
            dealt.push(card);
        }
        assert_eq!(dealt.len(), 2 * DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                let copies = dealt.iter().filter(|c| **c == Card::new(suit, rank)).count();
                assert_eq!(copies, 2);
            }
        }
    }

    #[test]
    fn stacked_shoe_deals_in_order_then_runs_out() {
        let mut shoe = Shoe::stacked(alloc::vec![
            Card::new(Suit::Hearts, 4),
            Card::new(Suit::Clubs, 12),
        ]);
        assert_eq!(shoe.deal(), Ok(Card::new(Suit::Hearts, 4)));
        assert_eq!(shoe.remaining(), 1);
        assert!(shoe.ensure(2).is_err());
        assert_eq!(shoe.deal(), Ok(Card::new(Suit::Clubs, 12)));
        assert_eq!(shoe.deal(), Err(DealError::DeckExhausted));
        assert_eq!(shoe.remaining(), 0);
    }

    #[test]
    fn cursor_past_the_end_reads_as_empty() {
        let mut shoe = Shoe {
            cards: alloc::vec![Card::new(Suit::Spades, 1)],
            cursor: 3,
        };
        assert_eq!(shoe.remaining(), 0);
        assert_eq!(shoe.ensure(1), Err(DealError::DeckExhausted));
        assert_eq!(shoe.deal(), Err(DealError::DeckExhausted));
    }
}
