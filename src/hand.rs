//! Hand scoring.
//!
//! Everything here is a pure function over a slice of cards. Aces count as 11
//! until the total would pass 21, then drop to 1 one at a time.

use crate::card::Card;

/// The best hand total. Anything above it is bust.
pub const BLACKJACK: u8 = 21;

const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card_value(card.rank));
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Calculates the value of a hand.
///
/// Face cards count 10. Aces are counted as 11 if possible without busting,
/// otherwise as 1.
#[must_use]
pub fn value(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether the hand is soft (contains an ace counted as 11).
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Returns whether the hand is over 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    value(cards) > BLACKJACK
}

/// Returns whether the hand is a natural: exactly two cards worth 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && value(cards) == BLACKJACK
}

/// Returns whether the hand is a pair of equal rank.
#[must_use]
pub fn is_pair(cards: &[Card]) -> bool {
    matches!(cards, [first, second] if first.rank == second.rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn cards(ranks: &[u8]) -> alloc::vec::Vec<Card> {
        ranks.iter().map(|&rank| Card::new(Suit::Spades, rank)).collect()
    }

    #[test]
    fn aces_drop_to_one_only_when_needed() {
        assert_eq!(value(&cards(&[1, 6])), 17);
        assert!(is_soft(&cards(&[1, 6])));
        assert_eq!(value(&cards(&[1, 6, 10])), 17);
        assert!(!is_soft(&cards(&[1, 6, 10])));
        assert_eq!(value(&cards(&[1, 1])), 12);
        assert_eq!(value(&cards(&[1, 1, 1, 1, 10])), 14);
    }

    #[test]
    fn bust_and_blackjack() {
        assert!(is_bust(&cards(&[10, 5, 8])));
        assert!(!is_bust(&cards(&[10, 1, 10])));
        assert!(is_blackjack(&cards(&[1, 13])));
        assert!(!is_blackjack(&cards(&[7, 7, 7])));
        assert!(!is_blackjack(&cards(&[10, 10])));
    }

    #[test]
    fn value_stays_within_card_bounds() {
        for ranks in [&[1_u8][..], &[1, 1, 1], &[13, 12, 11], &[2, 3, 1, 1, 9]] {
            let hand = cards(ranks);
            let total = value(&hand);
            assert!(usize::from(total) >= hand.len());
            assert!(usize::from(total) <= hand.len() * 11);
            assert_eq!(is_bust(&hand), total > 21);
        }
    }

    #[test]
    fn pairs_compare_rank_not_value() {
        assert!(is_pair(&[Card::new(Suit::Clubs, 13), Card::new(Suit::Hearts, 13)]));
        assert!(!is_pair(&[Card::new(Suit::Clubs, 13), Card::new(Suit::Hearts, 12)]));
        assert!(!is_pair(&cards(&[8, 8, 8])));
    }
}
