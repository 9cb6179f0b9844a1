//! Settlement: scoring each finished hand against the dealer and paying out.
//!
//! [`classify`] holds the payout policy on its own, so rule changes stay out
//! of the turn engine.

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{Game, GameId};
use crate::hand;
use crate::options::{GameOptions, RoundingMode};
use crate::participant::{Participant, PlayerStatus};
use crate::result::{Credit, HandOutcome, HandResult, RoundResult};
use crate::table::Accounts;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> u64 {
    match mode {
        RoundingMode::Up => amount.ceil() as u64,
        RoundingMode::Down => amount.floor() as u64,
        RoundingMode::Nearest => amount.round() as u64,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> u64 {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as u64,
        RoundingMode::Down => libm::floor(amount) as u64,
        RoundingMode::Nearest => libm::round(amount) as u64,
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "f64 has sufficient precision for monetary values"
)]
fn scaled(bet: u64, ratio: f64, mode: RoundingMode) -> u64 {
    round_amount(bet as f64 * ratio, mode)
}

/// Classifies a finished hand against the dealer's final hand.
///
/// Returns the outcome and the amount to return to the player, stake
/// included. Hands whose turn is not over yet have no outcome.
#[must_use]
pub fn classify(
    participant: &Participant,
    dealer: &[Card],
    options: &GameOptions,
) -> Option<(HandOutcome, u64)> {
    let bet = participant.bet();
    let cards = participant.cards();

    let settled = match participant.status() {
        PlayerStatus::PendingBet | PlayerStatus::WaitingForDeal | PlayerStatus::Playing => {
            return None;
        }
        // Stake was taken when the bet was placed.
        PlayerStatus::Bust => (HandOutcome::Loss, 0),
        PlayerStatus::Surrender => (
            HandOutcome::HalfLoss,
            scaled(bet, options.surrender_refund, options.rounding_surrender),
        ),
        PlayerStatus::Stand => {
            let player_blackjack = hand::is_blackjack(cards);
            let dealer_blackjack = hand::is_blackjack(dealer);
            let player_value = hand::value(cards);
            let dealer_value = hand::value(dealer);

            if player_blackjack && !dealer_blackjack {
                let winnings = scaled(bet, options.blackjack_pays, options.rounding_blackjack);
                (HandOutcome::BlackjackWin, bet + winnings)
            } else if player_blackjack {
                (HandOutcome::Push, bet)
            } else if hand::is_bust(dealer) || player_value > dealer_value {
                (HandOutcome::Win, bet * 2)
            } else if player_value == dealer_value {
                (HandOutcome::Push, bet)
            } else {
                (HandOutcome::Loss, 0)
            }
        }
    };
    Some(settled)
}

/// Scores every participant of a concluded game against the dealer.
///
/// Nothing is credited yet: each hand starts as [`Credit::Skipped`] until
/// [`pay`] runs.
pub(crate) fn tally(game: &Game) -> RoundResult {
    let dealer = game.dealer_cards();
    let mut hands = Vec::with_capacity(game.participants().len());

    for (index, participant) in game.participants().iter().enumerate() {
        let Some((outcome, payout)) = classify(participant, dealer, game.options()) else {
            log::warn!(
                "game {}: seat {} left unsettled in status {:?}",
                game.id(),
                index,
                participant.status()
            );
            continue;
        };

        hands.push(HandResult {
            index,
            player_id: participant.player_id().clone(),
            outcome,
            bet: participant.bet(),
            payout,
            player_value: hand::value(participant.cards()),
            credit: Credit::Skipped,
        });
    }

    RoundResult {
        hands,
        dealer_value: hand::value(dealer),
        dealer_bust: hand::is_bust(dealer),
        dealer_blackjack: hand::is_blackjack(dealer),
    }
}

/// Credits every non-zero payout of a tallied round.
///
/// A refused credit is recorded on that hand only; the other hands are still
/// paid.
pub(crate) fn pay<A: Accounts + ?Sized>(id: GameId, result: &mut RoundResult, accounts: &A) {
    for hand in result.hands.iter_mut().filter(|hand| hand.payout > 0) {
        hand.credit = match accounts.credit(&hand.player_id, hand.payout) {
            Ok(()) => Credit::Credited,
            Err(err) => {
                log::warn!(
                    "game {id}: crediting {} to {} failed: {err}",
                    hand.payout,
                    hand.player_id
                );
                Credit::Failed(err)
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;
    use crate::participant::PlayerId;

    fn hand(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&rank| Card::new(Suit::Diamonds, rank)).collect()
    }

    fn seat(ranks: &[u8], bet: u64, status: PlayerStatus) -> Participant {
        Participant::new(PlayerId::from("p"), "p").with_hand(&hand(ranks), bet, status)
    }

    fn outcome(ranks: &[u8], status: PlayerStatus, dealer: &[u8]) -> (HandOutcome, u64) {
        classify(&seat(ranks, 20, status), &hand(dealer), &GameOptions::default()).unwrap()
    }

    #[test]
    fn standing_hands_compare_against_dealer() {
        use PlayerStatus::Stand;
        assert_eq!(outcome(&[10, 9], Stand, &[10, 8]), (HandOutcome::Win, 40));
        assert_eq!(outcome(&[10, 7], Stand, &[10, 8]), (HandOutcome::Loss, 0));
        assert_eq!(outcome(&[10, 8], Stand, &[9, 9]), (HandOutcome::Push, 20));
        assert_eq!(outcome(&[10, 2], Stand, &[10, 6, 9]), (HandOutcome::Win, 40));
    }

    #[test]
    fn blackjack_pays_three_to_two_unless_dealer_matches() {
        use PlayerStatus::Stand;
        assert_eq!(outcome(&[1, 13], Stand, &[10, 9]), (HandOutcome::BlackjackWin, 50));
        assert_eq!(outcome(&[1, 13], Stand, &[1, 12]), (HandOutcome::Push, 20));
        // Three-card 21 against a dealer natural is an even tie.
        assert_eq!(outcome(&[7, 7, 7], Stand, &[1, 12]), (HandOutcome::Push, 20));
    }

    #[test]
    fn bust_and_surrender_ignore_dealer() {
        assert_eq!(
            outcome(&[10, 6, 9], PlayerStatus::Bust, &[10, 6, 8]),
            (HandOutcome::Loss, 0)
        );
        assert_eq!(
            outcome(&[10, 6], PlayerStatus::Surrender, &[10, 6, 8]),
            (HandOutcome::HalfLoss, 10)
        );
    }

    #[test]
    fn payout_rounding_follows_options() {
        let options = GameOptions::default()
            .with_rounding_blackjack(RoundingMode::Up)
            .with_rounding_surrender(RoundingMode::Down);
        let dealer = hand(&[10, 8]);

        let natural = seat(&[1, 11], 5, PlayerStatus::Stand);
        assert_eq!(
            classify(&natural, &dealer, &options),
            Some((HandOutcome::BlackjackWin, 13))
        );
        let surrendered = seat(&[10, 6], 5, PlayerStatus::Surrender);
        assert_eq!(
            classify(&surrendered, &dealer, &options),
            Some((HandOutcome::HalfLoss, 2))
        );
    }

    #[test]
    fn live_hands_are_not_classified() {
        let live = seat(&[10, 6], 20, PlayerStatus::Playing);
        assert_eq!(classify(&live, &hand(&[10, 8]), &GameOptions::default()), None);
    }
}
