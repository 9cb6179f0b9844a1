use crate::error::DealError;
use crate::hand;

use super::{Game, Phase};

impl Game {
    /// Dealer plays their hand according to the rules, then the round is over.
    ///
    /// The dealer draws until reaching 17 or higher. If `stand_on_soft_17` is
    /// false, the dealer also draws on soft 17. This runs once per round even
    /// when every hand already busted or surrendered.
    pub(super) fn conclude(&mut self) -> Result<(), DealError> {
        loop {
            let value = hand::value(&self.dealer);
            if value > 17 {
                break;
            }
            if value == 17 && (!hand::is_soft(&self.dealer) || self.options.stand_on_soft_17) {
                break;
            }

            let card = self.shoe.deal()?;
            log::debug!("game {}: dealer draws {:?}", self.id, card);
            self.dealer.push(card);
        }

        self.phase = Phase::Concluded;
        log::info!(
            "game {}: round concluded, dealer has {}",
            self.id,
            hand::value(&self.dealer)
        );
        Ok(())
    }
}
