//! Table rule options.

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use croupier::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_blackjack_pays(1.2)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// Number of decks in a new game's shoe.
    pub decks: u8,
    /// Blackjack winnings ratio on top of the returned bet (typically 1.5).
    pub blackjack_pays: f64,
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Whether surrender is allowed.
    pub surrender: bool,
    /// Fraction of the bet returned on surrender.
    pub surrender_refund: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Rounding mode for surrender payouts.
    pub rounding_surrender: RoundingMode,
    /// Maximum number of participants that can join a game.
    pub playing_positions: u8,
    /// Maximum number of participants one player can hold at join time.
    pub seats_per_player: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            blackjack_pays: 1.5,
            stand_on_soft_17: true,
            surrender: true,
            surrender_refund: 0.5,
            rounding_blackjack: RoundingMode::Down,
            rounding_surrender: RoundingMode::Nearest,
            playing_positions: 7,
            seats_per_player: 1,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use croupier::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use croupier::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use croupier::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets whether surrender is allowed.
    ///
    /// # Example
    ///
    /// ```
    /// use croupier::GameOptions;
    ///
    /// let options = GameOptions::default().with_surrender(false);
    /// assert_eq!(options.surrender, false);
    /// ```
    #[must_use]
    pub const fn with_surrender(mut self, allowed: bool) -> Self {
        self.surrender = allowed;
        self
    }

    /// Sets the fraction of the bet returned on surrender.
    ///
    /// # Example
    ///
    /// ```
    /// use croupier::GameOptions;
    ///
    /// let options = GameOptions::default().with_surrender_refund(0.0);
    /// assert_eq!(options.surrender_refund, 0.0);
    /// ```
    #[must_use]
    pub const fn with_surrender_refund(mut self, fraction: f64) -> Self {
        self.surrender_refund = fraction;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use croupier::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the rounding mode for surrender payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use croupier::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_surrender(RoundingMode::Down);
    /// assert_eq!(options.rounding_surrender, RoundingMode::Down);
    /// ```
    #[must_use]
    pub const fn with_rounding_surrender(mut self, mode: RoundingMode) -> Self {
        self.rounding_surrender = mode;
        self
    }

    /// Sets the number of playing positions.
    ///
    /// # Example
    ///
    /// ```
    /// use croupier::GameOptions;
    ///
    /// let options = GameOptions::default().with_playing_positions(5);
    /// assert_eq!(options.playing_positions, 5);
    /// ```
    #[must_use]
    pub const fn with_playing_positions(mut self, positions: u8) -> Self {
        self.playing_positions = positions;
        self
    }

    /// Sets how many participants one player may hold when joining.
    ///
    /// # Example
    ///
    /// ```
    /// use croupier::GameOptions;
    ///
    /// let options = GameOptions::default().with_seats_per_player(2);
    /// assert_eq!(options.seats_per_player, 2);
    /// ```
    #[must_use]
    pub const fn with_seats_per_player(mut self, seats: u8) -> Self {
        self.seats_per_player = seats;
        self
    }
}
