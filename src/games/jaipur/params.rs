//! Jaipur parameters and their validation.
//!
//! Every numeric rule constant lives here. Parameters are built once through
//! [`JaipurParametersBuilder`], validated, and then only read: the forward
//! model never mutates them and tuning harnesses vary them from outside by
//! building new parameter sets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::goods::{GoodMap, GoodType};
use crate::core::ConfigError;

/// Upper bound on peeked cards; arrangements grow factorially.
pub const MAX_PEEK: i32 = 5;

/// When a take action ends the round on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundEndTrigger {
    /// The market could not be refilled to capacity because the draw pile
    /// ran out.
    #[default]
    DrawPileExhausted,
    /// Only a market left completely empty ends the round; otherwise the
    /// token threshold decides.
    MarketEmptied,
}

/// Who opens the next round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FirstPlayerRule {
    /// The lowest-ranked player of the previous round.
    #[default]
    RoundLoser,
    /// Seat after the previous round's first player.
    Alternate,
    /// Player 0 always starts.
    Fixed,
}

/// Raw, unvalidated parameters. Every setter is a builder method; `build`
/// validates.
///
/// Deserializing fills missing fields with the standard rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JaipurParametersBuilder {
    seed: u64,
    player_count: i32,
    deck: GoodMap<i32>,
    initial_camels_in_market: i32,
    market_capacity: i32,
    hand_size: i32,
    initial_market_fill: i32,
    hand_limit: i32,
    min_sell: GoodMap<i32>,
    good_tokens: GoodMap<Vec<i32>>,
    bonus_tokens: BTreeMap<u8, Vec<i32>>,
    camel_bonus: i32,
    good_tokens_empty_round_end: i32,
    rounds_to_win: i32,
    round_end_trigger: RoundEndTrigger,
    first_player_rule: FirstPlayerRule,
    reset_scores_each_round: bool,
    peek_enabled: bool,
    peek_count: i32,
}

impl Default for JaipurParametersBuilder {
    fn default() -> Self {
        let deck = GoodMap::from_fn(|good| match good {
            GoodType::Diamonds | GoodType::Gold | GoodType::Silver => 6,
            GoodType::Cloth | GoodType::Spice => 8,
            GoodType::Leather => 10,
            GoodType::Camel => 11,
        });
        let min_sell = GoodMap::from_fn(|good| match good {
            GoodType::Diamonds | GoodType::Gold | GoodType::Silver => 2,
            GoodType::Camel => 0,
            _ => 1,
        });
        let good_tokens = GoodMap::from_fn(|good| match good {
            GoodType::Diamonds => vec![5, 5, 5, 7, 7],
            GoodType::Gold => vec![5, 5, 5, 6, 6],
            GoodType::Silver => vec![5, 5, 5, 5, 5],
            GoodType::Cloth | GoodType::Spice => vec![1, 1, 2, 2, 3, 3, 5],
            GoodType::Leather => vec![1, 1, 1, 1, 1, 1, 2, 3, 4],
            GoodType::Camel => Vec::new(),
        });
        let bonus_tokens = BTreeMap::from([
            (3, vec![1, 1, 2, 2, 2, 3, 3]),
            (4, vec![4, 4, 5, 5, 6, 6]),
            (5, vec![8, 8, 9, 10, 10]),
        ]);

        Self {
            seed: 0,
            player_count: 2,
            deck,
            initial_camels_in_market: 3,
            market_capacity: 5,
            hand_size: 5,
            initial_market_fill: 2,
            hand_limit: 7,
            min_sell,
            good_tokens,
            bonus_tokens,
            camel_bonus: 5,
            good_tokens_empty_round_end: 3,
            rounds_to_win: 2,
            round_end_trigger: RoundEndTrigger::default(),
            first_player_rule: FirstPlayerRule::default(),
            reset_scores_each_round: false,
            peek_enabled: false,
            peek_count: 3,
        }
    }
}

impl JaipurParametersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn player_count(mut self, count: i32) -> Self {
        self.player_count = count;
        self
    }

    /// Manufactured cards of one good (camels included).
    pub fn deck_count(mut self, good: GoodType, count: i32) -> Self {
        self.deck[good] = count;
        self
    }

    pub fn initial_camels_in_market(mut self, count: i32) -> Self {
        self.initial_camels_in_market = count;
        self
    }

    pub fn market_capacity(mut self, capacity: i32) -> Self {
        self.market_capacity = capacity;
        self
    }

    pub fn hand_size(mut self, size: i32) -> Self {
        self.hand_size = size;
        self
    }

    pub fn initial_market_fill(mut self, count: i32) -> Self {
        self.initial_market_fill = count;
        self
    }

    pub fn hand_limit(mut self, limit: i32) -> Self {
        self.hand_limit = limit;
        self
    }

    pub fn min_sell(mut self, good: GoodType, count: i32) -> Self {
        self.min_sell[good] = count;
        self
    }

    /// Token values for one good, in the order they are claimed.
    pub fn good_tokens(mut self, good: GoodType, values: Vec<i32>) -> Self {
        self.good_tokens[good] = values;
        self
    }

    /// Bonus token values for sales of at least `size` cards.
    pub fn bonus_tokens(mut self, size: u8, values: Vec<i32>) -> Self {
        self.bonus_tokens.insert(size, values);
        self
    }

    pub fn camel_bonus(mut self, points: i32) -> Self {
        self.camel_bonus = points;
        self
    }

    pub fn good_tokens_empty_round_end(mut self, count: i32) -> Self {
        self.good_tokens_empty_round_end = count;
        self
    }

    pub fn rounds_to_win(mut self, rounds: i32) -> Self {
        self.rounds_to_win = rounds;
        self
    }

    pub fn round_end_trigger(mut self, trigger: RoundEndTrigger) -> Self {
        self.round_end_trigger = trigger;
        self
    }

    pub fn first_player_rule(mut self, rule: FirstPlayerRule) -> Self {
        self.first_player_rule = rule;
        self
    }

    pub fn reset_scores_each_round(mut self, reset: bool) -> Self {
        self.reset_scores_each_round = reset;
        self
    }

    /// Enable the peek-and-arrange variant, looking at `count` cards.
    pub fn peek(mut self, count: i32) -> Self {
        self.peek_enabled = true;
        self.peek_count = count;
        self
    }

    /// Validate and freeze.
    pub fn build(self) -> Result<JaipurParameters, ConfigError> {
        self.validate()?;
        Ok(JaipurParameters { raw: self })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        at_least("player_count", self.player_count, 2)?;
        at_most("player_count", self.player_count, "supported players", 255)?;
        for (good, &count) in self.deck.iter() {
            at_least(deck_field(good), count, 0)?;
            at_most(deck_field(good), count, "u8 range", CARD_COUNT_LIMIT)?;
        }
        let camels = self.deck[GoodType::Camel];

        at_least("initial_camels_in_market", self.initial_camels_in_market, 0)?;
        at_most("initial_camels_in_market", self.initial_camels_in_market, "camel count", camels)?;
        at_least("market_capacity", self.market_capacity, 1)?;
        at_most("market_capacity", self.market_capacity, "u8 range", CARD_COUNT_LIMIT)?;
        at_least("initial_market_fill", self.initial_market_fill, 0)?;
        at_most(
            "initial market cards",
            self.initial_camels_in_market + self.initial_market_fill,
            "market_capacity",
            self.market_capacity,
        )?;
        at_least(
            "initial market cards",
            self.initial_camels_in_market + self.initial_market_fill,
            1,
        )?;

        at_least("hand_size", self.hand_size, 0)?;
        at_least("hand_limit", self.hand_limit, 1)?;
        at_most("hand_limit", self.hand_limit, "u8 range", CARD_COUNT_LIMIT)?;
        at_most("hand_size", self.hand_size, "hand_limit", self.hand_limit)?;

        let available: i64 = self.deck.iter().map(|(_, &n)| i64::from(n)).sum::<i64>()
            - i64::from(self.initial_camels_in_market);
        let required = i64::from(self.player_count) * i64::from(self.hand_size)
            + i64::from(self.initial_market_fill);
        if available < required {
            return Err(ConfigError::DeckTooSmall { available, required });
        }

        let mut unsellable = 0i64;
        for good in GoodType::TRADE_GOODS {
            at_least(min_sell_field(good), self.min_sell[good], 1)?;
            at_most(min_sell_field(good), self.min_sell[good], "hand_limit", self.hand_limit)?;
            unsellable += i64::from(self.min_sell[good] - 1);
            if self.good_tokens[good].iter().any(|&v| v < 0) {
                return Err(ConfigError::TooSmall {
                    field: "good token value",
                    min: 0,
                    value: i64::from(self.good_tokens[good].iter().copied().min().unwrap_or(0)),
                });
            }
        }
        // A full hand must always hold a sellable stack.
        if i64::from(self.hand_limit) <= unsellable {
            return Err(ConfigError::HandLimitTooSmall {
                hand_limit: i64::from(self.hand_limit),
                unsellable,
            });
        }

        for (&size, values) in &self.bonus_tokens {
            at_least("bonus token size", i32::from(size), 1)?;
            if let Some(&v) = values.iter().find(|&&v| v < 0) {
                return Err(ConfigError::TooSmall {
                    field: "bonus token value",
                    min: 0,
                    value: i64::from(v),
                });
            }
        }

        at_least("camel_bonus", self.camel_bonus, 0)?;
        at_least("good_tokens_empty_round_end", self.good_tokens_empty_round_end, 1)?;
        at_most(
            "good_tokens_empty_round_end",
            self.good_tokens_empty_round_end,
            "number of trade goods",
            GoodType::TRADE_GOODS.len() as i32,
        )?;
        at_least("rounds_to_win", self.rounds_to_win, 1)?;
        if self.peek_enabled {
            at_least("peek_count", self.peek_count, 1)?;
            at_most("peek_count", self.peek_count, "largest peek", MAX_PEEK)?;
        }
        Ok(())
    }
}

/// Card counts travel in `u8` multisets, so no pile, market or hand may
/// hold more.
const CARD_COUNT_LIMIT: i32 = u8::MAX as i32;

fn at_least(field: &'static str, value: i32, min: i32) -> Result<(), ConfigError> {
    if value < min {
        return Err(ConfigError::TooSmall {
            field,
            min: i64::from(min),
            value: i64::from(value),
        });
    }
    Ok(())
}

fn at_most(
    field: &'static str,
    value: i32,
    limit_name: &'static str,
    limit: i32,
) -> Result<(), ConfigError> {
    if value > limit {
        return Err(ConfigError::ExceedsLimit {
            field,
            value: i64::from(value),
            limit_name,
            limit: i64::from(limit),
        });
    }
    Ok(())
}

fn deck_field(good: GoodType) -> &'static str {
    match good {
        GoodType::Diamonds => "deck.Diamonds",
        GoodType::Gold => "deck.Gold",
        GoodType::Silver => "deck.Silver",
        GoodType::Cloth => "deck.Cloth",
        GoodType::Spice => "deck.Spice",
        GoodType::Leather => "deck.Leather",
        GoodType::Camel => "deck.Camel",
    }
}

fn min_sell_field(good: GoodType) -> &'static str {
    match good {
        GoodType::Diamonds => "min_sell.Diamonds",
        GoodType::Gold => "min_sell.Gold",
        GoodType::Silver => "min_sell.Silver",
        GoodType::Cloth => "min_sell.Cloth",
        GoodType::Spice => "min_sell.Spice",
        GoodType::Leather => "min_sell.Leather",
        GoodType::Camel => "min_sell.Camel",
    }
}

/// Validated, immutable game parameters.
///
/// ```
/// use rust_jaipur::games::jaipur::{GoodType, JaipurParameters};
///
/// let params = JaipurParameters::builder().seed(7).camel_bonus(3).build().unwrap();
/// assert_eq!(params.camel_bonus(), 3);
/// assert_eq!(params.deck_count(GoodType::Leather), 10);
///
/// assert!(JaipurParameters::builder().hand_limit(2).build().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "JaipurParametersBuilder", try_from = "JaipurParametersBuilder")]
pub struct JaipurParameters {
    raw: JaipurParametersBuilder,
}

impl Default for JaipurParameters {
    fn default() -> Self {
        Self {
            raw: JaipurParametersBuilder::default(),
        }
    }
}

impl TryFrom<JaipurParametersBuilder> for JaipurParameters {
    type Error = ConfigError;

    fn try_from(raw: JaipurParametersBuilder) -> Result<Self, Self::Error> {
        raw.build()
    }
}

impl From<JaipurParameters> for JaipurParametersBuilder {
    fn from(params: JaipurParameters) -> Self {
        params.raw
    }
}

impl JaipurParameters {
    /// Standard rules with the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            raw: JaipurParametersBuilder::default().seed(seed),
        }
    }

    pub fn builder() -> JaipurParametersBuilder {
        JaipurParametersBuilder::default()
    }

    /// Start a builder from these parameters, e.g. to vary one field.
    pub fn to_builder(&self) -> JaipurParametersBuilder {
        self.raw.clone()
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.raw.seed
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.raw.player_count as usize
    }

    /// Manufactured cards of `good`, camels included.
    #[must_use]
    pub fn deck_count(&self, good: GoodType) -> i32 {
        self.raw.deck[good]
    }

    #[must_use]
    pub fn initial_camels_in_market(&self) -> i32 {
        self.raw.initial_camels_in_market
    }

    #[must_use]
    pub fn market_capacity(&self) -> i32 {
        self.raw.market_capacity
    }

    #[must_use]
    pub fn hand_size(&self) -> i32 {
        self.raw.hand_size
    }

    #[must_use]
    pub fn initial_market_fill(&self) -> i32 {
        self.raw.initial_market_fill
    }

    #[must_use]
    pub fn hand_limit(&self) -> i32 {
        self.raw.hand_limit
    }

    #[must_use]
    pub fn min_sell(&self, good: GoodType) -> i32 {
        self.raw.min_sell[good]
    }

    #[must_use]
    pub fn good_tokens(&self, good: GoodType) -> &[i32] {
        &self.raw.good_tokens[good]
    }

    /// Bonus token tables keyed by minimum sale size, ascending.
    #[must_use]
    pub fn bonus_tokens(&self) -> &BTreeMap<u8, Vec<i32>> {
        &self.raw.bonus_tokens
    }

    /// The bonus table a sale of `count` cards draws from: the largest size
    /// not exceeding `count`.
    #[must_use]
    pub fn bonus_size_for(&self, count: u8) -> Option<u8> {
        self.raw.bonus_tokens.range(..=count).next_back().map(|(&size, _)| size)
    }

    #[must_use]
    pub fn camel_bonus(&self) -> i32 {
        self.raw.camel_bonus
    }

    #[must_use]
    pub fn good_tokens_empty_round_end(&self) -> i32 {
        self.raw.good_tokens_empty_round_end
    }

    #[must_use]
    pub fn rounds_to_win(&self) -> u32 {
        self.raw.rounds_to_win as u32
    }

    #[must_use]
    pub fn round_end_trigger(&self) -> RoundEndTrigger {
        self.raw.round_end_trigger
    }

    #[must_use]
    pub fn first_player_rule(&self) -> FirstPlayerRule {
        self.raw.first_player_rule
    }

    #[must_use]
    pub fn reset_scores_each_round(&self) -> bool {
        self.raw.reset_scores_each_round
    }

    /// Cards revealed by a peek, `None` when the variant is off.
    #[must_use]
    pub fn peek_count(&self) -> Option<u8> {
        self.raw.peek_enabled.then_some(self.raw.peek_count as u8)
    }
}
