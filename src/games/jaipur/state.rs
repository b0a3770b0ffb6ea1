//! Jaipur game state.
//!
//! One `JaipurGameState` holds everything: shared market and token stacks,
//! the hidden draw pile, per-player hands and herds, scores and the round
//! bookkeeping the forward model reads after every action.
//!
//! ## Copying
//!
//! `Clone` is a full deep copy. Collections that get cloned on every search
//! step (draw pile, token stacks) are `im` persistent structures, so a copy
//! is O(1) and later mutations on either side never leak into the other.
//! Use [`JaipurGameState::fork`] when the copy should also get its own
//! random stream.

use std::collections::BTreeMap;

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::goods::{GoodMap, GoodType};
use super::params::JaipurParameters;
use crate::components::{Counter, Deck, VisibilityMode};
use crate::core::{EngineError, GameRng, PlayerId, PlayerMap};
use crate::rules::PlayerResult;

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JaipurPhase {
    /// Containers exist but no round has been dealt.
    Setup,
    PlayerTurn,
    /// Transient: a round is being scored.
    RoundEnd,
    GameEnd,
}

/// An unresolved peek: `player` has seen the top `count` cards and must
/// choose their order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingPeek {
    pub player: PlayerId,
    pub count: u8,
}

/// Everything one player owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerArea {
    /// Non-camel goods; every entry is capped at the hand limit and the camel
    /// entry at 0.
    pub hand: GoodMap<Counter>,
    pub herd: Counter,
    pub score: Counter,
    pub rounds_won: Counter,
    /// Good tokens claimed this round.
    pub good_tokens_count: Counter,
    /// Bonus tokens claimed this round.
    pub bonus_tokens_count: Counter,
    pub result: PlayerResult,
}

impl PlayerArea {
    fn new(params: &JaipurParameters) -> Self {
        let hand_limit = params.hand_limit();
        Self {
            hand: GoodMap::from_fn(|good| {
                Counter::up_to(if good.is_camel() { 0 } else { hand_limit })
            }),
            herd: Counter::up_to(params.deck_count(GoodType::Camel)),
            score: Counter::up_to(i32::MAX),
            rounds_won: Counter::up_to(i32::MAX),
            good_tokens_count: Counter::up_to(i32::MAX),
            bonus_tokens_count: Counter::up_to(i32::MAX),
            result: PlayerResult::Undecided,
        }
    }

    /// Non-camel cards in hand.
    #[must_use]
    pub fn hand_total(&self) -> i32 {
        self.hand.iter().map(|(_, c)| c.value()).sum()
    }

    /// Cards of `good` this player holds; camels are read from the herd.
    #[must_use]
    pub fn holding(&self, good: GoodType) -> i32 {
        if good.is_camel() {
            self.herd.value()
        } else {
            self.hand[good].value()
        }
    }

    /// Ranking key at round end: score, then bonus tokens, then good tokens.
    fn rank_key(&self) -> (i32, i32, i32) {
        (
            self.score.value(),
            self.bonus_tokens_count.value(),
            self.good_tokens_count.value(),
        )
    }
}

/// Full Jaipur game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JaipurGameState {
    player_count: usize,

    // === Progression ===
    pub phase: JaipurPhase,
    /// 1-based once the first round is dealt.
    pub round: u32,
    /// Turns completed since the game began.
    pub turn: u32,
    pub current_player: PlayerId,
    /// Player who opened the current round.
    pub first_player: PlayerId,

    // === Cards ===
    pub market: GoodMap<Counter>,
    pub draw_pile: Deck<GoodType>,
    /// Sold cards, out of play until the next round.
    pub discard: GoodMap<i32>,
    pub players: PlayerMap<PlayerArea>,

    // === Tokens ===
    /// Per-good token stacks; the front is claimed next.
    pub good_tokens: GoodMap<Vector<i32>>,
    /// Shuffled bonus stacks keyed by minimum sale size.
    pub bonus_tokens: BTreeMap<u8, Vector<i32>>,
    /// Goods whose token stack ran out this round.
    pub good_tokens_fully_sold: Counter,

    // === Round bookkeeping ===
    /// Set by a take that could not refill the market.
    pub round_end_triggered: bool,
    /// Action chain waiting for its follow-up.
    pub pending: Option<PendingPeek>,

    pub rng: GameRng,
}

impl JaipurGameState {
    /// Empty containers sized for `params`. No cards are dealt; the forward
    /// model's setup does that.
    #[must_use]
    pub fn new(params: &JaipurParameters) -> Self {
        let player_count = params.player_count();
        let capacity = params.market_capacity();
        Self {
            player_count,
            phase: JaipurPhase::Setup,
            round: 0,
            turn: 0,
            current_player: PlayerId::new(0),
            first_player: PlayerId::new(0),
            market: GoodMap::from_fn(|_| Counter::up_to(capacity)),
            draw_pile: Deck::new("draw pile", player_count, VisibilityMode::HiddenToAll),
            discard: GoodMap::default(),
            players: PlayerMap::new(player_count, |_| PlayerArea::new(params)),
            good_tokens: GoodMap::default(),
            bonus_tokens: BTreeMap::new(),
            good_tokens_fully_sold: Counter::up_to(GoodType::TRADE_GOODS.len() as i32),
            round_end_triggered: false,
            pending: None,
            rng: GameRng::new(params.seed()),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count)
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerArea {
        &self.players[player]
    }

    /// Cards in the market, camels included.
    #[must_use]
    pub fn market_total(&self) -> i32 {
        self.market.iter().map(|(_, c)| c.value()).sum()
    }

    /// Every card of `good` currently in play or discarded. Equals the
    /// manufactured count at all times.
    #[must_use]
    pub fn card_total(&self, good: GoodType) -> i32 {
        let in_pile = self.draw_pile.iter().filter(|&&g| g == good).count() as i32;
        let held: i32 = self.players.iter().map(|(_, area)| area.holding(good)).sum();
        self.market[good].value() + held + in_pile + self.discard[good]
    }

    // === Outcome ===

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase == JaipurPhase::GameEnd
    }

    /// Players marked as winners.
    #[must_use]
    pub fn winners(&self) -> SmallVec<[PlayerId; 2]> {
        self.players
            .iter()
            .filter(|(_, area)| area.result == PlayerResult::Win)
            .map(|(p, _)| p)
            .collect()
    }

    /// 1-based rank of every player by score, ties broken by bonus tokens
    /// then good tokens. Fully tied players share a rank.
    #[must_use]
    pub fn ordinal_positions(&self) -> PlayerMap<usize> {
        PlayerMap::new(self.player_count, |p| {
            let key = self.players[p].rank_key();
            1 + self
                .players
                .iter()
                .filter(|(_, other)| other.rank_key() > key)
                .count()
        })
    }

    #[must_use]
    pub fn scores(&self) -> PlayerMap<i32> {
        self.players.map(|area| area.score.value())
    }

    #[must_use]
    pub fn herds(&self) -> PlayerMap<i32> {
        self.players.map(|area| area.herd.value())
    }

    // === Copying ===

    /// Deep copy with an independent random stream.
    ///
    /// Takes `&mut self` because forking the RNG advances the fork counter.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        let rng = self.rng.fork();
        Self { rng, ..self.clone() }
    }

    /// A forked copy in which everything `observer` cannot know is
    /// resampled: hidden draw-pile cards and opponents' hands are shuffled
    /// together and redealt, keeping every public count (hand sizes, herds,
    /// market, pile size) and every card `observer` has seen in place.
    #[must_use]
    pub fn determinize(&mut self, observer: PlayerId) -> Self {
        let mut copy = self.fork();
        let mut rng = copy.rng.fork();

        let mut goods: Vec<GoodType> = Vec::new();
        let mut camels = 0usize;
        for good in copy.draw_pile.hidden_items(observer) {
            if good.is_camel() {
                camels += 1;
            } else {
                goods.push(good);
            }
        }
        let mut opponents = Vec::new();
        for (p, area) in copy.players.iter_mut() {
            if p == observer {
                continue;
            }
            for (good, counter) in area.hand.iter_mut() {
                goods.extend(std::iter::repeat(good).take(counter.value() as usize));
                counter.set_value(0);
            }
            opponents.push(p);
        }

        // Hands never hold camels, so opponents are redealt from goods only.
        rng.shuffle(&mut goods);
        for &p in &opponents {
            let size = self.players[p].hand_total() as usize;
            for good in goods.drain(..size) {
                copy.players[p].hand[good].increment(1);
            }
        }
        goods.extend(std::iter::repeat(GoodType::Camel).take(camels));
        copy.draw_pile.refill_hidden(observer, goods);
        copy.draw_pile.redeterminize(observer, &mut rng);
        copy
    }

    /// Canonical byte encoding of the whole state (bincode).
    pub fn snapshot_bytes(&self) -> Result<Vec<u8>, EngineError> {
        bincode::serialize(self).map_err(|e| EngineError::Snapshot(e.to_string()))
    }
}
