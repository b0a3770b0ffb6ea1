//! Jaipur actions.
//!
//! Each variant carries only what is needed to replay it. `execute`
//! re-checks every precondition against the state it runs on, so an action
//! built for one state and applied to another fails cleanly instead of
//! corrupting counters.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::goods::{GoodCounts, GoodType};
use super::params::{JaipurParameters, RoundEndTrigger};
use super::state::{JaipurGameState, PendingPeek};
use crate::core::{EngineError, PlayerId};
use crate::rules::TurnStatus;

/// Ordering chosen for peeked cards, top first.
pub type PeekOrder = SmallVec<[GoodType; 4]>;

/// A Jaipur move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JaipurAction {
    /// Sell `count` cards of one good from the current player's hand.
    SellCards { good: GoodType, count: u8 },

    /// Take cards from the market.
    ///
    /// Without `give` this is either "take every camel" or "take one good".
    /// With `give` it is a trade of equal-sized multisets with no good in
    /// common; camels can be given but never taken in a trade.
    TakeCards {
        player: PlayerId,
        take: GoodCounts,
        give: Option<GoodCounts>,
    },

    /// Look at the top `count` cards of the draw pile. Starts a chain that
    /// [`JaipurAction::ArrangePeeked`] completes.
    PeekDrawPile { player: PlayerId, count: u8 },

    /// Put the peeked cards back in `order`.
    ArrangePeeked { player: PlayerId, order: PeekOrder },
}

impl JaipurAction {
    /// Take every camel in the market.
    #[must_use]
    pub fn take_camels(player: PlayerId, camels: u8) -> Self {
        JaipurAction::TakeCards {
            player,
            take: GoodCounts::of(&[(GoodType::Camel, camels)]),
            give: None,
        }
    }

    /// Take a single good.
    #[must_use]
    pub fn take_one(player: PlayerId, good: GoodType) -> Self {
        JaipurAction::TakeCards {
            player,
            take: GoodCounts::of(&[(good, 1)]),
            give: None,
        }
    }

    /// Exchange `give` for `take`.
    #[must_use]
    pub fn trade(player: PlayerId, take: GoodCounts, give: GoodCounts) -> Self {
        JaipurAction::TakeCards {
            player,
            take,
            give: Some(give),
        }
    }

    /// The player performing this action. Sales are always made by the
    /// player to move.
    #[must_use]
    pub fn actor(&self, state: &JaipurGameState) -> PlayerId {
        match self {
            JaipurAction::SellCards { .. } => state.current_player,
            JaipurAction::TakeCards { player, .. }
            | JaipurAction::PeekDrawPile { player, .. }
            | JaipurAction::ArrangePeeked { player, .. } => *player,
        }
    }

    /// Whether this action continues a pending chain.
    #[must_use]
    pub fn is_chain_follow_up(&self) -> bool {
        matches!(self, JaipurAction::ArrangePeeked { .. })
    }

    /// Check every precondition without touching the state.
    pub fn validate(
        &self,
        state: &JaipurGameState,
        params: &JaipurParameters,
    ) -> Result<(), EngineError> {
        match (self, state.pending) {
            (JaipurAction::ArrangePeeked { .. }, None) => {
                return Err(EngineError::NoActionInProgress)
            }
            (JaipurAction::ArrangePeeked { .. }, Some(_)) => {}
            (_, Some(_)) => return Err(EngineError::ActionInProgress),
            (_, None) => {}
        }

        match self {
            JaipurAction::SellCards { good, count } => {
                self.validate_sell(state, params, *good, *count)
            }
            JaipurAction::TakeCards { player, take, give } => match give {
                None => self.validate_take(state, params, *player, take),
                Some(give) => self.validate_trade(state, params, *player, take, give),
            },
            JaipurAction::PeekDrawPile { count, .. } => {
                if params.peek_count() != Some(*count) {
                    return Err(EngineError::illegal(
                        self,
                        "peeking is disabled or the count differs",
                    ));
                }
                if state.draw_pile.is_empty() {
                    return Err(EngineError::illegal(self, "draw pile is empty"));
                }
                Ok(())
            }
            JaipurAction::ArrangePeeked { player, order } => {
                let pending = state.pending.ok_or(EngineError::NoActionInProgress)?;
                if pending.player != *player {
                    return Err(EngineError::illegal(
                        self,
                        format!("{} peeked, not {}", pending.player, player),
                    ));
                }
                let mut seen: SmallVec<[GoodType; 4]> =
                    state.draw_pile.peek(usize::from(pending.count));
                let mut chosen = order.clone();
                seen.sort_unstable();
                chosen.sort_unstable();
                if seen != chosen {
                    return Err(EngineError::illegal(
                        self,
                        "order is not a permutation of the peeked cards",
                    ));
                }
                Ok(())
            }
        }
    }

    fn validate_sell(
        &self,
        state: &JaipurGameState,
        params: &JaipurParameters,
        good: GoodType,
        count: u8,
    ) -> Result<(), EngineError> {
        if good.is_camel() {
            return Err(EngineError::illegal(self, "camels cannot be sold"));
        }
        let n = i32::from(count);
        let min = params.min_sell(good);
        if n < min {
            return Err(EngineError::illegal(self, format!("must sell at least {}", min)));
        }
        let held = state.players[state.current_player].hand[good].value();
        if held < n {
            return Err(EngineError::illegal(self, format!("only {} in hand", held)));
        }
        Ok(())
    }

    fn validate_take(
        &self,
        state: &JaipurGameState,
        params: &JaipurParameters,
        player: PlayerId,
        take: &GoodCounts,
    ) -> Result<(), EngineError> {
        let camels = take[GoodType::Camel];
        if camels > 0 {
            let in_market = state.market[GoodType::Camel].value();
            if take.total() != u32::from(camels) || i32::from(camels) != in_market {
                return Err(EngineError::illegal(
                    self,
                    format!("must take exactly the {} market camels", in_market),
                ));
            }
            return Ok(());
        }

        let mut goods = take.goods();
        let (good, n) = match (goods.next(), goods.next()) {
            (Some(single), None) => single,
            _ => return Err(EngineError::illegal(self, "a plain take is one good or all camels")),
        };
        if n != 1 {
            return Err(EngineError::illegal(self, "a plain take is one good or all camels"));
        }
        if state.market[good].value() < 1 {
            return Err(EngineError::illegal(self, format!("no {} in the market", good)));
        }
        if state.players[player].hand_total() >= params.hand_limit() {
            return Err(EngineError::illegal(self, "hand is full"));
        }
        Ok(())
    }

    fn validate_trade(
        &self,
        state: &JaipurGameState,
        params: &JaipurParameters,
        player: PlayerId,
        take: &GoodCounts,
        give: &GoodCounts,
    ) -> Result<(), EngineError> {
        if take[GoodType::Camel] > 0 {
            return Err(EngineError::illegal(self, "camels cannot be taken in a trade"));
        }
        if take.total() < 2 || take.total() != give.total() {
            return Err(EngineError::illegal(
                self,
                "a trade exchanges two or more cards one for one",
            ));
        }
        if take.shares_good_with(give) {
            return Err(EngineError::illegal(self, "cannot take back a good being given"));
        }
        let area = &state.players[player];
        for (good, n) in take.goods() {
            if state.market[good].value() < i32::from(n) {
                return Err(EngineError::illegal(
                    self,
                    format!("not enough {} in the market", good),
                ));
            }
        }
        for (good, n) in give.goods() {
            if area.holding(good) < i32::from(n) {
                return Err(EngineError::illegal(self, format!("not enough {} to give", good)));
            }
        }
        let hand_after = area.hand_total() + take.total() as i32
            - (give.total() as i32 - i32::from(give[GoodType::Camel]));
        if hand_after > params.hand_limit() {
            return Err(EngineError::illegal(self, "trade would exceed the hand limit"));
        }
        Ok(())
    }

    /// Validate, then mutate `state`.
    pub fn execute(
        &self,
        state: &mut JaipurGameState,
        params: &JaipurParameters,
    ) -> Result<TurnStatus, EngineError> {
        self.validate(state, params)?;

        match self {
            JaipurAction::SellCards { good, count } => {
                sell(state, params, *good, *count);
                Ok(TurnStatus::Complete)
            }
            JaipurAction::TakeCards { player, take, give } => {
                take_cards(state, params, *player, take, give.as_ref());
                Ok(TurnStatus::Complete)
            }
            JaipurAction::PeekDrawPile { player, count } => {
                let shown = usize::from(*count).min(state.draw_pile.len());
                for index in 0..shown {
                    state.draw_pile.set_visibility(index, *player, true);
                }
                state.pending = Some(PendingPeek {
                    player: *player,
                    count: shown as u8,
                });
                Ok(TurnStatus::InProgress)
            }
            JaipurAction::ArrangePeeked { player, order } => {
                state.draw_pile.replace_top(order);
                let players: SmallVec<[PlayerId; 4]> = state.player_ids().collect();
                for index in 0..order.len() {
                    for &p in &players {
                        state.draw_pile.set_visibility(index, p, p == *player);
                    }
                }
                state.pending = None;
                Ok(TurnStatus::Complete)
            }
        }
    }
}

fn sell(state: &mut JaipurGameState, params: &JaipurParameters, good: GoodType, count: u8) {
    let n = i32::from(count);
    let player = state.current_player;
    state.players[player].hand[good].decrement(n);
    state.discard[good] += n;

    let stack = &mut state.good_tokens[good];
    let had_tokens = !stack.is_empty();
    let mut earned = 0;
    let mut received = 0;
    for _ in 0..count {
        match stack.pop_front() {
            Some(value) => {
                earned += value;
                received += 1;
            }
            None => break,
        }
    }
    if had_tokens && stack.is_empty() {
        state.good_tokens_fully_sold.increment(1);
    }

    let bonus = params
        .bonus_size_for(count)
        .and_then(|size| state.bonus_tokens.get_mut(&size))
        .and_then(|stack| stack.pop_front());

    let area = &mut state.players[player];
    area.score.increment(earned);
    area.good_tokens_count.increment(received);
    if let Some(value) = bonus {
        area.score.increment(value);
        area.bonus_tokens_count.increment(1);
    }
}

fn take_cards(
    state: &mut JaipurGameState,
    params: &JaipurParameters,
    player: PlayerId,
    take: &GoodCounts,
    give: Option<&GoodCounts>,
) {
    for (good, n) in take.goods() {
        let n = i32::from(n);
        state.market[good].decrement(n);
        let area = &mut state.players[player];
        if good.is_camel() {
            area.herd.increment(n);
        } else {
            area.hand[good].increment(n);
        }
    }
    if let Some(give) = give {
        for (good, n) in give.goods() {
            let n = i32::from(n);
            let area = &mut state.players[player];
            if good.is_camel() {
                area.herd.decrement(n);
            } else {
                area.hand[good].decrement(n);
            }
            state.market[good].increment(n);
        }
    }
    refill_market(state, params);
}

/// Deal from the draw pile until the market is full. Records the round-end
/// trigger when the pile runs dry first.
fn refill_market(state: &mut JaipurGameState, params: &JaipurParameters) {
    let missing = params.market_capacity() - state.market_total();
    if missing <= 0 || refill_market_slots(state, missing) == missing {
        return;
    }
    state.round_end_triggered |= match params.round_end_trigger() {
        RoundEndTrigger::DrawPileExhausted => true,
        RoundEndTrigger::MarketEmptied => state.market_total() == 0,
    };
}

/// Move up to `count` cards from the top of the draw pile into the market,
/// returning how many moved.
pub(crate) fn refill_market_slots(state: &mut JaipurGameState, count: i32) -> i32 {
    let mut moved = 0;
    while moved < count {
        let Some(good) = state.draw_pile.draw() else { break };
        state.market[good].increment(1);
        moved += 1;
    }
    moved
}

impl std::fmt::Display for JaipurAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JaipurAction::SellCards { good, count } => write!(f, "sell {}x{}", count, good),
            JaipurAction::TakeCards {
                player,
                take,
                give: None,
            } => write!(f, "{} takes {}", player, take),
            JaipurAction::TakeCards {
                player,
                take,
                give: Some(give),
            } => write!(f, "{} trades {} for {}", player, give, take),
            JaipurAction::PeekDrawPile { player, count } => write!(f, "{} peeks {}", player, count),
            JaipurAction::ArrangePeeked { player, order } => {
                write!(f, "{} arranges {:?}", player, order.as_slice())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::jaipur::JaipurPhase;
    use im::Vector;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    fn params() -> JaipurParameters {
        JaipurParameters::default()
    }

    /// A turn-ready state with an empty table.
    fn table(params: &JaipurParameters) -> JaipurGameState {
        let mut state = JaipurGameState::new(params);
        state.phase = JaipurPhase::PlayerTurn;
        state.round = 1;
        for good in GoodType::TRADE_GOODS {
            state.good_tokens[good] = params.good_tokens(good).iter().copied().collect();
        }
        for (&size, values) in params.bonus_tokens() {
            state.bonus_tokens.insert(size, values.iter().copied().collect());
        }
        state
    }

    fn fill_pile(state: &mut JaipurGameState, goods: &[GoodType]) {
        for &good in goods.iter().rev() {
            state.draw_pile.add(good);
        }
    }

    #[test]
    fn test_sell_pays_lowest_tokens_first() {
        let params = params();
        let mut state = table(&params);
        state.players[P0].hand[GoodType::Leather].set_value(3);

        let status = JaipurAction::SellCards {
            good: GoodType::Leather,
            count: 2,
        }
        .execute(&mut state, &params)
        .unwrap();

        assert_eq!(status, TurnStatus::Complete);
        assert_eq!(state.players[P0].hand[GoodType::Leather].value(), 1);
        assert_eq!(state.players[P0].score.value(), 2);
        assert_eq!(state.players[P0].good_tokens_count.value(), 2);
        assert_eq!(state.discard[GoodType::Leather], 2);
        assert_eq!(state.good_tokens[GoodType::Leather].len(), 7);
    }

    #[test]
    fn test_sell_three_claims_bonus() {
        let params = params();
        let mut state = table(&params);
        state.players[P0].hand[GoodType::Spice].set_value(3);

        JaipurAction::SellCards {
            good: GoodType::Spice,
            count: 3,
        }
        .execute(&mut state, &params)
        .unwrap();

        let area = &state.players[P0];
        assert_eq!(area.bonus_tokens_count.value(), 1);
        assert_eq!(state.bonus_tokens[&3].len(), 6);
        // 1 + 1 + 2 from tokens, 1..=3 from the bonus stack.
        assert!((5..=7).contains(&area.score.value()));
    }

    #[test]
    fn test_sell_past_empty_stack_pays_remaining() {
        let params = params();
        let mut state = table(&params);
        state.good_tokens[GoodType::Gold] = Vector::from(vec![6]);
        state.bonus_tokens.clear();
        state.players[P0].hand[GoodType::Gold].set_value(2);

        JaipurAction::SellCards {
            good: GoodType::Gold,
            count: 2,
        }
        .execute(&mut state, &params)
        .unwrap();

        assert_eq!(state.players[P0].score.value(), 6);
        assert_eq!(state.players[P0].good_tokens_count.value(), 1);
        assert_eq!(state.good_tokens_fully_sold.value(), 1);
        assert_eq!(state.discard[GoodType::Gold], 2);
    }

    #[test]
    fn test_selling_into_exhausted_stack_does_not_recount() {
        let params = params();
        let mut state = table(&params);
        state.good_tokens[GoodType::Cloth] = Vector::new();
        state.good_tokens_fully_sold.set_value(1);
        state.players[P0].hand[GoodType::Cloth].set_value(1);

        JaipurAction::SellCards {
            good: GoodType::Cloth,
            count: 1,
        }
        .execute(&mut state, &params)
        .unwrap();

        assert_eq!(state.good_tokens_fully_sold.value(), 1);
        assert_eq!(state.players[P0].score.value(), 0);
    }

    #[test]
    fn test_sell_rejections() {
        let params = params();
        let mut state = table(&params);
        state.players[P0].hand[GoodType::Diamonds].set_value(1);

        let too_few = JaipurAction::SellCards {
            good: GoodType::Diamonds,
            count: 1,
        };
        assert!(matches!(
            too_few.execute(&mut state, &params),
            Err(EngineError::IllegalAction { .. })
        ));
        let not_held = JaipurAction::SellCards {
            good: GoodType::Spice,
            count: 1,
        };
        assert!(not_held.validate(&state, &params).is_err());
        let camels = JaipurAction::SellCards {
            good: GoodType::Camel,
            count: 2,
        };
        assert!(camels.validate(&state, &params).is_err());
        assert_eq!(state.players[P0].hand[GoodType::Diamonds].value(), 1);
    }

    #[test]
    fn test_take_all_camels_ignores_hand_limit() {
        let params = params();
        let mut state = table(&params);
        state.market[GoodType::Camel].set_value(3);
        state.market[GoodType::Gold].set_value(2);
        state.players[P0].hand[GoodType::Leather].set_value(7);
        fill_pile(
            &mut state,
            &[GoodType::Silver, GoodType::Camel, GoodType::Spice, GoodType::Cloth],
        );

        JaipurAction::take_camels(P0, 3).execute(&mut state, &params).unwrap();

        assert_eq!(state.players[P0].herd.value(), 3);
        assert_eq!(state.market[GoodType::Camel].value(), 1);
        assert_eq!(state.market_total(), 5);
        assert_eq!(state.draw_pile.len(), 1);
        assert!(!state.round_end_triggered);
    }

    #[test]
    fn test_take_camels_must_take_all() {
        let params = params();
        let mut state = table(&params);
        state.market[GoodType::Camel].set_value(3);

        assert!(JaipurAction::take_camels(P0, 2).validate(&state, &params).is_err());
        assert!(JaipurAction::take_camels(P0, 3).validate(&state, &params).is_ok());
    }

    #[test]
    fn test_take_one_with_full_hand_rejected() {
        let params = params();
        let mut state = table(&params);
        state.market[GoodType::Gold].set_value(1);
        state.players[P1].hand[GoodType::Leather].set_value(7);

        assert!(JaipurAction::take_one(P0, GoodType::Gold).validate(&state, &params).is_ok());
        assert!(JaipurAction::take_one(P1, GoodType::Gold).validate(&state, &params).is_err());
        assert!(JaipurAction::take_one(P0, GoodType::Silver).validate(&state, &params).is_err());
    }

    #[test]
    fn test_take_triggers_round_end_when_pile_runs_dry() {
        let params = params();
        let mut state = table(&params);
        state.market[GoodType::Gold].set_value(5);

        JaipurAction::take_one(P0, GoodType::Gold).execute(&mut state, &params).unwrap();

        assert!(state.round_end_triggered);
        assert_eq!(state.market_total(), 4);
    }

    #[test]
    fn test_market_emptied_trigger() {
        let params = JaipurParameters::builder()
            .round_end_trigger(RoundEndTrigger::MarketEmptied)
            .build()
            .unwrap();
        let mut state = table(&params);
        state.market[GoodType::Gold].set_value(2);

        JaipurAction::take_one(P0, GoodType::Gold).execute(&mut state, &params).unwrap();
        assert!(!state.round_end_triggered);

        JaipurAction::take_one(P0, GoodType::Gold).execute(&mut state, &params).unwrap();
        assert!(state.round_end_triggered);
    }

    #[test]
    fn test_trade_with_camels() {
        let params = params();
        let mut state = table(&params);
        state.market[GoodType::Diamonds].set_value(2);
        state.market[GoodType::Silver].set_value(3);
        state.players[P0].herd.set_value(1);
        state.players[P0].hand[GoodType::Leather].set_value(1);

        let take = GoodCounts::of(&[(GoodType::Diamonds, 2)]);
        let give = GoodCounts::of(&[(GoodType::Camel, 1), (GoodType::Leather, 1)]);
        JaipurAction::trade(P0, take, give).execute(&mut state, &params).unwrap();

        let area = &state.players[P0];
        assert_eq!(area.hand[GoodType::Diamonds].value(), 2);
        assert_eq!(area.hand[GoodType::Leather].value(), 0);
        assert_eq!(area.herd.value(), 0);
        assert_eq!(state.market[GoodType::Camel].value(), 1);
        assert_eq!(state.market[GoodType::Leather].value(), 1);
        assert_eq!(state.market_total(), 5);
    }

    #[test]
    fn test_trade_rejections() {
        let params = params();
        let mut state = table(&params);
        state.market[GoodType::Gold].set_value(2);
        state.market[GoodType::Camel].set_value(3);
        state.players[P0].hand[GoodType::Gold].set_value(1);
        state.players[P0].hand[GoodType::Silver].set_value(6);

        let overlapping = JaipurAction::trade(
            P0,
            GoodCounts::of(&[(GoodType::Gold, 2)]),
            GoodCounts::of(&[(GoodType::Gold, 1), (GoodType::Silver, 1)]),
        );
        assert!(overlapping.validate(&state, &params).is_err());

        let camels_taken = JaipurAction::trade(
            P0,
            GoodCounts::of(&[(GoodType::Camel, 2)]),
            GoodCounts::of(&[(GoodType::Silver, 2)]),
        );
        assert!(camels_taken.validate(&state, &params).is_err());

        let uneven = JaipurAction::trade(
            P0,
            GoodCounts::of(&[(GoodType::Gold, 2)]),
            GoodCounts::of(&[(GoodType::Silver, 3)]),
        );
        assert!(uneven.validate(&state, &params).is_err());

        let valid = JaipurAction::trade(
            P0,
            GoodCounts::of(&[(GoodType::Gold, 2)]),
            GoodCounts::of(&[(GoodType::Silver, 2)]),
        );
        assert!(valid.validate(&state, &params).is_ok());
    }

    #[test]
    fn test_trade_camels_for_goods_respects_hand_limit() {
        let params = params();
        let mut state = table(&params);
        state.market[GoodType::Gold].set_value(2);
        state.players[P0].herd.set_value(2);
        state.players[P0].hand[GoodType::Silver].set_value(6);

        let action = JaipurAction::trade(
            P0,
            GoodCounts::of(&[(GoodType::Gold, 2)]),
            GoodCounts::of(&[(GoodType::Camel, 2)]),
        );
        assert!(action.validate(&state, &params).is_err());

        state.players[P0].hand[GoodType::Silver].set_value(5);
        assert!(action.validate(&state, &params).is_ok());
    }

    #[test]
    fn test_peek_then_arrange() {
        let params = JaipurParameters::builder().peek(2).build().unwrap();
        let mut state = table(&params);
        fill_pile(&mut state, &[GoodType::Gold, GoodType::Camel, GoodType::Spice]);

        let peek = JaipurAction::PeekDrawPile { player: P0, count: 2 };
        assert_eq!(peek.execute(&mut state, &params).unwrap(), TurnStatus::InProgress);
        assert_eq!(state.pending, Some(PendingPeek { player: P0, count: 2 }));
        assert_eq!(
            state.draw_pile.visible_view(P0),
            vec![Some(GoodType::Gold), Some(GoodType::Camel), None]
        );

        let sell = JaipurAction::SellCards {
            good: GoodType::Gold,
            count: 2,
        };
        assert_eq!(sell.validate(&state, &params), Err(EngineError::ActionInProgress));

        let wrong = JaipurAction::ArrangePeeked {
            player: P0,
            order: SmallVec::from_slice(&[GoodType::Gold, GoodType::Spice]),
        };
        assert!(wrong.validate(&state, &params).is_err());

        let arrange = JaipurAction::ArrangePeeked {
            player: P0,
            order: SmallVec::from_slice(&[GoodType::Camel, GoodType::Gold]),
        };
        assert_eq!(arrange.execute(&mut state, &params).unwrap(), TurnStatus::Complete);
        assert_eq!(state.pending, None);
        assert_eq!(
            state.draw_pile.iter().copied().collect::<Vec<_>>(),
            vec![GoodType::Camel, GoodType::Gold, GoodType::Spice]
        );
        assert!(state.draw_pile.is_visible(0, P0));
        assert!(!state.draw_pile.is_visible(0, P1));
    }

    #[test]
    fn test_peek_requires_variant() {
        let params = params();
        let mut state = table(&params);
        fill_pile(&mut state, &[GoodType::Gold]);

        let peek = JaipurAction::PeekDrawPile { player: P0, count: 3 };
        assert!(peek.validate(&state, &params).is_err());

        let arrange = JaipurAction::ArrangePeeked {
            player: P0,
            order: SmallVec::new(),
        };
        assert_eq!(arrange.validate(&state, &params), Err(EngineError::NoActionInProgress));
    }

    #[test]
    fn test_display() {
        let sell = JaipurAction::SellCards {
            good: GoodType::Gold,
            count: 2,
        };
        assert_eq!(sell.to_string(), "sell 2xGold");
        assert_eq!(JaipurAction::take_camels(P1, 3).to_string(), "Player 1 takes {3xCamel}");
        let trade = JaipurAction::trade(
            P0,
            GoodCounts::of(&[(GoodType::Gold, 2)]),
            GoodCounts::of(&[(GoodType::Camel, 2)]),
        );
        assert_eq!(trade.to_string(), "Player 0 trades {2xCamel} for {2xGold}");
    }
}
