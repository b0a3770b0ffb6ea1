//! The Jaipur forward model: round setup, action application and the
//! post-action lifecycle (round scoring, game end, next round).

use smallvec::SmallVec;
use tracing::{debug, info, trace};

use super::actions::{refill_market_slots, JaipurAction};
use super::goods::{GoodMap, GoodType};
use super::legal;
use super::params::{FirstPlayerRule, JaipurParameters};
use super::state::{JaipurGameState, JaipurPhase};
use crate::core::{EngineError, PlayerId, PlayerMap};
use crate::events::{GameEvent, GameSummary, RoundSummary};
use crate::rules::{ForwardModel, PlayerResult, StepEvents, TurnStatus};

/// Jaipur rules bound to one parameter set.
///
/// ```
/// use rust_jaipur::games::jaipur::{JaipurForwardModel, JaipurParameters};
/// use rust_jaipur::rules::ForwardModel;
///
/// let model = JaipurForwardModel::new(JaipurParameters::with_seed(42));
/// let mut state = model.setup();
///
/// while !model.is_terminal(&state) {
///     let action = model.legal_actions(&state)[0].clone();
///     model.apply(&mut state, &action).unwrap();
/// }
/// assert!(!model.winners(&state).is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct JaipurForwardModel {
    params: JaipurParameters,
}

impl JaipurForwardModel {
    #[must_use]
    pub fn new(params: JaipurParameters) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &JaipurParameters {
        &self.params
    }

    /// Deal a fresh round into `state`.
    ///
    /// Resets everything round-scoped (market, draw pile, hands, herds,
    /// discard, token stacks and counts) and keeps scores, rounds won and
    /// the chosen first player.
    pub fn setup_round(&self, state: &mut JaipurGameState) {
        let params = &self.params;

        for (_, slot) in state.market.iter_mut() {
            slot.set_value(0);
        }
        state.market[GoodType::Camel].set_value(params.initial_camels_in_market());

        state.draw_pile.clear();
        for good in GoodType::ALL {
            let mut count = params.deck_count(good);
            if good.is_camel() {
                count -= params.initial_camels_in_market();
            }
            for _ in 0..count {
                state.draw_pile.add_bottom(good);
            }
        }
        state.draw_pile.shuffle(&mut state.rng);
        state.discard = GoodMap::default();

        let reset_scores = params.reset_scores_each_round();
        for (_, area) in state.players.iter_mut() {
            for (_, slot) in area.hand.iter_mut() {
                slot.set_value(0);
            }
            area.herd.set_value(0);
            area.good_tokens_count.set_value(0);
            area.bonus_tokens_count.set_value(0);
            if reset_scores {
                area.score.set_value(0);
            }
        }

        let players: SmallVec<[PlayerId; 4]> = state.player_ids().collect();
        for &player in &players {
            for _ in 0..params.hand_size() {
                let Some(good) = state.draw_pile.draw() else { break };
                let area = &mut state.players[player];
                if good.is_camel() {
                    area.herd.increment(1);
                } else {
                    area.hand[good].increment(1);
                }
            }
        }
        refill_market_slots(state, params.initial_market_fill());

        state.good_tokens =
            GoodMap::from_fn(|good| params.good_tokens(good).iter().copied().collect());
        state.bonus_tokens.clear();
        for (&size, values) in params.bonus_tokens() {
            let mut stack = values.clone();
            state.rng.shuffle(&mut stack);
            state.bonus_tokens.insert(size, stack.into_iter().collect());
        }

        state.good_tokens_fully_sold.set_value(0);
        state.round_end_triggered = false;
        state.pending = None;
        state.round += 1;
        state.current_player = state.first_player;
        state.phase = JaipurPhase::PlayerTurn;

        debug!(
            round = state.round,
            first_player = %state.first_player,
            draw_pile = state.draw_pile.len(),
            market = state.market_total(),
            "round dealt"
        );
    }

    /// Turn bookkeeping after a resolved action.
    fn after_action(&self, state: &mut JaipurGameState, events: &mut StepEvents<JaipurAction>) {
        state.turn += 1;
        let threshold_reached =
            state.good_tokens_fully_sold.value() >= self.params.good_tokens_empty_round_end();
        if state.round_end_triggered || threshold_reached {
            self.end_round(state, events);
        } else {
            state.current_player = state.current_player.next(state.player_count());
        }
    }

    fn end_round(&self, state: &mut JaipurGameState, events: &mut StepEvents<JaipurAction>) {
        state.phase = JaipurPhase::RoundEnd;

        let herds = state.herds();
        let camel_bonus = majority_holder(&herds);
        if let Some(player) = camel_bonus {
            state.players[player].score.increment(self.params.camel_bonus());
        }

        let ranks = state.ordinal_positions();
        let round_winners: SmallVec<[PlayerId; 2]> =
            ranks.iter().filter(|(_, &rank)| rank == 1).map(|(p, _)| p).collect();
        for &player in &round_winners {
            state.players[player].rounds_won.increment(1);
        }

        let summary = RoundSummary {
            round: state.round,
            first_player: state.first_player,
            scores: state.scores(),
            herds,
            camel_bonus,
            round_winners: round_winners.clone(),
            rounds_won: state.players.map(|area| area.rounds_won.value() as u32),
        };
        info!(
            round = state.round,
            scores = ?summary.scores,
            camel_bonus = ?camel_bonus,
            winners = ?round_winners.as_slice(),
            "round ended"
        );
        events.push(GameEvent::RoundEnded(summary));

        let target = self.params.rounds_to_win() as i32;
        let game_winners: SmallVec<[PlayerId; 2]> = state
            .players
            .iter()
            .filter(|(_, area)| area.rounds_won.value() >= target)
            .map(|(p, _)| p)
            .collect();

        if !game_winners.is_empty() {
            for (player, area) in state.players.iter_mut() {
                area.result = if game_winners.contains(&player) {
                    PlayerResult::Win
                } else {
                    PlayerResult::Lose
                };
            }
            state.phase = JaipurPhase::GameEnd;
            info!(
                rounds = state.round,
                winners = ?game_winners.as_slice(),
                "game ended"
            );
            events.push(GameEvent::GameEnded(GameSummary {
                rounds_played: state.round,
                winners: game_winners,
                results: state.players.map(|area| area.result),
                scores: state.scores(),
            }));
            return;
        }

        state.first_player = self.next_first_player(state, &ranks);
        self.setup_round(state);
    }

    fn next_first_player(&self, state: &JaipurGameState, ranks: &PlayerMap<usize>) -> PlayerId {
        let alternate = state.first_player.next(state.player_count());
        match self.params.first_player_rule() {
            FirstPlayerRule::Fixed => PlayerId::new(0),
            FirstPlayerRule::Alternate => alternate,
            FirstPlayerRule::RoundLoser => {
                let worst = ranks.iter().map(|(_, &rank)| rank).max().unwrap_or(1);
                if worst == 1 {
                    return alternate;
                }
                ranks
                    .iter()
                    .find(|(_, &rank)| rank == worst)
                    .map_or(alternate, |(p, _)| p)
            }
        }
    }
}

/// The single player with strictly the largest non-empty herd.
fn majority_holder(herds: &PlayerMap<i32>) -> Option<PlayerId> {
    let largest = herds.iter().map(|(_, &n)| n).max()?;
    if largest == 0 {
        return None;
    }
    let mut holders = herds.iter().filter(|(_, &n)| n == largest);
    match (holders.next(), holders.next()) {
        (Some((player, _)), None) => Some(player),
        _ => None,
    }
}

impl ForwardModel for JaipurForwardModel {
    type State = JaipurGameState;
    type Action = JaipurAction;

    fn setup(&self) -> JaipurGameState {
        let mut state = JaipurGameState::new(&self.params);
        self.setup_round(&mut state);
        state
    }

    fn current_player(&self, state: &JaipurGameState) -> PlayerId {
        state.current_player
    }

    fn legal_actions(&self, state: &JaipurGameState) -> Vec<JaipurAction> {
        legal::legal_actions(state, &self.params)
    }

    fn apply(
        &self,
        state: &mut JaipurGameState,
        action: &JaipurAction,
    ) -> Result<StepEvents<JaipurAction>, EngineError> {
        if state.is_terminal() {
            return Err(EngineError::GameOver);
        }
        let actor = action.actor(state);
        if actor != state.current_player {
            return Err(EngineError::NotPlayersTurn {
                actor,
                current: state.current_player,
            });
        }

        let (round, turn) = (state.round, state.turn);
        let status = action.execute(state, &self.params)?;
        trace!(round, turn, player = %actor, %action, ?status, "action applied");

        let mut events = StepEvents::new();
        events.push(GameEvent::ActionApplied {
            round,
            turn,
            player: actor,
            action: action.clone(),
            status,
        });
        if status == TurnStatus::Complete {
            self.after_action(state, &mut events);
        }
        Ok(events)
    }

    fn is_terminal(&self, state: &JaipurGameState) -> bool {
        state.is_terminal()
    }

    fn winners(&self, state: &JaipurGameState) -> SmallVec<[PlayerId; 2]> {
        state.winners()
    }
}
