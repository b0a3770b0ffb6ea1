//! Legal action enumeration.
//!
//! Trades are generated as pairs of multisets (a count per good), never as
//! combinations of physical cards, so every enumerated action is distinct
//! without a deduplication pass and the order is stable for a given state.

use smallvec::SmallVec;

use super::actions::{JaipurAction, PeekOrder};
use super::goods::{GoodCounts, GoodType};
use super::params::JaipurParameters;
use super::state::JaipurGameState;
use crate::core::PlayerId;

/// Every legal action for the player to move.
///
/// Empty exactly when the game is over.
///
/// # Panics
///
/// Panics if a live state has no legal action; parameter validation rules
/// that out, so reaching it means the engine is broken.
#[must_use]
pub fn legal_actions(state: &JaipurGameState, params: &JaipurParameters) -> Vec<JaipurAction> {
    if state.is_terminal() {
        return Vec::new();
    }
    let actions = match state.pending {
        Some(pending) => arrangements(state, pending.player, usize::from(pending.count)),
        None => turn_actions(state, params),
    };
    assert!(
        !actions.is_empty(),
        "no legal action for {} in round {} turn {}",
        state.current_player,
        state.round,
        state.turn
    );
    actions
}

fn turn_actions(state: &JaipurGameState, params: &JaipurParameters) -> Vec<JaipurAction> {
    let player = state.current_player;
    let area = state.player(player);
    let hand_total = area.hand_total();
    let mut actions = Vec::new();

    for good in GoodType::TRADE_GOODS {
        let held = area.hand[good].value();
        for n in params.min_sell(good)..=held {
            actions.push(JaipurAction::SellCards { good, count: n as u8 });
        }
    }

    let market_camels = state.market[GoodType::Camel].value();
    if market_camels > 0 {
        actions.push(JaipurAction::take_camels(player, market_camels as u8));
    }

    if hand_total < params.hand_limit() {
        for good in GoodType::TRADE_GOODS {
            if state.market[good].value() > 0 {
                actions.push(JaipurAction::take_one(player, good));
            }
        }
    }

    let mut stock = GoodCounts::from_fn(|good| state.market[good].value() as u8);
    stock[GoodType::Camel] = 0;
    let giveable = GoodCounts::from_fn(|good| area.holding(good) as u8);
    let largest = stock.total().min(giveable.total()) as u8;
    for k in 2..=largest {
        let takes = sub_multisets(&stock, k);
        let gives = sub_multisets(&giveable, k);
        for take in &takes {
            for give in &gives {
                if take.shares_good_with(give) {
                    continue;
                }
                // Goods given back cancel out; camels given do not.
                if hand_total + i32::from(give[GoodType::Camel]) > params.hand_limit() {
                    continue;
                }
                actions.push(JaipurAction::trade(player, *take, *give));
            }
        }
    }

    if let Some(count) = params.peek_count() {
        if !state.draw_pile.is_empty() {
            actions.push(JaipurAction::PeekDrawPile { player, count });
        }
    }

    actions
}

/// Every multiset of exactly `size` cards drawn from `pool`, in
/// lexicographic order of per-good counts (highest first).
#[must_use]
pub fn sub_multisets(pool: &GoodCounts, size: u8) -> Vec<GoodCounts> {
    let mut out = Vec::new();
    let mut current = GoodCounts::default();
    let remaining: u32 = pool.total();
    collect(pool, 0, size, remaining, &mut current, &mut out);
    out
}

fn collect(
    pool: &GoodCounts,
    index: usize,
    left: u8,
    available: u32,
    current: &mut GoodCounts,
    out: &mut Vec<GoodCounts>,
) {
    if left == 0 {
        out.push(*current);
        return;
    }
    if index == GoodType::COUNT || available < u32::from(left) {
        return;
    }
    let good = GoodType::ALL[index];
    let here = pool[good];
    let rest = available - u32::from(here);
    for n in (0..=here.min(left)).rev() {
        current[good] = n;
        collect(pool, index + 1, left - n, rest, current, out);
    }
    current[good] = 0;
}

/// Every distinct ordering of the top `count` cards, as follow-ups to a
/// peek by `player`.
fn arrangements(state: &JaipurGameState, player: PlayerId, count: usize) -> Vec<JaipurAction> {
    let mut order: PeekOrder = state.draw_pile.peek(count);
    order.sort_unstable();
    let mut actions = vec![JaipurAction::ArrangePeeked {
        player,
        order: order.clone(),
    }];
    while next_permutation(&mut order) {
        actions.push(JaipurAction::ArrangePeeked {
            player,
            order: order.clone(),
        });
    }
    actions
}

/// Advance to the next lexicographic permutation. Returns `false` once the
/// sequence is in descending order (and leaves it untouched).
fn next_permutation<T: Ord>(items: &mut SmallVec<[T; 4]>) -> bool {
    let n = items.len();
    if n < 2 {
        return false;
    }
    let mut i = n - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = n - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::jaipur::{JaipurPhase, PendingPeek};

    const P0: PlayerId = PlayerId::new(0);

    fn table(params: &JaipurParameters) -> JaipurGameState {
        let mut state = JaipurGameState::new(params);
        state.phase = JaipurPhase::PlayerTurn;
        state.round = 1;
        state
    }

    fn count_matching(actions: &[JaipurAction], pred: impl Fn(&JaipurAction) -> bool) -> usize {
        actions.iter().filter(|a| pred(a)).count()
    }

    fn is_trade(action: &JaipurAction) -> bool {
        matches!(action, JaipurAction::TakeCards { give: Some(_), .. })
    }

    #[test]
    fn test_sub_multisets() {
        let pool = GoodCounts::of(&[(GoodType::Gold, 2), (GoodType::Spice, 1)]);

        let pairs = sub_multisets(&pool, 2);
        assert_eq!(
            pairs,
            vec![
                GoodCounts::of(&[(GoodType::Gold, 2)]),
                GoodCounts::of(&[(GoodType::Gold, 1), (GoodType::Spice, 1)]),
            ]
        );
        assert_eq!(sub_multisets(&pool, 3).len(), 1);
        assert!(sub_multisets(&pool, 4).is_empty());
        assert_eq!(sub_multisets(&pool, 0), vec![GoodCounts::default()]);
    }

    #[test]
    fn test_next_permutation_skips_duplicates() {
        let mut items: SmallVec<[u8; 4]> = SmallVec::from_slice(&[1, 1, 2]);
        let mut seen = vec![items.clone()];
        while next_permutation(&mut items) {
            seen.push(items.clone());
        }
        assert_eq!(seen.len(), 3);
        assert_eq!(seen.last().unwrap().as_slice(), &[2, 1, 1]);
    }

    #[test]
    fn test_largest_counts_enumerate_valid_actions() {
        use crate::games::jaipur::JaipurForwardModel;
        use crate::rules::ForwardModel;

        let params = JaipurParameters::builder()
            .deck_count(GoodType::Camel, 255)
            .initial_camels_in_market(250)
            .market_capacity(255)
            .hand_limit(255)
            .build()
            .unwrap();
        let model = JaipurForwardModel::new(params.clone());
        let state = model.setup();

        let actions = legal_actions(&state, &params);
        let camels = state.market[GoodType::Camel].value();
        assert!(camels >= 250);
        assert!(actions.contains(&JaipurAction::take_camels(P0, camels as u8)));
        for action in &actions {
            assert!(action.validate(&state, &params).is_ok(), "{}", action);
        }
    }

    #[test]
    fn test_enumeration_exact() {
        let params = JaipurParameters::default();
        let mut state = table(&params);
        state.market[GoodType::Camel].set_value(3);
        state.market[GoodType::Gold].set_value(1);
        state.market[GoodType::Leather].set_value(1);
        state.players[P0].hand[GoodType::Diamonds].set_value(2);
        state.players[P0].hand[GoodType::Leather].set_value(1);

        let actions = legal_actions(&state, &params);

        // Sell: 2 diamonds, 1 leather.
        assert_eq!(count_matching(&actions, |a| matches!(a, JaipurAction::SellCards { .. })), 2);
        assert!(actions.contains(&JaipurAction::take_camels(P0, 3)));
        assert!(actions.contains(&JaipurAction::take_one(P0, GoodType::Gold)));
        assert!(actions.contains(&JaipurAction::take_one(P0, GoodType::Leather)));
        // Only {Gold, Leather} can be taken; the give side has no Gold or
        // Leather, so it must be {2 Diamonds}.
        let trade = JaipurAction::trade(
            P0,
            GoodCounts::of(&[(GoodType::Gold, 1), (GoodType::Leather, 1)]),
            GoodCounts::of(&[(GoodType::Diamonds, 2)]),
        );
        assert_eq!(count_matching(&actions, is_trade), 1);
        assert!(actions.contains(&trade));
        assert_eq!(actions.len(), 6);
    }

    #[test]
    fn test_trades_never_share_goods_and_are_unique() {
        let params = JaipurParameters::default();
        let mut state = table(&params);
        state.market[GoodType::Gold].set_value(2);
        state.market[GoodType::Silver].set_value(2);
        state.market[GoodType::Camel].set_value(1);
        state.players[P0].hand[GoodType::Gold].set_value(1);
        state.players[P0].hand[GoodType::Spice].set_value(2);
        state.players[P0].herd.set_value(2);

        let actions = legal_actions(&state, &params);
        for action in &actions {
            if let JaipurAction::TakeCards {
                take, give: Some(give), ..
            } = action
            {
                assert!(!take.shares_good_with(give), "{}", action);
                assert_eq!(take.total(), give.total());
                assert_eq!(take[GoodType::Camel], 0);
            }
        }
        let mut unique = actions.clone();
        unique.sort_by_key(|a| format!("{:?}", a));
        unique.dedup();
        assert_eq!(unique.len(), actions.len());
    }

    #[test]
    fn test_full_hand_blocks_single_take_and_camel_trades() {
        let params = JaipurParameters::default();
        let mut state = table(&params);
        state.market[GoodType::Gold].set_value(2);
        state.market[GoodType::Camel].set_value(3);
        state.players[P0].hand[GoodType::Leather].set_value(7);
        state.players[P0].herd.set_value(2);

        let actions = legal_actions(&state, &params);

        assert!(!actions.contains(&JaipurAction::take_one(P0, GoodType::Gold)));
        assert!(actions.contains(&JaipurAction::take_camels(P0, 3)));
        for action in actions.iter().filter(|a| is_trade(a)) {
            if let JaipurAction::TakeCards { give: Some(give), .. } = action {
                assert_eq!(give[GoodType::Camel], 0, "{}", action);
            }
        }
        assert!(actions.contains(&JaipurAction::trade(
            P0,
            GoodCounts::of(&[(GoodType::Gold, 2)]),
            GoodCounts::of(&[(GoodType::Leather, 2)]),
        )));
    }

    #[test]
    fn test_pending_peek_offers_only_arrangements() {
        let params = JaipurParameters::builder().peek(3).build().unwrap();
        let mut state = table(&params);
        for good in [GoodType::Spice, GoodType::Gold, GoodType::Gold, GoodType::Camel] {
            state.draw_pile.add(good);
        }
        state.pending = Some(PendingPeek { player: P0, count: 3 });

        let actions = legal_actions(&state, &params);

        assert_eq!(actions.len(), 3);
        assert!(actions.iter().all(|a| a.is_chain_follow_up()));
    }

    #[test]
    fn test_peek_offered_when_enabled() {
        let params = JaipurParameters::builder().peek(2).build().unwrap();
        let mut state = table(&params);
        state.market[GoodType::Camel].set_value(5);
        state.draw_pile.add(GoodType::Gold);

        let actions = legal_actions(&state, &params);
        assert!(actions.contains(&JaipurAction::PeekDrawPile { player: P0, count: 2 }));
    }

    #[test]
    fn test_terminal_state_has_no_actions() {
        let params = JaipurParameters::default();
        let mut state = table(&params);
        state.phase = JaipurPhase::GameEnd;
        assert!(legal_actions(&state, &params).is_empty());
    }

    #[test]
    #[should_panic(expected = "no legal action")]
    fn test_empty_live_state_panics() {
        let params = JaipurParameters::default();
        let state = table(&params);
        let _ = legal_actions(&state, &params);
    }
}
