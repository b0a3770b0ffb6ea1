//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use rust_jaipur::core::GameRng;
use rust_jaipur::games::jaipur::{GoodType, JaipurAction, JaipurGameState, JaipurParameters};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once.
///
/// The filter comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn is_trade(action: &JaipurAction) -> bool {
    matches!(action, JaipurAction::TakeCards { give: Some(_), .. })
}

/// Random policy that picks a trade only a quarter of the time.
///
/// Uniform choice drowns in trades (there can be hundreds of them) and
/// barely ever drains the draw pile, so playouts would take thousands of
/// steps.
pub fn pick(rng: &mut GameRng, actions: &[JaipurAction]) -> usize {
    let plain: Vec<usize> = (0..actions.len()).filter(|&i| !is_trade(&actions[i])).collect();
    let trades = actions.len() - plain.len();
    if plain.is_empty() || (trades > 0 && rng.gen_range_usize(0..4) == 0) {
        let trade_indices: Vec<usize> =
            (0..actions.len()).filter(|&i| is_trade(&actions[i])).collect();
        return trade_indices[rng.gen_range_usize(0..trade_indices.len())];
    }
    plain[rng.gen_range_usize(0..plain.len())]
}

/// Assert every card of every good is accounted for.
pub fn assert_conserved(state: &JaipurGameState, params: &JaipurParameters) {
    for good in GoodType::ALL {
        assert_eq!(
            state.card_total(good),
            params.deck_count(good),
            "{} not conserved in round {} turn {}",
            good,
            state.round,
            state.turn
        );
    }
}

/// Assert hand and herd limits hold for every player.
pub fn assert_within_limits(state: &JaipurGameState, params: &JaipurParameters) {
    for (player, area) in state.players.iter() {
        assert!(
            area.hand_total() <= params.hand_limit(),
            "{} holds {} cards",
            player,
            area.hand_total()
        );
        assert_eq!(area.hand[GoodType::Camel].value(), 0);
        assert!(area.herd.value() <= params.deck_count(GoodType::Camel));
    }
}
