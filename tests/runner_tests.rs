//! GameRunner and event stream tests.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use rust_jaipur::core::{EngineError, GameRng, PlayerId};
use rust_jaipur::events::{EventKind, EventLog, GameEvent};
use rust_jaipur::games::jaipur::{GoodType, JaipurAction, JaipurForwardModel, JaipurParameters};
use rust_jaipur::rules::{ForwardModel, GameRunner, TurnStatus};

type SharedLog = Rc<RefCell<EventLog<JaipurAction>>>;

fn runner_with_log(seed: u64) -> (GameRunner<JaipurForwardModel>, SharedLog) {
    let log = Rc::new(RefCell::new(EventLog::new()));
    let sink = Rc::clone(&log);
    let model = JaipurForwardModel::new(JaipurParameters::with_seed(seed));
    let runner = GameRunner::new(model).with_listener(move |event: &GameEvent<JaipurAction>| {
        sink.borrow_mut().push(event.clone())
    });
    (runner, log)
}

#[test]
fn test_run_to_completion_records_every_event() {
    common::init_logging();
    let (mut runner, log) = runner_with_log(5);
    let mut rng = GameRng::new(5);

    let result = runner
        .run(|_, actions| common::pick(&mut rng, actions), 10_000)
        .unwrap()
        .expect("game should finish");

    let log = log.borrow();
    let game = log.game().expect("game summary recorded");
    for player in game.winners.iter() {
        assert!(result.is_winner(*player));
    }
    assert_eq!(log.count(EventKind::ActionApplied) as u64, runner.steps());
    assert_eq!(log.count(EventKind::GameEnded), 1);
    assert_eq!(log.rounds().count() as u32, game.rounds_played);
    assert!(game.rounds_played >= 2);

    // Round numbers increase one at a time and rounds won never drop.
    let mut previous: Option<&rust_jaipur::events::RoundSummary> = None;
    for summary in log.rounds() {
        if let Some(prev) = previous {
            assert_eq!(summary.round, prev.round + 1);
            for player in PlayerId::all(2) {
                assert!(summary.rounds_won[player] >= prev.rounds_won[player]);
            }
        }
        previous = Some(summary);
    }
    assert!(matches!(log.events().last(), Some(GameEvent::GameEnded(_))));
}

#[test]
fn test_action_events_carry_turn_and_player() {
    let (mut runner, log) = runner_with_log(6);
    let camels = runner.state().market[GoodType::Camel].value() as u8;
    let first = runner.state().current_player;

    runner.step(&JaipurAction::take_camels(first, camels)).unwrap();

    let log = log.borrow();
    match &log.events()[0] {
        GameEvent::ActionApplied {
            round,
            turn,
            player,
            status,
            ..
        } => {
            assert_eq!((*round, *turn, *player), (1, 0, first));
            assert_eq!(*status, TurnStatus::Complete);
        }
        other => panic!("unexpected event {:?}", other),
    }
    assert_eq!(log.events()[0].player(), Some(first));
}

#[test]
fn test_rejected_step_emits_nothing() {
    let (mut runner, log) = runner_with_log(7);
    let waiting = runner.state().current_player.next(2);

    let err = runner.step(&JaipurAction::take_camels(waiting, 3)).unwrap_err();

    assert!(matches!(err, EngineError::NotPlayersTurn { .. }));
    assert_eq!(runner.steps(), 0);
    assert!(log.borrow().events().is_empty());
}

#[test]
fn test_bad_policy_choice_is_an_error() {
    let (mut runner, _log) = runner_with_log(8);

    let err = runner.run(|_, actions| actions.len(), 10).unwrap_err();

    assert!(matches!(err, EngineError::IllegalAction { .. }));
}

#[test]
fn test_step_limit_stops_early() {
    let (mut runner, _log) = runner_with_log(9);

    let result = runner.run(|_, _| 0, 3).unwrap();

    assert!(result.is_none());
    assert_eq!(runner.steps(), 3);
    let state = runner.into_state();
    assert!(!JaipurForwardModel::new(JaipurParameters::with_seed(9)).is_terminal(&state));
}
