//! Whole-round scenarios and rule invariants over random seeds.

use dice_roller::bot::{ScriptedOpponent, TurnPolicy};
use dice_roller::core::{Action, GameConfig, GameError, GameRng, Phase, PlayerId};
use dice_roller::rules::{GameEngine, GameEvent};
use proptest::prelude::*;

fn started_engine(seed: u64, winning_score: i64) -> GameEngine {
    let mut engine = GameEngine::new(&GameConfig::default().with_seed(seed).with_winning_score(winning_score));
    engine.start();
    engine
}

/// winningScore=3 and a (1,2) roll wins on the spot.
#[test]
fn test_exact_hit_on_first_roll_wins() {
    let mut engine = started_engine(1, 3);

    let events = engine.roll_with(1, 2).unwrap();

    assert!(events.contains(&GameEvent::RoundWon {
        player: PlayerId::FIRST,
        name: "Player 1".to_string(),
        wins: 1,
    }));
    assert_eq!(engine.state().phase(), Phase::NotStarted);
    assert_eq!(engine.state().players[PlayerId::FIRST].wins, 1);
}

/// winningScore=4 with (2,1) then (1,2) lands on 6 and does not win.
#[test]
fn test_overshooting_target_never_wins() {
    let mut engine = started_engine(1, 4);

    engine.roll_with(2, 1).unwrap();
    assert_eq!(engine.state().players[PlayerId::FIRST].current, 3);

    let events = engine.roll_with(1, 2).unwrap();
    assert_eq!(engine.state().players[PlayerId::FIRST].current, 6);
    assert!(!events.iter().any(|e| matches!(e, GameEvent::RoundWon { .. })));
    assert_eq!(engine.state().phase(), Phase::InProgress);
}

/// Double six with 50 banked: back to zero, turn passes, no win.
#[test]
fn test_double_six_with_banked_score() {
    let mut engine = started_engine(1, 62);
    for _ in 0..5 {
        engine.roll_with(5, 5).unwrap();
    }
    assert_eq!(engine.state().players[PlayerId::FIRST].current, 50);

    engine.roll_with(6, 6).unwrap();

    assert_eq!(engine.state().players[PlayerId::FIRST].current, 0);
    assert_eq!(engine.state().players[PlayerId::FIRST].wins, 0);
    assert_eq!(engine.state().active_player, PlayerId::SECOND);
    assert_eq!(engine.state().phase(), Phase::InProgress);
}

#[test]
fn test_wins_accumulate_across_rounds() {
    let mut engine = started_engine(1, 4);

    engine.roll_with(2, 2).unwrap();
    engine.start();
    engine.hold().unwrap();
    engine.roll_with(1, 3).unwrap();
    engine.start();
    engine.roll_with(3, 1).unwrap();

    assert_eq!(engine.state().players[PlayerId::FIRST].wins, 2);
    assert_eq!(engine.state().players[PlayerId::SECOND].wins, 1);
}

#[test]
fn test_second_player_can_win() {
    let mut engine = started_engine(1, 10);
    engine.roll_with(4, 4).unwrap();
    engine.hold().unwrap();

    engine.roll_with(5, 5).unwrap();

    let state = engine.state();
    assert_eq!(state.players[PlayerId::SECOND].wins, 1);
    assert_eq!(state.players[PlayerId::FIRST].wins, 0);
    assert_eq!(state.players[PlayerId::FIRST].current, 0);
    assert_eq!(state.active_player, PlayerId::FIRST);
}

#[test]
fn test_toggle_only_before_start() {
    let mut engine = GameEngine::new(&GameConfig::default().with_seed(1));
    engine.toggle_scripted();
    assert!(engine.state().players[PlayerId::SECOND].is_scripted);

    engine.start();
    assert!(engine.toggle_scripted().is_empty());
    assert!(engine.state().players[PlayerId::SECOND].is_scripted);

    engine.restart();
    assert!(!engine.state().scripted_enabled());
}

#[test]
fn test_winning_score_bounds() {
    let mut engine = GameEngine::new(&GameConfig::default().with_seed(1));
    for (requested, expected) in [(1, 2), (0, 2), (-10, 2), (150, 150)] {
        engine.set_winning_score(requested);
        assert_eq!(engine.state().winning_score, expected);
    }
}

#[test]
fn test_scripted_round_against_human() {
    let mut engine = GameEngine::new(&GameConfig::default().with_seed(11).with_winning_score(30).with_scripted(true));
    let mut bot = ScriptedOpponent::new(5, GameRng::new(11).for_context("bot"));
    engine.start();

    let mut moves = 0;
    let mut bot_moves = 0;
    while engine.state().phase() == Phase::InProgress && moves < 10_000 {
        let action = if engine.state().active_is_scripted() {
            bot_moves += 1;
            bot.decide(engine.state()).expect("scripted seat is active")
        } else if engine.state().active_current() < 15 {
            Action::Roll
        } else {
            Action::Hold
        };
        engine.apply(action).unwrap();
        moves += 1;
    }

    let state = engine.state();
    assert_eq!(state.phase(), Phase::NotStarted, "round should end in a win");
    assert!(bot_moves > 0);
    assert_eq!(state.players[PlayerId::FIRST].wins + state.players[PlayerId::SECOND].wins, 1);
    assert!(!state.scripted_enabled());
    assert!(state.history.is_empty());
}

#[test]
fn test_restart_then_roll_is_refused() {
    let mut engine = started_engine(1, 100);
    engine.restart();
    assert!(matches!(engine.roll(), Err(GameError::NotStarted)));
}

proptest! {
    /// Scores only grow within a turn, and every reset lands on exactly zero.
    #[test]
    fn prop_current_monotone_within_turn(seed in any::<u64>(), target in 2i64..200) {
        let mut engine = started_engine(seed, target);

        for _ in 0..200 {
            let before = engine.state().clone();
            let events = engine.roll().unwrap();
            let after = engine.state();
            let player = before.active_player;

            let GameEvent::Rolled { dice, .. } = events[0].clone() else {
                panic!("roll must report its dice first");
            };
            prop_assert!((1..=6).contains(&dice.first()) && (1..=6).contains(&dice.second()));

            if dice.is_double_six() {
                prop_assert_eq!(after.players[player].current, 0);
                prop_assert_eq!(after.players[player].wins, before.players[player].wins);
                prop_assert_eq!(after.active_player, player.other());
            } else if before.players[player].current + dice.sum() == before.winning_score {
                prop_assert_eq!(after.players[player].wins, before.players[player].wins + 1);
                prop_assert_eq!(after.phase(), Phase::NotStarted);
                engine.start();
            } else {
                prop_assert_eq!(after.players[player].current, before.players[player].current + dice.sum());
                prop_assert_eq!(after.active_player, player);
            }

            let other = player.other();
            prop_assert_eq!(engine.state().players[other].wins, before.players[other].wins);
        }
    }

    /// Scripted turns never exceed the roll cap and always end the turn.
    #[test]
    fn prop_scripted_turn_bounded(seed in any::<u64>(), cap in 0u32..8) {
        let mut engine = GameEngine::new(&GameConfig::default().with_seed(seed).with_winning_score(1000).with_scripted(true));
        let mut bot = ScriptedOpponent::new(cap, GameRng::new(seed).for_context("bot"));
        engine.start();
        engine.hold().unwrap();

        let mut rolls = 0;
        while engine.state().active_is_scripted() {
            let action = bot.decide(engine.state()).unwrap();
            if action == Action::Roll {
                rolls += 1;
            }
            prop_assert!(rolls <= cap);
            engine.apply(action).unwrap();
        }
        prop_assert_eq!(engine.state().active_player, PlayerId::FIRST);
    }
}
