use crate::config::RulesConfig;
use crate::domain::aggregation::aggregate;
use crate::domain::finalization::{decide_finalization, FinalizeDecision};
use crate::domain::test_prelude::{entry, game_with_players, guest, push_round, reg};
use crate::domain::{Game, Player};

const RULES: RulesConfig = RulesConfig::STANDARD;

fn decide(game: &Game) -> FinalizeDecision {
    decide_finalization(game, &aggregate(&RULES, game))
}

#[test]
fn below_threshold_stays_active() {
    let mut game = game_with_players(2);
    push_round(&mut game, &[entry(reg(1), 0, 40), entry(reg(2), 0, 34)]);
    assert_eq!(decide(&game), FinalizeDecision::stay_active());
}

#[test]
fn crossing_threshold_finishes_with_leader() {
    // Scenario D: P1 goes 60 -> 70 -> 80 while P2 holds at 50
    let mut game = game_with_players(2);
    push_round(&mut game, &[entry(reg(1), 0, 30), entry(reg(2), 0, 25)]);
    push_round(&mut game, &[entry(reg(1), 0, 30), entry(reg(2), 0, 25)]);
    push_round(&mut game, &[entry(reg(1), 0, 10), entry(reg(2), 1, 2)]);
    assert_eq!(decide(&game), FinalizeDecision::stay_active());
    push_round(&mut game, &[entry(reg(1), 0, 10), entry(reg(2), 1, 2)]);

    let standings = aggregate(&RULES, &game);
    assert_eq!(standings.total_of(&reg(1).key()), Some(80));
    assert_eq!(standings.total_of(&reg(2).key()), Some(50));
    assert_eq!(
        decide_finalization(&game, &standings),
        FinalizeDecision::finish(reg(1).key())
    );
}

#[test]
fn simultaneous_tie_is_broken_by_lowest_key() {
    // Scenario E: P1 and P2 both land on exactly 75 in the same round
    let mut game = game_with_players(3);
    push_round(
        &mut game,
        &[entry(reg(1), 0, 40), entry(reg(2), 0, 40), entry(reg(3), 0, 10)],
    );
    push_round(
        &mut game,
        &[entry(reg(1), 0, 35), entry(reg(2), 0, 35), entry(reg(3), 0, 10)],
    );

    let standings = aggregate(&RULES, &game);
    assert_eq!(standings.crossings.len(), 2);
    let first = decide_finalization(&game, &standings);
    assert_eq!(first, FinalizeDecision::finish(reg(1).key()));
    for _ in 0..10 {
        assert_eq!(decide(&game), first);
    }
}

#[test]
fn tie_break_ignores_roster_order() {
    let mut game = Game::new(
        4,
        vec![
            Player::guest(2, "Guest"),
            Player::registered(8, "Late registrant"),
        ],
    );
    push_round(&mut game, &[entry(guest(2), 0, 40), entry(reg(8), 0, 40)]);
    push_round(&mut game, &[entry(guest(2), 0, 36), entry(reg(8), 0, 36)]);
    assert_eq!(decide(&game), FinalizeDecision::finish(reg(8).key()));
}

#[test]
fn highest_total_among_crossers_wins() {
    let mut game = game_with_players(2);
    push_round(&mut game, &[entry(reg(1), 0, 40), entry(reg(2), 0, 38)]);
    push_round(&mut game, &[entry(reg(1), 0, 36), entry(reg(2), 0, 40)]);
    assert_eq!(decide(&game), FinalizeDecision::finish(reg(2).key()));
}

#[test]
fn finished_game_is_a_no_op() {
    let mut game = game_with_players(2);
    push_round(&mut game, &[entry(reg(1), 0, 40), entry(reg(2), 0, 40)]);
    push_round(&mut game, &[entry(reg(1), 0, 40), entry(reg(2), 0, 39)]);
    game.is_finished = true;
    game.winner = Some(reg(2).key());

    assert_eq!(decide(&game), FinalizeDecision::stay_active());
}

#[test]
fn decision_serializes_without_empty_winner() {
    let json = serde_json::to_value(FinalizeDecision::stay_active()).expect("serialize");
    assert_eq!(json, serde_json::json!({"should_finish": false}));
    let json = serde_json::to_value(FinalizeDecision::finish(guest(4).key())).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({"should_finish": true, "winner": "guest:4"})
    );
}
