//! Property-based tests for aggregation and finalization invariants.

use proptest::prelude::*;

use crate::config::RulesConfig;
use crate::domain::aggregation::aggregate;
use crate::domain::finalization::{decide_finalization, FinalizeDecision};
use crate::domain::{test_gens, test_prelude};

const RULES: RulesConfig = RulesConfig::STANDARD;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: per round, the sum of round values equals
    /// sum(cards played) - 2 * sum(blitz pile remaining)
    #[test]
    fn prop_round_sum_identity(game in test_gens::game()) {
        let standings = aggregate(&RULES, &game);
        for (pos, round) in game.rounds.iter().enumerate() {
            let values: i32 = standings.players.iter().map(|p| p.per_round_values[pos]).sum();
            let cards: i32 = round.scores.iter().map(|s| s.total_cards_played).sum();
            let blitz: i32 = round.scores.iter().map(|s| s.blitz_pile_remaining).sum();
            prop_assert_eq!(values, cards - 2 * blitz, "round {}", round.index);
        }
    }

    /// Property: aggregation is pure - same snapshot, same output, snapshot untouched
    #[test]
    fn prop_aggregation_is_pure(game in test_gens::game()) {
        let before = game.clone();
        let first = aggregate(&RULES, &game);
        let second = aggregate(&RULES, &game);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&game, &before);
    }

    /// Property: running totals are prefix sums of round values and can decrease
    #[test]
    fn prop_running_totals_are_prefix_sums(game in test_gens::game()) {
        let standings = aggregate(&RULES, &game);
        for player in &standings.players {
            prop_assert_eq!(player.per_round_values.len(), game.rounds.len());
            prop_assert_eq!(player.running_totals.len(), game.rounds.len());
            let mut acc = 0;
            for (value, running) in player.per_round_values.iter().zip(&player.running_totals) {
                let prev = acc;
                acc += value;
                prop_assert_eq!(acc, *running);
                if *value < 0 {
                    prop_assert!(acc < prev, "negative round must lower the total");
                }
            }
            prop_assert_eq!(acc, player.total);
        }
    }

    /// Property: leaders are exactly the players holding the maximum total
    #[test]
    fn prop_leaders_hold_max_total(game in test_gens::game()) {
        let standings = aggregate(&RULES, &game);
        let max = standings.max_total();
        for player in &standings.players {
            let expected = !game.rounds.is_empty() && Some(player.total) == max;
            prop_assert_eq!(player.is_leader, expected);
        }
    }

    /// Property: each crossing is the first round a player reached the threshold
    #[test]
    fn prop_crossings_are_first_crossings(game in test_gens::game()) {
        let standings = aggregate(&RULES, &game);
        for crossing in &standings.crossings {
            let player = standings.get(&crossing.player).expect("crossing player on roster");
            let idx = crossing.round_position - 1;
            prop_assert_eq!(player.running_totals[idx], crossing.total_at_crossing);
            prop_assert!(crossing.total_at_crossing >= RULES.win_threshold);
            prop_assert!(player.running_totals[..idx].iter().all(|t| *t < RULES.win_threshold));
        }
        for player in &standings.players {
            let ever_crossed = player.running_totals.iter().any(|t| *t >= RULES.win_threshold);
            let recorded = standings.crossings.iter().filter(|c| c.player == player.player_id).count();
            prop_assert_eq!(recorded, usize::from(ever_crossed));
        }
    }

    /// Property: a finished game never finishes again, whatever the totals
    #[test]
    fn prop_finished_game_never_refinishes(mut game in test_gens::game()) {
        game.is_finished = true;
        let standings = aggregate(&RULES, &game);
        prop_assert_eq!(decide_finalization(&game, &standings), FinalizeDecision::stay_active());
    }

    /// Property: the decision is stable and picks a crosser with the top crossing total
    #[test]
    fn prop_decision_is_stable(game in test_gens::game()) {
        let standings = aggregate(&RULES, &game);
        let decision = decide_finalization(&game, &standings);
        prop_assert_eq!(decision, decide_finalization(&game, &aggregate(&RULES, &game)));
        prop_assert_eq!(decision.should_finish, !standings.crossings.is_empty());
        if let Some(winner) = decision.winner {
            prop_assert!(standings.crossings.iter().any(|c| c.player == winner));
            let best = standings
                .crossings
                .iter()
                .filter_map(|c| standings.total_of(&c.player))
                .max();
            prop_assert_eq!(standings.total_of(&winner), best);
        }
    }
}
