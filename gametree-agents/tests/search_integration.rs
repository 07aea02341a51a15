//! End-to-end checks of the search strategies over real isolation boards.

use gametree_minimax::game::{next_agent_id, GameState};
use gametree_minimax::strategy::{SearchAgent, Strategy};

use gametree_agents::isolation::{IsolationState, Position};
use gametree_agents::wire::{self, WireState};
use gametree_agents::{factory_for_name, GameAgent};

fn duel() -> IsolationState {
    wire::from_json(include_str!("../fixtures/duel.json")).unwrap()
}

fn three_agents() -> IsolationState {
    wire::from_json(include_str!("../fixtures/three_agents.json")).unwrap()
}

#[test]
fn fixtures_parse_and_round_trip() {
    for state in [duel(), three_agents()] {
        let wire = WireState::from_state(&state);
        let json = serde_json::to_string(&wire).unwrap();
        assert_eq!(wire::from_json(&json).unwrap(), state);
    }
}

#[test]
fn turn_order_rotates_through_the_registry() {
    // The three-agent fixture was produced by agent 2, so the searcher is up.
    let state = three_agents();
    assert_eq!(next_agent_id(&state), Ok(0));

    let step = state.legal_actions(0)[0];
    let state = state.apply_action(0, &step);
    assert_eq!(next_agent_id(&state), Ok(1));

    let step = state.legal_actions(1)[0];
    let state = state.apply_action(1, &step);
    assert_eq!(next_agent_id(&state), Ok(2));
}

#[test]
fn pruning_never_changes_the_decision_on_real_boards() {
    for state in [duel(), three_agents()] {
        for max_depth in [Some(1), Some(2), Some(3)] {
            let plain = SearchAgent::new(0, Strategy::Minimax, "plain");
            let pruned = SearchAgent::new(0, Strategy::AlphaBeta, "pruned");
            let max_n = SearchAgent::new(0, Strategy::MaxN, "max-n");

            let chosen = plain.next_action(&state, max_depth).unwrap();
            assert_eq!(pruned.next_action(&state, max_depth).unwrap(), chosen);
            assert_eq!(max_n.next_action(&state, max_depth).unwrap(), chosen);

            let plain_options = plain.evaluate_actions(&state, max_depth).unwrap();
            let pruned_options = pruned.evaluate_actions(&state, max_depth).unwrap();
            for ((a, plain_sub), (b, pruned_sub)) in
                plain_options.iter().zip(pruned_options.iter())
            {
                assert_eq!(a, b);
                assert_eq!(plain_sub.score(), pruned_sub.score());
            }
        }
    }
}

#[test]
fn every_strategy_is_deterministic_on_real_boards() {
    let state = duel();
    for strategy in Strategy::ALL {
        let agent = SearchAgent::new(0, strategy, "repeatable");
        let first = agent.next_action(&state, Some(2)).unwrap();
        let second = agent.next_action(&state, Some(2)).unwrap();
        assert_eq!(first, second, "strategy {}", strategy);
    }
}

#[test]
fn all_strategies_take_the_smothering_step() {
    // A 4x1 corridor: stepping to (2,0) walls the opponent in immediately,
    // while stepping to (0,0) lets it escape and lose the race.
    let state = IsolationState::new(
        4,
        1,
        &[(0, Position::at(1, 0)), (1, Position::at(3, 0))],
    )
    .unwrap();

    for strategy in Strategy::ALL {
        let agent = SearchAgent::new(0, strategy, "closer");
        assert_eq!(
            agent.next_action(&state, None).unwrap(),
            Position::at(2, 0),
            "strategy {}",
            strategy
        );
    }
}

#[test]
fn factory_built_agents_decide_like_hand_built_ones() {
    let state = duel();
    let factory = factory_for_name("alphabeta").unwrap();
    let boxed = factory.build(0);

    let direct = SearchAgent::new(0, Strategy::AlphaBeta, "alphabeta");
    assert_eq!(
        boxed.next_action(&state, Some(2)).unwrap(),
        GameAgent::next_action(&direct, &state, Some(2)).unwrap()
    );
}

#[test]
fn random_factory_agents_stay_within_the_legal_set() {
    let state = duel();
    let legal = state.legal_actions(0);
    let baseline = factory_for_name("random").unwrap().build(0);

    for _ in 0..25 {
        let action = baseline.next_action(&state, None).unwrap();
        assert!(legal.contains(&action));
    }
}
