//! Property tests for the card order, the deal, the agent strategy and
//! game termination.

use proptest::prelude::*;
use proptest::sample::subsequence;
use rustc_hash::FxHashSet;

use rust_shedding::agent::Agent;
use rust_shedding::arbiter::{play, GameEvent};
use rust_shedding::cards::{Card, Hand, OPENING_CARD};
use rust_shedding::core::{AgentId, AgentMap, GameRng};
use rust_shedding::deck::Deal;
use rust_shedding::transport::{Request, Response};

fn all_cards() -> Vec<Card> {
    Card::deck().collect()
}

fn any_card() -> impl Strategy<Value = Card> {
    (0usize..52).prop_map(|i| all_cards()[i])
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Distinct cards never share a value.
    #[test]
    fn prop_value_is_injective(a in any_card(), b in any_card()) {
        prop_assert_eq!(a == b, a.value() == b.value());
        prop_assert_eq!(a.cmp(&b), a.value().cmp(&b.value()));
    }

    /// Hands are disjoint and together hold exactly the distinct input cards.
    #[test]
    fn prop_deal_partitions_input(
        input in prop::collection::vec(any_card(), 0..80),
        players in 1usize..=8,
    ) {
        let distinct: FxHashSet<Card> = input.iter().copied().collect();

        match Deal::prepare(input.clone(), players) {
            Ok(deal) => {
                let mut union: Vec<Card> = Vec::new();
                for (_, hand) in deal.hands().iter() {
                    union.extend(hand.iter());
                }
                let total = union.len();
                let as_set: FxHashSet<Card> = union.into_iter().collect();

                prop_assert_eq!(total, as_set.len());
                prop_assert_eq!(&as_set, &distinct);
                prop_assert_eq!(deal.discarded().len(), input.len() - distinct.len());

                let sizes: Vec<usize> = deal.hands().iter().map(|(_, h)| h.len()).collect();
                let max = *sizes.iter().max().unwrap();
                let min = *sizes.iter().min().unwrap();
                prop_assert!(max - min <= 1);
            }
            Err(_) => prop_assert!(distinct.len() < players),
        }
    }

    /// BEAT plays the smallest card above the reference, and passes only
    /// when there is none.
    #[test]
    fn prop_beat_is_minimal(
        cards in subsequence(all_cards(), 1..=20),
        reference in any_card(),
    ) {
        let hand: Hand = cards.iter().copied().collect();
        let mut agent = Agent::new(AgentId::new(0), hand);
        let expected = cards.iter().copied().filter(|c| c.beats(reference)).min();

        match agent.respond(Request::Beat(reference)) {
            Response::Played { card, complete } => {
                prop_assert_eq!(Some(card), expected);
                prop_assert!(card.beats(reference));
                prop_assert_eq!(complete, cards.len() == 1);
                prop_assert!(!agent.hand().contains(card));
            }
            Response::Pass => {
                prop_assert_eq!(expected, None);
                prop_assert_eq!(agent.hand().len(), cards.len());
            }
            Response::Complete => prop_assert!(false, "non-empty hand answered Complete"),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Every valid deal with two or more agents finishes with exactly one
    /// loser, and completed agents never act again.
    #[test]
    fn prop_game_terminates_with_one_loser(
        seed in any::<u64>(),
        players in 2usize..=6,
        extra in 0usize..=46,
    ) {
        let mut cards = all_cards();
        GameRng::new(seed).shuffle(&mut cards);
        cards.truncate(players + extra);
        if !cards.contains(&OPENING_CARD) {
            cards[0] = OPENING_CARD;
        }

        let deal = Deal::prepare(cards.clone(), players).unwrap();
        let outcome = runtime().block_on(play(deal)).unwrap();
        let record = &outcome.record;

        let loser = record.loser.unwrap();
        prop_assert_eq!(record.completion_order.len(), players - 1);
        prop_assert!(!record.completion_order.contains(&loser));
        prop_assert_eq!(outcome.reports.len(), players);

        let losers = outcome.events().iter().filter(|e| matches!(e, GameEvent::Loser { .. })).count();
        let winners = outcome.events().iter().filter(|e| matches!(e, GameEvent::Winner { .. })).count();
        prop_assert_eq!(losers, 1);
        prop_assert_eq!(winners, 1);

        let mut done = AgentMap::with_value(players, false);
        for event in outcome.events() {
            match event {
                GameEvent::Played { agent, .. } | GameEvent::Passed { agent } => {
                    prop_assert!(!done[*agent]);
                }
                GameEvent::Completed { agent, .. } => done[*agent] = true,
                _ => {}
            }
        }

        let mut seen: Vec<Card> = record.plays().map(|(_, c)| c).collect();
        seen.extend_from_slice(outcome.remaining(loser).unwrap());
        seen.sort();
        cards.sort();
        prop_assert_eq!(seen, cards);
    }
}
