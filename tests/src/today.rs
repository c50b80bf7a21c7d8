#![cfg(test)]
use std::cell::RefCell;
use std::rc::Rc;

use anki_today_common::config::Config;
use anki_today_common::models::TodayReview;
use anki_today_core::query;

use crate::fixtures::*;

fn programming_gateway() -> ScriptedGateway {
    let day = clock().today;
    ScriptedGateway::new()
        .decks(&["Programming"])
        .due("Programming", &[1, 2, 3])
        .card(1, new_card(1, "Programming", "What is Python?", "A programming language"))
        .card(2, learning_card(2, "Programming", NOW_MILLIS - 60_000, "What is a decorator?"))
        .card(3, review_card(3, "Programming", day - 1, 0, "What is dependency injection?"))
}

#[test]
fn one_deck_with_a_card_in_every_stage() {
    let review = programming_gateway()
        .into_aggregator(&Config::default())
        .aggregate(None, clock())
        .unwrap();

    assert_eq!(review.decks().len(), 1);
    let deck = &review.decks()[0];
    assert_eq!(deck.deck_name(), "Programming");
    assert_eq!(deck.new_cards().len(), 1);
    assert_eq!(deck.learning_cards().len(), 1);
    assert_eq!(deck.review_cards().len(), 1);
    assert_eq!(review.total_cards(), 3);

    let python = &deck.new_cards()[0];
    assert_eq!(python.front, "What is Python?");
    assert_eq!(python.back.as_deref(), Some("A programming language"));
}

#[test]
fn deck_with_nothing_due_is_left_out() {
    let gateway = ScriptedGateway::new().decks(&["Empty Deck"]).due("Empty Deck", &[]);
    let calls = gateway.calls();

    let review = gateway
        .into_aggregator(&Config::default())
        .aggregate(None, clock())
        .unwrap();

    assert!(review.is_empty());
    assert_eq!(review.total_cards(), 0);
    assert_eq!(count_calls(&calls, "cardsInfo"), 0);
}

#[test]
fn empty_deck_does_not_affect_the_others() {
    let review = programming_gateway()
        .decks(&["Empty Deck", "Programming"])
        .due("Empty Deck", &[])
        .into_aggregator(&Config::default())
        .aggregate(None, clock())
        .unwrap();

    let names: Vec<&str> = review.decks().iter().map(|d| d.deck_name()).collect();
    assert_eq!(names, vec!["Programming"]);
    assert_eq!(review.total_cards(), 3);
}

#[test]
fn learning_card_due_later_today_is_left_out() {
    let review = ScriptedGateway::new()
        .decks(&["Rust"])
        .due("Rust", &[7, 8])
        .card(7, learning_card(7, "Rust", NOW_MILLIS + 3_600_000, "What is Pin?"))
        .card(8, new_card(8, "Rust", "What is a trait object?", "dyn Trait"))
        .into_aggregator(&Config::default())
        .aggregate(None, clock())
        .unwrap();

    let deck = &review.decks()[0];
    assert!(deck.learning_cards().is_empty());
    assert_eq!(deck.total_cards(), 1);
}

#[test]
fn deck_whose_cards_are_all_left_out_disappears() {
    let review = ScriptedGateway::new()
        .decks(&["Rust"])
        .due("Rust", &[7])
        .card(7, learning_card(7, "Rust", NOW_MILLIS + 3_600_000, "What is Pin?"))
        .into_aggregator(&Config::default())
        .aggregate(None, clock())
        .unwrap();

    assert!(review.is_empty());
}

#[test]
fn review_card_in_filtered_deck_uses_original_due() {
    let day = clock().today;
    let review = ScriptedGateway::new()
        .decks(&["History"])
        .due("History", &[4, 5])
        .card(4, review_card(4, "History", day + 100, day, "Who was Julius Caesar?"))
        .card(5, review_card(5, "History", day - 100, day + 1, "When did Rome fall?"))
        .into_aggregator(&Config::default())
        .aggregate(None, clock())
        .unwrap();

    let deck = &review.decks()[0];
    assert_eq!(fronts(deck.review_cards()), ["Who was Julius Caesar?".to_string()].into());
}

#[test]
fn sub_decks_fold_into_one_top_level_entry() {
    let gateway = ScriptedGateway::new()
        .decks(&["Lang", "Lang::French", "Lang::Spanish", "Default"])
        .due("Lang", &[1, 2])
        .card(1, new_card(1, "Lang::French", "le chien", "the dog"))
        .card(2, new_card(2, "Lang::Spanish", "el gato", "the cat"));
    let calls = gateway.calls();

    let review = gateway
        .into_aggregator(&Config::default())
        .aggregate(None, clock())
        .unwrap();

    assert_eq!(review.decks().len(), 1);
    assert_eq!(review.decks()[0].deck_name(), "Lang");
    assert_eq!(review.decks()[0].new_cards().len(), 2);
    assert_eq!(
        searches(&calls),
        vec![query::due_search("Lang", true), query::due_search("Default", true)]
    );
}

#[test]
fn deck_filter_skips_deck_listing() {
    let gateway = programming_gateway().due("Lang::French", &[1]);
    let calls = gateway.calls();

    let review = gateway
        .into_aggregator(&Config::default())
        .aggregate(Some("Lang::French"), clock())
        .unwrap();

    assert_eq!(count_calls(&calls, "deckNames"), 0);
    assert_eq!(review.decks().len(), 1);
    assert_eq!(review.decks()[0].deck_name(), "Lang::French");
}

#[test]
fn excluding_new_cards_narrows_the_search() {
    let gateway = ScriptedGateway::new().decks(&["Programming"]);
    let calls = gateway.calls();
    let cfg = Config {
        include_new: false,
        ..Config::default()
    };

    gateway.into_aggregator(&cfg).aggregate(None, clock()).unwrap();

    assert_eq!(searches(&calls), vec!["deck:\"Programming\" is:due".to_string()]);
}

#[test]
fn repeated_runs_give_the_same_report() {
    let first = programming_gateway()
        .into_aggregator(&Config::default())
        .aggregate(None, clock())
        .unwrap();
    let second = programming_gateway()
        .into_aggregator(&Config::default())
        .aggregate(None, clock())
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn totals_add_up_across_decks() {
    let day = clock().today;
    let review: TodayReview = programming_gateway()
        .decks(&["Programming", "History"])
        .due("History", &[10, 11])
        .card(10, review_card(10, "History", day, 0, "Who was Julius Caesar?"))
        .card(11, new_card(11, "History", "What was the Magna Carta?", "A charter"))
        .into_aggregator(&Config::default())
        .aggregate(None, clock())
        .unwrap();

    for deck in review.decks() {
        assert_eq!(
            deck.total_cards(),
            deck.new_cards().len() + deck.learning_cards().len() + deck.review_cards().len()
        );
    }
    let summed: usize = review.decks().iter().map(|deck| deck.total_cards()).sum();
    assert_eq!(review.total_cards(), summed);
    assert_eq!(review.total_cards(), 5);
}

#[test]
fn progress_reports_every_candidate_deck() {
    let seen: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = seen.clone();

    programming_gateway()
        .decks(&["Programming", "Programming::Rust", "History"])
        .into_aggregator(&Config::default())
        .with_progress(Box::new(move |deck: &str| sink.borrow_mut().push(deck.to_string())))
        .aggregate(None, clock())
        .unwrap();

    assert_eq!(*seen.borrow(), vec!["Programming", "History"]);
}
