//! # Review Aggregator
//!
//! Orchestrates the [`CardQuery`] and the [`classifier`] across every relevant
//! deck and assembles a [`TodayReview`].
//!
//! Failure policy:
//! * Deck enumeration failing aborts the run.
//! * A per-deck lookup failing skips that deck, unless the endpoint itself is
//!   gone ([`QueryError::is_transport`]), which aborts the run as well.

use std::collections::HashSet;

use anki_today_common::config::{Config, FieldPairs};
use anki_today_common::error::QueryError;
use anki_today_common::models::{CardStage, DeckCards, RawCardRecord, TodayReview};
use rand::seq::SliceRandom;
use tracing::{debug, trace};

use crate::classifier::{self, ReviewClock};
use crate::query::{self, CardQuery};

/// Separates the segments of a nested deck name, e.g. `Lang::French`.
pub const DECK_SEPARATOR: &str = "::";

pub const DEFAULT_LIST_LIMIT: usize = 20;

/// Top-level segment of a deck path.
pub fn top_level_name(deck: &str) -> &str {
    deck.split_once(DECK_SEPARATOR).map_or(deck, |(top, _)| top)
}

/// Folds deck paths onto their top-level names, keeping first-seen order.
pub fn fold_top_level<I>(decks: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    decks
        .into_iter()
        .map(|deck| top_level_name(deck.as_ref()).to_string())
        .filter(|top| seen.insert(top.clone()))
        .collect()
}

/// Parameters of the browsing mode. Pagination applies per deck.
#[derive(Clone, Debug)]
pub struct ListOptions {
    pub limit: usize,
    pub offset: usize,
    pub deck: Option<String>,
    /// Shuffle each deck's ids before paginating. Not seeded.
    pub randomize: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
            deck: None,
            randomize: false,
        }
    }
}

pub struct ReviewAggregator {
    query: CardQuery,
    field_pairs: FieldPairs,
    include_new: bool,
    on_deck: Option<Box<dyn Fn(&str)>>,
}

impl ReviewAggregator {
    pub fn new(query: CardQuery, cfg: &Config) -> Self {
        Self {
            query,
            field_pairs: cfg.field_pairs.clone(),
            include_new: cfg.include_new,
            on_deck: None,
        }
    }

    /// Registers a callback invoked with each deck name before it is queried.
    pub fn with_progress(mut self, on_deck: Box<dyn Fn(&str)>) -> Self {
        self.on_deck = Some(on_deck);
        self
    }

    /// Cards due at `clock`, grouped per top-level deck.
    ///
    /// With `filter_deck`, only that deck (and its sub-decks) is queried and
    /// the deck list is never fetched.
    pub fn aggregate(
        &self,
        filter_deck: Option<&str>,
        clock: ReviewClock,
    ) -> Result<TodayReview, QueryError> {
        let mut decks: Vec<DeckCards> = Vec::new();

        for deck in self.candidate_decks(filter_deck)? {
            self.report_progress(&deck);

            let ids = match self.query.find_due_card_ids(&deck, self.include_new) {
                Ok(ids) => ids,
                Err(err) => {
                    skip_deck(&deck, "findCards", err)?;
                    continue;
                }
            };

            if let Some(deck_cards) =
                self.build_deck(&deck, &ids, |record| classifier::classify(record, &clock))?
            {
                decks.push(deck_cards);
            }
        }

        Ok(TodayReview::new(decks))
    }

    /// Cards regardless of due date, `options.limit` per deck starting at
    /// `options.offset`.
    pub fn list_all(&self, options: &ListOptions) -> Result<TodayReview, QueryError> {
        let mut decks: Vec<DeckCards> = Vec::new();

        for deck in self.candidate_decks(options.deck.as_deref())? {
            self.report_progress(&deck);

            let mut ids = match self.query.find_card_ids(&query::deck_search(&deck)) {
                Ok(ids) => ids,
                Err(err) => {
                    skip_deck(&deck, "findCards", err)?;
                    continue;
                }
            };

            if options.randomize {
                ids.shuffle(&mut rand::rng());
            }

            let page: Vec<u64> = ids
                .into_iter()
                .skip(options.offset)
                .take(options.limit)
                .collect();

            if let Some(deck_cards) = self.build_deck(&deck, &page, classifier::lifecycle_stage)? {
                decks.push(deck_cards);
            }
        }

        Ok(TodayReview::new(decks))
    }

    fn candidate_decks(&self, filter_deck: Option<&str>) -> Result<Vec<String>, QueryError> {
        if let Some(deck) = filter_deck {
            return Ok(vec![deck.to_string()]);
        }

        let names = self.query.list_decks()?;
        let decks = fold_top_level(&names);
        debug!(found = names.len(), top_level = decks.len(), "resolved decks");
        Ok(decks)
    }

    /// Fetches `ids` and buckets them with `stage_of`. `None` when nothing is left.
    fn build_deck<F>(
        &self,
        deck: &str,
        ids: &[u64],
        stage_of: F,
    ) -> Result<Option<DeckCards>, QueryError>
    where
        F: Fn(&RawCardRecord) -> Option<CardStage>,
    {
        if ids.is_empty() {
            debug!(deck, "no matching cards");
            return Ok(None);
        }

        let records = match self.query.card_details(ids) {
            Ok(records) => records,
            Err(err) => {
                skip_deck(deck, "cardsInfo", err)?;
                return Ok(None);
            }
        };

        let mut builder = DeckCards::builder(deck);
        for record in &records {
            match stage_of(record) {
                Some(stage) => builder.push(stage, classifier::to_card(record, &self.field_pairs)),
                None => trace!(
                    deck,
                    card = ?record.card_id,
                    source = record.deck_name.as_deref().unwrap_or(deck),
                    queue = ?record.queue,
                    "card left out"
                ),
            }
        }

        Ok(builder.build())
    }

    fn report_progress(&self, deck: &str) {
        if let Some(on_deck) = &self.on_deck {
            on_deck(deck);
        }
    }
}

/// Absorbs a per-deck failure, unless the endpoint is unreachable.
fn skip_deck(deck: &str, action: &str, err: QueryError) -> Result<(), QueryError> {
    if err.is_transport() {
        return Err(err);
    }
    debug!(deck, action, error = %err, "skipping deck");
    Ok(())
}
