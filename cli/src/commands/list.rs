use std::time::Instant;

use anki_today_common::config::Config;
use anki_today_common::presenter::ReviewPresenter;
use anki_today_core::aggregator::{ListOptions, ReviewAggregator};
use anki_today_core::query::CardQuery;
use tracing::info;

use crate::terminal::{presenter::ConsolePresenter, spinner};

pub fn list(query: CardQuery, options: ListOptions, cfg: &Config) -> anyhow::Result<()> {
    let aggregator = ReviewAggregator::new(query, cfg)
        .with_progress(Box::new(|deck: &str| spinner::report_deck(deck)));

    spinner::start("Listing cards...");
    let start_time: Instant = Instant::now();
    let result = aggregator.list_all(&options);
    spinner::finish();

    let review = result?;
    info!(
        decks = review.decks().len(),
        cards = review.total_cards(),
        limit = options.limit,
        offset = options.offset,
        "Listed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    ConsolePresenter::listing(cfg.show_answers).present(&review);
    Ok(())
}
