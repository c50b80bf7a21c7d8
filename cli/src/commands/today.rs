use std::time::Instant;

use anki_today_common::config::Config;
use anki_today_common::presenter::ReviewPresenter;
use anki_today_core::aggregator::ReviewAggregator;
use anki_today_core::classifier::ReviewClock;
use anki_today_core::query::CardQuery;
use tracing::info;

use crate::terminal::{presenter::ConsolePresenter, spinner};

pub fn today(query: CardQuery, deck: Option<&str>, cfg: &Config) -> anyhow::Result<()> {
    let aggregator = ReviewAggregator::new(query, cfg)
        .with_progress(Box::new(|deck: &str| spinner::report_deck(deck)));

    spinner::start("Looking for due cards...");
    let start_time: Instant = Instant::now();
    let result = aggregator.aggregate(deck, ReviewClock::now());
    spinner::finish();

    let review = result?;
    info!(
        decks = review.decks().len(),
        cards = review.total_cards(),
        "Collected in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    let presenter: &dyn ReviewPresenter = &ConsolePresenter::today(cfg.show_answers);
    presenter.present(&review);
    Ok(())
}
