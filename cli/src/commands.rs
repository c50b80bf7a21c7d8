pub mod list;
pub mod today;

use anki_today_common::config::{Config, DEFAULT_HOST, DEFAULT_PORT, FieldPair, FieldPairs};
use anki_today_core::aggregator::DEFAULT_LIST_LIMIT;
use anki_today_core::connect::AnkiConnectClient;
use anki_today_core::query::CardQuery;
use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "anki-today")]
#[command(about = "Summarize the Anki cards waiting for review.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Host running the AnkiConnect add-on
    #[arg(long, global = true, default_value = DEFAULT_HOST)]
    pub host: String,

    /// AnkiConnect port
    #[arg(long, global = true, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Show the back of every card
    #[arg(short, long, global = true)]
    pub answers: bool,

    /// Note field used as the front, tried before "Front"
    #[arg(long, global = true, requires = "back_field")]
    pub front_field: Option<String>,

    /// Note field used as the back, tried before "Back"
    #[arg(long, global = true, requires = "front_field")]
    pub back_field: Option<String>,

    /// Leave unseen cards out of today's review
    #[arg(long, global = true)]
    pub no_new: bool,

    /// More diagnostics (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the cards due for review today
    #[command(alias = "t")]
    Today {
        /// Only this deck and its sub-decks
        #[arg(short, long)]
        deck: Option<String>,
    },
    /// Browse cards regardless of when they are due
    #[command(alias = "l")]
    List {
        /// Cards per deck
        #[arg(short, long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: usize,
        /// Cards to skip in each deck
        #[arg(short, long, default_value_t = 0)]
        offset: usize,
        /// Only this deck and its sub-decks
        #[arg(short, long)]
        deck: Option<String>,
        /// Pick a random sample instead of the first cards
        #[arg(short, long)]
        random: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let mut field_pairs = FieldPairs::default();
        if let (Some(front), Some(back)) = (&self.front_field, &self.back_field) {
            field_pairs = field_pairs.with_primary(FieldPair::new(front, back));
        }

        Config {
            host: self.host.clone(),
            port: self.port,
            field_pairs,
            include_new: !self.no_new,
            show_answers: self.answers,
            verbosity: self.verbose,
        }
    }
}

/// Builds the query layer and probes the endpoint before any real work.
pub fn connect(cfg: &Config) -> anyhow::Result<CardQuery> {
    let client = AnkiConnectClient::new(cfg)?;
    let query = CardQuery::new(Box::new(client));

    match query.version() {
        Ok(version) if version > 0 => {
            info!("Connected to AnkiConnect v{version}");
            Ok(query)
        }
        Ok(_) => unreachable_anki(cfg),
        Err(err) => {
            debug!(error = %err, "connectivity probe failed");
            unreachable_anki(cfg)
        }
    }
}

fn unreachable_anki(cfg: &Config) -> anyhow::Result<CardQuery> {
    anyhow::bail!(
        "could not connect to Anki at {}\n\
         Please make sure that:\n  \
         1. Anki is running\n  \
         2. the AnkiConnect add-on is installed\n  \
         3. no firewall is blocking port {}",
        cfg.endpoint(),
        cfg.port
    )
}
