mod commands;
mod terminal;

use anki_today_core::aggregator::ListOptions;
use commands::{CommandLine, Commands, list, today};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(cfg.verbosity);
    print::banner();

    let query = commands::connect(&cfg)?;

    match commands.command {
        Commands::Today { deck } => today::today(query, deck.as_deref(), &cfg),
        Commands::List {
            limit,
            offset,
            deck,
            random,
        } => {
            let options = ListOptions {
                limit,
                offset,
                deck,
                randomize: random,
            };
            list::list(query, options, &cfg)
        }
    }
}
