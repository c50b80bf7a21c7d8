use anki_today_common::models::{Card, CardStage, DeckCards, TodayReview};
use anki_today_common::presenter::ReviewPresenter;
use colored::*;

use crate::terminal::{colors, print};

const STAGES: [CardStage; 3] = [CardStage::New, CardStage::Learning, CardStage::Review];

/// Tree-style console rendering of a [`TodayReview`].
pub struct ConsolePresenter {
    show_answers: bool,
    title: &'static str,
    total_label: &'static str,
}

impl ConsolePresenter {
    pub fn today(show_answers: bool) -> Self {
        Self {
            show_answers,
            title: "today's review",
            total_label: "Total cards to review today",
        }
    }

    pub fn listing(show_answers: bool) -> Self {
        Self {
            show_answers,
            title: "card listing",
            total_label: "Total cards listed",
        }
    }

    pub fn render(&self, review: &TodayReview) -> Vec<String> {
        if review.is_empty() {
            return vec![
                print::header_line("nothing due"),
                "No cards to review today!".color(colors::TEXT_DEFAULT).to_string(),
                print::fat_separator_line(),
            ];
        }

        let mut lines: Vec<String> = vec![print::header_line(self.title)];
        for (idx, deck) in review.decks().iter().enumerate() {
            if idx > 0 {
                lines.push(String::new());
            }
            self.render_deck(idx, deck, &mut lines);
        }

        let total: ColoredString = review.total_cards().to_string().bold().green();
        lines.push(print::fat_separator_line());
        lines.push(print::centered(
            &format!("{}: {}", self.total_label, total).color(colors::TEXT_DEFAULT).to_string(),
        ));
        lines
    }

    fn render_deck(&self, idx: usize, deck: &DeckCards, lines: &mut Vec<String>) {
        let count = deck.total_cards();
        let unit = if count == 1 { "card" } else { "cards" };
        lines.push(print::tree_head(idx, deck.deck_name(), &format!("({count} {unit})")));

        let stages: Vec<CardStage> = STAGES
            .into_iter()
            .filter(|stage| !deck.cards(*stage).is_empty())
            .collect();

        for (i, stage) in stages.iter().enumerate() {
            let last = i + 1 == stages.len();
            let cards = deck.cards(*stage);
            lines.push(format!(
                " {} {}",
                print::branch(last),
                format!("{} ({})", stage_label(*stage), cards.len()).color(stage_color(*stage))
            ));
            for card in cards {
                self.render_card(card, print::stem(last), lines);
            }
        }
    }

    fn render_card(&self, card: &Card, stem: ColoredString, lines: &mut Vec<String>) {
        lines.push(format!(" {}  - {}", stem, card.front.color(colors::TEXT_DEFAULT)));
        if self.show_answers {
            let back = card.back.as_deref().unwrap_or("");
            lines.push(format!(" {}    ↳ {}", stem, back.color(colors::ANSWER)));
        }
    }
}

impl ReviewPresenter for ConsolePresenter {
    fn present(&self, review: &TodayReview) {
        for line in self.render(review) {
            print::print(&line);
        }
    }
}

fn stage_label(stage: CardStage) -> &'static str {
    match stage {
        CardStage::New => "New",
        CardStage::Learning => "Learning",
        CardStage::Review => "Review",
    }
}

fn stage_color(stage: CardStage) -> Color {
    match stage {
        CardStage::New => colors::STAGE_NEW,
        CardStage::Learning => colors::STAGE_LEARNING,
        CardStage::Review => colors::STAGE_REVIEW,
    }
}
