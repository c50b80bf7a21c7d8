use crate::models::deck::DeckCards;

/// Everything to show for one run, in deck discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodayReview {
    decks: Vec<DeckCards>,
}

impl TodayReview {
    pub fn new(decks: Vec<DeckCards>) -> Self {
        Self { decks }
    }

    pub fn decks(&self) -> &[DeckCards] {
        &self.decks
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    pub fn total_cards(&self) -> usize {
        self.decks.iter().map(DeckCards::total_cards).sum()
    }
}
