use crate::models::card::Card;

/// Learning stage a card is reported under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardStage {
    New,
    Learning,
    Review,
}

/// One top-level deck and its cards, grouped by [`CardStage`].
///
/// Built through [`DeckCards::builder`]; the buckets keep the order in which
/// cards were pushed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckCards {
    deck_name: String,
    new_cards: Vec<Card>,
    learning_cards: Vec<Card>,
    review_cards: Vec<Card>,
}

impl DeckCards {
    pub fn builder(deck_name: impl Into<String>) -> DeckCardsBuilder {
        DeckCardsBuilder {
            deck: DeckCards {
                deck_name: deck_name.into(),
                new_cards: Vec::new(),
                learning_cards: Vec::new(),
                review_cards: Vec::new(),
            },
        }
    }

    pub fn deck_name(&self) -> &str {
        &self.deck_name
    }

    pub fn new_cards(&self) -> &[Card] {
        &self.new_cards
    }

    pub fn learning_cards(&self) -> &[Card] {
        &self.learning_cards
    }

    pub fn review_cards(&self) -> &[Card] {
        &self.review_cards
    }

    pub fn cards(&self, stage: CardStage) -> &[Card] {
        match stage {
            CardStage::New => &self.new_cards,
            CardStage::Learning => &self.learning_cards,
            CardStage::Review => &self.review_cards,
        }
    }

    pub fn total_cards(&self) -> usize {
        self.new_cards.len() + self.learning_cards.len() + self.review_cards.len()
    }
}

pub struct DeckCardsBuilder {
    deck: DeckCards,
}

impl DeckCardsBuilder {
    pub fn push(&mut self, stage: CardStage, card: Card) {
        match stage {
            CardStage::New => self.deck.new_cards.push(card),
            CardStage::Learning => self.deck.learning_cards.push(card),
            CardStage::Review => self.deck.review_cards.push(card),
        }
    }

    pub fn with(mut self, stage: CardStage, card: Card) -> Self {
        self.push(stage, card);
        self
    }

    /// Finishes the deck, or `None` when it holds no cards at all.
    pub fn build(self) -> Option<DeckCards> {
        (self.deck.total_cards() > 0).then_some(self.deck)
    }
}
