/// One flashcard's display text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub front: String,
    pub back: Option<String>,
}

impl Card {
    pub fn new(front: impl Into<String>, back: Option<String>) -> Self {
        Self {
            front: front.into(),
            back,
        }
    }
}
