pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8765;

/// A front/back pair of note field names, e.g. `Front` / `Back`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldPair {
    pub front: String,
    pub back: String,
}

impl FieldPair {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// Ordered list of field-name pairs the classifier tries when extracting
/// the display text of a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldPairs(Vec<FieldPair>);

impl FieldPairs {
    pub fn new(pairs: Vec<FieldPair>) -> Self {
        Self(pairs)
    }

    /// Puts `pair` ahead of the existing ones.
    pub fn with_primary(mut self, pair: FieldPair) -> Self {
        self.0.retain(|existing| existing != &pair);
        self.0.insert(0, pair);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldPair> {
        self.0.iter()
    }
}

impl Default for FieldPairs {
    fn default() -> Self {
        Self(vec![FieldPair::new("Front", "Back")])
    }
}

pub struct Config {
    /// Host running the AnkiConnect add-on.
    pub host: String,
    pub port: u16,
    pub field_pairs: FieldPairs,
    /// Adds `is:new` to the due-card search.
    ///
    /// Without it only cards the scheduler considers due are returned.
    pub include_new: bool,
    /// Print the back of every card under its front.
    pub show_answers: bool,
    pub verbosity: u8,
}

impl Config {
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}/", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            field_pairs: FieldPairs::default(),
            include_new: true,
            show_answers: false,
            verbosity: 0,
        }
    }
}
