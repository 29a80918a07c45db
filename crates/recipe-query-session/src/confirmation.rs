use recipe_query_core::types::{Category, ConfirmedCategory, ParsedToken};
use recipe_query_text::parse;
use tracing::debug;

/// The parse of the text currently in the search box.
///
/// Every input change rebuilds the token list from scratch, so confirmations
/// made against an earlier version of the input are dropped; only the chips
/// they produced survive.
#[derive(Debug, Default)]
pub struct LiveParse {
    input: String,
    tokens: Vec<ParsedToken>,
    suggestions_visible: bool,
}

impl LiveParse {
    pub fn new() -> Self { Self::default() }

    pub fn input(&self) -> &str { &self.input }

    pub fn tokens(&self) -> &[ParsedToken] { &self.tokens }

    /// True while at least one token still awaits a category.
    pub fn suggestions_visible(&self) -> bool { self.suggestions_visible }

    pub fn reparse(&mut self, input: &str) {
        self.input = input.to_string();
        self.tokens = parse(input);
        self.refresh_visibility();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.tokens.clear();
        self.suggestions_visible = false;
    }

    /// Mark the token at `index` as filed under `category`.
    ///
    /// Returns the token when it moved from suggested to confirmed, and
    /// `None` for an out-of-range index or an already confirmed token.
    pub fn confirm(&mut self, index: usize, category: Category, label: &str) -> Option<&ParsedToken> {
        let Some(token) = self.tokens.get_mut(index) else {
            debug!(index, tokens = self.tokens.len(), "confirm ignored: index out of range");
            return None;
        };
        if token.is_confirmed() {
            debug!(index, "confirm ignored: token already confirmed");
            return None;
        }
        token.confirmed = Some(ConfirmedCategory { category, label: label.to_string() });
        self.refresh_visibility();
        self.tokens.get(index)
    }

    fn refresh_visibility(&mut self) {
        self.suggestions_visible = self.tokens.iter().any(|t| !t.is_confirmed());
    }
}
