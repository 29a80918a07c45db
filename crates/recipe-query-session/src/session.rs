use recipe_query_core::config::SessionSettings;
use recipe_query_core::traits::RecipeRetriever;
use recipe_query_core::types::{Category, ParsedToken, SearchChip, StructuredQuery};
use recipe_query_core::{Error, Result};
use tracing::{debug, info, warn};

use crate::chips::ChipRegistry;
use crate::confirmation::LiveParse;
use crate::history::SearchHistory;

/// All state behind one search box.
///
/// Every method except [`SearchSession::execute`] is synchronous and total:
/// references to unknown tokens or chips are ignored rather than reported.
#[derive(Debug)]
pub struct SearchSession {
    live: LiveParse,
    chips: ChipRegistry,
    history: SearchHistory,
    is_loading: bool,
}

impl Default for SearchSession {
    fn default() -> Self { Self::new(SessionSettings::default()) }
}

impl SearchSession {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            live: LiveParse::new(),
            chips: ChipRegistry::new(),
            history: SearchHistory::with_capacity(settings.history_capacity),
            is_loading: false,
        }
    }

    pub fn input(&self) -> &str { self.live.input() }

    pub fn tokens(&self) -> &[ParsedToken] { self.live.tokens() }

    pub fn suggestions_visible(&self) -> bool { self.live.suggestions_visible() }

    pub fn chips(&self) -> &[SearchChip] { self.chips.chips() }

    pub fn query(&self) -> &StructuredQuery { self.chips.query() }

    pub fn history(&self) -> &SearchHistory { &self.history }

    pub fn is_loading(&self) -> bool { self.is_loading }

    /// Replace the live input and re-parse it. Chips are untouched.
    pub fn set_input(&mut self, input: &str) {
        if input.is_empty() {
            self.live.clear();
        } else {
            self.live.reparse(input);
        }
    }

    /// File the token at `index` under `category`, creating a chip.
    ///
    /// Returns the new chip's id, or `None` when the index is out of range
    /// or the token was already confirmed.
    pub fn confirm(&mut self, index: usize, category: Category, label: &str) -> Option<String> {
        let text = self.live.confirm(index, category, label)?.text.clone();
        Some(self.chips.add(&text, category, label))
    }

    pub fn remove(&mut self, chip_id: &str) {
        self.chips.remove(chip_id);
    }

    pub fn edit(&mut self, chip_id: &str, new_text: &str) {
        self.chips.edit(chip_id, new_text);
    }

    /// Drop all chips, the live input and its parse. History is kept.
    pub fn clear(&mut self) {
        self.chips.clear();
        self.live.clear();
        debug!("session cleared");
    }

    /// Record the current query in history and mark a search in flight.
    ///
    /// Returns the snapshot to hand to the retriever, or `None` when every
    /// category is empty; such searches are neither run nor logged.
    pub fn begin_search(&mut self) -> Option<StructuredQuery> {
        if self.query().is_empty() {
            debug!("search skipped: empty query");
            return None;
        }
        let snapshot = self.query().clone();
        self.history.push(snapshot.clone());
        self.is_loading = true;
        info!(terms = snapshot.total_len(), history = self.history.len(), "search started");
        Some(snapshot)
    }

    /// Mark the in-flight search as settled, successful or not.
    pub fn finish_search(&mut self) {
        self.is_loading = false;
    }

    /// Hand the current query to `retriever` and wait for it to settle.
    ///
    /// `Ok(None)` means the query was empty and nothing ran.
    pub async fn execute<R>(&mut self, retriever: &R) -> Result<Option<R::Output>>
    where
        R: RecipeRetriever,
    {
        let Some(query) = self.begin_search() else {
            return Ok(None);
        };
        let outcome = retriever.retrieve(query).await;
        self.finish_search();
        match outcome {
            Ok(output) => Ok(Some(output)),
            Err(e) => {
                warn!(error = %e, "recipe retrieval failed");
                Err(Error::Retrieval(format!("{:#}", e)))
            }
        }
    }
}
