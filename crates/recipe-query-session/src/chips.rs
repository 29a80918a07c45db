//! Confirmed chips and the structured query derived from them.
//!
//! For every category the query array holds exactly the texts of the live
//! chips in that category, as a multiset. Every mutation below updates both
//! sides together.

use chrono::Utc;
use rand::Rng;
use recipe_query_core::dictionary::style;
use recipe_query_core::types::{Category, SearchChip, StructuredQuery};
use tracing::{debug, info};

const ID_SUFFIX_LEN: usize = 8;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Default)]
pub struct ChipRegistry {
    chips: Vec<SearchChip>,
    query: StructuredQuery,
}

impl ChipRegistry {
    pub fn new() -> Self { Self::default() }

    pub fn chips(&self) -> &[SearchChip] { &self.chips }

    pub fn query(&self) -> &StructuredQuery { &self.query }

    pub fn get(&self, id: &str) -> Option<&SearchChip> {
        self.chips.iter().find(|c| c.id == id)
    }

    /// Create a chip and append its text to the category's query array.
    ///
    /// Duplicates are allowed: confirming the same text twice yields two
    /// chips and two array entries.
    pub fn add(&mut self, text: &str, category: Category, label: &str) -> String {
        let mut id = generate_chip_id(category);
        while self.get(&id).is_some() {
            id = generate_chip_id(category);
        }
        self.chips.push(SearchChip {
            id: id.clone(),
            text: text.to_string(),
            category,
            label: label.to_string(),
            color: style(category).color.to_string(),
        });
        self.query.values_mut(category).push(text.to_string());
        info!(chip = %id, %category, text, "chip added");
        id
    }

    /// Drop a chip and the first matching entry of its category array.
    /// Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) -> Option<SearchChip> {
        let Some(pos) = self.chips.iter().position(|c| c.id == id) else {
            debug!(chip = id, "remove ignored: unknown chip");
            return None;
        };
        let chip = self.chips.remove(pos);
        let values = self.query.values_mut(chip.category);
        if let Some(i) = values.iter().position(|v| *v == chip.text) {
            values.remove(i);
        }
        info!(chip = id, category = %chip.category, text = %chip.text, "chip removed");
        Some(chip)
    }

    /// Replace a chip's text, keeping its category and its position in the
    /// query array. Returns false (and changes nothing) for unknown ids and
    /// for blank or unchanged text.
    pub fn edit(&mut self, id: &str, new_text: &str) -> bool {
        let new_text = new_text.trim();
        let Some(pos) = self.chips.iter().position(|c| c.id == id) else {
            debug!(chip = id, "edit ignored: unknown chip");
            return false;
        };
        // Chips and array entries with equal text appear in the same order,
        // so the chip's rank among its twins is its rank in the array.
        let twins_before = self.chips[..pos]
            .iter()
            .filter(|c| c.category == self.chips[pos].category && c.text == self.chips[pos].text)
            .count();
        let chip = &mut self.chips[pos];
        if new_text.is_empty() || new_text == chip.text {
            debug!(chip = id, "edit ignored: blank or unchanged text");
            return false;
        }
        if let Some(slot) = self
            .query
            .values_mut(chip.category)
            .iter_mut()
            .filter(|v| **v == chip.text)
            .nth(twins_before)
        {
            *slot = new_text.to_string();
        }
        info!(chip = id, from = %chip.text, to = new_text, "chip edited");
        chip.text = new_text.to_string();
        true
    }

    pub fn clear(&mut self) {
        self.chips.clear();
        self.query = StructuredQuery::default();
    }
}

/// `{category}-{unix millis}-{random base36}`.
fn generate_chip_id(category: Category) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{}-{}-{}", category.key(), Utc::now().timestamp_millis(), suffix)
}
