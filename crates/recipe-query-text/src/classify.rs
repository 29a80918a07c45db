//! Rule-based token classification.
//!
//! Every rule is evaluated for every token and the hits are then ranked by
//! confidence. Ties keep the order in which rules fired: exclusion prefix,
//! then the dictionary word lists in scan order, then time phrases.

use std::cmp::Ordering;

use recipe_query_core::dictionary::{
    style, EXCLUSION_CONFIDENCE, EXCLUSION_PREFIXES, FALLBACK_CONFIDENCE, TIME_CONFIDENCE,
    TIME_PHRASES, WORD_LISTS,
};
use recipe_query_core::types::{Category, CategorySuggestion, ParsedToken};
use tracing::debug;

use crate::tokenize::tokenize;

/// Rank category suggestions for one token.
///
/// Matching is case-insensitive; labels quote `text` as typed. A non-empty
/// token always yields at least one suggestion.
pub fn classify(text: &str) -> Vec<CategorySuggestion> {
    let lowered = text.to_lowercase();
    let mut suggestions = Vec::new();

    // Tokens never contain spaces, so this only fires for text classified
    // directly rather than through `parse`.
    if let Some(rest) = exclusion_remainder(text) {
        suggestions.push(CategorySuggestion {
            category: Category::ExcludedIngredients,
            confidence: EXCLUSION_CONFIDENCE,
            label: format!("Avoid {}", rest),
        });
    }

    for list in WORD_LISTS {
        if list.contains(&lowered) {
            suggestions.push(CategorySuggestion {
                category: list.category,
                confidence: list.confidence,
                label: label_for(list.category, text),
            });
        }
    }

    if TIME_PHRASES.iter().any(|p| lowered.contains(p)) {
        suggestions.push(CategorySuggestion {
            category: Category::PrepConstraints,
            confidence: TIME_CONFIDENCE,
            label: label_for(Category::PrepConstraints, text),
        });
    }

    if suggestions.is_empty() {
        suggestions.push(CategorySuggestion {
            category: Category::Ingredients,
            confidence: FALLBACK_CONFIDENCE,
            label: format!("Add {} as an ingredient?", text),
        });
    }

    suggestions.sort_by(|a, b| b.confidence.partial_cmp(&a.confidence).unwrap_or(Ordering::Equal));
    suggestions
}

/// Tokenize and classify the whole input from scratch.
pub fn parse(input: &str) -> Vec<ParsedToken> {
    let tokens: Vec<ParsedToken> = tokenize(input)
        .into_iter()
        .map(|t| ParsedToken { text: t.to_string(), suggested_categories: classify(t), confirmed: None })
        .collect();
    debug!(tokens = tokens.len(), "parsed live input");
    tokens
}

/// The suggestion label a user sees for filing `text` under `category`.
pub fn label_for(category: Category, text: &str) -> String {
    match category {
        Category::Ingredients => format!("Add {} to ingredients", text),
        Category::ExcludedIngredients => format!("Avoid {}", text),
        other => format!("{}: {}", style(other).label, text),
    }
}

fn exclusion_remainder(text: &str) -> Option<&str> {
    EXCLUSION_PREFIXES.iter().find_map(|prefix| {
        let head = text.get(..prefix.len())?;
        if !head.eq_ignore_ascii_case(prefix) {
            return None;
        }
        let rest = text[prefix.len()..].trim();
        (!rest.is_empty()).then_some(rest)
    })
}
