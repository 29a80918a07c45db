use recipe_query_core::types::{Category, ParsedToken};
use recipe_query_text::classify::label_for;
use recipe_query_text::parse;

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Free text replacing the live input.
    Input(String),
    Confirm { index: usize, category: Option<Category> },
    Remove(String),
    Edit { id: String, text: String },
    Chips,
    Query,
    Search,
    History,
    Clear,
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if !line.starts_with('/') {
        return Command::Input(line.to_string());
    }
    let (name, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let (first, rest) = match args.trim().split_once(char::is_whitespace) {
        Some((first, rest)) => (Some(first), Some(rest.trim())),
        None => (Some(args.trim()), None),
    };
    let first = first.filter(|s| !s.is_empty());
    let rest = rest.filter(|s| !s.is_empty());

    match name {
        "/confirm" | "/c" => {
            let Some(index) = first.and_then(|s| s.parse::<usize>().ok()) else {
                return Command::Invalid("usage: /confirm <index> [category]".to_string());
            };
            match rest.map(str::parse::<Category>) {
                None => Command::Confirm { index, category: None },
                Some(Ok(category)) => Command::Confirm { index, category: Some(category) },
                Some(Err(e)) => Command::Invalid(e.to_string()),
            }
        }
        "/remove" | "/rm" => match first {
            Some(id) => Command::Remove(id.to_string()),
            None => Command::Invalid("usage: /remove <chipId>".to_string()),
        },
        "/edit" | "/e" => match (first, rest) {
            (Some(id), Some(text)) => Command::Edit { id: id.to_string(), text: text.to_string() },
            _ => Command::Invalid("usage: /edit <chipId> <text>".to_string()),
        },
        "/chips" => Command::Chips,
        "/query" => Command::Query,
        "/search" | "/s" => Command::Search,
        "/history" => Command::History,
        "/clear" => Command::Clear,
        "/help" | "/h" => Command::Help,
        "/quit" | "/q" => Command::Quit,
        other => Command::Invalid(format!("unknown command {}", other)),
    }
}

/// Pick the category and label to confirm `token` with.
///
/// Without an explicit category the top suggestion wins. An explicit
/// category reuses that suggestion's label when there is one.
pub fn resolve_confirmation(token: &ParsedToken, category: Option<Category>) -> (Category, String) {
    let wanted = category.or_else(|| token.suggested_categories.first().map(|s| s.category));
    let category = wanted.unwrap_or(Category::Ingredients);
    let label = token
        .suggested_categories
        .iter()
        .find(|s| s.category == category)
        .map(|s| s.label.clone())
        .unwrap_or_else(|| label_for(category, &token.text));
    (category, label)
}

/// The `parse` subcommand's output: every token with its ranked
/// suggestions as pretty JSON, or `None` when `text` has no tokens.
pub fn render_parse(text: &str) -> anyhow::Result<Option<String>> {
    let tokens = parse(text);
    if tokens.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::to_string_pretty(&tokens)?))
}
