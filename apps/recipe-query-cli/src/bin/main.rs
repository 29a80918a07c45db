use std::env;
use std::io::{self, Write};
use std::time::Duration;

use indicatif::ProgressBar;
use recipe_query_cli::handoff::JsonHandoffRetriever;
use recipe_query_cli::repl::{parse_command, render_parse, resolve_confirmation, Command};
use recipe_query_core::config::{Config, SessionSettings};
use recipe_query_core::dictionary::style;
use recipe_query_session::SearchSession;
use tracing_subscriber::EnvFilter;

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    args.remove(0);
    if args.is_empty() { return ("repl".to_string(), vec![]); }
    let cmd = args.remove(0);
    (cmd, args)
}

fn init_logging(config: &Config) {
    let fallback: String = config.get("logging.filter").unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    init_logging(&config);
    let settings = SessionSettings::from_config(&config)?;

    let (cmd, args) = parse_args();
    match cmd.as_str() {
        "repl" => run_repl(SearchSession::new(settings)).await?,
        "parse" => match render_parse(&args.join(" "))? {
            Some(json) => println!("{}", json),
            None => { eprintln!("Usage: recipe-query parse \"<text>\""); std::process::exit(1); }
        },
        _ => { eprintln!("Unknown command: {} (expected `parse` or no arguments)", cmd); std::process::exit(1); }
    }
    Ok(())
}

async fn run_repl(mut session: SearchSession) -> anyhow::Result<()> {
    println!("🍳 Recipe Query");
    println!("==============");
    show_help();

    let retriever = JsonHandoffRetriever;
    loop {
        print!("query> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(&line) {
            Command::Input(text) => {
                session.set_input(&text);
                show_suggestions(&session);
            }
            Command::Confirm { index, category } => {
                let Some(token) = session.tokens().get(index) else {
                    println!("❌ No token at index {}", index);
                    continue;
                };
                let (category, label) = resolve_confirmation(token, category);
                match session.confirm(index, category, &label) {
                    Some(id) => println!("✅ {} {} [{}]", style(category).emoji, label, id),
                    None => println!("ℹ️  Token {} is already confirmed", index),
                }
                show_suggestions(&session);
            }
            Command::Remove(id) => {
                session.remove(&id);
                show_chips(&session);
            }
            Command::Edit { id, text } => {
                session.edit(&id, &text);
                show_chips(&session);
            }
            Command::Chips => show_chips(&session),
            Command::Query => println!("{}", serde_json::to_string_pretty(session.query())?),
            Command::Search => {
                let spinner = ProgressBar::new_spinner();
                spinner.set_message("Handing off query...");
                spinner.enable_steady_tick(Duration::from_millis(80));
                let outcome = session.execute(&retriever).await;
                spinner.finish_and_clear();
                match outcome {
                    Ok(Some(payload)) => println!("{}", payload),
                    Ok(None) => println!("ℹ️  Nothing to search yet: confirm some tokens first"),
                    Err(e) => println!("❌ Search error: {}", e),
                }
            }
            Command::History => show_history(&session),
            Command::Clear => {
                session.clear();
                println!("🧹 Cleared chips and input");
            }
            Command::Help => show_help(),
            Command::Quit => {
                println!("👋 Goodbye!");
                break;
            }
            Command::Invalid(msg) => println!("❌ {}", msg),
        }
        println!();
    }
    Ok(())
}

fn show_help() {
    println!("🎯 Commands:");
    println!("  <text>                     - Replace the live input and show suggestions");
    println!("  /confirm <index> [category] - Confirm a token (default: top suggestion)");
    println!("  /remove <chipId>           - Remove a chip");
    println!("  /edit <chipId> <text>      - Change a chip's text");
    println!("  /chips                     - List chips");
    println!("  /query                     - Show the structured query");
    println!("  /search                    - Hand the query off and record it in history");
    println!("  /history                   - Show recent searches");
    println!("  /clear                     - Remove all chips and the input");
    println!("  /quit                      - Exit");
    println!();
}

fn show_suggestions(session: &SearchSession) {
    if !session.suggestions_visible() {
        show_chips(session);
        return;
    }
    for (i, token) in session.tokens().iter().enumerate() {
        if let Some(confirmed) = &token.confirmed {
            println!("  [{}] {:<16} ✔ {}", i, token.text, confirmed.label);
            continue;
        }
        let ranked: Vec<String> = token
            .suggested_categories
            .iter()
            .map(|s| format!("{} {} ({:.1})", style(s.category).emoji, s.category, s.confidence))
            .collect();
        println!("  [{}] {:<16} {}", i, token.text, ranked.join(", "));
    }
}

fn show_chips(session: &SearchSession) {
    if session.chips().is_empty() {
        println!("  (no chips)");
        return;
    }
    for chip in session.chips() {
        let s = style(chip.category);
        println!("  {} {:<10} {:<16} {}", s.emoji, s.label, chip.text, chip.id);
    }
}

fn show_history(session: &SearchSession) {
    if session.history().is_empty() {
        println!("  (no searches yet)");
        return;
    }
    for (i, entry) in session.history().iter().enumerate() {
        println!(
            "  {}. {} - {} terms",
            i + 1,
            entry.executed_at().format("%H:%M:%S"),
            entry.query().total_len()
        );
    }
}
