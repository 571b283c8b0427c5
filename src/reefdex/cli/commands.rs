//! # CLI Layer
//!
//! This module is **one possible UI client** for reefdex. The CLI layer is the
//! **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Handles argument parsing
//! - Sets up the log subscriber
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the config dir and loads the config
//! - `handle_*()`: Per-command handlers that call the API and print
//! - `parse_browse_line()`: Maps one line of `browse` input to a session action

use super::print::{
    line_width, print_cards, print_config, print_counts, print_full_cards, print_icons,
    print_messages, print_segments,
};
use super::setup::{Cli, Commands, FacetArgs};
use clap::Parser;
use directories::ProjectDirs;
use reefdex::api::{ConfigAction, ReefdexApi};
use reefdex::config::ReefdexConfig;
use reefdex::error::{ReefdexError, Result};
use reefdex::index::CardIndex;
use reefdex::model::{SizeBucket, Trait, Zone};
use reefdex::render::{render_editor, GlyphResolver};
use reefdex::session::Action;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

/// Overrides the platform config dir.
const HOME_ENV: &str = "REEFDEX_HOME";

struct AppContext {
    config_dir: PathBuf,
    config: ReefdexConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::init_logging(cli.verbose);

    let ctx = init_context()?;

    match cli.command {
        Some(Commands::List { facets }) => handle_list(&ctx, facets),
        Some(Commands::Search { text, facets }) => handle_search(&ctx, text, facets),
        Some(Commands::View { ids }) => handle_view(&ctx, ids),
        Some(Commands::Browse) => handle_browse(&ctx),
        Some(Commands::Stats { text, facets }) => handle_stats(&ctx, text, facets),
        Some(Commands::Parse { text }) => handle_parse(&ctx, &text),
        Some(Commands::Sanitize { text }) => handle_sanitize(&ctx, &text),
        Some(Commands::Icons) => handle_icons(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, FacetArgs::default()),
    }
}

fn init_context() -> Result<AppContext> {
    let config_dir = match std::env::var_os(HOME_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "reefdex", "reefdex")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| ReefdexError::Config("Could not determine config dir".into()))?,
    };
    let config = ReefdexConfig::load(&config_dir)?;
    tracing::debug!(dir = %config_dir.display(), "using config dir");
    Ok(AppContext { config_dir, config })
}

fn open_api(ctx: &AppContext) -> Result<ReefdexApi<CardIndex>> {
    ReefdexApi::open(&ctx.config_dir)
}

fn handle_list(ctx: &AppContext, facets: FacetArgs) -> Result<()> {
    if !facets.is_empty() {
        return handle_search(ctx, None, facets);
    }
    let api = open_api(ctx)?;
    let result = api.list()?;
    print_cards(&result.listed_cards, line_width(&ctx.config));
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, text: Option<String>, facets: FacetArgs) -> Result<()> {
    let api = open_api(ctx)?;
    let result = api.search(&facets.to_query(text))?;
    print_cards(&result.listed_cards, line_width(&ctx.config));
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, ids: Vec<String>) -> Result<()> {
    let api = open_api(ctx)?;
    let result = api.view(&ids)?;
    let resolver = GlyphResolver::new(api.vocabulary().clone());
    print_full_cards(&result.listed_cards, &resolver, api.vocabulary());
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext, text: Option<String>, facets: FacetArgs) -> Result<()> {
    let api = open_api(ctx)?;
    let result = api.stats(&facets.to_query(text))?;
    if let Some(counts) = &result.counts {
        print_counts(counts);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_parse(ctx: &AppContext, text: &str) -> Result<()> {
    let api = open_api(ctx)?;
    let result = api.parse(text)?;
    print_segments(&result.segments, 0);
    Ok(())
}

fn handle_sanitize(ctx: &AppContext, text: &str) -> Result<()> {
    let api = open_api(ctx)?;
    let result = api.sanitize(text)?;
    if let Some(clean) = &result.text {
        println!("{}", clean);
    }
    // stdout carries only the sanitized text.
    for message in &result.messages {
        eprintln!("{}", message.content);
    }
    Ok(())
}

fn handle_icons(ctx: &AppContext) -> Result<()> {
    let api = open_api(ctx)?;
    let result = api.icons()?;
    print_icons(&result.icons, &GlyphResolver::new(api.vocabulary().clone()));
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    // No API here: a bad cards_path must still be fixable.
    let result = reefdex::commands::config::run(&ctx.config_dir, action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

/// Runs a session over stdin, one edit per line, printing results after each.
fn handle_browse(ctx: &AppContext) -> Result<()> {
    let api = ReefdexApi::open_background(&ctx.config_dir)?;
    let resolver = GlyphResolver::new(api.vocabulary().clone());
    let width = line_width(&ctx.config);
    let interactive = std::io::stdin().is_terminal();
    let mut session = api.session();

    if interactive {
        println!(
            "Type to search. Commands: :icon NAME, :back, :clear, :group|:size|:zone|:tag NAME on|off, :reset, :quit"
        );
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let action = match parse_browse_line(&line) {
            Ok(Some(action)) => action,
            Ok(None) => break,
            Err(msg) => {
                eprintln!("{}", msg);
                continue;
            }
        };

        let results = session.apply(action).to_vec();
        println!(
            "search: {}",
            render_editor(&resolver, &session.editor().segments())
        );
        let cards = api.catalog().cards_for(&results);
        print_cards(&cards, width);
        println!("{} cards", cards.len());
    }
    Ok(())
}

/// `Ok(None)` ends the session.
fn parse_browse_line(line: &str) -> std::result::Result<Option<Action>, String> {
    let Some(command) = line.strip_prefix(':') else {
        return Ok(Some(Action::Type(line.to_string())));
    };

    let words: Vec<&str> = command.split_whitespace().collect();
    let action = match words.as_slice() {
        ["quit"] | ["q"] => return Ok(None),
        ["back"] => Action::Backspace,
        ["clear"] => Action::Clear,
        ["reset"] => Action::Reset,
        ["icon", name] => Action::InsertIcon(name.to_string()),
        ["group", name, state] => Action::SetGroup(name.to_string(), parse_switch(state)?),
        ["size", name, state] => Action::SetSize(name.parse::<SizeBucket>()?, parse_switch(state)?),
        ["zone", name, state] => Action::SetZone(name.parse::<Zone>()?, parse_switch(state)?),
        ["tag", name, state] => Action::SetTag(name.parse::<Trait>()?, parse_switch(state)?),
        _ => return Err(format!("Unknown command: :{}", command)),
    };
    Ok(Some(action))
}

fn parse_switch(word: &str) -> std::result::Result<bool, String> {
    match word {
        "on" => Ok(true),
        "off" => Ok(false),
        other => Err(format!("Expected on or off, got {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_replace_the_search_text() {
        assert_eq!(
            parse_browse_line("[Predator] shark"),
            Ok(Some(Action::Type("[Predator] shark".into())))
        );
        assert_eq!(parse_browse_line(""), Ok(Some(Action::Type(String::new()))));
    }

    #[test]
    fn colon_commands_map_to_actions() {
        assert_eq!(parse_browse_line(":back"), Ok(Some(Action::Backspace)));
        assert_eq!(
            parse_browse_line(":icon Wave"),
            Ok(Some(Action::InsertIcon("Wave".into())))
        );
        assert_eq!(
            parse_browse_line(":zone midnight off"),
            Ok(Some(Action::SetZone(Zone::Midnight, false)))
        );
        assert_eq!(
            parse_browse_line(":tag Predator on"),
            Ok(Some(Action::SetTag(Trait::Predator, true)))
        );
        assert_eq!(parse_browse_line(":quit"), Ok(None));
    }

    #[test]
    fn bad_commands_are_errors() {
        assert!(parse_browse_line(":size huge on").is_err());
        assert!(parse_browse_line(":group main maybe").is_err());
        assert!(parse_browse_line(":fly").is_err());
    }
}
