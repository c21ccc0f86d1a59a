mod cli;
mod clipboard;
mod config;
mod dispatch;
mod error;
mod log;
mod personas;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::Cli;
use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::config::Config;
use crate::dispatch::{render_progress, Dispatcher};
use crate::personas::Personas;

fn copy_all<S: ClipboardSink>(dispatcher: &mut Dispatcher<S>, personas: &Personas) -> Result<()> {
    if personas.is_empty() {
        log::warn("No personas found, clipboard left untouched.");
        return Ok(());
    }

    dispatcher
        .copy_all(personas, |done, total| {
            log::print_inline(&render_progress(done, total))
        })
        .context("Failed to copy personas to clipboard")?;
    println!();

    log::success(&format!("Copied {} personas to clipboard", personas.len()));
    Ok(())
}

/// Copy one persona and return the message to report.
fn copy_user<S: ClipboardSink>(
    dispatcher: &mut Dispatcher<S>,
    personas: &Personas,
    user: &str,
) -> Result<String> {
    dispatcher
        .copy_user(personas, user)
        .with_context(|| format!("Failed to copy {} to clipboard", user))?;
    Ok(format!("Successfully copied {} to clipboard", user))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    let sheet = cli.sheet.clone().unwrap_or_else(|| config.sheet.clone());
    let delay = cli
        .delay_ms
        .map(std::time::Duration::from_millis)
        .unwrap_or_else(|| config.delay());

    log::dim(&format!("Reading sheet '{}' from {}", sheet, cli.file.display()));
    let personas = Personas::load(&cli.file, &sheet)?;

    let user = cli.user_filter();
    if let Some(user) = user {
        if !personas.contains(user) {
            log::error(&format!("Application error: Could not find {}", user));
            std::process::exit(1);
        }
    }

    log::info("Loading personas to clipboard...");

    let sink = SystemClipboard::new().context("Failed to access system clipboard")?;
    let mut dispatcher = Dispatcher::new(sink, delay);

    match user {
        Some(user) => log::success(&copy_user(&mut dispatcher, &personas, user)?),
        None => copy_all(&mut dispatcher, &personas)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DispatchError;
    use calamine::Data;
    use std::time::Duration;

    #[derive(Default)]
    struct Recorder {
        writes: Vec<String>,
    }

    impl ClipboardSink for Recorder {
        fn set_text(&mut self, text: &str) -> Result<(), DispatchError> {
            self.writes.push(text.to_string());
            Ok(())
        }
    }

    fn personas() -> Personas {
        let rows = vec![
            vec![Data::String("alice".into()), Data::String("a1".into())],
            vec![Data::String("bob".into()), Data::String("b2".into())],
        ];
        Personas::from_rows(rows.iter().map(Vec::as_slice))
    }

    #[test]
    fn test_copy_user_reports_the_user() {
        let personas = personas();
        let mut dispatcher = Dispatcher::new(Recorder::default(), Duration::ZERO);

        let message = copy_user(&mut dispatcher, &personas, "bob").unwrap();

        assert_eq!(message, "Successfully copied bob to clipboard");
        assert_eq!(dispatcher.into_sink().writes, vec!["bob", "b2"]);
    }

    #[test]
    fn test_copy_user_unknown_is_an_error() {
        let personas = personas();
        let mut dispatcher = Dispatcher::new(Recorder::default(), Duration::ZERO);

        let err = copy_user(&mut dispatcher, &personas, "mallory").unwrap_err();

        assert!(format!("{:#}", err).contains("Could not find mallory"));
        assert!(dispatcher.into_sink().writes.is_empty());
    }

    #[test]
    fn test_copy_all_writes_every_persona() {
        let personas = personas();
        let mut dispatcher = Dispatcher::new(Recorder::default(), Duration::ZERO);

        copy_all(&mut dispatcher, &personas).unwrap();

        assert_eq!(dispatcher.into_sink().writes, vec!["alice", "a1", "bob", "b2"]);
    }
}
