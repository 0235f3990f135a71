use std::io::{self, Read};
use std::path::Path;
use std::sync::OnceLock;

use clap::Parser;

use api::client::DeckApiClient;
use catalog::commanders::CommanderCatalog;
use cli::{Cli, Command};
use deck::decklist::{parse_deck_list, PRIMARY_COMMANDER_SLOTS};
use models::credentials::ApiCredentials;
use models::exit_code::ExitCode;
use models::notice::Notice;
use models::settings::Settings;
use submit::workflow::{self, DeckSubmission};
use utils::errors::{SettingsError, SubmissionError};
use utils::logger::{Level, Logger};

mod api;
mod catalog;
mod cli;
mod deck;
mod models;
mod submit;
mod utils;

pub static SETTINGS: OnceLock<Settings> = OnceLock::new();

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    if cli.verbose {
        Logger::set_level(Level::Debug);
    }

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            logger!(ERROR, "[SETTINGS] {e}");
            return ExitCode::ConfigurationError.into();
        }
    };
    if SETTINGS.set(settings).is_err() {
        logger!(ERROR, "[SETTINGS] {}", SettingsError::AlreadyInitialized);
        return ExitCode::ConfigurationError.into();
    }

    run(cli.command).await.into()
}

async fn run(command: Command) -> ExitCode {
    match command {
        Command::Check { decklist, partner } => {
            let raw = match read_decklist(&decklist) {
                Ok(raw) => raw,
                Err(e) => {
                    logger!(ERROR, "[CHECK] Unable to read `{}`: {e}", decklist.display());
                    return ExitCode::InputError;
                }
            };

            let deck = parse_deck_list(&raw, partner);
            for line in &deck.lines {
                println!("{:>3} {}", line.number, line.cardname);
            }
            println!(
                "{} cards with commander(s), {} lines",
                deck.total_count.saturating_add(PRIMARY_COMMANDER_SLOTS),
                deck.lines.len()
            );

            match deck.missing_or_extra() {
                0 => {
                    println!("Deck is legal.");
                    ExitCode::Success
                }
                diff if diff < 0 => {
                    println!("Deck is {} card(s) short.", -diff);
                    ExitCode::IllegalDeck
                }
                diff => {
                    println!("Deck has {diff} card(s) too many.");
                    ExitCode::IllegalDeck
                }
            }
        }
        Command::Commanders { query, limit } => {
            let catalog = match load_catalog() {
                Ok(catalog) => catalog,
                Err(message) => {
                    logger!(ERROR, "[CATALOG] {message}");
                    return ExitCode::ConfigurationError;
                }
            };

            for commander in catalog.suggest(&query, limit) {
                match (&commander.muid, &commander.featured_image) {
                    (Some(muid), _) => println!("{} [{}] #{muid}", commander.name, commander.color_identity),
                    (None, Some(image)) => println!("{} [{}] {image}", commander.name, commander.color_identity),
                    (None, None) => println!("{} [{}]", commander.name, commander.color_identity),
                }
            }
            ExitCode::Success
        }
        Command::Submit {
            title,
            commander,
            partner,
            decklist,
        } => {
            let raw_decklist = match read_decklist(&decklist) {
                Ok(raw) => raw,
                Err(e) => {
                    logger!(ERROR, "[SUBMIT] Unable to read `{}`: {e}", decklist.display());
                    return ExitCode::InputError;
                }
            };

            let (catalog, client) = match load_catalog().and_then(|catalog| Ok((catalog, api_client()?))) {
                Ok(inputs) => inputs,
                Err(message) => {
                    logger!(ERROR, "[SUBMIT] {message}");
                    return ExitCode::ConfigurationError;
                }
            };

            let submission = DeckSubmission {
                title,
                commander,
                partner,
                raw_decklist,
            };
            let result = match workflow::prepare(&submission, &catalog) {
                Ok(prepared) => workflow::submit(prepared, &client).await,
                Err(e) => Err(e),
            };

            match result {
                Ok(notice) => {
                    show_notice(&notice);
                    ExitCode::Success
                }
                Err(e) => {
                    logger!(WARN, "[SUBMIT] {e}");
                    show_notice(&Notice::from(&e));
                    match e {
                        SubmissionError::IllegalDeckSize { .. } => ExitCode::IllegalDeck,
                        _ => ExitCode::SubmissionFailed,
                    }
                }
            }
        }
    }
}

fn settings() -> Result<&'static Settings, SettingsError> {
    SETTINGS.get().ok_or(SettingsError::NotInitialized)
}

fn load_catalog() -> Result<CommanderCatalog, String> {
    let settings = settings().map_err(|e| e.to_string())?;
    let catalog =
        CommanderCatalog::load(Path::new(&settings.commanders_file)).map_err(|e| e.to_string())?;
    if catalog.is_empty() {
        logger!(WARN, "[CATALOG] `{}` has no commanders", settings.commanders_file);
    }
    Ok(catalog)
}

fn api_client() -> Result<DeckApiClient, String> {
    let settings = settings().map_err(|e| e.to_string())?;
    let credentials =
        ApiCredentials::load(Path::new(&settings.credentials_file)).map_err(|e| e.to_string())?;
    Ok(DeckApiClient::new(&settings.api_url, credentials))
}

fn read_decklist(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw)?;
        return Ok(raw);
    }
    std::fs::read_to_string(path)
}

fn show_notice(notice: &Notice) {
    if notice.is_error {
        eprintln!("{notice}");
    } else {
        println!("{notice}");
    }
}
