use crate::api::client::DeckApiClient;
use crate::catalog::commanders::CommanderCatalog;
use crate::deck::decklist::{parse_deck_list, ParsedDeck, PRIMARY_COMMANDER_SLOTS, TARGET_DECK_SIZE};
use crate::logger;
use crate::models::commander::CommanderPair;
use crate::models::deck_post::DeckFields;
use crate::models::notice::Notice;
use crate::utils::errors::SubmissionError;

/// What the user filled in.
#[derive(Debug, Clone, Default)]
pub struct DeckSubmission {
    pub title: String,
    pub commander: String,
    pub partner: Option<String>,
    pub raw_decklist: String,
}

/// A validated submission, ready to be uploaded.
#[derive(Debug, Clone)]
pub struct PreparedDeck {
    pub title: String,
    pub commanders: CommanderPair,
    pub deck: ParsedDeck,
}

impl PreparedDeck {
    pub fn into_fields(self, author: &str) -> DeckFields {
        DeckFields {
            title: self.title,
            commander: self.commanders.display_name(),
            author: author.to_string(),
            deck_list: self.deck.lines,
        }
    }
}

/// Resolves the commanders and checks the deck size. Nothing is sent anywhere.
///
/// # Arguments
/// * `submission` - The title, commander names and pasted decklist.
/// * `catalog` - Commanders the names are resolved against.
///
/// # Returns
/// * `Ok(PreparedDeck)` - A legal deck with its commanders resolved.
/// * `Err(SubmissionError)` - An error if a field is missing, a commander is unknown or the deck size is wrong.
pub fn prepare(
    submission: &DeckSubmission,
    catalog: &CommanderCatalog,
) -> Result<PreparedDeck, SubmissionError> {
    let title = submission.title.trim();
    if title.is_empty() {
        return Err(SubmissionError::MissingTitle);
    }

    if submission.commander.trim().is_empty() {
        return Err(SubmissionError::MissingCommander);
    }
    let commander = catalog.find(&submission.commander)?.clone();

    let partner = match submission.partner.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(name) => {
            let partner = catalog.find(name)?;
            if partner.name == commander.name {
                return Err(SubmissionError::DuplicatePartner(commander.name));
            }
            Some(partner.clone())
        }
    };

    let commanders = CommanderPair { commander, partner };
    let deck = parse_deck_list(&submission.raw_decklist, commanders.has_partner());
    logger!(
        DEBUG,
        "[SUBMIT] Parsed {} lines for `{}`, count {}",
        deck.lines.len(),
        commanders.display_name(),
        deck.total_count
    );

    if !deck.is_legal() {
        return Err(SubmissionError::IllegalDeckSize {
            total: deck.total_count.saturating_add(PRIMARY_COMMANDER_SLOTS),
            expected: TARGET_DECK_SIZE,
        });
    }

    Ok(PreparedDeck {
        title: title.to_string(),
        commanders,
        deck,
    })
}

/// Creates the deck record, then fills it in.
///
/// # Arguments
/// * `prepared` - A deck returned by [`prepare`].
/// * `client` - The authenticated deck API client.
///
/// # Returns
/// * `Ok(Notice)` - A success notice naming the new deck ID.
/// * `Err(SubmissionError)` - An error if either call fails. Filling in is skipped when creation fails.
pub async fn submit(prepared: PreparedDeck, client: &DeckApiClient) -> Result<Notice, SubmissionError> {
    let created = client.create_deck().await?;
    logger!(INFO, "[SUBMIT] Created deck record `{}`", created.id);

    let title = prepared.title.to_string();
    let fields = prepared.into_fields(client.author());
    client
        .populate_deck(created.id, &fields)
        .await
        .map_err(|source| SubmissionError::PopulateFailed {
            id: created.id,
            source,
        })?;

    logger!(INFO, "[SUBMIT] Deck `{}` uploaded with {} lines", created.id, fields.deck_list.len());
    Ok(Notice::success(created.id, &title))
}
