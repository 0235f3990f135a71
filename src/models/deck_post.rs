use serde::{Deserialize, Serialize};

use crate::deck::decklist::DeckLine;

/// Fields written into a freshly created deck record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckFields {
    pub title: String,
    pub commander: String,
    pub author: String,
    #[serde(rename = "deckList")]
    pub deck_list: Vec<DeckLine>,
}

#[derive(Debug, Serialize)]
pub struct PopulateDeckRequest<'a> {
    pub fields: &'a DeckFields,
}

#[derive(Debug, Deserialize)]
pub struct CreatedDeck {
    pub id: u64,
}
