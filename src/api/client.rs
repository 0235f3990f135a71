use reqwest::{header::AUTHORIZATION, Response, StatusCode};

use crate::logger;
use crate::models::credentials::ApiCredentials;
use crate::models::deck_post::{CreatedDeck, DeckFields, PopulateDeckRequest};
use crate::utils::errors::ApiError;

/// Client for the two calls that publish a deck: create an empty record, then fill it in.
pub struct DeckApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: ApiCredentials,
}

impl DeckApiClient {
    pub fn new(base_url: &str, credentials: ApiCredentials) -> Self {
        DeckApiClient::with_client(reqwest::Client::new(), base_url, credentials)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str, credentials: ApiCredentials) -> Self {
        DeckApiClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn author(&self) -> &str {
        &self.credentials.user_nicename
    }

    /// Creates an empty deck record on the deck API.
    ///
    /// # Returns
    /// * `Ok(CreatedDeck)` - The ID assigned to the new record.
    /// * `Err(ApiError)` - An error if the request fails, the token is rejected or the body is not a deck ID.
    pub async fn create_deck(&self) -> Result<CreatedDeck, ApiError> {
        let api_url = format!("{}/wp-json/wp/v2/decks", self.base_url);
        logger!(DEBUG, "[API] Creating deck record at `{api_url}`");

        let response = self
            .http
            .post(api_url)
            .header(AUTHORIZATION, format!("Bearer {}", self.credentials.token))
            .json(&serde_json::json!({}))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => {
                response.json::<CreatedDeck>().await.map_err(|e| {
                    logger!(ERROR, "[API] {}", e.to_string());
                    ApiError::InvalidResponseBody("CreatedDeck".to_string())
                })
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
            _ => Err(DeckApiClient::unexpected(response).await),
        }
    }

    /// Writes the deck fields into the record created by [`DeckApiClient::create_deck`].
    ///
    /// # Arguments
    /// * `deck_id` - The ID returned when the record was created.
    /// * `fields` - Title, commander, author and card lines of the deck.
    ///
    /// # Returns
    /// * `Ok(())` - The record was filled in.
    /// * `Err(ApiError)` - An error if the request fails, the token is rejected or the record does not exist.
    pub async fn populate_deck(&self, deck_id: u64, fields: &DeckFields) -> Result<(), ApiError> {
        let api_url = format!("{}/wp-json/acf/v3/decks/{}", self.base_url, deck_id);
        logger!(DEBUG, "[API] Populating deck `{deck_id}` with {} lines", fields.deck_list.len());

        let response = self
            .http
            .post(api_url)
            .header(AUTHORIZATION, format!("Bearer {}", self.credentials.token))
            .json(&PopulateDeckRequest { fields })
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(deck_id)),
            _ => Err(DeckApiClient::unexpected(response).await),
        }
    }

    async fn unexpected(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or("NO MESSAGE".to_string());
        ApiError::Unexpected { status, message }
    }
}
