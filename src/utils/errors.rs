use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Unable to read settings: {0}")]
    InvalidSettings(#[from] config::ConfigError),
    #[error("Settings were already initialized.")]
    AlreadyInitialized,
    #[error("Settings not initialized.")]
    NotInitialized,
    #[error("Unable to read credentials from `{path}`: {reason}")]
    InvalidCredentials { path: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unable to read commander catalog `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid commander catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unknown commander `{0}`")]
    UnknownCommander(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unable to reach the deck API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("The deck API rejected the credentials.")]
    Unauthorized,
    #[error("Deck `{0}` was not found.")]
    NotFound(u64),
    #[error("Unexpected response body for `{0}`")]
    InvalidResponseBody(String),
    #[error("Unexpected deck API response ({status}): {message}")]
    Unexpected { status: u16, message: String },
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("A deck title is required.")]
    MissingTitle,
    #[error("A commander is required.")]
    MissingCommander,
    #[error("`{0}` cannot partner with itself.")]
    DuplicatePartner(String),
    #[error("Deck has {total} cards, it needs exactly {expected}.")]
    IllegalDeckSize { total: u32, expected: u32 },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("Deck `{id}` was created but could not be filled in: {source}")]
    PopulateFailed {
        id: u64,
        #[source]
        source: ApiError,
    },
    #[error(transparent)]
    Api(#[from] ApiError),
}
