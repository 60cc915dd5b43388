use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing configuration: {0}")]
    ConfigurationMissing(&'static str),
    #[error("no flashcards to choose from")]
    EmptyCollection,
    #[error("no card is currently displayed")]
    NoCurrentCard,
    #[error("not found: {0}")]
    NotFound(&'static str),
    #[error("malformed table: {0}")]
    MalformedTable(String),
    #[error("remote read failed: {0}")]
    RemoteRead(String),
    #[error("remote write failed: {0}")]
    RemoteWrite(String),
}
