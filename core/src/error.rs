use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Activity '{id}' not found")]
    ActivityNotFound { id: String },

    #[error("Wallet '{id}' not found")]
    WalletNotFound { id: String },

    #[error("Cannot connect an empty social handle")]
    EmptyHandle,

    #[error("Cannot connect an empty wallet address")]
    EmptyAddress,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type FeedResult<T> = Result<T, FeedError>;
