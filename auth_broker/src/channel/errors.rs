use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum ChannelError {
    /// The transport failed to move the message at all.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The host received the message but answered with an error.
    #[error("Host error: {0}")]
    Host(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ChannelError {
    fn from(err: serde_json::Error) -> Self {
        ChannelError::Serialization(err.to_string())
    }
}
