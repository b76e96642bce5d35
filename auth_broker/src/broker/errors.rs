//! Error taxonomy for broker operations.
//!
//! Configuration errors mean a variant was assembled incorrectly and must
//! surface loudly during integration; they can never be recovered from at
//! runtime. `UserCanceledLogin` is the one domain error a caller is expected
//! to branch on.

use thiserror::Error;

use crate::channel::ChannelError;

use super::commands::Command;

#[derive(Debug, Error)]
pub enum BrokerError {
    /// The variant never supplied a command table.
    #[error("command table must be specified")]
    CommandsNotSpecified,

    /// The command table has no entry for the requested command.
    #[error("command not found for: {0}")]
    CommandNotFound(Command),

    /// The variant never supplied a channel, by value or by binding.
    #[error("channel binding must be specified")]
    ChannelNotSpecified,

    /// The host answered the link-account prompt negatively.
    #[error("user canceled login")]
    UserCanceledLogin,

    /// Error from the underlying channel.
    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    /// The host's browser-status reply did not parse.
    #[error("Malformed status response: {0}")]
    MalformedStatus(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BrokerError {
    /// True for errors that indicate a mis-assembled broker variant rather
    /// than anything that can happen in correctly wired production code.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            BrokerError::CommandsNotSpecified
                | BrokerError::CommandNotFound(_)
                | BrokerError::ChannelNotSpecified
        )
    }

    /// Log the error and return self, allowing for method chaining.
    pub fn log(self) -> Self {
        match &self {
            Self::CommandsNotSpecified => tracing::error!("command table must be specified"),
            Self::CommandNotFound(command) => {
                tracing::error!("command not found for: {}", command)
            }
            Self::ChannelNotSpecified => tracing::error!("channel binding must be specified"),
            Self::UserCanceledLogin => tracing::debug!("user canceled login"),
            Self::Channel(err) => tracing::error!("Channel error: {}", err),
            Self::MalformedStatus(msg) => tracing::error!("Malformed status response: {}", msg),
            Self::Serialization(msg) => tracing::error!("Serialization error: {}", msg),
        }
        self
    }
}

impl From<serde_json::Error> for BrokerError {
    fn from(err: serde_json::Error) -> Self {
        BrokerError::Serialization(err.to_string())
    }
}
