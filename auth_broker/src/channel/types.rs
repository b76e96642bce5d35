use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use super::errors::ChannelError;

/// Handle on the host execution context a broker is embedded in. The
/// concrete channel uses it to scope message delivery to the correct
/// frame/origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContext {
    origin: Url,
}

impl HostContext {
    pub fn new(origin: Url) -> Self {
        Self { origin }
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }
}

/// One fully addressed message on its way to the host.
#[derive(Debug, Clone)]
pub struct WireMessage {
    /// Channel the host listens on.
    pub channel_id: String,
    /// Namespaced command identifier.
    pub command: String,
    /// Correlation id, unique per message.
    pub message_id: String,
    /// Command payload; `Value::Null` for commands without one.
    pub data: Value,
    /// Origin the delivery must be scoped to.
    pub origin: Url,
}

/// The broker side of the message channel.
///
/// `send` is fire-and-acknowledge: success means the host acknowledged
/// receipt, not that it acted on the message. `request` correlates a
/// response and resolves with the host's reply payload.
#[async_trait]
pub trait Channel: Send + Sync {
    async fn send(&self, command: &str, data: Value) -> Result<(), ChannelError>;

    async fn request(&self, command: &str, data: Value) -> Result<Value, ChannelError>;
}

impl std::fmt::Debug for dyn Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Channel")
    }
}

/// How bytes actually move is not this crate's concern; the embedding
/// application implements `Transport` over postMessage, a test harness, or
/// whatever else carries the messages. Timeouts, if any, are enforced here.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Deliver a one-way message; resolves on acknowledgement.
    async fn deliver(&self, message: WireMessage) -> Result<(), ChannelError>;

    /// Deliver a message and resolve with the correlated response payload.
    async fn exchange(&self, message: WireMessage) -> Result<Value, ChannelError>;
}
