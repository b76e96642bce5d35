use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::config::COMMAND_NAMESPACE;

use super::errors::ChannelError;
use super::types::{Channel, HostContext, Transport, WireMessage};

/// Channel bound to a host execution context.
///
/// Every outgoing command is wrapped into a [`WireMessage`]: prefixed with
/// the protocol namespace, stamped with a fresh correlation id and the
/// context's origin, then handed to the transport. Everything beyond the
/// wrapping is delegated.
pub struct WebChannel {
    channel_id: String,
    context: HostContext,
    transport: Arc<dyn Transport>,
}

impl WebChannel {
    pub fn new(
        channel_id: impl Into<String>,
        context: HostContext,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let channel_id = channel_id.into();
        tracing::debug!(
            channel_id = %channel_id,
            origin = %context.origin(),
            "binding web channel to host context"
        );
        Self {
            channel_id,
            context,
            transport,
        }
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    fn envelope(&self, command: &str, data: Value) -> WireMessage {
        WireMessage {
            channel_id: self.channel_id.clone(),
            command: format!("{COMMAND_NAMESPACE}:{command}"),
            message_id: Uuid::new_v4().to_string(),
            data,
            origin: self.context.origin().clone(),
        }
    }
}

#[async_trait]
impl Channel for WebChannel {
    async fn send(&self, command: &str, data: Value) -> Result<(), ChannelError> {
        self.transport.deliver(self.envelope(command, data)).await
    }

    async fn request(&self, command: &str, data: Value) -> Result<Value, ChannelError> {
        self.transport.exchange(self.envelope(command, data)).await
    }
}
