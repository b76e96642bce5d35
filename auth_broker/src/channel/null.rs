use async_trait::async_trait;
use serde_json::Value;

use super::errors::ChannelError;
use super::types::Channel;

/// Channel that resolves everything trivially. The safe default wherever no
/// live host is attached: `send` acknowledges immediately and `request`
/// answers with JSON null.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullChannel;

impl NullChannel {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Channel for NullChannel {
    async fn send(&self, _command: &str, _data: Value) -> Result<(), ChannelError> {
        Ok(())
    }

    async fn request(&self, _command: &str, _data: Value) -> Result<Value, ChannelError> {
        Ok(Value::Null)
    }
}
