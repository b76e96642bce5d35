use std::fmt;
use std::sync::Arc;

use crate::channel::{Channel, HostContext};

use super::capabilities::{Capability, CapabilitySet};
use super::commands::CommandTable;

/// Builds a channel bound to the broker's host context, deferred until the
/// broker first needs one.
pub(crate) type ChannelBinding = Arc<dyn Fn(&HostContext) -> Arc<dyn Channel> + Send + Sync>;

/// Everything that varies between broker protocol generations.
///
/// Variants are plain values composed by merging: start from
/// [`BrokerConfig::base`] and layer capability overrides, a command table,
/// and a channel on top, in declaration order. The lifecycle logic itself is
/// identical for every variant.
pub struct BrokerConfig {
    pub(crate) kind: &'static str,
    pub(crate) capabilities: CapabilitySet,
    pub(crate) commands: Option<CommandTable>,
    pub(crate) channel: Option<Arc<dyn Channel>>,
    pub(crate) channel_binding: Option<ChannelBinding>,
}

impl BrokerConfig {
    /// The baseline every variant derives from: default capabilities, no
    /// command table (a concrete variant must supply one), no channel.
    pub fn base() -> Self {
        Self {
            kind: "base",
            capabilities: default_capabilities(),
            commands: None,
            channel: None,
            channel_binding: None,
        }
    }

    /// Name the variant, for logs.
    pub fn kind(mut self, kind: &'static str) -> Self {
        self.kind = kind;
        self
    }

    /// Merge capability overrides over the current set (overrides win).
    pub fn capabilities(mut self, overrides: CapabilitySet) -> Self {
        self.capabilities = self.capabilities.merged_with(&overrides);
        self
    }

    /// Supply or replace the command table.
    pub fn commands(mut self, table: CommandTable) -> Self {
        self.commands = Some(table);
        self
    }

    /// Hand the broker an already constructed channel. Wins over any
    /// binding; used by tests and by glue code that owns the channel.
    pub fn channel(mut self, channel: Arc<dyn Channel>) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Defer channel construction to first use, bound to the broker's host
    /// context.
    pub fn channel_binding(
        mut self,
        binding: impl Fn(&HostContext) -> Arc<dyn Channel> + Send + Sync + 'static,
    ) -> Self {
        self.channel_binding = Some(Arc::new(binding));
        self
    }
}

impl fmt::Debug for BrokerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrokerConfig")
            .field("kind", &self.kind)
            .field("capabilities", &self.capabilities)
            .field("commands", &self.commands)
            .field("channel", &self.channel.is_some())
            .field("channel_binding", &self.channel_binding.is_some())
            .finish()
    }
}

/// Capabilities every variant starts from.
fn default_capabilities() -> CapabilitySet {
    [
        (Capability::Signup, true),
        (Capability::HandleSignedInNotification, true),
        (Capability::EmailVerificationMarketingSnippet, true),
        (Capability::CanLinkAccount, true),
    ]
    .into_iter()
    .collect()
}
