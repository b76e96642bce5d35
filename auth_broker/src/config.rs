//! Central configuration for the auth-broker crate

use std::sync::LazyLock;

/// Channel id the web-channel broker variant binds to
///
/// The host listens for account updates on this channel.
/// Default: "account_updates"
pub static WEB_CHANNEL_ID: LazyLock<String> = LazyLock::new(|| {
    std::env::var("AUTH_BROKER_WEBCHANNEL_ID").unwrap_or_else(|_| "account_updates".to_string())
});

/// Channel id the desktop broker variants bind to
pub(crate) const DESKTOP_CHANNEL_ID: &str = "desktop_sync";

/// Namespace prepended to every logical command before it goes on the wire
pub(crate) const COMMAND_NAMESPACE: &str = "accounts";
