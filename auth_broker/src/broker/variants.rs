//! Stock broker configurations, one per protocol generation.
//!
//! A variant is data: capability deltas over the baseline, a command table
//! (possibly with disabled entries), and a channel binding. None of them
//! touch the lifecycle logic.

use std::sync::Arc;

use crate::channel::{Channel, Transport, WebChannel};
use crate::config::{DESKTOP_CHANNEL_ID, WEB_CHANNEL_ID};

use super::capabilities::Capability;
use super::commands::{Command, CommandTable};
use super::config::BrokerConfig;

fn desktop_commands() -> CommandTable {
    CommandTable::new()
        .wire(Command::BrowserStatus, "account_status")
        .wire(Command::CanLinkAccount, "can_link_account")
        .wire(Command::ChangePassword, "change_password")
        .wire(Command::DeleteAccount, "delete_account")
        .wire(Command::Loaded, "loaded")
        .wire(Command::Login, "login")
}

/// The v3 desktop baseline: full command table, change-password notices on,
/// no browser-status query.
pub fn desktop_v3(transport: Arc<dyn Transport>) -> BrokerConfig {
    BrokerConfig::base()
        .kind("desktop-v3")
        .capabilities(
            [(Capability::SendChangePasswordNotice, true)]
                .into_iter()
                .collect(),
        )
        .commands(desktop_commands())
        .channel_binding(move |context| {
            Arc::new(WebChannel::new(
                DESKTOP_CHANNEL_ID,
                context.clone(),
                Arc::clone(&transport),
            )) as Arc<dyn Channel>
        })
}

/// v4 of the desktop protocol: identical to v3 except the broker also
/// queries the host for the currently signed-in user.
pub fn desktop_v4(transport: Arc<dyn Transport>) -> BrokerConfig {
    desktop_v3(transport)
        .kind("desktop-v4")
        .capabilities([(Capability::BrowserStatus, true)].into_iter().collect())
}

/// The web-channel variant: account-updates channel, no change-password
/// notice (the command itself is disabled for this generation).
pub fn web_channel(transport: Arc<dyn Transport>) -> BrokerConfig {
    BrokerConfig::base()
        .kind("web-channel")
        .capabilities(
            [(Capability::SendChangePasswordNotice, false)]
                .into_iter()
                .collect(),
        )
        .commands(
            CommandTable::new()
                .wire(Command::BrowserStatus, "account_status")
                .wire(Command::CanLinkAccount, "can_link_account")
                .disabled(Command::ChangePassword)
                .wire(Command::DeleteAccount, "delete_account")
                .wire(Command::Loaded, "loaded")
                .wire(Command::Login, "login"),
        )
        .channel_binding(move |context| {
            Arc::new(WebChannel::new(
                WEB_CHANNEL_ID.as_str(),
                context.clone(),
                Arc::clone(&transport),
            )) as Arc<dyn Channel>
        })
}
