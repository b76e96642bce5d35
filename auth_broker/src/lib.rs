//! auth-broker - Authentication broker between a web flow and its embedding host
//!
//! This crate mediates identity-state exchange between a web-hosted
//! authentication flow and the host application (a browser) embedding it.
//! At each stage of the sign-in/sign-up/password-change lifecycle the broker
//! decides, based on its capability set and command table, whether and what
//! to tell the host, and reconciles host-reported account state with the
//! locally cached signed-in account.
//!
//! Protocol variants differ only in data: which capabilities are enabled,
//! which commands are wired (or explicitly disabled), and which channel
//! carries them. See [`variants`] for the stock configurations.

mod account;
mod broker;
mod channel;
mod config;

pub use account::{
    Account, AccountStore, InMemoryAccountStore, LoginField, REQUIRED_LOGIN_FIELDS,
    SESSION_TOKEN_USED_FOR_SYNC,
};

pub use broker::{
    AuthenticationBroker, BrokerConfig, BrokerError, Capability, CapabilitySet, Command,
    CommandEntry, CommandTable, HookOutcome,
};
pub use broker::variants;

pub use channel::{Channel, ChannelError, HostContext, NullChannel, Transport, WebChannel, WireMessage};

// Re-export the channel-id configuration
pub use config::WEB_CHANNEL_ID;
