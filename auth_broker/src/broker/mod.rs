//! The authentication broker: lifecycle hooks, capability gating, command
//! lookup, and reconciliation against the local account store.
//!
//! The module is divided into several submodules:
//! - `capabilities`: named optional-behavior toggles and their merge rules
//! - `commands`: the abstract command vocabulary and per-variant wire table
//! - `config`: data-driven variant composition
//! - `errors`: the broker error taxonomy
//! - `main`: the lifecycle operations themselves
//! - `variants`: stock protocol-generation configurations

mod capabilities;
mod commands;
mod config;
mod errors;
mod main;
mod types;
pub mod variants;

pub use capabilities::{Capability, CapabilitySet};
pub use commands::{Command, CommandEntry, CommandTable};
pub use config::BrokerConfig;
pub use errors::BrokerError;
pub use main::AuthenticationBroker;
pub use types::HookOutcome;
