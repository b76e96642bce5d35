use std::collections::HashMap;
use std::fmt;

use super::errors::BrokerError;

/// Abstract lifecycle events the broker may announce to the host. Each
/// protocol variant maps these to concrete wire identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    BrowserStatus,
    CanLinkAccount,
    ChangePassword,
    DeleteAccount,
    Loaded,
    Login,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::BrowserStatus => "BROWSER_STATUS",
            Command::CanLinkAccount => "CAN_LINK_ACCOUNT",
            Command::ChangePassword => "CHANGE_PASSWORD",
            Command::DeleteAccount => "DELETE_ACCOUNT",
            Command::Loaded => "LOADED",
            Command::Login => "LOGIN",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A command table entry: either a concrete wire identifier, or the explicit
/// marker that this protocol generation does not carry the event at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEntry {
    Wire(String),
    Disabled,
}

/// Per-variant mapping from abstract command to wire identifier.
///
/// An entry that is absent is a wiring mistake and fails fast on lookup; an
/// entry that is [`CommandEntry::Disabled`] is a deliberate "do not send"
/// and resolves to `None` without error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandTable {
    entries: HashMap<Command, CommandEntry>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire a command to its concrete identifier.
    pub fn wire(mut self, command: Command, id: impl Into<String>) -> Self {
        self.entries.insert(command, CommandEntry::Wire(id.into()));
        self
    }

    /// Mark a command as unsupported by this protocol generation.
    pub fn disabled(mut self, command: Command) -> Self {
        self.entries.insert(command, CommandEntry::Disabled);
        self
    }

    /// Resolve a command. `Ok(None)` means "supported vocabulary, but this
    /// variant must not send it".
    pub fn get(&self, command: Command) -> Result<Option<&str>, BrokerError> {
        match self.entries.get(&command) {
            None => Err(BrokerError::CommandNotFound(command)),
            Some(CommandEntry::Disabled) => Ok(None),
            Some(CommandEntry::Wire(id)) => Ok(Some(id.as_str())),
        }
    }
}
