use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::account::{Account, AccountStore, SESSION_TOKEN_USED_FOR_SYNC};
use crate::channel::{Channel, HostContext};

use crate::broker::capabilities::{Capability, CapabilitySet};
use crate::broker::commands::{Command, CommandTable};
use crate::broker::config::{BrokerConfig, ChannelBinding};
use crate::broker::errors::BrokerError;
use crate::broker::types::{
    BrowserStatusResponse, CanLinkAccountRequest, CanLinkAccountResponse, DeleteAccountData,
    HookOutcome, LoginData,
};

/// Decides, at each stage of the identity lifecycle, whether and what to
/// tell the embedding host, and reconciles host-reported account state with
/// the local store.
///
/// One broker serves one host context. Hooks are invoked strictly
/// sequentially by the hosting flow, which is why they take `&mut self` and
/// no internal synchronization exists.
pub struct AuthenticationBroker {
    kind: &'static str,
    capabilities: CapabilitySet,
    commands: Option<CommandTable>,
    context: HostContext,
    channel: Option<Arc<dyn Channel>>,
    channel_binding: Option<ChannelBinding>,
    /// Subject of the most recent affirmative link-confirmation. A repeat of
    /// the same subject skips the prompt; a different subject re-asks.
    confirmed_subject: Option<String>,
}

impl AuthenticationBroker {
    pub fn new(config: BrokerConfig, context: HostContext) -> Self {
        tracing::debug!(broker = config.kind, origin = %context.origin(), "constructing broker");
        Self {
            kind: config.kind,
            capabilities: config.capabilities,
            commands: config.commands,
            context,
            channel: config.channel,
            channel_binding: config.channel_binding,
            confirmed_subject: None,
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.has(capability)
    }

    pub fn get_capability(&self, capability: Capability) -> Option<bool> {
        self.capabilities.get(capability)
    }

    pub fn set_capability(&mut self, capability: Capability, value: bool) {
        self.capabilities.set(capability, value);
    }

    pub fn unset_capability(&mut self, capability: Capability) {
        self.capabilities.unset(capability);
    }

    /// Resolve an abstract command against the variant's table. `Ok(None)`
    /// means the variant deliberately does not send this event.
    pub fn command(&self, command: Command) -> Result<Option<&str>, BrokerError> {
        let table = self
            .commands
            .as_ref()
            .ok_or(BrokerError::CommandsNotSpecified)?;
        table.get(command)
    }

    /// The broker's channel, constructed on first use and memoized for the
    /// broker's lifetime.
    pub fn channel(&mut self) -> Result<Arc<dyn Channel>, BrokerError> {
        if let Some(channel) = &self.channel {
            return Ok(Arc::clone(channel));
        }
        let binding = self
            .channel_binding
            .as_ref()
            .ok_or(BrokerError::ChannelNotSpecified)?;
        let channel = binding(&self.context);
        self.channel = Some(Arc::clone(&channel));
        Ok(channel)
    }

    async fn send_command(&mut self, command: Command, data: Value) -> Result<(), BrokerError> {
        let Some(wire_id) = self.command(command)?.map(str::to_string) else {
            tracing::debug!(broker = self.kind, command = %command, "command disabled, not sending");
            return Ok(());
        };
        let channel = self.channel()?;
        channel.send(&wire_id, data).await?;
        Ok(())
    }

    async fn request_command(
        &mut self,
        command: Command,
        data: Value,
    ) -> Result<Option<Value>, BrokerError> {
        let Some(wire_id) = self.command(command)?.map(str::to_string) else {
            tracing::debug!(broker = self.kind, command = %command, "command disabled, not requesting");
            return Ok(None);
        };
        let channel = self.channel()?;
        let response = channel.request(&wire_id, data).await?;
        Ok(Some(response))
    }

    /// Reconcile the local account store against the host's report of its
    /// currently signed-in user.
    ///
    /// Gated on the `browserStatus` capability. Channel failures propagate:
    /// the caller must know whether reconciliation happened.
    pub async fn fetch(&mut self, store: &mut dyn AccountStore) -> Result<(), BrokerError> {
        if !self.has_capability(Capability::BrowserStatus) {
            return Ok(());
        }

        let Some(response) = self.request_command(Command::BrowserStatus, Value::Null).await?
        else {
            return Ok(());
        };

        let status: BrowserStatusResponse = match response {
            Value::Null => BrowserStatusResponse::default(),
            other => serde_json::from_value(other)
                .map_err(|err| BrokerError::MalformedStatus(err.to_string()).log())?,
        };

        match status.signed_in_user {
            Some(reported) => {
                tracing::debug!(broker = self.kind, "host reports a signed-in user, updating local store");
                let mut account = store.signed_in_account().unwrap_or_default();
                account.email = reported.email;
                account.session_token = reported.session_token;
                account.session_token_context = Some(SESSION_TOKEN_USED_FOR_SYNC.to_string());
                account.uid = reported.uid;
                account.verified = Some(reported.verified.unwrap_or(false));
                store.set_signed_in_account(account);
            }
            None => {
                tracing::debug!(broker = self.kind, "host reports no signed-in user, clearing local store");
                if let Some(current) = store.signed_in_account() {
                    store.remove_account(&current);
                }
            }
        }

        Ok(())
    }

    /// Ask the host whether this account may be linked, deduplicating
    /// consecutive prompts for the same subject.
    ///
    /// An explicit negative reply blocks with [`BrokerError::UserCanceledLogin`].
    /// A broken channel never blocks: the failure is logged and the hook
    /// resolves with a degraded outcome.
    pub async fn before_sign_in(&mut self, account: &Account) -> Result<HookOutcome, BrokerError> {
        if !self.has_capability(Capability::CanLinkAccount) {
            return Ok(HookOutcome::proceed());
        }
        let Some(wire_id) = self.command(Command::CanLinkAccount)?.map(str::to_string) else {
            return Ok(HookOutcome::proceed());
        };

        let subject = account.subject().map(str::to_string);
        if subject.is_some() && subject == self.confirmed_subject {
            tracing::debug!(broker = self.kind, "link already confirmed for this subject, skipping prompt");
            return Ok(HookOutcome::proceed());
        }

        let payload = serde_json::to_value(CanLinkAccountRequest {
            email: subject.clone().unwrap_or_default(),
        })?;

        let channel = self.channel()?;
        let response = match channel.request(&wire_id, payload).await {
            Ok(response) => response,
            Err(err) => {
                // Never let a broken host channel block sign-in.
                tracing::warn!(
                    broker = self.kind,
                    error = %err,
                    "link confirmation failed, continuing without it"
                );
                return Ok(HookOutcome::degraded());
            }
        };

        match response {
            // The host raised no objection.
            Value::Null => {
                self.confirmed_subject = subject;
                Ok(HookOutcome::proceed())
            }
            other => match serde_json::from_value::<CanLinkAccountResponse>(other) {
                Ok(reply) if reply.ok => {
                    self.confirmed_subject = subject;
                    Ok(HookOutcome::proceed())
                }
                Ok(_) => Err(BrokerError::UserCanceledLogin.log()),
                Err(err) => {
                    tracing::warn!(
                        broker = self.kind,
                        error = %err,
                        "unintelligible link confirmation reply, continuing without it"
                    );
                    Ok(HookOutcome::degraded())
                }
            },
        }
    }

    /// Tell the host a login happened.
    ///
    /// Suppressed entirely when any required login field other than
    /// `verified` is absent. `verifiedCanLinkAccount` is true only when the
    /// account's subject was already confirmed via [`Self::before_sign_in`].
    async fn notify_relier_of_login(&mut self, account: &Account) -> Result<(), BrokerError> {
        if !account.has_required_login_fields() {
            tracing::debug!(broker = self.kind, "account is missing required login fields, not notifying");
            return Ok(());
        }

        let mut data = LoginData::from_account(account);
        data.verified_can_link_account =
            Some(account.subject().is_some() && account.subject() == self.confirmed_subject.as_deref());

        self.send_command(Command::Login, serde_json::to_value(data)?).await
    }

    /// Announce that the flow finished loading. No payload.
    pub async fn after_loaded(&mut self) -> Result<HookOutcome, BrokerError> {
        self.send_command(Command::Loaded, Value::Null).await?;
        Ok(HookOutcome::proceed())
    }

    pub async fn after_sign_in(&mut self, account: &Account) -> Result<HookOutcome, BrokerError> {
        self.notify_relier_of_login(account).await?;
        Ok(HookOutcome::proceed())
    }

    pub async fn before_sign_up_confirmation_poll(
        &mut self,
        account: &Account,
    ) -> Result<HookOutcome, BrokerError> {
        self.notify_relier_of_login(account).await?;
        Ok(HookOutcome::proceed())
    }

    pub async fn after_reset_password_confirmation_poll(
        &mut self,
        account: &Account,
    ) -> Result<HookOutcome, BrokerError> {
        self.notify_relier_of_login(account).await?;
        Ok(HookOutcome::proceed())
    }

    /// Tell the host the password changed, when the variant both has the
    /// capability and carries the command.
    pub async fn after_change_password(
        &mut self,
        account: &Account,
    ) -> Result<HookOutcome, BrokerError> {
        if !self.has_capability(Capability::SendChangePasswordNotice) {
            return Ok(HookOutcome::proceed());
        }
        let data = LoginData::from_account(account);
        self.send_command(Command::ChangePassword, serde_json::to_value(data)?)
            .await?;
        Ok(HookOutcome::proceed())
    }

    /// Tell the host the account is gone.
    pub async fn after_delete_account(
        &mut self,
        account: &Account,
    ) -> Result<HookOutcome, BrokerError> {
        let data = DeleteAccountData {
            email: account.email.clone(),
            uid: account.uid.clone(),
        };
        self.send_command(Command::DeleteAccount, serde_json::to_value(data)?)
            .await?;
        Ok(HookOutcome::proceed())
    }
}

impl fmt::Debug for AuthenticationBroker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticationBroker")
            .field("kind", &self.kind)
            .field("capabilities", &self.capabilities)
            .field("commands", &self.commands)
            .field("channel", &self.channel.is_some())
            .field("confirmed_subject", &self.confirmed_subject)
            .finish()
    }
}
