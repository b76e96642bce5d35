use serde::{Deserialize, Serialize};

use crate::account::Account;

/// What a lifecycle hook tells its caller.
///
/// `halt` asks the hosting flow to abort its own continuation; no hook halts
/// by default. `degraded` records that a channel failure was deliberately
/// swallowed so the flow could proceed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HookOutcome {
    pub halt: bool,
    pub degraded: bool,
}

impl HookOutcome {
    /// The default outcome: carry on.
    pub fn proceed() -> Self {
        Self::default()
    }

    pub(crate) fn degraded() -> Self {
        Self {
            halt: false,
            degraded: true,
        }
    }
}

/// Payload for LOGIN and CHANGE_PASSWORD notifications: the recognized
/// account fields minus `sessionTokenContext`, which never goes back out.
/// `verifiedCanLinkAccount` is set for login only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_fetch_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unwrap_b_key: Option<String>,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customize_sync: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declined_sync_engines: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_can_link_account: Option<bool>,
}

impl LoginData {
    /// Project the outgoing fields from an account. `verified` defaults to
    /// false when the account has not recorded it.
    pub(crate) fn from_account(account: &Account) -> Self {
        Self {
            email: account.email.clone(),
            uid: account.uid.clone(),
            session_token: account.session_token.clone(),
            key_fetch_token: account.key_fetch_token.clone(),
            unwrap_b_key: account.unwrap_b_key.clone(),
            verified: account.verified.unwrap_or(false),
            customize_sync: account.customize_sync,
            declined_sync_engines: account.declined_sync_engines.clone(),
            verified_can_link_account: None,
        }
    }
}

/// DELETE_ACCOUNT payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeleteAccountData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// CAN_LINK_ACCOUNT request body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CanLinkAccountRequest {
    pub email: String,
}

/// CAN_LINK_ACCOUNT reply. A missing `ok` is a rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CanLinkAccountResponse {
    pub ok: bool,
}

/// BROWSER_STATUS reply.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct BrowserStatusResponse {
    pub signed_in_user: Option<BrowserSignedInUser>,
}

/// The host's view of its signed-in user.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct BrowserSignedInUser {
    pub email: Option<String>,
    pub session_token: Option<String>,
    pub uid: Option<String>,
    pub verified: Option<bool>,
}
