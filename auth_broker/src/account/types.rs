use serde::{Deserialize, Serialize};

/// `session_token_context` value tagged onto accounts reconciled from the
/// host's browser-status report, marking the token as used for sync.
pub const SESSION_TOKEN_USED_FOR_SYNC: &str = "sync";

/// The account fields the broker recognizes. Everything else an account may
/// carry is opaque to this crate and stays with the owning store.
///
/// All fields are optional at the type level; which ones must be present is a
/// per-operation concern (see [`REQUIRED_LOGIN_FIELDS`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token_context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_fetch_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unwrap_b_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customize_sync: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declined_sync_engines: Option<Vec<String>>,
}

/// Fields consulted when deciding whether a login notification may be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    KeyFetchToken,
    SessionToken,
    Uid,
    UnwrapBKey,
    Verified,
}

/// Fields that must be present on an account before the host is notified of
/// a login. `Verified` is the one exception: it defaults to `false` when
/// absent instead of suppressing the notification.
pub const REQUIRED_LOGIN_FIELDS: &[LoginField] = &[
    LoginField::Email,
    LoginField::KeyFetchToken,
    LoginField::SessionToken,
    LoginField::Uid,
    LoginField::UnwrapBKey,
    LoginField::Verified,
];

impl Account {
    /// The identity a link-confirmation prompt is about.
    pub fn subject(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Whether the given login field carries a value.
    pub fn has(&self, field: LoginField) -> bool {
        match field {
            LoginField::Email => self.email.is_some(),
            LoginField::KeyFetchToken => self.key_fetch_token.is_some(),
            LoginField::SessionToken => self.session_token.is_some(),
            LoginField::Uid => self.uid.is_some(),
            LoginField::UnwrapBKey => self.unwrap_b_key.is_some(),
            LoginField::Verified => self.verified.is_some(),
        }
    }

    /// Clear a single login field.
    pub fn clear(&mut self, field: LoginField) {
        match field {
            LoginField::Email => self.email = None,
            LoginField::KeyFetchToken => self.key_fetch_token = None,
            LoginField::SessionToken => self.session_token = None,
            LoginField::Uid => self.uid = None,
            LoginField::UnwrapBKey => self.unwrap_b_key = None,
            LoginField::Verified => self.verified = None,
        }
    }

    /// True when every required login field except `Verified` is present.
    pub(crate) fn has_required_login_fields(&self) -> bool {
        REQUIRED_LOGIN_FIELDS
            .iter()
            .all(|field| *field == LoginField::Verified || self.has(*field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_account() -> Account {
        Account {
            email: Some("testuser@testuser.com".to_string()),
            uid: Some("uid".to_string()),
            session_token: Some("session-token".to_string()),
            key_fetch_token: Some("key-fetch-token".to_string()),
            unwrap_b_key: Some("unwrap-b-key".to_string()),
            verified: Some(true),
            ..Default::default()
        }
    }

    #[test]
    fn test_subject_is_the_email() {
        let account = full_account();
        assert_eq!(account.subject(), Some("testuser@testuser.com"));
        assert_eq!(Account::default().subject(), None);
    }

    #[test]
    fn test_required_login_fields_all_present() {
        assert!(full_account().has_required_login_fields());
    }

    #[test]
    fn test_missing_verified_does_not_suppress() {
        let mut account = full_account();
        account.clear(LoginField::Verified);
        assert!(account.has_required_login_fields());
    }

    #[test]
    fn test_each_missing_required_field_suppresses() {
        for field in REQUIRED_LOGIN_FIELDS {
            if *field == LoginField::Verified {
                continue;
            }
            let mut account = full_account();
            account.clear(*field);
            assert!(
                !account.has_required_login_fields(),
                "missing {field:?} should fail the required-field check"
            );
        }
    }

    #[test]
    fn test_serializes_camel_case_and_skips_absent_fields() {
        let account = Account {
            email: Some("testuser@testuser.com".to_string()),
            session_token: Some("token".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&account).expect("account should serialize");
        let object = value.as_object().expect("account serializes to an object");

        assert_eq!(object.get("email").and_then(|v| v.as_str()), Some("testuser@testuser.com"));
        assert_eq!(object.get("sessionToken").and_then(|v| v.as_str()), Some("token"));
        assert!(!object.contains_key("uid"));
        assert!(!object.contains_key("sessionTokenContext"));
    }

    #[test]
    fn test_deserializes_with_defaults() {
        let account: Account =
            serde_json::from_value(serde_json::json!({ "email": "a@b.c", "verified": true }))
                .expect("partial account should deserialize");
        assert_eq!(account.email.as_deref(), Some("a@b.c"));
        assert_eq!(account.verified, Some(true));
        assert_eq!(account.uid, None);
    }
}
