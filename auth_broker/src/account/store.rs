use super::types::Account;

/// Collaborator contract for the local account cache.
///
/// The broker calls these synchronously while reconciling host-reported
/// state; how the store persists accounts is its own concern. The host
/// application supplies the real implementation.
pub trait AccountStore: Send {
    /// The account the store currently considers signed in, if any.
    fn signed_in_account(&self) -> Option<Account>;

    /// Replace the signed-in account with the given record.
    fn set_signed_in_account(&mut self, account: Account);

    /// Remove the given account from the store.
    fn remove_account(&mut self, account: &Account);
}

/// In-memory store holding at most the signed-in account. Used by tests and
/// by glue code that has no persistence of its own.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountStore {
    signed_in: Option<Account>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_signed_in(account: Account) -> Self {
        Self {
            signed_in: Some(account),
        }
    }
}

impl AccountStore for InMemoryAccountStore {
    fn signed_in_account(&self) -> Option<Account> {
        self.signed_in.clone()
    }

    fn set_signed_in_account(&mut self, account: Account) {
        self.signed_in = Some(account);
    }

    fn remove_account(&mut self, account: &Account) {
        let matches = self.signed_in.as_ref().is_some_and(|current| {
            if current.uid.is_some() || account.uid.is_some() {
                current.uid == account.uid
            } else {
                current.email == account.email
            }
        });
        if matches {
            self.signed_in = None;
        }
    }
}
