//! Local account state: the record the broker projects onto the wire and
//! the collaborator contract for whatever persists it.

mod store;
mod types;

pub use store::{AccountStore, InMemoryAccountStore};
pub use types::{Account, LoginField, REQUIRED_LOGIN_FIELDS, SESSION_TOKEN_USED_FOR_SYNC};
