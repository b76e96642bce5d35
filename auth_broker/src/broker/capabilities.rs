use std::collections::HashMap;
use std::fmt;

/// Named optional behaviors a broker variant may enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// The flow offers sign-up at all.
    Signup,
    /// React to the host reporting a signed-in user elsewhere.
    HandleSignedInNotification,
    /// Show the marketing snippet after email verification.
    EmailVerificationMarketingSnippet,
    /// Ask the host for permission before linking an account.
    CanLinkAccount,
    /// Query the host for the currently signed-in user during `fetch`.
    BrowserStatus,
    /// Notify the host after a password change.
    SendChangePasswordNotice,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Signup => "signup",
            Capability::HandleSignedInNotification => "handleSignedInNotification",
            Capability::EmailVerificationMarketingSnippet => "emailVerificationMarketingSnippet",
            Capability::CanLinkAccount => "canLinkAccount",
            Capability::BrowserStatus => "browserStatus",
            Capability::SendChangePasswordNotice => "sendChangePasswordNotice",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-instance capability toggles.
///
/// A capability that was never set is off: absence of a key is equivalent to
/// `false`. Variant defaults are assembled with [`CapabilitySet::merged_with`]
/// in declaration order, most-derived wins; the parent set is never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapabilitySet {
    entries: HashMap<Capability, bool>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the capability is enabled. Absent means no.
    pub fn has(&self, capability: Capability) -> bool {
        self.get(capability).unwrap_or(false)
    }

    /// The raw toggle value, `None` when the capability was never set.
    pub fn get(&self, capability: Capability) -> Option<bool> {
        self.entries.get(&capability).copied()
    }

    pub fn set(&mut self, capability: Capability, value: bool) {
        self.entries.insert(capability, value);
    }

    pub fn unset(&mut self, capability: Capability) {
        self.entries.remove(&capability);
    }

    /// Shallow merge: every key in `overrides` wins over this set's value.
    /// Returns a new set; neither input is mutated.
    pub fn merged_with(&self, overrides: &CapabilitySet) -> CapabilitySet {
        let mut entries = self.entries.clone();
        for (capability, value) in &overrides.entries {
            entries.insert(*capability, *value);
        }
        CapabilitySet { entries }
    }
}

impl FromIterator<(Capability, bool)> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = (Capability, bool)>>(iter: I) -> Self {
        CapabilitySet {
            entries: iter.into_iter().collect(),
        }
    }
}
