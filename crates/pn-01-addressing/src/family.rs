//! Transaction family identity.

use std::fmt;

/// Family name registered with the host ledger.
pub const FAMILY_NAME: &str = "pnrdnet";

/// Family version registered with the host ledger.
pub const FAMILY_VERSION: &str = "0.1";

/// Name + version pair selecting the rule set a transaction runs under.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FamilyConfig {
    /// Family name, hashed to derive the namespace.
    pub name: String,
    /// Family version.
    pub version: String,
}

impl FamilyConfig {
    /// Create a family identity.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Default for FamilyConfig {
    fn default() -> Self {
        Self::new(FAMILY_NAME, FAMILY_VERSION)
    }
}

impl fmt::Display for FamilyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}
