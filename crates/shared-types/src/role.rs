use serde::{Deserialize, Serialize};
use std::fmt;

/// The only role allowed to open the user-type selector.
pub const PRIVILEGED_ROLE: &str = "OWNER";

/// Role of the current viewer, carried verbatim from the access token.
///
/// Roles are opaque: apart from [`PRIVILEGED_ROLE`] no value has meaning
/// here, and comparison is exact (`"owner"` is not privileged).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    pub fn new(role: impl Into<String>) -> Self {
        Self(role.into())
    }

    /// The privileged role.
    pub fn owner() -> Self {
        Self(PRIVILEGED_ROLE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true only for the exact privileged role string.
    pub fn is_privileged(&self) -> bool {
        self.0 == PRIVILEGED_ROLE
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Self(s)
    }
}
