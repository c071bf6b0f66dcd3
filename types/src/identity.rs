//! Identity address type with `ubi_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The address of an identity — an account potentially verified as a unique
/// human by the humanity registry.
///
/// Always prefixed with `ubi_`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity(String);

impl Identity {
    /// The standard prefix for all identity addresses.
    pub const PREFIX: &'static str = "ubi_";

    /// Create a new identity address from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not start with `ubi_`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "address must start with ubi_");
        Self(s)
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this address is well-formed.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
