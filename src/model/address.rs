use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ValidationError;

/// Returns true when `s` is a well-formed EVM address: "0x" followed by
/// exactly 40 hex digits. Pure check, no checksum validation.
pub fn is_valid_address(s: &str) -> bool {
    let Some(digits) = s.strip_prefix("0x") else {
        return false;
    };
    digits.len() == 40 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// A validated wallet address in normalized (lower-case) form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !is_valid_address(trimmed) {
            return Err(ValidationError::InvalidAddress(raw.to_string()));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for WalletAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The set of wallets an analysis tracks. Keeps first-seen input order for
/// node placement and answers membership case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct WalletSet {
    ordered: Vec<WalletAddress>,
    members: HashSet<String>,
}

impl WalletSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the tracked set from raw user input. Invalid entries and
    /// case-insensitive duplicates are silently dropped.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for entry in raw {
            if let Ok(address) = WalletAddress::parse(entry.as_ref()) {
                set.insert(address);
            }
        }
        set
    }

    /// Returns false when the address was already tracked.
    pub fn insert(
        &mut self,
        address: WalletAddress,
    ) -> bool {
        if !self.members.insert(address.as_str().to_string()) {
            return false;
        }
        self.ordered.push(address);
        true
    }

    /// Case-insensitive membership test against any raw address string.
    pub fn contains(
        &self,
        candidate: &str,
    ) -> bool {
        self.members.contains(&candidate.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WalletAddress> {
        self.ordered.iter()
    }

    pub fn addresses(&self) -> &[WalletAddress] {
        &self.ordered
    }
}
