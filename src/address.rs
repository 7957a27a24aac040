//! Ledger Address Handling
//!
//! This module provides the `Address` type used for every on-ledger identity the
//! gateway deals with: the token contract, the peer (L2) gateway, the cross-domain
//! messenger, and user accounts. Addresses are hex strings with a `0x` prefix;
//! different ledgers use different widths (20 bytes for EVM-style, 32 bytes for
//! Move VM-style), so the type preserves width and normalizes only the case.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when parsing an address from its hex form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must start with 0x: '{0}'")]
    MissingPrefix(String),

    #[error("address is not valid hex: '{0}'")]
    InvalidHex(String),

    #[error("address must not be empty")]
    Empty,
}

/// A normalized on-ledger address.
///
/// Stored as a lowercase `0x`-prefixed hex string. Two addresses that differ only
/// in hex case compare equal after parsing; width is preserved so that EVM and
/// Move VM addresses never collide by accident.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Parses and normalizes an address from its hex string form.
    ///
    /// # Arguments
    ///
    /// * `raw` - The address string (e.g., "0xAbC..." in any hex case)
    ///
    /// # Returns
    ///
    /// * `Ok(Address)` - Normalized (lowercased) address
    /// * `Err(AddressError)` - Missing prefix, empty, or non-hex characters
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        let stripped = raw
            .strip_prefix("0x")
            .ok_or_else(|| AddressError::MissingPrefix(raw.to_string()))?;
        if stripped.is_empty() {
            return Err(AddressError::Empty);
        }
        // Odd-length hex is tolerated by some chains' tooling; pad for the
        // validity check only, the stored form keeps the original width.
        let padded = if stripped.len() % 2 == 0 {
            stripped.to_string()
        } else {
            format!("0{stripped}")
        };
        hex::decode(&padded).map_err(|_| AddressError::InvalidHex(raw.to_string()))?;
        Ok(Self(format!("0x{}", stripped.to_lowercase())))
    }

    /// Returns true if every byte of the address is zero.
    ///
    /// The all-zero address is not a real account on any supported ledger and is
    /// rejected wherever the gateway configuration names a collaborator.
    pub fn is_zero(&self) -> bool {
        self.0[2..].chars().all(|c| c == '0')
    }

    /// The normalized hex form, with `0x` prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.0
    }
}
