//! Cross-Domain Payload Encoding
//!
//! Instructions exchanged between the two gateways travel as opaque bytes
//! through the messenger. This module defines the instruction set and its
//! encoding. JSON keeps the payload deterministic for a fixed type layout and
//! inspectable by relay tooling; the enum tag distinguishes instructions so the
//! set can grow without breaking decoders.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::address::Address;

/// Decoding failure for an inbound payload.
#[derive(Error, Debug)]
#[error("malformed gateway message payload: {0}")]
pub struct MessageDecodeError(#[from] serde_json::Error);

/// Instruction carried in a cross-domain message between the paired gateways.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "instruction", rename_all = "snake_case")]
pub enum GatewayMessage {
    /// Credit `amount` to `recipient` on the remote ledger, backed by funds
    /// escrowed on this side.
    FinalizeDeposit { recipient: Address, amount: u64 },
}

impl GatewayMessage {
    /// Encodes the instruction into its wire form.
    pub fn encode(&self) -> Vec<u8> {
        // Serialization of a tagged enum over (Address, u64) cannot fail.
        serde_json::to_vec(self).expect("gateway message encoding is infallible")
    }

    /// Decodes an instruction from its wire form.
    pub fn decode(payload: &[u8]) -> Result<Self, MessageDecodeError> {
        Ok(serde_json::from_slice(payload)?)
    }
}
