//! L1 Token Bridge Gateway Library
//!
//! This crate implements the home-ledger (L1) side of a two-sided token bridge:
//! it escrows deposited tokens, emits cross-domain messages that cause an
//! equivalent credit on the remote (L2) ledger, and releases escrowed funds
//! only for inbound messages that pass a two-stage authorization gate
//! (authenticated transport, then authenticated originator).
//!
//! The token ledger and the cross-domain messenger are external collaborators,
//! consumed through the [`ledger::TokenLedger`] and
//! [`messenger::MessengerClient`] traits.

pub mod address;
pub mod config;
pub mod gateway;
pub mod ledger;
pub mod message;
pub mod messenger;

// Re-export commonly used types
pub use address::{Address, AddressError};
pub use config::{Config, GatewayConfig};
pub use gateway::{CallContext, GatewayError, L1Gateway};
pub use ledger::{LedgerError, TokenLedger};
pub use message::{GatewayMessage, MessageDecodeError};
pub use messenger::{MessengerClient, OutboundMessage, RelayContext};
