//! Token Ledger Interface
//!
//! The gateway never holds balances itself: the token ledger's balance entry for
//! the gateway's own address IS the escrow. This module defines the narrow slice
//! of the fungible-token interface the gateway consumes, together with the
//! failure modes the ledger can surface. The production ledger lives on-chain
//! and is external to this crate; tests provide an in-memory implementation.

use thiserror::Error;

use crate::address::Address;

/// Failure modes of a ledger transfer.
///
/// These are surfaced to gateway callers verbatim: the gateway performs no
/// compensating logic and no retries on ledger failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("transfer amount exceeds allowance")]
    InsufficientAllowance,

    #[error("transfer amount exceeds balance")]
    InsufficientBalance,
}

/// The slice of a fungible-token ledger the gateway depends on.
///
/// Both transfer operations are atomic on the ledger side: a failed transfer
/// leaves every balance and allowance untouched.
pub trait TokenLedger {
    /// Moves `amount` from `owner` to `spender` using `spender`'s allowance.
    ///
    /// Fails with [`LedgerError::InsufficientAllowance`] if `owner` has approved
    /// `spender` for less than `amount`, or [`LedgerError::InsufficientBalance`]
    /// if `owner`'s balance is below `amount`. When both preconditions are
    /// violated the allowance failure wins.
    fn transfer_from(
        &self,
        owner: &Address,
        spender: &Address,
        amount: u64,
    ) -> Result<(), LedgerError>;

    /// Moves `amount` from `from` to `recipient` on `from`'s own authority.
    ///
    /// Fails with [`LedgerError::InsufficientBalance`] if `from` holds less
    /// than `amount`.
    fn transfer(&self, from: &Address, recipient: &Address, amount: u64)
        -> Result<(), LedgerError>;

    /// Current balance of `account`.
    fn balance_of(&self, account: &Address) -> u64;
}
