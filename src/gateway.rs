//! L1 Gateway Core
//!
//! This module implements the home-ledger side of the token bridge: escrow of
//! deposited funds and the authorization gate that decides which inbound
//! cross-domain messages may release them.
//!
//! ## Security Requirements
//!
//! ⚠️ **CRITICAL**: every inbound entry point that moves escrowed funds must
//! pass the two-stage authorization gate, in order:
//!
//! 1. **Transport authentication** — the caller must be the configured
//!    messenger. Rejects direct external calls that forge the entry point.
//! 2. **Origin authentication** — the messenger-attested author of the
//!    in-flight message must be the configured peer gateway. Rejects messages
//!    authored by any other contract routed through the same messenger.
//!
//! The two checks defend against distinct threat models and are kept as
//! separate predicates; any future inbound operation must repeat both.

use thiserror::Error;
use tracing::{info, warn};

use crate::address::Address;
use crate::config::GatewayConfig;
use crate::ledger::{LedgerError, TokenLedger};
use crate::message::GatewayMessage;
use crate::messenger::{MessengerClient, OutboundMessage, RelayContext};

// ============================================================================
// CALL CONTEXTS AND ERRORS
// ============================================================================

/// Caller context for the user-facing deposit entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    /// The account initiating the call and funding the deposit.
    pub caller: Address,
}

/// Failure modes of the gateway's entry points.
///
/// Every failure aborts the whole call with no partial effect. Ledger failures
/// are surfaced verbatim; the two authorization failures are distinguishable so
/// an operator can tell a forged direct call from a mis-routed relay.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The depositor has not approved the gateway for the requested amount.
    #[error("transfer amount exceeds allowance")]
    InsufficientAllowance,

    /// The depositor (or, on withdrawal, the escrow itself) lacks funds.
    #[error("transfer amount exceeds balance")]
    InsufficientBalance,

    /// Finalize-withdrawal was invoked by something other than the messenger.
    #[error("messenger contract unauthenticated: called by {caller}")]
    UnauthenticatedMessenger { caller: Address },

    /// The relayed message was authored by something other than the peer gateway.
    #[error("wrong originator of cross-domain message: {originator}")]
    WrongMessageOriginator { originator: Address },
}

impl From<LedgerError> for GatewayError {
    fn from(e: LedgerError) -> Self {
        match e {
            LedgerError::InsufficientAllowance => GatewayError::InsufficientAllowance,
            LedgerError::InsufficientBalance => GatewayError::InsufficientBalance,
        }
    }
}

// ============================================================================
// AUTHORIZATION GUARDS
// ============================================================================

/// Transport authentication: the entry point must be invoked by the messenger.
fn check_transport(config: &GatewayConfig, ctx: &RelayContext) -> Result<(), GatewayError> {
    if ctx.caller != config.messenger_address {
        return Err(GatewayError::UnauthenticatedMessenger {
            caller: ctx.caller.clone(),
        });
    }
    Ok(())
}

/// Origin authentication: the in-flight message must be authored by the peer.
fn check_originator(config: &GatewayConfig, ctx: &RelayContext) -> Result<(), GatewayError> {
    if ctx.originator != config.peer_gateway_address {
        return Err(GatewayError::WrongMessageOriginator {
            originator: ctx.originator.clone(),
        });
    }
    Ok(())
}

// ============================================================================
// GATEWAY
// ============================================================================

/// The L1 side of the token bridge.
///
/// Escrows deposited tokens in its own ledger account, emits one outbound
/// cross-domain message per deposit, and releases escrow only for inbound
/// messages that pass the two-stage authorization gate. The gateway keeps no
/// bookkeeping of its own: the ledger's balance of `address` is the escrow.
///
/// Calls are serialized by the execution environment; a call either completes
/// fully or aborts with no effect. The ledger transfer is the single fallible
/// mutation in each entry point, and the outbound message is submitted only
/// after the transfer has succeeded.
pub struct L1Gateway<L, M> {
    config: GatewayConfig,
    /// The gateway's own account on the token ledger (the escrow account).
    address: Address,
    ledger: L,
    messenger: M,
}

impl<L: TokenLedger, M: MessengerClient> L1Gateway<L, M> {
    /// Constructs a gateway from validated wiring.
    ///
    /// # Arguments
    ///
    /// * `config` - Token, peer gateway, and messenger addresses (immutable)
    /// * `address` - The gateway's own ledger account, holding the escrow
    /// * `ledger` - Token ledger collaborator
    /// * `messenger` - Cross-domain transport collaborator
    ///
    /// # Returns
    ///
    /// * `Ok(L1Gateway)` - Wiring passed validation
    /// * `Err(anyhow::Error)` - A configured address is the zero address
    pub fn new(
        config: GatewayConfig,
        address: Address,
        ledger: L,
        messenger: M,
    ) -> anyhow::Result<Self> {
        config.validate()?;
        if address.is_zero() {
            anyhow::bail!("gateway address must not be the zero address");
        }
        Ok(Self {
            config,
            address,
            ledger,
            messenger,
        })
    }

    /// The gateway's wiring.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// The gateway's own ledger account.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Total funds currently locked on behalf of the remote ledger.
    pub fn escrow_balance(&self) -> u64 {
        self.ledger.balance_of(&self.address)
    }

    /// Deposits `amount` for credit to the caller on the remote ledger.
    pub fn deposit(&self, ctx: &CallContext, amount: u64) -> Result<(), GatewayError> {
        let recipient = ctx.caller.clone();
        self.deposit_to(ctx, recipient, amount)
    }

    /// Deposits `amount` for credit to `recipient` on the remote ledger.
    ///
    /// Pulls the funds from the caller into the gateway's escrow account, then
    /// submits exactly one cross-domain message instructing the peer gateway to
    /// credit `recipient`. If the ledger transfer fails the call aborts and no
    /// message is sent.
    pub fn deposit_to(
        &self,
        ctx: &CallContext,
        recipient: Address,
        amount: u64,
    ) -> Result<(), GatewayError> {
        // Stage the outbound message first; the ledger transfer is the commit
        // point, and submission afterwards cannot fail.
        let message = OutboundMessage {
            target: self.config.peer_gateway_address.clone(),
            payload: GatewayMessage::FinalizeDeposit {
                recipient: recipient.clone(),
                amount,
            }
            .encode(),
        };

        self.ledger
            .transfer_from(&ctx.caller, &self.address, amount)?;
        self.messenger.send_message(message);

        info!(
            "Deposit escrowed: depositor={}, recipient={}, amount={}",
            ctx.caller, recipient, amount
        );
        Ok(())
    }

    /// Releases `amount` of escrowed funds to `recipient`.
    ///
    /// This is the entry point the messenger invokes when relaying a
    /// withdrawal initiated on the remote ledger. Both authorization checks
    /// must pass, in order, before `(recipient, amount)` is treated as fact.
    /// An escrow shortfall surfaces the ledger's balance failure untouched:
    /// it would mean the peer authorized withdrawals exceeding deposits, and
    /// clamping it here would only mask the fault.
    pub fn finalize_withdrawal(
        &self,
        ctx: &RelayContext,
        recipient: Address,
        amount: u64,
    ) -> Result<(), GatewayError> {
        if let Err(e) = check_transport(&self.config, ctx) {
            warn!("Rejected finalize-withdrawal: {e}");
            return Err(e);
        }
        if let Err(e) = check_originator(&self.config, ctx) {
            warn!("Rejected finalize-withdrawal: {e}");
            return Err(e);
        }

        self.ledger.transfer(&self.address, &recipient, amount)?;

        info!(
            "Withdrawal finalized: recipient={}, amount={}",
            recipient, amount
        );
        Ok(())
    }
}
