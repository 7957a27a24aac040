//! Shared test helpers for unit tests
//!
//! This module provides the collaborator mocks and fixtures used by the
//! gateway test suites:
//! - **Dummy addresses**: fixed identities for the token, gateways, messenger,
//!   and users
//! - **InMemoryLedger**: a minimal fungible-token ledger with balances and
//!   allowances, atomic per transfer
//! - **RecordingMessenger**: records submitted outbound messages instead of
//!   relaying them
//! - **Environment builders**: pre-funded setups mirroring the bridge's
//!   deposit and withdrawal scenarios

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use l1_gateway::{
    Address, GatewayConfig, L1Gateway, LedgerError, MessengerClient, OutboundMessage, TokenLedger,
};

// ============================================================================
// CONSTANTS
// ============================================================================

// ------------------------- TOKENS AND CONTRACTS -------------------------

/// Dummy token contract address
pub const DUMMY_TOKEN_ADDR: &str = "0x0000000000000000000000000000000000000010";

/// Dummy peer (L2) gateway address
pub const DUMMY_PEER_GATEWAY_ADDR: &str = "0x0000000000000000000000000000000000000020";

/// Dummy cross-domain messenger address
pub const DUMMY_MESSENGER_ADDR: &str = "0x0000000000000000000000000000000000000030";

/// Dummy ledger account of the L1 gateway itself (the escrow account)
pub const DUMMY_GATEWAY_ADDR: &str = "0x0000000000000000000000000000000000000040";

// -------------------------------- USERS ---------------------------------

/// Dummy depositor address
pub const DUMMY_USER1_ADDR: &str = "0x0000000000000000000000000000000000000001";

/// Dummy recipient address
pub const DUMMY_USER2_ADDR: &str = "0x0000000000000000000000000000000000000002";

/// Dummy third-party address (neither messenger nor peer gateway)
pub const DUMMY_USER3_ADDR: &str = "0x0000000000000000000000000000000000000003";

// ------------------------------- AMOUNTS --------------------------------

/// Token supply minted to the funded account in each environment
pub const INITIAL_TOTAL_L1_SUPPLY: u64 = 3000;

/// Amount moved by the standard deposit/withdrawal scenarios
pub const DEPOSIT_AMOUNT: u64 = 100;

/// Helper: parse a known-good dummy address
pub fn addr(raw: &str) -> Address {
    Address::parse(raw).expect("dummy address is valid")
}

// ============================================================================
// IN-MEMORY TOKEN LEDGER
// ============================================================================

#[derive(Default)]
struct LedgerState {
    balances: HashMap<Address, u64>,
    /// (owner, spender) -> approved amount
    allowances: HashMap<(Address, Address), u64>,
}

/// A minimal in-memory fungible-token ledger.
///
/// Clones share state, so a test can keep a handle for minting and assertions
/// while the gateway owns another. Transfers are atomic: a failed transfer
/// leaves balances and allowances untouched.
#[derive(Clone, Default)]
pub struct InMemoryLedger {
    state: Arc<Mutex<LedgerState>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` to `account` out of thin air.
    pub fn mint(&self, account: &Address, amount: u64) {
        let mut state = self.state.lock().unwrap();
        *state.balances.entry(account.clone()).or_insert(0) += amount;
    }

    /// Sets `spender`'s allowance over `owner`'s funds to exactly `amount`.
    pub fn approve(&self, owner: &Address, spender: &Address, amount: u64) {
        let mut state = self.state.lock().unwrap();
        state
            .allowances
            .insert((owner.clone(), spender.clone()), amount);
    }
}

impl TokenLedger for InMemoryLedger {
    fn transfer_from(
        &self,
        owner: &Address,
        spender: &Address,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let mut state = self.state.lock().unwrap();
        let key = (owner.clone(), spender.clone());
        let allowance = state.allowances.get(&key).copied().unwrap_or(0);
        if allowance < amount {
            return Err(LedgerError::InsufficientAllowance);
        }
        let owner_balance = state.balances.get(owner).copied().unwrap_or(0);
        if owner_balance < amount {
            return Err(LedgerError::InsufficientBalance);
        }
        state.allowances.insert(key, allowance - amount);
        state.balances.insert(owner.clone(), owner_balance - amount);
        *state.balances.entry(spender.clone()).or_insert(0) += amount;
        Ok(())
    }

    fn transfer(
        &self,
        from: &Address,
        recipient: &Address,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let mut state = self.state.lock().unwrap();
        let from_balance = state.balances.get(from).copied().unwrap_or(0);
        if from_balance < amount {
            return Err(LedgerError::InsufficientBalance);
        }
        state.balances.insert(from.clone(), from_balance - amount);
        *state.balances.entry(recipient.clone()).or_insert(0) += amount;
        Ok(())
    }

    fn balance_of(&self, account: &Address) -> u64 {
        self.state.lock().unwrap().balances.get(account).copied().unwrap_or(0)
    }
}

// ============================================================================
// RECORDING MESSENGER
// ============================================================================

/// A messenger that records submitted messages instead of relaying them.
#[derive(Clone, Default)]
pub struct RecordingMessenger {
    sent: Arc<Mutex<Vec<OutboundMessage>>>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages submitted so far, in submission order.
    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl MessengerClient for RecordingMessenger {
    fn send_message(&self, message: OutboundMessage) {
        self.sent.lock().unwrap().push(message);
    }
}

// ============================================================================
// ENVIRONMENT BUILDERS
// ============================================================================

/// A wired gateway plus handles to its mocked collaborators.
pub struct TestEnv {
    pub gateway: L1Gateway<InMemoryLedger, RecordingMessenger>,
    pub ledger: InMemoryLedger,
    pub messenger: RecordingMessenger,
}

/// Standard gateway wiring used by every environment.
pub fn test_gateway_config() -> GatewayConfig {
    GatewayConfig {
        token_address: addr(DUMMY_TOKEN_ADDR),
        peer_gateway_address: addr(DUMMY_PEER_GATEWAY_ADDR),
        messenger_address: addr(DUMMY_MESSENGER_ADDR),
    }
}

/// Builds a gateway with empty ledger state.
pub fn setup_env() -> TestEnv {
    let _ = tracing_subscriber::fmt::try_init();
    let ledger = InMemoryLedger::new();
    let messenger = RecordingMessenger::new();
    let gateway = L1Gateway::new(
        test_gateway_config(),
        addr(DUMMY_GATEWAY_ADDR),
        ledger.clone(),
        messenger.clone(),
    )
    .expect("test wiring is valid");
    TestEnv {
        gateway,
        ledger,
        messenger,
    }
}

/// Builds the deposit scenario: user1 funded with the initial supply.
pub fn setup_deposit_env() -> TestEnv {
    let env = setup_env();
    env.ledger.mint(&addr(DUMMY_USER1_ADDR), INITIAL_TOTAL_L1_SUPPLY);
    env
}

/// Builds the withdrawal scenario: the gateway's escrow account pre-funded
/// with the initial supply, as if it had all been deposited earlier.
pub fn setup_withdraw_env() -> TestEnv {
    let env = setup_env();
    env.ledger
        .mint(&addr(DUMMY_GATEWAY_ADDR), INITIAL_TOTAL_L1_SUPPLY);
    env
}
