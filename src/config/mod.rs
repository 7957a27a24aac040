//! Configuration Management Module
//!
//! This module handles loading and validating the gateway's configuration.
//! The configuration is fixed at construction time and never mutated at
//! runtime: the token contract, the peer (L2) gateway, and the cross-domain
//! messenger are wired once, and every authorization decision the gateway
//! makes derives from these three addresses.

use anyhow::{bail, Context as _};
use serde::{Deserialize, Serialize};

use crate::address::Address;

// ============================================================================
// CONFIGURATION STRUCTURES
// ============================================================================

/// Immutable wiring of the L1 gateway.
///
/// All three addresses must be non-zero. `peer_gateway_address` is the single
/// identity whose inbound cross-domain messages the gateway will honor;
/// `messenger_address` is the only caller allowed to present them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Address of the fungible-token contract whose funds the gateway escrows
    pub token_address: Address,
    /// Address of the mirror gateway on the remote (L2) ledger
    pub peer_gateway_address: Address,
    /// Address of the cross-domain messenger on this ledger
    pub messenger_address: Address,
}

/// Top-level configuration file contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Gateway wiring (token, peer gateway, messenger)
    pub gateway: GatewayConfig,
}

// ============================================================================
// CONFIGURATION LOADING AND VALIDATION
// ============================================================================

impl GatewayConfig {
    /// Checks the construction-time invariants of the wiring.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - All three addresses are non-zero
    /// * `Err(anyhow::Error)` - Which address is the zero address
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.token_address.is_zero() {
            bail!("token_address must not be the zero address");
        }
        if self.peer_gateway_address.is_zero() {
            bail!("peer_gateway_address must not be the zero address");
        }
        if self.messenger_address.is_zero() {
            bail!("messenger_address must not be the zero address");
        }
        Ok(())
    }
}

impl Config {
    /// Loads configuration from the TOML file.
    ///
    /// The path defaults to `config/gateway.toml` and can be overridden via the
    /// `GATEWAY_CONFIG_PATH` environment variable (used by tests). Validation
    /// runs as part of loading so a misconfigured gateway never constructs.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated configuration
    /// * `Err(anyhow::Error)` - Missing file, parse failure, or invalid wiring
    pub fn load() -> anyhow::Result<Self> {
        let config_path = std::env::var("GATEWAY_CONFIG_PATH")
            .unwrap_or_else(|_| "config/gateway.toml".to_string());

        if !std::path::Path::new(&config_path).exists() {
            bail!(
                "Configuration file '{}' not found. Please copy the template:\n\
                cp config/gateway.template.toml config/gateway.toml\n\
                Then edit config/gateway.toml with your actual addresses.",
                config_path
            );
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read '{config_path}'"))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse '{config_path}'"))?;
        config.gateway.validate()?;
        Ok(config)
    }
}
