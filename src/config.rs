//! Start-up configuration.
//!
//! The file is read once into [`RawConfig`] and then validated into
//! [`PanelConfig`]; nothing downstream ever sees an unparsed address or
//! amount.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use alloy::{
    primitives::{Address, U256},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use dirs::{config_dir, data_local_dir};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, COSMOS_ADDRESS_PREFIX, DEFAULT_MINT_AMOUNT,
    ENV_CONFIG_PATH, ENV_ENVIRONMENT_ID, ENV_PRIVATE_KEY, FALLBACK_REFRESH_DELAY_MILLIS,
    LOG_FILE_NAME, NETWORKS, RECEIPT_POLL_INTERVAL_MILLIS, SEI_MAINNET_CHAIN_ID,
    SEI_TESTNET_CHAIN_ID, STAKE_CONTRACT_ADDRESS, VALIDATOR_ADDRESS, VALIDATOR_PREFIX,
    WASMD_PRECOMPILE_ADDRESS,
};
use crate::error::ConfigError;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    pub environment_id: Option<String>,
    pub active_chain_id: Option<u64>,
    pub switch_target_chain_id: Option<u64>,
    pub receipt_poll_interval_ms: Option<u64>,
    pub fallback_refresh_delay_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub wallet: RawWallet,
    pub contracts: RawContracts,
    pub networks: Vec<RawNetwork>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawWallet {
    pub private_key: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawContracts {
    pub token_address: Option<String>,
    pub staking_address: Option<String>,
    pub validator_address: Option<String>,
    pub mint_amount: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawNetwork {
    pub name: String,
    pub chain_id: u64,
    pub rpc_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkConfig {
    pub name: String,
    pub chain_id: u64,
    pub rpc_url: Url,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContractConfig {
    pub token_address: Address,
    pub staking_address: Address,
    pub validator_address: String,
    pub mint_amount: U256,
}

impl Default for ContractConfig {
    fn default() -> Self {
        ContractConfig {
            token_address: Address::from_str(WASMD_PRECOMPILE_ADDRESS)
                .unwrap_or(Address::ZERO),
            staking_address: Address::from_str(STAKE_CONTRACT_ADDRESS)
                .unwrap_or(Address::ZERO),
            validator_address: VALIDATOR_ADDRESS.to_string(),
            mint_amount: U256::from(DEFAULT_MINT_AMOUNT),
        }
    }
}

/// Where the primary wallet comes from.
#[derive(Debug, Clone)]
pub enum WalletSource {
    /// Local signer, usable for contract calls.
    PrivateKey(PrivateKeySigner),
    /// Bech32 account with no EVM signer.
    Cosmos(String),
    None,
}

#[derive(Debug, Clone)]
pub struct PanelConfig {
    pub environment_id: String,
    pub networks: Vec<NetworkConfig>,
    pub active_chain_id: u64,
    pub switch_target_chain_id: u64,
    pub wallet: WalletSource,
    pub contracts: ContractConfig,
    pub receipt_poll_interval: Duration,
    pub fallback_refresh_delay: Duration,
    pub log_file: PathBuf,
}

impl PanelConfig {
    /// Reads the config file (if any), applies environment overrides and
    /// validates the result.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path();
        let mut raw = match path {
            Some(ref path) if path.exists() => RawConfig::from_file(path)?,
            Some(ref path) => {
                debug!(path = %path.display(), "no config file, using defaults");
                RawConfig::default()
            }
            None => RawConfig::default(),
        };

        if let Ok(key) = std::env::var(ENV_PRIVATE_KEY) {
            raw.wallet.private_key = Some(key);
        }
        if let Ok(id) = std::env::var(ENV_ENVIRONMENT_ID) {
            raw.environment_id = Some(id);
        }

        raw.validate()
    }

    pub fn network(&self, chain_id: u64) -> Option<&NetworkConfig> {
        self.networks.iter().find(|n| n.chain_id == chain_id)
    }
}

impl RawConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn validate(self) -> Result<PanelConfig, ConfigError> {
        let networks = if self.networks.is_empty() {
            NETWORKS
                .iter()
                .map(|(name, chain_id, rpc)| RawNetwork {
                    name: name.to_string(),
                    chain_id: *chain_id,
                    rpc_url: rpc.to_string(),
                })
                .collect()
        } else {
            self.networks
        };

        let mut parsed_networks: Vec<NetworkConfig> = Vec::with_capacity(networks.len());
        for network in networks {
            if parsed_networks.iter().any(|n| n.chain_id == network.chain_id) {
                return Err(ConfigError::invalid(
                    "networks",
                    format!("chain {} listed twice", network.chain_id),
                ));
            }
            let rpc_url = network
                .rpc_url
                .parse::<Url>()
                .map_err(|e| ConfigError::invalid("networks.rpc_url", format!("{}: {}", network.rpc_url, e)))?;
            parsed_networks.push(NetworkConfig {
                name: network.name,
                chain_id: network.chain_id,
                rpc_url,
            });
        }

        let active_chain_id = self.active_chain_id.unwrap_or(SEI_MAINNET_CHAIN_ID);
        if !parsed_networks.iter().any(|n| n.chain_id == active_chain_id) {
            return Err(ConfigError::invalid(
                "active_chain_id",
                format!("chain {} is not in the network list", active_chain_id),
            ));
        }

        let switch_target_chain_id = self.switch_target_chain_id.unwrap_or(SEI_TESTNET_CHAIN_ID);
        if !parsed_networks.iter().any(|n| n.chain_id == switch_target_chain_id) {
            return Err(ConfigError::invalid(
                "switch_target_chain_id",
                format!("chain {} is not in the network list", switch_target_chain_id),
            ));
        }

        let contracts = self.contracts.validate()?;
        let wallet = self.wallet.validate()?;

        let environment_id = self.environment_id.unwrap_or_default();
        if environment_id.is_empty() {
            warn!("environment_id is empty");
        }

        let log_file = self.log_file.unwrap_or_else(default_log_path);

        Ok(PanelConfig {
            environment_id,
            networks: parsed_networks,
            active_chain_id,
            switch_target_chain_id,
            wallet,
            contracts,
            receipt_poll_interval: Duration::from_millis(
                self.receipt_poll_interval_ms.unwrap_or(RECEIPT_POLL_INTERVAL_MILLIS),
            ),
            fallback_refresh_delay: Duration::from_millis(
                self.fallback_refresh_delay_ms.unwrap_or(FALLBACK_REFRESH_DELAY_MILLIS),
            ),
            log_file,
        })
    }
}

impl RawContracts {
    fn validate(self) -> Result<ContractConfig, ConfigError> {
        let defaults = ContractConfig::default();

        let token_address = match self.token_address {
            Some(s) => parse_address("contracts.token_address", &s)?,
            None => defaults.token_address,
        };
        let staking_address = match self.staking_address {
            Some(s) => parse_address("contracts.staking_address", &s)?,
            None => defaults.staking_address,
        };

        let validator_address = self.validator_address.unwrap_or(defaults.validator_address);
        if !validator_address.starts_with(VALIDATOR_PREFIX) {
            return Err(ConfigError::invalid(
                "contracts.validator_address",
                format!("expected a {} address, got {}", VALIDATOR_PREFIX, validator_address),
            ));
        }

        let mint_amount = match self.mint_amount {
            Some(s) => U256::from_str(s.trim())
                .map_err(|e| ConfigError::invalid("contracts.mint_amount", format!("{}: {}", s, e)))?,
            None => defaults.mint_amount,
        };
        if mint_amount.is_zero() {
            return Err(ConfigError::invalid("contracts.mint_amount", "must be greater than zero"));
        }

        Ok(ContractConfig {
            token_address,
            staking_address,
            validator_address,
            mint_amount,
        })
    }
}

impl RawWallet {
    fn validate(self) -> Result<WalletSource, ConfigError> {
        if let Some(key) = self.private_key.filter(|k| !k.trim().is_empty()) {
            let signer = key
                .trim()
                .parse::<PrivateKeySigner>()
                .map_err(|e| ConfigError::invalid("wallet.private_key", e.to_string()))?;
            if let Some(address) = self.address {
                let expected = parse_address("wallet.address", &address)?;
                if expected != signer.address() {
                    return Err(ConfigError::invalid(
                        "wallet.address",
                        format!("{} does not match the private key ({})", expected, signer.address()),
                    ));
                }
            }
            return Ok(WalletSource::PrivateKey(signer));
        }

        match self.address {
            Some(address) if address.starts_with(COSMOS_ADDRESS_PREFIX) => Ok(WalletSource::Cosmos(address)),
            Some(address) => Err(ConfigError::invalid(
                "wallet.address",
                format!("{} needs a private key to be used as an EVM wallet", address),
            )),
            None => Ok(WalletSource::None),
        }
    }
}

fn parse_address(field: &'static str, value: &str) -> Result<Address, ConfigError> {
    Address::from_str(value.trim()).map_err(|e| ConfigError::invalid(field, format!("{}: {}", value, e)))
}

pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(ENV_CONFIG_PATH) {
        return Some(PathBuf::from(path));
    }
    config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn default_log_path() -> PathBuf {
    data_local_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_FILE_NAME)
}
