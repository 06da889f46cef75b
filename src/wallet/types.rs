// Basic type definitions for the wallet module

use std::{fmt, sync::Arc};

use alloy::primitives::{Address, Bytes, TxHash, U256};

use super::client::EvmWallet;
use crate::dump::{Dump, DumpObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainFamily {
    Evm,
    Cosmos,
}

impl ChainFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainFamily::Evm => "EVM",
            ChainFamily::Cosmos => "COSMOS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CosmosAccount {
    pub address: String,
}

/// The connected account. Only the `Evm` variant can produce contract clients.
#[derive(Clone)]
pub enum WalletHandle {
    Evm(Arc<dyn EvmWallet>),
    Cosmos(CosmosAccount),
}

impl WalletHandle {
    pub fn address(&self) -> String {
        match self {
            WalletHandle::Evm(wallet) => wallet.address().to_string(),
            WalletHandle::Cosmos(account) => account.address.clone(),
        }
    }

    pub fn chain_family(&self) -> ChainFamily {
        match self {
            WalletHandle::Evm(_) => ChainFamily::Evm,
            WalletHandle::Cosmos(_) => ChainFamily::Cosmos,
        }
    }

    pub fn connector_name(&self) -> String {
        match self {
            WalletHandle::Evm(wallet) => wallet.connector_name().to_string(),
            WalletHandle::Cosmos(_) => "cosmos-readonly".to_string(),
        }
    }

    pub fn as_evm(&self) -> Option<&Arc<dyn EvmWallet>> {
        match self {
            WalletHandle::Evm(wallet) => Some(wallet),
            WalletHandle::Cosmos(_) => None,
        }
    }

    pub fn describe(&self) -> Dump {
        let wallet = DumpObject::new()
            .with("address", self.address())
            .with("chain", self.chain_family().as_str());
        if let WalletHandle::Evm(evm) = self {
            wallet.insert("activeChainId", evm.active_chain_id());
        }
        let connector = DumpObject::new()
            .with("name", self.connector_name())
            .with("connectedWallet", wallet.back_ref());
        wallet.insert("connector", connector);
        wallet.into()
    }
}

impl fmt::Debug for WalletHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletHandle")
            .field("chain", &self.chain_family())
            .field("address", &self.address())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSummary {
    pub address: String,
    pub chain: ChainFamily,
    pub connector: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user_id: String,
    pub environment_id: String,
    pub primary_address: String,
    pub chain: ChainFamily,
    pub connected_at: u64,
    pub verified_wallets: Vec<WalletSummary>,
}

impl UserProfile {
    pub fn describe(&self) -> Dump {
        let user = DumpObject::new()
            .with("userId", self.user_id.clone())
            .with("environmentId", self.environment_id.clone())
            .with("primaryAddress", self.primary_address.clone())
            .with("chain", self.chain.as_str())
            .with("lastVerifiedAt", self.connected_at);
        let credentials: Vec<Dump> = self
            .verified_wallets
            .iter()
            .map(|w| {
                DumpObject::new()
                    .with("address", w.address.clone())
                    .with("chain", w.chain.as_str())
                    .with("walletName", w.connector.clone())
                    .with("user", user.back_ref())
                    .into()
            })
            .collect();
        user.insert("verifiedCredentials", credentials);
        user.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxReceipt {
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
    pub success: bool,
}

/// A contract write as handed to a [`super::WalletClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractWrite {
    pub address: Address,
    pub data: Bytes,
    pub value: U256,
}

/// Generic `eth_sendTransaction` parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransactionRequest {
    pub from: Address,
    pub to: Address,
    pub data: Bytes,
}
