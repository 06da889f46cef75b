//! Wallet session: owns the primary wallet handle and publishes the
//! connected/not-connected state to the rest of the app.

use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use tokio::sync::watch;
use tracing::{info, warn};

use crate::config::{PanelConfig, WalletSource};
use crate::utils::shorten_id;
use crate::wallet::{
    CosmosAccount, EvmWallet, LocalEvmWallet, UserProfile, WalletHandle, WalletSummary,
};

#[derive(Debug, Clone, Default)]
pub struct SessionSnapshot {
    pub is_logged_in: bool,
    pub primary_wallet: Option<WalletHandle>,
    pub user: Option<UserProfile>,
}

impl SessionSnapshot {
    /// The primary wallet, if one is connected and it can make contract calls.
    pub fn evm_wallet(&self) -> Option<Arc<dyn EvmWallet>> {
        if !self.is_logged_in {
            return None;
        }
        self.primary_wallet.as_ref()?.as_evm().cloned()
    }

    pub fn user_wallets(&self) -> Vec<WalletHandle> {
        self.primary_wallet.iter().cloned().collect()
    }
}

pub struct WalletSessionProvider {
    tx: watch::Sender<SessionSnapshot>,
}

impl Default for WalletSessionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletSessionProvider {
    /// A provider with no wallet; stays "not connected" until [`Self::login`].
    pub fn new() -> Self {
        let (tx, _) = watch::channel(SessionSnapshot::default());
        WalletSessionProvider { tx }
    }

    /// Connects whatever wallet the configuration names, if any.
    pub fn connect(config: &PanelConfig) -> Self {
        let provider = Self::new();
        match Self::wallet_from_config(config) {
            Some(handle) => provider.login(handle, &config.environment_id),
            None => info!("no wallet configured, waiting for a wallet"),
        }
        provider
    }

    fn wallet_from_config(config: &PanelConfig) -> Option<WalletHandle> {
        match &config.wallet {
            WalletSource::PrivateKey(signer) => match LocalEvmWallet::new(
                signer.clone(),
                config.networks.clone(),
                config.active_chain_id,
                config.receipt_poll_interval,
            ) {
                Ok(wallet) => Some(WalletHandle::Evm(Arc::new(wallet))),
                Err(e) => {
                    warn!(error = %e, "could not open local wallet");
                    None
                }
            },
            WalletSource::Cosmos(address) => Some(WalletHandle::Cosmos(CosmosAccount {
                address: address.clone(),
            })),
            WalletSource::None => None,
        }
    }

    pub fn login(&self, handle: WalletHandle, environment_id: &str) {
        let address = handle.address();
        let user = UserProfile {
            user_id: format!("user-{}", shorten_id(&address)),
            environment_id: environment_id.to_string(),
            primary_address: address.clone(),
            chain: handle.chain_family(),
            connected_at: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs(),
            verified_wallets: vec![WalletSummary {
                address: address.clone(),
                chain: handle.chain_family(),
                connector: handle.connector_name(),
            }],
        };
        info!(%address, chain = handle.chain_family().as_str(), "wallet connected");
        self.tx.send_replace(SessionSnapshot {
            is_logged_in: true,
            primary_wallet: Some(handle),
            user: Some(user),
        });
    }

    /// Logout. Drops the wallet handle.
    pub fn disconnect(&self) {
        if self.tx.borrow().is_logged_in {
            info!("wallet disconnected");
        }
        self.tx.send_replace(SessionSnapshot::default());
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.tx.subscribe()
    }
}
