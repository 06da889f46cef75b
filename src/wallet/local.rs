use std::{
    sync::{Arc, RwLock},
    time::Duration,
};

use alloy::{
    network::{EthereumWallet, ReceiptResponse, TransactionBuilder},
    primitives::{Address, Bytes, TxHash},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::{local::PrivateKeySigner, Signer},
};
use async_trait::async_trait;
use tracing::{debug, info};

use super::client::{EvmWallet, PublicClient, WalletClient};
use super::types::{ContractWrite, RawTransactionRequest, TxReceipt};
use crate::config::NetworkConfig;
use crate::dump::{Dump, DumpObject};
use crate::error::{PanelError, PanelResult};

const CONNECTOR_NAME: &str = "local-keystore";

/// EVM wallet backed by a local private key and plain HTTP JSON-RPC.
pub struct LocalEvmWallet {
    signer: PrivateKeySigner,
    networks: Vec<NetworkConfig>,
    active: RwLock<NetworkConfig>,
    poll_interval: Duration,
}

impl LocalEvmWallet {
    pub fn new(
        signer: PrivateKeySigner,
        networks: Vec<NetworkConfig>,
        active_chain_id: u64,
        poll_interval: Duration,
    ) -> PanelResult<Self> {
        let active = networks
            .iter()
            .find(|n| n.chain_id == active_chain_id)
            .cloned()
            .ok_or(PanelError::UnknownNetwork(active_chain_id))?;
        Ok(Self {
            signer,
            networks,
            active: RwLock::new(active),
            poll_interval,
        })
    }

    fn active_network(&self) -> NetworkConfig {
        self.active.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn read_provider(network: &NetworkConfig) -> DynProvider {
        ProviderBuilder::new()
            .connect_http(network.rpc_url.clone())
            .erased()
    }

    fn write_provider(&self, network: &NetworkConfig) -> DynProvider {
        ProviderBuilder::new()
            .wallet(EthereumWallet::from(self.signer.clone()))
            .connect_http(network.rpc_url.clone())
            .erased()
    }
}

#[async_trait]
impl EvmWallet for LocalEvmWallet {
    fn address(&self) -> Address {
        self.signer.address()
    }

    fn connector_name(&self) -> &str {
        CONNECTOR_NAME
    }

    fn active_chain_id(&self) -> u64 {
        self.active_network().chain_id
    }

    async fn public_client(&self) -> PanelResult<Option<Arc<dyn PublicClient>>> {
        let network = self.active_network();
        Ok(Some(Arc::new(AlloyPublicClient {
            provider: Self::read_provider(&network),
            network,
            poll_interval: self.poll_interval,
        })))
    }

    async fn wallet_client(&self) -> PanelResult<Option<Arc<dyn WalletClient>>> {
        let network = self.active_network();
        Ok(Some(Arc::new(AlloyWalletClient {
            provider: self.write_provider(&network),
            account: self.address(),
            network,
        })))
    }

    async fn request(&self, request: RawTransactionRequest) -> PanelResult<TxHash> {
        let network = self.active_network();
        let tx = TransactionRequest::default()
            .with_from(request.from)
            .with_to(request.to)
            .with_input(request.data);
        let pending = self
            .write_provider(&network)
            .send_transaction(tx)
            .await
            .map_err(PanelError::rpc)?;
        debug!(hash = %pending.tx_hash(), "raw transaction request submitted");
        Ok(*pending.tx_hash())
    }

    async fn sign_message(&self, message: &str) -> PanelResult<String> {
        let signature = self
            .signer
            .sign_message(message.as_bytes())
            .await
            .map_err(|e| PanelError::Signing(e.to_string()))?;
        Ok(alloy::hex::encode_prefixed(signature.as_bytes()))
    }

    async fn switch_network(&self, chain_id: u64) -> PanelResult<NetworkConfig> {
        let target = self
            .networks
            .iter()
            .find(|n| n.chain_id == chain_id)
            .cloned()
            .ok_or(PanelError::UnknownNetwork(chain_id))?;

        let reported = Self::read_provider(&target)
            .get_chain_id()
            .await
            .map_err(PanelError::rpc)?;
        if reported != chain_id {
            return Err(PanelError::ChainMismatch {
                expected: chain_id,
                actual: reported,
            });
        }

        *self.active.write().unwrap_or_else(|e| e.into_inner()) = target.clone();
        info!(chain_id, name = %target.name, "switched network");
        Ok(target)
    }
}

fn describe_chain(network: &NetworkConfig) -> DumpObject {
    let rpc = DumpObject::new().with("http", vec![network.rpc_url.to_string()]);
    DumpObject::new()
        .with("id", network.chain_id)
        .with("name", network.name.clone())
        .with("rpcUrls", DumpObject::new().with("default", rpc))
}

fn describe_transport(network: &NetworkConfig) -> DumpObject {
    DumpObject::new()
        .with("type", "http")
        .with("url", network.rpc_url.to_string())
}

pub struct AlloyPublicClient {
    provider: DynProvider,
    network: NetworkConfig,
    poll_interval: Duration,
}

#[async_trait]
impl PublicClient for AlloyPublicClient {
    async fn read_contract(&self, address: Address, data: Bytes) -> PanelResult<Bytes> {
        let tx = TransactionRequest::default().with_to(address).with_input(data);
        self.provider.call(tx).await.map_err(PanelError::rpc)
    }

    async fn wait_for_transaction_receipt(&self, hash: TxHash) -> PanelResult<TxReceipt> {
        loop {
            let receipt = self
                .provider
                .get_transaction_receipt(hash)
                .await
                .map_err(PanelError::rpc)?;
            if let Some(receipt) = receipt {
                return Ok(TxReceipt {
                    transaction_hash: receipt.transaction_hash,
                    block_number: receipt.block_number,
                    success: receipt.status(),
                });
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    fn describe(&self) -> Dump {
        let client = DumpObject::new()
            .with("type", "publicClient")
            .with("key", "public")
            .with("name", "Public Client")
            .with("chain", describe_chain(&self.network))
            .with("transport", describe_transport(&self.network))
            .with("pollingInterval", self.poll_interval.as_millis() as u64);
        client.into()
    }
}

pub struct AlloyWalletClient {
    provider: DynProvider,
    account: Address,
    network: NetworkConfig,
}

#[async_trait]
impl WalletClient for AlloyWalletClient {
    async fn write_contract(&self, request: ContractWrite) -> PanelResult<TxHash> {
        let tx = TransactionRequest::default()
            .with_from(self.account)
            .with_to(request.address)
            .with_input(request.data)
            .with_value(request.value);
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(PanelError::rpc)?;
        Ok(*pending.tx_hash())
    }

    fn describe(&self) -> Dump {
        let client = DumpObject::new()
            .with("type", "walletClient")
            .with("key", "wallet")
            .with("name", "Wallet Client")
            .with("chain", describe_chain(&self.network))
            .with("transport", describe_transport(&self.network));
        let account = DumpObject::new()
            .with("address", self.account.to_string())
            .with("type", "local")
            .with("client", client.back_ref());
        client.insert("account", account);
        client.into()
    }
}
