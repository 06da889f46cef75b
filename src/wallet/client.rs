use std::sync::Arc;

use alloy::primitives::{Address, Bytes, TxHash};
use async_trait::async_trait;

use super::types::{ContractWrite, RawTransactionRequest, TxReceipt};
use crate::config::NetworkConfig;
use crate::dump::Dump;
use crate::error::PanelResult;

/// Read side: contract calls and receipt polling.
#[async_trait]
pub trait PublicClient: Send + Sync {
    async fn read_contract(&self, address: Address, data: Bytes) -> PanelResult<Bytes>;

    /// Suspends until the transaction is included. No timeout.
    async fn wait_for_transaction_receipt(&self, hash: TxHash) -> PanelResult<TxReceipt>;

    fn describe(&self) -> Dump;
}

/// Write side: signed contract calls.
#[async_trait]
pub trait WalletClient: Send + Sync {
    async fn write_contract(&self, request: ContractWrite) -> PanelResult<TxHash>;

    fn describe(&self) -> Dump;
}

/// A connected EVM account.
///
/// Client getters return `Ok(None)` when the wallet is connected but cannot
/// hand out that kind of client right now.
#[async_trait]
pub trait EvmWallet: Send + Sync {
    fn address(&self) -> Address;

    fn connector_name(&self) -> &str;

    fn active_chain_id(&self) -> u64;

    async fn public_client(&self) -> PanelResult<Option<Arc<dyn PublicClient>>>;

    async fn wallet_client(&self) -> PanelResult<Option<Arc<dyn WalletClient>>>;

    /// Submits a raw `eth_sendTransaction`; returns once the hash is known.
    async fn request(&self, request: RawTransactionRequest) -> PanelResult<TxHash>;

    async fn sign_message(&self, message: &str) -> PanelResult<String>;

    async fn switch_network(&self, chain_id: u64) -> PanelResult<NetworkConfig>;
}
