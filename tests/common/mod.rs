#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicU8, Ordering},
    Arc, Mutex,
};

use alloy::primitives::{address, Address, Bytes, TxHash, U256};
use async_trait::async_trait;
use sei_panel::config::{NetworkConfig, PanelConfig, RawConfig};
use sei_panel::dump::{Dump, DumpObject};
use sei_panel::error::{PanelError, PanelResult};
use sei_panel::panel::{PanelState, PanelUpdate};
use sei_panel::wallet::{
    ContractWrite, EvmWallet, PublicClient, RawTransactionRequest, TxReceipt, WalletClient,
};
use tokio::sync::mpsc::UnboundedReceiver;

pub const HOLDER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

const MINT_SELECTOR: [u8; 4] = [0x40, 0xc1, 0x0f, 0x19];

/// Knobs for the in-memory chain behind [`MockWallet`].
#[derive(Default)]
pub struct Behaviour {
    pub fail_read: Option<String>,
    pub fail_write: Option<String>,
    pub fail_request: Option<String>,
    pub fail_sign: Option<String>,
    pub fail_switch: Option<String>,
    pub no_wallet_client: bool,
    pub revert: bool,
}

#[derive(Default)]
pub struct MockChain {
    pub behaviour: Behaviour,
    pub balance: Mutex<U256>,
    pub writes: Mutex<Vec<ContractWrite>>,
    pub requests: Mutex<Vec<RawTransactionRequest>>,
    pub chain_id: Mutex<u64>,
    nonce: AtomicU8,
}

impl MockChain {
    fn next_hash(&self) -> TxHash {
        TxHash::repeat_byte(self.nonce.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn apply_calldata(&self, data: &[u8]) {
        if data.len() == 68 && data[..4] == MINT_SELECTOR {
            let amount = U256::from_be_slice(&data[36..68]);
            *self.balance.lock().unwrap() += amount;
        }
    }
}

pub struct MockWallet {
    pub chain: Arc<MockChain>,
}

impl MockWallet {
    pub fn new(behaviour: Behaviour) -> Self {
        MockWallet {
            chain: Arc::new(MockChain {
                behaviour,
                chain_id: Mutex::new(1329),
                ..Default::default()
            }),
        }
    }

    pub fn balance(&self) -> U256 {
        *self.chain.balance.lock().unwrap()
    }
}

#[async_trait]
impl EvmWallet for MockWallet {
    fn address(&self) -> Address {
        HOLDER
    }

    fn connector_name(&self) -> &str {
        "mock"
    }

    fn active_chain_id(&self) -> u64 {
        *self.chain.chain_id.lock().unwrap()
    }

    async fn public_client(&self) -> PanelResult<Option<Arc<dyn PublicClient>>> {
        Ok(Some(Arc::new(MockPublicClient { chain: Arc::clone(&self.chain) })))
    }

    async fn wallet_client(&self) -> PanelResult<Option<Arc<dyn WalletClient>>> {
        if self.chain.behaviour.no_wallet_client {
            return Ok(None);
        }
        Ok(Some(Arc::new(MockWalletClient { chain: Arc::clone(&self.chain) })))
    }

    async fn request(&self, request: RawTransactionRequest) -> PanelResult<TxHash> {
        if let Some(msg) = &self.chain.behaviour.fail_request {
            return Err(PanelError::Rpc(msg.clone()));
        }
        self.chain.apply_calldata(&request.data);
        self.chain.requests.lock().unwrap().push(request);
        Ok(self.chain.next_hash())
    }

    async fn sign_message(&self, message: &str) -> PanelResult<String> {
        if let Some(msg) = &self.chain.behaviour.fail_sign {
            return Err(PanelError::Signing(msg.clone()));
        }
        Ok(format!("0xsigned:{}", message))
    }

    async fn switch_network(&self, chain_id: u64) -> PanelResult<NetworkConfig> {
        if let Some(msg) = &self.chain.behaviour.fail_switch {
            return Err(PanelError::Rpc(msg.clone()));
        }
        *self.chain.chain_id.lock().unwrap() = chain_id;
        Ok(NetworkConfig {
            name: "Sei Testnet".to_string(),
            chain_id,
            rpc_url: "http://localhost:8545".parse().unwrap(),
        })
    }
}

pub struct MockPublicClient {
    chain: Arc<MockChain>,
}

#[async_trait]
impl PublicClient for MockPublicClient {
    async fn read_contract(&self, _address: Address, _data: Bytes) -> PanelResult<Bytes> {
        if let Some(msg) = &self.chain.behaviour.fail_read {
            return Err(PanelError::Rpc(msg.clone()));
        }
        let balance = *self.chain.balance.lock().unwrap();
        Ok(Bytes::from(balance.to_be_bytes::<32>().to_vec()))
    }

    async fn wait_for_transaction_receipt(&self, hash: TxHash) -> PanelResult<TxReceipt> {
        Ok(TxReceipt {
            transaction_hash: hash,
            block_number: Some(1),
            success: !self.chain.behaviour.revert,
        })
    }

    fn describe(&self) -> Dump {
        DumpObject::new().with("type", "publicClient").into()
    }
}

pub struct MockWalletClient {
    chain: Arc<MockChain>,
}

#[async_trait]
impl WalletClient for MockWalletClient {
    async fn write_contract(&self, request: ContractWrite) -> PanelResult<TxHash> {
        if let Some(msg) = &self.chain.behaviour.fail_write {
            return Err(PanelError::Rpc(msg.clone()));
        }
        self.chain.apply_calldata(&request.data);
        self.chain.writes.lock().unwrap().push(request);
        Ok(self.chain.next_hash())
    }

    fn describe(&self) -> Dump {
        let client = DumpObject::new().with("type", "walletClient");
        client.insert("self", client.back_ref());
        client.into()
    }
}

pub fn test_config() -> PanelConfig {
    config_with_fallback_delay(0)
}

pub fn config_with_fallback_delay(millis: u64) -> PanelConfig {
    RawConfig {
        fallback_refresh_delay_ms: Some(millis),
        receipt_poll_interval_ms: Some(1),
        ..Default::default()
    }
    .validate()
    .unwrap()
}

/// Applies everything queued so far and returns the raw updates too.
pub fn drain(rx: &mut UnboundedReceiver<PanelUpdate>, state: &mut PanelState) -> Vec<PanelUpdate> {
    let mut seen = Vec::new();
    while let Ok(update) = rx.try_recv() {
        state.apply(update.clone());
        seen.push(update);
    }
    seen
}
