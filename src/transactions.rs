use std::sync::Arc;

use alloy::primitives::{TxHash, U256};
use tracing::debug;

use crate::abi::{decode_balance_of, encode_balance_of, encode_delegate, encode_mint, encode_mint_manually};
use crate::config::ContractConfig;
use crate::dump::Dump;
use crate::error::{PanelError, PanelResult};
use crate::wallet::{
    ContractWrite, EvmWallet, PublicClient, RawTransactionRequest, TxReceipt, WalletClient,
};

/// Issues the panel's contract calls through a connected EVM wallet.
///
/// Every method performs exactly one wallet/RPC round trip (receipt polling
/// aside) and asks the wallet for a fresh client each time.
pub struct TransactionExecutor {
    wallet: Arc<dyn EvmWallet>,
    contracts: ContractConfig,
}

impl TransactionExecutor {
    pub fn new(wallet: Arc<dyn EvmWallet>, contracts: ContractConfig) -> Self {
        Self { wallet, contracts }
    }

    pub fn mint_amount(&self) -> U256 {
        self.contracts.mint_amount
    }

    async fn public_client(&self) -> PanelResult<Arc<dyn PublicClient>> {
        self.wallet
            .public_client()
            .await?
            .ok_or(PanelError::ClientUnavailable("public"))
    }

    async fn wallet_client(&self) -> PanelResult<Arc<dyn WalletClient>> {
        self.wallet
            .wallet_client()
            .await?
            .ok_or(PanelError::ClientUnavailable("wallet"))
    }

    pub async fn public_client_dump(&self) -> PanelResult<Dump> {
        Ok(self.public_client().await?.describe())
    }

    pub async fn wallet_client_dump(&self) -> PanelResult<Dump> {
        Ok(self.wallet_client().await?.describe())
    }

    /// `balanceOf(primary)` on the token contract.
    pub async fn read_balance(&self) -> PanelResult<U256> {
        let client = self.public_client().await?;
        let data = client
            .read_contract(
                self.contracts.token_address,
                encode_balance_of(self.wallet.address()),
            )
            .await?;
        decode_balance_of(&data)
    }

    /// `mint(primary, amount)` through the wallet client.
    pub async fn submit_mint(&self) -> PanelResult<TxHash> {
        let client = self.wallet_client().await?;
        let hash = client
            .write_contract(ContractWrite {
                address: self.contracts.token_address,
                data: encode_mint(self.wallet.address(), self.contracts.mint_amount),
                value: U256::ZERO,
            })
            .await?;
        debug!(%hash, "mint submitted");
        Ok(hash)
    }

    /// Same mint, hand-encoded and sent as a raw `eth_sendTransaction`.
    /// Does not wait for inclusion.
    pub async fn mint_via_raw_request(&self) -> PanelResult<TxHash> {
        let from = self.wallet.address();
        let hash = self
            .wallet
            .request(RawTransactionRequest {
                from,
                to: self.contracts.token_address,
                data: encode_mint_manually(from, self.contracts.mint_amount),
            })
            .await?;
        debug!(%hash, "raw mint request submitted");
        Ok(hash)
    }

    /// `delegate(validator)` on the staking precompile, paying `amount`.
    pub async fn submit_delegate(&self) -> PanelResult<TxHash> {
        let client = self.wallet_client().await?;
        let hash = client
            .write_contract(ContractWrite {
                address: self.contracts.staking_address,
                data: encode_delegate(&self.contracts.validator_address),
                value: self.contracts.mint_amount,
            })
            .await?;
        debug!(%hash, validator = %self.contracts.validator_address, "delegation submitted");
        Ok(hash)
    }

    /// Waits for the receipt; a reverted transaction is an error.
    pub async fn wait_for_inclusion(&self, hash: TxHash) -> PanelResult<TxReceipt> {
        let client = self.public_client().await?;
        let receipt = client.wait_for_transaction_receipt(hash).await?;
        if !receipt.success {
            return Err(PanelError::Reverted(hash));
        }
        Ok(receipt)
    }
}
