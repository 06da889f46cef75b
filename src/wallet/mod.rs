mod client;
mod local;
mod types;

pub use client::{EvmWallet, PublicClient, WalletClient};
pub use local::LocalEvmWallet;
pub use types::{
    ChainFamily, ContractWrite, CosmosAccount, RawTransactionRequest, TxReceipt, UserProfile,
    WalletHandle, WalletSummary,
};
