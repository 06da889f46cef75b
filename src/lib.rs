//! Terminal action panel for a wallet connected to the Sei EVM.
//!
//! A [`session::WalletSessionProvider`] owns the connected wallet; the
//! [`panel::ActionPanel`] runs one-shot reads and writes against the wasmd
//! token precompile and the staking precompile through it.

pub mod abi;
pub mod app;
pub mod config;
pub mod constants;
pub mod dump;
pub mod error;
pub mod logging;
pub mod panel;
pub mod session;
pub mod transactions;
pub mod ui;
pub mod utils;
pub mod wallet;
