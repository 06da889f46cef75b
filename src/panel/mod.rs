//! The action panel: one-shot wallet/contract operations.
//!
//! Handlers never touch view state. They report through a [`PanelUpdate`]
//! channel and the UI loop folds the updates into [`PanelState`] in
//! arrival order.

mod actions;
mod state;

pub use actions::Action;
pub use state::{PanelState, PanelUpdate};

use std::{sync::Arc, time::Duration};

use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};
use tracing::{debug, error, info, warn};

use crate::config::{ContractConfig, PanelConfig};
use crate::constants::SIGN_MESSAGE_TEXT;
use crate::dump::{safe_stringify, Dump};
use crate::error::PanelResult;
use crate::session::SessionSnapshot;
use crate::transactions::TransactionExecutor;
use crate::wallet::EvmWallet;

#[derive(Clone)]
pub struct ActionPanel {
    contracts: ContractConfig,
    switch_target_chain_id: u64,
    switch_target_name: String,
    fallback_refresh_delay: Duration,
    updates: UnboundedSender<PanelUpdate>,
}

impl ActionPanel {
    pub fn new(config: &PanelConfig, updates: UnboundedSender<PanelUpdate>) -> Self {
        let switch_target_name = config
            .network(config.switch_target_chain_id)
            .map(|n| n.name.clone())
            .unwrap_or_else(|| format!("chain {}", config.switch_target_chain_id));
        ActionPanel {
            contracts: config.contracts.clone(),
            switch_target_chain_id: config.switch_target_chain_id,
            switch_target_name,
            fallback_refresh_delay: config.fallback_refresh_delay,
            updates,
        }
    }

    fn emit(&self, update: PanelUpdate) {
        // The receiver only goes away when the UI is shutting down.
        let _ = self.updates.send(update);
    }

    fn set_result(&self, text: impl Into<String>) {
        self.emit(PanelUpdate::Result(text.into()));
    }

    fn executor(&self, wallet: Arc<dyn EvmWallet>) -> TransactionExecutor {
        TransactionExecutor::new(wallet, self.contracts.clone())
    }

    /// Runs `action` on its own task against the session as it is now.
    pub fn spawn(&self, action: Action, session: SessionSnapshot) -> JoinHandle<()> {
        let panel = self.clone();
        tokio::spawn(async move { panel.run(action, &session).await })
    }

    pub async fn run(&self, action: Action, session: &SessionSnapshot) {
        debug!(?action, "running action");
        match action {
            Action::FetchUser => self.show_user(session),
            Action::FetchUserWallets => self.show_user_wallets(session),
            Action::FetchPublicClient => self.fetch_public_client(session).await,
            Action::FetchWalletClient => self.fetch_wallet_client(session).await,
            Action::SignMessage => self.sign_message(session).await,
            Action::FetchCount => self.fetch_count(session).await,
            Action::Mint => self.mint_tokens(session).await,
            Action::SwitchNetwork => self.switch_network(session).await,
            Action::Delegate => self.delegate_tokens(session).await,
            Action::Clear => self.clear_result(session),
        }
    }

    pub fn clear_result(&self, session: &SessionSnapshot) {
        if !session.is_logged_in {
            return;
        }
        self.set_result("");
    }

    pub fn show_user(&self, session: &SessionSnapshot) {
        if !session.is_logged_in {
            return;
        }
        let dump: Dump = session.user.as_ref().map(|u| u.describe()).into();
        self.set_result(safe_stringify(&dump));
    }

    pub fn show_user_wallets(&self, session: &SessionSnapshot) {
        if !session.is_logged_in {
            return;
        }
        let wallets: Vec<Dump> = session.user_wallets().iter().map(|w| w.describe()).collect();
        self.set_result(safe_stringify(&Dump::from(wallets)));
    }

    pub async fn fetch_public_client(&self, session: &SessionSnapshot) {
        let Some(wallet) = session.evm_wallet() else { return };
        match self.executor(wallet).public_client_dump().await {
            Ok(dump) => self.set_result(safe_stringify(&dump)),
            Err(e) => {
                error!(error = %e, "Error fetching public client");
                self.set_result(format!("Error fetching public client: {}", e));
            }
        }
    }

    pub async fn fetch_wallet_client(&self, session: &SessionSnapshot) {
        let Some(wallet) = session.evm_wallet() else { return };
        match self.executor(wallet).wallet_client_dump().await {
            Ok(dump) => self.set_result(safe_stringify(&dump)),
            Err(e) => {
                error!(error = %e, "Error fetching wallet client");
                self.set_result(format!("Error fetching wallet client: {}", e));
            }
        }
    }

    pub async fn sign_message(&self, session: &SessionSnapshot) {
        let Some(wallet) = session.evm_wallet() else { return };
        match wallet.sign_message(SIGN_MESSAGE_TEXT).await {
            Ok(signature) => self.set_result(signature),
            Err(e) => {
                error!(error = %e, "Error signing message");
                self.set_result(format!("Error signing message: {}", e));
            }
        }
    }

    /// Reads the balance and shows it as both counter and result.
    /// Failures are only logged.
    pub async fn fetch_count(&self, session: &SessionSnapshot) {
        let Some(wallet) = session.evm_wallet() else { return };
        if let Some(count) = self.load_count(&self.executor(wallet)).await {
            self.set_result(format!("Current count is: {}", count));
        }
    }

    /// Counter-only refresh used after writes, so the write's own result text
    /// stays on screen.
    async fn refresh_count(&self, executor: &TransactionExecutor) {
        self.load_count(executor).await;
    }

    async fn load_count(&self, executor: &TransactionExecutor) -> Option<String> {
        match executor.read_balance().await {
            Ok(balance) => {
                let count = balance.to_string();
                info!(%count, "User balance");
                self.emit(PanelUpdate::Count(count.clone()));
                Some(count)
            }
            Err(e) => {
                error!(error = %e, "Error fetching count");
                None
            }
        }
    }

    pub async fn mint_tokens(&self, session: &SessionSnapshot) {
        let Some(wallet) = session.evm_wallet() else { return };
        let executor = self.executor(wallet);
        let amount = executor.mint_amount();

        self.emit(PanelUpdate::Minting(true));
        self.set_result("Minting tokens...");

        if let Err(primary) = self.mint_and_wait(&executor).await {
            error!(error = %primary, "Error minting tokens");
            self.set_result(format!("Error minting tokens: {}", primary));

            info!("Trying alternative method to mint tokens...");
            match executor.mint_via_raw_request().await {
                Ok(hash) => {
                    self.set_result(format!(
                        "Alternative mint method transaction submitted: {}\nMinting {} tokens...",
                        hash, amount
                    ));
                    tokio::time::sleep(self.fallback_refresh_delay).await;
                    self.refresh_count(&executor).await;
                }
                Err(alternative) => {
                    error!(error = %alternative, "Alternative mint method also failed");
                    self.set_result(format!(
                        "Error minting tokens: {}\nAlternative method error: {}",
                        primary, alternative
                    ));
                }
            }
        }

        self.emit(PanelUpdate::Minting(false));
    }

    async fn mint_and_wait(&self, executor: &TransactionExecutor) -> PanelResult<()> {
        let amount = executor.mint_amount();
        let hash = executor.submit_mint().await?;
        self.set_result(format!(
            "Mint transaction submitted: {}\nMinting {} tokens...",
            hash, amount
        ));

        executor.wait_for_inclusion(hash).await?;
        self.set_result(format!(
            "Successfully minted {} tokens! Transaction: {}",
            amount, hash
        ));

        self.refresh_count(executor).await;
        Ok(())
    }

    pub async fn delegate_tokens(&self, session: &SessionSnapshot) {
        let Some(wallet) = session.evm_wallet() else { return };
        let executor = self.executor(wallet);
        self.set_result("Delegating tokens...");

        let outcome = async {
            let hash = executor.submit_delegate().await?;
            self.set_result(format!("Delegation transaction submitted: {}", hash));
            executor.wait_for_inclusion(hash).await?;
            Ok::<_, crate::error::PanelError>(hash)
        }
        .await;

        match outcome {
            Ok(hash) => {
                self.set_result(format!("Successfully delegated tokens! Transaction: {}", hash));
                self.refresh_count(&executor).await;
            }
            Err(e) => {
                error!(error = %e, "Error delegating tokens");
                self.set_result(format!("Error delegating tokens: {}", e));
            }
        }
    }

    /// Failures are logged and otherwise ignored; the result is left as is.
    pub async fn switch_network(&self, session: &SessionSnapshot) {
        let Some(wallet) = session.evm_wallet() else { return };
        match wallet.switch_network(self.switch_target_chain_id).await {
            Ok(network) => {
                self.emit(PanelUpdate::NetworkSwitched { chain_id: network.chain_id });
                self.set_result(format!(
                    "Successfully switched to {} ({})",
                    self.switch_target_name, network.name
                ));
            }
            Err(e) => warn!(error = %e, chain_id = self.switch_target_chain_id, "network switch failed"),
        }
    }
}
