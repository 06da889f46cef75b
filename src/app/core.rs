use ratatui::widgets::ListState;
use tokio::{
    sync::{
        mpsc::{self, UnboundedReceiver},
        watch,
    },
    task::JoinHandle,
};
use tracing::{debug, info};

use crate::config::PanelConfig;
use crate::panel::{Action, ActionPanel, PanelState, PanelUpdate};
use crate::session::SessionSnapshot;
use crate::utils::{network_label, shorten_id};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Error,
    Info,
    Success,
}

pub struct App {
    pub config: PanelConfig,
    pub session: SessionSnapshot,
    session_rx: watch::Receiver<SessionSnapshot>,
    session_seen: bool,
    pub panel: ActionPanel,
    pub state: PanelState,
    updates: UnboundedReceiver<PanelUpdate>,
    generation: u64,
    pub actions_state: ListState,
    pub wallet_address: String,
}

impl App {
    pub fn new(config: PanelConfig, session_rx: watch::Receiver<SessionSnapshot>) -> App {
        let (tx, updates) = mpsc::unbounded_channel();
        let panel = ActionPanel::new(&config, tx);
        let mut app = App {
            config,
            session: SessionSnapshot::default(),
            session_rx,
            session_seen: false,
            panel,
            state: PanelState::default(),
            updates,
            generation: 0,
            actions_state: ListState::default(),
            wallet_address: "Not Connected".to_string(),
        };
        app.actions_state.select(Some(0));
        app
    }

    /// "wallet ready" as opposed to "awaiting wallet".
    pub fn is_ready(&self) -> bool {
        self.session.is_logged_in && self.session.primary_wallet.is_some()
    }

    pub fn has_evm_wallet(&self) -> bool {
        self.session.evm_wallet().is_some()
    }

    pub fn available_actions(&self) -> Vec<Action> {
        let evm = self.has_evm_wallet();
        Action::ALL
            .into_iter()
            .filter(|a| evm || !a.requires_evm())
            .filter(|a| *a != Action::Clear || !self.state.result.is_empty())
            .collect()
    }

    /// Picks up the latest session snapshot. Returns true on a change.
    pub fn sync_session(&mut self) -> bool {
        // the first call takes whatever the provider already holds
        let changed = self.session_rx.has_changed().unwrap_or(false);
        if self.session_seen && !changed {
            return false;
        }
        self.session_seen = true;
        let snapshot = self.session_rx.borrow_and_update().clone();
        let was_ready = self.is_ready();
        let previous = self.session.primary_wallet.as_ref().map(|w| w.address());
        self.session = snapshot;
        let current = self.session.primary_wallet.as_ref().map(|w| w.address());

        self.wallet_address = match &current {
            Some(address) => shorten_id(address),
            None => "Not Connected".to_string(),
        };

        if was_ready != self.is_ready() || previous != current {
            self.start_generation();
            if self.is_ready() {
                info!(address = %self.wallet_address, generation = self.generation, "wallet ready");
                self.state.active_chain_id = self.session.evm_wallet().map(|w| w.active_chain_id());
                if self.has_evm_wallet() {
                    self.dispatch(Action::FetchCount);
                }
            }
        }
        self.actions_state.select(Some(0));
        true
    }

    /// Every login and logout gets a fresh update channel and a blank state.
    /// Tasks still running for the previous wallet keep the old sender, so
    /// their updates go nowhere.
    fn start_generation(&mut self) {
        let (tx, updates) = mpsc::unbounded_channel();
        self.panel = ActionPanel::new(&self.config, tx);
        self.updates = updates;
        self.state = PanelState::default();
        self.generation += 1;
        debug!(generation = self.generation, "new session generation");
    }

    /// Folds every pending update into the view state.
    pub fn drain_updates(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(update) = self.updates.try_recv() {
            self.state.apply(update);
            applied += 1;
        }
        applied
    }

    pub fn dispatch(&mut self, action: Action) -> Option<JoinHandle<()>> {
        if !self.is_ready() || !self.available_actions().contains(&action) {
            debug!(?action, "action not available");
            return None;
        }
        if action == Action::Mint {
            if self.state.is_minting {
                debug!("mint already in progress");
                return None;
            }
            self.state.apply(PanelUpdate::Minting(true));
        }
        Some(self.panel.spawn(action, self.session.clone()))
    }

    pub fn dispatch_selected(&mut self) -> Option<JoinHandle<()>> {
        let action = self.selected_action()?;
        self.dispatch(action)
    }

    pub fn message_type(&self) -> MessageType {
        if self.state.is_error() {
            MessageType::Error
        } else if self.state.is_minting || self.state.result.ends_with("...") {
            MessageType::Info
        } else {
            MessageType::Success
        }
    }

    pub fn current_network(&self) -> String {
        let chain_id = self.state.active_chain_id.unwrap_or(self.config.active_chain_id);
        network_label(&self.config, chain_id)
    }
}
