use crate::app::core::App;
use crate::panel::Action;

impl App {
    pub fn selected_action(&self) -> Option<Action> {
        let actions = self.available_actions();
        self.actions_state
            .selected()
            .and_then(|i| actions.get(i).copied())
    }

    pub fn next_item(&mut self) {
        let items_len = self.available_actions().len();
        if items_len == 0 {
            return;
        }
        let i = match self.actions_state.selected() {
            Some(i) if i >= items_len - 1 => items_len - 1,
            Some(i) => i + 1,
            None => 0,
        };
        self.actions_state.select(Some(i));
    }

    pub fn previous_item(&mut self) {
        if self.available_actions().is_empty() {
            return;
        }
        let i = match self.actions_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.actions_state.select(Some(i));
    }

    /// Label shown for an action, reflecting in-flight state.
    pub fn action_label(&self, action: Action) -> String {
        match action {
            Action::Mint if self.state.is_minting => "Minting...".to_string(),
            Action::Mint => format!("Mint {} Tokens", self.config.contracts.mint_amount),
            Action::SwitchNetwork => format!(
                "Switch to {}",
                self.config
                    .network(self.config.switch_target_chain_id)
                    .map(|n| n.name.as_str())
                    .unwrap_or("target network")
            ),
            other => other.label().to_string(),
        }
    }
}
