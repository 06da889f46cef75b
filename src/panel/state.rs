/// Writes the action tasks send to the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelUpdate {
    Result(String),
    Count(String),
    Minting(bool),
    NetworkSwitched { chain_id: u64 },
}

/// View state of the panel. Only the UI loop mutates it, one update at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    pub result: String,
    pub count: Option<String>,
    pub is_minting: bool,
    pub active_chain_id: Option<u64>,
}

impl PanelState {
    pub fn apply(&mut self, update: PanelUpdate) {
        match update {
            PanelUpdate::Result(text) => self.result = text,
            PanelUpdate::Count(count) => self.count = Some(count),
            PanelUpdate::Minting(flag) => self.is_minting = flag,
            PanelUpdate::NetworkSwitched { chain_id } => self.active_chain_id = Some(chain_id),
        }
    }

    pub fn count_display(&self) -> &str {
        self.count.as_deref().unwrap_or("Loading...")
    }

    pub fn is_error(&self) -> bool {
        self.result.starts_with("Error")
    }
}
