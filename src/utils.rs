use crate::config::PanelConfig;

pub fn shorten_id(id: &str) -> String {
    if id.len() > 16 && id.is_ascii() {
        // 0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266 -> 0xf39Fd6e5...fFb92266
        format!("{}...{}", &id[..10], &id[id.len() - 8..])
    } else {
        id.to_string()
    }
}

/// Human name of a configured chain, or the bare id.
pub fn network_label(config: &PanelConfig, chain_id: u64) -> String {
    match config.network(chain_id) {
        Some(network) => format!("{} ({})", network.name, chain_id),
        None => format!("chain {}", chain_id),
    }
}
