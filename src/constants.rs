/// Sei mainnet (pacific-1)
pub const SEI_MAINNET_CHAIN_ID: u64 = 1329;
pub const SEI_MAINNET_RPC: &str = "https://evm-rpc.sei-apis.com";

/// Sei testnet (atlantic-2)
pub const SEI_TESTNET_CHAIN_ID: u64 = 1328;
pub const SEI_TESTNET_RPC: &str = "https://evm-rpc-testnet.sei-apis.com";

pub const NETWORKS: [(&str, u64, &str); 2] = [
    ("Sei", SEI_MAINNET_CHAIN_ID, SEI_MAINNET_RPC),
    ("Sei Testnet", SEI_TESTNET_CHAIN_ID, SEI_TESTNET_RPC),
];

/// Contracts
pub const WASMD_PRECOMPILE_ADDRESS: &str = "0x3C56d833e9EC105F1738986b00239186caAe0872";
pub const STAKE_CONTRACT_ADDRESS: &str = "0x0000000000000000000000000000000000001005";
pub const VALIDATOR_ADDRESS: &str = "seivaloper1sq7x0r2mf3gvwr2l9amtlye0yd3c6dqa4th95v";
pub const VALIDATOR_PREFIX: &str = "seivaloper1";
pub const DEFAULT_MINT_AMOUNT: u64 = 1_000_000_000_000_000;

// Global constants
pub const SIGN_MESSAGE_TEXT: &str = "Hello World";
pub const CIRCULAR_MARKER: &str = "[Circular]";
pub const COSMOS_ADDRESS_PREFIX: &str = "sei1";

pub const RECEIPT_POLL_INTERVAL_MILLIS: u64 = 1_000;
pub const FALLBACK_REFRESH_DELAY_MILLIS: u64 = 2_000;
pub const UI_TICK_MILLIS: u64 = 50;

pub const CONFIG_DIR_NAME: &str = "sei-panel";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "sei-panel.log";

pub const ENV_CONFIG_PATH: &str = "SEI_PANEL_CONFIG";
pub const ENV_PRIVATE_KEY: &str = "SEI_PANEL_PRIVATE_KEY";
pub const ENV_ENVIRONMENT_ID: &str = "SEI_PANEL_ENVIRONMENT_ID";

pub const MESSAGE_AREA_MARGIN: u16 = 4;

pub const SEI_BANNER: &str = r#"
 ____  _____ ___     ____   _    _   _ _____ _
/ ___|| ____|_ _|   |  _ \ / \  | \ | | ____| |
\___ \|  _|  | |    | |_) / _ \ |  \| |  _| | |
 ___) | |___ | |    |  __/ ___ \| |\  | |___| |___
|____/|_____|___|   |_| /_/   \_\_| \_|_____|_____|
"#;
