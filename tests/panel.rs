mod common;

use std::{sync::Arc, time::Duration};

use alloy::primitives::U256;
use common::{config_with_fallback_delay, drain, test_config, Behaviour, MockWallet, HOLDER};
use sei_panel::app::App;
use sei_panel::config::ContractConfig;
use sei_panel::panel::{Action, ActionPanel, PanelState, PanelUpdate};
use sei_panel::session::{SessionSnapshot, WalletSessionProvider};
use sei_panel::wallet::{CosmosAccount, WalletHandle};
use tokio::sync::mpsc;

fn evm_session(wallet: &Arc<MockWallet>) -> SessionSnapshot {
    let provider = WalletSessionProvider::new();
    provider.login(WalletHandle::Evm(wallet.clone()), "test-env");
    provider.snapshot()
}

fn panel() -> (ActionPanel, mpsc::UnboundedReceiver<PanelUpdate>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ActionPanel::new(&test_config(), tx), rx)
}

fn mint_amount() -> U256 {
    ContractConfig::default().mint_amount
}

#[tokio::test]
async fn actions_without_a_wallet_do_nothing() {
    let (panel, mut rx) = panel();
    let session = SessionSnapshot::default();
    for action in Action::ALL {
        panel.run(action, &session).await;
    }
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn cosmos_wallet_skips_contract_actions() {
    let (panel, mut rx) = panel();
    let provider = WalletSessionProvider::new();
    provider.login(
        WalletHandle::Cosmos(CosmosAccount {
            address: "sei1qyqszqgpqyqszqgpqyqszqgpqyqszqgpjnp7du".to_string(),
        }),
        "test-env",
    );
    let session = provider.snapshot();
    for action in Action::ALL.into_iter().filter(|a| a.requires_evm()) {
        panel.run(action, &session).await;
    }
    assert!(rx.try_recv().is_err());

    // the user dump still works
    panel.run(Action::FetchUser, &session).await;
    let mut state = PanelState::default();
    drain(&mut rx, &mut state);
    assert!(state.result.contains("sei1qyqszqgp"));
}

#[tokio::test]
async fn fetch_count_sets_counter_and_result() {
    let wallet = Arc::new(MockWallet::new(Behaviour::default()));
    *wallet.chain.balance.lock().unwrap() = U256::from(42u64);
    let (panel, mut rx) = panel();

    panel.run(Action::FetchCount, &evm_session(&wallet)).await;

    let mut state = PanelState::default();
    drain(&mut rx, &mut state);
    assert_eq!(state.count_display(), "42");
    assert_eq!(state.result, "Current count is: 42");
}

#[tokio::test]
async fn failed_count_read_leaves_state_alone() {
    let wallet = Arc::new(MockWallet::new(Behaviour {
        fail_read: Some("node down".into()),
        ..Default::default()
    }));
    let (panel, mut rx) = panel();

    panel.run(Action::FetchCount, &evm_session(&wallet)).await;

    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn successful_mint_refreshes_counter() {
    let wallet = Arc::new(MockWallet::new(Behaviour::default()));
    let (panel, mut rx) = panel();

    panel.run(Action::Mint, &evm_session(&wallet)).await;

    let mut state = PanelState::default();
    let updates = drain(&mut rx, &mut state);
    assert_eq!(updates.first(), Some(&PanelUpdate::Minting(true)));
    assert_eq!(updates.last(), Some(&PanelUpdate::Minting(false)));
    assert!(!state.is_minting);
    assert!(state.result.starts_with("Successfully minted 1000000000000000 tokens! Transaction: 0x"));
    assert_eq!(state.count_display(), wallet.balance().to_string());
    assert_eq!(wallet.balance(), mint_amount());

    let writes = wallet.chain.writes.lock().unwrap();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].address, ContractConfig::default().token_address);
    assert_eq!(writes[0].value, U256::ZERO);
    assert!(wallet.chain.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn mint_falls_back_to_raw_request() {
    let wallet = Arc::new(MockWallet::new(Behaviour {
        fail_write: Some("user rejected".into()),
        ..Default::default()
    }));
    let (panel, mut rx) = panel();

    panel.run(Action::Mint, &evm_session(&wallet)).await;

    let mut state = PanelState::default();
    let updates = drain(&mut rx, &mut state);
    assert!(updates.contains(&PanelUpdate::Result(
        "Error minting tokens: user rejected".into()
    )));
    assert!(state
        .result
        .starts_with("Alternative mint method transaction submitted: 0x"));
    assert!(state.result.ends_with("Minting 1000000000000000 tokens..."));
    assert!(!state.is_minting);

    let requests = wallet.chain.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].from, HOLDER);
    // the delayed refresh ran too
    assert_eq!(state.count_display(), mint_amount().to_string());
}

#[tokio::test]
async fn reverted_mint_uses_the_fallback() {
    let wallet = Arc::new(MockWallet::new(Behaviour {
        revert: true,
        ..Default::default()
    }));
    let (panel, mut rx) = panel();

    panel.run(Action::Mint, &evm_session(&wallet)).await;

    let mut state = PanelState::default();
    drain(&mut rx, &mut state);
    assert!(state
        .result
        .starts_with("Alternative mint method transaction submitted:"));
    assert_eq!(wallet.chain.writes.lock().unwrap().len(), 1);
    assert_eq!(wallet.chain.requests.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn both_mint_paths_failing_reports_both_errors() {
    let wallet = Arc::new(MockWallet::new(Behaviour {
        fail_write: Some("gas estimation failed".into()),
        fail_request: Some("method not supported".into()),
        ..Default::default()
    }));
    let (panel, mut rx) = panel();

    panel.run(Action::Mint, &evm_session(&wallet)).await;

    let mut state = PanelState::default();
    drain(&mut rx, &mut state);
    assert_eq!(
        state.result,
        "Error minting tokens: gas estimation failed\n\
         Alternative method error: method not supported"
    );
    assert!(state.is_error());
    assert!(!state.is_minting);
    assert_eq!(wallet.balance(), U256::ZERO);
}

#[tokio::test]
async fn delegate_pays_the_mint_amount_to_staking() {
    let wallet = Arc::new(MockWallet::new(Behaviour::default()));
    let (panel, mut rx) = panel();

    panel.run(Action::Delegate, &evm_session(&wallet)).await;

    let mut state = PanelState::default();
    drain(&mut rx, &mut state);
    assert!(state.result.starts_with("Successfully delegated tokens! Transaction: 0x"));

    let writes = wallet.chain.writes.lock().unwrap();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].address, ContractConfig::default().staking_address);
    assert_eq!(writes[0].value, mint_amount());
}

#[tokio::test]
async fn delegate_without_wallet_client_reports_error() {
    let wallet = Arc::new(MockWallet::new(Behaviour {
        no_wallet_client: true,
        ..Default::default()
    }));
    let (panel, mut rx) = panel();

    panel.run(Action::Delegate, &evm_session(&wallet)).await;

    let mut state = PanelState::default();
    drain(&mut rx, &mut state);
    assert_eq!(
        state.result,
        "Error delegating tokens: Could not get wallet client from wallet"
    );
}

#[tokio::test]
async fn failed_switch_keeps_previous_result() {
    let wallet = Arc::new(MockWallet::new(Behaviour {
        fail_switch: Some("chain not added".into()),
        ..Default::default()
    }));
    let (panel, mut rx) = panel();
    let mut state = PanelState::default();
    state.apply(PanelUpdate::Result("Current count is: 7".into()));

    panel.run(Action::SwitchNetwork, &evm_session(&wallet)).await;

    assert!(drain(&mut rx, &mut state).is_empty());
    assert_eq!(state.result, "Current count is: 7");
}

#[tokio::test]
async fn switch_reports_new_network() {
    let wallet = Arc::new(MockWallet::new(Behaviour::default()));
    let (panel, mut rx) = panel();

    panel.run(Action::SwitchNetwork, &evm_session(&wallet)).await;

    let mut state = PanelState::default();
    drain(&mut rx, &mut state);
    assert_eq!(state.active_chain_id, Some(1328));
    assert_eq!(state.result, "Successfully switched to Sei Testnet (Sei Testnet)");
}

#[tokio::test]
async fn sign_message_shows_signature() {
    let wallet = Arc::new(MockWallet::new(Behaviour::default()));
    let (panel, mut rx) = panel();

    panel.run(Action::SignMessage, &evm_session(&wallet)).await;

    let mut state = PanelState::default();
    drain(&mut rx, &mut state);
    assert_eq!(state.result, "0xsigned:Hello World");
}

#[tokio::test]
async fn client_dumps_break_cycles() {
    let wallet = Arc::new(MockWallet::new(Behaviour::default()));
    let (panel, mut rx) = panel();
    let session = evm_session(&wallet);

    panel.run(Action::FetchWalletClient, &session).await;
    let mut state = PanelState::default();
    drain(&mut rx, &mut state);
    assert!(state.result.contains("\"walletClient\""));
    assert!(state.result.contains("[Circular]"));

    panel.run(Action::FetchUser, &session).await;
    drain(&mut rx, &mut state);
    assert!(state.result.contains("test-env"));
    assert!(state.result.contains("[Circular]"));
}

#[tokio::test]
async fn clear_empties_result() {
    let wallet = Arc::new(MockWallet::new(Behaviour::default()));
    let (panel, mut rx) = panel();
    let mut state = PanelState::default();
    state.apply(PanelUpdate::Result("something".into()));

    panel.run(Action::Clear, &evm_session(&wallet)).await;

    drain(&mut rx, &mut state);
    assert!(state.result.is_empty());
}

async fn settle(app: &mut App) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while app.state.count.is_none() || app.state.is_minting {
            app.drain_updates();
            tokio::task::yield_now().await;
        }
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn app_reads_count_once_wallet_is_ready() {
    let provider = WalletSessionProvider::new();
    let mut app = App::new(test_config(), provider.subscribe());
    assert!(app.sync_session());
    assert!(!app.is_ready());
    assert!(!app.has_evm_wallet());

    let wallet = Arc::new(MockWallet::new(Behaviour::default()));
    *wallet.chain.balance.lock().unwrap() = U256::from(9u64);
    provider.login(WalletHandle::Evm(wallet.clone()), "test-env");

    assert!(app.sync_session());
    assert!(app.is_ready());
    settle(&mut app).await;
    assert_eq!(app.state.count_display(), "9");

    provider.disconnect();
    assert!(app.sync_session());
    assert!(!app.is_ready());
    assert_eq!(app.state, PanelState::default());
}

#[tokio::test]
async fn app_refuses_second_mint_while_minting() {
    let provider = WalletSessionProvider::new();
    let wallet = Arc::new(MockWallet::new(Behaviour::default()));
    provider.login(WalletHandle::Evm(wallet.clone()), "test-env");
    let mut app = App::new(test_config(), provider.subscribe());
    app.sync_session();
    settle(&mut app).await;

    let first = app.dispatch(Action::Mint);
    assert!(first.is_some());
    assert!(app.state.is_minting);
    assert!(app.dispatch(Action::Mint).is_none());

    first.unwrap().await.unwrap();
    app.drain_updates();
    assert!(!app.state.is_minting);
    assert_eq!(wallet.chain.writes.lock().unwrap().len(), 1);
    assert!(app.dispatch(Action::Mint).is_some());
}

#[tokio::test]
async fn concurrent_actions_all_report() {
    let wallet = Arc::new(MockWallet::new(Behaviour::default()));
    let (panel, mut rx) = panel();
    let session = evm_session(&wallet);

    let handles = vec![
        panel.spawn(Action::SignMessage, session.clone()),
        panel.spawn(Action::Delegate, session.clone()),
        panel.spawn(Action::FetchCount, session),
    ];
    for joined in futures::future::join_all(handles).await {
        joined.unwrap();
    }

    let mut state = PanelState::default();
    let updates = drain(&mut rx, &mut state);
    assert!(updates.contains(&PanelUpdate::Result("0xsigned:Hello World".into())));
    assert!(updates
        .iter()
        .any(|u| matches!(u, PanelUpdate::Result(r) if r.starts_with("Successfully delegated"))));
    assert!(state.count.is_some());
}

#[tokio::test]
async fn logged_out_wallet_does_not_reach_next_session() {
    let provider = WalletSessionProvider::new();
    let wallet = Arc::new(MockWallet::new(Behaviour::default()));
    provider.login(WalletHandle::Evm(wallet.clone()), "test-env");
    let mut app = App::new(test_config(), provider.subscribe());
    app.sync_session();

    let sign = app.dispatch(Action::SignMessage).unwrap();
    provider.disconnect();
    app.sync_session();
    sign.await.unwrap();

    provider.login(
        WalletHandle::Cosmos(CosmosAccount {
            address: "sei1qyqszqgpqyqszqgpqyqszqgpqyqszqgpjnp7du".to_string(),
        }),
        "test-env",
    );
    assert!(app.sync_session());
    tokio::task::yield_now().await;
    assert_eq!(app.drain_updates(), 0);
    assert!(app.state.result.is_empty());
    assert_eq!(app.state.count, None);
}

#[tokio::test]
async fn late_mint_from_previous_wallet_is_dropped() {
    let provider = WalletSessionProvider::new();
    let first = Arc::new(MockWallet::new(Behaviour {
        fail_write: Some("user rejected".into()),
        ..Default::default()
    }));
    provider.login(WalletHandle::Evm(first.clone()), "test-env");
    let mut app = App::new(config_with_fallback_delay(200), provider.subscribe());
    app.sync_session();
    settle(&mut app).await;

    let mint = app.dispatch(Action::Mint).unwrap();
    provider.disconnect();
    app.sync_session();

    let second = Arc::new(MockWallet::new(Behaviour::default()));
    *second.chain.balance.lock().unwrap() = U256::from(9u64);
    provider.login(WalletHandle::Evm(second.clone()), "test-env");
    app.sync_session();
    settle(&mut app).await;
    assert_eq!(app.state.count_display(), "9");

    // a mint for the new wallet is in flight when the old one finishes
    app.state.apply(PanelUpdate::Minting(true));
    mint.await.unwrap();
    app.drain_updates();

    assert_eq!(first.balance(), mint_amount());
    assert_eq!(app.state.count_display(), "9");
    assert!(app.state.is_minting);
    assert!(app.state.result.is_empty());
}
