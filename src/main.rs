use anyhow::{Context, Result};
use crossterm::{
    event::{self as crossterm_event, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::{io, time::Duration};
use tracing::info;

use sei_panel::app::App;
use sei_panel::config::PanelConfig;
use sei_panel::constants::UI_TICK_MILLIS;
use sei_panel::logging;
use sei_panel::panel::Action;
use sei_panel::session::WalletSessionProvider;
use sei_panel::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let config = PanelConfig::load().context("Invalid configuration")?;
    logging::init(&config.log_file)?;
    info!(
        environment_id = %config.environment_id,
        chain_id = config.active_chain_id,
        "starting action panel"
    );

    let session = WalletSessionProvider::connect(&config);
    let mut app = App::new(config, session.subscribe());

    // set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &session).await;

    // restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        println!("{:?}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    session: &WalletSessionProvider,
) -> Result<()> {
    loop {
        app.sync_session();
        app.drain_updates();

        terminal.draw(|f| ui::draw(f, app))?;

        if crossterm_event::poll(Duration::from_millis(UI_TICK_MILLIS))? {
            if let Event::Key(key) = crossterm_event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Esc => return Ok(()),
                    // logout
                    KeyCode::Char('x') => session.disconnect(),
                    // list navigation
                    KeyCode::Up => app.previous_item(),
                    KeyCode::Down => app.next_item(),
                    KeyCode::Enter => {
                        app.dispatch_selected();
                    }
                    // action hotkeys
                    KeyCode::Char(c) => {
                        if let Some(action) = Action::from_hotkey(c) {
                            app.dispatch(action);
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}
