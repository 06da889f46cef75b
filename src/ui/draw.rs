use ratatui::Frame;
use crate::app::App;
use super::{main_view, waiting};

/// Main entry point for UI rendering
/// Shows the action panel once a wallet is connected, the waiting screen otherwise
pub fn draw(f: &mut Frame, app: &mut App) {
    if app.is_ready() {
        main_view::draw_main(f, app);
    } else {
        waiting::draw_waiting(f, app);
    }
}
