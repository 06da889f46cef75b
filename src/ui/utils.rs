use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::constants::SEI_BANNER;

// Helper function to split ASCII art into multiple lines and apply color
pub fn split_ascii_art(art: &str, color: Color) -> Vec<Line> {
    art.trim_matches('\n').lines()
        .map(|line| Line::from(vec![Span::styled(line.to_string(), Style::default().fg(color))]))
        .collect()
}

pub fn render_banner(f: &mut Frame, area: Rect, color: Color) {
    let banner = Paragraph::new(split_ascii_art(SEI_BANNER, color))
        .alignment(Alignment::Center);
    f.render_widget(banner, area);
}

/// Network / chain family / wallet strip under the banner
pub fn render_status_indicators(f: &mut Frame, app: &App, area: Rect, color: Color) {
    let status_indicators = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let network_status = format!("NETWORK: {}", app.current_network().to_uppercase());
    let network_info = Paragraph::new(network_status)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    f.render_widget(network_info, status_indicators[0]);

    let family = app.session.primary_wallet
        .as_ref()
        .map(|w| w.chain_family().as_str())
        .unwrap_or("NO WALLET");
    let family_text = format!("╔══════╡ {} ╞══════╗", family);
    let family_info = Paragraph::new(family_text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    f.render_widget(family_info, status_indicators[1]);

    let wallet_status = format!("WALLET: {}", app.wallet_address);
    let wallet_info = Paragraph::new(wallet_status)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    f.render_widget(wallet_info, status_indicators[2]);
}
