use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::{SystemTime, UNIX_EPOCH};
use crate::app::App;
use crate::config::config_path;
use crate::constants::ENV_PRIVATE_KEY;
use super::utils::{render_banner, render_status_indicators};

/// Renders the "awaiting wallet" screen
pub fn draw_waiting(f: &mut Frame, app: &mut App) {
    let base_color = Color::Red;
    let highlight_color = Color::LightRed;
    let dim_color = Color::DarkGray;

    // Full screen layout
    let main_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(base_color));
    f.render_widget(main_block, f.size());

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(6),   // banner
            Constraint::Length(3),   // status indicators
            Constraint::Min(3),      // connection info
            Constraint::Length(3),   // controls
        ])
        .split(f.size());

    render_banner(f, main_layout[0], highlight_color);
    render_status_indicators(f, app, main_layout[1], base_color);

    let time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let spinner = match time % 3 {
        0 => "⟳ ",
        1 => "⟲ ",
        _ => "◌ ",
    };

    let config_hint = config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<config dir unavailable>".to_string());

    let info_block = Block::default()
        .title(" << WALLET >> ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(base_color));

    let info_text = vec![
        Line::from(vec![
            Span::styled(">> ", Style::default().fg(highlight_color)),
            Span::styled("SYSTEM STATUS", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Yellow)),
            Span::raw("Awaiting wallet connection"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("STATUS: ", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
            Span::raw(format!("Set {} or add a [wallet] section to {}", ENV_PRIVATE_KEY, config_hint)),
        ]),
    ];

    let info = Paragraph::new(info_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .block(info_block);
    f.render_widget(info, main_layout[2]);

    let help_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(dim_color));
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Q", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
        Span::raw(" QUIT"),
    ]))
    .style(Style::default().fg(dim_color))
    .alignment(Alignment::Center)
    .block(help_block);
    f.render_widget(help, main_layout[3]);
}
