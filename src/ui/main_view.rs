use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};
use crate::app::{App, MessageType};
use crate::constants::MESSAGE_AREA_MARGIN;
use super::utils::{render_banner, render_status_indicators};

/// Render the action panel
pub fn draw_main(f: &mut Frame, app: &mut App) {
    let primary_color = Color::Red;
    let secondary_color = Color::LightRed;
    let dim_color = Color::DarkGray;

    // Full screen border
    let main_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(primary_color));
    f.render_widget(main_block, f.size());

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(6),   // banner
            Constraint::Length(3),   // status indicators
            Constraint::Min(3),      // actions and results
            Constraint::Length(3),   // controls
        ])
        .split(f.size());

    render_banner(f, main_layout[0], secondary_color);
    render_status_indicators(f, app, main_layout[1], primary_color);

    let content_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(60),
        ])
        .split(main_layout[2]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // current count
            Constraint::Min(0),     // actions
        ])
        .split(content_layout[0]);

    render_count(f, app, left_chunks[0], primary_color, secondary_color);
    render_action_list(f, app, left_chunks[1], primary_color, secondary_color, dim_color);
    render_result_area(f, app, content_layout[1], primary_color);
    render_help_controls(f, app, main_layout[3], dim_color, secondary_color);
}

fn render_count(f: &mut Frame, app: &App, area: Rect, primary_color: Color, secondary_color: Color) {
    let count_block = Block::default()
        .title("CURRENT COUNT")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(primary_color));

    let count_text = if app.has_evm_wallet() {
        app.state.count_display().to_string()
    } else {
        "N/A (not an EVM wallet)".to_string()
    };

    let count = Paragraph::new(count_text)
        .block(count_block)
        .style(Style::default().fg(secondary_color))
        .alignment(Alignment::Left);
    f.render_widget(count, area);
}

fn render_action_list(
    f: &mut Frame,
    app: &mut App,
    area: Rect,
    primary_color: Color,
    secondary_color: Color,
    dim_color: Color,
) {
    let items: Vec<ListItem> = app
        .available_actions()
        .into_iter()
        .map(|action| {
            let disabled = action == crate::panel::Action::Mint && app.state.is_minting;
            let style = if disabled {
                Style::default().fg(dim_color)
            } else {
                Style::default().fg(secondary_color)
            };
            ListItem::new(Line::from(vec![
                Span::styled("[", Style::default().fg(dim_color)),
                Span::styled(action.hotkey().to_ascii_uppercase().to_string(), Style::default().fg(Color::Yellow)),
                Span::styled("] ", Style::default().fg(dim_color)),
                Span::styled(app.action_label(action), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default()
            .title(" ACTIONS ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(primary_color)))
        .highlight_style(Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::White))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut app.actions_state);
}

fn render_result_area(f: &mut Frame, app: &App, area: Rect, primary_color: Color) {
    let message_block = Block::default()
        .title(" RESULT ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(primary_color));

    if app.state.result.is_empty() {
        // Just show the border when no message
        f.render_widget(message_block, area);
        return;
    }

    let color = match app.message_type() {
        MessageType::Error => Color::Red,
        MessageType::Info => Color::Yellow,
        MessageType::Success => Color::Green,
    };

    // Calculate available width (minus borders and margins)
    let available_width = area.width.saturating_sub(MESSAGE_AREA_MARGIN).max(1);
    let wrapped_text = app.state.result
        .lines()
        .flat_map(|line| {
            textwrap::wrap(line, available_width as usize)
                .into_iter()
                .map(|part| part.into_owned())
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>()
        .join("\n");

    let message_text = Paragraph::new(wrapped_text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Left)
        .block(message_block);
    f.render_widget(message_text, area);
}

fn render_help_controls(f: &mut Frame, app: &App, area: Rect, dim_color: Color, highlight_color: Color) {
    let help_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(dim_color));

    let mut spans = vec![
        Span::styled("Q", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
        Span::raw(" QUIT"),
        Span::raw("   "),
        Span::styled("↑↓", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
        Span::raw(" SELECT"),
        Span::raw("   "),
        Span::styled("ENTER", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
        Span::raw(" RUN"),
        Span::raw("   "),
        Span::styled("X", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
        Span::raw(" LOGOUT"),
    ];
    if app.state.is_minting {
        spans.push(Span::raw("   "));
        spans.push(Span::styled("MINT IN PROGRESS", Style::default().fg(Color::Yellow)));
    }

    let help = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(dim_color))
        .alignment(Alignment::Center)
        .block(help_block);
    f.render_widget(help, area);
}
