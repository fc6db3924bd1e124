use crate::tui::state::{Alert, AlertLevel};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub const MAX_VISIBLE_ALERTS: usize = 3;

/// Stacked banner of the most recent alerts, newest on top.
pub fn render_alerts(f: &mut Frame, area: Rect, alerts: &[Alert]) {
    let lines: Vec<Line> = alerts
        .iter()
        .rev()
        .take(MAX_VISIBLE_ALERTS)
        .map(|alert| {
            let color = match alert.level {
                AlertLevel::Info => Color::Cyan,
                AlertLevel::Success => Color::Green,
            };
            Line::from(Span::styled(&alert.message, Style::default().fg(color)))
        })
        .collect();

    let banner =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Alerts "));
    f.render_widget(banner, area);
}
