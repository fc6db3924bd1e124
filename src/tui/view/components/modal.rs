use crate::tui::view::components::centered_rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn render_help_modal(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Hostel Manager Help",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Navigation",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  ↑/↓    ", Style::default().fg(Color::Cyan)),
            Span::raw("Move between students"),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Search",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  /      ", Style::default().fg(Color::Cyan)),
            Span::raw("Filter rows as you type"),
        ]),
        Line::from(vec![
            Span::styled("  Esc    ", Style::default().fg(Color::Cyan)),
            Span::raw("Clear the filter"),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Sorting",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  1-5    ", Style::default().fg(Color::Cyan)),
            Span::raw("Sort by that column"),
        ]),
        Line::from(Span::raw(
            "  Sorting an already sorted column reverses it",
        )),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Fees",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  p/Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" Mark the focused student paid"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  q      ", Style::default().fg(Color::Cyan)),
            Span::raw("Quit"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press q, Esc, or ? to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph =
        Paragraph::new(help_text).block(Block::default().title(" Help ").borders(Borders::ALL));

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
