use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_roster_footer(f: &mut Frame, area: Rect, search_active: bool) {
    let footer = if search_active {
        Paragraph::new(Line::from(vec![
            Span::styled("Type", Style::default().fg(Color::Cyan)),
            Span::raw(" Filter  "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" Apply  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(" Clear"),
        ]))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled("↑↓", Style::default().fg(Color::Cyan)),
            Span::raw(" Nav  "),
            Span::styled("/", Style::default().fg(Color::Cyan)),
            Span::raw(" Search  "),
            Span::styled("1-5", Style::default().fg(Color::Cyan)),
            Span::raw(" Sort  "),
            Span::styled("p", Style::default().fg(Color::Cyan)),
            Span::raw(" Mark Paid  "),
            Span::styled("?", Style::default().fg(Color::Cyan)),
            Span::raw(" Help  "),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(" Quit"),
        ]))
    };

    f.render_widget(footer.block(Block::default().borders(Borders::TOP)), area);
}
