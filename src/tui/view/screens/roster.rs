use crate::roster::{Column, Student, COLUMNS};
use crate::tui::logic::visible_rows;
use crate::tui::state::{spinner_char, Alert, PaymentState, SortDirection};
use crate::tui::view::components::alerts::{render_alerts, MAX_VISIBLE_ALERTS};
use crate::tui::view::components::footer::render_roster_footer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

pub struct RosterScreenData<'a> {
    pub table_state: &'a mut TableState,
    pub students: &'a [Student],
    pub search_active: bool,
    pub search_query: &'a str,
    pub sort: Option<(Column, SortDirection)>,
    pub alerts: &'a [Alert],
    pub payment: &'a PaymentState,
}

pub fn render_roster(f: &mut Frame, data: &mut RosterScreenData) {
    let show_search = data.search_active || !data.search_query.is_empty();
    let alert_rows = data.alerts.len().min(MAX_VISIBLE_ALERTS) as u16;

    let mut constraints = vec![Constraint::Length(3)];
    if alert_rows > 0 {
        constraints.push(Constraint::Length(alert_rows + 2));
    }
    if show_search {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(5));
    constraints.push(Constraint::Length(3));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let mut idx = 0;
    render_header(f, chunks[idx], data);
    idx += 1;
    if alert_rows > 0 {
        render_alerts(f, chunks[idx], data.alerts);
        idx += 1;
    }
    if show_search {
        render_search_bar(f, chunks[idx], data);
        idx += 1;
    }
    render_table(f, chunks[idx], data);
    idx += 1;
    render_roster_footer(f, chunks[idx], data.search_active);
}

fn render_header(f: &mut Frame, area: Rect, data: &RosterScreenData) {
    let paid_count = data.students.iter().filter(|s| s.fees_paid).count();

    let mut spans = vec![
        Span::styled(
            " Hostel Manager ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Student Roster"),
        Span::raw("   "),
        Span::styled(
            format!("{} students | {} paid", data.students.len(), paid_count),
            Style::default().fg(Color::Green),
        ),
    ];

    if let Some((column, direction)) = data.sort {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("[{} {}]", column.label(), direction.label()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let header =
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

fn render_search_bar(f: &mut Frame, area: Rect, data: &RosterScreenData) {
    let style = if data.search_active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    let search = Paragraph::new(data.search_query)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(" Search "));
    f.render_widget(search, area);
}

fn render_table(f: &mut Frame, area: Rect, data: &mut RosterScreenData) {
    let header = Row::new(
        COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| Cell::from(format!("{} ({})", column.label(), i + 1))),
    )
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(1);

    let visible = visible_rows(data.students, data.search_query);
    let rows: Vec<Row> = visible
        .iter()
        .filter_map(|&i| data.students.get(i))
        .map(|student| {
            Row::new(vec![
                Cell::from(student.name.clone()),
                Cell::from(student.room.clone()),
                Cell::from(student.phone.clone()),
                Cell::from(student.joined.format("%Y-%m-%d").to_string()),
                fee_cell(student, data.payment),
            ])
        })
        .collect();

    let title = if visible.len() == data.students.len() {
        " Students ".to_string()
    } else {
        format!(" Students ({} of {}) ", visible.len(), data.students.len())
    };

    let widths = [
        Constraint::Percentage(30),
        Constraint::Percentage(12),
        Constraint::Percentage(22),
        Constraint::Percentage(18),
        Constraint::Percentage(18),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::NONE).title(title))
        .column_spacing(1)
        .row_highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(table, area, data.table_state);
}

fn fee_cell(student: &Student, payment: &PaymentState) -> Cell<'static> {
    if payment.is_in_flight(&student.username) {
        Cell::from(format!("{} posting", spinner_char(payment.spinner_tick)))
            .style(Style::default().fg(Color::Yellow))
    } else if student.fees_paid {
        Cell::from("Paid").style(Style::default().fg(Color::Green))
    } else {
        Cell::from("Due").style(Style::default().fg(Color::Red))
    }
}
