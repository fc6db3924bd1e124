use crate::config::Config;
use crate::roster::{Column, Student, COLUMNS};
use crate::tui::logic::{navigate_down, navigate_up, sort_by_column, visible_rows};
use crate::tui::service::start_payment;
use crate::tui::state::{AppMode, PaymentMessage, PaymentState, SortDirection};
use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::widgets::TableState;
use std::sync::mpsc::Sender;

pub struct RosterContext<'a> {
    pub table_state: &'a mut TableState,
    pub students: &'a mut Vec<Student>,
    pub search_active: &'a mut bool,
    pub search_query: &'a mut String,
    pub sort: &'a mut Option<(Column, SortDirection)>,
    pub payment: &'a mut PaymentState,
    pub payment_tx: &'a Sender<PaymentMessage>,
    pub config: &'a Config,
    pub mode: &'a mut AppMode,
    pub prev_mode: &'a mut Option<AppMode>,
    pub should_quit: &'a mut bool,
}

pub fn handle_roster_key(ctx: &mut RosterContext, code: KeyCode) -> Result<()> {
    if *ctx.search_active {
        return handle_search_key(ctx, code);
    }

    match code {
        KeyCode::Char('q') => *ctx.should_quit = true,
        KeyCode::Up => navigate_up(ctx.table_state),
        KeyCode::Down => {
            let visible = visible_rows(ctx.students, ctx.search_query);
            navigate_down(ctx.table_state, visible.len());
        }
        KeyCode::Char('/') => {
            *ctx.search_active = true;
        }
        KeyCode::Char('p') | KeyCode::Enter => mark_paid(ctx),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                apply_column_sort(ctx, digit as usize - 1);
            }
        }
        KeyCode::Char('?') => {
            *ctx.prev_mode = Some(*ctx.mode);
            *ctx.mode = AppMode::Help;
        }
        KeyCode::Esc => {
            if !ctx.search_query.is_empty() {
                ctx.search_query.clear();
                ctx.table_state.select(Some(0));
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_search_key(ctx: &mut RosterContext, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Esc => {
            *ctx.search_active = false;
            ctx.search_query.clear();
            ctx.table_state.select(Some(0));
        }
        KeyCode::Enter => {
            *ctx.search_active = false;
        }
        KeyCode::Backspace => {
            ctx.search_query.pop();
            ctx.table_state.select(Some(0));
        }
        KeyCode::Char(c) => {
            ctx.search_query.push(c);
            ctx.table_state.select(Some(0));
        }
        _ => {}
    }
    Ok(())
}

fn apply_column_sort(ctx: &mut RosterContext, column_idx: usize) {
    if let Some(&column) = COLUMNS.get(column_idx) {
        let direction = sort_by_column(ctx.students, column);
        *ctx.sort = Some((column, direction));
        ctx.table_state.select(Some(0));
    }
}

/// Starts the simulated payment for the focused row. Already-paid and
/// in-flight rows are left alone, as is a focus that points past the
/// visible rows.
fn mark_paid(ctx: &mut RosterContext) {
    let focused = get_focused_student(ctx.students, ctx.search_query, ctx.table_state.selected());
    if let Some(student) = focused {
        if student.fees_paid || ctx.payment.is_in_flight(&student.username) {
            return;
        }
        ctx.payment.in_flight.insert(student.username.clone());
        start_payment(
            student.username.clone(),
            ctx.config.payment_delay(),
            ctx.payment_tx.clone(),
        );
    }
}

fn get_focused_student(
    students: &[Student],
    search_query: &str,
    selected: Option<usize>,
) -> Option<Student> {
    let visible = visible_rows(students, search_query);
    let idx = *visible.get(selected?)?;
    students.get(idx).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::demo_roster;

    #[test]
    fn test_focused_student_respects_the_filter() {
        let students = demo_roster();
        let focused = get_focused_student(&students, "chitra", Some(0)).unwrap();
        assert_eq!(focused.username, "chitra");
    }

    #[test]
    fn test_focus_past_the_visible_rows_is_none() {
        let students = demo_roster();
        assert!(get_focused_student(&students, "chitra", Some(5)).is_none());
        assert!(get_focused_student(&students, "", None).is_none());
    }
}
