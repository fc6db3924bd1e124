use ratatui::widgets::TableState;

pub fn navigate_up(table_state: &mut TableState) {
    if let Some(current) = table_state.selected() {
        if current > 0 {
            table_state.select(Some(current - 1));
        }
    }
}

pub fn navigate_down(table_state: &mut TableState, max_items: usize) {
    let max = max_items.saturating_sub(1);
    if let Some(current) = table_state.selected() {
        if current < max {
            table_state.select(Some(current + 1));
        }
    }
}
