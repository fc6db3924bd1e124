use crate::config::Config;
use crate::roster::{Column, Student};
use crate::tui::state::{Alert, AppMode, PaymentMessage, PaymentState, SortDirection};
use ratatui::widgets::TableState;
use std::sync::mpsc::{channel, Receiver, Sender};

pub struct App {
    pub config: Config,
    pub students: Vec<Student>,
    pub table_state: TableState,
    pub mode: AppMode,
    pub prev_mode: Option<AppMode>,
    pub should_quit: bool,
    pub search_active: bool,
    pub search_query: String,
    pub sort: Option<(Column, SortDirection)>,
    pub alerts: Vec<Alert>,
    pub payment: PaymentState,
    pub payment_tx: Sender<PaymentMessage>,
    pub payment_rx: Receiver<PaymentMessage>,
}

impl App {
    pub fn new(config: Config, students: Vec<Student>) -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        let (payment_tx, payment_rx) = channel();

        Self {
            config,
            students,
            table_state,
            mode: AppMode::Roster,
            prev_mode: None,
            should_quit: false,
            search_active: false,
            search_query: String::new(),
            sort: None,
            alerts: vec![Alert::info("Hostel Manager loaded")],
            payment: PaymentState::default(),
            payment_tx,
            payment_rx,
        }
    }
}
