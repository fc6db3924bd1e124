use crate::tui::state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

use crate::tui::controller::common::HelpContext;
use crate::tui::controller::roster::RosterContext;
use crate::tui::controller::{handle_help_key, handle_roster_key};
use crate::tui::service::{poll_payment_messages, PollContext};
use crate::tui::state::{expire_alerts, AppMode};
use crate::tui::view::components::modal::render_help_modal;
use crate::tui::view::{render_roster, RosterScreenData};

impl App {
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> Result<()> {
        while !self.should_quit {
            self.poll_payments();
            expire_alerts(&mut self.alerts, self.config.alert_timeout());
            self.payment.advance_spinner();

            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers)?;
                }
            }
        }

        Ok(())
    }

    fn poll_payments(&mut self) {
        let mut ctx = PollContext {
            payment_rx: &self.payment_rx,
            students: &mut self.students,
            payment: &mut self.payment,
            alerts: &mut self.alerts,
        };
        poll_payment_messages(&mut ctx);
    }

    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> Result<()> {
        match self.mode {
            AppMode::Roster => {
                let mut ctx = RosterContext {
                    table_state: &mut self.table_state,
                    students: &mut self.students,
                    search_active: &mut self.search_active,
                    search_query: &mut self.search_query,
                    sort: &mut self.sort,
                    payment: &mut self.payment,
                    payment_tx: &self.payment_tx,
                    config: &self.config,
                    mode: &mut self.mode,
                    prev_mode: &mut self.prev_mode,
                    should_quit: &mut self.should_quit,
                };
                handle_roster_key(&mut ctx, code)
            }
            AppMode::Help => {
                let mut ctx = HelpContext {
                    mode: &mut self.mode,
                    prev_mode: &mut self.prev_mode,
                };
                handle_help_key(&mut ctx, code)
            }
        }
    }

    fn render(&mut self, f: &mut ratatui::Frame) {
        let mut data = RosterScreenData {
            table_state: &mut self.table_state,
            students: &self.students,
            search_active: self.search_active,
            search_query: &self.search_query,
            sort: self.sort,
            alerts: &self.alerts,
            payment: &self.payment,
        };
        render_roster(f, &mut data);

        if self.mode == AppMode::Help {
            render_help_modal(f);
        }
    }
}
