pub mod components;
pub mod screens;

pub use screens::{render_roster, RosterScreenData};
