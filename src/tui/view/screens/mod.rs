mod roster;

pub use roster::{render_roster, RosterScreenData};
