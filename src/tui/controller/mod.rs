pub mod common;
pub mod roster;

pub use common::handle_help_key;
pub use roster::handle_roster_key;
