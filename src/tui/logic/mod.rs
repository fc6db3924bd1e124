pub mod filter;
pub mod navigation;
pub mod sorting;

pub use filter::{row_matches, visible_rows};
pub use navigation::{navigate_down, navigate_up};
pub use sorting::{sort_by_column, sort_rows, sort_rows_directed};
