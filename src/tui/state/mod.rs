pub mod alerts;
pub mod app_state;
pub mod modes;
pub mod payment;

pub use alerts::{expire_alerts, Alert, AlertLevel};
pub use app_state::App;
pub use modes::{AppMode, SortDirection};
pub use payment::{spinner_char, PaymentMessage, PaymentState};
