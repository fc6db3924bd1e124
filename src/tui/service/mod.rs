pub mod payment;

pub use payment::{poll_payment_messages, start_payment, PollContext};
