use crate::roster::Student;
use crate::tui::state::{Alert, PaymentMessage, PaymentState};
use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use std::time::Duration;

/// Kicks off one simulated payment round trip. The worker sleeps for the
/// configured delay and reports back over the channel; there is no
/// cancellation and no retry.
pub fn start_payment(username: String, delay: Duration, tx: Sender<PaymentMessage>) {
    thread::spawn(move || {
        thread::sleep(delay);
        let _ = tx.send(PaymentMessage::Settled { username });
    });
}

pub struct PollContext<'a> {
    pub payment_rx: &'a Receiver<PaymentMessage>,
    pub students: &'a mut Vec<Student>,
    pub payment: &'a mut PaymentState,
    pub alerts: &'a mut Vec<Alert>,
}

/// Drains settled payments and applies them to the roster. A settle for a
/// row that no longer exists clears the in-flight marker and nothing else.
pub fn poll_payment_messages(ctx: &mut PollContext) {
    while let Ok(msg) = ctx.payment_rx.try_recv() {
        match msg {
            PaymentMessage::Settled { username } => {
                ctx.payment.in_flight.remove(&username);
                if let Some(student) = ctx
                    .students
                    .iter_mut()
                    .find(|s| s.username == username)
                {
                    student.fees_paid = true;
                    ctx.alerts
                        .push(Alert::success(format!("Marked fees as paid for {}", student.name)));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::demo_roster;
    use std::sync::mpsc::channel;

    #[test]
    fn test_worker_sends_a_settle_message() {
        let (tx, rx) = channel();
        start_payment("aarav".to_string(), Duration::ZERO, tx);

        let msg = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        let PaymentMessage::Settled { username } = msg;
        assert_eq!(username, "aarav");
    }

    #[test]
    fn test_settle_marks_the_student_paid_and_raises_an_alert() {
        let (tx, rx) = channel();
        let mut students = demo_roster();
        let mut payment = PaymentState::default();
        payment.in_flight.insert("aarav".to_string());
        let mut alerts = Vec::new();

        tx.send(PaymentMessage::Settled {
            username: "aarav".to_string(),
        })
        .unwrap();

        let mut ctx = PollContext {
            payment_rx: &rx,
            students: &mut students,
            payment: &mut payment,
            alerts: &mut alerts,
        };
        poll_payment_messages(&mut ctx);

        let aarav = students.iter().find(|s| s.username == "aarav").unwrap();
        assert!(aarav.fees_paid);
        assert!(!payment.is_in_flight("aarav"));
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].message.contains("Marked fees as paid"));
    }

    #[test]
    fn test_settle_for_a_missing_row_is_harmless() {
        let (tx, rx) = channel();
        let mut students = demo_roster();
        let mut payment = PaymentState::default();
        payment.in_flight.insert("ghost".to_string());
        let mut alerts = Vec::new();

        tx.send(PaymentMessage::Settled {
            username: "ghost".to_string(),
        })
        .unwrap();

        let mut ctx = PollContext {
            payment_rx: &rx,
            students: &mut students,
            payment: &mut payment,
            alerts: &mut alerts,
        };
        poll_payment_messages(&mut ctx);

        assert!(!payment.is_in_flight("ghost"));
        assert!(alerts.is_empty());
    }
}
