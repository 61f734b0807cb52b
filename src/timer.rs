use std::sync::mpsc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaceEvent {
    NextQuestion,
    ShowResults,
}

/// Delivers `event` once after `delay`. Dropping the receiver cancels delivery.
pub fn spawn_delay(delay: Duration, event: PaceEvent) -> mpsc::Receiver<PaceEvent> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        let _ = tx.send(event);
    });

    rx
}
