//! Pauses between batch reports.

use crate::constants::PACER_POLL_MS;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Continue,
    Stop,
}

/// Decides whether, and when, the next batch is emitted.
pub trait Pacer {
    fn pause(&mut self) -> io::Result<Pace>;
}

/// Continues immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl Pacer for NoPause {
    fn pause(&mut self) -> io::Result<Pace> {
        Ok(Pace::Continue)
    }
}

/// Continues for a fixed number of pauses, then stops.
#[derive(Debug, Clone, Copy)]
pub struct StopAfter {
    remaining: usize,
}

impl StopAfter {
    pub fn new(pauses: usize) -> Self {
        Self { remaining: pauses }
    }
}

impl Pacer for StopAfter {
    fn pause(&mut self) -> io::Result<Pace> {
        if self.remaining == 0 {
            return Ok(Pace::Stop);
        }
        self.remaining -= 1;
        Ok(Pace::Continue)
    }
}

/// Waits `delay` while watching the keyboard; `q`, `Esc` or `Ctrl-C` stops.
#[derive(Debug, Clone, Copy)]
pub struct TerminalPacer {
    delay: Duration,
}

impl TerminalPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    fn wait_for_cancel(&self) -> io::Result<Pace> {
        let deadline = Instant::now() + self.delay;
        loop {
            let now = Instant::now();
            if now >= deadline {
                return Ok(Pace::Continue);
            }
            let timeout = (deadline - now).min(Duration::from_millis(PACER_POLL_MS));

            if event::poll(timeout)? {
                if let Event::Key(key_event) = event::read()? {
                    if key_event.kind == KeyEventKind::Press
                        && is_cancel_key(key_event.code, key_event.modifiers)
                    {
                        return Ok(Pace::Stop);
                    }
                }
            }
        }
    }
}

impl Pacer for TerminalPacer {
    fn pause(&mut self) -> io::Result<Pace> {
        if self.delay.is_zero() {
            return Ok(Pace::Continue);
        }

        // Raw mode only for the wait, so report lines print normally.
        if let Err(err) = enable_raw_mode() {
            tracing::debug!(%err, "no terminal for key polling, sleeping instead");
            thread::sleep(self.delay);
            return Ok(Pace::Continue);
        }
        let result = self.wait_for_cancel();
        restore_after_wait(result, disable_raw_mode())
    }
}

/// Combines the wait outcome with leaving raw mode; a wait error wins.
fn restore_after_wait(result: io::Result<Pace>, restored: io::Result<()>) -> io::Result<Pace> {
    match (result, restored) {
        (Err(err), Err(restore_err)) => {
            tracing::warn!(%restore_err, "failed to leave raw mode after a key polling error");
            Err(err)
        }
        (result, restored) => restored.and(result),
    }
}

fn is_cancel_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
