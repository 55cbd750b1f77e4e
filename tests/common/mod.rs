//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use seeded_random::{EntropySource, Error, Result};

/// Initialize test tracing (call once at the beginning of tests).
///
/// Only logs from this crate are shown. Subsequent calls are ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new("seeded_random=trace");

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

/// Entropy source replaying scripted answers.
///
/// Status and gather results are popped from their queues; once a queue runs
/// dry the last value is repeated. Fills write a counter pattern so separate
/// draws differ.
pub struct ScriptedSource {
    statuses: RefCell<VecDeque<i32>>,
    last_status: Cell<i32>,
    progress: RefCell<VecDeque<i32>>,
    last_progress: Cell<i32>,
    fail_fill: bool,
    pub status_calls: Cell<usize>,
    pub gather_calls: Cell<usize>,
    pub fill_calls: Cell<usize>,
}

impl ScriptedSource {
    /// A source that is already seeded and fills successfully.
    pub fn seeded() -> Self {
        Self::scripted(&[1], &[0])
    }

    /// A source answering `statuses` and `progress` in order.
    pub fn scripted(statuses: &[i32], progress: &[i32]) -> Self {
        Self {
            statuses: RefCell::new(statuses.iter().copied().collect()),
            last_status: Cell::new(0),
            progress: RefCell::new(progress.iter().copied().collect()),
            last_progress: Cell::new(0),
            fail_fill: false,
            status_calls: Cell::new(0),
            gather_calls: Cell::new(0),
            fill_calls: Cell::new(0),
        }
    }

    /// Makes every fill fail after scribbling over the buffer.
    pub fn failing(mut self) -> Self {
        self.fail_fill = true;
        self
    }

    fn next(queue: &RefCell<VecDeque<i32>>, last: &Cell<i32>) -> i32 {
        if let Some(value) = queue.borrow_mut().pop_front() {
            last.set(value);
        }
        last.get()
    }
}

impl EntropySource for ScriptedSource {
    fn status(&self) -> i32 {
        self.status_calls.set(self.status_calls.get() + 1);
        Self::next(&self.statuses, &self.last_status)
    }

    fn gather(&self) -> i32 {
        self.gather_calls.set(self.gather_calls.get() + 1);
        Self::next(&self.progress, &self.last_progress)
    }

    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        let call = self.fill_calls.get() + 1;
        self.fill_calls.set(call);

        if self.fail_fill {
            dest.fill(0xFF);
            return Err(Error::Generation("scripted failure".to_string()));
        }

        for (i, byte) in dest.iter_mut().enumerate() {
            *byte = (i as u8).wrapping_mul(31).wrapping_add(call as u8);
        }
        Ok(())
    }
}
