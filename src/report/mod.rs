//! Structured batch reports and the sinks that render them.

pub mod console;
pub mod json;

pub use console::ConsoleSink;
pub use json::JsonLinesSink;

use crate::aggregate::{GradeTally, Highlight};
use crate::catalog::Item;
use serde::Serialize;
use std::io;

/// Everything known after one gacha batch has been drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport<'a> {
    /// 1-based gacha number.
    pub index: usize,
    pub batch_count: usize,
    pub items: &'a [&'a Item],
    pub batch_tally: GradeTally,
    pub cumulative_tally: GradeTally,
    /// Draws made up to and including this batch.
    pub total_draws: usize,
    /// High-value draws from every batch so far.
    pub highlights: &'a [Highlight<'a>],
}

impl BatchReport<'_> {
    pub fn is_last(&self) -> bool {
        self.index == self.batch_count
    }
}

/// Receives batch reports as a session progresses.
pub trait ReportSink {
    fn emit(&mut self, report: &BatchReport<'_>) -> io::Result<()>;

    /// Called once after the last emitted batch.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Owned copy of a report, kept by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedBatch {
    pub index: usize,
    pub item_names: Vec<String>,
    pub batch_tally: GradeTally,
    pub cumulative_tally: GradeTally,
    pub total_draws: usize,
    /// `(batch, item name)` for each highlight.
    pub highlights: Vec<(usize, String)>,
}

/// Keeps every report in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub batches: Vec<RecordedBatch>,
    pub finished: bool,
}

impl ReportSink for RecordingSink {
    fn emit(&mut self, report: &BatchReport<'_>) -> io::Result<()> {
        self.batches.push(RecordedBatch {
            index: report.index,
            item_names: report.items.iter().map(|i| i.name.clone()).collect(),
            batch_tally: report.batch_tally.clone(),
            cumulative_tally: report.cumulative_tally.clone(),
            total_draws: report.total_draws,
            highlights: report
                .highlights
                .iter()
                .map(|h| (h.batch, h.item.name.clone()))
                .collect(),
        });
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.finished = true;
        Ok(())
    }
}
