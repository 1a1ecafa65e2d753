use super::{BatchReport, ReportSink};
use crate::catalog::{Catalog, Grade};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct OddsLine<'a> {
    odds: Vec<OddsEntry<'a>>,
}

#[derive(Serialize)]
struct OddsEntry<'a> {
    grade: &'a Grade,
    name: &'a str,
    share: f64,
}

/// Writes each item's drop rate as a single JSON line, so it can precede the
/// batch stream of a `JsonLinesSink` on the same writer.
pub fn write_odds<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    let line = OddsLine {
        odds: catalog
            .odds()
            .into_iter()
            .map(|(item, share)| OddsEntry {
                grade: &item.grade,
                name: &item.name,
                share,
            })
            .collect(),
    };
    serde_json::to_writer(&mut *out, &line)?;
    writeln!(out)
}

/// Writes one JSON object per batch report, newline separated.
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonLinesSink<W> {
    fn emit(&mut self, report: &BatchReport<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, report)?;
        writeln!(self.out)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
