//! Colored terminal tables for batch reports.

use super::{BatchReport, ReportSink};
use crate::aggregate::GradeTally;
use crate::catalog::{Catalog, Grade};
use crate::constants::{GACHA_COLUMN_WIDTH, GRADE_COLUMN_WIDTH, NAME_COLUMN_WIDTH};
use crate::session::SessionConfig;
use crossterm::cursor::MoveTo;
use crossterm::style::{style, Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Write};

const RULE: &str = "----------------------------------------";

pub fn grade_color(grade: &Grade) -> Color {
    match grade {
        Grade::Common => Color::White,
        Grade::Uncommon => Color::Green,
        Grade::Rare => Color::Blue,
        Grade::Epic => Color::Magenta,
        Grade::Legendary => Color::Yellow,
        Grade::Other(_) => Color::White,
    }
}

/// Heading for the high-value table, e.g. "Epic or higher".
pub fn highlight_label(grades: &[Grade]) -> String {
    if grades == Grade::high_value().as_slice() {
        return "Epic or higher".to_string();
    }
    grades
        .iter()
        .map(|g| g.name())
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Writes batch reports as the classic summon screen.
pub struct ConsoleSink<W: Write> {
    out: W,
    title: String,
    highlight_label: String,
    color: bool,
    clear_screen: bool,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, config: &SessionConfig) -> Self {
        Self {
            out,
            title: config.title.clone(),
            highlight_label: highlight_label(&config.highlight),
            color: config.color,
            clear_screen: config.clear_screen,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, grade: &Grade, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", style(text).with(grade_color(grade)))
        } else {
            writeln!(self.out, "{text}")
        }
    }

    fn counts(&mut self, tally: &GradeTally) -> io::Result<()> {
        for (grade, count) in tally.iter() {
            self.line(grade, &format!("{grade}: {count}"))?;
        }
        Ok(())
    }
}

impl<W: Write> ReportSink for ConsoleSink<W> {
    fn emit(&mut self, report: &BatchReport<'_>) -> io::Result<()> {
        if self.clear_screen {
            self.out.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
        }

        writeln!(self.out)?;
        writeln!(self.out, "{} - Gacha {} Results:", self.title, report.index)?;
        writeln!(self.out, "{RULE}")?;
        writeln!(
            self.out,
            "| {:<gw$} | {:<nw$} |",
            "Grade",
            "Item Name",
            gw = GRADE_COLUMN_WIDTH,
            nw = NAME_COLUMN_WIDTH
        )?;
        writeln!(self.out, "{RULE}")?;
        for item in report.items {
            let row = format!(
                "| {:<gw$} | {:<nw$} |",
                item.grade,
                item.name,
                gw = GRADE_COLUMN_WIDTH,
                nw = NAME_COLUMN_WIDTH
            );
            self.line(&item.grade, &row)?;
        }
        writeln!(self.out, "{RULE}")?;

        writeln!(self.out)?;
        writeln!(self.out, "Summary for gacha {}:", report.index)?;
        self.counts(&report.batch_tally)?;

        writeln!(self.out)?;
        writeln!(self.out, "Final Summary up to gacha {}:", report.index)?;
        writeln!(self.out, "Total draws: {}", report.total_draws)?;
        self.counts(&report.cumulative_tally)?;

        writeln!(self.out)?;
        writeln!(self.out, "Items with grade {}:", self.highlight_label)?;
        writeln!(self.out, "{RULE}")?;
        writeln!(
            self.out,
            "| {:<bw$} | {:<gw$} | {:<nw$} |",
            "Gacha",
            "Grade",
            "Item Name",
            bw = GACHA_COLUMN_WIDTH,
            gw = GRADE_COLUMN_WIDTH,
            nw = NAME_COLUMN_WIDTH
        )?;
        writeln!(self.out, "{RULE}")?;
        for highlight in report.highlights {
            let row = format!(
                "| {:<bw$} | {:<gw$} | {:<nw$} |",
                highlight.batch,
                highlight.item.grade,
                highlight.item.name,
                bw = GACHA_COLUMN_WIDTH,
                gw = GRADE_COLUMN_WIDTH,
                nw = NAME_COLUMN_WIDTH
            );
            self.line(&highlight.item.grade, &row)?;
        }
        writeln!(self.out, "{RULE}")?;

        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Writes each item's share of the total weight.
pub fn write_odds<W: Write>(out: &mut W, catalog: &Catalog, color: bool) -> io::Result<()> {
    writeln!(out, "Drop rates ({} items):", catalog.len())?;
    writeln!(out, "{RULE}")?;
    for (item, share) in catalog.odds() {
        let row = format!(
            "| {:<gw$} | {:<nw$} | {:>7.3}% |",
            item.grade,
            item.name,
            share * 100.0,
            gw = GRADE_COLUMN_WIDTH,
            nw = NAME_COLUMN_WIDTH
        );
        if color {
            writeln!(out, "{}", style(&row).with(grade_color(&item.grade)))?;
        } else {
            writeln!(out, "{row}")?;
        }
    }
    writeln!(out, "{RULE}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{high_value, tally};
    use crate::catalog::Item;

    fn plain_config() -> SessionConfig {
        SessionConfig {
            color: false,
            ..SessionConfig::instant(1)
        }
    }

    fn render(report: &BatchReport<'_>, config: &SessionConfig) -> String {
        let mut sink = ConsoleSink::new(Vec::new(), config);
        sink.emit(report).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_grade_colors() {
        assert_eq!(grade_color(&Grade::Common), Color::White);
        assert_eq!(grade_color(&Grade::Uncommon), Color::Green);
        assert_eq!(grade_color(&Grade::Rare), Color::Blue);
        assert_eq!(grade_color(&Grade::Epic), Color::Magenta);
        assert_eq!(grade_color(&Grade::Legendary), Color::Yellow);
        assert_eq!(grade_color(&Grade::from("Mythic")), Color::White);
    }

    #[test]
    fn test_highlight_label() {
        assert_eq!(highlight_label(&Grade::high_value()), "Epic or higher");
        assert_eq!(highlight_label(&[Grade::Rare, Grade::Epic]), "Rare or Epic");
    }

    #[test]
    fn test_console_renders_tables_without_color() {
        let stick = Item::new("Common", "Stick", 0.8);
        let dragon = Item::new("Legendary", "Dragon", 0.2);
        let items = vec![&stick, &dragon, &stick];
        let highlights = high_value(&items, &Grade::high_value(), 11);
        let report = BatchReport {
            index: 1,
            batch_count: 1,
            items: &items,
            batch_tally: tally(&items),
            cumulative_tally: tally(&items),
            total_draws: 3,
            highlights: &highlights,
        };

        let text = render(&report, &plain_config());

        assert!(text.contains("Sunset's Mount Summon - Gacha 1 Results:"));
        assert!(text.contains("| Grade     | Item Name                |"));
        assert!(text.contains("| Legendary | Dragon                   |"));
        assert!(text.contains("Summary for gacha 1:\nCommon: 2\nLegendary: 1\n"));
        assert!(text.contains("Final Summary up to gacha 1:\nTotal draws: 3\n"));
        assert!(text.contains("Items with grade Epic or higher:"));
        assert!(text.contains("| 1         | Legendary | Dragon                   |"));
        assert!(!text.contains('\u{1b}'), "no escape codes without color or clearing");
    }

    #[test]
    fn test_console_color_and_clear_emit_escapes() {
        let stick = Item::new("Common", "Stick", 1.0);
        let items = vec![&stick];
        let report = BatchReport {
            index: 1,
            batch_count: 1,
            items: &items,
            batch_tally: tally(&items),
            cumulative_tally: tally(&items),
            total_draws: 1,
            highlights: &[],
        };
        let config = SessionConfig {
            clear_screen: true,
            ..SessionConfig::instant(1)
        };

        let text = render(&report, &config);
        assert!(text.contains('\u{1b}'));
        assert!(text.contains("Stick"));
    }

    #[test]
    fn test_write_odds() {
        let catalog = Catalog::new(vec![
            Item::new("Common", "Stick", 0.75),
            Item::new("Epic", "Blade", 0.25),
        ])
        .unwrap();
        let mut out = Vec::new();
        write_odds(&mut out, &catalog, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Drop rates (2 items):"));
        assert!(text.contains("| Common    | Stick                    |  75.000% |"));
        assert!(text.contains("| Epic      | Blade                    |  25.000% |"));
    }
}
