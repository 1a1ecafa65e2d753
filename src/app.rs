//! One run of the `gacha` binary: load, prompt, draw, report.

use crate::catalog::{load_catalog, Catalog, Grade};
use crate::cli::{self, Cli};
use crate::report::{console, json, ConsoleSink, JsonLinesSink};
use crate::session::{run_session, SessionSummary, TerminalPacer};
use anyhow::Context;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{BufRead, Write};

/// Runs a session for `args`.
///
/// Reports go to `out`. In JSON mode `out` carries only JSON lines, so the
/// count prompt moves to `err` along with the cancellation notice.
pub fn run<R, W, E>(
    args: &Cli,
    input: &mut R,
    out: &mut W,
    err: &mut E,
) -> anyhow::Result<SessionSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let catalog = load_catalog(&args.catalog)
        .with_context(|| format!("could not load catalog from {}", args.catalog.display()))?;

    if args.odds {
        if args.json {
            json::write_odds(out, &catalog)?;
        } else {
            console::write_odds(out, &catalog, args.color())?;
        }
    }

    // Before any draw happens, so a bad count never consumes entropy.
    let gachas = match args.gachas.as_deref() {
        Some(raw) => cli::parse_count(raw)?,
        None if args.json => cli::prompt_count(input, err, args.batch_size)?,
        None => cli::prompt_count(input, out, args.batch_size)?,
    };
    let config = args.session_config(gachas);

    for grade in unmatched_highlights(&catalog, &config.highlight) {
        tracing::warn!(%grade, "highlight grade matches no catalog item");
    }

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut pacer = TerminalPacer::new(config.delay);

    let summary = if args.json {
        let mut sink = JsonLinesSink::new(&mut *out);
        run_session(&catalog, &config, &mut rng, &mut sink, &mut pacer)?
    } else {
        let mut sink = ConsoleSink::new(&mut *out, &config);
        run_session(&catalog, &config, &mut rng, &mut sink, &mut pacer)?
    };

    if summary.cancelled {
        writeln!(
            err,
            "Stopped after gacha {} of {}.",
            summary.batches_shown, summary.batch_count
        )?;
    }
    tracing::debug!(
        batches = summary.batches_shown,
        draws = summary.total_draws,
        "session finished"
    );

    Ok(summary)
}

/// Highlight grades no item in `catalog` carries.
pub fn unmatched_highlights<'g>(catalog: &Catalog, grades: &'g [Grade]) -> Vec<&'g Grade> {
    grades
        .iter()
        .filter(|grade| !catalog.has_grade(grade))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;

    #[test]
    fn test_unmatched_highlights_lists_missing_grades() {
        let catalog = Catalog::new(vec![
            Item::new("Common", "Stick", 0.8),
            Item::new("Epic", "Blade", 0.2),
        ])
        .unwrap();
        let grades = vec![Grade::from("epic"), Grade::Epic, Grade::Legendary];
        assert_eq!(
            unmatched_highlights(&catalog, &grades),
            vec![&Grade::from("epic"), &Grade::Legendary]
        );
    }

    #[test]
    fn test_default_highlights_match_bundled_style_catalog() {
        let catalog = Catalog::new(vec![
            Item::new("Epic", "Blade", 0.5),
            Item::new("Legendary", "Dragon", 0.5),
        ])
        .unwrap();
        assert!(unmatched_highlights(&catalog, &Grade::high_value()).is_empty());
    }
}
