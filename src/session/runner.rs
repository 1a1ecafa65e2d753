//! Drives a session: draw, split into gachas, report each one, pace.

use super::config::SessionConfig;
use super::pacing::{Pace, Pacer};
use crate::aggregate::{high_value, tally, GradeTally};
use crate::catalog::{Catalog, Item};
use crate::draw::{draw_many, RollSource};
use crate::error::SessionError;
use crate::report::{BatchReport, ReportSink};

/// Outcome of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub batches_shown: usize,
    pub batch_count: usize,
    pub cancelled: bool,
    /// Draws covered by the batches that were shown.
    pub total_draws: usize,
    pub cumulative: GradeTally,
}

/// Draws `config.total_draws()` items up front, then reports them gacha by
/// gacha.
pub fn run_session<S, K, P>(
    catalog: &Catalog,
    config: &SessionConfig,
    rng: &mut S,
    sink: &mut K,
    pacer: &mut P,
) -> Result<SessionSummary, SessionError>
where
    S: RollSource + ?Sized,
    K: ReportSink + ?Sized,
    P: Pacer + ?Sized,
{
    config.validate()?;
    let results = draw_many(catalog, config.checked_total_draws()?, rng);
    tracing::debug!(
        draws = results.len(),
        gachas = config.gachas,
        "drew session results"
    );
    replay_session(&results, config, sink, pacer)
}

/// Reports already-drawn `results` in batches of `config.batch_size`.
///
/// The cumulative tally is updated incrementally from each batch tally. A
/// `Pace::Stop` from the pacer ends the session before the next batch.
pub fn replay_session<K, P>(
    results: &[&Item],
    config: &SessionConfig,
    sink: &mut K,
    pacer: &mut P,
) -> Result<SessionSummary, SessionError>
where
    K: ReportSink + ?Sized,
    P: Pacer + ?Sized,
{
    if config.batch_size == 0 {
        return Err(crate::error::InputError::InvalidBatchSize.into());
    }

    let batch_count = results.len().div_ceil(config.batch_size);
    let highlights = high_value(results, &config.highlight, config.batch_size);

    let mut cumulative = GradeTally::new();
    let mut batches_shown = 0;
    let mut total_draws = 0;
    let mut cancelled = false;

    for (offset, batch) in results.chunks(config.batch_size).enumerate() {
        let batch_tally = tally(batch);
        cumulative += &batch_tally;
        total_draws += batch.len();

        let visible = highlights.partition_point(|h| h.position < total_draws);
        let report = BatchReport {
            index: offset + 1,
            batch_count,
            items: batch,
            batch_tally,
            cumulative_tally: cumulative.clone(),
            total_draws,
            highlights: &highlights[..visible],
        };
        sink.emit(&report)?;
        batches_shown += 1;

        if report.is_last() {
            break;
        }
        if pacer.pause()? == Pace::Stop {
            tracing::debug!(batches_shown, batch_count, "session cancelled");
            cancelled = true;
            break;
        }
    }

    sink.finish()?;

    Ok(SessionSummary {
        batches_shown,
        batch_count,
        cancelled,
        total_draws,
        cumulative,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Grade;
    use crate::draw::ScriptedRolls;
    use crate::report::RecordingSink;
    use crate::session::pacing::{NoPause, StopAfter};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Item::new("Common", "Stick", 0.8),
            Item::new("Legendary", "Dragon", 0.2),
        ])
        .unwrap()
    }

    #[test]
    fn test_run_session_reports_every_batch() {
        let catalog = catalog();
        let config = SessionConfig::instant(3);
        let mut rolls = ScriptedRolls::new((0..33).map(|i| if i % 11 == 0 { 0.9 } else { 0.1 }));
        let mut sink = RecordingSink::default();

        let summary = run_session(&catalog, &config, &mut rolls, &mut sink, &mut NoPause).unwrap();

        assert_eq!(summary.batches_shown, 3);
        assert!(!summary.cancelled);
        assert_eq!(summary.total_draws, 33);
        assert_eq!(summary.cumulative.get(&Grade::Legendary), 3);
        assert_eq!(summary.cumulative.get(&Grade::Common), 30);
        assert!(sink.finished);

        let third = &sink.batches[2];
        assert_eq!(third.index, 3);
        assert_eq!(third.total_draws, 33);
        assert_eq!(third.batch_tally.get(&Grade::Legendary), 1);
        assert_eq!(
            third.highlights,
            vec![
                (1, "Dragon".to_string()),
                (2, "Dragon".to_string()),
                (3, "Dragon".to_string())
            ]
        );
    }

    #[test]
    fn test_highlights_only_cover_shown_batches() {
        let catalog = catalog();
        let config = SessionConfig::instant(2);
        let mut rolls = ScriptedRolls::new((0..22).map(|i| if i == 15 { 0.95 } else { 0.0 }));
        let mut sink = RecordingSink::default();

        run_session(&catalog, &config, &mut rolls, &mut sink, &mut NoPause).unwrap();

        assert!(sink.batches[0].highlights.is_empty());
        assert_eq!(sink.batches[1].highlights, vec![(2, "Dragon".to_string())]);
    }

    #[test]
    fn test_stop_ends_session_early() {
        let catalog = catalog();
        let config = SessionConfig::instant(5);
        let mut rolls = ScriptedRolls::new(vec![0.0; 55]);
        let mut sink = RecordingSink::default();
        let mut pacer = StopAfter::new(1);

        let summary = run_session(&catalog, &config, &mut rolls, &mut sink, &mut pacer).unwrap();

        assert!(summary.cancelled);
        assert_eq!(summary.batches_shown, 2);
        assert_eq!(summary.batch_count, 5);
        assert_eq!(summary.total_draws, 22);
        assert_eq!(sink.batches.len(), 2);
        assert!(sink.finished);
    }

    #[test]
    fn test_last_batch_does_not_pause() {
        let catalog = catalog();
        let config = SessionConfig::instant(1);
        let mut rolls = ScriptedRolls::new(vec![0.0; 11]);
        let mut sink = RecordingSink::default();
        // Would stop on the first pause; a single gacha never pauses.
        let mut pacer = StopAfter::new(0);

        let summary = run_session(&catalog, &config, &mut rolls, &mut sink, &mut pacer).unwrap();
        assert!(!summary.cancelled);
        assert_eq!(summary.batches_shown, 1);
    }

    #[test]
    fn test_replay_short_final_batch() {
        let catalog = catalog();
        let results: Vec<&Item> = (0..13).map(|_| &catalog.items()[0]).collect();
        let mut sink = RecordingSink::default();

        let summary =
            replay_session(&results, &SessionConfig::instant(1), &mut sink, &mut NoPause).unwrap();

        assert_eq!(summary.batch_count, 2);
        assert_eq!(sink.batches[1].item_names.len(), 2);
        assert_eq!(sink.batches[1].total_draws, 13);
    }

    #[test]
    fn test_replay_empty_results_reports_nothing() {
        let mut sink = RecordingSink::default();
        let summary =
            replay_session(&[], &SessionConfig::instant(1), &mut sink, &mut NoPause).unwrap();
        assert_eq!(summary.batches_shown, 0);
        assert!(summary.cumulative.is_empty());
        assert!(sink.batches.is_empty());
    }

    #[test]
    fn test_invalid_config_fails_before_drawing() {
        let catalog = catalog();
        let mut rolls = ScriptedRolls::default();
        let mut sink = RecordingSink::default();
        let result = run_session(
            &catalog,
            &SessionConfig::instant(0),
            &mut rolls,
            &mut sink,
            &mut NoPause,
        );
        assert!(matches!(result, Err(SessionError::Input(_))));
        assert!(sink.batches.is_empty());
    }

    #[test]
    fn test_oversized_session_is_rejected_before_drawing() {
        let catalog = catalog();
        let mut rolls = ScriptedRolls::default();
        let mut sink = RecordingSink::default();
        let result = run_session(
            &catalog,
            &SessionConfig::instant(usize::MAX),
            &mut rolls,
            &mut sink,
            &mut NoPause,
        );
        assert!(matches!(
            result,
            Err(SessionError::Input(crate::error::InputError::TooManyDraws { .. }))
        ));
        assert!(sink.batches.is_empty());
    }
}
