//! The batch runner (C10): drives (sequence-group x algorithm x
//! thread-count) x (lengths x starts), times each run, and emits
//! `RunSummary` values to a caller-supplied sink. See spec §4.10, §5.

use std::time::{Duration, Instant};

use itertools::iproduct;
use rayon::prelude::*;

use crate::errors::Result;
use crate::nucleotide::Nucleotide;
use crate::progress::ProgressSink;
use crate::result::ScoreResult;
use crate::scoring::{all_pairs, build_scorer, AlgorithmTag, Context};
use crate::segment::{validate_length_range, validate_sequences};
use crate::synthesis::synthesize;
use crate::topk::TopK;

/// A named group of equal-length homologous sequences.
#[derive(Debug, Clone)]
pub struct SequenceGroup {
    pub label: String,
    pub sequences: Vec<Vec<Nucleotide>>,
}

/// The outcome of scoring one (group, algorithm, threads) triple.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub label: String,
    pub algorithm: AlgorithmTag,
    pub threads: usize,
    pub results: Vec<ScoreResult>,
    pub elapsed: Duration,
}

/// Runs every (group, algorithm, threads) triple and calls `sink` once per
/// triple with its `RunSummary`, notifying `progress` of triple and length
/// boundaries along the way.
///
/// `threads` is a label only (§4.10, §5): this implementation dispatches
/// triples across a rayon `par_iter`, but does not spin up a
/// per-triple thread pool sized by the label. `sink` and `progress` may
/// both be called from multiple worker threads concurrently and must be
/// safe to call that way.
pub fn run_batch<F>(
    groups: &[SequenceGroup],
    algorithms: &[AlgorithmTag],
    thread_counts: &[usize],
    min_length: usize,
    max_length: usize,
    length_step: usize,
    capacity: usize,
    epsilon: f64,
    progress: &(dyn ProgressSink + Sync),
    sink: F,
) -> Result<()>
where
    F: Fn(RunSummary) + Sync,
{
    validate_length_range(min_length, max_length, length_step)?;

    let triples: Vec<(usize, AlgorithmTag, usize)> =
        iproduct!(0..groups.len(), algorithms.iter().cloned(), thread_counts.iter().cloned()).collect();

    triples.into_par_iter().try_for_each(|(group_index, algorithm, threads)| -> Result<()> {
        progress.on_triple_start(group_index, &algorithm.to_string(), threads);

        let group = &groups[group_index];
        let seq_length = validate_sequences(&group.sequences, min_length)?;
        let synth = synthesize(group.sequences.len());
        let mut ctx = Context::new(&group.sequences, &synth);
        let mut scorer = build_scorer(algorithm, seq_length);
        let mut topk = TopK::new(capacity, epsilon);

        let started = Instant::now();
        let mut last_length = None;
        for pair in all_pairs(min_length, max_length, length_step, seq_length) {
            if last_length != Some(pair.length) {
                progress.on_length_start(pair.length);
                last_length = Some(pair.length);
            }
            let cost = scorer.cost_for(&mut ctx, &pair)?;
            topk.insert(ScoreResult::new(pair.start, pair.length, cost));
        }
        let elapsed = started.elapsed();
        let results = topk.snapshot();
        progress.on_triple_done(group_index, results.len());

        sink(RunSummary {
            label: group.label.clone(),
            algorithm,
            threads,
            results,
            elapsed,
        });
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nucleotide::Nucleotide;
    use crate::progress::NullProgressSink;
    use std::sync::Mutex;

    fn seq(s: &str) -> Vec<Nucleotide> {
        s.chars().map(|c| Nucleotide::from_abbreviation(c).unwrap()).collect()
    }

    #[test]
    fn emits_one_summary_per_triple() {
        let groups = vec![SequenceGroup {
            label: "identical".to_string(),
            sequences: vec![seq("acgtac"), seq("acgtac")],
        }];
        let algorithms = vec![AlgorithmTag::Standard, AlgorithmTag::Cache];
        let thread_counts = vec![1usize, 2usize];

        let summaries: Mutex<Vec<RunSummary>> = Mutex::new(Vec::new());
        run_batch(&groups, &algorithms, &thread_counts, 1, 3, 1, 5, 1e-9, &NullProgressSink, |s| {
            summaries.lock().unwrap().push(s);
        })
        .unwrap();

        let summaries = summaries.into_inner().unwrap();
        assert_eq!(summaries.len(), 4);
        for s in &summaries {
            for r in &s.results {
                assert!(r.cost.abs() < 1e-9);
            }
        }
    }

    #[test]
    fn invalid_config_is_rejected_before_any_scoring() {
        let groups = vec![SequenceGroup {
            label: "g".to_string(),
            sequences: vec![seq("acgtac"), seq("acgtac")],
        }];
        let result = run_batch(&groups, &[AlgorithmTag::Standard], &[1], 0, 3, 1, 5, 1e-9, &NullProgressSink, |_| {});
        assert!(result.is_err());
    }
}
