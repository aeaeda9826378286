//! The four scoring strategies (C8), built by composing a `ColumnCostFn`
//! (plain or pattern-memoized) with an `Accumulator` (plain or
//! sliding-window), per the design note in spec §9.

use std::collections::HashMap;
use std::str::FromStr;

use error_chain::bail;
use itertools::Itertools;

use crate::errors::{ErrorKind, Result};
use crate::nucleotide::{Nucleotide, DNA_BASES, DNA_BASES_WITH_GAP};
use crate::pattern::Pattern;
use crate::phylogeny::NodeId;
use crate::prespeciation::pre_speciation_cost;
use crate::segment::SegmentPair;
use crate::smtree::SMTree;
use crate::synthesis::SynthesizedPhylogeny;

/// The identifying tag for one of the four algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmTag {
    Standard,
    Cache,
    Patterns,
    CachePatterns,
}

static ALGORITHM_TAGS: &[&str] = &["standard", "cache", "patterns", "cache_patterns"];

impl AlgorithmTag {
    pub fn variants() -> &'static [&'static str] {
        ALGORITHM_TAGS
    }
}

impl FromStr for AlgorithmTag {
    type Err = crate::errors::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "standard" => Ok(AlgorithmTag::Standard),
            "cache" => Ok(AlgorithmTag::Cache),
            "patterns" => Ok(AlgorithmTag::Patterns),
            "cache_patterns" => Ok(AlgorithmTag::CachePatterns),
            _ => Err(ErrorKind::ParseAlgorithmError(s.to_string()).into()),
        }
    }
}

impl std::fmt::Display for AlgorithmTag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            AlgorithmTag::Standard => "standard",
            AlgorithmTag::Cache => "cache",
            AlgorithmTag::Patterns => "patterns",
            AlgorithmTag::CachePatterns => "cache_patterns",
        };
        write!(f, "{}", s)
    }
}

/// The shared, per-sequence-group state a scorer needs: the synthesized
/// topology, the SMTree built over it, and the sequences themselves.
pub struct Context<'a> {
    sequences: &'a [Vec<Nucleotide>],
    left_leaves: &'a [NodeId],
    right_leaves: &'a [NodeId],
    tree: SMTree<Nucleotide>,
}

impl<'a> Context<'a> {
    pub fn new(sequences: &'a [Vec<Nucleotide>], synth: &'a SynthesizedPhylogeny) -> Self {
        Context {
            sequences,
            left_leaves: &synth.left_leaves,
            right_leaves: &synth.right_leaves,
            tree: SMTree::mimic(&synth.tree),
        }
    }

    fn column(&self, pair: &SegmentPair, j: usize) -> Vec<Nucleotide> {
        pair.column(self.sequences, j)
    }

    /// Fixes the SMTree's leaves to `column`, updates it, and returns the
    /// pre-speciation cost. This is the non-memoized primitive both
    /// `StandardColumnCost` and `PatternColumnCost` ultimately call.
    ///
    /// A column containing `Any` is a no-op (§9): it contributes zero cost
    /// without touching the tree. A column containing `Gap` but no `Any`
    /// widens the state space so Gap participates as a regular state.
    fn standard_column_cost(&mut self, column: &[Nucleotide]) -> Result<f64> {
        if column.iter().any(|&s| s == Nucleotide::Any) {
            return Ok(0.0);
        }
        for (&leaf, &state) in self.left_leaves.iter().chain(self.right_leaves.iter()).zip(column.iter()) {
            self.tree.fix_state(leaf, state);
        }
        if column.iter().any(|&s| s == Nucleotide::Gap) {
            self.tree.update(&DNA_BASES_WITH_GAP, &hamming)?;
            pre_speciation_cost(&self.tree, &DNA_BASES_WITH_GAP, &hamming)
        } else {
            self.tree.update(&DNA_BASES, &hamming)?;
            pre_speciation_cost(&self.tree, &DNA_BASES, &hamming)
        }
    }
}

fn hamming(a: &Nucleotide, b: &Nucleotide) -> f64 {
    if a == b {
        0.0
    } else {
        1.0
    }
}

/// A column-cost primitive, optionally memoized.
pub trait ColumnCostFn {
    fn column_cost(&mut self, ctx: &mut Context, column: &[Nucleotide]) -> Result<f64>;
}

/// The un-memoized column cost: fix, update, evaluate.
pub struct StandardColumnCost;

impl ColumnCostFn for StandardColumnCost {
    fn column_cost(&mut self, ctx: &mut Context, column: &[Nucleotide]) -> Result<f64> {
        ctx.standard_column_cost(column)
    }
}

/// Memoizes column costs by their `Pattern` key (§4.7/§4.8).
#[derive(Default)]
pub struct PatternColumnCost {
    cache: HashMap<Pattern, f64>,
}

impl PatternColumnCost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ColumnCostFn for PatternColumnCost {
    fn column_cost(&mut self, ctx: &mut Context, column: &[Nucleotide]) -> Result<f64> {
        let key = Pattern::from_states(column);
        if let Some(&cost) = self.cache.get(&key) {
            return Ok(cost);
        }
        let cost = ctx.standard_column_cost(column)?;
        self.cache.insert(key, cost);
        Ok(cost)
    }
}

/// Accumulates per-column costs into the pair's average cost.
pub trait Accumulator {
    fn cost_for(&mut self, ctx: &mut Context, column_cost: &mut dyn ColumnCostFn, pair: &SegmentPair) -> Result<f64>;
}

/// Recomputes every column of every pair from scratch.
pub struct PlainAccumulator;

impl Accumulator for PlainAccumulator {
    fn cost_for(&mut self, ctx: &mut Context, column_cost: &mut dyn ColumnCostFn, pair: &SegmentPair) -> Result<f64> {
        let mut sum = 0.0;
        for j in 0..pair.length {
            let column = ctx.column(pair, j);
            sum += column_cost.column_cost(ctx, &column)?;
        }
        Ok(sum / pair.length as f64)
    }
}

/// Exploits the sliding-window structure of segment enumeration (§4.8
/// Cache): for a fixed length, each new start drops one column and adds
/// one. Requires the driving loop to visit every start for a fixed length
/// before moving to the next length; `start == 0` triggers a full refill.
pub struct SlidingWindowAccumulator {
    col_cost: Vec<f64>,
    sum: f64,
}

impl SlidingWindowAccumulator {
    /// `seq_length` must be the length of the sequences being scored; the
    /// backing array is allocated once, per spec §5's memory note.
    pub fn new(seq_length: usize) -> Self {
        SlidingWindowAccumulator {
            col_cost: vec![0.0; seq_length],
            sum: 0.0,
        }
    }
}

impl Accumulator for SlidingWindowAccumulator {
    fn cost_for(&mut self, ctx: &mut Context, column_cost: &mut dyn ColumnCostFn, pair: &SegmentPair) -> Result<f64> {
        if pair.start == 0 {
            self.sum = 0.0;
            for j in 0..pair.length {
                let column = ctx.column(pair, j);
                let cost = column_cost.column_cost(ctx, &column)?;
                self.col_cost[j] = cost;
                self.sum += cost;
            }
        } else {
            self.sum -= self.col_cost[pair.start - 1];
            let column = ctx.column(pair, pair.last_column());
            let cost = column_cost.column_cost(ctx, &column)?;
            let idx = pair.start + pair.length - 1;
            if idx >= self.col_cost.len() {
                bail!(ErrorKind::InternalInvariantViolation(
                    "sliding-window cache index out of bounds -- was the outer loop driven out of order?".into()
                ));
            }
            self.col_cost[idx] = cost;
            self.sum += cost;
        }
        Ok(self.sum / pair.length as f64)
    }
}

/// A fully assembled scorer: an `Accumulator` paired with a `ColumnCostFn`.
pub struct Scorer {
    accumulator: Box<dyn Accumulator>,
    column_cost: Box<dyn ColumnCostFn>,
}

impl Scorer {
    pub fn cost_for(&mut self, ctx: &mut Context, pair: &SegmentPair) -> Result<f64> {
        self.accumulator.cost_for(ctx, &mut *self.column_cost, pair)
    }
}

/// The algorithm factory (C8 entry point): builds the scorer named by
/// `tag`, the four algorithms being the four `(Accumulator, ColumnCostFn)`
/// pairings.
pub fn build_scorer(tag: AlgorithmTag, seq_length: usize) -> Scorer {
    match tag {
        AlgorithmTag::Standard => Scorer {
            accumulator: Box::new(PlainAccumulator),
            column_cost: Box::new(StandardColumnCost),
        },
        AlgorithmTag::Cache => Scorer {
            accumulator: Box::new(SlidingWindowAccumulator::new(seq_length)),
            column_cost: Box::new(StandardColumnCost),
        },
        AlgorithmTag::Patterns => Scorer {
            accumulator: Box::new(PlainAccumulator),
            column_cost: Box::new(PatternColumnCost::new()),
        },
        AlgorithmTag::CachePatterns => Scorer {
            accumulator: Box::new(SlidingWindowAccumulator::new(seq_length)),
            column_cost: Box::new(PatternColumnCost::new()),
        },
    }
}

/// Enumerates every `(length, start)` in range as `SegmentPair`s, in the
/// length-then-start order the sliding-window accumulators require.
pub fn all_pairs(min_length: usize, max_length: usize, length_step: usize, seq_length: usize) -> Vec<SegmentPair> {
    crate::segment::lengths(min_length, max_length, length_step, seq_length)
        .flat_map(|length| crate::segment::starts(length, seq_length).map(move |start| SegmentPair { start, length }))
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::synthesize;

    fn seqs_from(strs: &[&str]) -> Vec<Vec<Nucleotide>> {
        strs.iter()
            .map(|s| s.chars().map(|c| Nucleotide::from_abbreviation(c).unwrap()).collect())
            .collect()
    }

    #[test]
    fn identical_sequences_score_zero_under_every_algorithm() {
        let sequences = seqs_from(&["acgtac", "acgtac"]);
        let synth = synthesize(sequences.len());
        let seq_length = sequences[0].len();

        for &tag in &[
            AlgorithmTag::Standard,
            AlgorithmTag::Cache,
            AlgorithmTag::Patterns,
            AlgorithmTag::CachePatterns,
        ] {
            let mut ctx = Context::new(&sequences, &synth);
            let mut scorer = build_scorer(tag, seq_length);
            for pair in all_pairs(1, 3, 1, seq_length) {
                let cost = scorer.cost_for(&mut ctx, &pair).unwrap();
                assert!(cost.abs() < 1e-9, "{:?} gave nonzero cost {} for {:?}", tag, cost, pair);
            }
        }
    }

    #[test]
    fn all_four_algorithms_agree_on_a_single_mutation() {
        let sequences = seqs_from(&["acgtac", "acatac"]);
        let synth = synthesize(sequences.len());
        let seq_length = sequences[0].len();

        let mut results: Vec<Vec<f64>> = Vec::new();
        for &tag in &[
            AlgorithmTag::Standard,
            AlgorithmTag::Cache,
            AlgorithmTag::Patterns,
            AlgorithmTag::CachePatterns,
        ] {
            let mut ctx = Context::new(&sequences, &synth);
            let mut scorer = build_scorer(tag, seq_length);
            let mut costs = Vec::new();
            for pair in all_pairs(1, 3, 1, seq_length) {
                costs.push(scorer.cost_for(&mut ctx, &pair).unwrap());
            }
            results.push(costs);
        }

        for costs in &results[1..] {
            for (a, b) in results[0].iter().zip(costs.iter()) {
                assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn nonzero_cost_present_when_mutation_is_inside_a_pair() {
        // "acgtac" vs "acatac" differ at index 2 (0-based).
        let sequences = seqs_from(&["acgtac", "acatac"]);
        let synth = synthesize(sequences.len());
        let seq_length = sequences[0].len();
        let mut ctx = Context::new(&sequences, &synth);
        let mut scorer = build_scorer(AlgorithmTag::Standard, seq_length);

        let pair = SegmentPair { start: 2, length: 1 };
        let cost = scorer.cost_for(&mut ctx, &pair).unwrap();
        assert!(cost > 0.0);
    }

    #[test]
    fn a_column_containing_any_is_a_free_no_op() {
        let sequences = seqs_from(&["acntac", "acatac"]);
        let synth = synthesize(sequences.len());
        let seq_length = sequences[0].len();
        let mut ctx = Context::new(&sequences, &synth);
        let mut scorer = build_scorer(AlgorithmTag::Standard, seq_length);

        // Column at index 2 pairs 'n' against 'a'; Any makes the whole
        // column free regardless of what it is paired with.
        let pair = SegmentPair { start: 2, length: 1 };
        let cost = scorer.cost_for(&mut ctx, &pair).unwrap();
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn gap_participates_as_a_distinct_state() {
        let sequences = seqs_from(&["ac_tac", "acatac"]);
        let synth = synthesize(sequences.len());
        let seq_length = sequences[0].len();
        let mut ctx = Context::new(&sequences, &synth);
        let mut scorer = build_scorer(AlgorithmTag::Standard, seq_length);

        let pair = SegmentPair { start: 2, length: 1 };
        let cost = scorer.cost_for(&mut ctx, &pair).unwrap();
        assert!(cost > 0.0);
    }
}
