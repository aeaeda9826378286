//! The default mode (§6 Standard): score every candidate segment pair in a
//! FASTA file's sequences and write the top-K results.

use std::fs::File;
use std::io::BufWriter;

use crate::args;
use crate::config::Config;
use crate::errors::{ErrorKind, Result};
use crate::io::{fasta, results};
use crate::nucleotide::Nucleotide;
use crate::progress::{NullProgressSink, ProgressSink};
use crate::result::ScoreResult;
use crate::scoring::{all_pairs, build_scorer, Context};
use crate::segment::validate_sequences;
use crate::synthesis::synthesize;
use crate::topk::TopK;

/// Reads `args.input`, scores it against `config`, and writes the sorted
/// top-K results to `args.output`. `input`/`output` are required here even
/// though `args::Standard` models them as `Option` (see that type's doc
/// comment) -- this is the one caller that runs with no subcommand tokens
/// to fill them from, so it enforces their presence itself.
pub fn standard(args: &args::Standard) -> Result<()> {
    let input = args.input.as_ref().ok_or_else(|| ErrorKind::InvalidConfig("an input FASTA file is required".into()))?;
    let output_path = args.output.as_ref().ok_or_else(|| ErrorKind::InvalidConfig("an output path is required".into()))?;

    let config = Config::new(
        args.min_length,
        args.max_length,
        args.length_step,
        args.capacity,
        args.epsilon,
        args.algorithm,
    )?;
    log::info!("{}", config);

    let sequences = read_sequences(input)?;
    let output = File::create(output_path)?;
    let scored = score_sequences(&sequences, &config, &NullProgressSink)?;
    results::write_results(BufWriter::new(output), &scored)
}

/// Parses every record of a FASTA file into its sequence, in file order.
pub fn read_sequences(path: &std::path::Path) -> Result<Vec<Vec<Nucleotide>>> {
    let file = File::open(path)?;
    fasta::Reader::new(file).records().map(|r| r.map(|rec| rec.sequence)).collect()
}

/// The single scoring primitive shared by `standard` and
/// `generate-references`: validate, synthesize the topology once, and run
/// every `(length, start)` pair of `config` through the chosen algorithm.
pub fn score_sequences(sequences: &[Vec<Nucleotide>], config: &Config, progress: &dyn ProgressSink) -> Result<Vec<ScoreResult>> {
    let seq_length = validate_sequences(sequences, config.min_length)?;
    let synth = synthesize(sequences.len());
    let mut ctx = Context::new(sequences, &synth);
    let mut scorer = build_scorer(config.algorithm, seq_length);
    let mut topk = TopK::new(config.capacity, config.epsilon);

    let mut last_length = None;
    for pair in all_pairs(config.min_length, config.max_length, config.length_step, seq_length) {
        if last_length != Some(pair.length) {
            progress.on_length_start(pair.length);
            last_length = Some(pair.length);
        }
        let cost = scorer.cost_for(&mut ctx, &pair)?;
        topk.insert(ScoreResult::new(pair.start, pair.length, cost));
    }

    let snapshot = topk.snapshot();
    progress.on_triple_done(0, snapshot.len());
    Ok(snapshot)
}
