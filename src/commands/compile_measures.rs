//! The `compile-measures` mode (§6, C10): runs the batch runner over every
//! (sequence group, algorithm, thread-count) triple named on the command
//! line and writes the resulting `RunSummary` rows.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::Mutex;

use crate::args;
use crate::batch::{run_batch, RunSummary, SequenceGroup};
use crate::errors::Result;
use crate::progress::LoggingProgressSink;

use super::standard::read_sequences;

pub fn compile_measures(args: &args::CompileMeasures) -> Result<()> {
    let mut groups = Vec::with_capacity(args.inputs.len());
    for input in &args.inputs {
        let sequences = read_sequences(input)?;
        let label = input.file_stem().and_then(|s| s.to_str()).unwrap_or("group").to_string();
        groups.push(SequenceGroup { label, sequences });
    }

    let summaries: Mutex<Vec<RunSummary>> = Mutex::new(Vec::new());
    run_batch(
        &groups,
        &args.algorithms,
        &args.thread_counts,
        args.lengths.min_length,
        args.lengths.max_length,
        args.lengths.length_step,
        args.lengths.capacity,
        args.epsilon,
        &LoggingProgressSink,
        |summary| {
            log::info!("{} / {} / {} threads: {} result(s) in {:?}", summary.label, summary.algorithm, summary.threads, summary.results.len(), summary.elapsed);
            summaries.lock().unwrap().push(summary);
        },
    )?;

    let mut summaries = summaries.into_inner().unwrap();
    summaries.sort_by(|a, b| a.label.cmp(&b.label).then(a.algorithm.to_string().cmp(&b.algorithm.to_string())).then(a.threads.cmp(&b.threads)));

    let mut writer = BufWriter::new(File::create(&args.output)?);
    for summary in &summaries {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            summary.label,
            summary.algorithm,
            summary.threads,
            summary.results.len(),
            summary.elapsed.as_secs_f64()
        )?;
    }
    Ok(())
}
