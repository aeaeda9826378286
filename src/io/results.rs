//! The results stream (spec §6): newline-delimited, tab-separated
//! `(start, segment_length, cost)` records. Read and written with `csv`,
//! the way `commands::buildindex` reads its TSV input.

use std::io::{Read, Write};

use crate::errors::Result;
use crate::result::ScoreResult;

/// Reads a results stream into a `Vec<ScoreResult>`, in stream order.
pub fn read_results<R: Read>(source: R) -> Result<Vec<ScoreResult>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .from_reader(source);

    let mut results = Vec::new();
    for record in reader.deserialize() {
        let (start, segment_length, cost): (usize, usize, f64) = record?;
        results.push(ScoreResult::new(start, segment_length, cost));
    }
    Ok(results)
}

/// Writes a results stream, one tab-separated record per line, in the
/// given order.
pub fn write_results<W: Write>(sink: W, results: &[ScoreResult]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).delimiter(b'\t').from_writer(sink);
    for r in results {
        writer.serialize((r.start, r.segment_length, r.cost))?;
    }
    writer.flush()?;
    Ok(())
}

/// Elementwise `ScoreResult` equivalence between two streams, taken in
/// order (§6, §8 P7): unequal-length streams are never equivalent.
pub fn streams_equivalent(a: &[ScoreResult], b: &[ScoreResult], epsilon: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equivalent(y, epsilon))
}
