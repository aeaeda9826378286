//! The `compare-results` mode (§6, §8 P7/S6/S7): elementwise equivalence
//! between two results streams under a tolerance.

use std::fs::File;
use std::io::BufReader;

use error_chain::bail;

use crate::args;
use crate::errors::{ErrorKind, Result};
use crate::io::results::{read_results, streams_equivalent};

pub fn compare_results(args: &args::CompareResults) -> Result<()> {
    let left = read_results(BufReader::new(File::open(&args.left)?))?;
    let right = read_results(BufReader::new(File::open(&args.right)?))?;

    if streams_equivalent(&left, &right, args.epsilon) {
        log::info!("{} and {} are equivalent within epsilon {}", args.left.display(), args.right.display(), args.epsilon);
        Ok(())
    } else {
        bail!(ErrorKind::ResultsParseError(format!(
            "{} and {} are not equivalent within epsilon {} ({} vs {} records)",
            args.left.display(),
            args.right.display(),
            args.epsilon,
            left.len(),
            right.len()
        )));
    }
}
