//! The `generate-references` mode (§6): run `standard` and write its
//! results as a references file, for later use by `compare-results`.

use crate::args;
use crate::errors::Result;

use super::standard;

pub fn generate_references(args: &args::GenerateReferences) -> Result<()> {
    standard::standard(&args.standard)
}
