//! External collaborators (spec §6): FASTA input and the results stream.
//! Out of the core's algorithmic scope, but needed for the CLI to run.

pub mod fasta;
pub mod results;
