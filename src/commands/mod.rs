//! One module per CLI mode (§6), each a thin translation from parsed
//! `args::*` options to the core library calls and back to a results
//! stream. Mirrors `umgap::commands`'s one-function-per-subcommand shape.

pub mod compare_results;
pub mod compile_measures;
pub mod generate_references;
pub mod standard;
