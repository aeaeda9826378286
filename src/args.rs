//! Argument parsing for `tandupscan`, modeled directly on `umgap::args`:
//! one `structopt` struct per mode, `FromStr` enums for free-form flag
//! values with a `static` `variants()` array, and an `error_chain!` block
//! for the parse errors that arise along the way.

use std::path::PathBuf;

use structopt::StructOpt;

use crate::scoring::AlgorithmTag;

/// The top-level CLI: a subcommand selects one of the non-default modes of
/// §6; omitting one runs the default "standard" mode over `standard`.
#[derive(Debug, StructOpt)]
#[structopt(name = "tandupscan")]
pub struct Opt {
    #[structopt(subcommand)]
    pub mode: Option<Mode>,

    #[structopt(flatten)]
    pub standard: Standard,
}

/// The non-default operating modes of §6.
#[derive(Debug, StructOpt)]
pub enum Mode {
    /// Runs the `standard` algorithm over a sequence group and writes its
    /// results as a references file for later comparison.
    #[structopt(name = "generate-references")]
    GenerateReferences(GenerateReferences),

    /// Compares two results files for equivalence under a tolerance.
    #[structopt(name = "compare-results")]
    CompareResults(CompareResults),

    /// Runs the scenario fixtures of spec §8 (S1-S6) as a smoke test.
    #[structopt(name = "run-tests")]
    RunTests(RunTests),

    /// Runs the batch runner (C10) over a matrix of sequence groups,
    /// algorithms and thread counts and reports timing measures.
    #[structopt(name = "compile-measures")]
    CompileMeasures(CompileMeasures),
}

/// Scores one sequence group with one algorithm and writes a results file.
/// The default mode when no subcommand is given.
///
/// `input`/`output` are `Option` rather than required positionals: clap 2
/// (which `structopt` wraps) does not waive a flattened parent's required
/// args just because a subcommand matched, so a required `PathBuf` here
/// would make every non-default mode fail to parse. Both this struct's use
/// as `Opt`'s default mode and `GenerateReferences`'s own nested copy are
/// validated for presence at the one place both funnel through,
/// `commands::standard::standard`.
#[derive(Debug, StructOpt)]
pub struct Standard {
    /// FASTA file of equal-length homologous sequences.
    #[structopt(parse(from_os_str))]
    pub input: Option<PathBuf>,

    /// Where to write the tab-separated results stream.
    #[structopt(parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// Smallest segment length tried.
    #[structopt(short = "m", long = "min-length", default_value = "1")]
    pub min_length: usize,

    /// Largest segment length tried (clamped to half the sequence length).
    #[structopt(short = "M", long = "max-length")]
    pub max_length: usize,

    /// Increment between tried lengths.
    #[structopt(short = "s", long = "length-step", default_value = "1")]
    pub length_step: usize,

    /// How many best results to keep (0 disables storage).
    #[structopt(short = "k", long = "capacity", default_value = "100")]
    pub capacity: usize,

    /// Tolerance for result equivalence and ordering.
    #[structopt(short = "e", long = "epsilon", default_value = "0.00000001")]
    pub epsilon: f64,

    /// The scoring algorithm to use.
    #[structopt(short = "a", long = "algorithm", default_value = "standard", raw(possible_values = "&AlgorithmTag::variants()"))]
    pub algorithm: AlgorithmTag,
}

/// The `generate-references` subcommand: run `standard` and write a
/// references file.
#[derive(Debug, StructOpt)]
pub struct GenerateReferences {
    #[structopt(flatten)]
    pub standard: Standard,
}

/// The `compare-results` subcommand.
#[derive(Debug, StructOpt)]
pub struct CompareResults {
    /// The first results file.
    #[structopt(parse(from_os_str))]
    pub left: PathBuf,

    /// The second results file.
    #[structopt(parse(from_os_str))]
    pub right: PathBuf,

    /// Tolerance for equivalence.
    #[structopt(short = "e", long = "epsilon", default_value = "0.00000001")]
    pub epsilon: f64,
}

/// The `run-tests` subcommand: no arguments, runs the built-in fixtures.
#[derive(Debug, StructOpt)]
pub struct RunTests {}

/// The `compile-measures` subcommand.
#[derive(Debug, StructOpt)]
pub struct CompileMeasures {
    /// One or more FASTA files, each a sequence group.
    #[structopt(parse(from_os_str))]
    pub inputs: Vec<PathBuf>,

    /// Where to write the measured `RunSummary` rows.
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    pub output: PathBuf,

    /// Algorithms to measure; repeat the flag to measure more than one.
    #[structopt(short = "a", long = "algorithm", raw(possible_values = "&AlgorithmTag::variants()"))]
    pub algorithms: Vec<AlgorithmTag>,

    /// Thread-count labels to measure; repeat the flag to measure more
    /// than one. Thread-count is a label only (§4.10, §5).
    #[structopt(short = "t", long = "threads", default_value = "1")]
    pub thread_counts: Vec<usize>,

    /// Tolerance for top-K ordering within each measured run.
    #[structopt(short = "e", long = "epsilon", default_value = "0.00000001")]
    pub epsilon: f64,

    #[structopt(flatten)]
    pub lengths: LengthRange,
}

/// The length-range portion of the configuration, shared by
/// `compile-measures` with `standard`.
#[derive(Debug, StructOpt)]
pub struct LengthRange {
    /// Smallest segment length tried.
    #[structopt(short = "m", long = "min-length", default_value = "1")]
    pub min_length: usize,

    /// Largest segment length tried.
    #[structopt(short = "M", long = "max-length")]
    pub max_length: usize,

    /// Increment between tried lengths.
    #[structopt(short = "s", long = "length-step", default_value = "1")]
    pub length_step: usize,

    /// How many best results to keep per triple.
    #[structopt(short = "k", long = "capacity", default_value = "100")]
    pub capacity: usize,
}
