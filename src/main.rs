//! The `tandupscan` binary: parses `args::Opt`, initializes logging, and
//! dispatches to the matching `commands::*` function.

use std::process;

use structopt::StructOpt;

use tandupscan::args::{Mode, Opt};
use tandupscan::commands;
use tandupscan::errors::Result;

fn main() {
    env_logger::init();

    let opt = Opt::from_args();
    if let Err(e) = run(opt) {
        eprintln!("error: {}", e);
        for cause in e.iter().skip(1) {
            eprintln!("caused by: {}", cause);
        }
        process::exit(1);
    }
}

fn run(opt: Opt) -> Result<()> {
    match opt.mode {
        Some(Mode::GenerateReferences(args)) => commands::generate_references::generate_references(&args),
        Some(Mode::CompareResults(args)) => commands::compare_results::compare_results(&args),
        Some(Mode::RunTests(args)) => commands::run_tests::run_tests(&args),
        Some(Mode::CompileMeasures(args)) => commands::compile_measures::compile_measures(&args),
        None => commands::standard::standard(&opt.standard),
    }
}
