//! A progress-sink interface (spec §9 design note): the core never logs
//! directly. `batch.rs` and `commands::standard::score_sequences` notify a
//! sink of triple/length boundaries; the CLI layer's implementation turns
//! those into `log::debug!` calls.
//!
//! Methods take `&self` rather than `&mut self` so a single sink can be
//! shared across `batch.rs`'s `rayon` worker threads without a lock: both
//! implementations below are stateless, and any future stateful sink can
//! reach for interior mutability (`Mutex`, atomics) the way `rayon`-facing
//! code elsewhere in this crate does.

/// Notified as the batch runner works through (group, algorithm, threads)
/// triples and the length axis within each.
pub trait ProgressSink: Sync {
    /// Called once a (group, algorithm, threads) triple starts.
    fn on_triple_start(&self, _group_index: usize, _algorithm: &str, _threads: usize) {}

    /// Called each time the outer length loop advances to a new length.
    fn on_length_start(&self, _length: usize) {}

    /// Called once a triple finishes, reporting how many results it kept.
    fn on_triple_done(&self, _group_index: usize, _results_kept: usize) {}
}

/// A sink that does nothing; the default when a caller doesn't care.
#[derive(Default)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {}

/// A sink that forwards each event to the `log` crate at debug level.
#[derive(Default)]
pub struct LoggingProgressSink;

impl ProgressSink for LoggingProgressSink {
    fn on_triple_start(&self, group_index: usize, algorithm: &str, threads: usize) {
        log::debug!("starting group {} with algorithm {} on {} thread(s)", group_index, algorithm, threads);
    }

    fn on_length_start(&self, length: usize) {
        log::debug!("scoring length {}", length);
    }

    fn on_triple_done(&self, group_index: usize, results_kept: usize) {
        log::debug!("group {} done, kept {} result(s)", group_index, results_kept);
    }
}
