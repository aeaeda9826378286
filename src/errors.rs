//! The error taxonomy of the core and its surrounding CLI.
//!
//! Modeled on `unipept::errors` / `umgap::args`: a single `error_chain!`
//! block gives every fallible operation in this crate the same `Result`
//! alias and a `Display` impl that chains causes together.

use error_chain::error_chain;

error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Csv(::csv::Error);
    }

    errors {
        /// A configuration precondition was violated (§7 InvalidConfig).
        InvalidConfig(msg: String) {
            description("invalid configuration")
            display("invalid configuration: {}", msg)
        }

        /// The input sequences do not form a valid group (§7 SequenceShape).
        SequenceShape(msg: String) {
            description("invalid sequence group")
            display("invalid sequence group: {}", msg)
        }

        /// A character could not be mapped to a nucleotide abbreviation.
        UnknownAbbreviation(c: char) {
            description("unknown nucleotide abbreviation")
            display("unknown nucleotide abbreviation: '{}'", c)
        }

        /// A FASTA record could not be parsed; the offending line is quoted.
        FastaParseError(line: String, reason: String) {
            description("FASTA parse error")
            display("FASTA parse error ({}): {}", reason, line)
        }

        /// A results-stream record could not be parsed.
        ResultsParseError(line: String) {
            description("results parse error")
            display("could not parse results record: {}", line)
        }

        /// An unparseable `--algorithm` value.
        ParseAlgorithmError(value: String) {
            description("unparseable algorithm")
            display("unparseable algorithm: {}", value)
        }

        /// A Sankoff-tree or top-K bookkeeping invariant was violated.
        ///
        /// This is always a bug: the core is total on well-formed input, so
        /// reaching this arm means a DP invariant (§3, §4.3, §4.5) does not
        /// hold.
        InternalInvariantViolation(msg: String) {
            description("internal invariant violation")
            display("internal invariant violation: {}", msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn invalid_config_carries_its_message() {
        let err: Error = ErrorKind::InvalidConfig("min_length must be > 0".into()).into();
        assert_matches!(err.kind(), ErrorKind::InvalidConfig(msg) if msg == "min_length must be > 0");
    }

    #[test]
    fn io_errors_link_through_foreign_links() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert_matches!(err.kind(), ErrorKind::Io(_));
    }
}
