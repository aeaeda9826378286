//! A streaming FASTA reader (spec §6), modeled on `unipept::io::fasta`'s
//! `Reader::new(reader).records()` shape.

use std::io::{self, BufRead, BufReader, Read};

use crate::errors::{ErrorKind, Result};
use crate::nucleotide::{self, Nucleotide};

/// One parsed FASTA record.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub header: String,
    pub sequence: Vec<Nucleotide>,
}

/// Wraps any `Read` and yields `Record`s via `records()`.
pub struct Reader<R> {
    inner: BufReader<R>,
}

impl<R: Read> Reader<R> {
    pub fn new(inner: R) -> Self {
        Reader {
            inner: BufReader::new(inner),
        }
    }

    /// Consumes the reader, yielding one `Result<Record>` per entry.
    pub fn records(self) -> Records<R> {
        Records {
            lines: self.inner.lines().peekable(),
        }
    }
}

/// The iterator returned by `Reader::records`.
pub struct Records<R: Read> {
    lines: std::iter::Peekable<io::Lines<BufReader<R>>>,
}

impl<R: Read> Iterator for Records<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Result<Record>> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };

            if line.trim().is_empty() {
                continue;
            }

            if !line.starts_with('>') {
                return Some(Err(ErrorKind::FastaParseError(line, "missing '>' start marker".into()).into()));
            }

            let header = match line[1..].split_whitespace().next() {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => return Some(Err(ErrorKind::FastaParseError(line, "empty identifier".into()).into())),
            };

            let mut body = String::new();
            while let Some(Ok(next_line)) = self.lines.peek() {
                if next_line.starts_with('>') {
                    break;
                }
                let next_line = self.lines.next().unwrap().unwrap();
                body.extend(next_line.split_whitespace());
            }

            if body.is_empty() {
                return Some(Err(ErrorKind::FastaParseError(line, "empty body".into()).into()));
            }

            let mut sequence = Vec::with_capacity(body.len());
            for c in body.chars() {
                match nucleotide::from_extended_abbreviation(c) {
                    // A single base (or the plain `Gap`/`Any` symbols) maps
                    // directly; a multi-base IUPAC ambiguity code (r, y, w,
                    // s, k, m, b, d, h, v) collapses to `Any`, since no
                    // single one of the bases it could stand for is any
                    // more correct than the others for scoring purposes.
                    Ok(bases) if bases.len() == 1 => sequence.push(bases[0]),
                    Ok(_) => sequence.push(Nucleotide::Any),
                    Err(_) => {
                        return Some(Err(ErrorKind::FastaParseError(line, format!("unknown abbreviation '{}'", c)).into()))
                    }
                }
            }

            return Some(Ok(Record { header, sequence }));
        }
    }
}
