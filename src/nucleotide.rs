//! The nucleotide alphabet (C1).
//!
//! Six symbols, a plain lowercase abbreviation for each, and a parallel
//! IUPAC-extended table mapping ambiguity codes to the non-empty set of
//! base nucleotides they stand for.

use std::collections::HashMap;

use lazy_static::lazy_static;
use strum_macros::EnumIter;

use crate::errors::{ErrorKind, Result};

/// A single nucleotide symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Nucleotide {
    Adenine,
    Cytosine,
    Guanine,
    Thymine,
    Gap,
    Any,
}

use self::Nucleotide::*;

/// The four DNA bases used as the Sankoff-tree state space (§4.3, §4.5) for
/// columns that contain no Gap.
pub const DNA_BASES: [Nucleotide; 4] = [Adenine, Cytosine, Guanine, Thymine];

/// The state space used for a column that fixes at least one leaf to Gap:
/// Gap joins the four bases as a distinct, fully-costed reconstructable
/// state (spec §9's recommendation for the open question on Gap/Any).
pub const DNA_BASES_WITH_GAP: [Nucleotide; 5] = [Adenine, Cytosine, Guanine, Thymine, Gap];

impl Nucleotide {
    /// The one-character lowercase abbreviation of this symbol.
    pub fn abbreviation(self) -> char {
        match self {
            Adenine => 'a',
            Cytosine => 'c',
            Guanine => 'g',
            Thymine => 't',
            Gap => '_',
            Any => 'n',
        }
    }

    /// The full name of this symbol.
    pub fn name(self) -> &'static str {
        match self {
            Adenine => "adenine",
            Cytosine => "cytosine",
            Guanine => "guanine",
            Thymine => "thymine",
            Gap => "gap",
            Any => "any",
        }
    }

    /// Looks up a plain abbreviation, case-insensitively.
    pub fn from_abbreviation(c: char) -> Result<Nucleotide> {
        match c.to_ascii_lowercase() {
            'a' => Ok(Adenine),
            'c' => Ok(Cytosine),
            'g' => Ok(Guanine),
            't' => Ok(Thymine),
            '_' | '-' => Ok(Gap),
            'n' => Ok(Any),
            _ => Err(ErrorKind::UnknownAbbreviation(c).into()),
        }
    }

    /// A packed 3-bit code, used by the pattern key (C7) to digest a column.
    pub(crate) fn code(self) -> u8 {
        match self {
            Adenine => 0,
            Cytosine => 1,
            Guanine => 2,
            Thymine => 3,
            Gap => 4,
            Any => 5,
        }
    }
}

lazy_static! {
    /// IUPAC ambiguity codes, each mapping to the non-empty set of bases it
    /// represents. The five plain abbreviations and `-` (gap) are included
    /// so that `from_extended_abbreviation` is a strict superset of
    /// `from_abbreviation`.
    static ref IUPAC: HashMap<char, Vec<Nucleotide>> = {
        let mut m = HashMap::new();
        m.insert('a', vec![Adenine]);
        m.insert('c', vec![Cytosine]);
        m.insert('g', vec![Guanine]);
        m.insert('t', vec![Thymine]);
        m.insert('-', vec![Gap]);
        m.insert('_', vec![Gap]);
        m.insert('n', vec![Any]);
        m.insert('r', vec![Adenine, Guanine]);
        m.insert('y', vec![Cytosine, Thymine]);
        m.insert('w', vec![Adenine, Thymine]);
        m.insert('s', vec![Cytosine, Guanine]);
        m.insert('k', vec![Guanine, Thymine]);
        m.insert('m', vec![Adenine, Cytosine]);
        m.insert('b', vec![Cytosine, Guanine, Thymine]);
        m.insert('d', vec![Adenine, Guanine, Thymine]);
        m.insert('h', vec![Adenine, Cytosine, Thymine]);
        m.insert('v', vec![Adenine, Cytosine, Guanine]);
        m
    };
}

/// Looks up an IUPAC-extended abbreviation, case-insensitively, returning
/// the non-empty set of bases it represents.
pub fn from_extended_abbreviation(c: char) -> Result<&'static [Nucleotide]> {
    IUPAC
        .get(&c.to_ascii_lowercase())
        .map(|v| v.as_slice())
        .ok_or_else(|| ErrorKind::UnknownAbbreviation(c).into())
}
