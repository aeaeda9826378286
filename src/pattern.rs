//! The pattern key (C7): a hashable, equatable digest of a column's
//! ordered leaf-state vector. Two patterns are equal iff the underlying
//! vectors are elementwise equal (spec §4.7).
//!
//! Each `Nucleotide` packs into 3 bits, so up to 21 leaves (2K <= 21, i.e.
//! K <= 10) fit in a `u64`; longer columns fall back to an owned `Vec`.

use crate::nucleotide::Nucleotide;

const BITS_PER_SYMBOL: u32 = 3;
const MAX_PACKED_SYMBOLS: usize = 64 / BITS_PER_SYMBOL as usize;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    Packed(u64),
    Long(Vec<Nucleotide>),
}

impl Pattern {
    /// Builds the pattern key for an ordered column of states.
    pub fn from_states(states: &[Nucleotide]) -> Pattern {
        if states.len() <= MAX_PACKED_SYMBOLS {
            let mut packed: u64 = 0;
            for &s in states {
                packed = (packed << BITS_PER_SYMBOL) | u64::from(s.code());
            }
            Pattern::Packed(packed)
        } else {
            Pattern::Long(states.to_vec())
        }
    }
}
