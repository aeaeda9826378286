//! The configuration recognized by the core (spec §6).

use std::fmt;

use crate::scoring::AlgorithmTag;
use crate::segment::validate_length_range;
use crate::errors::Result;

/// A validated configuration. Constructed only via `Config::new`, which
/// enforces every precondition up front (§7 InvalidConfig).
#[derive(Debug, Clone)]
pub struct Config {
    pub min_length: usize,
    pub max_length: usize,
    pub length_step: usize,
    pub capacity: usize,
    pub epsilon: f64,
    pub algorithm: AlgorithmTag,
}

impl Config {
    pub fn new(
        min_length: usize,
        max_length: usize,
        length_step: usize,
        capacity: usize,
        epsilon: f64,
        algorithm: AlgorithmTag,
    ) -> Result<Config> {
        validate_length_range(min_length, max_length, length_step)?;
        Ok(Config {
            min_length,
            max_length,
            length_step,
            capacity,
            epsilon,
            algorithm,
        })
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "min_length:  {}", self.min_length)?;
        writeln!(f, "max_length:  {}", self.max_length)?;
        writeln!(f, "length_step: {}", self.length_step)?;
        writeln!(f, "capacity:    {}", self.capacity)?;
        writeln!(f, "epsilon:     {}", self.epsilon)?;
        write!(f, "algorithm:   {}", self.algorithm)
    }
}
