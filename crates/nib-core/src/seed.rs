//! Seed strings.

use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Total seed length in hex digits.
const SEED_DIGITS: usize = 64;

/// Digits that feed the generator: four words of eight digits each.
const WORD_DIGITS: usize = 8;

/// Errors produced when parsing a seed string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("seed must be 64 hex digits, got {0}")]
    Length(usize),

    #[error("seed contains non-hex character '{0}'")]
    Digit(char),
}

/// A 64-hex-digit seed.
///
/// Canonically rendered with a `0x` prefix (`0x3f9a...`). Only the first
/// 32 digits feed the four generator words; the rest are carried for
/// identity and file naming.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Seed(String);

impl Seed {
    /// Parse a seed, accepting an optional `0x` prefix.
    pub fn parse(input: &str) -> Result<Self, SeedError> {
        let digits = input.strip_prefix("0x").unwrap_or(input);
        if digits.len() != SEED_DIGITS {
            return Err(SeedError::Length(digits.len()));
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(SeedError::Digit(bad));
        }
        Ok(Self(digits.to_ascii_lowercase()))
    }

    /// Generate a fresh random seed.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        const CHARS: &[u8] = b"0123456789abcdef";
        let digits = (0..SEED_DIGITS)
            .map(|_| CHARS[rng.gen_range(0..CHARS.len())] as char)
            .collect();
        Self(digits)
    }

    /// The raw digits, without the `0x` prefix.
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The four 32-bit generator words, from the first 32 digits.
    pub fn state(&self) -> [u32; 4] {
        let mut words = [0u32; 4];
        for (i, word) in words.iter_mut().enumerate() {
            let chunk = &self.0[i * WORD_DIGITS..(i + 1) * WORD_DIGITS];
            // Digits are validated at construction; a parse failure here
            // cannot happen, but zero keeps this infallible.
            *word = u32::from_str_radix(chunk, 16).unwrap_or(0);
        }
        words
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.0)
    }
}

impl FromStr for Seed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
