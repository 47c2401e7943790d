//! # nib-core - Deterministic randomness for nib
//!
//! The foundation of reproducible sketches:
//!
//! - [`Seed`]: a 64-hex-digit seed string, the shareable identity of a render
//! - [`Xorshift`]: a seeded xorshift128 generator, bit-exact for a given
//!   seed and call sequence
//! - [`math`]: small analog helpers (`lerp`, `linspace`, `remap`, ...)
//!
//! Everything a sketch draws flows through [`Xorshift`]; the only
//! non-deterministic entry point is [`Seed::generate`].

pub mod math;
mod rng;
mod seed;

pub use rng::Xorshift;
pub use seed::{Seed, SeedError};
