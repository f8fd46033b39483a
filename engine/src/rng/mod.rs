//! Deterministic random number generation
//!
//! All randomness in the engine MUST go through this module. Generators are
//! derived per draw context from a process-wide master key, so one entity's
//! draw sequence is unaffected by another's and no shared mutable generator
//! exists anywhere.
//!
//! # Determinism
//!
//! Same master key + same key tuple → same sequence of random numbers.
//! Golden fixtures freeze literal output sequences, so the arithmetic here
//! is bit-exact: 64-bit wraparound, rotation, and rejection-sampling bounds
//! all matter.
//!
//! Not suitable for secrets: the keyed hash is used for stream separation,
//! not for cryptographic security.

mod algorithm_m;
mod xoroshiro;

pub use algorithm_m::{generate_golden_intn, generate_golden_uint64, AlgorithmM};
pub use xoroshiro::{RngFactory, ScopedRng};
