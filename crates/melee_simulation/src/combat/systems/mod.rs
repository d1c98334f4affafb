//! Combat systems (FixedUpdate).

pub mod melee;

#[cfg(test)]
mod melee_tests;

pub use melee::*;
