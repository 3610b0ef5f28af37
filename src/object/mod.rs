//! Runtime value model.
//!
//! Only the two placeholder value kinds exist so far; there is no
//! evaluator that produces them yet.

pub mod object;

#[cfg(test)]
mod tests;
