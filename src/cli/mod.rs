//! Console entry point and output helpers for the generator binary.
//!
//! Progress and result lines are printed to the terminal; these helpers
//! keep their styling consistent. [`run`] maps a generation pass to the
//! process exit code.

pub mod formatting;
mod run;

#[cfg(test)]
mod tests;

pub use run::run;
