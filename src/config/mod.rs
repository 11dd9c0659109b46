//! Input and output locations for documentation generation.
//!
//! The generator has no configuration file of its own; its only settings
//! are the three fixed paths, passed explicitly to the driver.

mod paths;

#[cfg(test)]
mod tests;

pub use paths::DocPaths;
