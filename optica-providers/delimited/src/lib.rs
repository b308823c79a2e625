//! Delimited text provider: loads a numeric matrix, one point per line, into
//! a validated [`optica_core::DataSource`].

mod errors;
mod options;
mod parse;
mod provider;

pub use errors::DelimitedMatrixError;
pub use options::{Delimiter, ParseOptions, Transform};
pub use provider::DelimitedMatrixProvider;

#[cfg(test)]
mod tests;
