//! Unit tests for delimited parsing.
