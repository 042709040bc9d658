//! Property-based tests for matrix algebra.
