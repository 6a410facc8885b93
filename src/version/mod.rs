//! Version parsing and ordering
//!
//! A version is an ordered sequence of non-negative integers obtained by
//! splitting a dotted string. Sequences of unequal length are legal inputs
//! to the comparator; no padding is performed before comparison.
//!
//! # Modules
//!
//! - [`parser`]: dotted string -> segment sequence
//! - [`comparator`]: update-availability verdict over two sequences
//! - [`error`]: parse failure type

pub mod comparator;
pub mod error;
pub mod parser;
