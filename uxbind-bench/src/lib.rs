//! # uxbind Bench
//!
//! Synthetic documents for benchmarking the generation pipeline.

pub mod fixtures;
