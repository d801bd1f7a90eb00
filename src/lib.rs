//! Shared benchmark utilities for the mask-functions workspace.

pub mod bench_support;
