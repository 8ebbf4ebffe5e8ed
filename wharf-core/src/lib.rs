//! Core utilities for the wharf binding generator.
//!
//! This crate provides the fundamental building blocks shared by the
//! generator crates: string helpers and generated-file plumbing.

mod file;
mod utils;

pub use file::{SourceFile, write_file};
pub use utils::{capitalize, is_quoted};
