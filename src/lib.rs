#![forbid(unsafe_code)]
//! aidump — copy selected source files into one flat directory and map where they came from.

pub mod cli;
pub mod collect;
pub mod dump;
pub mod error;
pub mod tree;
