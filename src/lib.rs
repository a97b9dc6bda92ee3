#![forbid(unsafe_code)]
//! plaintree — list directory contents as an indented tree.

pub mod cli;
pub mod error;
pub mod render;
pub mod tree;
