//! Subcommand handlers

pub mod crop;
pub mod demo;
