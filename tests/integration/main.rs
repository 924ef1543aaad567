//! Integration tests for termrender

mod helpers;

mod cli_test;
mod properties_test;
mod scenarios_test;
