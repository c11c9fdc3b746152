//! End-to-end tests that run the `td` binary

mod cli_basic;
