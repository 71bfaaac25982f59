#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Data-driven query fixtures
///
/// Cases live in `fixtures/query_cases.json`; each one is parsed, checked
/// pair by pair, then rebuilt and compared byte for byte.
#[path = "fixtures/fixture_loader.rs"]
mod fixture_loader;

#[path = "fixtures/fixture_runner.rs"]
mod fixture_runner;
