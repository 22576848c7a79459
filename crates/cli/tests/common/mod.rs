//! Shared test utilities for confstruct integration tests.
//!
//! Invariants / Assumptions:
//! - Every variable used by the tests is cleared so host values never leak in.

use assert_cmd::Command;

/// Variables the integration tests read; cleared before each run.
const TEST_VARS: &[&str] = &[
    "CONFSTRUCT_PREFIX",
    "CONFSTRUCT_ENV_FILE",
    "HOST",
    "PORT",
    "TAGS",
    "DEBUG",
    "MOTD",
    "APP_HOST",
    "APP_PORT",
];

/// Returns a hermetic `confstruct` command for integration testing.
pub fn confstruct_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("confstruct");
    for var in TEST_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}
