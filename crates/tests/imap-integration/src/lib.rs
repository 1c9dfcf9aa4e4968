//! Integration test harness crate.

mod greenmail;
mod imap;

pub use greenmail::*;
pub use imap::*;

/// Environment variable opting into the docker-backed tests.
pub const ENABLE_ENV_VAR: &str = "RUN_IMAP_INTEGRATION_TESTS";

/// Whether the docker-backed tests should run; logs a hint when not.
pub fn integration_tests_enabled() -> bool {
    if std::env::var_os(ENABLE_ENV_VAR).is_some() {
        return true;
    }

    eprintln!("skipping IMAP integration tests; set {ENABLE_ENV_VAR}=true to run");

    false
}
