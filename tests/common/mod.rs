//! Common test utilities for integration tests.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod test_repo;

pub use test_repo::TestRepo;

/// Whether a `jj` binary can be run
pub fn jj_available() -> bool {
    std::process::Command::new("jj")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

/// Return early from a test when jj is not installed
macro_rules! skip_if_no_jj {
    () => {
        if !common::jj_available() {
            eprintln!("jj not found in PATH, skipping");
            return;
        }
    };
}
