// Aggregator test: include tests from tests/rust/* as distinct modules.
// This keeps sources organized while providing a single integration test
// file that Cargo will compile and run.

mod rust_tests {
    pub mod cli_version {
        include!("rust/cli_version.rs");
    }
    pub mod cli_convert {
        include!("rust/cli_convert.rs");
    }
    pub mod cli_time {
        include!("rust/cli_time.rs");
    }
    pub mod cli_config {
        include!("rust/cli_config.rs");
    }
}

// Re-export tests so the test runner finds them at crate root.
pub use rust_tests::*;
