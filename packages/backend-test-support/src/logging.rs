//! Logging for integration test binaries.
//!
//! Each `tests/*.rs` binary calls [`init`] from a `ctor` hook in `tests/common`.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Default level when neither `TEST_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_TEST_FILTER: &str = "warn";

/// Install a test-writer subscriber once per process. Safe to call repeatedly.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then [`DEFAULT_TEST_FILTER`].
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

        // Another subscriber may already be installed by the test itself.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(true)
            .try_init();
    });
}
