//! Tracing and logging setup shared by storefront binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use tracing::LogFormat;

/// Initialize process-wide tracing with the format chosen by
/// `TARY_LOG_FORMAT` (`json` by default, `pretty` for local work).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::from_env());
}
