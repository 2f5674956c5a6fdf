//! Tracing/logging setup shared by the stockroom binaries.

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use self::tracing::LogFormat;

/// Initialize process-wide logging, filtered by `RUST_LOG` (default `warn`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(format: LogFormat) {
    self::tracing::init(format, self::tracing::DEFAULT_DIRECTIVE);
}
