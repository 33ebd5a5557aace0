//! Shared tracing setup for the service binaries.

/// Initialize process-wide logging for `service`.
///
/// Safe to call multiple times; later calls are no-ops.
pub fn init(service: &'static str) {
    tracing::init(service);
}

/// Subscriber construction (filters, output format).
pub mod tracing;
