//! Hostname existence check.

use async_trait::async_trait;

/// Decides whether a hostname exists.
///
/// The only gate new URLs pass before they are stored. Implementations must
/// treat every failure, including malformed input, as "does not exist".
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::DnsResolver`] - system resolver lookup
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Returns `true` if `hostname` resolves to at least one address.
    async fn resolves(&self, hostname: &str) -> bool;
}
