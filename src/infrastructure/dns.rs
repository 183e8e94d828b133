//! DNS-backed hostname resolver.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::resolver::HostResolver;

/// Resolves hostnames through the system resolver.
///
/// A lookup that errors, returns no addresses, or exceeds the timeout counts
/// as "does not exist". Only name resolution is checked, never HTTP
/// reachability.
#[derive(Debug, Clone)]
pub struct DnsResolver {
    timeout: Duration,
}

impl DnsResolver {
    /// Creates a resolver that gives up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl HostResolver for DnsResolver {
    async fn resolves(&self, hostname: &str) -> bool {
        if hostname.is_empty() {
            return false;
        }

        match tokio::time::timeout(self.timeout, tokio::net::lookup_host((hostname, 0))).await {
            Ok(Ok(mut addrs)) => addrs.next().is_some(),
            Ok(Err(e)) => {
                debug!(hostname, error = %e, "DNS lookup failed");
                false
            }
            Err(_) => {
                warn!(hostname, timeout_ms = self.timeout.as_millis() as u64, "DNS lookup timed out");
                false
            }
        }
    }
}
