//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Per-IP rate limiter layer type.
pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a per-IP rate limiter for the create endpoint.
///
/// One token is replenished every `replenish_secs` seconds; a client may
/// burst up to `burst_size` requests. Requests exceeding the limit receive
/// `429 Too Many Requests`.
///
/// Keys are taken from the socket peer address, so the server must be
/// served with `into_make_service_with_connect_info::<SocketAddr>`.
///
/// # Errors
///
/// Returns an error if either value is zero.
pub fn layer(replenish_secs: u64, burst_size: u32) -> Result<RateLimitLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(replenish_secs)
        .burst_size(burst_size)
        .finish()
        .context("Invalid rate limit configuration")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
