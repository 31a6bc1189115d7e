//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

type RateLimitLayer<K> = GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

fn build_layer<K: KeyExtractor>(
    key_extractor: K,
    per_second: u64,
    burst_size: u32,
) -> RateLimitLayer<K> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(key_extractor)
            .per_second(per_second)
            .burst_size(burst_size)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf)
}

/// Creates a rate limiter for authenticated resource endpoints.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address.
pub fn layer() -> RateLimitLayer<PeerIpKeyExtractor> {
    build_layer(PeerIpKeyExtractor, 2, 100)
}

/// Same limits as [`layer`], with the client IP read from
/// `X-Forwarded-For` / `X-Real-IP` headers.
///
/// Only safe behind a trusted reverse proxy; anywhere else the headers are
/// client-controlled.
pub fn proxied_layer() -> RateLimitLayer<SmartIpKeyExtractor> {
    build_layer(SmartIpKeyExtractor, 2, 100)
}

/// Creates a stricter rate limiter for credential endpoints.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
///
/// Used for registration, login, and token refresh, where throttling slows
/// credential stuffing.
pub fn secure_layer() -> RateLimitLayer<PeerIpKeyExtractor> {
    build_layer(PeerIpKeyExtractor, 1, 10)
}

/// Same limits as [`secure_layer`], with the client IP read from
/// `X-Forwarded-For` / `X-Real-IP` headers.
pub fn proxied_secure_layer() -> RateLimitLayer<SmartIpKeyExtractor> {
    build_layer(SmartIpKeyExtractor, 1, 10)
}
