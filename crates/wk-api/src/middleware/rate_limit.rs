//! Per-IP rate limiting via tower_governor.
//!
//! The layer type's generics depend on the key extractor and middleware
//! configuration, so construction goes through a macro instead of a
//! function with a nameable return type.

/// Credential endpoints (register/login): 5 requests per second, burst of 10.
/// Slows down brute-force attempts without bothering real users.
pub const AUTH_RATE_PER_SECOND: u64 = 5;
pub const AUTH_BURST_SIZE: u32 = 10;

/// General authenticated endpoints: 10 requests per second, burst of 20.
pub const GENERAL_RATE_PER_SECOND: u64 = 10;
pub const GENERAL_BURST_SIZE: u32 = 20;

#[macro_export]
macro_rules! make_rate_limit_layer {
    ($per_second:expr, $burst_size:expr) => {{
        let config = tower_governor::governor::GovernorConfigBuilder::default()
            .per_second($per_second)
            .burst_size($burst_size)
            .key_extractor(tower_governor::key_extractor::SmartIpKeyExtractor)
            .finish()
            .expect("invalid rate limiter configuration");
        tower_governor::GovernorLayer::new(config)
    }};
}
