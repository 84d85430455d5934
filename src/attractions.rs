//! Random attraction sampling
//!
//! Draws a fresh uniform sample from a city's attraction pool on every call.
//! Sampling is an explicit step of the lookup workflow, decoupled from
//! rendering: the result is stored in the session and re-rendered from there.

use rand::seq::SliceRandom;
use tracing::debug;

use crate::registry::CityRegistry;

/// Number of attractions shown per lookup
pub const SAMPLE_SIZE: usize = 3;

/// Placeholder shown when a city has no attraction data
pub const NO_DATA_PLACEHOLDER: &str = "No data available";

/// Draw a random sample of attractions for a normalized city key
///
/// Returns `min(SAMPLE_SIZE, pool)` distinct entries in randomized order.
/// Repeated calls are independent draws. An unknown key yields a
/// single-element placeholder list rather than an error.
#[must_use]
pub fn sample(city_key: &str, registry: &CityRegistry) -> Vec<String> {
    let Some(pool) = registry.attractions(city_key) else {
        debug!("No attraction data for '{city_key}'");
        return vec![NO_DATA_PLACEHOLDER.to_string()];
    };

    let mut candidates = pool.to_vec();
    let take = SAMPLE_SIZE.min(candidates.len());
    let (picked, _) = candidates.partial_shuffle(&mut rand::rng(), take);
    picked.to_vec()
}
