//! Failure causes for catalog requests.

use thiserror::Error;

/// Why a catalog fetch produced no usable records.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never got a response (DNS, connect, timeout, body read).
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: wreq::Error,
    },

    /// The catalog answered with a non-2xx status.
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The body was not the expected JSON array.
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Returns true for transport-level failures, including bad statuses.
    pub fn is_network(&self) -> bool {
        matches!(self, CatalogError::Network { .. } | CatalogError::Status { .. })
    }

    /// Returns true when the response arrived but could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, CatalogError::Decode { .. })
    }
}
