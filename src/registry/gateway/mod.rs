//! Gateways for talking to the feature registry.
//!
//! This module provides a trait-based gateway for the registry's query and
//! delete endpoints. The trait-based design enables mocking in tests while
//! the HTTP implementation handles real requests.

mod client;

pub use client::HttpFeatureGateway;

use async_trait::async_trait;
use http::StatusCode;

use crate::registry::error::RegistryError;
use crate::registry::models::Feature;

/// Parameters for a feature listing call.
///
/// The scope tab is deliberately absent: the registry query endpoint only
/// accepts page, page size, and keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFeaturesParams {
    /// Page number to fetch (1-based).
    pub page: u32,
    /// Items per page.
    pub per_page: u8,
    /// Search keyword; an empty string matches everything.
    pub keyword: String,
}

/// Raw outcome of a delete call.
///
/// The registry signals success solely through HTTP status 200; the
/// controller branches on that and nothing else, so the status is carried
/// through undigested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteFeatureResponse {
    /// HTTP status returned by the delete endpoint.
    pub status: StatusCode,
}

impl DeleteFeatureResponse {
    /// Returns true when the registry acknowledged the delete with 200.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }
}

/// Gateway for feature listing and deletion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeatureGateway: Send + Sync {
    /// Fetch one page of features matching the keyword.
    ///
    /// The call is an idempotent, side-effect-free read returning the full
    /// page contents.
    async fn list_features(
        &self,
        params: &ListFeaturesParams,
    ) -> Result<Vec<Feature>, RegistryError>;

    /// Delete a feature by id, returning the raw response status.
    ///
    /// Non-200 statuses are returned in the `Ok` branch; only transport
    /// failures produce an `Err`.
    async fn delete_feature(&self, id: &str) -> Result<DeleteFeatureResponse, RegistryError>;
}
