//! HTTP implementation of the feature gateway.

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::registry::error::RegistryError;
use crate::registry::models::{ApiFeature, Feature};

use super::{DeleteFeatureResponse, FeatureGateway, ListFeaturesParams};

/// Gateway that talks to the registry over HTTP with JSON payloads.
#[derive(Debug)]
pub struct HttpFeatureGateway {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpFeatureGateway {
    /// Creates a gateway for the given registry base URL.
    ///
    /// `token`, when present, is sent as a bearer credential on every call.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidUrl`] when the base URL cannot be
    /// parsed or cannot serve as a base for endpoint paths.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, RegistryError> {
        let parsed = Url::parse(base_url)
            .map_err(|error| RegistryError::InvalidUrl(error.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(RegistryError::InvalidUrl(format!(
                "{base_url} cannot be used as a base URL"
            )));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: parsed,
            token,
        })
    }

    /// Joins an endpoint path onto the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, RegistryError> {
        self.base_url
            .join(path)
            .map_err(|error| RegistryError::InvalidUrl(error.to_string()))
    }
}

/// Maps a reqwest transport error into the registry error taxonomy.
fn map_transport_error(operation: &str, error: &reqwest::Error) -> RegistryError {
    if error.is_decode() {
        RegistryError::Decode {
            message: format!("{operation} failed: {error}"),
        }
    } else {
        RegistryError::Network {
            message: format!("{operation} failed: {error}"),
        }
    }
}

#[async_trait]
impl FeatureGateway for HttpFeatureGateway {
    async fn list_features(
        &self,
        params: &ListFeaturesParams,
    ) -> Result<Vec<Feature>, RegistryError> {
        let mut url = self.endpoint("features")?;
        url.query_pairs_mut()
            .append_pair("page", &params.page.to_string())
            .append_pair("limit", &params.per_page.to_string())
            .append_pair("keyword", &params.keyword);

        debug!(page = params.page, keyword = %params.keyword, "listing features");

        let mut request = self.client.get(url);
        if let Some(token) = self.token.as_deref() {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .await
            .map_err(|error| map_transport_error("list features", &error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RegistryError::Api {
                message: format!("list features returned {status}: {body}"),
            });
        }

        let features: Vec<ApiFeature> = response
            .json()
            .await
            .map_err(|error| map_transport_error("list features", &error))?;
        Ok(features.into_iter().map(Into::into).collect())
    }

    async fn delete_feature(&self, id: &str) -> Result<DeleteFeatureResponse, RegistryError> {
        let url = self.endpoint(&format!("features/{id}"))?;

        debug!(id, "deleting feature");

        let mut request = self.client.delete(url);
        if let Some(token) = self.token.as_deref() {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .await
            .map_err(|error| map_transport_error("delete feature", &error))?;

        Ok(DeleteFeatureResponse {
            status: response.status(),
        })
    }
}
