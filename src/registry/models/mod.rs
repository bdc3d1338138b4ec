//! Data models for feature records served by the registry.
//!
//! The `ApiFeature` type is an internal deserialisation target that converts
//! into the public `Feature` domain type, keeping the wire shape out of the
//! rest of the crate.

use serde::Deserialize;

#[cfg(feature = "test-support")]
pub mod test_support;

/// A named, server-managed record the UI lists, edits, and deletes.
///
/// Identity is `id`, which is stable and server-assigned. Features are
/// immutable from the client's perspective except via delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feature {
    /// Server-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Fully qualified name, used to build the detail route.
    pub qualified_name: String,
    /// Login of the owning user, when the registry reports one.
    pub owner: Option<String>,
    /// Lifecycle status (e.g. active, deprecated).
    pub status: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}

impl Feature {
    /// Returns the detail route for this feature (`/features/{qualified_name}`).
    #[must_use]
    pub fn detail_route(&self) -> String {
        format!("/features/{}", self.qualified_name)
    }
}

/// Wire representation of a feature as returned by the registry API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiFeature {
    id: String,
    name: String,
    qualified_name: String,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl From<ApiFeature> for Feature {
    fn from(api: ApiFeature) -> Self {
        Self {
            id: api.id,
            name: api.name,
            qualified_name: api.qualified_name,
            owner: api.owner,
            status: api.status,
            description: api.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_feature_converts_to_domain_type() {
        let api: ApiFeature = serde_json::from_str(
            r#"{
                "id": "f-1",
                "name": "revenue",
                "qualifiedName": "demo.revenue",
                "owner": "alice"
            }"#,
        )
        .unwrap_or_else(|error| panic!("fixture should deserialise: {error}"));

        let feature = Feature::from(api);
        assert_eq!(feature.id, "f-1");
        assert_eq!(feature.name, "revenue");
        assert_eq!(feature.qualified_name, "demo.revenue");
        assert_eq!(feature.owner.as_deref(), Some("alice"));
        assert_eq!(feature.status, None);
    }

    #[test]
    fn detail_route_uses_qualified_name() {
        let feature = Feature {
            id: "f-1".to_owned(),
            name: "revenue".to_owned(),
            qualified_name: "demo.revenue".to_owned(),
            ..Feature::default()
        };
        assert_eq!(feature.detail_route(), "/features/demo.revenue");
    }
}
