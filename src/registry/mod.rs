//! Feature-registry domain: models, queries, errors, and the HTTP gateway.

pub mod error;
pub mod gateway;
pub mod models;
pub mod query;

pub use error::RegistryError;
pub use gateway::{DeleteFeatureResponse, FeatureGateway, HttpFeatureGateway, ListFeaturesParams};
pub use models::Feature;
pub use query::{DEFAULT_PAGE, FeatureQuery, FeatureScope, PAGE_SIZE};
