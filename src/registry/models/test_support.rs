//! Test helpers for constructing `Feature` fixtures.
//!
//! These builders reduce boilerplate in unit and behavioural tests and keep
//! fixture shapes consistent across test modules.

use super::Feature;

/// Constructs a minimal `Feature` with only id, name, and qualified name set.
///
/// All other fields are `None`.
///
/// # Examples
///
/// ```
/// use freda::registry::models::test_support::minimal_feature;
///
/// let feature = minimal_feature("f-1", "revenue", "demo.revenue");
/// assert_eq!(feature.id, "f-1");
/// assert_eq!(feature.qualified_name, "demo.revenue");
/// ```
#[must_use]
pub fn minimal_feature(id: &str, name: &str, qualified_name: &str) -> Feature {
    Feature {
        id: id.to_owned(),
        name: name.to_owned(),
        qualified_name: qualified_name.to_owned(),
        ..Feature::default()
    }
}

/// Creates a `Feature` with only a numeric suffix; name and qualified name
/// are derived from it.
///
/// The id becomes `f-{n}`, the name `feature_{n}`, and the qualified name
/// `demo.feature_{n}`.
#[must_use]
pub fn feature_with_index(n: u32) -> Feature {
    minimal_feature(
        &format!("f-{n}"),
        &format!("feature_{n}"),
        &format!("demo.feature_{n}"),
    )
}
