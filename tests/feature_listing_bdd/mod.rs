//! Support modules for the feature listing BDD tests.

pub(crate) mod domain;
pub(crate) mod state;

pub(crate) use domain::{FeatureCount, PageNumber, StatusValue};
pub(crate) use state::{
    ListingState, ensure_app, ensure_runtime_and_server, feature_page_body, run_delete_confirmed,
    run_refresh, run_search_submit, walk_to_page,
};
