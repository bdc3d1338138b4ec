//! Tests for the TUI runtime-context storage helpers.
#![expect(clippy::expect_used, reason = "Tests panic on failure")]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::registry::gateway::MockFeatureGateway;
use crate::registry::models::test_support::minimal_feature;

use super::*;

/// Navigator that records whether it was invoked.
#[derive(Debug, Default)]
struct RecordingNavigator {
    invoked: AtomicBool,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, _route: &str) {
        self.invoked.store(true, Ordering::SeqCst);
    }
}

#[test]
fn runtime_context_wires_gateway_and_navigator_for_commands() {
    let mut gateway = MockFeatureGateway::new();
    gateway
        .expect_list_features()
        .returning(|_| Ok(vec![minimal_feature("f-1", "revenue", "demo.revenue")]));
    gateway.expect_delete_feature().returning(|_| {
        Ok(DeleteFeatureResponse {
            status: http::StatusCode::OK,
        })
    });

    let navigator = Arc::new(RecordingNavigator::default());
    let navigator_handle: Arc<dyn Navigator> = Arc::<RecordingNavigator>::clone(&navigator);
    let was_set = set_runtime_context(Arc::new(gateway), navigator_handle);

    let runtime = tokio::runtime::Runtime::new().expect("runtime should start");
    let params = ListFeaturesParams {
        page: 1,
        per_page: 10,
        keyword: String::new(),
    };
    let fetched = runtime.block_on(fetch_features(&params));
    let deleted = runtime.block_on(delete_feature("f-1"));
    dispatch_navigation("/features/demo.revenue");

    // Another test in this binary may have claimed the process-wide
    // OnceLock first; only assert on our collaborators when we won.
    if was_set {
        let features = fetched.expect("fetch should reach the mock gateway");
        assert_eq!(features.first().map(|f| f.id.as_str()), Some("f-1"));

        let response = deleted.expect("delete should reach the mock gateway");
        assert!(response.is_success());

        assert!(navigator.invoked.load(Ordering::SeqCst));
    }
}
