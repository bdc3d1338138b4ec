//! Scenario state and harness operations for the feature listing BDD tests.
//!
//! The harness stands in for the bubbletea runtime: it feeds messages into
//! the application model and performs the gateway calls the returned
//! commands would perform, then feeds the completion messages back.

use std::cell::RefCell;
use std::rc::Rc;

use freda::registry::PAGE_SIZE;
use freda::tui::messages::AppMsg;
use freda::{FeatureGateway, FeatureListApp, HttpFeatureGateway, ListFeaturesParams};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::{Value, json};
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Shared runtime wrapper that can be stored in an rstest-bdd Slot.
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub(crate) fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Shared application model wrapper for Slot storage.
#[derive(Clone)]
pub(crate) struct SharedApp(Rc<RefCell<FeatureListApp>>);

impl SharedApp {
    pub(crate) fn new(app: FeatureListApp) -> Self {
        Self(Rc::new(RefCell::new(app)))
    }

    pub(crate) fn with_ref<R>(&self, f: impl FnOnce(&FeatureListApp) -> R) -> R {
        f(&self.0.borrow())
    }

    pub(crate) fn with_mut<R>(&self, f: impl FnOnce(&mut FeatureListApp) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }
}

#[derive(ScenarioState, Default)]
pub(crate) struct ListingState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) app: Slot<SharedApp>,
    pub(crate) refresh_chained: Slot<bool>,
}

/// Ensures the runtime and mock server are initialised.
pub(crate) fn ensure_runtime_and_server(listing_state: &ListingState) -> SharedRuntime {
    if listing_state.runtime.with_ref(|_| ()).is_none() {
        let runtime = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        listing_state.runtime.set(SharedRuntime::new(runtime));
    }

    let shared_runtime = listing_state
        .runtime
        .get()
        .unwrap_or_else(|| panic!("runtime not initialised after set"));

    if listing_state.server.with_ref(|_| ()).is_none() {
        listing_state
            .server
            .set(shared_runtime.block_on(MockServer::start()));
    }

    shared_runtime
}

/// Ensures the application model exists, returning the shared handle.
pub(crate) fn ensure_app(listing_state: &ListingState) -> SharedApp {
    if listing_state.app.with_ref(|_| ()).is_none() {
        listing_state.app.set(SharedApp::new(FeatureListApp::new()));
    }
    listing_state
        .app
        .get()
        .unwrap_or_else(|| panic!("app not initialised after set"))
}

/// Builds a registry listing body with `count` features named after `stem`.
pub(crate) fn feature_page_body(count: u32, stem: &str) -> Value {
    let features: Vec<Value> = (0..count)
        .map(|n| {
            json!({
                "id": format!("f-{}", n + 1),
                "name": format!("{stem}_{n}"),
                "qualifiedName": format!("demo.{stem}_{n}"),
            })
        })
        .collect();
    Value::Array(features)
}

fn gateway(listing_state: &ListingState) -> HttpFeatureGateway {
    let server_url = listing_state
        .server
        .with_ref(MockServer::uri)
        .unwrap_or_else(|| panic!("mock server not initialised"));
    HttpFeatureGateway::new(&server_url, None)
        .unwrap_or_else(|error| panic!("failed to create gateway: {error}"))
}

/// Performs the listing call the latest refresh command would perform and
/// feeds the completion message back into the model.
fn complete_latest_fetch(listing_state: &ListingState, runtime: &SharedRuntime, app: &SharedApp) {
    let (params, token) = app.with_ref(|a| {
        (
            ListFeaturesParams {
                page: a.query().page,
                per_page: PAGE_SIZE,
                keyword: a.query().keyword.clone(),
            },
            a.latest_request_token(),
        )
    });

    let registry = gateway(listing_state);
    let completion = match runtime.block_on(registry.list_features(&params)) {
        Ok(features) => AppMsg::FetchComplete { token, features },
        Err(error) => AppMsg::FetchFailed {
            token,
            message: error.to_string(),
        },
    };
    let _cmd = app.with_mut(|a| a.handle_message(&completion));
}

/// Issues a refresh and completes it against the mock registry.
pub(crate) fn run_refresh(listing_state: &ListingState) {
    let runtime = ensure_runtime_and_server(listing_state);
    let app = ensure_app(listing_state);

    let issued = app.with_mut(|a| a.handle_message(&AppMsg::RefreshRequested));
    assert!(issued.is_some(), "refresh should issue a fetch command");
    complete_latest_fetch(listing_state, &runtime, &app);
}

/// Walks the pagination forward until the query sits on `page`.
pub(crate) fn walk_to_page(listing_state: &ListingState, page: u32) {
    let app = ensure_app(listing_state);
    while app.with_ref(|a| a.query().page) < page {
        let _cmd = app.with_mut(|a| a.handle_message(&AppMsg::NextPage));
    }
}

/// Types and submits a search keyword, completing the resulting fetch.
pub(crate) fn run_search_submit(listing_state: &ListingState, keyword: &str) {
    let runtime = ensure_runtime_and_server(listing_state);
    let app = ensure_app(listing_state);

    let _open = app.with_mut(|a| a.handle_message(&AppMsg::SearchOpened));
    for ch in keyword.chars() {
        let _edit = app.with_mut(|a| a.handle_message(&AppMsg::SearchEdited(ch)));
    }
    let submitted = app.with_mut(|a| a.handle_message(&AppMsg::SearchSubmitted));
    assert!(submitted.is_some(), "submission should issue a fetch");
    complete_latest_fetch(listing_state, &runtime, &app);
}

/// Confirms deletion of the feature with `id`: loads the listing if needed,
/// moves the cursor onto the row, walks the confirmation prompt, performs
/// the delete call, and completes the chained refresh when one is issued.
pub(crate) fn run_delete_confirmed(listing_state: &ListingState, id: &str) {
    let runtime = ensure_runtime_and_server(listing_state);
    let app = ensure_app(listing_state);

    if app.with_ref(|a| a.rows().is_none()) {
        run_refresh(listing_state);
    }

    // Move the cursor onto the target row.
    let row_count = app.with_ref(FeatureListApp::row_count);
    for _ in 0..row_count {
        let on_target =
            app.with_ref(|a| a.selected_feature().is_some_and(|f| f.id == id));
        if on_target {
            break;
        }
        let _cmd = app.with_mut(|a| a.handle_message(&AppMsg::CursorDown));
    }
    assert!(
        app.with_ref(|a| a.selected_feature().is_some_and(|f| f.id == id)),
        "feature {id} should be selectable"
    );

    let _prompt = app.with_mut(|a| a.handle_message(&AppMsg::DeleteRequested));
    let issued = app.with_mut(|a| a.handle_message(&AppMsg::DeleteConfirmed));
    assert!(issued.is_some(), "confirmation should issue the delete call");

    let registry = gateway(listing_state);
    let status = runtime
        .block_on(registry.delete_feature(id))
        .ok()
        .map(|response| response.status);

    let chained = app.with_mut(|a| {
        a.handle_message(&AppMsg::DeleteFinished {
            id: id.to_owned(),
            status,
        })
    });
    listing_state.refresh_chained.set(chained.is_some());

    if chained.is_some() {
        complete_latest_fetch(listing_state, &runtime, &app);
    }
}
