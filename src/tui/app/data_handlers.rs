//! Fetch and delete handlers for the feature listing.
//!
//! These handlers implement the correctness core: every issued fetch carries
//! a monotonically increasing token, and only the completion matching the
//! latest token is applied. `loading` is true from the moment a request is
//! issued until its non-discarded completion lands.

use std::any::Any;

use bubbletea_rs::Cmd;
use http::StatusCode;
use tracing::debug;

use crate::registry::gateway::ListFeaturesParams;
use crate::registry::models::Feature;
use crate::registry::query::PAGE_SIZE;
use crate::tui::messages::AppMsg;
use crate::tui::state::Notice;

use super::{FeatureListApp, InputMode};

impl FeatureListApp {
    /// Dispatches fetch and delete messages to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::RefreshRequested => self.issue_refresh(),
            AppMsg::FetchComplete { token, features } => {
                self.handle_fetch_complete(*token, features)
            }
            AppMsg::FetchFailed { token, message } => self.handle_fetch_failed(*token, message),
            AppMsg::DeleteRequested => self.handle_delete_requested(),
            AppMsg::DeleteConfirmed => self.handle_delete_confirmed(),
            AppMsg::DeleteDeclined => self.handle_delete_declined(),
            AppMsg::DeleteFinished { id, status } => self.handle_delete_finished(id, *status),
            _ => {
                debug_assert!(false, "non-data message routed to handle_data_msg");
                None
            }
        }
    }

    /// Maps the current query to one outbound fetch.
    ///
    /// Increments the request token, brackets `loading`, and returns the
    /// command performing the call. The completion carries the token so
    /// stale responses can be discarded on arrival.
    pub(super) fn issue_refresh(&mut self) -> Option<Cmd> {
        self.request_seq = self.request_seq.wrapping_add(1);
        let token = self.request_seq;
        self.loading = true;

        // TODO: thread `self.query.scope` into the params once the registry
        // API grows an owner filter; today the endpoint only accepts page,
        // limit, and keyword, so both tabs fetch the same data.
        let params = ListFeaturesParams {
            page: self.query.page,
            per_page: PAGE_SIZE,
            keyword: self.query.keyword.clone(),
        };

        Some(Box::pin(async move {
            match crate::tui::fetch_features(&params).await {
                Ok(features) => {
                    Some(Box::new(AppMsg::FetchComplete { token, features }) as Box<dyn Any + Send>)
                }
                Err(error) => Some(Box::new(AppMsg::FetchFailed {
                    token,
                    message: error.to_string(),
                }) as Box<dyn Any + Send>),
            }
        }))
    }

    /// Applies a completed fetch, unless a newer request has been issued.
    fn handle_fetch_complete(&mut self, token: u64, features: &[Feature]) -> Option<Cmd> {
        if token != self.request_seq {
            debug!(token, latest = self.request_seq, "discarding stale fetch");
            return None;
        }
        self.rows = Some(features.to_vec());
        self.loading = false;
        self.clamp_cursor();
        None
    }

    /// Handles a failed fetch: the loading flag is cleared and an error
    /// notice surfaced, but only for the latest issued request. Stale
    /// failures are discarded like stale successes.
    fn handle_fetch_failed(&mut self, token: u64, message: &str) -> Option<Cmd> {
        if token != self.request_seq {
            debug!(token, latest = self.request_seq, "discarding stale failure");
            return None;
        }
        self.loading = false;
        self.notice = Some(Notice::error(format!("Failed to load features: {message}")));
        None
    }

    /// Opens the confirmation prompt for the selected feature.
    ///
    /// Row actions are suppressed while a request is outstanding.
    fn handle_delete_requested(&mut self) -> Option<Cmd> {
        if self.loading {
            return None;
        }
        if let Some(feature) = self.selected_feature() {
            self.pending_delete = Some(feature.clone());
            self.mode = InputMode::ConfirmDelete;
        }
        None
    }

    /// Issues the delete call for the confirmed feature.
    ///
    /// Transport failures and non-200 statuses are deliberately collapsed
    /// into the same completion message; the registry UI this replaces only
    /// ever branched on status 200.
    fn handle_delete_confirmed(&mut self) -> Option<Cmd> {
        self.mode = InputMode::Browse;
        let feature = self.pending_delete.take()?;
        let id = feature.id;
        self.loading = true;

        Some(Box::pin(async move {
            let status = match crate::tui::delete_feature(&id).await {
                Ok(response) => Some(response.status),
                Err(error) => {
                    debug!(id, %error, "delete transport failure");
                    None
                }
            };
            Some(Box::new(AppMsg::DeleteFinished { id, status }) as Box<dyn Any + Send>)
        }))
    }

    /// Dismisses the confirmation prompt without any state change.
    fn handle_delete_declined(&mut self) -> Option<Cmd> {
        self.pending_delete = None;
        self.mode = InputMode::Browse;
        None
    }

    /// Surfaces the delete outcome and unconditionally resynchronises.
    ///
    /// Status 200 is the sole success signal; everything else, including
    /// transport failure, lands in the error branch. The chained refresh
    /// runs either way so the table self-heals from the server's view.
    fn handle_delete_finished(&mut self, id: &str, status: Option<StatusCode>) -> Option<Cmd> {
        self.notice = if status == Some(StatusCode::OK) {
            Some(Notice::success(format!("Feature {id} deleted")))
        } else {
            Some(Notice::error(format!("Failed to delete feature {id}")))
        };
        self.issue_refresh()
    }
}
