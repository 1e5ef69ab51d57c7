use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;

use signalfx_common::time::{Clock, SystemClock};

use super::{alert_muting, health};
use crate::middleware::require_token;
use crate::store::MutingRuleStore;

#[derive(Clone)]
pub struct AppState {
    pub rules: MutingRuleStore,
    pub auth_token: Arc<String>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self::with_clock(auth_token, Arc::new(SystemClock))
    }

    pub fn with_clock(auth_token: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            rules: MutingRuleStore::new(),
            auth_token: Arc::new(auth_token.into()),
            clock,
        }
    }
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/v2/alertmuting",
            get(alert_muting::list_rules).post(alert_muting::create_rule),
        )
        .route(
            "/v2/alertmuting/{id}",
            get(alert_muting::get_rule)
                .put(alert_muting::update_rule)
                .delete(alert_muting::delete_rule),
        )
        .route_layer(from_fn_with_state(state.clone(), require_token));

    Router::new()
        .route("/healthz", get(health::healthz))
        .merge(api)
        .with_state(state)
}
