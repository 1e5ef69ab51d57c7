use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use signalfx_common::{AlertMutingRule, CreateUpdateAlertMutingRuleRequest};

use super::AppState;

const CREATOR: &str = "mock-api";

/// The platform refuses to schedule a muting window in the past and silently
/// moves its start to the time of the write.
fn effective_start(requested_ms: i64, now_ms: i64) -> i64 {
    requested_ms.max(now_ms)
}

fn validate(body: &CreateUpdateAlertMutingRuleRequest, start_ms: i64) -> Result<(), StatusCode> {
    if body.stop_time != 0 && body.stop_time <= start_ms {
        return Err(StatusCode::BAD_REQUEST);
    }
    if body
        .filters
        .iter()
        .any(|f| f.property.is_empty() || f.property_value.is_empty())
    {
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(())
}

pub async fn list_rules(State(state): State<AppState>) -> Json<Vec<AlertMutingRule>> {
    Json(state.rules.list())
}

pub async fn get_rule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AlertMutingRule>, StatusCode> {
    state.rules.get(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

pub async fn create_rule(
    State(state): State<AppState>,
    Json(body): Json<CreateUpdateAlertMutingRuleRequest>,
) -> Result<Json<AlertMutingRule>, StatusCode> {
    let now_ms = state.clock.now_secs() * 1000;
    let start_time = effective_start(body.start_time, now_ms);
    validate(&body, start_time)?;

    let rule = AlertMutingRule {
        id: uuid::Uuid::new_v4().simple().to_string(),
        description: body.description,
        filters: body.filters,
        start_time,
        stop_time: body.stop_time,
        created: Some(now_ms),
        creator: Some(CREATOR.into()),
        last_updated: Some(now_ms),
        last_updated_by: Some(CREATOR.into()),
    };

    tracing::debug!(id = %rule.id, start_time, requested = body.start_time, "created muting rule");
    state.rules.insert(rule.clone());
    Ok(Json(rule))
}

pub async fn update_rule(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<CreateUpdateAlertMutingRuleRequest>,
) -> Result<Json<AlertMutingRule>, StatusCode> {
    let existing = state.rules.get(&id).ok_or(StatusCode::NOT_FOUND)?;

    let now_ms = state.clock.now_secs() * 1000;
    let start_time = effective_start(body.start_time, now_ms);
    validate(&body, start_time)?;

    let updated = AlertMutingRule {
        id: existing.id,
        description: body.description,
        filters: body.filters,
        start_time,
        stop_time: body.stop_time,
        created: existing.created,
        creator: existing.creator,
        last_updated: Some(now_ms),
        last_updated_by: Some(CREATOR.into()),
    };

    if !state.rules.update(updated.clone()) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(updated))
}

pub async fn delete_rule(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    if state.rules.delete(&id) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
