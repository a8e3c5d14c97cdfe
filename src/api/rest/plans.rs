use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;
use crate::models::plan::{PricingPlan, ServiceType};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/plans", post(upsert_plan).get(list_plans))
        .route("/plans/:service_type", get(get_plan).delete(delete_plan))
}

#[derive(Deserialize)]
pub struct UpsertPlanRequest {
    pub service_type: ServiceType,
    pub base_fare: f64,
    pub base_distance_km: f64,
    pub per_km_rate: f64,
    pub minimum_fare: f64,
}

async fn upsert_plan(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpsertPlanRequest>,
) -> Result<Json<PricingPlan>, AppError> {
    let plan = PricingPlan {
        service_type: payload.service_type,
        base_fare: payload.base_fare,
        base_distance_km: payload.base_distance_km,
        per_km_rate: payload.per_km_rate,
        minimum_fare: payload.minimum_fare,
        updated_at: Utc::now(),
    };

    let stored = state.plans.upsert(plan)?;
    state.metrics.plans_configured.set(state.plans.len() as i64);

    info!(service_type = %stored.service_type, "pricing plan upserted");

    Ok(Json(stored))
}

async fn list_plans(State(state): State<Arc<AppState>>) -> Json<Vec<PricingPlan>> {
    Json(state.plans.list())
}

async fn get_plan(
    State(state): State<Arc<AppState>>,
    Path(service_type): Path<ServiceType>,
) -> Result<Json<PricingPlan>, AppError> {
    let plan = state
        .plans
        .get(service_type)
        .ok_or(AppError::PlanNotFound(service_type))?;

    Ok(Json(plan))
}

async fn delete_plan(
    State(state): State<Arc<AppState>>,
    Path(service_type): Path<ServiceType>,
) -> Result<Json<PricingPlan>, AppError> {
    let removed = state
        .plans
        .remove(service_type)
        .ok_or(AppError::PlanNotFound(service_type))?;

    state.metrics.plans_configured.set(state.plans.len() as i64);

    info!(service_type = %service_type, "pricing plan retired");

    Ok(Json(removed))
}
