use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::plan::ServiceType;
use crate::models::quote::IssuedQuote;
use crate::pricing::calculator::compute_fare;
use crate::pricing::token::Verification;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quotes", post(create_quote))
        .route("/quotes/verify", post(verify_quote))
        .route("/quotes/:id", get(get_quote))
}

#[derive(Deserialize)]
pub struct QuoteRequest {
    pub service_type: ServiceType,
    pub distance_km: f64,
}

#[derive(Deserialize)]
pub struct VerifyQuoteRequest {
    pub token: String,
    pub total_fare: f64,
}

async fn create_quote(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<QuoteRequest>,
) -> Result<Json<IssuedQuote>, AppError> {
    let quote = match compute_fare(&state.plans, payload.service_type, payload.distance_km) {
        Ok(quote) => {
            state
                .metrics
                .quotes_total
                .with_label_values(&["success"])
                .inc();
            quote
        }
        Err(err) => {
            state
                .metrics
                .quotes_total
                .with_label_values(&["rejected"])
                .inc();
            return Err(err);
        }
    };

    state
        .metrics
        .quote_fare_amount
        .with_label_values(&[&quote.service_type.to_string()])
        .observe(quote.total_fare);

    let id = Uuid::new_v4();
    let (token, expires_at) = state.signer.issue(id, quote.service_type, quote.total_fare);

    let issued = IssuedQuote {
        id,
        quote,
        token,
        created_at: Utc::now(),
        expires_at,
    };

    state.quotes.insert(id, issued.clone());
    let _ = state.quote_events_tx.send(issued.clone());

    info!(
        quote_id = %issued.id,
        service_type = %issued.quote.service_type,
        total_fare = issued.quote.total_fare,
        "fare quote issued"
    );

    Ok(Json(issued))
}

async fn get_quote(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<IssuedQuote>, AppError> {
    let issued = state
        .quotes
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("quote {} not found", id)))?;

    Ok(Json(issued.value().clone()))
}

async fn verify_quote(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<VerifyQuoteRequest>,
) -> Result<Json<Verification>, AppError> {
    let verification = state.signer.verify(&payload.token, payload.total_fare)?;

    let outcome = if verification.valid { "valid" } else { "rejected" };
    state
        .metrics
        .verifications_total
        .with_label_values(&[outcome])
        .inc();

    if !verification.valid {
        info!(reason = ?verification.reason, "quote verification rejected");
    }

    Ok(Json(verification))
}
