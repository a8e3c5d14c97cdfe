use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::plan::ServiceType;

/// Itemization of a fare, kept alongside the total so callers can display
/// and audit the minimum-fare clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareBreakdown {
    pub base: f64,
    pub distance_charge: f64,
    pub minimum_applied: bool,
}

/// Snapshot of a fare computation. Copies the plan values it was computed
/// from; a later plan change does not affect an existing quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareQuote {
    pub service_type: ServiceType,
    pub distance_km: f64,
    pub base_fare: f64,
    pub total_fare: f64,
    pub surge_multiplier: f64,
    pub is_peak_hour: bool,
    pub breakdown: FareBreakdown,
}

/// A quote handed out to a client, bound to a signed token that order
/// creation verifies before charging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedQuote {
    pub id: Uuid,
    pub quote: FareQuote,
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
