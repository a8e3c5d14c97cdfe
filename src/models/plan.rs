use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Food,
    Grocery,
    Parcel,
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceType::Food => "food",
            ServiceType::Grocery => "grocery",
            ServiceType::Parcel => "parcel",
        };
        f.write_str(name)
    }
}

impl FromStr for ServiceType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "food" => Ok(ServiceType::Food),
            "grocery" => Ok(ServiceType::Grocery),
            "parcel" => Ok(ServiceType::Parcel),
            other => Err(AppError::InvalidInput(format!(
                "unknown service type: {other}"
            ))),
        }
    }
}

/// Pricing configuration for one service category. Monetary fields are
/// currency-unit-agnostic; `base_distance_km` is included in the base fare.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPlan {
    pub service_type: ServiceType,
    pub base_fare: f64,
    pub base_distance_km: f64,
    pub per_km_rate: f64,
    pub minimum_fare: f64,
    pub updated_at: DateTime<Utc>,
}
