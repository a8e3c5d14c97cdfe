use crate::error::AppError;
use crate::models::plan::{PricingPlan, ServiceType};
use crate::models::quote::{FareBreakdown, FareQuote};
use crate::pricing::store::PlanStore;

/// Surge pricing is not live. The multiplier stays in the formula so that
/// enabling it later does not change the shape of the computation.
pub const SURGE_MULTIPLIER: f64 = 1.0;

/// Quote a fare for a trip. Fails with `InvalidInput` on a negative or
/// non-finite distance and with `PlanNotFound` when the category has no
/// active plan; a missing plan is never substituted with a default.
pub fn compute_fare(
    plans: &PlanStore,
    service_type: ServiceType,
    distance_km: f64,
) -> Result<FareQuote, AppError> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(AppError::InvalidInput(format!(
            "distance_km must be a non-negative number, got {distance_km}"
        )));
    }

    let plan = plans
        .get(service_type)
        .ok_or(AppError::PlanNotFound(service_type))?;

    let (total_fare, breakdown) = quote_fare(&plan, distance_km);

    Ok(FareQuote {
        service_type,
        distance_km,
        base_fare: plan.base_fare,
        total_fare,
        surge_multiplier: SURGE_MULTIPLIER,
        is_peak_hour: false,
        breakdown,
    })
}

/// Fare formula. The order of operations is fixed: distance charge, surge,
/// minimum-fare clamp, then a single ceiling round to the next multiple of
/// 10 currency units.
pub fn quote_fare(plan: &PricingPlan, distance_km: f64) -> (f64, FareBreakdown) {
    let chargeable_km = (distance_km - plan.base_distance_km).max(0.0);
    let distance_charge = chargeable_km * plan.per_km_rate;
    let raw_total = plan.base_fare + distance_charge;
    let surged = raw_total * SURGE_MULTIPLIER;

    let minimum_applied = surged < plan.minimum_fare;
    let clamped = surged.max(plan.minimum_fare);

    let total_fare = round_up_to_ten(clamped);

    (
        total_fare,
        FareBreakdown {
            base: plan.base_fare,
            distance_charge,
            minimum_applied,
        },
    )
}

/// Quoted prices always end on a multiple of 10, rounded up. Business rule,
/// not a floating-point concern.
fn round_up_to_ten(amount: f64) -> f64 {
    (amount / 10.0).ceil() * 10.0
}
