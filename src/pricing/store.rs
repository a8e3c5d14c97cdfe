use dashmap::DashMap;

use crate::error::AppError;
use crate::models::plan::{PricingPlan, ServiceType};

/// In-process pricing plan store, one active plan per service type.
/// Lookups distinguish "no plan" from a zero-valued plan; absence is the
/// caller's error to surface, never a default.
#[derive(Default)]
pub struct PlanStore {
    plans: DashMap<ServiceType, PricingPlan>,
}

impl PlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, service_type: ServiceType) -> Option<PricingPlan> {
        self.plans.get(&service_type).map(|entry| entry.value().clone())
    }

    /// Insert or replace the plan for its service type. Malformed rows are
    /// rejected here so they can never reach the calculator.
    pub fn upsert(&self, plan: PricingPlan) -> Result<PricingPlan, AppError> {
        validate(&plan)?;
        self.plans.insert(plan.service_type, plan.clone());
        Ok(plan)
    }

    pub fn remove(&self, service_type: ServiceType) -> Option<PricingPlan> {
        self.plans.remove(&service_type).map(|(_, plan)| plan)
    }

    pub fn list(&self) -> Vec<PricingPlan> {
        self.plans.iter().map(|entry| entry.value().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

fn validate(plan: &PricingPlan) -> Result<(), AppError> {
    for (field, value) in [
        ("base_fare", plan.base_fare),
        ("base_distance_km", plan.base_distance_km),
        ("per_km_rate", plan.per_km_rate),
        ("minimum_fare", plan.minimum_fare),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::InvalidInput(format!(
                "{field} must be a non-negative number, got {value}"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::PlanStore;
    use crate::error::AppError;
    use crate::models::plan::{PricingPlan, ServiceType};

    fn plan(service_type: ServiceType) -> PricingPlan {
        PricingPlan {
            service_type,
            base_fare: 50.0,
            base_distance_km: 2.0,
            per_km_rate: 15.0,
            minimum_fare: 80.0,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn get_distinguishes_absent_from_configured() {
        let store = PlanStore::new();
        store.upsert(plan(ServiceType::Food)).unwrap();

        assert!(store.get(ServiceType::Food).is_some());
        assert!(store.get(ServiceType::Parcel).is_none());
    }

    #[test]
    fn upsert_replaces_the_previous_plan() {
        let store = PlanStore::new();
        store.upsert(plan(ServiceType::Food)).unwrap();

        let mut updated = plan(ServiceType::Food);
        updated.base_fare = 60.0;
        store.upsert(updated).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(ServiceType::Food).unwrap().base_fare, 60.0);
    }

    #[test]
    fn negative_fields_are_rejected() {
        let store = PlanStore::new();
        let mut bad = plan(ServiceType::Grocery);
        bad.per_km_rate = -1.0;

        let result = store.upsert(bad);

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn non_finite_fields_are_rejected() {
        let store = PlanStore::new();
        let mut bad = plan(ServiceType::Grocery);
        bad.minimum_fare = f64::NAN;

        assert!(store.upsert(bad).is_err());

        let mut bad = plan(ServiceType::Grocery);
        bad.base_fare = f64::INFINITY;

        assert!(store.upsert(bad).is_err());
    }

    #[test]
    fn zero_valued_plan_is_a_valid_configuration() {
        let store = PlanStore::new();
        let mut free = plan(ServiceType::Parcel);
        free.base_fare = 0.0;
        free.per_km_rate = 0.0;
        free.minimum_fare = 0.0;

        assert!(store.upsert(free).is_ok());
        assert!(store.get(ServiceType::Parcel).is_some());
    }

    #[test]
    fn remove_returns_the_retired_plan() {
        let store = PlanStore::new();
        store.upsert(plan(ServiceType::Food)).unwrap();

        let removed = store.remove(ServiceType::Food);

        assert!(removed.is_some());
        assert!(store.get(ServiceType::Food).is_none());
        assert!(store.remove(ServiceType::Food).is_none());
    }
}
