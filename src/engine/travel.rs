// ==========================================
// Scan-to-BIM CPQ - Travel Cost Engine
// ==========================================
// Responsibility: trip surcharge from distance, dispatch origin and
// aggregate project size
// Input: distance (miles), dispatch location, total normalized sqft
// Output: travel dollars (custom override passes through untouched)
// ==========================================

use crate::config::RateTables;
use crate::domain::area::TIER_A_THRESHOLD;
use crate::domain::types::DispatchLocation;
use crate::engine::error::{EngineError, EngineResult};
use std::sync::Arc;
use tracing::debug;

/// Travel surcharge for one project.
///
/// Tariff rules by origin:
/// - `Woodstock`: flat dollars per mile, no base fee
/// - `Brooklyn`: size-tiered base fee plus per-mile overage beyond the
///   free radius
/// - `FlyOut`: no tariff exists; a custom cost is mandatory
///
/// `custom_cost`, when present, short-circuits everything (including
/// fly-out) and is returned unchanged - a negative override is the
/// caller's responsibility.
pub fn calculate_travel_cost(
    tables: &RateTables,
    distance_miles: f64,
    dispatch_location: DispatchLocation,
    total_sqft: f64,
    custom_cost: Option<f64>,
) -> EngineResult<f64> {
    if let Some(cost) = custom_cost {
        debug!(cost, "travel cost overridden by custom value");
        return Ok(cost);
    }

    let distance = distance_miles.max(0.0);
    let tariffs = &tables.travel;

    match dispatch_location {
        DispatchLocation::Woodstock => Ok(distance * tariffs.woodstock_rate_per_mile),
        DispatchLocation::Brooklyn => {
            // Base fee by project size tier
            let base_fee = if total_sqft >= TIER_A_THRESHOLD {
                tariffs.brooklyn_base_fee_tier_a
            } else if total_sqft >= tariffs.brooklyn_tier_b_threshold_sqft {
                tariffs.brooklyn_base_fee_tier_b
            } else {
                tariffs.brooklyn_base_fee_tier_c
            };
            // Mileage only beyond the free radius
            let billable_miles = (distance - tariffs.brooklyn_free_radius_miles).max(0.0);
            Ok(base_fee + billable_miles * tariffs.brooklyn_rate_per_mile)
        }
        DispatchLocation::FlyOut => Err(EngineError::invalid_configuration(
            "no travel tariff for FLY_OUT dispatch; a custom travel cost is required",
        )),
    }
}

// ==========================================
// TravelCostEngine
// ==========================================
// Thin stateless wrapper binding the tariff tables, for callers that
// hold an engine instance rather than a table reference.
pub struct TravelCostEngine {
    tables: Arc<RateTables>,
}

impl TravelCostEngine {
    /// Engine over the currently installed rate tables.
    pub fn new() -> Self {
        Self {
            tables: crate::config::current(),
        }
    }

    pub fn with_tables(tables: Arc<RateTables>) -> Self {
        Self { tables }
    }

    pub fn calculate(
        &self,
        distance_miles: f64,
        dispatch_location: DispatchLocation,
        total_sqft: f64,
        custom_cost: Option<f64>,
    ) -> EngineResult<f64> {
        calculate_travel_cost(
            &self.tables,
            distance_miles,
            dispatch_location,
            total_sqft,
            custom_cost,
        )
    }
}

impl Default for TravelCostEngine {
    fn default() -> Self {
        Self::new()
    }
}
