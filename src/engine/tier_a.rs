// ==========================================
// Scan-to-BIM CPQ - Tier-A Override Calculator
// ==========================================
// Responsibility: cost-plus-margin pricing for qualifying large
// projects (total sqft >= TIER_A_THRESHOLD)
// Input: manually entered scanning/modeling costs + margin multiplier
// Output: TierAPricingResult, a substitute for the bottom-up result
// ==========================================
// Rule: mutually exclusive with the per-area calculation per request;
// qualification is the caller's call (`is_tier_a_project`), the
// arithmetic here runs unconditionally

use crate::config::RateTables;
use crate::domain::quote::{TierAPricingInput, TierAPricingResult};
use crate::domain::types::{TierAMargin, TierAScanningCost};
use crate::engine::pricing::round_currency;

/// The fixed margin multiplier menu.
pub const TIER_A_MARGINS: [TierAMargin; 3] = [
    TierAMargin::Standard,
    TierAMargin::Growth,
    TierAMargin::Premium,
];

/// The fixed scanning-cost presets (excluding the free-form override).
pub const TIER_A_SCANNING_COSTS: [TierAScanningCost; 5] = [
    TierAScanningCost::HalfDay,
    TierAScanningCost::OneDay,
    TierAScanningCost::DayAndHalf,
    TierAScanningCost::TwoDays,
    TierAScanningCost::TwoDaysAndHalf,
];

/// Cost-plus-margin calculation:
/// `clientPrice = (scanning + modeling) x margin`.
///
/// Travel is still computed independently - Tier-A projects dispatch
/// at the tier-A tariff (no base fee, per-mile overage beyond the free
/// radius) - and reported on top of the client price.
pub fn calculate_tier_a_pricing(
    tables: &RateTables,
    input: &TierAPricingInput,
    distance_miles: f64,
) -> TierAPricingResult {
    let scanning_cost = input.scanning_cost.resolve(input.scanning_cost_other);
    let modeling_cost = if input.modeling_cost.is_finite() && input.modeling_cost > 0.0 {
        input.modeling_cost
    } else {
        0.0
    };

    let subtotal = round_currency(scanning_cost + modeling_cost);
    let margin = input.margin.value();
    let client_price = round_currency(subtotal * margin);

    let tariffs = &tables.travel;
    let billable_miles = (distance_miles.max(0.0) - tariffs.brooklyn_free_radius_miles).max(0.0);
    let travel_cost = round_currency(
        tariffs.brooklyn_base_fee_tier_a + billable_miles * tariffs.brooklyn_rate_per_mile,
    );

    TierAPricingResult {
        scanning_cost,
        modeling_cost,
        subtotal,
        margin,
        margin_label: input.margin.label().to_string(),
        client_price,
        travel_cost,
        total_with_travel: round_currency(client_price + travel_cost),
    }
}

// ==========================================
// Tests
// ==========================================
