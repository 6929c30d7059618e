// ==========================================
// Scan-to-BIM CPQ - Engine Layer
// ==========================================
// Responsibility: the pricing business rules
// Rule: pure computation over arguments and the immutable rate tables;
// no I/O, no shared mutable state, safe for concurrent invocation
// ==========================================

pub mod error;
pub mod margin;
pub mod payment_terms;
pub mod pricing;
pub mod tier_a;
pub mod travel;

// Re-export the engine surface
pub use error::{EngineError, EngineResult};
pub use margin::{
    calculate_margin_percent, get_margin_gate_error, get_margin_status, passes_margin_gate,
    validate_margin_gate, MarginStatusInfo, MARGIN_EXCELLENT_PERCENT, MARGIN_FLOOR_PERCENT,
};
pub use payment_terms::{apply_payment_terms, PaymentTermsAdjustment};
pub use pricing::{round_currency, PricingEngine};
pub use tier_a::{calculate_tier_a_pricing, TIER_A_MARGINS, TIER_A_SCANNING_COSTS};
pub use travel::{calculate_travel_cost, TravelCostEngine};
