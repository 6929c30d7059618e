// ==========================================
// Scan-to-BIM CPQ - Core Library
// ==========================================
// A deterministic Configure-Price-Quote engine for building-scanning /
// Scan-to-BIM projects: itemized quotes from areas, disciplines,
// services, travel, risks and payment terms, with margin validation.
// ==========================================
// The engine is a stateless pure-function library: every entry point
// is a computation over its arguments and the immutable rate tables.
// Persistence, proposal rendering and CRM writes live upstream and
// downstream of this crate.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Configuration layer - rate tables
pub mod config;

// Engine layer - pricing rules
pub mod engine;

// Logging
pub mod logging;

// ==========================================
// Re-export core types
// ==========================================

// Domain types
pub use domain::types::{
    Discipline, DispatchLocation, LandscapeType, Lod, MarginStatus, PaymentTerms, RiskFactor,
    Scope, ServiceCode, TierAMargin, TierAScanningCost,
};

// Domain entities and helpers
pub use domain::{
    calculate_total_sqft, get_area_sqft, is_tier_a_project, parse_non_negative_number, Area,
    DisciplineTotals, LineItem, PricingResult, QuoteRequest, TierAPricingInput, TierAPricingResult,
    TravelConfig, ACRES_TO_SQFT, TIER_A_THRESHOLD,
};

// Configuration
pub use config::{RateTableError, RateTables};

// Engines
pub use engine::{
    apply_payment_terms, calculate_margin_percent, calculate_tier_a_pricing, calculate_travel_cost,
    get_margin_gate_error, get_margin_status, passes_margin_gate, validate_margin_gate,
    EngineError, EngineResult, MarginStatusInfo, PricingEngine, TravelCostEngine,
    MARGIN_FLOOR_PERCENT, TIER_A_MARGINS, TIER_A_SCANNING_COSTS,
};

// ==========================================
// Crate constants
// ==========================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// System name
pub const APP_NAME: &str = "Scan-to-BIM CPQ Engine";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
