// ==========================================
// Scan-to-BIM CPQ - Domain Model Layer
// ==========================================
// Responsibility: domain entities, closed enumerations, value objects
// Rule: no rate lookups, no engine logic, no I/O
// ==========================================

pub mod area;
pub mod quote;
pub mod types;

// Re-export core types
pub use area::{
    calculate_total_sqft, get_area_sqft, is_tier_a_project, parse_non_negative_number, Area,
    ACRES_TO_SQFT, TIER_A_THRESHOLD,
};
pub use quote::{
    DisciplineTotals, LineItem, PricingResult, QuoteRequest, TierAPricingInput, TierAPricingResult,
    TravelConfig,
};
pub use types::{
    Discipline, DispatchLocation, LandscapeType, Lod, MarginStatus, PaymentTerms, RiskFactor,
    Scope, ServiceCode, TierAMargin, TierAScanningCost,
};
