// ==========================================
// Scan-to-BIM CPQ - Configuration Layer
// ==========================================
// Responsibility: the static rate-table configuration
// Rule: loaded once, read-only for the process lifetime; updates are
// atomic reference swaps
// ==========================================

pub mod rate_tables;

pub use rate_tables::{
    current, default_override_path, install, BuildingRates, DisciplineRate, RateTableError,
    RateTableResult, RateTables, ServiceRate, TravelTariffs,
};
