// ==========================================
// Scan-to-BIM CPQ - Rate Table Configuration
// ==========================================
// Responsibility: static, versioned lookup data for the pricing
// engines: per-discipline base rates, LOD/scope ladders, landscape
// per-acre rates, service catalog, risk premiums, payment-term
// adjustments, travel tariffs
// Rule: immutable after load; updates swap in a fresh Arc, never
// mutate in place (safe for concurrent pure reads)
// ==========================================

use crate::domain::types::{
    Discipline, LandscapeType, Lod, PaymentTerms, RiskFactor, Scope, ServiceCode,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use thiserror::Error;

// ==========================================
// Error type
// ==========================================

#[derive(Error, Debug)]
pub enum RateTableError {
    #[error("rate table file not readable: {0}")]
    Io(#[from] std::io::Error),

    #[error("rate table file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("rate table validation failed: {0}")]
    Validation(String),
}

pub type RateTableResult<T> = Result<T, RateTableError>;

// ==========================================
// Table row types
// ==========================================

/// Client price and internal (Upteam) cost per unit for one rate row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisciplineRate {
    pub client: f64,
    pub cost: f64,
}

/// Base rates for one building type, per sqft at LOD 200 / full scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingRates {
    pub label: String,
    pub rates: HashMap<Discipline, DisciplineRate>,
}

/// Flat catalog entry for an additional service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRate {
    pub label: String,
    pub client: f64,
    pub cost: f64,
}

/// Travel tariff constants by dispatch origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelTariffs {
    /// Woodstock flat-rate model: dollars per mile, no base fee.
    pub woodstock_rate_per_mile: f64,
    /// Brooklyn overage rate beyond the free radius.
    pub brooklyn_rate_per_mile: f64,
    /// Mileage is only charged beyond this radius from Brooklyn.
    pub brooklyn_free_radius_miles: f64,
    /// Base fees by project size tier (A >= 50k, B >= 10k, C below).
    pub brooklyn_base_fee_tier_a: f64,
    pub brooklyn_base_fee_tier_b: f64,
    pub brooklyn_base_fee_tier_c: f64,
    /// Lower bound of travel tier B in normalized sqft.
    pub brooklyn_tier_b_threshold_sqft: f64,
}

// ==========================================
// RateTables
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateTables {
    /// Table revision, recorded in quote documents for traceability.
    pub version: String,
    /// Building type catalog code -> per-discipline base rates.
    pub building_rates: HashMap<String, BuildingRates>,
    /// Landscape per-acre base rates at LOD 200 (site discipline).
    pub landscape_rates: HashMap<LandscapeType, DisciplineRate>,
    /// LOD multiplier ladder; must be non-decreasing in LOD order.
    pub lod_multipliers: BTreeMap<Lod, f64>,
    /// Scope sub-row multipliers.
    pub scope_multipliers: HashMap<Scope, f64>,
    pub service_rates: HashMap<ServiceCode, ServiceRate>,
    /// Risk premium percentages (architecture client value only).
    pub risk_percentages: HashMap<RiskFactor, f64>,
    /// Payment-term adjustments; positive = surcharge, negative =
    /// discount, zero = neutral (no line emitted).
    pub payment_term_percentages: HashMap<PaymentTerms, f64>,
    pub travel: TravelTariffs,
}

impl RateTables {
    // ==========================================
    // Lookups
    // ==========================================

    /// Resolved per-sqft rate for one standard-area line, or None when
    /// the building type or discipline has no row (caller skips the
    /// line, never errors).
    pub fn standard_rate(
        &self,
        building_type: &str,
        discipline: Discipline,
        lod: Lod,
        scope: Scope,
    ) -> Option<DisciplineRate> {
        let base = self.building_rates.get(building_type)?.rates.get(&discipline)?;
        let lod_mult = self.lod_multipliers.get(&lod).copied()?;
        let scope_mult = self.scope_multipliers.get(&scope).copied()?;
        Some(DisciplineRate {
            client: base.client * lod_mult * scope_mult,
            cost: base.cost * lod_mult * scope_mult,
        })
    }

    /// Resolved per-acre rate for a landscape area. Landscape pricing
    /// stays acre-denominated; scope does not apply.
    pub fn landscape_rate(&self, landscape_type: LandscapeType, lod: Lod) -> Option<DisciplineRate> {
        let base = self.landscape_rates.get(&landscape_type)?;
        let lod_mult = self.lod_multipliers.get(&lod).copied()?;
        Some(DisciplineRate {
            client: base.client * lod_mult,
            cost: base.cost * lod_mult,
        })
    }

    pub fn service_rate(&self, code: ServiceCode) -> Option<&ServiceRate> {
        self.service_rates.get(&code)
    }

    /// Premium percent for one risk code; unknown codes contribute 0.
    pub fn risk_percent(&self, risk: RiskFactor) -> f64 {
        self.risk_percentages.get(&risk).copied().unwrap_or(0.0)
    }

    /// Signed adjustment percent for the selected payment terms.
    pub fn payment_term_percent(&self, terms: PaymentTerms) -> f64 {
        self.payment_term_percentages.get(&terms).copied().unwrap_or(0.0)
    }

    // ==========================================
    // Loading & validation
    // ==========================================

    /// Load an operator-supplied table file, validating before use.
    pub fn from_json_file(path: &Path) -> RateTableResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let tables: RateTables = serde_json::from_str(&raw)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Structural validation of a table set.
    ///
    /// Checks the guarantees the engines rely on:
    /// - the LOD ladder covers every level and is non-decreasing
    /// - every rate and multiplier is finite and non-negative
    pub fn validate(&self) -> RateTableResult<()> {
        // 1. LOD ladder: complete and monotonic
        let mut prev: Option<(Lod, f64)> = None;
        for lod in Lod::ALL {
            let mult = self.lod_multipliers.get(&lod).copied().ok_or_else(|| {
                RateTableError::Validation(format!("missing LOD multiplier for {}", lod))
            })?;
            if !mult.is_finite() || mult <= 0.0 {
                return Err(RateTableError::Validation(format!(
                    "LOD multiplier for {} must be positive, got {}",
                    lod, mult
                )));
            }
            if let Some((prev_lod, prev_mult)) = prev {
                if mult < prev_mult {
                    return Err(RateTableError::Validation(format!(
                        "LOD ladder not monotonic: {} ({}) < {} ({})",
                        lod, mult, prev_lod, prev_mult
                    )));
                }
            }
            prev = Some((lod, mult));
        }

        // 2. Scope multipliers: full scope must exist
        if !self.scope_multipliers.contains_key(&Scope::Full) {
            return Err(RateTableError::Validation(
                "missing scope multiplier for full".to_string(),
            ));
        }

        // 3. Rates: finite and non-negative
        let check = |what: &str, v: f64| -> RateTableResult<()> {
            if !v.is_finite() || v < 0.0 {
                return Err(RateTableError::Validation(format!(
                    "{} must be a non-negative number, got {}",
                    what, v
                )));
            }
            Ok(())
        };
        for (code, row) in &self.building_rates {
            for (discipline, rate) in &row.rates {
                check(&format!("building {} {} client rate", code, discipline), rate.client)?;
                check(&format!("building {} {} cost rate", code, discipline), rate.cost)?;
            }
        }
        for (lt, rate) in &self.landscape_rates {
            check(&format!("{} client rate", lt), rate.client)?;
            check(&format!("{} cost rate", lt), rate.cost)?;
        }
        for (code, rate) in &self.service_rates {
            check(&format!("service {} client rate", code), rate.client)?;
            check(&format!("service {} cost rate", code), rate.cost)?;
        }
        for (risk, pct) in &self.risk_percentages {
            check(&format!("risk premium for {}", risk), *pct)?;
        }

        // 4. Travel tariffs
        check("woodstock rate per mile", self.travel.woodstock_rate_per_mile)?;
        check("brooklyn rate per mile", self.travel.brooklyn_rate_per_mile)?;
        check("brooklyn free radius", self.travel.brooklyn_free_radius_miles)?;
        check("brooklyn tier A base fee", self.travel.brooklyn_base_fee_tier_a)?;
        check("brooklyn tier B base fee", self.travel.brooklyn_base_fee_tier_b)?;
        check("brooklyn tier C base fee", self.travel.brooklyn_base_fee_tier_c)?;

        Ok(())
    }

    // ==========================================
    // Built-in defaults
    // ==========================================

    /// The embedded default tables (FY26 rate card).
    pub fn builtin() -> Self {
        // (code, label, [arch, structural, mep, site] client rates)
        // per sqft at LOD 200 / full scope; cost column alongside
        const BUILDING_ROWS: &[(&str, &str, [(f64, f64); 4])] = &[
            ("1", "Residential - Single Family",
                [(0.26, 0.13), (0.12, 0.062), (0.16, 0.084), (0.05, 0.026)]),
            ("2", "Residential - Multi Family",
                [(0.22, 0.11), (0.12, 0.062), (0.16, 0.084), (0.05, 0.026)]),
            ("3", "Residential - Luxury",
                [(0.32, 0.16), (0.14, 0.072), (0.18, 0.094), (0.06, 0.031)]),
            ("4", "Commercial / Office",
                [(0.20, 0.10), (0.12, 0.062), (0.18, 0.094), (0.05, 0.026)]),
            ("5", "Retail / Restaurants",
                [(0.22, 0.11), (0.12, 0.062), (0.20, 0.104), (0.05, 0.026)]),
            ("6", "Kitchen / Catering Facilities",
                [(0.26, 0.13), (0.14, 0.072), (0.26, 0.135), (0.05, 0.026)]),
            ("7", "Education",
                [(0.22, 0.11), (0.13, 0.067), (0.20, 0.104), (0.06, 0.031)]),
            ("8", "Hotel / Theatre / Museum",
                [(0.28, 0.14), (0.15, 0.078), (0.22, 0.114), (0.06, 0.031)]),
            ("9", "Hospitals / Mixed Use",
                [(0.30, 0.15), (0.16, 0.083), (0.28, 0.145), (0.06, 0.031)]),
            ("10", "Mechanical / Utility Rooms",
                [(0.24, 0.12), (0.16, 0.083), (0.34, 0.176), (0.04, 0.021)]),
            ("11", "Warehouse / Storage",
                [(0.12, 0.06), (0.08, 0.041), (0.10, 0.052), (0.04, 0.021)]),
            ("12", "Religious Buildings",
                [(0.30, 0.15), (0.15, 0.078), (0.16, 0.084), (0.06, 0.031)]),
            ("13", "Infrastructure / Roads / Bridges",
                [(0.16, 0.08), (0.18, 0.093), (0.12, 0.062), (0.08, 0.041)]),
        ];

        let mut building_rates = HashMap::new();
        for (code, label, rows) in BUILDING_ROWS {
            let mut rates = HashMap::new();
            for (discipline, (client, cost)) in Discipline::ALL.iter().zip(rows.iter()) {
                rates.insert(*discipline, DisciplineRate { client: *client, cost: *cost });
            }
            building_rates.insert(
                code.to_string(),
                BuildingRates { label: label.to_string(), rates },
            );
        }

        let mut landscape_rates = HashMap::new();
        // Natural at LOD 300 works out to $750/acre (600 x 1.25)
        landscape_rates.insert(LandscapeType::Natural, DisciplineRate { client: 600.0, cost: 310.0 });
        landscape_rates.insert(LandscapeType::Built, DisciplineRate { client: 900.0, cost: 465.0 });

        let lod_multipliers = BTreeMap::from([
            (Lod::Lod100, 0.80),
            (Lod::Lod200, 1.00),
            (Lod::Lod300, 1.25),
            (Lod::Lod350, 1.45),
            (Lod::Lod400, 1.70),
        ]);

        let scope_multipliers = HashMap::from([
            (Scope::Full, 1.00),
            (Scope::Interior, 0.65),
            (Scope::Exterior, 0.45),
            (Scope::Mixed, 0.85),
        ]);

        let service_rates = HashMap::from([
            (ServiceCode::Matterport, ServiceRate {
                label: "Matterport Virtual Tour".to_string(), client: 500.0, cost: 250.0 }),
            (ServiceCode::Georeferencing, ServiceRate {
                label: "Georeferencing / Survey Control".to_string(), client: 750.0, cost: 375.0 }),
            (ServiceCode::ActScanning, ServiceRate {
                label: "ACT Above-Ceiling Scanning".to_string(), client: 1_250.0, cost: 625.0 }),
            (ServiceCode::ScanRegistrationOnly, ServiceRate {
                label: "Scanning & Registration Only".to_string(), client: 3_500.0, cost: 1_900.0 }),
            (ServiceCode::Expedited, ServiceRate {
                label: "Expedited Delivery".to_string(), client: 1_500.0, cost: 500.0 }),
        ]);

        let risk_percentages = HashMap::from([
            (RiskFactor::Occupied, 15.0),
            (RiskFactor::Hazardous, 25.0),
            (RiskFactor::NoPower, 20.0),
        ]);

        let payment_term_percentages = HashMap::from([
            (PaymentTerms::Standard, 0.0),
            (PaymentTerms::Net15, 0.0),
            (PaymentTerms::Net30, 0.0),
            (PaymentTerms::Net45, 0.0),
            (PaymentTerms::Net60, 3.0),
            (PaymentTerms::Prepaid, -5.0),
            (PaymentTerms::Split5050, 0.0),
            (PaymentTerms::Split2575, 0.0),
        ]);

        let travel = TravelTariffs {
            woodstock_rate_per_mile: 3.0,
            brooklyn_rate_per_mile: 4.0,
            brooklyn_free_radius_miles: 20.0,
            brooklyn_base_fee_tier_a: 0.0,
            brooklyn_base_fee_tier_b: 300.0,
            brooklyn_base_fee_tier_c: 150.0,
            brooklyn_tier_b_threshold_sqft: 10_000.0,
        };

        Self {
            version: "fy26.1".to_string(),
            building_rates,
            landscape_rates,
            lod_multipliers,
            scope_multipliers,
            service_rates,
            risk_percentages,
            payment_term_percentages,
            travel,
        }
    }
}

// ==========================================
// Process-wide current table reference
// ==========================================
// Loaded once at process start; a pricing-table update swaps in a new
// immutable reference without racing in-flight calculations.

static CURRENT: OnceLock<RwLock<Arc<RateTables>>> = OnceLock::new();

fn cell() -> &'static RwLock<Arc<RateTables>> {
    CURRENT.get_or_init(|| RwLock::new(Arc::new(RateTables::builtin())))
}

/// The currently installed table set (cheap Arc clone).
pub fn current() -> Arc<RateTables> {
    cell()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Validate and atomically install a replacement table set.
pub fn install(tables: RateTables) -> RateTableResult<()> {
    tables.validate()?;
    let mut guard = cell().write().unwrap_or_else(PoisonError::into_inner);
    *guard = Arc::new(tables);
    Ok(())
}

/// Default location for an operator rate-table override file.
pub fn default_override_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scan2bim-cpq").join("rate_tables.json"))
}

// ==========================================
// Tests
// ==========================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_validate() {
        RateTables::builtin().validate().unwrap();
    }

    #[test]
    fn test_standard_rate_applies_lod_and_scope_multipliers() {
        let tables = RateTables::builtin();
        let base = tables
            .standard_rate("4", Discipline::Architecture, Lod::Lod200, Scope::Full)
            .unwrap();
        let lod300 = tables
            .standard_rate("4", Discipline::Architecture, Lod::Lod300, Scope::Full)
            .unwrap();
        assert!((lod300.client - base.client * 1.25).abs() < 1e-9);

        let interior = tables
            .standard_rate("4", Discipline::Architecture, Lod::Lod200, Scope::Interior)
            .unwrap();
        assert!(interior.client < base.client);
    }

    #[test]
    fn test_unknown_building_type_has_no_row() {
        let tables = RateTables::builtin();
        assert!(tables
            .standard_rate("99", Discipline::Architecture, Lod::Lod200, Scope::Full)
            .is_none());
    }

    #[test]
    fn test_natural_landscape_lod300_is_750_per_acre() {
        let tables = RateTables::builtin();
        let rate = tables
            .landscape_rate(LandscapeType::Natural, Lod::Lod300)
            .unwrap();
        assert!((rate.client - 750.0).abs() < 1e-9);
    }

    #[test]
    fn test_validation_rejects_non_monotonic_lod_ladder() {
        let mut tables = RateTables::builtin();
        tables.lod_multipliers.insert(Lod::Lod400, 0.5);
        assert!(matches!(
            tables.validate(),
            Err(RateTableError::Validation(_))
        ));
    }

    #[test]
    fn test_validation_rejects_negative_rates() {
        let mut tables = RateTables::builtin();
        tables
            .risk_percentages
            .insert(RiskFactor::Occupied, -15.0);
        assert!(tables.validate().is_err());
    }
}
