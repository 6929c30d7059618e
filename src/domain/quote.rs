// ==========================================
// Scan-to-BIM CPQ - Quote Value Objects
// ==========================================
// Responsibility: the engine's input/output value objects
// Lifecycle: constructed fresh per calculation, never mutated after
// return; persisted/rendered downstream as opaque JSON
// ==========================================

use crate::domain::area::Area;
use crate::domain::types::{
    Discipline, DispatchLocation, PaymentTerms, RiskFactor, ServiceCode, TierAMargin,
    TierAScanningCost,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// LineItem
// ==========================================

/// One row of the itemized quote breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    /// Client-facing dollar value; negative only for discount lines.
    pub value: f64,
    #[serde(rename = "isDiscount", default, skip_serializing_if = "is_false")]
    pub is_discount: bool,
}

fn is_false(v: &bool) -> bool {
    !*v
}

impl LineItem {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            is_discount: false,
        }
    }

    pub fn discount(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            is_discount: true,
        }
    }
}

// ==========================================
// DisciplineTotals
// ==========================================
// Fixed-key accumulation buckets: every key is always present in the
// serialized result, zero-filled when unused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DisciplineTotals {
    pub architecture: f64,
    pub structural: f64,
    pub mep: f64,
    pub site: f64,
    pub travel: f64,
    pub services: f64,
    pub risk: f64,
}

impl DisciplineTotals {
    /// Accumulate client value under a discipline bucket.
    pub fn add(&mut self, discipline: Discipline, value: f64) {
        match discipline {
            Discipline::Architecture => self.architecture += value,
            Discipline::Structural => self.structural += value,
            Discipline::Mep => self.mep += value,
            Discipline::Site => self.site += value,
        }
    }
}

// ==========================================
// PricingResult
// ==========================================

/// The engine's sole output: cost, client price, margin and the
/// itemized breakdown. Totals are always consistent with the sum of
/// client-side line values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub items: Vec<LineItem>,
    /// Sum of all line values before the payment-terms adjustment.
    pub subtotal: f64,
    pub total_client_price: f64,
    pub total_upteam_cost: f64,
    /// Exactly `total_client_price - total_upteam_cost`.
    pub profit_margin: f64,
    pub discipline_totals: DisciplineTotals,
}

// ==========================================
// TierAPricingResult
// ==========================================

/// Cost-plus-margin substitute for the bottom-up calculation on
/// qualifying large projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierAPricingResult {
    pub scanning_cost: f64,
    pub modeling_cost: f64,
    /// scanning_cost + modeling_cost
    pub subtotal: f64,
    /// Margin multiplier, not a percentage.
    pub margin: f64,
    pub margin_label: String,
    /// subtotal x margin
    pub client_price: f64,
    /// Computed independently and added on top of the client price.
    pub travel_cost: f64,
    pub total_with_travel: f64,
}

// ==========================================
// TierAPricingInput
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierAPricingInput {
    pub scanning_cost: TierAScanningCost,
    /// Free-form dollar figure used when `scanning_cost` is `Other`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanning_cost_other: Option<f64>,
    pub modeling_cost: f64,
    pub margin: TierAMargin,
}

// ==========================================
// TravelConfig
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelConfig {
    pub dispatch_location: DispatchLocation,
    /// One-way road miles from the dispatch origin.
    pub distance: f64,
    /// Full override: bypasses all tariff computation when present.
    /// Required for fly-out jobs (flight + lodging quoted manually).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_cost: Option<f64>,
}

// ==========================================
// QuoteRequest
// ==========================================

/// Serde container for one pricing request, as submitted by the quote
/// configurator or the CLI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default)]
    pub areas: Vec<Area>,
    /// service code -> quantity (a flag service uses quantity 1)
    #[serde(default)]
    pub services: HashMap<ServiceCode, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel: Option<TravelConfig>,
    #[serde(default)]
    pub risks: Vec<RiskFactor>,
    #[serde(default)]
    pub payment_terms: PaymentTerms,
    /// When present the Tier-A override replaces the bottom-up
    /// calculation; the two modes are never blended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_a: Option<TierAPricingInput>,
}
