// ==========================================
// Scan-to-BIM CPQ - Line-Item Pricing Engine
// ==========================================
// Responsibility: the primary entry point - turns areas, services,
// travel, risks and payment terms into one itemized PricingResult
// Input: quote configurator state (partially-filled forms allowed)
// Output: fresh immutable PricingResult per call
// ==========================================
// Rule: malformed numeric input and missing rate rows degrade to $0 /
// skipped lines; only a missing travel tariff is a hard error

use crate::config::RateTables;
use crate::domain::area::{calculate_total_sqft, parse_non_negative_number, Area};
use crate::domain::quote::{DisciplineTotals, LineItem, PricingResult, TravelConfig};
use crate::domain::types::{Discipline, PaymentTerms, RiskFactor, ServiceCode};
use crate::engine::error::EngineResult;
use crate::engine::payment_terms::apply_payment_terms;
use crate::engine::travel::calculate_travel_cost;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Round a dollar value to cents.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// Services are emitted in fixed catalog order so identical requests
// produce identical item sequences.
const SERVICE_ORDER: [ServiceCode; 5] = [
    ServiceCode::Matterport,
    ServiceCode::Georeferencing,
    ServiceCode::ActScanning,
    ServiceCode::ScanRegistrationOnly,
    ServiceCode::Expedited,
];

// ==========================================
// PricingEngine
// ==========================================
pub struct PricingEngine {
    tables: Arc<RateTables>,
}

impl PricingEngine {
    /// Engine over the currently installed rate tables.
    pub fn new() -> Self {
        Self {
            tables: crate::config::current(),
        }
    }

    pub fn with_tables(tables: Arc<RateTables>) -> Self {
        Self { tables }
    }

    /// Full bottom-up pricing calculation.
    ///
    /// Deterministic and side-effect free: identical arguments always
    /// yield an identical result.
    #[instrument(skip_all, fields(areas = areas.len(), terms = %payment_terms))]
    pub fn calculate_pricing(
        &self,
        areas: &[Area],
        services: &HashMap<ServiceCode, f64>,
        travel: Option<&TravelConfig>,
        risks: &[RiskFactor],
        payment_terms: PaymentTerms,
    ) -> EngineResult<PricingResult> {
        let mut items: Vec<LineItem> = Vec::new();
        let mut totals = DisciplineTotals::default();
        let mut subtotal = 0.0;
        let mut total_cost = 0.0;

        // Risk premiums are additive across selected risk codes.
        let risk_percent: f64 = risks.iter().map(|r| self.tables.risk_percent(*r)).sum();

        // 1. Per-area, per-discipline line items
        for area in areas {
            self.price_area(area, risk_percent, &mut items, &mut totals, &mut subtotal, &mut total_cost);
        }

        // 2. Additional services (flat catalog, not area-derived)
        for code in SERVICE_ORDER {
            let quantity = services.get(&code).copied().unwrap_or(0.0);
            if !(quantity > 0.0) {
                continue;
            }
            let Some(rate) = self.tables.service_rate(code) else {
                debug!(%code, "no service catalog entry, skipping");
                continue;
            };
            let client = round_currency(rate.client * quantity);
            let cost = round_currency(rate.cost * quantity);
            if client == 0.0 {
                continue;
            }
            let label = if quantity > 1.0 {
                format!("{} (x{})", rate.label, quantity)
            } else {
                rate.label.clone()
            };
            items.push(LineItem::new(label, client));
            totals.services += client;
            subtotal += client;
            total_cost += cost;
        }

        // 3. Travel: one line for the whole project, never per area
        if let Some(config) = travel {
            if !areas.is_empty() {
                let total_sqft = calculate_total_sqft(areas);
                let cost = round_currency(calculate_travel_cost(
                    &self.tables,
                    config.distance,
                    config.dispatch_location,
                    total_sqft,
                    config.custom_cost,
                )?);
                if cost != 0.0 {
                    items.push(LineItem::new(
                        format!("Travel ({})", config.dispatch_location.label()),
                        cost,
                    ));
                    totals.travel += cost;
                    subtotal += cost;
                    // Mileage passes through at cost, no markup.
                    total_cost += cost;
                }
            }
        }

        // 4. Payment terms on the running subtotal
        let subtotal = round_currency(subtotal);
        let adjustment = apply_payment_terms(&self.tables, subtotal, payment_terms);
        if let Some(line) = adjustment.line_item {
            items.push(line);
        }

        // 5. Totals
        let total_client_price = round_currency(adjustment.adjusted_total);
        let total_upteam_cost = round_currency(total_cost);
        let result = PricingResult {
            items,
            subtotal,
            total_client_price,
            total_upteam_cost,
            profit_margin: total_client_price - total_upteam_cost,
            discipline_totals: totals,
        };

        debug!(
            client = result.total_client_price,
            cost = result.total_upteam_cost,
            "pricing calculated"
        );
        Ok(result)
    }

    /// Price one area: a client/cost line per selected discipline plus
    /// an architecture risk-premium line when risks are selected.
    fn price_area(
        &self,
        area: &Area,
        risk_percent: f64,
        items: &mut Vec<LineItem>,
        totals: &mut DisciplineTotals,
        subtotal: &mut f64,
        total_cost: &mut f64,
    ) {
        match area {
            Area::Standard {
                name,
                building_type,
                square_feet,
                lod,
                disciplines,
                scope,
                ..
            } => {
                let sqft = parse_non_negative_number(square_feet);
                for discipline in disciplines {
                    let Some(rate) =
                        self.tables.standard_rate(building_type, *discipline, *lod, *scope)
                    else {
                        debug!(%building_type, %discipline, "no rate row, skipping line");
                        continue;
                    };
                    let client = round_currency(sqft * rate.client);
                    let cost = round_currency(sqft * rate.cost);
                    totals.add(*discipline, client);
                    *subtotal += client;
                    *total_cost += cost;
                    if client == 0.0 {
                        // Unpriced selection still keeps its bucket; no noise line.
                        continue;
                    }
                    items.push(LineItem::new(
                        format!("{} - {}", name, discipline.label()),
                        client,
                    ));

                    // Risk premium: architecture client value only, pure
                    // margin capture - the cost side is untouched.
                    if *discipline == Discipline::Architecture && risk_percent > 0.0 {
                        let premium = round_currency(client * risk_percent / 100.0);
                        if premium > 0.0 {
                            items.push(LineItem::new(
                                format!("{} - Risk Premium (+{}%)", name, risk_percent),
                                premium,
                            ));
                            totals.risk += premium;
                            *subtotal += premium;
                        }
                    }
                }
            }
            Area::Landscape {
                name,
                landscape_type,
                acres,
                lod,
                disciplines,
                ..
            } => {
                // Landscape pricing stays acre-denominated; only the
                // site discipline has landscape rate rows.
                let acre_count = parse_non_negative_number(acres);
                for discipline in disciplines {
                    if *discipline != Discipline::Site {
                        debug!(%discipline, "no landscape rate row, skipping line");
                        continue;
                    }
                    let Some(rate) = self.tables.landscape_rate(*landscape_type, *lod) else {
                        continue;
                    };
                    let client = round_currency(acre_count * rate.client);
                    let cost = round_currency(acre_count * rate.cost);
                    totals.add(*discipline, client);
                    *subtotal += client;
                    *total_cost += cost;
                    if client == 0.0 {
                        continue;
                    }
                    items.push(LineItem::new(
                        format!("{} - {} ({} acres)", name, landscape_type.label(), acre_count),
                        client,
                    ));
                }
            }
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new()
    }
}
