// ==========================================
// Scan-to-BIM CPQ - Margin Gate
// ==========================================
// Responsibility: profitability floor validation over a computed
// PricingResult, plus status-band classification
// Rule: advisory only - the gate reports, it never throws; the caller
// (UI / approval workflow) decides whether to block progression
// ==========================================

use crate::domain::quote::PricingResult;
use crate::domain::types::MarginStatus;
use serde::{Deserialize, Serialize};

/// The FY26 profitability floor: quotes under this margin percent are
/// blocked from progressing. Exactly 40% passes.
pub const MARGIN_FLOOR_PERCENT: f64 = 40.0;

/// Lower bound of the `excellent` band.
pub const MARGIN_EXCELLENT_PERCENT: f64 = 60.0;

// ==========================================
// Status classification
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginStatusInfo {
    pub status: MarginStatus,
    pub label: String,
}

/// Classify a margin percent into a status band.
///
/// Bands are monotonic in percent: below the floor is `blocked`,
/// `healthy` up to the excellence bound, `excellent` from 60% up.
pub fn get_margin_status(percent: f64) -> MarginStatusInfo {
    let status = if percent < MARGIN_FLOOR_PERCENT {
        MarginStatus::Blocked
    } else if percent < MARGIN_EXCELLENT_PERCENT {
        MarginStatus::Healthy
    } else {
        MarginStatus::Excellent
    };

    let label = match status {
        MarginStatus::Blocked => format!(
            "Blocked - margin {:.1}% is under the {:.0}% floor",
            percent, MARGIN_FLOOR_PERCENT
        ),
        MarginStatus::Healthy => format!("Healthy - margin {:.1}%", percent),
        MarginStatus::Excellent => format!("Excellent - margin {:.1}%", percent),
    };

    MarginStatusInfo { status, label }
}

// ==========================================
// Gate functions
// ==========================================

/// Margin percent of a pricing result:
/// `(client - cost) / client x 100`, 0 when the client price is 0
/// (an empty quote is not a divide-by-zero error).
pub fn calculate_margin_percent(pricing: &PricingResult) -> f64 {
    if pricing.total_client_price == 0.0 {
        return 0.0;
    }
    (pricing.total_client_price - pricing.total_upteam_cost) / pricing.total_client_price * 100.0
}

/// True iff the margin percent meets the floor (inclusive boundary).
pub fn passes_margin_gate(pricing: &PricingResult) -> bool {
    calculate_margin_percent(pricing) >= MARGIN_FLOOR_PERCENT
}

/// Gate verdict over a raw percent, for callers that only have the
/// number: `None` when passing, a descriptive message when failing.
pub fn validate_margin_gate(percent: f64) -> Option<String> {
    if percent >= MARGIN_FLOOR_PERCENT {
        return None;
    }
    Some(format!(
        "Margin {:.1}% is below the {:.0}% minimum. Adjust pricing before sending this quote.",
        percent, MARGIN_FLOOR_PERCENT
    ))
}

/// Gate verdict over a full pricing result.
pub fn get_margin_gate_error(pricing: &PricingResult) -> Option<String> {
    validate_margin_gate(calculate_margin_percent(pricing))
}

// ==========================================
// Tests
// ==========================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quote::DisciplineTotals;

    fn test_pricing(total_client_price: f64, total_upteam_cost: f64) -> PricingResult {
        PricingResult {
            items: vec![],
            subtotal: total_client_price,
            total_client_price,
            total_upteam_cost,
            profit_margin: total_client_price - total_upteam_cost,
            discipline_totals: DisciplineTotals::default(),
        }
    }

    #[test]
    fn test_margin_percent() {
        assert_eq!(calculate_margin_percent(&test_pricing(10_000.0, 6_000.0)), 40.0);
        assert_eq!(calculate_margin_percent(&test_pricing(10_000.0, 5_000.0)), 50.0);
    }

    #[test]
    fn test_zero_price_is_zero_percent_not_an_error() {
        assert_eq!(calculate_margin_percent(&test_pricing(0.0, 100.0)), 0.0);
    }

    #[test]
    fn test_gate_boundary_is_inclusive() {
        assert!(passes_margin_gate(&test_pricing(10_000.0, 6_000.0))); // exactly 40%
        assert!(!passes_margin_gate(&test_pricing(10_000.0, 6_100.0))); // 39%
        assert!(passes_margin_gate(&test_pricing(10_000.0, 5_000.0))); // 50%
    }

    #[test]
    fn test_gate_error_messages() {
        assert!(get_margin_gate_error(&test_pricing(10_000.0, 5_000.0)).is_none());
        let err = get_margin_gate_error(&test_pricing(10_000.0, 6_500.0)).unwrap();
        assert!(err.contains("40"));
    }

    #[test]
    fn test_validate_margin_gate_raw_percent() {
        assert!(validate_margin_gate(45.0).is_none());
        assert!(validate_margin_gate(40.0).is_none());
        assert!(validate_margin_gate(35.0).is_some());
    }

    #[test]
    fn test_status_bands_monotonic() {
        assert_eq!(get_margin_status(35.0).status, MarginStatus::Blocked);
        assert_eq!(get_margin_status(40.0).status, MarginStatus::Healthy);
        assert_eq!(get_margin_status(50.0).status, MarginStatus::Healthy);
        assert_eq!(get_margin_status(60.0).status, MarginStatus::Excellent);
        assert_eq!(get_margin_status(80.0).status, MarginStatus::Excellent);

        // higher percent never yields a worse status
        let mut prev = get_margin_status(0.0).status;
        for pct in 1..100 {
            let status = get_margin_status(pct as f64).status;
            assert!(status >= prev);
            prev = status;
        }
    }
}
