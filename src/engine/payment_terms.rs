// ==========================================
// Scan-to-BIM CPQ - Payment Terms Adjuster
// ==========================================
// Responsibility: one surcharge or one discount line on the running
// subtotal, selected by payment terms
// Rule: neutral terms (standard / net 15-45 / split schedules) emit
// nothing; never both a surcharge and a discount
// ==========================================

use crate::config::RateTables;
use crate::domain::quote::LineItem;
use crate::domain::types::PaymentTerms;
use crate::engine::pricing::round_currency;

/// Outcome of applying payment terms to a subtotal.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentTermsAdjustment {
    /// Subtotal after the adjustment (unchanged for neutral terms).
    pub adjusted_total: f64,
    /// The emitted line, absent for neutral terms and zero subtotals.
    pub line_item: Option<LineItem>,
}

/// Apply the payment-term percentage from the rate tables.
///
/// Positive percentages produce a surcharge line, negative ones a
/// discount line flagged `is_discount` with a negative value.
pub fn apply_payment_terms(
    tables: &RateTables,
    subtotal: f64,
    terms: PaymentTerms,
) -> PaymentTermsAdjustment {
    let percent = tables.payment_term_percent(terms);
    let amount = round_currency(subtotal * percent / 100.0);

    if amount == 0.0 {
        return PaymentTermsAdjustment {
            adjusted_total: subtotal,
            line_item: None,
        };
    }

    let line_item = if amount > 0.0 {
        LineItem::new(
            format!("{} Payment Terms Surcharge (+{}%)", terms.label(), percent),
            amount,
        )
    } else {
        LineItem::discount(format!("{} Discount ({}%)", terms.label(), percent), amount)
    };

    PaymentTermsAdjustment {
        adjusted_total: round_currency(subtotal + amount),
        line_item: Some(line_item),
    }
}

// ==========================================
// Tests
// ==========================================
