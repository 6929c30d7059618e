// ==========================================
// Scan-to-BIM CPQ - Project Area Model
// ==========================================
// Responsibility: area sum type + square-footage normalization
// Input: configurator area payloads (numeric fields arrive as strings)
// Output: canonical sqft for size-tier classification
// ==========================================

use crate::domain::types::{Discipline, LandscapeType, Lod, Scope};
use serde::{Deserialize, Serialize};

// ==========================================
// Size constants
// ==========================================

/// One acre in square feet. Used only for size-tier classification;
/// landscape pricing itself stays acre-denominated.
pub const ACRES_TO_SQFT: f64 = 43_560.0;

/// Total normalized sqft at or above this qualifies a project for
/// Tier-A cost-plus-margin pricing.
pub const TIER_A_THRESHOLD: f64 = 50_000.0;

// ==========================================
// Area - one scope unit within a project
// ==========================================
// Tagged union: the `kind` discriminator selects which size field and
// rate table apply, so the normalizer and pricing calculator handle
// both shapes exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Area {
    #[serde(rename_all = "camelCase")]
    Standard {
        /// Caller-assigned id, unique within a pricing request.
        id: String,
        /// Display name, used as the line-item label prefix.
        name: String,
        /// Rate-table row key (building type catalog code).
        building_type: String,
        /// Raw square feet as entered; lenient-parsed, empty -> 0.
        square_feet: String,
        lod: Lod,
        #[serde(default)]
        disciplines: Vec<Discipline>,
        #[serde(default)]
        scope: Scope,
    },
    #[serde(rename_all = "camelCase")]
    Landscape {
        id: String,
        name: String,
        landscape_type: LandscapeType,
        /// Acres as entered; lenient-parsed, empty -> 0.
        acres: String,
        lod: Lod,
        #[serde(default)]
        disciplines: Vec<Discipline>,
    },
}

impl Area {
    pub fn id(&self) -> &str {
        match self {
            Area::Standard { id, .. } | Area::Landscape { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Area::Standard { name, .. } | Area::Landscape { name, .. } => name,
        }
    }

    pub fn lod(&self) -> Lod {
        match self {
            Area::Standard { lod, .. } | Area::Landscape { lod, .. } => *lod,
        }
    }

    pub fn disciplines(&self) -> &[Discipline] {
        match self {
            Area::Standard { disciplines, .. } | Area::Landscape { disciplines, .. } => disciplines,
        }
    }
}

// ==========================================
// Lenient numeric parsing
// ==========================================

/// Parse a numeric form field, degrading to 0.0 instead of failing.
///
/// The engine is driven by partially-filled UI forms: empty, malformed
/// and negative input all normalize to a $0 contribution. Never errors.
pub fn parse_non_negative_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

// ==========================================
// Square-footage normalization
// ==========================================

/// Canonical square footage of a single area.
///
/// - standard: parsed square feet as-is
/// - landscape: parsed acres x ACRES_TO_SQFT
///
/// Pure function of `kind` and the size field only; never negative.
pub fn get_area_sqft(area: &Area) -> f64 {
    match area {
        Area::Standard { square_feet, .. } => parse_non_negative_number(square_feet),
        Area::Landscape { acres, .. } => parse_non_negative_number(acres) * ACRES_TO_SQFT,
    }
}

/// Total normalized square footage across all areas.
///
/// Used purely to classify the project size tier, not as a pricing
/// input in itself.
pub fn calculate_total_sqft(areas: &[Area]) -> f64 {
    areas.iter().map(get_area_sqft).sum()
}

/// Canonical definition of "qualifies for Tier A" (inclusive bound).
///
/// The predicate does not switch pricing mode by itself; the caller
/// decides whether to engage the Tier-A override.
pub fn is_tier_a_project(total_sqft: f64) -> bool {
    total_sqft >= TIER_A_THRESHOLD
}

// ==========================================
// Tests
// ==========================================

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_area(square_feet: &str) -> Area {
        Area::Standard {
            id: "1".to_string(),
            name: "Office Building".to_string(),
            building_type: "4".to_string(),
            square_feet: square_feet.to_string(),
            lod: Lod::Lod300,
            disciplines: vec![Discipline::Architecture],
            scope: Scope::Full,
        }
    }

    fn landscape_area(acres: &str) -> Area {
        Area::Landscape {
            id: "2".to_string(),
            name: "Campus Grounds".to_string(),
            landscape_type: LandscapeType::Natural,
            acres: acres.to_string(),
            lod: Lod::Lod300,
            disciplines: vec![Discipline::Site],
        }
    }

    #[test]
    fn test_parse_non_negative_number_lenient() {
        assert_eq!(parse_non_negative_number("25000"), 25000.0);
        assert_eq!(parse_non_negative_number(" 12.5 "), 12.5);
        assert_eq!(parse_non_negative_number(""), 0.0);
        assert_eq!(parse_non_negative_number("abc"), 0.0);
        assert_eq!(parse_non_negative_number("-500"), 0.0);
        assert_eq!(parse_non_negative_number("NaN"), 0.0);
    }

    #[test]
    fn test_standard_area_sqft() {
        assert_eq!(get_area_sqft(&standard_area("25000")), 25000.0);
        assert_eq!(get_area_sqft(&standard_area("")), 0.0);
    }

    #[test]
    fn test_landscape_acres_converted_for_tiering() {
        assert_eq!(get_area_sqft(&landscape_area("5")), 5.0 * ACRES_TO_SQFT);
        assert_eq!(get_area_sqft(&landscape_area("0")), 0.0);
    }

    #[test]
    fn test_total_sqft_mixed_kinds() {
        let areas = vec![standard_area("30000"), landscape_area("2")];
        assert_eq!(calculate_total_sqft(&areas), 30000.0 + 2.0 * ACRES_TO_SQFT);
    }

    #[test]
    fn test_tier_a_boundary_inclusive() {
        assert!(!is_tier_a_project(49_999.0));
        assert!(is_tier_a_project(50_000.0));
        assert!(is_tier_a_project(100_000.0));
    }

    #[test]
    fn test_area_round_trips_through_serde() {
        let area = standard_area("12000");
        let json = serde_json::to_string(&area).unwrap();
        assert!(json.contains("\"kind\":\"standard\""));
        assert!(json.contains("\"squareFeet\":\"12000\""));
        let back: Area = serde_json::from_str(&json).unwrap();
        assert_eq!(back, area);

        let ls = landscape_area("5");
        let json = serde_json::to_string(&ls).unwrap();
        assert!(json.contains("\"landscapeType\":\"landscape_natural\""));
        let back: Area = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ls);
    }
}
