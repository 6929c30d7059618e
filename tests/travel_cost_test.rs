// ==========================================
// Travel Cost Engine Integration Tests
// ==========================================
// Target: the dispatch-origin tariff rules
// Coverage: the Brooklyn size-tier / free-radius grid, the Woodstock
// flat rate, custom overrides, fly-out rejection
// ==========================================

use scan2bim_cpq::engine::{calculate_travel_cost, EngineError, TravelCostEngine};
use scan2bim_cpq::{DispatchLocation, RateTables};
use std::sync::Arc;

fn create_test_tables() -> RateTables {
    RateTables::builtin()
}

// ==========================================
// Brooklyn: size-tiered base fee + overage mileage
// ==========================================

#[test]
fn test_brooklyn_tier_a_large_project() {
    let tables = create_test_tables();
    // >= 50,000 sqft: no base fee, (30 - 20) x $4
    let cost =
        calculate_travel_cost(&tables, 30.0, DispatchLocation::Brooklyn, 60_000.0, None).unwrap();
    assert_eq!(cost, 40.0);
}

#[test]
fn test_brooklyn_tier_b_mid_project() {
    let tables = create_test_tables();
    // 10,000-49,999 sqft: $300 base + (35 - 20) x $4
    let cost =
        calculate_travel_cost(&tables, 35.0, DispatchLocation::Brooklyn, 25_000.0, None).unwrap();
    assert_eq!(cost, 360.0);
}

#[test]
fn test_brooklyn_tier_c_small_project() {
    let tables = create_test_tables();
    // < 10,000 sqft: $150 base + (25 - 20) x $4
    let cost =
        calculate_travel_cost(&tables, 25.0, DispatchLocation::Brooklyn, 8_000.0, None).unwrap();
    assert_eq!(cost, 170.0);
}

#[test]
fn test_brooklyn_inside_free_radius_charges_base_only() {
    let tables = create_test_tables();
    let cost =
        calculate_travel_cost(&tables, 15.0, DispatchLocation::Brooklyn, 25_000.0, None).unwrap();
    assert_eq!(cost, 300.0);
}

#[test]
fn test_brooklyn_free_radius_boundary() {
    let tables = create_test_tables();
    // exactly 20 miles: zero overage
    let at = calculate_travel_cost(&tables, 20.0, DispatchLocation::Brooklyn, 25_000.0, None)
        .unwrap();
    let past = calculate_travel_cost(&tables, 21.0, DispatchLocation::Brooklyn, 25_000.0, None)
        .unwrap();
    assert_eq!(at, 300.0);
    assert_eq!(past, 304.0);
}

#[test]
fn test_brooklyn_size_tier_boundaries() {
    let tables = create_test_tables();
    let base_for = |sqft: f64| {
        calculate_travel_cost(&tables, 10.0, DispatchLocation::Brooklyn, sqft, None).unwrap()
    };
    assert_eq!(base_for(9_999.0), 150.0);
    assert_eq!(base_for(10_000.0), 300.0); // tier B lower bound inclusive
    assert_eq!(base_for(49_999.0), 300.0);
    assert_eq!(base_for(50_000.0), 0.0); // tier A lower bound inclusive
}

// ==========================================
// Woodstock: flat per-mile, no base fee
// ==========================================

#[test]
fn test_woodstock_flat_rate() {
    let tables = create_test_tables();
    let cost =
        calculate_travel_cost(&tables, 80.0, DispatchLocation::Woodstock, 25_000.0, None).unwrap();
    assert_eq!(cost, 240.0);
}

#[test]
fn test_woodstock_zero_distance_is_free() {
    let tables = create_test_tables();
    let cost =
        calculate_travel_cost(&tables, 0.0, DispatchLocation::Woodstock, 25_000.0, None).unwrap();
    assert_eq!(cost, 0.0);
}

#[test]
fn test_negative_distance_clamps_to_zero() {
    let tables = create_test_tables();
    let cost =
        calculate_travel_cost(&tables, -10.0, DispatchLocation::Woodstock, 25_000.0, None).unwrap();
    assert_eq!(cost, 0.0);
}

// ==========================================
// Custom override & fly-out
// ==========================================

#[test]
fn test_custom_cost_short_circuits_every_origin() {
    let tables = create_test_tables();
    for origin in [
        DispatchLocation::Woodstock,
        DispatchLocation::Brooklyn,
        DispatchLocation::FlyOut,
    ] {
        let cost = calculate_travel_cost(&tables, 500.0, origin, 25_000.0, Some(500.0)).unwrap();
        assert_eq!(cost, 500.0, "origin: {}", origin);
    }
}

#[test]
fn test_fly_out_requires_custom_cost() {
    let tables = create_test_tables();
    let err = calculate_travel_cost(&tables, 1_200.0, DispatchLocation::FlyOut, 25_000.0, None)
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfiguration { .. }));
    assert!(err.to_string().contains("FLY_OUT"));
}

// ==========================================
// Engine wrapper
// ==========================================

#[test]
fn test_engine_wrapper_matches_free_function() {
    let tables = Arc::new(create_test_tables());
    let engine = TravelCostEngine::with_tables(tables.clone());

    let via_engine = engine
        .calculate(35.0, DispatchLocation::Brooklyn, 25_000.0, None)
        .unwrap();
    let direct =
        calculate_travel_cost(&tables, 35.0, DispatchLocation::Brooklyn, 25_000.0, None).unwrap();
    assert_eq!(via_engine, direct);
}
