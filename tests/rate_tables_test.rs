// ==========================================
// Rate Table Configuration Integration Tests
// ==========================================
// Target: loading, validating and swapping operator table files
// Coverage: JSON round trip through the on-disk format, validation
// rejects, the process-wide install/current exchange
// ==========================================

use scan2bim_cpq::config::{self, RateTableError};
use scan2bim_cpq::{Discipline, Lod, RateTables, Scope};

fn write_tables_to_temp_file(tables: &RateTables) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().unwrap();
    let json = serde_json::to_string_pretty(tables).unwrap();
    std::fs::write(file.path(), json).unwrap();
    file
}

// ==========================================
// File loading
// ==========================================

#[test]
fn test_tables_round_trip_through_a_file() {
    let tables = RateTables::builtin();
    let file = write_tables_to_temp_file(&tables);

    let loaded = RateTables::from_json_file(file.path()).unwrap();
    assert_eq!(loaded, tables);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = RateTables::from_json_file(std::path::Path::new("/nonexistent/rate_tables.json"))
        .unwrap_err();
    assert!(matches!(err, RateTableError::Io(_)));
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "{ not json").unwrap();

    let err = RateTables::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, RateTableError::Parse(_)));
}

#[test]
fn test_loading_rejects_a_broken_lod_ladder() {
    let mut tables = RateTables::builtin();
    tables.lod_multipliers.insert(Lod::Lod400, 0.5);
    let file = write_tables_to_temp_file(&tables);

    let err = RateTables::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, RateTableError::Validation(_)));
    assert!(err.to_string().contains("monotonic"));
}

#[test]
fn test_loading_rejects_a_missing_lod_rung() {
    let mut tables = RateTables::builtin();
    tables.lod_multipliers.remove(&Lod::Lod350);
    let file = write_tables_to_temp_file(&tables);

    assert!(RateTables::from_json_file(file.path()).is_err());
}

// ==========================================
// Resolved rate guarantees
// ==========================================

#[test]
fn test_resolved_rates_are_monotonic_in_lod() {
    let tables = RateTables::builtin();
    for code in ["1", "4", "9", "11"] {
        let mut prev = 0.0;
        for lod in Lod::ALL {
            let rate = tables
                .standard_rate(code, Discipline::Architecture, lod, Scope::Full)
                .unwrap();
            assert!(rate.client >= prev, "building {} rate dropped at {}", code, lod);
            assert!(rate.cost <= rate.client, "cost above client for building {}", code);
            prev = rate.client;
        }
    }
}

// ==========================================
// Process-wide swap
// ==========================================

#[test]
fn test_install_swaps_the_current_tables() {
    let mut tables = RateTables::builtin();
    tables.version = "test.override".to_string();

    config::install(tables).unwrap();
    assert_eq!(config::current().version, "test.override");

    // In-flight references keep the tables they resolved
    let held = config::current();
    let mut next = RateTables::builtin();
    next.version = "test.next".to_string();
    config::install(next).unwrap();
    assert_eq!(held.version, "test.override");
    assert_eq!(config::current().version, "test.next");
}

#[test]
fn test_install_rejects_invalid_tables() {
    let mut tables = RateTables::builtin();
    tables.scope_multipliers.clear();
    assert!(config::install(tables).is_err());
}
