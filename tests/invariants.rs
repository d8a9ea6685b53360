// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Invariant tests for the roster store and report builder
//!
//! These tests verify the core laws:
//! 1. Key uniqueness - at most one employee per PC Number after any mutation
//! 2. Filter identity - an unselected filter returns the collection unchanged
//! 3. Export fidelity - CSV reports survive round-trips exactly
//! 4. Aggregation conservation - group sums add back up to the file totals

use musterbook::report;
use musterbook::store::{RosterStore, StationFilter};
use musterbook::types::{EmployeeRecord, StationRecord};
use proptest::prelude::*;
use std::collections::HashSet;

// =============================================================================
// Test Helpers
// =============================================================================

fn make_employee(pc: &str, name: &str, station: &str) -> EmployeeRecord {
    EmployeeRecord {
        pc_number: pc.into(),
        name: name.into(),
        station: station.into(),
        date: "05.06.24".into(),
        attachment: String::new(),
    }
}

fn make_station(name: &str, sub_division: &str, quota: u32, actual: u32, vacancies: i64) -> StationRecord {
    StationRecord {
        station: name.into(),
        circle: "Circle".into(),
        sub_division: sub_division.into(),
        sanctioned_quota: quota,
        actual_strength: actual,
        vacancies,
    }
}

fn sample_store() -> RosterStore {
    RosterStore {
        stations: vec![
            make_station("A", "X", 10, 8, 2),
            make_station("B", "X", 5, 5, 0),
        ],
        employees: vec![
            make_employee("A101", "Kiran", "A"),
            make_employee("B202", "Meera", "B"),
        ],
    }
}

fn parse_csv(bytes: &[u8]) -> Vec<EmployeeRecord> {
    csv::Reader::from_reader(bytes)
        .deserialize()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

// =============================================================================
// Key Uniqueness
// =============================================================================

#[test]
fn test_delete_after_upsert_leaves_no_trace() {
    let mut store = sample_store();
    store.upsert(make_employee("A101", "Replacement", "B"));
    store.remove("A101");
    assert!(store.employees.iter().all(|e| e.pc_number != "A101"));
}

#[test]
fn test_upsert_is_idempotent() {
    let mut once = sample_store();
    once.upsert(make_employee("A101", "New", "B"));

    let mut twice = sample_store();
    twice.upsert(make_employee("A101", "New", "B"));
    twice.upsert(make_employee("A101", "New", "B"));

    assert_eq!(once.employees, twice.employees);
}

#[test]
fn test_upsert_never_duplicates_keys() {
    let mut store = sample_store();
    store.upsert(make_employee("A101", "One", "A"));
    store.upsert(make_employee("A101", "Two", "A"));
    store.upsert(make_employee("C303", "Three", "B"));

    let keys: HashSet<&str> = store.employees.iter().map(|e| e.pc_number.as_str()).collect();
    assert_eq!(keys.len(), store.employees.len(), "PC Numbers must be unique");
}

#[test]
fn test_upsert_then_case_insensitive_search() {
    // Scenario: upsert over an existing PC then search with folded case
    let mut store = sample_store();
    store.upsert(make_employee("A101", "New", "A"));

    let hits = store.filter_employees(Some("a101"), None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "New");
}

// =============================================================================
// Filter Identity and Stability
// =============================================================================

#[test]
fn test_unselected_employee_filter_is_identity() {
    let store = sample_store();
    assert_eq!(store.filter_employees(None, None), store.employees);
    assert_eq!(store.filter_employees(None, Some("All")), store.employees);
    assert_eq!(store.filter_employees(Some(""), Some("")), store.employees);
}

#[test]
fn test_filter_preserves_source_order() {
    let store = RosterStore {
        stations: vec![],
        employees: vec![
            make_employee("Z9", "Last", "A"),
            make_employee("A1", "First", "A"),
            make_employee("M5", "Middle", "B"),
        ],
    };
    let hits = store.filter_employees(None, Some("A"));
    let pcs: Vec<&str> = hits.iter().map(|e| e.pc_number.as_str()).collect();
    assert_eq!(pcs, ["Z9", "A1"], "stable filter, not a re-sort");
}

// =============================================================================
// Aggregation Conservation
// =============================================================================

#[test]
fn test_aggregation_sums_single_group() {
    let store = sample_store();
    let agg = store.aggregate_by_sub_division();
    assert_eq!(agg.len(), 1);
    assert_eq!(agg[0].sub_division, "X");
    assert_eq!(agg[0].sanctioned_quota, 15);
    assert_eq!(agg[0].actual_strength, 13);
    assert_eq!(agg[0].vacancies, 2);
}

// =============================================================================
// CSV Round-Trip
// =============================================================================

#[test]
fn test_csv_round_trip_with_delimiter_values() {
    let records = vec![
        make_employee("A101", "Kiran, Jr.", "A"),
        make_employee("B202", "quote \" inside", "B"),
    ];
    let bytes = report::to_csv(&records).unwrap();
    assert_eq!(parse_csv(&bytes), records);
}

#[test]
fn test_csv_round_trip_empty_and_single() {
    assert!(parse_csv(&report::to_csv(&[]).unwrap()).is_empty());

    let one = vec![make_employee("A101", "Kiran", "A")];
    assert_eq!(parse_csv(&report::to_csv(&one).unwrap()), one);
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    /// CSV reports reconstruct arbitrary record sets exactly.
    #[test]
    fn prop_csv_round_trip(rows in proptest::collection::vec(
        (".*", ".*", ".*", ".*", ".*"),
        0..8,
    )) {
        let records: Vec<EmployeeRecord> = rows
            .into_iter()
            .map(|(pc, name, station, date, attachment)| EmployeeRecord {
                pc_number: pc,
                name,
                station,
                date,
                attachment,
            })
            .collect();
        let bytes = report::to_csv(&records).unwrap();
        prop_assert_eq!(parse_csv(&bytes), records);
    }

    /// Group sums over all Sub-Divisions equal the sums over the whole file.
    #[test]
    fn prop_aggregation_conserves_totals(rows in proptest::collection::vec(
        ("[A-E]", 0u32..10_000, 0u32..10_000, -10_000i64..10_000),
        0..32,
    )) {
        let stations: Vec<StationRecord> = rows
            .into_iter()
            .enumerate()
            .map(|(i, (sub, quota, actual, vac))| make_station(&format!("S{i}"), &sub, quota, actual, vac))
            .collect();
        let store = RosterStore { stations: stations.clone(), employees: vec![] };
        let agg = store.aggregate_by_sub_division();

        let total_quota: u64 = stations.iter().map(|s| u64::from(s.sanctioned_quota)).sum();
        let total_actual: u64 = stations.iter().map(|s| u64::from(s.actual_strength)).sum();
        let total_vac: i64 = stations.iter().map(|s| s.vacancies).sum();

        prop_assert_eq!(agg.iter().map(|r| r.sanctioned_quota).sum::<u64>(), total_quota);
        prop_assert_eq!(agg.iter().map(|r| r.actual_strength).sum::<u64>(), total_actual);
        prop_assert_eq!(agg.iter().map(|r| r.vacancies).sum::<i64>(), total_vac);

        // One output row per distinct Sub-Division
        let distinct: HashSet<&str> = store.stations.iter().map(|s| s.sub_division.as_str()).collect();
        prop_assert_eq!(agg.len(), distinct.len());
    }

    /// Upserting the same record twice equals upserting it once.
    #[test]
    fn prop_upsert_idempotent(pc in "[A-Z][0-9]{1,4}", name in "[a-zA-Z ]{0,12}") {
        let record = make_employee(&pc, &name, "A");

        let mut once = sample_store();
        once.upsert(record.clone());

        let mut twice = sample_store();
        twice.upsert(record.clone());
        twice.upsert(record);

        prop_assert_eq!(once.employees, twice.employees);
    }

    /// The unselected station filter is the identity.
    #[test]
    fn prop_unselected_station_filter_is_identity(selector in prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("All".to_string())),
    ]) {
        let store = sample_store();
        let filter = StationFilter {
            station: selector.clone(),
            circle: selector.clone(),
            sub_division: selector,
        };
        prop_assert_eq!(store.filter_stations(&filter), store.stations);
    }
}
