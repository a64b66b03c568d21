use donner_analysis::closure::{ClosureDetector, ClosureReport, ClosureWindows, Direction};
use donner_analysis::pack::{self, ClosureKind};
use donner_analysis::vehicle_scope::VehicleScope;

// ---- Helpers ----

fn detect(section: &str) -> ClosureReport {
    let pack = pack::builtin().unwrap();
    ClosureDetector::new(&pack, ClosureWindows::default()).detect(section)
}

// ---- General closures ----

#[test]
fn undirected_closure_closes_the_road() {
    let report = detect("NORTHERN CALIFORNIA: I-80 IS CLOSED FROM APPLEGATE TO COLFAX DUE TO AN ACCIDENT.");
    assert!(report.summary.has_unscoped_full_closure);
    assert!(report.summary.is_full_closure());
    assert_eq!(report.findings.len(), 1);
    let finding = &report.findings[0];
    assert_eq!(finding.family, "closed-from");
    assert_eq!(finding.kind, ClosureKind::General);
    assert_eq!(finding.direction, Direction::Unspecified);
    assert!(finding.counted);
}

#[test]
fn every_general_family_is_detected() {
    for text in [
        "I-80 IS CLOSED AT DONNER SUMMIT",
        "I-80 IS CLOSED BETWEEN COLFAX AND TRUCKEE",
        "I-80 IS CLOSED DUE TO HEAVY SNOW",
    ] {
        assert!(detect(text).summary.has_unscoped_full_closure, "{text}");
    }
}

#[test]
fn direction_before_closure_makes_it_directional() {
    let report = detect("I-80 EASTBOUND IS CLOSED FROM COLFAX TO BAXTER DUE TO A SPINOUT");
    assert!(!report.summary.has_unscoped_full_closure);
    assert_eq!(report.findings[0].direction, Direction::Eastbound);
    assert!(!report.findings[0].counted);

    let report = detect("I-80 WESTBOUND   IS CLOSED AT DONNER LAKE");
    assert!(!report.summary.has_unscoped_full_closure);
    assert_eq!(report.findings[0].direction, Direction::Westbound);
}

#[test]
fn direction_outside_lookbehind_is_ignored() {
    let text = format!("EASTBOUND{}IS CLOSED AT DONNER SUMMIT", " ".repeat(100));
    let report = detect(&text);
    assert!(report.summary.has_unscoped_full_closure);
    assert_eq!(report.findings[0].direction, Direction::Unspecified);
}

#[test]
fn truck_wording_after_closure_scopes_it() {
    let report = detect("I-80 IS CLOSED AT DONNER SUMMIT TO ALL TRUCKS");
    assert!(!report.summary.has_unscoped_full_closure);
    assert_eq!(report.findings[0].scope, VehicleScope::TruckOnly);
    assert!(!report.findings[0].counted);
}

#[test]
fn truck_wording_beyond_scope_window_does_not_scope() {
    let text = format!(
        "I-80 IS CLOSED AT DONNER SUMMIT.{} TRUCKS ARE BEING SCREENED AT APPLEGATE",
        " ".repeat(250)
    );
    let report = detect(&text);
    assert!(report.summary.has_unscoped_full_closure);
    assert_eq!(report.findings[0].scope, VehicleScope::AllVehicles);
}

// ---- Both directions ----

#[test]
fn both_directions_is_unconditional() {
    for text in [
        "I-80 IS CLOSED IN BOTH DIRECTIONS AT DONNER SUMMIT",
        "I-80 IS CLOSED BOTH DIRECTIONS FOR ALL TRUCKS",
    ] {
        let report = detect(text);
        assert!(report.summary.has_unscoped_full_closure, "{text}");
        assert_eq!(report.findings[0].kind, ClosureKind::BothDirections);
    }
}

// ---- Directional phrases ----

#[test]
fn eastbound_phrase_sets_only_east() {
    let report = detect("I-80 IS CLOSED EASTBOUND AT COLFAX DUE TO A SPINOUT");
    assert!(report.summary.east_fully_closed);
    assert!(!report.summary.west_fully_closed);
    assert!(!report.summary.has_unscoped_full_closure);
    assert!(report.summary.single_direction_closed());
    assert!(!report.summary.is_full_closure());
}

#[test]
fn truck_only_directional_closure_sets_nothing() {
    let report = detect("I-80 IS CLOSED EASTBOUND TO ALL TRACTOR-SEMI-TRAILER COMBINATIONS NEAR DONNER.");
    assert!(!report.summary.east_fully_closed);
    assert!(!report.summary.any_direction_closed());
    assert_eq!(report.findings[0].direction, Direction::Eastbound);
    assert_eq!(report.findings[0].scope, VehicleScope::TruckOnly);
}

#[test]
fn both_directions_closed_separately_is_full_closure() {
    let report = detect(
        "I-80 IS CLOSED TO EASTBOUND TRAFFIC AT COLFAX. I-80 IS CLOSED TO WESTBOUND TRAFFIC AT TRUCKEE.",
    );
    assert!(report.summary.east_fully_closed);
    assert!(report.summary.west_fully_closed);
    assert!(report.summary.has_unscoped_full_closure);
    assert!(!report.summary.single_direction_closed());
}

#[test]
fn no_closure_phrase_means_empty_report() {
    let report = detect("CHAINS ARE REQUIRED ON ALL VEHICLES NEAR BAXTER.");
    assert_eq!(report, ClosureReport::default());
}

#[test]
fn custom_windows_are_honoured() {
    let pack = pack::builtin().unwrap();
    let windows = ClosureWindows {
        scope_window: 30,
        ..ClosureWindows::default()
    };
    let detector = ClosureDetector::new(&pack, windows);
    // TRUCKS sits 38 bytes after the phrase, outside a 30-byte scope window.
    let report = detector.detect("I-80 IS CLOSED AT THE SUMMIT RIGHT NOW FOR TRUCKS");
    assert!(report.summary.has_unscoped_full_closure);
}
