use donner_analysis::closure::ClosureSummary;
use donner_analysis::pack;
use donner_analysis::scoring::{ScoreReport, ScoreWindows, SignalScorer};
use donner_analysis::vehicle_scope::VehicleScope;
use donner_core::types::Scores;

// ---- Helpers ----

fn score(section: &str) -> ScoreReport {
    score_with(section, ClosureSummary::default())
}

fn score_with(section: &str, closures: ClosureSummary) -> ScoreReport {
    let pack = pack::builtin().unwrap();
    SignalScorer::new(&pack, ScoreWindows::default()).score(section, &closures)
}

fn ids(hits: &[donner_analysis::scoring::SignalHit]) -> Vec<&str> {
    hits.iter().map(|h| h.id.as_str()).collect()
}

// ---- Restriction signals ----

#[test]
fn chains_on_all_vehicles_scores_both_signals() {
    let report = score("CHAINS ARE REQUIRED ON ALL VEHICLES NEAR BAXTER. NO TRUCKS OF ANY KIND ALLOWED.");
    assert_eq!(report.scores, Scores::new(18, 0));
    assert_eq!(ids(&report.counted), vec!["chains-all-vehicles", "chains-required"]);
    assert!(report.skipped.is_empty());
}

#[test]
fn chain_control_levels_add_up() {
    let report = score("CHAIN CONTROLS R-2 IN EFFECT NEAR KINGVALE");
    assert_eq!(report.scores.restriction, 16);
    assert_eq!(ids(&report.counted), vec!["chain-control", "chain-control-r2"]);

    assert_eq!(score("R3 CONDITIONS").scores.restriction, 10);
    assert_eq!(score("R 1 IN EFFECT").scores.restriction, 6);
}

#[test]
fn every_occurrence_counts() {
    let report = score("SPINOUTS NEAR COLFAX. SPINOUTS NEAR BAXTER.");
    assert_eq!(report.scores.restriction, 10);
    assert_eq!(report.counted.len(), 2);
}

// ---- Truck filtering ----

#[test]
fn truck_statement_is_skipped() {
    let report = score("ALL TRUCKS: CHAINS ARE REQUIRED ON THE GRADE");
    assert_eq!(report.scores.restriction, 0);
    assert_eq!(ids(&report.skipped), vec!["chains-required"]);
    assert_eq!(report.skipped[0].scope, VehicleScope::TruckOnly);
}

#[test]
fn truck_wording_in_previous_sentence_does_not_leak() {
    let report = score("NO TRUCKS ALLOWED. CHAINS ARE REQUIRED NEAR BAXTER.");
    assert_eq!(report.scores.restriction, 8);
    assert!(report.skipped.is_empty());
}

#[test]
fn truck_sentence_right_before_all_vehicle_chains_does_not_leak() {
    let report = score(
        "ALL WESTBOUND TRUCKS ARE BEING SCREENED AT APPLEGATE. CHAINS ARE REQUIRED ON ALL VEHICLES NEAR BAXTER.",
    );
    assert_eq!(report.scores.restriction, 18);
    assert_eq!(ids(&report.counted), vec!["chains-all-vehicles", "chains-required"]);
    assert!(report.skipped.is_empty());
}

#[test]
fn decimal_mileage_keeps_truck_wording_in_the_statement() {
    let report = score("CHAINS ARE REQUIRED FROM 3.4 MI EAST OF COLFAX FOR ALL TRUCKS");
    assert_eq!(report.scores.restriction, 0);
    assert_eq!(ids(&report.skipped), vec!["chains-required"]);

    let report = score("CHAINS ARE REQUIRED FROM 3.4 MI EAST OF COLFAX. TRUCKS ARE SCREENED AT APPLEGATE.");
    assert_eq!(report.scores.restriction, 8);
}

#[test]
fn truck_filter_is_applied_per_occurrence() {
    let report = score("SPINOUTS NEAR COLFAX. TRUCKS: SPINOUTS NEAR BAXTER.");
    assert_eq!(report.scores.restriction, 5);
    assert_eq!(report.counted.len(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.counted[0].offset, 0);
    assert_eq!(report.skipped[0].offset, 30);
}

#[test]
fn truck_wording_after_statement_end_does_not_leak() {
    let report = score("CHAINS ARE REQUIRED NEAR BAXTER. SEMI TRAILERS ARE SCREENED AT APPLEGATE.");
    assert_eq!(report.scores.restriction, 8);
}

// ---- Open signals ----

#[test]
fn open_signals_are_summed() {
    let report = score("ALL LANES OPEN, NO TRAFFIC RESTRICTIONS");
    assert_eq!(report.scores, Scores::new(0, 16));
    assert_eq!(report.open_hits.len(), 2);
}

#[test]
fn open_signals_ignore_truck_wording() {
    assert_eq!(score("NO TRAFFIC RESTRICTIONS FOR TRUCKS").scores.open, 10);
    assert_eq!(score("ROAD IS OPEN AND CLEAR").scores.open, 8);
}

// ---- Directional bonus ----

#[test]
fn single_direction_closure_adds_bonus() {
    let east = ClosureSummary {
        east_fully_closed: true,
        ..ClosureSummary::default()
    };
    let report = score_with("I-80 NEAR COLFAX", east);
    assert_eq!(report.directional_bonus, 15);
    assert_eq!(report.scores.restriction, 15);
}

#[test]
fn no_bonus_for_both_or_neither_direction() {
    let both = ClosureSummary {
        east_fully_closed: true,
        west_fully_closed: true,
        has_unscoped_full_closure: true,
    };
    assert_eq!(score_with("I-80 NEAR COLFAX", both).directional_bonus, 0);
    assert_eq!(score("I-80 NEAR COLFAX").directional_bonus, 0);
}

#[test]
fn empty_section_scores_zero() {
    assert_eq!(score("").scores, Scores::default());
}

#[test]
fn non_ascii_context_does_not_panic() {
    let report = score("ÉÉÉ — CHAINS ARE REQUIRED — ÉÉÉ. TRUCKS ÀÀÀ");
    assert_eq!(report.scores.restriction, 8);
}
