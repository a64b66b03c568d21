use donner_analysis::pack::{self, loader};
use donner_analysis::section::SectionExtractor;

// ---- Helpers ----

fn extractor() -> SectionExtractor {
    let pack = pack::builtin().unwrap();
    SectionExtractor::new(&pack.region, 20)
}

// ---- Anchor handling ----

#[test]
fn missing_anchor_returns_whole_document() {
    let doc = "I-80 CHAINS ARE REQUIRED NEAR BAXTER. BUSINESS 80 IS OPEN.";
    let bounds = extractor().locate(doc);
    assert!(!bounds.anchor_found);
    assert_eq!(bounds.range(), 0..doc.len());
    assert_eq!(extractor().extract(doc), doc);
}

#[test]
fn empty_document_is_empty_section() {
    assert_eq!(extractor().extract(""), "");
}

#[test]
fn section_runs_from_anchor_to_terminator() {
    let doc = "SOUTHERN CALIFORNIA: SR-14 IS OPEN. NORTHERN CALIFORNIA: I-80 CHAINS REQUIRED NEAR BAXTER. BUSINESS 80 IS OPEN";
    let section = extractor().extract(doc);
    assert_eq!(section, "NORTHERN CALIFORNIA: I-80 CHAINS REQUIRED NEAR BAXTER. ");
}

#[test]
fn nearest_terminator_wins() {
    let doc = "NORTHERN CALIFORNIA: I-80 IS CLOSED AT DONNER [IN THE SIERRA NEVADA] BUSINESS 80 IS OPEN";
    let section = extractor().extract(doc);
    assert_eq!(section, "NORTHERN CALIFORNIA: I-80 IS CLOSED AT DONNER ");

    let doc = "NORTHERN CALIFORNIA: I-80 IS OPEN. BUSINESS 80 IS OPEN [IN THE CENTRAL VALLEY]";
    let section = extractor().extract(doc);
    assert_eq!(section, "NORTHERN CALIFORNIA: I-80 IS OPEN. ");
}

#[test]
fn terminator_too_close_to_anchor_is_ignored() {
    // "[IN THE" starts 19 bytes after the anchor, inside the minimum offset.
    let doc = "NORTHERN CALIFORNIA[IN THE SIERRA] CHAINS ARE REQUIRED";
    let bounds = extractor().locate(doc);
    assert!(bounds.anchor_found);
    assert_eq!(bounds.range(), 0..doc.len());
}

#[test]
fn no_terminator_runs_to_end() {
    let doc = "HEADER TEXT NORTHERN CALIFORNIA: I-80 IS OPEN";
    let section = extractor().extract(doc);
    assert_eq!(section, "NORTHERN CALIFORNIA: I-80 IS OPEN");
}

#[test]
fn anchors_match_case_insensitively() {
    let doc = "northern california: chains required. business 80 is open";
    assert_eq!(extractor().extract(doc), "northern california: chains required. ");
}

#[test]
fn terminator_before_anchor_does_not_end_section() {
    let doc = "BUSINESS 80 IS OPEN. NORTHERN CALIFORNIA: I-80 CHAINS REQUIRED";
    assert_eq!(extractor().extract(doc), "NORTHERN CALIFORNIA: I-80 CHAINS REQUIRED");
}

#[test]
fn multibyte_text_around_anchor_is_safe() {
    let doc = "ÉTAT — NORTHERN CALIFORNIA: ROUTE ÉLEVÉE BUSINESS 80";
    let section = extractor().extract(doc);
    assert!(section.starts_with("NORTHERN CALIFORNIA"));
    assert!(!section.contains("BUSINESS 80"));
}

// ---- Packs without a region ----

#[test]
fn pack_without_anchor_scores_whole_document() {
    let pack = loader::load_from_str(
        r#"
[pack]
name = "no-region"

[[closure]]
id = "closed"
kind = "general"
pattern = 'IS\s+CLOSED\s+AT'

[[truck_indicators]]
id = "truck"
pattern = '\bTRUCKS?\b'

[[restriction]]
id = "chains"
pattern = 'CHAINS'
weight = 4

[[open]]
id = "open"
pattern = 'ROAD\s+OPEN'
weight = 5
"#,
    )
    .unwrap();
    let extractor = SectionExtractor::new(&pack.region, 20);
    let doc = "NORTHERN CALIFORNIA: CHAINS. BUSINESS 80";
    let bounds = extractor.locate(doc);
    assert!(!bounds.anchor_found);
    assert_eq!(extractor.extract(doc), doc);
}
