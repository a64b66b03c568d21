//! Advisory engine benchmarks.
//!
//! A full Caltrans I-80 page is roughly 4-8 KB of plain text; one analysis
//! per request should stay well under a millisecond.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use donner_analysis::analyzer::AdvisoryAnalyzer;
use donner_analysis::pack;

fn bulletin(repeat: usize) -> String {
    let mut doc = String::from(
        "[IN THE SAN FRANCISCO BAY AREA] I-80 IS CLOSED FROM THE BAY BRIDGE TO TREASURE ISLAND DUE TO CONSTRUCTION. ",
    );
    doc.push_str("NORTHERN CALIFORNIA & SIERRA NEVADA: ");
    for i in 0..repeat {
        doc.push_str(&format!(
            "CHAINS ARE REQUIRED ON ALL VEHICLES EXCEPT 4-WHEEL-DRIVE VEHICLES WITH SNOW TIRES ON ALL 4 WHEELS \
             FROM KINGVALE TO {i} MI WEST OF THE DONNER LAKE INTERCHANGE. ALL EASTBOUND TRUCKS ARE BEING SCREENED \
             AT APPLEGATE. I-80 IS CLOSED EASTBOUND TO ALL TRACTOR-SEMI-TRAILER COMBINATIONS NEAR COLFAX. "
        ));
    }
    doc.push_str("BUSINESS 80 IS OPEN.");
    doc
}

fn bench_analyze_small(c: &mut Criterion) {
    let analyzer = AdvisoryAnalyzer::with_defaults().unwrap();
    let doc = bulletin(2);
    c.bench_function("analyze_text_1kb", |b| {
        b.iter(|| analyzer.analyze_text(black_box(&doc)))
    });
}

fn bench_analyze_page(c: &mut Criterion) {
    let analyzer = AdvisoryAnalyzer::with_defaults().unwrap();
    let doc = bulletin(20);
    c.bench_function("analyze_text_8kb", |b| {
        b.iter(|| analyzer.analyze_text(black_box(&doc)))
    });
    c.bench_function("analyze_with_trace_8kb", |b| {
        b.iter(|| analyzer.analyze_with_trace(black_box(&doc)))
    });
}

fn bench_pack_compile(c: &mut Criterion) {
    c.bench_function("compile_builtin_pack", |b| b.iter(|| pack::builtin().unwrap()));
}

criterion_group!(benches, bench_analyze_small, bench_analyze_page, bench_pack_compile);
criterion_main!(benches);
