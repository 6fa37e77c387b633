// Criterion benchmarks for Uni Finder

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use uni_finder::core::{format_matches, matches_major};
use uni_finder::models::{GpaRequirement, MatchQuery, UniversityRecord};
use uni_finder::{Dataset, Matcher};

const MAJORS: [&str; 6] = [
    "Computer Science, Engineering",
    "Business, Finance, Marketing",
    "Biology, Chemistry, Nursing",
    "Psychology, Sociology",
    "Architecture, Design",
    "Economics, Political Science",
];

fn create_record(id: usize) -> UniversityRecord {
    let gpa_requirement = if id % 7 == 0 {
        GpaRequirement::Any
    } else {
        GpaRequirement::Minimum(2.5 + (id % 15) as f64 * 0.1)
    };

    UniversityRecord {
        name: format!("University {}", id),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        majors: MAJORS[id % MAJORS.len()].to_string(),
        gpa_display: "3.0".to_string(),
        gpa_requirement,
        sat_requirement: "1200".to_string(),
        english_proficiency: "IELTS 6.5".to_string(),
        institution_type: if id % 2 == 0 { "Public" } else { "Private" }.to_string(),
    }
}

fn create_dataset(size: usize) -> Dataset {
    Dataset::from_records((0..size).map(create_record).collect())
}

fn bench_major_filter(c: &mut Criterion) {
    let record = create_record(1);
    c.bench_function("matches_major", |b| {
        b.iter(|| matches_major(black_box(&record), black_box("finance")));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::default();
    let query = MatchQuery {
        major: "Biology".to_string(),
        grade_12_gpa: 3.4,
    };

    let mut group = c.benchmark_group("matching");

    for size in [100, 1000, 10_000].iter() {
        let dataset = create_dataset(*size);

        group.bench_with_input(BenchmarkId::new("find_matches", size), size, |b, _| {
            b.iter(|| matcher.find_matches(black_box(&dataset), black_box(&query)));
        });

        // Rare major: forces a full scan
        let rare = MatchQuery {
            major: "Astrophysics".to_string(),
            grade_12_gpa: 4.0,
        };
        group.bench_with_input(BenchmarkId::new("full_scan_no_match", size), size, |b, _| {
            b.iter(|| matcher.find_matches(black_box(&dataset), black_box(&rare)));
        });
    }

    group.finish();
}

fn bench_presenter(c: &mut Criterion) {
    let dataset = create_dataset(100);
    let result = Matcher::default().find_matches(
        &dataset,
        &MatchQuery {
            major: String::new(),
            grade_12_gpa: 4.0,
        },
    );

    c.bench_function("format_matches", |b| {
        b.iter(|| format_matches(black_box(&result)));
    });
}

criterion_group!(benches, bench_major_filter, bench_matching, bench_presenter);

criterion_main!(benches);
