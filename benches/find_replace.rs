use criterion::{black_box, criterion_group, criterion_main, Criterion};
use text_tools::extract::EmailExtractor;
use text_tools::replace::{apply_rules, FindReplacePair};

fn create_test_text(lines: usize) -> String {
    let words = [
        "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    ];

    (0..lines)
        .map(|i| {
            format!(
                "{} line {} contact user{}@example.com (v1.{})",
                words[i % words.len()],
                i,
                i % 97,
                i % 10
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn create_rules(count: usize) -> Vec<FindReplacePair> {
    (0..count)
        .map(|i| FindReplacePair::new(i as u64, format!("v1.{}", i), format!("v2.{}", i)))
        .collect()
}

fn benchmark_apply_rules(c: &mut Criterion) {
    let text_1k = create_test_text(1_000);
    let text_10k = create_test_text(10_000);

    let mut group = c.benchmark_group("find_replace");

    group.bench_function("1k_lines_1_rule", |b| {
        let rules = create_rules(1);
        b.iter(|| {
            let result = apply_rules(black_box(&text_1k), &rules);
            assert!(result.is_ok());
        });
    });

    group.bench_function("1k_lines_10_rules", |b| {
        let rules = create_rules(10);
        b.iter(|| {
            let result = apply_rules(black_box(&text_1k), &rules);
            assert!(result.is_ok());
        });
    });

    group.bench_function("10k_lines_10_rules", |b| {
        let rules = create_rules(10);
        b.iter(|| {
            let result = apply_rules(black_box(&text_10k), &rules);
            assert!(result.is_ok());
        });
    });

    group.finish();
}

fn benchmark_email_extraction(c: &mut Criterion) {
    let text_10k = create_test_text(10_000);

    c.bench_function("extract_emails_10k_lines", |b| {
        b.iter(|| {
            let report = EmailExtractor::extract(black_box(&text_10k));
            assert_eq!(report.unique_count(), 97);
        });
    });
}

criterion_group!(benches, benchmark_apply_rules, benchmark_email_extraction);
criterion_main!(benches);
