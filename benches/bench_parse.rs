use std::time::Duration;

use benchdash::parse::parse_suite_artifact;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const SAMPLE_SIZE: usize = 20;
const WARM_UP: Duration = Duration::from_millis(300);
const MEASURE: Duration = Duration::from_millis(500);

fn artifact_content(tests: usize) -> String {
    let mut content = String::new();
    for idx in 0..tests {
        content.push_str(&format!("Benchmarking case_{idx}\n"));
        content.push_str(&format!(
            "case_{idx} time: [{}.1 \u{b5}s {}.5 \u{b5}s {}.9 \u{b5}s]\n",
            idx + 1,
            idx + 1,
            idx + 1
        ));
        content.push_str("Found 2 outliers among 100 measurements\n");
    }
    content
}

fn bench_parse_artifact(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_artifact");
    group
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASURE);
    for tests in [10usize, 100, 1_000] {
        let content = artifact_content(tests);
        group.bench_with_input(BenchmarkId::from_parameter(tests), &content, |b, content| {
            b.iter(|| parse_suite_artifact(content));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse_artifact);
criterion_main!(benches);
