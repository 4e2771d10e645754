use criterion::{black_box, criterion_group, criterion_main, Criterion};

use normdup_core::{group, normalize, source::parse_records};

fn sample_document(rows: usize) -> String {
    let variants = ["A-1", "Ａ－１", "a ー 1", "B2", "ｂ２", "C 3"];
    let items: Vec<String> = (0..rows)
        .map(|i| {
            format!(
                r#"{{"id": {}, "code": "{}", "note": null}}"#,
                i,
                variants[i % variants.len()]
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_mixed_width", |b| {
        b.iter(|| normalize(black_box("Ｔｏｋｙｏ　ー　１２３ Ｓｔａｔｉｏｎ")))
    });
}

fn bench_group(c: &mut Criterion) {
    let records = match parse_records(&sample_document(10_000)) {
        Ok(records) => records,
        Err(e) => panic!("bench input should parse: {}", e),
    };
    c.bench_function("group_10k_records", |b| {
        b.iter(|| group(black_box(&records), black_box("code")))
    });
}

criterion_group!(benches, bench_normalize, bench_group);
criterion_main!(benches);
