use asma_data::transform_document;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};

fn synthetic_export(entries: usize) -> Value {
    let data: Vec<Value> = (0..entries)
        .map(|i| {
            if i % 10 == 0 {
                // every tenth entry is missing its meaning
                json!({ "name": format!("اسم {}", i), "transliteration": format!("Name {}", i) })
            } else {
                json!({
                    "name": format!("اسم {}", i),
                    "transliteration": format!("Name {}", i),
                    "number": i,
                    "en": { "meaning": format!("Meaning {}", i) }
                })
            }
        })
        .collect();

    json!({ "code": 200, "status": "OK", "data": data })
}

fn bench_transform(c: &mut Criterion) {
    let small = synthetic_export(99);
    let large = synthetic_export(10_000);

    c.bench_function("transform_99", |b| {
        b.iter(|| transform_document(black_box(&small)))
    });

    c.bench_function("transform_10k", |b| {
        b.iter(|| transform_document(black_box(&large)))
    });

    c.bench_function("canonical_json_10k", |b| {
        let (dataset, _) = transform_document(&large);
        b.iter(|| dataset.to_canonical_json())
    });
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
