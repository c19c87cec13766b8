use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use itemset_factory::encoder::TransactionEncoder;

const COLORS: [&str; 5] = ["red", "green", "blue", "black", "white"];

/// A synthetic mixed-type batch: one continuous, one categorical, and one
/// boolean-coded column, with a sprinkling of missing values.
fn make_batch(rows: usize) -> RecordBatch {
    let schema = Arc::new(Schema::new(vec![
        Field::new("age", DataType::Float64, true),
        Field::new("color", DataType::Utf8, true),
        Field::new("member", DataType::Int64, true),
    ]));
    let age: ArrayRef = Arc::new(Float64Array::from(
        (0..rows)
            .map(|i| {
                if i % 17 == 0 {
                    None
                } else {
                    Some((i % 97) as f64 + 0.5)
                }
            })
            .collect::<Vec<_>>(),
    ));
    let color: ArrayRef = Arc::new(StringArray::from(
        (0..rows)
            .map(|i| {
                if i % 23 == 0 {
                    None
                } else {
                    Some(COLORS[i % COLORS.len()])
                }
            })
            .collect::<Vec<_>>(),
    ));
    let member: ArrayRef = Arc::new(Int64Array::from(
        (0..rows)
            .map(|i| {
                if i % 31 == 0 {
                    None
                } else {
                    Some((i % 2) as i64)
                }
            })
            .collect::<Vec<_>>(),
    ));
    RecordBatch::try_new(schema, vec![age, color, member]).unwrap()
}

fn bench_encode_batch(c: &mut Criterion) {
    let encoder = TransactionEncoder::with_defaults();
    for rows in [1_000, 10_000, 100_000] {
        let batch = make_batch(rows);
        c.bench_function(&format!("encode_batch_{}_rows_mixed", rows), |b| {
            b.iter(|| encoder.encode_batch(black_box(&batch)).unwrap())
        });
    }
}

criterion_group!(benches, bench_encode_batch);
criterion_main!(benches);
