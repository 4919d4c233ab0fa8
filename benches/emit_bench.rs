// benches/emit_bench.rs
//! Benchmarks for payload emission.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use notion_blocks::{
    emit_blocks, emit_blocks_parallel, Block, ChildrenBatch, ColumnList, ContentUnit, Divider,
    EmitPayload, Image, KeyedTable, NumericTable, RichText, TableRow, TextKind,
};
use serde_json::Number;

fn create_sample_block(i: usize, parent: &str) -> Block {
    let text = RichText::new(
        TextKind::Paragraph,
        format!("text_{}", i),
        parent,
        "a".repeat(64),
    );
    let table = KeyedTable::new(
        format!("table_{}", i),
        parent,
        (0..8)
            .map(|row| TableRow::new([("Name", format!("row {}", row)), ("Value", row.to_string())]))
            .collect(),
    );
    let columns = ColumnList::new(
        format!("columns_{}", i),
        parent,
        vec![
            Image::new(format!("image_{}", i), parent, "https://img.example/a.png").into(),
            Divider::new(format!("divider_{}", i), parent).into(),
        ],
    );
    Block::new(vec![text.into(), table.into(), columns.into()])
}

fn create_blocks(count: usize) -> Vec<Block> {
    (0..count)
        .map(|i| create_sample_block(i, &format!("page_{}", i % 4)))
        .collect()
}

fn bench_single_units(c: &mut Criterion) {
    let mut group = c.benchmark_group("unit_emission");

    let callout: ContentUnit = RichText::new(TextKind::Callout, "c", "p", "Heads up")
        .with_link("https://example.com")
        .into();
    group.bench_function("callout", |b| b.iter(|| black_box(&callout).emit()));

    for rows in [10, 100, 1000] {
        let table = NumericTable::new(
            "n",
            "p",
            (0..rows)
                .map(|r| (0..6).map(|c| Number::from(r * c - 3)).collect())
                .collect(),
        );
        group.bench_with_input(BenchmarkId::new("numeric_table", rows), &table, |b, t| {
            b.iter(|| black_box(t).emit())
        });
    }

    group.finish();
}

fn bench_block_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("block_batches");

    for (count, name) in [(10, "small"), (100, "medium"), (1000, "large")] {
        let blocks = create_blocks(count);

        group.bench_with_input(BenchmarkId::new("sequential", name), &blocks, |b, blocks| {
            b.iter(|| emit_blocks(black_box(blocks)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", name), &blocks, |b, blocks| {
            b.iter(|| emit_blocks_parallel(black_box(blocks)))
        });

        let batch = ChildrenBatch::from_blocks(blocks);
        group.bench_with_input(BenchmarkId::new("request_bodies", name), &batch, |b, batch| {
            b.iter(|| black_box(batch).request_bodies(false))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_units, bench_block_batches);
criterion_main!(benches);
