// benches/codec_bench.rs
//! Benchmarks for decoding and encoding API payloads.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use notion_typed::{decode_block, decode_database, decode_page, Block, Filter, FilterCondition};
use notion_typed::{NumberCondition, QueryDatabaseRequest, RichText, TextCondition};
use serde_json::json;

fn create_sample_block_json(text_length: usize) -> serde_json::Value {
    let text = "a".repeat(text_length);
    json!({
        "object": "block",
        "id": "12345678-1234-1234-1234-123456789abc",
        "created_time": "2024-01-01T00:00:00.000Z",
        "last_edited_time": "2024-01-01T00:00:00.000Z",
        "has_children": false,
        "type": "paragraph",
        "paragraph": {
            "text": [{
                "type": "text",
                "text": {"content": text},
                "annotations": {
                    "bold": false,
                    "italic": false,
                    "strikethrough": false,
                    "underline": false,
                    "code": false,
                    "color": "default"
                },
                "plain_text": text
            }]
        }
    })
}

fn create_sample_database_json(num_properties: usize) -> serde_json::Value {
    let mut properties = serde_json::Map::new();

    for i in 0..num_properties {
        let name = format!("Property_{}", i);
        let schema = match i % 4 {
            0 => json!({"id": format!("prop_{}", i), "type": "title", "title": {}}),
            1 => json!({
                "id": format!("prop_{}", i),
                "type": "number",
                "number": {"format": "number"}
            }),
            2 => json!({
                "id": format!("prop_{}", i),
                "type": "select",
                "select": {"options": [
                    {"id": "opt1", "name": "Option 1", "color": "red"},
                    {"id": "opt2", "name": "Option 2", "color": "blue"}
                ]}
            }),
            _ => json!({"id": format!("prop_{}", i), "type": "checkbox", "checkbox": {}}),
        };
        properties.insert(name, schema);
    }

    json!({
        "object": "database",
        "id": "12345678-1234-1234-1234-123456789abc",
        "title": [{"type": "text", "text": {"content": "Test Database"}, "plain_text": "Test Database"}],
        "properties": properties
    })
}

fn create_sample_page_json(num_properties: usize) -> serde_json::Value {
    let mut properties = serde_json::Map::new();
    properties.insert(
        "Name".to_string(),
        json!({"id": "title", "type": "title", "title": [{"type": "text", "text": {"content": "Row"}}]}),
    );

    for i in 1..num_properties {
        let value = match i % 3 {
            0 => json!({"id": format!("p{}", i), "type": "number", "number": i}),
            1 => json!({"id": format!("p{}", i), "type": "checkbox", "checkbox": true}),
            _ => json!({
                "id": format!("p{}", i),
                "type": "multi_select",
                "multi_select": [{"name": "Tag", "color": "purple"}]
            }),
        };
        properties.insert(format!("Property_{}", i), value);
    }

    json!({
        "object": "page",
        "id": "5678",
        "parent": {"type": "database_id", "database_id": "38923"},
        "properties": properties
    })
}

fn bench_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoding");

    for (size, name) in [(100, "small"), (1000, "medium"), (10000, "large")] {
        let json = create_sample_block_json(size);
        group.bench_with_input(BenchmarkId::new("decode_block", name), &json, |b, json| {
            b.iter(|| decode_block(black_box(json.clone())));
        });
    }

    for (count, name) in [(10, "small"), (50, "medium"), (100, "large")] {
        let database = create_sample_database_json(count);
        group.bench_with_input(
            BenchmarkId::new("decode_database", name),
            &database,
            |b, json| {
                b.iter(|| decode_database(black_box(json.clone())));
            },
        );

        let page = create_sample_page_json(count);
        group.bench_with_input(BenchmarkId::new("decode_page", name), &page, |b, json| {
            b.iter(|| decode_page(black_box(json.clone())));
        });
    }

    group.finish();
}

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    let blocks: Vec<Block> = (0..100)
        .map(|i| Block::paragraph(vec![RichText::text(format!("Paragraph {}", i))]))
        .collect();
    group.bench_function("encode_append_children", |b| {
        b.iter(|| serde_json::to_value(black_box(&blocks)));
    });

    let query = QueryDatabaseRequest::new().filter(Filter::and(vec![
        Filter::property(
            "Name",
            FilterCondition::Title(TextCondition::Contains("Jam".into())),
        ),
        Filter::property(
            "Count",
            FilterCondition::Number(NumberCondition::GreaterThan(10.into())),
        ),
    ]));
    group.bench_function("encode_query", |b| {
        b.iter(|| serde_json::to_string(black_box(&query)));
    });

    group.finish();
}

criterion_group!(benches, bench_decoding, bench_encoding);
criterion_main!(benches);
