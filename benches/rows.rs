use criterion::{Criterion, black_box, criterion_group, criterion_main};

use dialogue_scrape::core::sanitize::normalize_key;
use dialogue_scrape::specs::{dialogue::parse_dialogue, rows::parse_rows};

/// A synthetic NPC page roughly the size of a chatty NPC's table.
fn sample_page(rows: usize) -> String {
    let mut doc = String::from("<html><body><table class=\"wikitable\"><tr><th>Message</th><th>Count</th></tr>\n");
    for i in 0..rows {
        doc.push_str(&format!(
            "<tr><td><a href=\"/w/{i}\">Line number {i}</a>, don&#39;t you know?</td><td>{},{:03}</td></tr>\n",
            i % 7,
            i % 1000
        ));
    }
    doc.push_str("</table></body></html>");
    doc
}

fn bench_rows(c: &mut Criterion) {
    let doc = sample_page(2_000);

    c.bench_function("parse_rows_2k", |b| {
        b.iter(|| black_box(parse_rows(black_box(&doc))).map(|r| r.len()))
    });

    c.bench_function("parse_dialogue_2k", |b| {
        b.iter(|| parse_dialogue(black_box(&doc), "Bench", "bench://").map(|t| t.map(|t| t.total_chars)))
    });

    c.bench_function("normalize_key", |b| {
        b.iter(|| normalize_key(black_box("Well, well... What have we here? A real adventurer!")))
    });
}

criterion_group!(benches, bench_rows);
criterion_main!(benches);
