// benches/transcript.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use transcript_packer::{
    core::html::Tokens,
    specs::transcript,
};

// A long synthetic episode: dialogue, actions and a nested song per scene.
fn load_sample() -> String {
    let mut doc = String::from("<html><body><div class=\"mw-parser-output\"><dl>\n");
    for i in 0..400 {
        doc.push_str(&format!("<dd><b>Twilight Sparkle</b>: Line {i}, with &quot;quotes&quot;.</dd>\n"));
        doc.push_str("<dd>[Rarity: gasps]</dd>\n");
        doc.push_str("<dd><b>Pinkie Pie</b> <i>giggles</i>: Ooh!</dd>\n");
        if i % 20 == 0 {
            doc.push_str("<dd><b>[Verse: Pinkie Pie]</b> <dd>La la la</dd><dd>La la lee</dd></dd>\n");
        }
    }
    doc.push_str("</dl></div></body></html>");
    doc
}

fn bench_transcript(c: &mut Criterion) {
    let doc = load_sample();

    c.bench_function("tokenize", |b| {
        b.iter(|| black_box(Tokens::new(black_box(&doc)).count()))
    });

    c.bench_function("parse_raw", |b| {
        b.iter(|| {
            let lines = transcript::parse_raw(black_box(&doc)).unwrap();
            black_box(lines.len())
        })
    });

    c.bench_function("parse", |b| {
        b.iter(|| {
            let lines = transcript::parse(black_box(&doc)).unwrap();
            black_box(lines.len())
        })
    });
}

criterion_group!(benches, bench_transcript);
criterion_main!(benches);
