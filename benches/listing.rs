// benches/listing.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use airdrop_registry::{airdrop::NewAirdrop, specs::airdrops::parse_active, AirdropStore};

fn filled_store(n: u32) -> AirdropStore {
    let store = AirdropStore::new();
    for i in 0..n {
        let input = NewAirdrop {
            name: Some(format!("Airdrop {i}")),
            claim_deadline: Some(format!("2025-{:02}-{:02}", i % 12 + 1, i % 28 + 1)),
        };
        store.create(input.validate().expect("valid bench row")).expect("create");
    }
    store
}

fn sample_page(cards: usize) -> String {
    let mut doc = String::from("<html><body>");
    for i in 0..cards {
        doc.push_str(&format!(
            r#"<div class="airdrop-card"><h2 class="airdrop-title">Drop {i}</h2>
               <span class="deadline">2025-06-{:02}</span>
               <div class="requirement">Hold</div><div class="reward">{i} TKN</div></div>"#,
            i % 28 + 1
        ));
    }
    doc.push_str("</body></html>");
    doc
}

fn bench_listing(c: &mut Criterion) {
    let store = filled_store(1_000);
    c.bench_function("list_1000_display", |b| {
        b.iter(|| black_box(store.list().expect("list").len()))
    });

    let page = sample_page(200);
    c.bench_function("parse_200_cards", |b| {
        b.iter(|| black_box(parse_active(black_box(&page)).expect("parse").len()))
    });
}

criterion_group!(benches, bench_listing);
criterion_main!(benches);
