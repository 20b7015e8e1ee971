use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use swipedeck::{
    CategoryInfo, CategoryKey, Content, Direction, Item, SessionController, SessionOptions,
    SessionPhase, TallyMode,
};

const CATEGORIES: [&str; 4] = ["cosmicChill", "mainCharacter", "chaoticGood", "softExistential"];

/// Synthetic deck with N items, each tagged with one or two categories
fn generate_content(num_items: u32) -> Content {
    let items = (1..=num_items)
        .map(|id| {
            let first = CATEGORIES[id as usize % CATEGORIES.len()];
            let second = CATEGORIES[(id as usize / 3) % CATEGORIES.len()];
            Item::new(id, format!("Statement {}", id)).with_tags([first, second])
        })
        .collect();
    let categories = CATEGORIES
        .iter()
        .map(|key| {
            let info = CategoryInfo { name: key.to_string(), description: String::new() };
            (CategoryKey::new(*key), info)
        })
        .collect();
    let mut content = Content { items, categories };
    content.validate().unwrap();
    content
}

fn play(content: &Content, mode: TallyMode) -> usize {
    let options = SessionOptions { tally_mode: mode, ..SessionOptions::default() };
    let mut session = SessionController::from_content(content.clone(), options);
    session.start();

    let mut i = 0;
    while session.phase() == SessionPhase::InProgress {
        session.drag(if i % 3 == 0 { -120.0 } else { 120.0 });
        session.release(if i % 3 == 0 { -220.0 } else { 220.0 });
        i += 1;
    }
    let _ = session.results().map(|result| result.title());
    session.committed()
}

fn bench_playthrough(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_playthrough");

    for size in [10, 1_000, 10_000].iter() {
        let content = generate_content(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("binary", size), size, |b, _| {
            b.iter(|| play(black_box(&content), TallyMode::Binary));
        });
        group.bench_with_input(BenchmarkId::new("categorical", size), size, |b, _| {
            b.iter(|| play(black_box(&content), TallyMode::Categorical));
        });
    }

    group.finish();
}

fn bench_single_commit(c: &mut Criterion) {
    let content = generate_content(2);

    c.bench_function("commit_swipe", |b| {
        b.iter(|| {
            let mut session =
                SessionController::from_content(content.clone(), SessionOptions::default());
            session.start();
            session.set_direction(black_box(Direction::Right));
            session.commit_swipe()
        });
    });
}

criterion_group!(benches, bench_playthrough, bench_single_commit);
criterion_main!(benches);
