use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cipher_arena::economy::payout::PayoutTable;
use cipher_arena::game::bot::all_codes;
use cipher_arena::game::evaluate::evaluate;
use cipher_arena::{generate_seeded_secret, EnvironmentalConfig};

fn bench_evaluate(c: &mut Criterion) {
    let secret = generate_seeded_secret(42);
    let codes = all_codes();

    c.bench_function("evaluate_all_codes", |b| {
        b.iter(|| {
            for guess in &codes {
                black_box(evaluate(secret.as_ref(), guess.as_ref()).ok());
            }
        })
    });
}

fn bench_tables(c: &mut Criterion) {
    c.bench_function("payout_table_37", |b| b.iter(|| PayoutTable::for_field(black_box(37))));
    let at = Utc::now();
    c.bench_function("environment_round_42", |b| {
        b.iter(|| EnvironmentalConfig::generate(black_box("round-42"), 6, at))
    });
}

criterion_group!(benches, bench_evaluate, bench_tables);
criterion_main!(benches);
