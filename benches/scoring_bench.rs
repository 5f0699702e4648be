use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use strikeline::play::GameState;
use strikeline::scoring::{running_totals, Frame, Game, GameMode};
use strikeline::stats::calculate_player_stats;

const LINES: [&str; 4] = [
    "X X X X X X X X X X X X",
    "X 7.10 / 9 - 8.10 / X X 2.4 - 10 / 6 - X 3.4 -",
    "10 / 10 / 10 / 10 / 10 / 10 / 10 / 10 / 10 / 10 / 10",
    "7 - X 4.6 4 X X X 2.4.5 / 9 / X X X X",
];

fn build_history(games: usize) -> (Vec<Game>, Vec<Frame>) {
    let mut all_games = Vec::with_capacity(games);
    let mut all_frames = Vec::with_capacity(games * 10);

    for i in 0..games {
        let (game, frames) = GameState::new(&format!("g{}", i), "bench")
            .apply_notation(LINES[i % LINES.len()])
            .and_then(|s| s.finish("s", GameMode::PracticeFull, i as u64))
            .unwrap();
        all_games.push(game);
        all_frames.extend(frames);
    }
    (all_games, all_frames)
}

fn bench_scoring(c: &mut Criterion) {
    let (games, frames) = build_history(500);
    let one_game = &frames[..10];

    let mut group = c.benchmark_group("scoring");

    group.bench_function("running_totals", |b| {
        b.iter(|| running_totals(black_box(one_game)))
    });

    group.bench_function("play_full_game", |b| {
        b.iter(|| {
            GameState::new("g", "p")
                .apply_notation(black_box(LINES[1]))
                .unwrap()
        })
    });

    group.bench_function("player_stats_500_games", |b| {
        b.iter(|| calculate_player_stats(black_box(&games), black_box(&frames)))
    });

    group.finish();
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
