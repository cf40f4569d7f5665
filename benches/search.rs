use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tictactoe_engine::core::{Board, GameRng, Player};
use tictactoe_engine::policy::{select_move, Difficulty};
use tictactoe_engine::search::{best_move, minimax};

fn positions() -> Vec<(&'static str, Board)> {
    ["_________", "X________", "X___O___X"]
        .into_iter()
        .map(|text| (text, text.parse::<Board>().expect("valid board")))
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for (name, board) in positions() {
        let to_move = if board.count(Player::X) > board.count(Player::O) {
            Player::O
        } else {
            Player::X
        };

        group.bench_with_input(BenchmarkId::new("alphabeta", name), &board, |b, board| {
            b.iter(|| best_move(black_box(board), 9, to_move))
        });
        group.bench_with_input(BenchmarkId::new("minimax", name), &board, |b, board| {
            b.iter(|| minimax(black_box(board), 9, to_move))
        });
    }

    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let board: Board = "X________".parse().expect("valid board");
    let mut group = c.benchmark_group("select");

    for difficulty in Difficulty::ALL {
        let mut rng = GameRng::new(42);
        group.bench_function(difficulty.name(), |b| {
            b.iter(|| select_move(black_box(&board), difficulty, &mut rng))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_search, bench_select);
criterion_main!(benches);
