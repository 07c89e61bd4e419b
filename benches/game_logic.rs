use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_legacy::core::{Board, GameState};
use tetris_legacy::types::{GameCommand, PieceKind};

fn bench_gravity_tick(c: &mut Criterion) {
    c.bench_function("gravity_tick", |b| {
        let mut state = GameState::new(12345);
        state.start();
        b.iter(|| {
            state.gravity_tick();
            black_box(state.score());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_full_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_erase_bottom_row(c: &mut Criterion) {
    c.bench_function("erase_bottom_row", |b| {
        let mut board = Board::new();
        b.iter(|| {
            board.erase_bottom_row();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    c.bench_function("rotate", |b| {
        let mut state = GameState::new(12345);
        state.start();
        b.iter(|| {
            state.apply(GameCommand::Rotate);
        })
    });
}

fn bench_ghost_row(c: &mut Criterion) {
    c.bench_function("ghost_row", |b| {
        let mut state = GameState::new(12345);
        state.start();
        b.iter(|| {
            black_box(state.ghost_row());
        })
    });
}

criterion_group!(
    benches,
    bench_gravity_tick,
    bench_line_clear,
    bench_erase_bottom_row,
    bench_rotate,
    bench_ghost_row
);
criterion_main!(benches);
