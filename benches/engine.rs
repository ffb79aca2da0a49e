use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_sokoban::core::{parse_levels, GridState};
use tui_sokoban::types::Direction;

const LEVEL: &str = "\
##########
#.B....P.#
#..@.B...#
#.P....B.#
#....P...#
##########";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_level", |b| {
        b.iter(|| parse_levels(black_box(LEVEL)).unwrap())
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let level = parse_levels(LEVEL).unwrap().remove(0);
    let mut grid = GridState::new(&level);

    let dirs = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];
    let mut i = 0;

    c.bench_function("apply_move", |b| {
        b.iter(|| {
            let dir = dirs[i % dirs.len()];
            i += 1;
            black_box(grid.apply_move(dir))
        })
    });
}

fn bench_win_check(c: &mut Criterion) {
    let level = parse_levels(LEVEL).unwrap().remove(0);
    let grid = GridState::new(&level);

    c.bench_function("is_won", |b| b.iter(|| black_box(grid.is_won())));
}

criterion_group!(benches, bench_parse, bench_apply_move, bench_win_check);
criterion_main!(benches);
