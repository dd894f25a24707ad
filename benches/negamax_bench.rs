use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe::{Board, BotInput, GameState, GameStatus, Mark, calculate_negamax_move};

fn bench_single_move_empty_board() {
    let input = BotInput {
        board: Board::new(),
        current_mark: Mark::X,
    };
    calculate_negamax_move(&input);
}

fn bench_single_move_mid_game() {
    use Mark::{Empty as E, O, X};
    let input = BotInput {
        board: Board::from_cells([X, X, E, E, O, E, E, E, O]),
        current_mark: O,
    };
    calculate_negamax_move(&input);
}

fn bench_full_self_play_game() {
    let mut state = GameState::new();
    while state.status() == GameStatus::InProgress {
        let input = BotInput {
            board: *state.board(),
            current_mark: state.current_mark(),
        };
        match calculate_negamax_move(&input) {
            Some(index) => {
                let mark = state.current_mark();
                let _ = state.place_mark(mark, index);
            }
            None => break,
        }
    }
}

fn negamax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("negamax");

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.bench_function("full_self_play_game", |b| {
        b.iter(bench_full_self_play_game)
    });

    group.finish();
}

criterion_group!(benches, negamax_bench);
criterion_main!(benches);
