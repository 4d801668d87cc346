use patolli::core::PieceId;
use patolli::game::{Game, GameBuilder};

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(20)
        .measurement_time(std::time::Duration::from_secs(2));
    targets =
        building_cross_game,
        computing_movable_pieces,
        playing_seeded_game,
}

/// Roll and take the first legal action until the game ends.
fn play_out(game: &mut Game) {
    while !game.is_game_over() && game.history().len() < 5_000 {
        if game.roll().unwrap_or(0) == 0 {
            continue;
        }
        if game.can_enter_new_piece() {
            let _ = game.enter_new_piece();
            game.next_turn_if_needed();
        } else if let Some(&piece) = game.movable_pieces().first() {
            let _ = game.move_piece(piece);
            game.next_turn_if_needed();
        } else {
            let _ = game.pass();
        }
    }
}

fn building_cross_game(c: &mut criterion::Criterion) {
    c.bench_function("build a seeded 16x16 cross game", |b| {
        b.iter(|| GameBuilder::new().seed(7).build())
    });
}

fn computing_movable_pieces(c: &mut criterion::Criterion) {
    let mut game = GameBuilder::new().seed(7).build().unwrap();
    for (id, index) in [(1u8, 12usize), (2, 25), (3, 41), (4, 57)] {
        let piece = patolli::core::PieceRef::new(game.current(), PieceId::new(id));
        let _ = game.edit().place(piece, index);
    }
    game.edit().set_roll(Some(3)).unwrap();
    c.bench_function("list movable pieces for a roll", |b| {
        b.iter(|| game.movable_pieces())
    });
}

fn playing_seeded_game(c: &mut criterion::Criterion) {
    c.bench_function("play a seeded game to completion", |b| {
        b.iter_batched(
            || GameBuilder::new().seed(2024).build().unwrap(),
            |mut game| {
                play_out(&mut game);
                game
            },
            criterion::BatchSize::SmallInput,
        )
    });
}
