use adjudicator::*;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        listing_opening_moves,
        listing_midgame_moves,
        classifying_midgame_status,
        checking_midgame_legality,
}

/// Knight shuffles that never repeat three times, padded to a long game.
fn midgame() -> MoveHistory {
    let opening = "e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 d2d3 f8c5 c2c3 d7d6 b1d2 a7a6";
    let shuffle = "d2f1 c6e7 f1d2 e7c6 b2b3 a6a5 d2f1 c6e7 f1d2 e7c6 a2a3 h7h6";
    MoveHistory::from(format!("{} {}", opening, shuffle).as_str())
}

fn listing_opening_moves(c: &mut criterion::Criterion) {
    let history = MoveHistory::new();
    c.bench_function("list legal moves in the start position", |b| {
        b.iter(|| ChessRules.legal(&history))
    });
}

fn listing_midgame_moves(c: &mut criterion::Criterion) {
    let history = midgame();
    c.bench_function("list legal moves after 24 plies", |b| {
        b.iter(|| ChessRules.legal(&history))
    });
}

fn classifying_midgame_status(c: &mut criterion::Criterion) {
    let history = midgame();
    c.bench_function("classify the position after 24 plies", |b| {
        b.iter(|| ChessRules.status(&history))
    });
}

fn checking_midgame_legality(c: &mut criterion::Criterion) {
    let referee = Referee::new(ChessRules);
    let history = midgame();
    c.bench_function("check a candidate move after 24 plies", |b| {
        b.iter(|| referee.is_legal(&history, "e1g1"))
    });
}
