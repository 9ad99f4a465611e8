use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use snake_core::*;
use std::hint::black_box;

/// Sweeps the board row by row until the snake runs into the bottom wall or itself.
fn play_until_over(seed: u64) -> (Score, CellCount) {
    let config = GameConfig::DEFAULT;
    let mut engine = PlayEngine::new(config, RandomFoodPlacer::new(seed), 0);
    engine.start();

    let mut ticks = 0u32;
    while engine.is_running() && ticks < 10_000 {
        let head = engine.state().snake().head();
        let direction = engine.state().direction();
        let turn = match direction {
            Direction::Right if head.x + 1 == config.grid.cols => Some(Direction::Down),
            Direction::Left if head.x == 0 => Some(Direction::Down),
            Direction::Down if head.x == 0 => Some(Direction::Right),
            Direction::Down => Some(Direction::Left),
            _ => None,
        };
        if let Some(turn) = turn {
            engine.set_direction(turn);
        }
        black_box(engine.tick());
        ticks += 1;
    }

    (engine.score(), engine.state().snake().len())
}

fn bench_ticks(c: &mut Criterion) {
    c.bench_function("tick/serpentine_game", |b| {
        b.iter_batched(
            || 0xC0FFEE_u64,
            |seed| play_until_over(black_box(seed)),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("tick/single_move", |b| {
        b.iter_batched(
            || {
                let mut engine = PlayEngine::new(GameConfig::DEFAULT, RandomFoodPlacer::new(1), 0);
                engine.start();
                engine
            },
            |mut engine| black_box(engine.tick()),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_ticks);
criterion_main!(benches);
