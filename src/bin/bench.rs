use anyhow::Result;
use conway_grid::{Grid, NiceInt, Traversal};
use log::info;
use std::time::Instant;

const SIDE: usize = 1 << 10;
const GENERATIONS: u64 = 100;
const SEED: u64 = 42;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let initial = Grid::random(SIDE, SIDE, Some(SEED))?;
    let mut results = vec![];
    for traversal in [Traversal::Sequential, Traversal::Parallel] {
        let mut grid = initial.clone();
        let timer = Instant::now();
        grid.update(GENERATIONS, traversal);
        info!(
            "{:?}: {} generations in {:?}, population {}",
            traversal,
            GENERATIONS,
            timer.elapsed(),
            NiceInt::from_usize(grid.population())
        );
        results.push(grid);
    }
    anyhow::ensure!(
        results[0] == results[1],
        "Sequential and parallel updates diverged"
    );

    // small field printed for a visual check
    let mut small = Grid::random(12, 24, Some(SEED))?;
    small.update(GENERATIONS, Traversal::Sequential);
    println!("{}", small.statistics());
    print!("{}", small);
    Ok(())
}
