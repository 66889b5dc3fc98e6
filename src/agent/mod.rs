use std::time::Instant;

use crate::prelude::*;

pub mod evaluate;
pub mod result;
pub mod scalars;
pub mod searchargs;
pub mod strategies;

pub use evaluate::*;
pub use result::*;
pub use scalars::*;
pub use searchargs::*;
pub use strategies::*;

/// Searches the position with the algorithm and depth in `args`, and logs a summary.
pub fn search(board: &Board, args: SearchArgs) -> SearchResult
{
    let strategy: &dyn Strategy = match args.algorithm
    {
        | Algorithm::Minimax => &Minimax,
        | Algorithm::AlphaBeta => &AlphaBeta,
    };

    let start_time = Instant::now();
    let result = strategy.search(board, args.depth);
    let time_elapsed = start_time.elapsed();

    let best = result.best.map(|mv| mv.to_string()).unwrap_or_else(|| "none".into());
    log::debug!("{} found {: ^6}: scored {: >6} at depth {}", strategy.name(), best, result.score, args.depth);
    log::debug!(
        "visited {:09} nodes in {: >5.2}s ({: >8} N/s)",
        result.nodes,
        time_elapsed.as_secs_f64(),
        (result.nodes as f64 / time_elapsed.as_secs_f64().max(f64::EPSILON)).floor() as u64
    );

    result
}
