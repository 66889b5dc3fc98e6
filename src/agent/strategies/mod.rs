use crate::prelude::*;

mod alphabeta;
mod minimax;

pub use alphabeta::AlphaBeta;
pub use minimax::Minimax;

/// A policy for walking the game tree below a position.
///
/// Implementations recurse over derived boards, so the tree is never stored; each frame owns its own position.
pub trait Strategy
{
    /// A short name for logging.
    fn name(&self) -> &'static str;

    /// Searches the position to the given depth for the side to move.
    fn search(&self, board: &Board, depth: Depth) -> SearchResult;
}

/// The score of a node that is not expanded, because the game is decided or the horizon is reached.
fn leaf(board: &Board, depth: Depth) -> Option<i32>
{
    (board.state().is_over() || depth.is_horizon()).then(|| scores::embed(evaluate(board), depth))
}

/// The score of a node whose side to move has no legal move, and so loses.
fn stalemate(board: &Board, depth: Depth) -> i32
{
    scores::embed(scores::loss_for(board.to_move()), depth)
}
