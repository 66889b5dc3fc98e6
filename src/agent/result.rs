use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a search reports: the score of the root, the move that achieves it, and how many nodes were visited.
pub struct SearchResult
{
    pub score: i32,

    /// None when the root was not expanded: a zero-ply search, a decided game, or no legal move.
    pub best:  Option<Move>,
    pub nodes: u64,
}

impl std::fmt::Display for SearchResult
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self.best
        {
            | Some(mv) => write!(f, "bestmove {} score {} nodes {}", mv, self.score, self.nodes),
            | None => write!(f, "bestmove none score {} nodes {}", self.score, self.nodes),
        }
    }
}
