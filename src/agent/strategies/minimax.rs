use super::*;

#[derive(Clone, Copy, Debug, Default)]
/// Plain minimax: every node down to the horizon is visited.
pub struct Minimax;

impl Strategy for Minimax
{
    fn name(&self) -> &'static str
    {
        "minimax"
    }

    fn search(&self, board: &Board, depth: Depth) -> SearchResult
    {
        let mut nodes = 0;
        let (score, best) = match board.to_move()
        {
            | Side::Attacker => Self::maximize(board, depth, &mut nodes),
            | Side::Defender => Self::minimize(board, depth, &mut nodes),
        };

        SearchResult { score, best, nodes }
    }
}

impl Minimax
{
    /// The attacker picks the child with the highest score, keeping the first on ties.
    fn maximize(board: &Board, depth: Depth, nodes: &mut u64) -> (i32, Option<Move>)
    {
        *nodes += 1;

        if let Some(score) = leaf(board, depth)
        {
            return (score, None);
        }

        let mut best: Option<(i32, Move)> = None;
        for mv in board.generate_moves()
        {
            let child = board.apply(&mv);
            let (score, _) = Self::minimize(&child, depth.shallower(), nodes);

            if best.map_or(true, |(best_score, _)| score > best_score)
            {
                best = Some((score, mv));
            }
        }

        match best
        {
            | Some((score, mv)) => (score, Some(mv)),
            | None => (stalemate(board, depth), None),
        }
    }

    /// The defender picks the child with the lowest score, keeping the first on ties.
    fn minimize(board: &Board, depth: Depth, nodes: &mut u64) -> (i32, Option<Move>)
    {
        *nodes += 1;

        if let Some(score) = leaf(board, depth)
        {
            return (score, None);
        }

        let mut best: Option<(i32, Move)> = None;
        for mv in board.generate_moves()
        {
            let child = board.apply(&mv);
            let (score, _) = Self::maximize(&child, depth.shallower(), nodes);

            if best.map_or(true, |(best_score, _)| score < best_score)
            {
                best = Some((score, mv));
            }
        }

        match best
        {
            | Some((score, mv)) => (score, Some(mv)),
            | None => (stalemate(board, depth), None),
        }
    }
}
