use super::*;

#[derive(Clone, Copy, Debug, Default)]
/// Minimax with alpha-beta pruning.
///
/// Alpha is the score the attacker is already guaranteed on the current path, beta the score the defender is.
/// Pruning only skips siblings that cannot change the root, so the root move and score always match `Minimax`.
pub struct AlphaBeta;

impl Strategy for AlphaBeta
{
    fn name(&self) -> &'static str
    {
        "alphabeta"
    }

    fn search(&self, board: &Board, depth: Depth) -> SearchResult
    {
        let mut nodes = 0;
        let (score, best) = match board.to_move()
        {
            | Side::Attacker => Self::maximize(board, depth, -INF, INF, &mut nodes),
            | Side::Defender => Self::minimize(board, depth, -INF, INF, &mut nodes),
        };

        SearchResult { score, best, nodes }
    }
}

impl AlphaBeta
{
    fn maximize(board: &Board, depth: Depth, mut a: i32, b: i32, nodes: &mut u64) -> (i32, Option<Move>)
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
            let (score, _) = Self::minimize(&child, depth.shallower(), a, b, nodes);

            if best.map_or(true, |(best_score, _)| score > best_score)
            {
                best = Some((score, mv));
            }

            // Beta-cutoff: the defender would never let the game reach this node.
            if score >= b
            {
                break;
            }

            a = a.max(score);
        }

        match best
        {
            | Some((score, mv)) => (score, Some(mv)),
            | None => (stalemate(board, depth), None),
        }
    }

    fn minimize(board: &Board, depth: Depth, a: i32, mut b: i32, nodes: &mut u64) -> (i32, Option<Move>)
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
            let (score, _) = Self::maximize(&child, depth.shallower(), a, b, nodes);

            if best.map_or(true, |(best_score, _)| score < best_score)
            {
                best = Some((score, mv));
            }

            // Alpha-cutoff: the attacker already has something better elsewhere.
            if score <= a
            {
                break;
            }

            b = b.min(score);
        }

        match best
        {
            | Some((score, mv)) => (score, Some(mv)),
            | None => (stalemate(board, depth), None),
        }
    }
}
