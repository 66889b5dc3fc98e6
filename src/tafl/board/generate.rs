use crate::{prelude::*, tafl::square::consts::SIZE};

/// A lazy, single-pass iterator over the legal moves of the side to move.
///
/// Squares are scanned in index order and each piece tries its directions in `Direction::all()` order,
/// so two generators over the same board always agree on the order. Moves are single orthogonal steps
/// onto empty squares; only the king may step onto a corner or the throne.
pub struct MoveGenerator<'a>
{
    board:     &'a Board,
    movers:    Bitboard,
    blocked:   Bitboard,
    square:    Square,
    direction: usize,
}

impl<'a> MoveGenerator<'a>
{
    pub(super) fn new(board: &'a Board) -> Self
    {
        MoveGenerator {
            board,
            movers: board.pieces(board.to_move()),
            blocked: board.occupied(),
            square: 0,
            direction: 0,
        }
    }

    /// Finds the next destination of the piece under the cursor, advancing through its directions.
    fn next_destination(&mut self, from: Square, king: bool) -> Option<Square>
    {
        let directions = Direction::all();
        while let Some(direction) = directions.get(self.direction)
        {
            self.direction += 1;

            let Some(to) = square::step(from, *direction)
            else
            {
                continue;
            };

            if self.blocked.contains(to)
            {
                continue;
            }

            if !king && self.board.restricted().contains(to)
            {
                continue;
            }

            return Some(to);
        }
        None
    }
}

impl<'a> Iterator for MoveGenerator<'a>
{
    type Item = Move;
    fn next(&mut self) -> Option<Move>
    {
        while self.square < SIZE
        {
            let from = self.square;
            if self.movers.contains(from)
            {
                let king = self.board.king().contains(from);
                if let Some(to) = self.next_destination(from, king)
                {
                    return Some(Move { from, to, king });
                }
            }

            self.square += 1;
            self.direction = 0;
        }
        None
    }
}
