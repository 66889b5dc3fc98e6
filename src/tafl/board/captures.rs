use crate::prelude::*;

impl Board
{
    /// Removes every victim that the piece now standing on `to` flanks against another captor.
    ///
    /// Only the mover's arrival is considered, so a piece that walks between two enemies survives.
    pub(super) fn captures(to: Square, victims: Bitboard, captors: Bitboard) -> Bitboard
    {
        let mut survivors = victims;

        for direction in Direction::all()
        {
            let Some(adjacent) = square::step(to, direction)
            else
            {
                continue;
            };

            if !victims.contains(adjacent)
            {
                continue;
            }

            // The far side must exist; the board edge does not capture ordinary pieces.
            if let Some(beyond) = square::step(adjacent, direction)
            {
                if captors.contains(beyond)
                {
                    log::trace!("{} captured heading {} from {}", Coord::from(adjacent), direction, Coord::from(to));
                    survivors = survivors.without(adjacent);
                }
            }
        }

        survivors
    }

    /// Whether every side of the king is hostile: an attacker, a restricted square, or the edge of the board.
    pub fn king_surrounded(&self) -> bool
    {
        let king = self.king_square();
        let hostile = self.attackers | self.restricted;

        Direction::all().into_iter().all(|direction| match square::step(king, direction)
        {
            | Some(adjacent) => hostile.contains(adjacent),
            | None => true,
        })
    }
}
