/// The fixed geometry and starting layout of the 7x7 game.
pub mod consts
{
    use crate::prelude::*;
    use crate::tafl::square::consts::{EDGE, SIDE};

    /// The four corners, which the king escapes to.
    pub const CORNERS: Bitboard = Bitboard::from_coords(&[(0, 0), (0, EDGE), (EDGE, 0), (EDGE, EDGE)]);

    /// The squares only the king may enter: the corners and the throne.
    pub const RESTRICTED: Bitboard = Bitboard::from_coords(&[(0, 0), (0, EDGE), (EDGE, 0), (EDGE, EDGE), (SIDE / 2, SIDE / 2)]);

    // Four arms of four attackers, one along each edge.
    pub const INITIAL_ATTACKERS: Bitboard = Bitboard::from_coords(&[
        (0, 2),
        (0, 3),
        (0, 4),
        (1, 3),
        (2, 0),
        (3, 0),
        (4, 0),
        (3, 1),
        (6, 2),
        (6, 3),
        (6, 4),
        (5, 3),
        (2, 6),
        (3, 6),
        (4, 6),
        (3, 5),
    ]);

    // A full ring around the throne.
    pub const INITIAL_DEFENDERS: Bitboard =
        Bitboard::from_coords(&[(2, 2), (2, 3), (2, 4), (3, 2), (3, 4), (4, 2), (4, 3), (4, 4)]);

    pub const INITIAL_KING: Bitboard = Bitboard::from_coords(&[(3, 3)]);
}
