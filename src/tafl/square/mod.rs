use arrayvec::ArrayVec;

mod coord;
mod direction;

pub use coord::Coord;
pub use direction::Direction;

/// Represents a square on the board as a row-major index, counted from a1.
pub type Square = u8;

/// Values that fix the geometry of the board.
///
/// Every component derives its bounds from these, so the only hard assumption
/// is that the square count fits into a single bitboard register.
pub mod consts
{
    use super::Square;

    pub const SIDE: Square = 7;
    pub const SIZE: Square = SIDE * SIDE;
    const _SIZE_FITS: () = assert!(SIZE as u32 <= u64::BITS);

    /// The last row or column index.
    pub const EDGE: Square = SIDE - 1;

    /// The throne.
    pub const CENTER: Square = (SIDE / 2) * SIDE + SIDE / 2;
}

use consts::*;

#[inline]
/// Gets the row (rank index) of a square.
pub const fn row(square: Square) -> Square
{
    square / SIDE
}

#[inline]
/// Gets the column (file index) of a square.
pub const fn col(square: Square) -> Square
{
    square % SIDE
}

#[inline]
/// Builds a square from its row and column, if both are on the board.
pub const fn at(row: Square, col: Square) -> Option<Square>
{
    if row < SIDE && col < SIDE
    {
        Some(row * SIDE + col)
    }
    else
    {
        None
    }
}

#[inline]
/// Steps one square in the given direction, or returns None when that would leave the board.
pub fn step(square: Square, direction: Direction) -> Option<Square>
{
    let (dr, dc) = direction.offset();
    let r = row(square).checked_add_signed(dr)?;
    let c = col(square).checked_add_signed(dc)?;
    at(r, c)
}

#[inline]
/// Gets the on-board orthogonal neighbours of this square in direction order.
pub fn neighbours(square: Square) -> ArrayVec<Square, 4>
{
    Direction::all().into_iter().filter_map(|direction| step(square, direction)).collect()
}

#[inline]
/// Folds a square towards its nearest corner, returning the number of orthogonal steps needed to reach it.
pub fn corner_distance(square: Square) -> u8
{
    let fold = |x: Square| x.min(EDGE - x);
    fold(row(square)) + fold(col(square))
}
