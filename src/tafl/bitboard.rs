use std::ops::{BitAnd, BitOr};

use crate::prelude::*;

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
/// A set of squares packed into a single register, one bit per square in index order.
pub struct Bitboard(u64);

impl Bitboard
{
    /// The empty set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Builds a set from (row, column) pairs at compile time.
    pub const fn from_coords(coords: &[(u8, u8)]) -> Bitboard
    {
        let mut bits = 0u64;
        let mut i = 0;
        while i < coords.len()
        {
            let (row, col) = coords[i];
            bits |= 1u64 << (row * square::consts::SIDE + col);
            i += 1;
        }
        Bitboard(bits)
    }

    /// The set holding only the given square.
    pub const fn from_square(square: Square) -> Bitboard
    {
        Bitboard(1u64 << square)
    }

    /// Determines whether or not this set contains the given square.
    pub const fn contains(&self, square: Square) -> bool
    {
        (self.0 >> square) & 1 != 0
    }

    /// The number of squares in the set.
    pub const fn count(&self) -> u32
    {
        self.0.count_ones()
    }

    pub const fn is_empty(&self) -> bool
    {
        self.0 == 0
    }

    /// Iterates the squares in ascending index order.
    pub fn iter(&self) -> Squares
    {
        Squares(self.0)
    }

    /// Returns the only square in this set, if it holds exactly one.
    pub fn single(&self) -> Option<Square>
    {
        (self.count() == 1).then(|| self.0.trailing_zeros() as Square)
    }

    /// A copy of this set with the square added.
    pub const fn with(&self, square: Square) -> Bitboard
    {
        Bitboard(self.0 | (1u64 << square))
    }

    /// A copy of this set with the square removed.
    pub const fn without(&self, square: Square) -> Bitboard
    {
        Bitboard(self.0 & !(1u64 << square))
    }
}

impl std::fmt::Debug for Bitboard
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.debug_set().entries(self.iter().map(Coord::from).map(|c| c.to_string())).finish()
    }
}

impl BitAnd for Bitboard
{
    type Output = Bitboard;
    fn bitand(self, rhs: Self) -> Self::Output
    {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard
{
    type Output = Bitboard;
    fn bitor(self, rhs: Self) -> Self::Output
    {
        Bitboard(self.0 | rhs.0)
    }
}

impl IntoIterator for Bitboard
{
    type Item = Square;
    type IntoIter = Squares;
    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}

/// Pops squares off a bitboard, lowest index first.
pub struct Squares(u64);

impl Iterator for Squares
{
    type Item = Square;
    fn next(&mut self) -> Option<Square>
    {
        if self.0 == 0
        {
            return None;
        }

        let square = self.0.trailing_zeros() as Square;
        self.0 &= self.0 - 1;
        Some(square)
    }
}
