use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// An orthogonal direction on the board.
pub enum Direction
{
    North,
    East,
    South,
    West,
}

impl Direction
{
    #[inline]
    /// Returns a list of all directions in clockwise order, starting north.
    pub const fn all() -> [Direction; 4]
    {
        [Self::North, Self::East, Self::South, Self::West]
    }

    /// Returns the name of this direction.
    pub fn long(&self) -> &'static str
    {
        match self
        {
            | Self::North => "north",
            | Self::East => "east",
            | Self::South => "south",
            | Self::West => "west",
        }
    }

    /// The (row, column) offset of a single step. North is towards the higher ranks.
    pub const fn offset(&self) -> (i8, i8)
    {
        match self
        {
            | Self::North => (1, 0),
            | Self::East => (0, 1),
            | Self::South => (-1, 0),
            | Self::West => (0, -1),
        }
    }

    #[inline]
    /// If the two squares are neighbours, returns the direction to the target square.
    pub fn to(from: Square, to: Square) -> Option<Direction>
    {
        Direction::all().into_iter().find(|direction| square::step(from, *direction) == Some(to))
    }
}

impl std::fmt::Display for Direction
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.long())
    }
}
