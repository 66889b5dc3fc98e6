use super::consts::*;
use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A (row, column) view of a square, which prints in algebraic form such as `c3`.
pub struct Coord
{
    pub row: u8,
    pub col: u8,
}

impl Coord
{
    /// The file letter of this coordinate.
    pub fn file(&self) -> char
    {
        (b'a' + self.col) as char
    }

    /// The 1-based rank number of this coordinate.
    pub fn rank(&self) -> u8
    {
        self.row + 1
    }
}

impl std::fmt::Display for Coord
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl From<Square> for Coord
{
    fn from(square: Square) -> Self
    {
        Coord {
            row: square::row(square),
            col: square::col(square),
        }
    }
}

impl From<Coord> for Square
{
    fn from(value: Coord) -> Square
    {
        value.row * SIDE + value.col
    }
}

impl FromStr for Coord
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let mut chars = s.chars();
        let Some(file) = chars.next().filter(|ch| ch.is_ascii_lowercase())
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        // Only the digits Display writes: no sign and no leading zero.
        let digits = chars.as_str();
        let canonical = digits.bytes().all(|b| b.is_ascii_digit()) && !digits.starts_with('0');
        let Some(rank) = digits.parse::<u8>().ok().filter(|_| canonical)
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let col = file as u8 - b'a';
        if rank == 0 || square::at(rank - 1, col).is_none()
        {
            let err = Error::new(Kind::ParseError, format!("{} is off the {}x{} board.", s, SIDE, SIDE));
            return Err(err.chain_parse::<Self>(s.into()));
        }

        Ok(Coord { row: rank - 1, col })
    }
}
