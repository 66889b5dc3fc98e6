use lazy_static::lazy_static;
use regex::Regex;

use crate::prelude::*;

lazy_static! {
    /// Either `k<to>` for the king or `<from><to>` for anything else, e.g. `kd4` or `c3c2`.
    static ref MOVE: Regex = Regex::new(r"^(k(?<king>[a-z][0-9]+)|(?<from>[a-z][0-9]+)(?<to>[a-z][0-9]+))$").unwrap();
}

#[derive(Clone, Copy, Debug, Eq)]
/// A single orthogonal step by one piece.
pub struct Move
{
    pub from: Square,
    pub to:   Square,

    /// Whether the king is the piece moving, which saves looking it up when the move is applied.
    pub king: bool,
}

impl PartialEq for Move
{
    /// There is only one king, so the origin of a king move carries no information.
    fn eq(&self, other: &Self) -> bool
    {
        self.to == other.to && self.king == other.king && (self.king || self.from == other.from)
    }
}

impl std::hash::Hash for Move
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H)
    {
        self.to.hash(state);
        self.king.hash(state);
        if !self.king
        {
            self.from.hash(state);
        }
    }
}

impl std::fmt::Display for Move
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self.king
        {
            | true => write!(f, "k{}", Coord::from(self.to)),
            | false => write!(f, "{}{}", Coord::from(self.from), Coord::from(self.to)),
        }
    }
}

impl FromStr for Move
{
    type Err = Error;

    /// Parses a move without a board. A king move has no origin, so `from` is set to the destination;
    /// equality ignores it, and `Board::check` recovers the real one.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let s = s.trim();
        let Some(caps) = MOVE.captures(s)
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let parse_square = |name: &str| -> Result<Square> {
            let coord = caps[name].parse::<Coord>().map_err(|err| err.chain_parse::<Move>(s.into()))?;
            Ok(Square::from(coord))
        };

        if caps.name("king").is_some()
        {
            let to = parse_square("king")?;
            return Ok(Move { from: to, to, king: true });
        }

        let from = parse_square("from")?;
        let to = parse_square("to")?;

        if Direction::to(from, to).is_none()
        {
            let err = Error::new(Kind::ParseError, format!("{} and {} are not orthogonal neighbours.", Coord::from(from), Coord::from(to)));
            return Err(err.chain_parse::<Self>(s.into()));
        }

        Ok(Move { from, to, king: false })
    }
}
