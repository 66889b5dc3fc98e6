use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The sides in a game of tafl.
///
/// The attackers hunt the king, the defenders escort it to a corner.
pub enum Side
{
    Attacker = 0,
    Defender = 1,
}

impl Side
{
    /// Gets the other side.
    pub fn flip(&self) -> Self
    {
        match self
        {
            | Self::Attacker => Self::Defender,
            | Self::Defender => Self::Attacker,
        }
    }

    /// Whether this side maximizes the evaluation.
    pub fn maximizing(&self) -> bool
    {
        *self == Self::Attacker
    }
}

impl std::fmt::Display for Side
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::Attacker => "Attacker",
            | Self::Defender => "Defender",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Side
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "Attacker" | "attacker" | "a" => Ok(Self::Attacker),
            | "Defender" | "defender" | "d" => Ok(Self::Defender),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
