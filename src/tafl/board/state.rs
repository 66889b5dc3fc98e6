use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Represents the current state of the game.
pub enum GameState
{
    InProgress,
    AttackerWins,
    DefenderWins,
}

impl GameState
{
    /// Whether a win condition has been reached.
    pub fn is_over(&self) -> bool
    {
        *self != Self::InProgress
    }
}

impl std::fmt::Display for GameState
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let repr = match self
        {
            | Self::InProgress => "InProgress",
            | Self::AttackerWins => "AttackerWins",
            | Self::DefenderWins => "DefenderWins",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for GameState
{
    type Err = Error;
    fn from_str(s: &str) -> std::prelude::v1::Result<Self, Self::Err>
    {
        match s
        {
            | "InProgress" => Ok(Self::InProgress),
            | "AttackerWins" => Ok(Self::AttackerWins),
            | "DefenderWins" => Ok(Self::DefenderWins),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
