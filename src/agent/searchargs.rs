use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// The tree walks the engine knows.
pub enum Algorithm
{
    /// Visits the whole tree down to the horizon.
    Minimax,

    /// Same answer as minimax, fewer nodes.
    #[default]
    AlphaBeta,
}

impl std::fmt::Display for Algorithm
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let repr = match self
        {
            | Self::Minimax => "minimax",
            | Self::AlphaBeta => "alphabeta",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for Algorithm
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "minimax" => Ok(Self::Minimax),
            | "alphabeta" | "alpha-beta" => Ok(Self::AlphaBeta),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Options with which the user can control a search.
pub struct SearchArgs
{
    pub depth:     Depth,
    pub algorithm: Algorithm,
}

impl Default for SearchArgs
{
    fn default() -> Self
    {
        SearchArgs {
            depth:     Depth::new(4),
            algorithm: Algorithm::default(),
        }
    }
}

impl SearchArgs
{
    /// Tries to parse args such as `depth 5 minimax` into a set of search options.
    ///
    /// Anything not given keeps its value from `defaults`.
    pub fn parse(args: &[&str], defaults: SearchArgs) -> Result<SearchArgs>
    {
        let base = Error::for_parse::<Self>(args.join(" "));
        let mut parsed = defaults;
        let mut args = args.iter();

        while let Some(arg) = args.next()
        {
            match *arg
            {
                | "depth" =>
                {
                    let Some(value) = args.next()
                    else
                    {
                        let err = Error::new(Kind::ParseError, "The depth option requires a number of plies.".into());
                        return Err(err.chain(base));
                    };
                    parsed.depth = value.parse::<Depth>().map_err(|err| err.chain(base.clone()))?;
                }
                | other =>
                {
                    parsed.algorithm = other.parse::<Algorithm>().map_err(|err| err.chain(base.clone()))?;
                }
            }
        }

        Ok(parsed)
    }
}
