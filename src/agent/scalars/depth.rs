use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// The number of plies left to search.
pub struct Depth(u8);

impl From<u8> for Depth
{
    fn from(value: u8) -> Self
    {
        Depth::new(value)
    }
}

impl From<Depth> for i32
{
    fn from(value: Depth) -> Self
    {
        value.0 as i32
    }
}

impl Depth
{
    /// Zero plies; the horizon.
    pub const NIL: Depth = Depth::new(0);

    /// One ply.
    pub const PLY: Depth = Depth::new(1);

    /// The deepest search the engine accepts. The tree is walked by recursion, so this also bounds the stack.
    pub const MAX: Depth = Depth::new(32);

    /// Whether there is nothing left to search.
    pub const fn is_horizon(&self) -> bool
    {
        self.0 == 0
    }

    /// Constructs a new depth.
    pub const fn new(plies: u8) -> Depth
    {
        Depth(plies)
    }

    /// One ply shallower, stopping at the horizon.
    pub const fn shallower(&self) -> Depth
    {
        Depth(self.0.saturating_sub(1))
    }

    /// Whether or not this depth is within the accepted range.
    pub const fn valid(&self) -> bool
    {
        self.0 <= Self::MAX.0
    }
}

impl std::fmt::Display for Depth
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Depth
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let Ok(depth) = s.parse::<u8>().map(Depth::from)
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        if !depth.valid()
        {
            let err = Error::new(Kind::InvalidOption, format!("The deepest search is {} plies.", Self::MAX));
            return Err(err.chain_parse::<Self>(s.into()));
        }

        Ok(depth)
    }
}
