use crate::prelude::*;

pub mod consts
{
    /// The score of a decided game in the attacker's favour, before the remaining depth is folded in.
    pub const WIN: i32 = 10_000;

    /// Wider than any score a search can produce.
    pub const INF: i32 = i32::MAX;
}

pub use consts::*;

/// Folds the remaining depth into a decided score, so that a win reached with more plies to spare
/// (that is, sooner) scores further from zero than the same win reached later.
///
/// Heuristic scores pass through unchanged.
pub fn embed(score: i32, remaining: Depth) -> i32
{
    let remaining = i32::from(remaining);
    if score >= WIN
    {
        score + remaining
    }
    else if score <= -WIN
    {
        score - remaining
    }
    else
    {
        score
    }
}

/// Whether a score describes a decided game.
pub fn is_decided(score: i32) -> bool
{
    score.abs() >= WIN
}

/// The decided score of a loss for the given side.
pub fn loss_for(side: Side) -> i32
{
    match side
    {
        | Side::Attacker => -WIN,
        | Side::Defender => WIN,
    }
}
