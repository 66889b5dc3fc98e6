use crate::prelude::*;

/// Scores a position from the attacker's point of view: positive favours the attackers, negative the defenders.
///
/// A decided game scores `WIN` or `-WIN` outright. Otherwise the attackers count their material plus their
/// grip on the king, and the defenders count theirs (the king being worth one piece) plus how close the
/// king stands to a corner.
pub fn evaluate(board: &Board) -> i32
{
    match board.state()
    {
        | GameState::AttackerWins => WIN,
        | GameState::DefenderWins => -WIN,
        | GameState::InProgress =>
        {
            let attackers = board.attackers().count() as i32 + king_pressure(board) as i32;
            let defenders = board.defenders().count() as i32 + 1;
            attackers - defenders - king_distance(board) as i32
        }
    }
}

/// The number of attackers orthogonally adjacent to the king.
pub fn king_pressure(board: &Board) -> u32
{
    let king = board.king_square();
    square::neighbours(king).into_iter().filter(|adjacent| board.attackers().contains(*adjacent)).count() as u32
}

/// The number of orthogonal steps between the king and its nearest corner.
pub fn king_distance(board: &Board) -> u32
{
    square::corner_distance(board.king_square()) as u32
}
