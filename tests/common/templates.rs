use std::collections::HashSet;

use rand::{rngs::StdRng, seq::IteratorRandom, SeedableRng};
use taflmind::prelude::*;

/// Parses a board, failing the test with the parse error if it is malformed.
pub fn board(raw: &str) -> Board
{
    let possibly_board = raw.parse::<Board>();
    assert!(possibly_board.is_ok(), "\tdue to {}", possibly_board.unwrap_err());
    possibly_board.unwrap()
}

/// Parses a move string.
pub fn mv(raw: &str) -> Move
{
    let possibly_move = raw.parse::<Move>();
    assert!(possibly_move.is_ok(), "\tdue to {}", possibly_move.unwrap_err());
    possibly_move.unwrap()
}

/// Plays a sequence of moves, checking each against the generated moves.
pub fn play_all(start: Board, moves: &[&str]) -> Board
{
    moves.iter().fold(start, |board, raw| {
        let played = board.play(&mv(raw));
        assert!(played.is_ok(), "{} failed\n\tdue to {}", raw, played.unwrap_err());
        played.unwrap()
    })
}

/// The generated moves of a board, printed.
pub fn move_strings(board: &Board) -> Vec<String>
{
    board.generate_moves().map(|mv| mv.to_string()).collect()
}

/// The generated moves of a board, as a set.
pub fn move_set(board: &Board) -> HashSet<Move>
{
    board.generate_moves().collect()
}

/// Produces positions reached by seeded random playouts from the initial position.
pub fn random_positions(seed: u64, count: usize, plies: usize) -> Vec<Board>
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = Vec::with_capacity(count);

    for _ in 0 .. count
    {
        let mut board = Board::new();
        for _ in 0 .. plies
        {
            if board.winner().is_some()
            {
                break;
            }

            let Some(next) = board.generate_moves().choose(&mut rng)
            else
            {
                break;
            };
            board = board.apply(&next);
        }
        positions.push(board);
    }

    positions
}
