use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    prelude::*,
    tafl::square::consts::{EDGE, SIDE},
};

lazy_static! {
    /// One rank of the grid: its number, then one glyph per file.
    static ref RANK: Regex = Regex::new(r"^(?<rank>[0-9]+)(?<cells>(\s+[ADK.+])+)$").unwrap();

    /// The trailing status line, such as `InProgress;Attacker`.
    static ref STATUS: Regex = Regex::new(r"^(?<state>[A-Za-z]+);(?<side>[A-Za-z]+)$").unwrap();
}

impl FromStr for Board
{
    type Err = Error;

    /// Parses the text written by `Display`. The status line is optional and defaults to the attacker to move.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let lines = s.lines().map(str::trim).filter(|line| !line.is_empty()).collect::<Vec<_>>();
        let side = SIDE as usize;

        if lines.len() < side + 1 || lines.len() > side + 2
        {
            let err = Error::new(Kind::ParseError, format!("Expected {} ranks, a file line and an optional status line.", side));
            return Err(err.chain_parse::<Self>(s.into()));
        }

        let (mut attackers, mut defenders, mut king) = (Bitboard::EMPTY, Bitboard::EMPTY, Bitboard::EMPTY);

        for (i, line) in lines[.. side].iter().enumerate()
        {
            let row = EDGE - i as Square;

            let Some(caps) = RANK.captures(line)
            else
            {
                log::trace!("Rank line didn't match regex.");
                return Err(Error::for_parse::<Self>(line.to_string()));
            };

            if caps["rank"].parse::<Square>().ok() != Some(row + 1)
            {
                let err = Error::new(Kind::ParseError, format!("Expected rank {}, found '{}'.", row + 1, &caps["rank"]));
                return Err(err.chain_parse::<Self>(s.into()));
            }

            let cells = caps["cells"].split_whitespace().collect::<Vec<_>>();
            if cells.len() != side
            {
                let err = Error::new(Kind::ParseError, format!("Rank {} has {} squares, expected {}.", row + 1, cells.len(), side));
                return Err(err.chain_parse::<Self>(s.into()));
            }

            for (col, cell) in cells.into_iter().enumerate()
            {
                let square = Square::from(Coord { row, col: col as Square });
                match cell
                {
                    | "A" => attackers = attackers.with(square),
                    | "D" => defenders = defenders.with(square),
                    | "K" => king = king.with(square),
                    | _ =>
                    {}
                }
            }
        }

        let expected_files = (0 .. SIDE).map(|col| Coord { row: 0, col }.file().to_string()).collect::<Vec<_>>();
        if lines[side].split_whitespace().ne(expected_files.iter().map(String::as_str))
        {
            let err = Error::new(Kind::ParseError, format!("Expected the file labels '{}'.", expected_files.join(" ")));
            return Err(err.chain_parse::<Self>(s.into()));
        }

        let (state, to_move) = match lines.get(side + 1)
        {
            | Some(status) =>
            {
                let Some(caps) = STATUS.captures(status)
                else
                {
                    return Err(Error::for_parse::<Self>(status.to_string()));
                };
                let state = caps["state"].parse::<GameState>().map_err(|err| err.chain_parse::<Self>(s.into()))?;
                let to_move = caps["side"].parse::<Side>().map_err(|err| err.chain_parse::<Self>(s.into()))?;
                (state, to_move)
            }
            | None => (GameState::InProgress, Side::Attacker),
        };

        Board::from_parts(attackers, defenders, king, to_move, state).map_err(|err| err.chain_parse::<Self>(s.into()))
    }
}
