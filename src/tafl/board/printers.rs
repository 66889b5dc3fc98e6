use itertools::Itertools;

use crate::{
    prelude::*,
    tafl::square::consts::{EDGE, SIDE},
};

impl Board
{
    /// The character drawn for a square.
    pub(super) fn glyph(&self, square: Square) -> char
    {
        if self.attackers.contains(square)
        {
            'A'
        }
        else if self.defenders.contains(square)
        {
            'D'
        }
        else if self.king.contains(square)
        {
            'K'
        }
        else if self.restricted.contains(square)
        {
            '+'
        }
        else
        {
            '.'
        }
    }

    /// Standard debug.
    fn debug(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(
            f,
            "Board {{ {:?}, {:?}, {:?}, {:?}, {:?} }}",
            self.attackers, self.defenders, self.king, self.state, self.to_move
        )
    }

    /// Writes the grid, highest rank first, with the files labelled underneath and a status line.
    fn grid(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let width = SIDE.to_string().len();

        for row in (0 ..= EDGE).rev()
        {
            let cells = (0 .. SIDE).filter_map(|col| square::at(row, col)).map(|sq| self.glyph(sq)).join(" ");
            writeln!(f, "{:>width$} {}", row + 1, cells)?;
        }

        let files = (0 .. SIDE).map(|col| Coord { row: 0, col }.file()).join(" ");
        writeln!(f, "{:>width$} {}", "", files)?;
        write!(f, "{};{}", self.state, self.to_move)
    }
}

impl std::fmt::Debug for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        if f.alternate()
        {
            self.grid(f)
        }
        else
        {
            self.debug(f)
        }
    }
}

impl std::fmt::Display for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        self.grid(f)
    }
}
