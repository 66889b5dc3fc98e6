use crate::prelude::*;

mod captures;
mod generate;
mod layout;
mod parse;
mod printers;
mod state;

pub use generate::MoveGenerator;
pub use layout::consts;
pub use state::GameState;

use consts::*;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
/// A complete tafl position.
///
/// Boards are plain values: applying a move derives a new board and leaves this one untouched,
/// so the search can hold one per stack frame without any undo bookkeeping.
pub struct Board
{
    /// The attacking pieces.
    attackers: Bitboard,

    /// The defending pieces, not including the king.
    defenders: Bitboard,

    /// The king, which is always exactly one square.
    king: Bitboard,

    /// The corners and the throne. This is geometry rather than state, but keeping it here lets
    /// the hostile-square checks stay in the same bitwise vocabulary as the pieces.
    restricted: Bitboard,

    /// Whether either side has won.
    state: GameState,

    /// The side whose turn it is.
    to_move: Side,
}

impl Default for Board
{
    fn default() -> Self
    {
        Board::new()
    }
}

impl Board
{
    /// Applies a move, returning the derived position.
    ///
    /// The move is trusted: it should come from this board's generator (or from `check`).
    /// Which piece moves is decided by the king flag, then by the set holding the origin.
    pub fn apply(&self, mv: &Move) -> Board
    {
        let mut next = *self;
        next.to_move = self.to_move.flip();
        next.state = GameState::InProgress;

        if mv.king || self.king.contains(mv.from)
        {
            next.king = Bitboard::from_square(mv.to);
            if CORNERS.contains(mv.to)
            {
                next.state = GameState::DefenderWins;
            }
            next.attackers = Self::captures(mv.to, next.attackers, next.defenders | next.king);
        }
        else if self.attackers.contains(mv.from)
        {
            next.attackers = self.attackers.without(mv.from).with(mv.to);
            next.defenders = Self::captures(mv.to, next.defenders, next.attackers);
            if next.king_surrounded()
            {
                next.state = GameState::AttackerWins;
            }
        }
        else if self.defenders.contains(mv.from)
        {
            next.defenders = self.defenders.without(mv.from).with(mv.to);
            next.attackers = Self::captures(mv.to, next.attackers, next.defenders | next.king);
        }
        else
        {
            let err = Error::new(Kind::InvalidMove, format!("There is no piece on {} to play {}.", Coord::from(mv.from), mv));
            panic!("{}", Error::holy_shit(err));
        }

        next
    }

    /// The attacking pieces.
    pub fn attackers(&self) -> Bitboard
    {
        self.attackers
    }

    /// Whether the attackers have captured the king.
    pub fn attacker_won(&self) -> bool
    {
        self.state == GameState::AttackerWins
    }

    /// Ensures a move is legal in the current position and returns the generated move it matches.
    ///
    /// Parsed king moves carry no origin, so the matched move is the one to apply.
    pub fn check(&self, mv: &Move) -> Result<Move>
    {
        if self.state.is_over()
        {
            return Err(Error::new(Kind::GameOver, format!("Cannot play {} because the game is over ({}).", mv, self.state)));
        }

        self.generate_moves().find(|legal| legal == mv).ok_or_else(|| {
            let hint = if !mv.king && self.king.contains(mv.from) { " The king moves as k<square>." } else { "" };
            Error::new(Kind::InvalidMove, format!("{} is not a legal move for the {}.{}", mv, self.to_move, hint))
        })
    }

    /// The defending pieces, not including the king.
    pub fn defenders(&self) -> Bitboard
    {
        self.defenders
    }

    /// Whether the king has reached a corner.
    pub fn defender_won(&self) -> bool
    {
        self.state == GameState::DefenderWins
    }

    /// Assembles a board from its parts, ensuring the occupancy sets are disjoint and there is exactly one king.
    pub fn from_parts(attackers: Bitboard, defenders: Bitboard, king: Bitboard, to_move: Side, state: GameState) -> Result<Board>
    {
        if !(attackers & defenders).is_empty() || !(attackers & king).is_empty() || !(defenders & king).is_empty()
        {
            return Err(Error::new(Kind::InvalidState, "A square cannot hold two pieces.".into()));
        }

        if king.count() != 1
        {
            return Err(Error::new(Kind::InvalidState, format!("Expected exactly one king, found {}.", king.count())));
        }

        Ok(Board {
            attackers,
            defenders,
            king,
            restricted: RESTRICTED,
            state,
            to_move,
        })
    }

    /// Lazily generates every legal move for the side to move.
    pub fn generate_moves(&self) -> MoveGenerator<'_>
    {
        MoveGenerator::new(self)
    }

    /// The king as a set.
    pub fn king(&self) -> Bitboard
    {
        self.king
    }

    /// Locates the king.
    ///
    /// A board without exactly one king is corrupt, so this panics rather than returning an error.
    pub fn king_square(&self) -> Square
    {
        match self.king.single()
        {
            | Some(square) => square,
            | None =>
            {
                let err = Error::new(Kind::InvalidState, format!("Expected exactly one king, found {}.", self.king.count()));
                panic!("{}", Error::holy_shit(err))
            }
        }
    }

    /// Returns the initial position of the 7x7 game.
    pub fn new() -> Board
    {
        Board {
            attackers:  INITIAL_ATTACKERS,
            defenders:  INITIAL_DEFENDERS,
            king:       INITIAL_KING,
            restricted: RESTRICTED,
            state:      GameState::InProgress,
            to_move:    Side::Attacker,
        }
    }

    /// Every occupied square.
    pub fn occupied(&self) -> Bitboard
    {
        self.attackers | self.defenders | self.king
    }

    /// The pieces that belong to the given side. The king moves with the defenders.
    pub fn pieces(&self, side: Side) -> Bitboard
    {
        match side
        {
            | Side::Attacker => self.attackers,
            | Side::Defender => self.defenders | self.king,
        }
    }

    /// Ensures a move is legal, then applies it.
    pub fn play(&self, mv: &Move) -> Result<Board>
    {
        let legal = self.check(mv)?;
        Ok(self.apply(&legal))
    }

    /// The restricted squares (corners and throne).
    pub fn restricted(&self) -> Bitboard
    {
        self.restricted
    }

    /// Gets the current state of the game.
    pub fn state(&self) -> GameState
    {
        self.state
    }

    /// Gets the side to move.
    pub fn to_move(&self) -> Side
    {
        self.to_move
    }

    /// Returns the winner, if there is one.
    ///
    /// Besides the two win conditions, a side that has no legal move on its turn loses.
    pub fn winner(&self) -> Option<Side>
    {
        match self.state
        {
            | GameState::AttackerWins => Some(Side::Attacker),
            | GameState::DefenderWins => Some(Side::Defender),
            | GameState::InProgress => self.generate_moves().next().is_none().then(|| self.to_move.flip()),
        }
    }
}
